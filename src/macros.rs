/// Builds a [`Value`](crate::Value) tree from JSON-like literal syntax.
///
/// ```rust
/// use prefsync::{value, Value};
///
/// let doc = value!({
///     "name": "Ann",
///     "tags": ["a", "b"],
///     "spouse": null
/// });
/// assert_eq!(doc.get("spouse"), Some(&Value::Absent));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Absent
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Strings, numbers and any expression convertible into a value
    ($e:expr) => {
        $crate::Value::from($e)
    };
}
