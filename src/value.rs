//! The tagged value tree that documents are written from and parsed into.
//!
//! [`Value`] has exactly six kinds: absence, string, number, boolean, array and
//! object. Arrays and objects own their children, so a value is always a tree.
//!
//! ## Creating Values
//!
//! ```rust
//! use prefsync::{Value, ValueMap};
//!
//! let absent = Value::make_absent();
//! let text = Value::make_string("hello");
//! let number = Value::from(42);
//! let object = Value::make_object(ValueMap::new());
//!
//! // Using the value! macro
//! use prefsync::value;
//! let obj = value!({
//!     "name": "Ann",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ## Extracting Values
//!
//! Checked accessors (`to_*`) fail with [`Error::TypeMismatch`] on the wrong kind;
//! optional accessors (`as_*`) return `None`.
//!
//! ```rust
//! use prefsync::{Error, Value};
//!
//! let value = Value::from("Ann");
//! assert_eq!(value.to_str().unwrap(), "Ann");
//! assert!(matches!(value.to_number(), Err(Error::TypeMismatch { .. })));
//! assert_eq!(value.as_f64(), None);
//! ```

use crate::{Error, Result, ValueMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node in the value tree.
///
/// All numbers share one double-precision representation. `Absent` stands for
/// both `null` and a missing member.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Absent,
    Str(String),
    Num(f64),
    Bool(bool),
    Array(Vec<Value>),
    Object(ValueMap),
}

impl Value {
    #[must_use]
    pub const fn make_absent() -> Self {
        Value::Absent
    }

    #[must_use]
    pub fn make_string(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    #[must_use]
    pub const fn make_number(number: f64) -> Self {
        Value::Num(number)
    }

    #[must_use]
    pub const fn make_bool(bit: bool) -> Self {
        Value::Bool(bit)
    }

    #[must_use]
    pub const fn make_array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    #[must_use]
    pub const fn make_object(members: ValueMap) -> Self {
        Value::Object(members)
    }

    /// Returns the name of this value's kind, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prefsync::Value;
    ///
    /// assert_eq!(Value::Absent.kind(), "null");
    /// assert_eq!(Value::from(true).kind(), "bool");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "null",
            Value::Str(_) => "string",
            Value::Num(_) => "number",
            Value::Bool(_) => "bool",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Num(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the string payload, or a type mismatch.
    pub fn to_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.kind())),
        }
    }

    /// Returns the number payload, or a type mismatch.
    pub fn to_number(&self) -> Result<f64> {
        match self {
            Value::Num(n) => Ok(*n),
            other => Err(Error::type_mismatch("number", other.kind())),
        }
    }

    /// Returns the boolean payload, or a type mismatch.
    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("bool", other.kind())),
        }
    }

    /// Returns the array elements, or a type mismatch.
    pub fn to_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("array", other.kind())),
        }
    }

    pub fn to_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("array", other.kind())),
        }
    }

    /// Returns the object members, or a type mismatch.
    pub fn to_object(&self) -> Result<&ValueMap> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(Error::type_mismatch("object", other.kind())),
        }
    }

    pub fn to_object_mut(&mut self) -> Result<&mut ValueMap> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(Error::type_mismatch("object", other.kind())),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.to_str().ok()
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.to_number().ok()
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.to_bool().ok()
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        self.to_array().ok()
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        self.to_object().ok()
    }

    /// Looks up a member of an object. Returns `None` for other kinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prefsync::value;
    ///
    /// let doc = value!({ "volume": 7 });
    /// assert_eq!(doc.get("volume").and_then(|v| v.as_f64()), Some(7.0));
    /// assert!(doc.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|members| members.get(key))
    }
}

/// Renders the value in the canonical indented text format.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Absent => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Num(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(members) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (k, v) in members {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any null, string, number, bool, array or object")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Num(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Num(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Num(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::Str(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Absent)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Absent)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut members = ValueMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    members.insert(key, value);
                }
                Ok(Value::Object(members))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Num(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}
