//! Property-based tests for the round-trip guarantees of the text format and of
//! object persistence.
//!
//! Generated strings avoid `/` since a string ending in `/` cannot be read back.

use proptest::prelude::*;
use prefsync::{deserialize, from_str, serialize, to_string, Describe, Result, Synch, Value};

fn roundtrip(value: &Value) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str(&serialized) {
            Ok(parsed) => *value == parsed,
            Err(e) => {
                eprintln!("Parse failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Write failed: {}", e);
            false
        }
    }
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.:,{}\\[\\]\"\\\\\n\t-]{0,16}"
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Num(f64::from(n))),
        prop::num::f64::NORMAL.prop_map(Value::Num),
        text().prop_map(Value::Str),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((text(), inner), 0..8)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

#[derive(Default, Debug, Clone, PartialEq)]
struct Entry {
    label: String,
    weight: f64,
    count: i32,
    pinned: bool,
}

impl Describe for Entry {
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
        synch.synch("label", &mut self.label)?;
        synch.synch("weight", &mut self.weight)?;
        synch.synch("count", &mut self.count)?;
        synch.synch("pinned", &mut self.pinned)?;
        Ok(())
    }
}

#[derive(Default, Debug, PartialEq)]
struct Catalog {
    title: String,
    featured: Option<Box<Entry>>,
    entries: Vec<Entry>,
}

impl Describe for Catalog {
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
        synch.synch("title", &mut self.title)?;
        synch.synch("featured", &mut self.featured)?;
        synch.synch("entries", &mut self.entries)?;
        Ok(())
    }
}

fn entry() -> impl Strategy<Value = Entry> {
    (text(), prop::num::f64::NORMAL, any::<i32>(), any::<bool>()).prop_map(
        |(label, weight, count, pinned)| Entry {
            label,
            weight,
            count,
            pinned,
        },
    )
}

fn catalog() -> impl Strategy<Value = Catalog> {
    (
        text(),
        proptest::option::of(entry().prop_map(Box::new)),
        prop::collection::vec(entry(), 0..6),
    )
        .prop_map(|(title, featured, entries)| Catalog {
            title,
            featured,
            entries,
        })
}

proptest! {
    #[test]
    fn prop_string(s in text()) {
        prop_assert!(roundtrip(&Value::Str(s)));
    }

    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&Value::Num(f64::from(n))));
    }

    #[test]
    fn prop_f64(n in prop::num::f64::NORMAL) {
        prop_assert!(roundtrip(&Value::Num(n)));
    }

    #[test]
    fn prop_value_tree(value in tree()) {
        prop_assert!(roundtrip(&value));
    }

    #[test]
    fn prop_catalog_roundtrip(mut original in catalog()) {
        let text = serialize(&mut original).unwrap();
        let mut restored = Catalog::default();
        prop_assert!(deserialize(&mut restored, &text).unwrap());
        prop_assert_eq!(restored, original);
    }

    #[test]
    fn prop_serialize_is_idempotent(mut original in catalog()) {
        let first = serialize(&mut original).unwrap();
        let second = serialize(&mut original).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_parser_never_panics(input in "\\PC{0,64}") {
        let _ = from_str(&input);
    }
}
