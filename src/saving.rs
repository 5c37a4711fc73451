//! The [`Mode::Saving`] dispatcher.
//!
//! A [`Saver`] owns the object it is filling. Every field call inserts a freshly
//! built value under its key; nested objects get their own `Saver` whose result is
//! attached when their traversal finishes. A filled optional is saved exactly as
//! its contents would be. Fields are only read, never changed.

use crate::synch::{CollectionSlot, Describe, Mode, OptionalSlot, Synch};
use crate::{Result, Value, ValueMap};

/// Builds an object value from the fields a traversal visits.
///
/// # Examples
///
/// ```rust
/// use prefsync::{Describe, Result, Saver, Synch, Value};
///
/// struct Volume(f64);
///
/// impl Describe for Volume {
///     fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
///         synch.synch("volume", &mut self.0)?;
///         Ok(())
///     }
/// }
///
/// let mut saver = Saver::new();
/// Volume(0.5).describe(&mut saver).unwrap();
/// assert_eq!(saver.into_value().get("volume"), Some(&Value::Num(0.5)));
/// ```
#[derive(Debug, Default)]
pub struct Saver {
    context: ValueMap,
}

impl Saver {
    #[must_use]
    pub fn new() -> Self {
        Saver {
            context: ValueMap::new(),
        }
    }

    #[must_use]
    pub fn into_map(self) -> ValueMap {
        self.context
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.context)
    }

    fn save_child(value: &mut dyn Describe) -> Result<Value> {
        let mut child = Saver::new();
        value.describe(&mut child)?;
        Ok(child.into_value())
    }

    fn put(&mut self, key: &str, value: Value) {
        self.context.insert(key.to_string(), value);
    }
}

impl Synch for Saver {
    fn mode(&self) -> Mode {
        Mode::Saving
    }

    fn string(&mut self, key: &str, value: &mut String) -> Result<bool> {
        self.put(key, Value::Str(value.clone()));
        Ok(true)
    }

    fn number(&mut self, key: &str, value: &mut f64) -> Result<bool> {
        self.put(key, Value::Num(*value));
        Ok(true)
    }

    fn boolean(&mut self, key: &str, value: &mut bool) -> Result<bool> {
        self.put(key, Value::Bool(*value));
        Ok(true)
    }

    fn object(&mut self, key: &str, value: &mut dyn Describe) -> Result<bool> {
        let child = Self::save_child(value)?;
        self.put(key, child);
        Ok(true)
    }

    fn optional(&mut self, key: &str, slot: &mut dyn OptionalSlot) -> Result<bool> {
        match slot.get_mut() {
            Some(inner) => inner.synch_field(key, self),
            None => {
                self.put(key, Value::Absent);
                Ok(true)
            }
        }
    }

    fn collection(&mut self, key: &str, items: &mut dyn CollectionSlot) -> Result<bool> {
        let mut array = Vec::with_capacity(items.len());
        for index in 0..items.len() {
            if let Some(item) = items.item_mut(index) {
                array.push(Self::save_child(item)?);
            }
        }
        self.put(key, Value::Array(array));
        Ok(true)
    }
}
