//! The [`Mode::Loading`] dispatcher.
//!
//! A [`Loader`] borrows the object it reads from and overwrites fields whose keys
//! it finds. The value tree itself is never modified.

use crate::synch::{CollectionSlot, Describe, Mode, OptionalSlot, Synch};
use crate::{Result, Value, ValueMap};

/// Reads fields out of a parsed object.
///
/// # Examples
///
/// ```rust
/// use prefsync::{value, Describe, Loader, Result, Synch};
///
/// #[derive(Default)]
/// struct Volume(f64);
///
/// impl Describe for Volume {
///     fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
///         synch.synch("volume", &mut self.0)?;
///         Ok(())
///     }
/// }
///
/// let doc = value!({ "volume": 0.25 });
/// let mut volume = Volume::default();
/// volume.describe(&mut Loader::from_value(&doc).unwrap()).unwrap();
/// assert_eq!(volume.0, 0.25);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Loader<'v> {
    context: &'v ValueMap,
}

impl<'v> Loader<'v> {
    pub fn new(context: &'v ValueMap) -> Self {
        Loader { context }
    }

    /// Binds to `value`, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`](crate::Error::TypeMismatch) for any other kind.
    pub fn from_value(value: &'v Value) -> Result<Self> {
        Ok(Loader::new(value.to_object()?))
    }

    fn load_child(stored: &Value, value: &mut dyn Describe) -> Result<()> {
        let mut child = Loader::from_value(stored)?;
        value.describe(&mut child)
    }
}

impl Synch for Loader<'_> {
    fn mode(&self) -> Mode {
        Mode::Loading
    }

    fn string(&mut self, key: &str, value: &mut String) -> Result<bool> {
        match self.context.get(key) {
            Some(stored) => {
                *value = stored.to_str()?.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn number(&mut self, key: &str, value: &mut f64) -> Result<bool> {
        match self.context.get(key) {
            Some(stored) => {
                *value = stored.to_number()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn boolean(&mut self, key: &str, value: &mut bool) -> Result<bool> {
        match self.context.get(key) {
            Some(stored) => {
                *value = stored.to_bool()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn object(&mut self, key: &str, value: &mut dyn Describe) -> Result<bool> {
        match self.context.get(key) {
            Some(stored) => {
                Self::load_child(stored, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn optional(&mut self, key: &str, slot: &mut dyn OptionalSlot) -> Result<bool> {
        let context = self.context;
        match context.get(key) {
            Some(Value::Absent) => {
                slot.clear();
                Ok(true)
            }
            Some(_) => slot.fill().synch_field(key, self),
            None => {
                slot.clear();
                Ok(false)
            }
        }
    }

    fn collection(&mut self, key: &str, items: &mut dyn CollectionSlot) -> Result<bool> {
        items.clear();
        let Some(stored) = self.context.get(key) else {
            return Ok(false);
        };
        for element in stored.to_array()? {
            Self::load_child(element, items.push_default())?;
        }
        Ok(true)
    }
}
