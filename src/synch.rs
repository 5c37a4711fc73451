//! One field listing, many modes.
//!
//! A persistable type implements [`Describe`] once: its `describe` method calls
//! `synch` for every field, always in the same
//! order. Whether that call writes the field out or reads it back depends on the
//! [`Synch`] implementation driving the traversal:
//!
//! - [`Saver`](crate::Saver) runs in [`Mode::Saving`] and builds a [`Value`](crate::Value)
//!   object from the fields.
//! - [`Loader`](crate::Loader) runs in [`Mode::Loading`] and overwrites fields from a
//!   parsed object.
//! - A presentation layer can add a third implementation reporting
//!   [`Mode::Presenting`] (for example one editable control per field) without any
//!   `describe` method changing.
//!
//! ## Field shapes
//!
//! | Rust field | Shape | Stored as |
//! |---|---|---|
//! | `String` | scalar | string |
//! | `bool` | scalar | bool |
//! | integers, `f32`, `f64` | scalar | number (converted with `as`) |
//! | `chrono::DateTime<Utc>` | scalar | RFC 3339 string |
//! | `T: Describe` | nested object, via [`Synch::object`] | object |
//! | `Box<T>` | same as `T` when `T: Describe` | object |
//! | `Option<T>` | optional owned value of any shape above | that shape, or `null` |
//! | `Vec<T>` | ordered collection | array of objects |
//!
//! Floats are written as-is, so a NaN or infinite field saves as `null` and the
//! next load of that key fails with a type mismatch.
//!
//! `Box<T>` is `Describe` whenever `T` is, so `Option<Box<T>>` and `Vec<Box<T>>`
//! work unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use prefsync::{deserialize, serialize, Describe, Result, Synch};
//!
//! #[derive(Default)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Describe for Person {
//!     fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
//!         synch.synch("name", &mut self.name)?;
//!         synch.synch("age", &mut self.age)?;
//!         Ok(())
//!     }
//! }
//!
//! let mut ann = Person { name: "Ann".to_string(), age: 30 };
//! let text = serialize(&mut ann).unwrap();
//! assert_eq!(text, "{\n\t\"name\": \"Ann\",\n\t\"age\": 30\n}");
//!
//! let mut copy = Person::default();
//! assert!(deserialize(&mut copy, &text).unwrap());
//! assert_eq!((copy.name.as_str(), copy.age), ("Ann", 30));
//! ```

use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// The operational intent of a traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Fields are overwritten from stored values.
    Loading,
    /// Fields are written into a fresh value tree.
    Saving,
    /// Fields are shown to (and edited by) a presentation layer.
    Presenting,
}

/// A type whose persistable shape is listed once and reused by every mode.
pub trait Describe {
    /// Visits every persistable field through `synch`, in a fixed order.
    ///
    /// # Errors
    ///
    /// Propagates whatever the driving [`Synch`] reports, typically a
    /// [`TypeMismatch`](crate::Error::TypeMismatch) while loading.
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()>;
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
        (**self).describe(synch)
    }
}

/// The per-mode field dispatcher.
///
/// Every method receives the field's key and a mutable reference to the field and
/// returns `Ok(true)` unless the mode is [`Mode::Loading`] and the key is missing
/// from the current object, in which case the field is left untouched (collections
/// excepted: they are always cleared when loading).
pub trait Synch {
    fn mode(&self) -> Mode;

    fn string(&mut self, key: &str, value: &mut String) -> Result<bool>;

    fn number(&mut self, key: &str, value: &mut f64) -> Result<bool>;

    fn boolean(&mut self, key: &str, value: &mut bool) -> Result<bool>;

    /// A nested object held by value.
    fn object(&mut self, key: &str, value: &mut dyn Describe) -> Result<bool>;

    /// An optional owned value, stored as `null` when empty. The contained
    /// value is dispatched through its own [`Field`] impl under the same key.
    fn optional(&mut self, key: &str, slot: &mut dyn OptionalSlot) -> Result<bool>;

    /// An ordered collection of objects.
    fn collection(&mut self, key: &str, items: &mut dyn CollectionSlot) -> Result<bool>;
}

impl dyn Synch + '_ {
    /// Dispatches `field` to the method matching its shape.
    ///
    /// This is the call `describe` implementations make once per field.
    pub fn synch<F: Field + ?Sized>(&mut self, key: &str, field: &mut F) -> Result<bool> {
        field.synch_field(key, self)
    }
}

/// Maps a Rust field type onto one of the [`Synch`] shapes.
pub trait Field {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool>;
}

impl<T: Describe> Field for T {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
        synch.object(key, self)
    }
}

impl Field for String {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
        synch.string(key, self)
    }
}

impl Field for bool {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
        synch.boolean(key, self)
    }
}

macro_rules! impl_number_field {
    ($($ty:ty),*) => {
        $(
            impl Field for $ty {
                fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
                    let mut wide = *self as f64;
                    let found = synch.number(key, &mut wide)?;
                    if found && synch.mode() != Mode::Saving {
                        *self = wide as $ty;
                    }
                    Ok(found)
                }
            }
        )*
    };
}

impl_number_field!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

/// Saved floats must be finite: NaN and infinities are written as `null`, which
/// no number field accepts on load.
impl Field for f64 {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
        synch.number(key, self)
    }
}

impl Field for DateTime<Utc> {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
        let mut text = self.to_rfc3339();
        let found = synch.string(key, &mut text)?;
        if found && synch.mode() != Mode::Saving {
            *self = DateTime::parse_from_rfc3339(&text)
                .map_err(|e| Error::invalid_field(key, e))?
                .with_timezone(&Utc);
        }
        Ok(found)
    }
}

impl<T: Field + Default> Field for Option<T> {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
        synch.optional(key, self)
    }
}

impl<T: Describe + Default> Field for Vec<T> {
    fn synch_field(&mut self, key: &str, synch: &mut dyn Synch) -> Result<bool> {
        synch.collection(key, self)
    }
}

/// Object-safe access to an optional owned value.
pub trait OptionalSlot {
    /// The current value, if any.
    fn get_mut(&mut self) -> Option<&mut dyn Field>;

    /// Replaces the content with a default value and returns it.
    fn fill(&mut self) -> &mut dyn Field;

    fn clear(&mut self);
}

impl<T: Field + Default> OptionalSlot for Option<T> {
    fn get_mut(&mut self) -> Option<&mut dyn Field> {
        self.as_mut().map(|inner| inner as &mut dyn Field)
    }

    fn fill(&mut self) -> &mut dyn Field {
        self.insert(T::default())
    }

    fn clear(&mut self) {
        *self = None;
    }
}

/// Object-safe access to an ordered collection of children.
pub trait CollectionSlot {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Describe>;

    /// Appends a freshly constructed child and returns it.
    fn push_default(&mut self) -> &mut dyn Describe;

    fn remove(&mut self, index: usize);

    fn clear(&mut self);
}

impl<T: Describe + Default> CollectionSlot for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Describe> {
        self.get_mut(index).map(|item| item as &mut dyn Describe)
    }

    fn push_default(&mut self) -> &mut dyn Describe {
        self.push(T::default());
        let last = Vec::len(self) - 1;
        &mut self[last]
    }

    fn remove(&mut self, index: usize) {
        if index < Vec::len(self) {
            Vec::remove(self, index);
        }
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
