//! # prefsync
//!
//! Duplication-free persistence for application state. A type lists its fields
//! **once**, in a [`Describe`] implementation, and that single listing drives both
//! saving to and loading from a JSON-like text format.
//!
//! ## Key Features
//!
//! - **One listing, every mode**: the same `describe` method saves, loads, and can
//!   drive a third, user-supplied mode such as a settings form
//! - **Forgiving loads**: missing keys leave fields at their current values, and a
//!   missing file is simply "nothing to load"
//! - **Nested state**: objects by value, optional values of any field shape
//!   (`Option<String>`, `Option<Box<T>>`, ...), and ordered collections
//!   (`Vec<T>`, `Vec<Box<T>>`)
//! - **Readable files**: tab-indented output, stable key order, byte-identical on
//!   repeated saves
//!
//! ## Quick Start
//!
//! ```rust
//! use prefsync::{deserialize, serialize, Describe, Result, Synch};
//!
//! #[derive(Default)]
//! struct Chapter {
//!     contents: String,
//!     author: String,
//! }
//!
//! impl Describe for Chapter {
//!     fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
//!         synch.synch("contents", &mut self.contents)?;
//!         synch.synch("author", &mut self.author)?;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Preferences {
//!     last_folder: String,
//!     last_open: u32,
//!     privileged: bool,
//!     info: Chapter,
//!     chapters: Vec<Chapter>,
//!     addenda: Vec<Box<Chapter>>,
//!     draft: Option<Box<Chapter>>,
//! }
//!
//! impl Describe for Preferences {
//!     fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
//!         synch.synch("last_folder", &mut self.last_folder)?;
//!         synch.synch("last_open", &mut self.last_open)?;
//!         synch.synch("privileged", &mut self.privileged)?;
//!         synch.object("info", &mut self.info)?;
//!         synch.synch("chapters", &mut self.chapters)?;
//!         synch.synch("addenda", &mut self.addenda)?;
//!         synch.synch("draft", &mut self.draft)?;
//!         Ok(())
//!     }
//! }
//!
//! let mut prefs = Preferences::default();
//! prefs.last_open = 3;
//! prefs.chapters.push(Chapter {
//!     contents: "Once upon a time".to_string(),
//!     author: "Ann".to_string(),
//! });
//!
//! let text = serialize(&mut prefs).unwrap();
//!
//! let mut restored = Preferences::default();
//! assert!(deserialize(&mut restored, &text).unwrap());
//! assert_eq!(restored.last_open, 3);
//! assert_eq!(restored.chapters[0].author, "Ann");
//! assert!(restored.draft.is_none());
//! ```
//!
//! ## Files
//!
//! [`save`] fails loudly when the destination cannot be written. [`load`] treats an
//! unreadable source as "nothing to load" and returns `Ok(false)`, leaving the
//! object untouched. Malformed text is an error for both.
//!
//! ## Working with Values
//!
//! The [`Value`] tree, [`Writer`] and [`Parser`] are usable on their own:
//!
//! ```rust
//! use prefsync::{from_str, to_string, value};
//!
//! let doc = value!({ "name": "Ann", "age": 30 });
//! let text = to_string(&doc).unwrap();
//! assert_eq!(text, "{\n\t\"name\": \"Ann\",\n\t\"age\": 30\n}");
//! assert_eq!(from_str(&text).unwrap(), doc);
//! ```
//!
//! See the [`format`] module for the exact text format and its quirks.

pub mod de;
pub mod error;
pub mod format;
pub mod loading;
pub mod macros;
pub mod map;
pub mod options;
pub mod saving;
pub mod ser;
pub mod synch;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use loading::Loader;
pub use map::ValueMap;
pub use options::{ArrayElements, ArrayIndent, FormatOptions};
pub use saving::Saver;
pub use ser::Writer;
pub use synch::{CollectionSlot, Describe, Field, Mode, OptionalSlot, Synch};
pub use value::Value;

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::{debug, trace};

/// Render a value tree as canonical text.
///
/// # Errors
///
/// Never fails for in-memory output in practice; the `Result` mirrors
/// [`to_writer`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, &FormatOptions::default())
}

/// Render a value tree as text with custom layout options.
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &Value, options: &FormatOptions) -> Result<String> {
    let mut writer = Writer::new(Vec::with_capacity(256), options.clone());
    writer.write_value(value, 0)?;
    String::from_utf8(writer.into_inner()).map_err(Error::custom)
}

/// Stream a value tree as canonical text into `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, value: &Value) -> Result<()> {
    let mut writer = Writer::new(writer, FormatOptions::default());
    writer.write_value(value, 0)?;
    writer.flush()
}

/// Parse one value from text.
///
/// Empty input parses as [`Value::Absent`].
///
/// # Examples
///
/// ```rust
/// use prefsync::{from_str, Value};
///
/// assert_eq!(from_str("[1, 2]").unwrap(), Value::from(vec![Value::from(1), Value::from(2)]));
/// ```
///
/// # Errors
///
/// Returns a syntax error (see [`Error::is_syntax`]) for malformed text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<Value> {
    from_str_with_options(text, &FormatOptions::default())
}

/// Parse one value from text with custom options.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(text: &str, options: &FormatOptions) -> Result<Value> {
    trace!(bytes = text.len(), "parsing document");
    Parser::with_options(text, options.clone()).parse_value()
}

/// Parse one value from an I/O stream.
///
/// Bytes that are not valid UTF-8 are read as U+FFFD.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or a syntax error for malformed text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Value> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&decode(&bytes))
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        debug!("replaced invalid UTF-8 in document");
    }
    text
}

/// Save an object's fields into a fresh object value.
///
/// # Errors
///
/// Propagates errors raised by the object's `describe` method.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T: Describe + ?Sized>(object: &mut T) -> Result<Value> {
    let mut saver = Saver::new();
    object.describe(&mut saver)?;
    Ok(saver.into_value())
}

/// Load an object's fields from a value tree.
///
/// Returns `Ok(false)` without touching `object` when `document` is
/// [`Value::Absent`].
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `document` is not an object or a stored value
/// does not fit its field. The object may then be partially loaded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T: Describe + ?Sized>(object: &mut T, document: &Value) -> Result<bool> {
    if document.is_absent() {
        debug!("empty document, nothing to load");
        return Ok(false);
    }
    object.describe(&mut Loader::from_value(document)?)?;
    Ok(true)
}

/// Serialize an object to canonical text.
///
/// The object is borrowed mutably because its single `describe` method also serves
/// loading; saving never changes it.
///
/// A string field ending in `/` does not survive a round trip: its closing
/// `/"` reads back as an escaped quote, so that field swallows the text after
/// it and later fields are not loaded. NaN and infinite floats are written as
/// `null`, so loading that field back fails with a type mismatch.
///
/// # Errors
///
/// Propagates errors raised by the object's `describe` method.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize<T: Describe + ?Sized>(object: &mut T) -> Result<String> {
    serialize_with_options(object, &FormatOptions::default())
}

/// Serialize an object to text with custom layout options.
///
/// # Errors
///
/// See [`serialize`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_with_options<T: Describe + ?Sized>(
    object: &mut T,
    options: &FormatOptions,
) -> Result<String> {
    to_string_with_options(&to_value(object)?, options)
}

/// Serialize an object, streaming the text into `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_to_writer<W, T>(writer: W, object: &mut T) -> Result<()>
where
    W: io::Write,
    T: Describe + ?Sized,
{
    to_writer(writer, &to_value(object)?)
}

/// Save an object to a file, replacing its contents.
///
/// The caveats of [`serialize`] apply: string fields must not end in `/` and
/// floats must be finite for the file to load back intact.
///
/// # Examples
///
/// ```rust,no_run
/// use prefsync::{save, Describe, Result, Synch};
///
/// struct Window { width: u32 }
///
/// impl Describe for Window {
///     fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
///         synch.synch("width", &mut self.width)?;
///         Ok(())
///     }
/// }
///
/// save(&mut Window { width: 800 }, "window.json").unwrap();
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save<T, P>(object: &mut T, path: P) -> Result<()>
where
    T: Describe + ?Sized,
    P: AsRef<Path>,
{
    save_with_options(object, path, &FormatOptions::default())
}

/// Save an object to a file with custom layout options.
///
/// # Errors
///
/// See [`save`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save_with_options<T, P>(object: &mut T, path: P, options: &FormatOptions) -> Result<()>
where
    T: Describe + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let document = to_value(object)?;

    let file = File::create(path).map_err(|e| {
        Error::io(&format!("could not write to {}: {}", path.display(), e))
    })?;
    let mut writer = Writer::new(BufWriter::new(file), options.clone());
    writer.write_value(&document, 0)?;
    writer.flush()?;

    debug!(path = %path.display(), "saved document");
    Ok(())
}

/// Load an object from text.
///
/// Returns `Ok(false)` and leaves `object` untouched when the text holds no value
/// (empty, whitespace only, or `null`).
///
/// # Errors
///
/// Returns a syntax error for malformed text and [`Error::TypeMismatch`] when a
/// stored value does not fit its field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn deserialize<T: Describe + ?Sized>(object: &mut T, text: &str) -> Result<bool> {
    deserialize_with_options(object, text, &FormatOptions::default())
}

/// Load an object from text with custom parsing options.
///
/// # Errors
///
/// See [`deserialize`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn deserialize_with_options<T: Describe + ?Sized>(
    object: &mut T,
    text: &str,
    options: &FormatOptions,
) -> Result<bool> {
    let document = from_str_with_options(text, options)?;
    from_value(object, &document)
}

/// Load an object from a file.
///
/// An unreadable file is not an error: the object is left untouched and
/// `Ok(false)` is returned, exactly as for an empty file. A readable file is
/// always parsed; bytes that are not valid UTF-8 are read as U+FFFD.
///
/// # Errors
///
/// See [`deserialize`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load<T, P>(object: &mut T, path: P) -> Result<bool>
where
    T: Describe + ?Sized,
    P: AsRef<Path>,
{
    load_with_options(object, path, &FormatOptions::default())
}

/// Load an object from a file with custom parsing options.
///
/// # Errors
///
/// See [`deserialize`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_with_options<T, P>(object: &mut T, path: P, options: &FormatOptions) -> Result<bool>
where
    T: Describe + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "nothing to load");
            return Ok(false);
        }
    };
    deserialize_with_options(object, &decode(&bytes), options)
}
