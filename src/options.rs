//! Configuration options for writing and parsing documents.
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`ArrayIndent`]: How array elements are indented by the writer
//! - [`ArrayElements`]: Which array elements the parser reads back
//!
//! The defaults write byte-for-byte the layout existing preference files use
//! and read any element kind inside arrays.
//!
//! ## Examples
//!
//! ```rust
//! use prefsync::{to_string_with_options, value, ArrayIndent, FormatOptions};
//!
//! let doc = value!({ "outer": { "list": [{ "a": 1 }] } });
//!
//! let options = FormatOptions::new().with_array_indent(ArrayIndent::Nested);
//! let text = to_string_with_options(&doc, &options).unwrap();
//! assert!(text.contains("[\n\t\t\t{"));
//! assert!(!text.contains("\t\t\t\t{"));
//! ```

/// Indentation of array elements.
///
/// # Examples
///
/// ```rust
/// use prefsync::ArrayIndent;
///
/// assert_eq!(ArrayIndent::Doubled.tabs(3), 6);
/// assert_eq!(ArrayIndent::Nested.tabs(3), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrayIndent {
    /// Two tabs per depth level of the array, the historical layout.
    #[default]
    Doubled,
    /// One tab more than the array itself, matching object members.
    Nested,
}

impl ArrayIndent {
    /// Number of tabs placed before an element of an array written at `depth`.
    #[must_use]
    pub const fn tabs(self, depth: usize) -> usize {
        match self {
            ArrayIndent::Doubled => depth * 2,
            ArrayIndent::Nested => depth + 1,
        }
    }
}

/// Element kinds the parser accepts inside arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrayElements {
    /// Any value may appear as an element.
    #[default]
    Any,
    /// Only objects are read; the array ends at the first other character,
    /// which is consumed. Matches the historical reader.
    ObjectsOnly,
}

/// Options shared by the writer and the parser.
///
/// # Examples
///
/// ```rust
/// use prefsync::{ArrayElements, ArrayIndent, FormatOptions};
///
/// let options = FormatOptions::default();
/// assert_eq!(options.array_indent, ArrayIndent::Doubled);
/// assert_eq!(options.array_elements, ArrayElements::Any);
///
/// let legacy = FormatOptions::compatible();
/// assert_eq!(legacy.array_elements, ArrayElements::ObjectsOnly);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub array_indent: ArrayIndent,
    pub array_elements: ArrayElements,
}

impl FormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reproducing the historical writer and reader exactly.
    #[must_use]
    pub fn compatible() -> Self {
        FormatOptions {
            array_indent: ArrayIndent::Doubled,
            array_elements: ArrayElements::ObjectsOnly,
        }
    }

    /// Options with consistent indentation and unrestricted arrays.
    #[must_use]
    pub fn normalized() -> Self {
        FormatOptions {
            array_indent: ArrayIndent::Nested,
            array_elements: ArrayElements::Any,
        }
    }

    #[must_use]
    pub fn with_array_indent(mut self, array_indent: ArrayIndent) -> Self {
        self.array_indent = array_indent;
        self
    }

    #[must_use]
    pub fn with_array_elements(mut self, array_elements: ArrayElements) -> Self {
        self.array_elements = array_elements;
        self
    }
}
