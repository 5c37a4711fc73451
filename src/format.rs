//! The JSON-like text format.
//!
//! This module only holds documentation. The format looks like JSON and is read by
//! a lenient parser tuned to round-trip exactly what the writer emits. It is not
//! standard JSON.
//!
//! # Document layout
//!
//! A saved object is a single top-level object whose keys are exactly the keys
//! passed to `synch` calls, nested the same way the object graph is. There is no
//! version header or schema.
//!
//! ```text
//! {
//! 	"last_folder": "/home/ann",
//! 	"last_open": 3,
//! 	"info": {
//! 		"contents": "",
//! 		"author": "Anonymous"
//! 	},
//! 	"chapters": [
//! 		{
//! 			"contents": "Once",
//! 			"author": "Ann"
//! 		}
//! 	],
//! 	"draft": null
//! }
//! ```
//!
//! Members appear in the order `describe` visits them.
//!
//! # Values
//!
//! | Kind | Written as |
//! |------|------------|
//! | absent | `null` |
//! | string | `"..."` with the escapes below |
//! | number | shortest decimal that reads back to the same double; `null` if not finite |
//! | bool | `true` / `false` |
//! | array | `[`, one element per line, `]`; empty is `[]` |
//! | object | `{`, one `"key": value` per line joined by `,`, `}`; empty is `{}` |
//!
//! # Strings
//!
//! Only three characters are escaped:
//!
//! ```text
//! "   ->  /"
//! \n  ->  \n
//! \   ->  \\
//! ```
//!
//! The quote escape is `/"`, not `\"`. The parser accepts both, and drops any other
//! character that follows a backslash. A string ending in `/` cannot be read back,
//! since its final `/"` reads as an escaped quote.
//!
//! ```rust
//! use prefsync::{from_str, to_string, Value};
//!
//! let text = to_string(&Value::from("a \"b\"\n\\")).unwrap();
//! assert_eq!(text, r#""a /"b/"\n\\""#);
//! assert_eq!(from_str(&text).unwrap(), Value::from("a \"b\"\n\\"));
//! ```
//!
//! # Indentation
//!
//! Indentation is cosmetic and uses tabs. Object members sit one tab deeper than
//! their object. Array elements, by default, sit at *twice* the array's depth,
//! which is the layout existing files use; [`ArrayIndent::Nested`](crate::ArrayIndent)
//! switches to one tab deeper instead.
//!
//! # Leniency
//!
//! - Commas are insignificant, just like whitespace.
//! - Empty input is `null`.
//! - Anything after the first complete value is ignored.
//! - An object ends at `}` or at the first thing that is not a quoted key.
//!
//! ```rust
//! use prefsync::{from_str, value};
//!
//! let doc = from_str("{ \"a\": 1 \"b\": [true false] }").unwrap();
//! assert_eq!(doc, value!({ "a": 1, "b": [true, false] }));
//! ```
//!
//! # Errors
//!
//! | Input | Error |
//! |-------|-------|
//! | `tru`, `nul`, `fals` | [`MalformedLiteral`](crate::Error::MalformedLiteral) |
//! | `{"a" 1}` | [`MalformedObject`](crate::Error::MalformedObject) |
//! | `-`, `1-2` | [`MalformedNumber`](crate::Error::MalformedNumber) |
//! | `"open` | [`UnexpectedEnd`](crate::Error::UnexpectedEnd) |
//! | `@` | [`UnexpectedCharacter`](crate::Error::UnexpectedCharacter) |
