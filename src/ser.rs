//! Canonical text writer.
//!
//! [`Writer`] streams a [`Value`] tree to any [`io::Write`] sink without building
//! the whole document in memory first.
//!
//! ## Layout
//!
//! - Objects put one member per line, indented by one tab per nesting level:
//!   `{`, newline, `<tabs>"key": value` joined by `,\n`, newline, `<tabs>}`.
//!   An empty object is `{}`.
//! - Arrays put each element on its own line. With the default
//!   [`ArrayIndent::Doubled`](crate::ArrayIndent) the element indent is twice
//!   the array's depth; an empty array is `[]`.
//! - Strings escape only `"` (as `/"`), newline (as `\n`) and backslash (as `\\`).
//! - Numbers use Rust's shortest round-trip decimal rendering. Non-finite numbers
//!   are written as `null`.
//!
//! ## Usage
//!
//! ```rust
//! use prefsync::{value, FormatOptions, Writer};
//!
//! let doc = value!({ "name": "Ann", "age": 30 });
//!
//! let mut out = Vec::new();
//! Writer::new(&mut out, FormatOptions::default())
//!     .write_value(&doc, 0)
//!     .unwrap();
//! assert_eq!(out, b"{\n\t\"name\": \"Ann\",\n\t\"age\": 30\n}");
//! ```

use crate::{Error, FormatOptions, Result, Value};
use std::io;

/// Streams values to an output sink in the canonical text format.
pub struct Writer<W> {
    output: W,
    options: FormatOptions,
}

impl<W: io::Write> Writer<W> {
    pub fn new(output: W, options: FormatOptions) -> Self {
        Writer { output, options }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    /// Writes `value` as if it were nested `depth` levels deep.
    ///
    /// # Errors
    ///
    /// Fails only when the underlying sink fails.
    pub fn write_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        self.emit(value, depth)
            .map_err(|e| Error::io(&e.to_string()))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush().map_err(|e| Error::io(&e.to_string()))
    }

    fn emit(&mut self, value: &Value, depth: usize) -> io::Result<()> {
        match value {
            Value::Absent => self.output.write_all(b"null"),
            Value::Str(s) => self.write_string(s),
            Value::Num(n) => self.write_number(*n),
            Value::Bool(b) => self
                .output
                .write_all(if *b { "true" } else { "false" }.as_bytes()),
            Value::Object(members) => {
                if members.is_empty() {
                    return self.output.write_all(b"{}");
                }
                self.output.write_all(b"{\n")?;
                for (i, (key, member)) in members.iter().enumerate() {
                    if i > 0 {
                        self.output.write_all(b",\n")?;
                    }
                    self.indent(depth + 1)?;
                    self.write_string(key)?;
                    self.output.write_all(b": ")?;
                    self.emit(member, depth + 1)?;
                }
                self.output.write_all(b"\n")?;
                self.indent(depth)?;
                self.output.write_all(b"}")
            }
            Value::Array(items) => {
                if items.is_empty() {
                    return self.output.write_all(b"[]");
                }
                self.output.write_all(b"[")?;
                let element_tabs = self.options.array_indent.tabs(depth);
                for item in items {
                    self.output.write_all(b"\n")?;
                    self.indent(element_tabs)?;
                    self.emit(item, depth + 1)?;
                }
                self.output.write_all(b"\n")?;
                self.indent(depth)?;
                self.output.write_all(b"]")
            }
        }
    }

    #[inline]
    fn write_string(&mut self, s: &str) -> io::Result<()> {
        self.output.write_all(b"\"")?;
        let mut plain = 0;
        for (i, byte) in s.bytes().enumerate() {
            let escape: &[u8] = match byte {
                b'"' => b"/\"",
                b'\n' => b"\\n",
                b'\\' => b"\\\\",
                _ => continue,
            };
            self.output.write_all(&s.as_bytes()[plain..i])?;
            self.output.write_all(escape)?;
            plain = i + 1;
        }
        self.output.write_all(&s.as_bytes()[plain..])?;
        self.output.write_all(b"\"")
    }

    fn write_number(&mut self, n: f64) -> io::Result<()> {
        if n.is_finite() {
            write!(self.output, "{}", n)
        } else {
            self.output.write_all(b"null")
        }
    }

    fn indent(&mut self, tabs: usize) -> io::Result<()> {
        for _ in 0..tabs {
            self.output.write_all(b"\t")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, ArrayIndent};

    fn render(value: &Value, options: FormatOptions) -> String {
        let mut writer = Writer::new(Vec::new(), options);
        writer.write_value(value, 0).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_scalars() {
        let options = FormatOptions::default();
        assert_eq!(render(&Value::Absent, options.clone()), "null");
        assert_eq!(render(&Value::from(true), options.clone()), "true");
        assert_eq!(render(&Value::from(30), options.clone()), "30");
        assert_eq!(render(&Value::from(-0.25), options.clone()), "-0.25");
        assert_eq!(render(&Value::from(f64::NAN), options), "null");
    }

    #[test]
    fn test_escapes_only_three_characters() {
        let text = render(
            &Value::from("say \"hi\"\n\\ \t/"),
            FormatOptions::default(),
        );
        assert_eq!(text, "\"say /\"hi/\"\\n\\\\ \t/\"");
    }

    #[test]
    fn test_empty_containers() {
        let options = FormatOptions::default();
        assert_eq!(render(&value!({}), options.clone()), "{}");
        assert_eq!(render(&value!([]), options), "[]");
    }

    #[test]
    fn test_doubled_array_indent() {
        let doc = value!({ "list": [{ "a": 1 }, {}] });
        assert_eq!(
            render(&doc, FormatOptions::default()),
            "{\n\t\"list\": [\n\t\t{\n\t\t\t\"a\": 1\n\t\t}\n\t\t{}\n\t]\n}"
        );
    }

    #[test]
    fn test_top_level_array_elements_are_not_indented() {
        let doc = value!([1, 2]);
        assert_eq!(render(&doc, FormatOptions::default()), "[\n1\n2\n]");
        assert_eq!(
            render(
                &doc,
                FormatOptions::new().with_array_indent(ArrayIndent::Nested)
            ),
            "[\n\t1\n\t2\n]"
        );
    }
}
