//! Recursive-descent parser for the JSON-like text format.
//!
//! The [`Parser`] reads exactly what the [`Writer`](crate::Writer) produces and is
//! lenient in the same places the writer's output needs it:
//!
//! - Spaces, tabs, line breaks **and commas** are insignificant between tokens.
//! - Strings understand the escapes `/"`, `\"`, `\n` and `\\`. Any other
//!   character after a backslash is dropped.
//! - Numbers are runs of `-+.eE0-9` parsed as a double.
//! - Empty input parses as [`Value::Absent`].
//! - Text after the first complete value is ignored.
//!
//! ## Usage
//!
//! Most users should use [`from_str`](crate::from_str) or the object-level
//! [`deserialize`](crate::deserialize):
//!
//! ```rust
//! use prefsync::{from_str, Value};
//!
//! let doc = from_str("{\"name\": \"Ann\", \"age\": 30}").unwrap();
//! assert_eq!(doc.get("age"), Some(&Value::Num(30.0)));
//!
//! assert_eq!(from_str("null").unwrap(), Value::Absent);
//! assert_eq!(from_str("").unwrap(), Value::Absent);
//! ```

use crate::options::ArrayElements;
use crate::{Error, FormatOptions, Result, Value, ValueMap};

/// Parses one value from text, tracking line and column for error reports.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    options: FormatOptions,
}

impl<'a> Parser<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self::with_options(input, FormatOptions::default())
    }

    pub fn with_options(input: &'a str, options: FormatOptions) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            options,
        }
    }

    /// Parses the next value.
    ///
    /// Returns [`Value::Absent`] once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails on misspelled literals, members without a colon, malformed numbers,
    /// unterminated strings, and characters that cannot start a value.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.skip_insignificant();
        let (line, col) = (self.line, self.column);

        let Some(ch) = self.next_char() else {
            return Ok(Value::Absent);
        };

        match ch {
            '"' => Ok(Value::Str(self.parse_string()?)),
            't' => {
                self.expect_literal("true", line, col)?;
                Ok(Value::Bool(true))
            }
            'f' => {
                self.expect_literal("false", line, col)?;
                Ok(Value::Bool(false))
            }
            'n' => {
                self.expect_literal("null", line, col)?;
                Ok(Value::Absent)
            }
            '-' | '0'..='9' => self.parse_number(ch, line, col),
            '{' => self.parse_object(),
            '[' => self.parse_array(),
            other => Err(Error::unexpected_character(line, col, other)),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_insignificant(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r' | ',') = self.peek_char() {
            self.next_char();
        }
    }

    /// Matches the rest of `literal`, whose first character is already consumed.
    fn expect_literal(&mut self, literal: &'static str, line: usize, col: usize) -> Result<()> {
        for expected in literal.chars().skip(1) {
            if self.next_char() != Some(expected) {
                return Err(Error::malformed_literal(line, col, literal));
            }
        }
        Ok(())
    }

    /// Reads a string body; the opening quote is already consumed.
    fn parse_string(&mut self) -> Result<String> {
        let mut result = String::new();

        loop {
            match self.next_char() {
                Some('"') => return Ok(result),
                Some('/') if self.peek_char() == Some('"') => {
                    self.next_char();
                    result.push('"');
                }
                Some('\\') => match self.next_char() {
                    Some('n') => result.push('\n'),
                    Some('\\') => result.push('\\'),
                    Some('"') => result.push('"'),
                    Some(_) => {}
                    None => break,
                },
                Some(other) => result.push(other),
                None => break,
            }
        }

        Err(Error::unexpected_end(self.line, self.column, "closing '\"'"))
    }

    fn parse_number(&mut self, first: char, line: usize, col: usize) -> Result<Value> {
        let start = self.position - first.len_utf8();
        while let Some('-' | '+' | '.' | 'e' | 'E' | '0'..='9') = self.peek_char() {
            self.next_char();
        }

        let token = &self.input[start..self.position];
        token
            .parse::<f64>()
            .map(Value::Num)
            .map_err(|_| Error::malformed_number(line, col, token))
    }

    /// Reads members until `}` or anything that is not a quoted key.
    fn parse_object(&mut self) -> Result<Value> {
        let mut members = ValueMap::new();

        loop {
            self.skip_insignificant();
            match self.peek_char() {
                Some('"') => {
                    self.next_char();
                    let key = self.parse_string()?;

                    self.skip_insignificant();
                    let (line, col) = (self.line, self.column);
                    if self.next_char() != Some(':') {
                        return Err(Error::malformed_object(
                            line,
                            col,
                            &format!("expected ':' after key \"{}\"", key),
                        ));
                    }

                    let value = self.parse_value()?;
                    members.insert(key, value);
                }
                Some('}') => {
                    self.next_char();
                    break;
                }
                _ => break,
            }
        }

        Ok(Value::Object(members))
    }

    fn parse_array(&mut self) -> Result<Value> {
        let mut items = Vec::new();

        loop {
            self.skip_insignificant();
            match self.peek_char() {
                None => break,
                Some(']') => {
                    self.next_char();
                    break;
                }
                Some('{') => items.push(self.parse_value()?),
                Some(_) => match self.options.array_elements {
                    ArrayElements::Any => items.push(self.parse_value()?),
                    ArrayElements::ObjectsOnly => {
                        self.next_char();
                        break;
                    }
                },
            }
        }

        Ok(Value::Array(items))
    }
}
