//! HTML escaping for raw markup
//!
//! Text and attributes rendered through Leptos views are escaped by Leptos.
//! Markup assembled as a string (the page error surface) escapes every
//! interpolated value here, exactly once.

use std::fmt::{self, Display, Write};

use crate::model::collapse_whitespace;

/// Escape a value for use as HTML text content
pub fn escape_text<T: Display + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write!(Escaper(&mut out), "{}", value);
    out
}

/// Escape a value for a double-quoted attribute
///
/// Whitespace runs collapse to a single space so the value stays on one
/// line.
pub fn escape_attr<T: Display + ?Sized>(value: &T) -> String {
    collapse_whitespace(&escape_text(value))
}

/// Streams escaped output into the wrapped buffer
struct Escaper<'a>(&'a mut String);

impl fmt::Write for Escaper<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            match c {
                '&' => self.0.push_str("&amp;"),
                '<' => self.0.push_str("&lt;"),
                '>' => self.0.push_str("&gt;"),
                '"' => self.0.push_str("&quot;"),
                '\'' => self.0.push_str("&#039;"),
                _ => self.0.push(c),
            }
        }
        Ok(())
    }
}
