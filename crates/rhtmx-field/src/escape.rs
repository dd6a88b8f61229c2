// File: src/escape.rs
// Purpose: Attribute escaping capability used by every renderer

use std::fmt::Write;

/// Escapes text for placement inside a double-quoted HTML attribute
pub trait Escape {
    fn attr(&self, value: &str) -> String;
}

impl<T: Escape + ?Sized> Escape for &T {
    fn attr(&self, value: &str) -> String {
        (**self).attr(value)
    }
}

/// Default escaper backed by `html-escape`
///
/// Encodes `&`, `<`, `>` and `"`, plus ASCII control characters other than
/// tab, newline and carriage return.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escape for HtmlEscaper {
    fn attr(&self, value: &str) -> String {
        let encoded = html_escape::encode_double_quoted_attribute(value);
        if !encoded.chars().any(is_bare_control) {
            return encoded.into_owned();
        }

        let mut out = String::with_capacity(encoded.len() + 8);
        for c in encoded.chars() {
            if is_bare_control(c) {
                // Writing to a String cannot fail
                let _ = write!(out, "&#x{:02X};", c as u32);
            } else {
                out.push(c);
            }
        }
        out
    }
}

fn is_bare_control(c: char) -> bool {
    c.is_ascii_control() && !matches!(c, '\t' | '\n' | '\r')
}
