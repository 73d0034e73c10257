use core::fmt::{self, Write};

use crate::{Map, Value};

/// Options of the canonical text form.
///
/// The text form is meant for diagnostics and is not a wire format: map entries appear in
/// iteration order, which is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Value {
    /// Canonical text form with the default [`RenderOptions`].
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        // Writing into a `String` does not fail
        let _ = Renderer { options }.write_value(&mut out, self, 0);
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer {
            options: &RenderOptions::default(),
        }
        .write_value(f, self, 0)
    }
}

/// Shortest text that parses back to the same `f64`, always distinguishable from an
/// integer (`1.0`, `1e300`).
pub(crate) fn format_double(value: f64) -> String {
    format!("{value:?}")
}

struct Renderer<'o> {
    options: &'o RenderOptions,
}

impl Renderer<'_> {
    fn write_value<W: Write>(&self, f: &mut W, value: &Value, depth: usize) -> fmt::Result {
        match value {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int(i) => f.write_str(itoa::Buffer::new().format(*i)),
            Value::Double(d) => f.write_str(&format_double(*d)),
            Value::String(s) => write_string(f, s),
            Value::Binary(bytes) => write_binary(f, bytes),
            Value::Array(items) => self.write_array(f, items, depth),
            Value::Map(map) => self.write_map(f, map, depth),
        }
    }

    fn write_array<W: Write>(&self, f: &mut W, items: &[Value], depth: usize) -> fmt::Result {
        if items.is_empty() {
            return f.write_str("[]");
        }
        f.write_str("[\n")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n")?;
            }
            self.write_indent(f, depth + 1)?;
            self.write_value(f, item, depth + 1)?;
        }
        f.write_char('\n')?;
        self.write_indent(f, depth)?;
        f.write_char(']')
    }

    fn write_map<W: Write>(&self, f: &mut W, map: &Map, depth: usize) -> fmt::Result {
        if map.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{\n")?;
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n")?;
            }
            self.write_indent(f, depth + 1)?;
            write_string(f, key)?;
            f.write_str(": ")?;
            self.write_value(f, value, depth + 1)?;
        }
        f.write_char('\n')?;
        self.write_indent(f, depth)?;
        f.write_char('}')
    }

    fn write_indent<W: Write>(&self, f: &mut W, depth: usize) -> fmt::Result {
        for _ in 0..depth * self.options.indent {
            f.write_char(' ')?;
        }
        Ok(())
    }
}

fn escape(c: char) -> Option<&'static str> {
    match c {
        '\r' => Some("\\r"),
        '\n' => Some("\\n"),
        '\t' => Some("\\t"),
        '\\' => Some("\\\\"),
        '"' => Some("\\\""),
        '\u{2028}' => Some("\\u2028"),
        '\u{2029}' => Some("\\u2029"),
        _ => None,
    }
}

fn write_string<W: Write>(f: &mut W, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        if let Some(escaped) = escape(c) {
            f.write_str(escaped)?;
        } else if c.is_control() {
            write!(f, "\\u{:04x}", u32::from(c))?;
        } else {
            f.write_char(c)?;
        }
    }
    f.write_char('"')
}

fn write_binary<W: Write>(f: &mut W, bytes: &[u8]) -> fmt::Result {
    f.write_str("b\"")?;
    for &byte in bytes {
        if let Some(escaped) = escape(char::from(byte)) {
            f.write_str(escaped)?;
        } else if byte.is_ascii_graphic() || byte == b' ' {
            f.write_char(char::from(byte))?;
        } else {
            write!(f, "\\x{byte:02x}")?;
        }
    }
    f.write_char('"')
}
