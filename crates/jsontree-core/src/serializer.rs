//! Serializer: renders a [`Value`] tree as compact canonical JSON text.
//!
//! - No whitespace is inserted anywhere.
//! - Int renders as minimal decimal digits; Double renders as the shortest text that
//!   parses back to the same `f64`. Non-finite doubles render as `null`.
//! - Strings are written verbatim apart from two cases. A `"` that is not part of an
//!   escape gains a backslash. So does a backslash that cannot start a complete escape
//!   (a trailing one, or `\u` with fewer than four characters after it). Every stored
//!   escape sequence (`\n`, `\uXXXX`, ...) passes through untouched, mirroring the
//!   parser, so `stringify(parse(stringify(v))) == stringify(v)`.
//!
//! # Example
//! ```
//! use jsontree_core::{parse, stringify};
//! let value = parse(r#"{ "a" : 1, "b" : [ true , null ] }"#).unwrap();
//! assert_eq!(stringify(&value), r#"{"a":1,"b":[true,null]}"#);
//! ```

use std::fmt;
use std::io;

use crate::parser::escape_len;
use crate::value::{Kind, Map, Number, Value};

/// Render `value` as compact JSON text.
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Render `value` into any `io::Write` sink.
pub fn write_to<W: io::Write>(value: &Value, mut writer: W) -> io::Result<()> {
    writer.write_all(stringify(value).as_bytes())
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => write_array(items, out),
        Value::Object(map) => write_object(map, out),
    }
}

fn write_array(items: &[Value], out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_value(item, out);
    }
    out.push(']');
}

fn write_object(map: &Map, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        write_value(value, out);
    }
    out.push('}');
}

/// Format a number by its derived kind.
pub(crate) fn write_number(n: &Number, out: &mut String) {
    match n.kind() {
        Kind::Int => out.push_str(itoa::Buffer::new().format(n.as_i64())),
        _ => {
            let f = n.as_f64();
            if f.is_finite() {
                out.push_str(ryu::Buffer::new().format_finite(f));
            } else {
                out.push_str("null");
            }
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    let bytes = s.as_bytes();
    let mut run_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let lone = match bytes[i] {
            b'"' => true,
            b'\\' => match escape_len(&s[i..]) {
                Some(len) => {
                    // A stored escape sequence goes out verbatim.
                    i += len;
                    continue;
                }
                None => true,
            },
            _ => false,
        };
        if lone {
            out.push_str(&s[run_start..i]);
            out.push('\\');
            run_start = i;
        }
        i += 1;
    }
    out.push_str(&s[run_start..]);
    out.push('"');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}
