//! In-place, destructive conversion between kinds.
//!
//! | From \ To | Number | String | Bool | Array | Object |
//! |---|---|---|---|---|---|
//! | Null | 0 | `"null"` | false | `[null]` | `{"key":null}` |
//! | Bool | 0 / 1 | `"true"` / `"false"` | no-op | `[b]` | `{"key":b}` |
//! | Number | no-op | canonical text | non-zero as printed | `[n]` | `{"key":n}` |
//! | String | numeric prefix, else error | no-op | non-empty | one entry per char | `{"key":s}` |
//! | Array | element count | canonical text | non-empty | no-op | keys `"0"`, `"1"`, … |
//! | Object | pair count | canonical text | non-empty | values in order | no-op |
//!
//! Converting to `Null` drops whatever the value held. Int and Double are the same
//! number family, so converting between them is a no-op. A failed conversion leaves the
//! value untouched.

use crate::diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
use crate::error::{JsonError, Result};
use crate::serializer::stringify;
use crate::value::{Kind, Map, Value};

/// Key used when a scalar is wrapped into an object.
pub const SYNTHETIC_KEY: &str = "key";

impl Value {
    /// Convert in place, reporting through [`TracingDiagnostics`].
    pub fn convert_to(&mut self, target: Kind) -> Result<&mut Value> {
        self.convert_to_with(target, &TracingDiagnostics)
    }

    /// Convert in place, reporting no-ops and failures to `diagnostics`.
    pub fn convert_to_with<D: Diagnostics>(
        &mut self,
        target: Kind,
        diagnostics: &D,
    ) -> Result<&mut Value> {
        let from = self.kind();
        if same_family(from, target) {
            diagnostics.report(&Diagnostic::ConversionNoop { kind: from });
            return Ok(self);
        }

        let converted = match target {
            Kind::Null => Ok(Value::Null),
            Kind::Int | Kind::Double => to_number(self),
            Kind::String => Ok(Value::String(stringify(self))),
            Kind::Bool => Ok(Value::Bool(truthy(self))),
            Kind::Array => Ok(to_array(std::mem::take(self))),
            Kind::Object => Ok(to_object(std::mem::take(self))),
        };

        match converted {
            Ok(value) => {
                *self = value;
                Ok(self)
            }
            Err(reason) => {
                diagnostics.report(&Diagnostic::ConversionFailed {
                    from,
                    to: target,
                    reason: reason.clone(),
                });
                Err(JsonError::ConversionFailed {
                    from,
                    to: target,
                    reason,
                })
            }
        }
    }
}

fn same_family(from: Kind, to: Kind) -> bool {
    from == to || (from.is_number() && to.is_number())
}

fn to_number(value: &Value) -> std::result::Result<Value, String> {
    match value {
        Value::Null => Ok(Value::int(0)),
        Value::Bool(b) => Ok(Value::int(i64::from(*b))),
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::String(s) => parse_numeric(s),
        Value::Array(items) => Ok(Value::int(count(items.len()))),
        Value::Object(map) => Ok(Value::int(count(map.len()))),
    }
}

/// Convert the longest numeric prefix of `text`, after leading whitespace. An optional
/// sign (`+` or `-`), digits with at most one `.` (either side may be empty, not both),
/// and an optional exponent are taken; anything after them is ignored.
fn parse_numeric(text: &str) -> std::result::Result<Value, String> {
    let trimmed = text.trim_start();
    let token = numeric_prefix(trimmed).ok_or_else(|| format!("{text:?} is not numeric"))?;
    let integral = !token.contains(['.', 'e', 'E']);
    if integral {
        if let Ok(n) = token.parse::<i64>() {
            return Ok(Value::int(n));
        }
    }
    match token.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Value::number(f)),
        _ => Err(format!("{text:?} is out of range")),
    }
}

fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    Some(&text[..end])
}

fn count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => match n.kind() {
            Kind::Int => n.as_i64() != 0,
            _ => n.as_f64() != 0.0,
        },
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn to_array(value: Value) -> Value {
    match value {
        Value::String(s) => s.chars().map(|c| Value::String(c.to_string())).collect(),
        Value::Object(map) => Value::Array(map.into_values().collect()),
        Value::Array(items) => Value::Array(items),
        scalar => Value::Array(vec![scalar]),
    }
}

fn to_object(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect(),
        ),
        Value::Object(map) => Value::Object(map),
        scalar => {
            let mut map = Map::with_capacity(1);
            map.insert(SYNTHETIC_KEY, scalar);
            Value::Object(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Silent;
    use crate::parser::parse;

    #[test]
    fn numeric_prefix_is_converted() {
        assert_eq!(parse_numeric(" 12 ").unwrap(), Value::int(12));
        assert_eq!(parse_numeric("-0.5").unwrap(), Value::number(-0.5));
        assert_eq!(parse_numeric("12abc").unwrap(), Value::int(12));
        assert_eq!(parse_numeric("3.5 kg").unwrap(), Value::number(3.5));
        assert_eq!(parse_numeric("+5").unwrap(), Value::int(5));
        assert_eq!(parse_numeric(".5").unwrap(), Value::number(0.5));
        assert_eq!(parse_numeric("7.").unwrap(), Value::int(7));
        assert_eq!(parse_numeric("2e3x").unwrap(), Value::int(2000));
        assert_eq!(parse_numeric("2e").unwrap(), Value::int(2));
    }

    #[test]
    fn text_without_digits_is_rejected() {
        for text in ["abc", "", "   ", "+", "-", ".", "-.e5", "[1]"] {
            assert!(parse_numeric(text).is_err(), "{text:?}");
        }
        assert!(parse_numeric("1e400").is_err());
    }

    #[test]
    fn failed_conversion_keeps_value() {
        let mut v = Value::string("hello");
        let err = v.convert_to_with(Kind::Int, &Silent).unwrap_err();
        assert!(matches!(err, JsonError::ConversionFailed { .. }));
        assert_eq!(v, Value::string("hello"));
    }

    #[test]
    fn object_to_array_keeps_order() {
        let mut v = parse(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        v.convert_to_with(Kind::Array, &Silent).unwrap();
        assert_eq!(v.to_string(), "[1,2,3]");
    }
}
