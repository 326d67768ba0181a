//! Typed accessors and container mutation on [`Value`].
//!
//! Every fallible operation returns [`Result`]; a failed mutator leaves the container
//! exactly as it was. Read accessors hand out borrows, so the borrow checker rejects
//! holding one across a mutation of the same container.
//!
//! [`Lenient`] wraps a value for callers that prefer a sentinel default plus a
//! diagnostic over a `Result`.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{JsonError, Result};
use crate::value::{Number, Value};

impl Value {
    /// Integer projection of a number.
    pub fn get_int(&self) -> Result<i64> {
        match self {
            Value::Number(n) => Ok(n.as_i64()),
            other => Err(JsonError::mismatch("number", other.kind())),
        }
    }

    /// Floating projection of a number.
    pub fn get_double(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(JsonError::mismatch("number", other.kind())),
        }
    }

    pub fn get_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(JsonError::mismatch("string", other.kind())),
        }
    }

    pub fn get_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(JsonError::mismatch("bool", other.kind())),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Overwrite a number with `f`; Int/Double is re-derived from the new value.
    /// A non-finite `f` serializes as `null`.
    pub fn set_number(&mut self, f: f64) -> Result<()> {
        self.number_mut()?.set_f64(f);
        Ok(())
    }

    pub fn set_int(&mut self, n: i64) -> Result<()> {
        self.number_mut()?.set_i64(n);
        Ok(())
    }

    pub fn set_double(&mut self, f: f64) -> Result<()> {
        self.set_number(f)
    }

    pub fn set_str(&mut self, s: impl Into<String>) -> Result<()> {
        match self {
            Value::String(old) => {
                *old = s.into();
                Ok(())
            }
            other => Err(JsonError::mismatch("string", other.kind())),
        }
    }

    pub fn set_bool(&mut self, b: bool) -> Result<()> {
        match self {
            Value::Bool(old) => {
                *old = b;
                Ok(())
            }
            other => Err(JsonError::mismatch("bool", other.kind())),
        }
    }

    /// Replace this value with null, dropping whatever it held.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    fn number_mut(&mut self) -> Result<&mut Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(JsonError::mismatch("number", other.kind())),
        }
    }

    fn items(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(JsonError::mismatch("array", other.kind())),
        }
    }

    fn items_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(JsonError::mismatch("array", other.kind())),
        }
    }

    fn pairs(&self) -> Result<&crate::value::Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(JsonError::mismatch("object", other.kind())),
        }
    }

    fn pairs_mut(&mut self) -> Result<&mut crate::value::Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(JsonError::mismatch("object", other.kind())),
        }
    }

    pub fn get_arr_at(&self, index: usize) -> Result<&Value> {
        let items = self.items()?;
        items.get(index).ok_or(JsonError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    pub fn get_arr_at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let items = self.items_mut()?;
        let len = items.len();
        items
            .get_mut(index)
            .ok_or(JsonError::IndexOutOfRange { index, len })
    }

    pub fn get_obj_at(&self, key: &str) -> Result<&Value> {
        self.pairs()?
            .get(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    pub fn get_obj_at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.pairs_mut()?
            .get_mut(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    /// Replace the element at `index`; the previous occupant is dropped.
    pub fn set_arr_at(&mut self, index: usize, value: Value) -> Result<()> {
        let slot = self.get_arr_at_mut(index)?;
        *slot = value;
        Ok(())
    }

    /// Replace the value under `key`, or append the pair if the key is absent.
    pub fn set_obj_at(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let map = self.pairs_mut()?;
        let key = key.into();
        if !map.contains_key(&key) {
            map.try_reserve(1)?;
        }
        map.insert(key, value);
        Ok(())
    }

    /// Append `value`, failing with `AllocationFailure` instead of aborting when the
    /// array cannot grow.
    pub fn arr_append(&mut self, value: Value) -> Result<()> {
        let items = self.items_mut()?;
        items.try_reserve(1)?;
        items.push(value);
        Ok(())
    }

    /// Remove and drop the element at `index`, shifting later elements down.
    pub fn arr_remove_at(&mut self, index: usize) -> Result<()> {
        let items = self.items_mut()?;
        if index >= items.len() {
            return Err(JsonError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        items.remove(index);
        Ok(())
    }

    /// Remove and drop the pair under `key`, keeping the order of the rest.
    pub fn obj_remove_at(&mut self, key: &str) -> Result<()> {
        self.pairs_mut()?
            .remove(key)
            .map(drop)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    /// A view whose accessors return defaults and report misuse to `diagnostics`.
    pub fn lenient<'v, D: Diagnostics>(&'v self, diagnostics: &'v D) -> Lenient<'v, D> {
        Lenient {
            value: self,
            diagnostics,
        }
    }
}

/// Read-only accessors that never fail.
///
/// On misuse each method reports [`Diagnostic::AccessorMisuse`] and returns the
/// sentinel: `0`, `0.0`, `""`, `false`, or `None`.
pub struct Lenient<'v, D: Diagnostics> {
    value: &'v Value,
    diagnostics: &'v D,
}

impl<'v, D: Diagnostics> Lenient<'v, D> {
    fn or_report<T>(&self, operation: &'static str, result: Result<T>, default: T) -> T {
        result.unwrap_or_else(|err| {
            self.diagnostics
                .report(&Diagnostic::accessor(operation, &err));
            default
        })
    }

    pub fn int(&self) -> i64 {
        self.or_report("get_int", self.value.get_int(), 0)
    }

    pub fn double(&self) -> f64 {
        self.or_report("get_double", self.value.get_double(), 0.0)
    }

    pub fn str(&self) -> &'v str {
        self.or_report("get_str", self.value.get_str(), "")
    }

    pub fn bool(&self) -> bool {
        self.or_report("get_bool", self.value.get_bool(), false)
    }

    pub fn arr_at(&self, index: usize) -> Option<&'v Value> {
        self.or_report("get_arr_at", self.value.get_arr_at(index).map(Some), None)
    }

    pub fn obj_at(&self, key: &str) -> Option<&'v Value> {
        self.or_report("get_obj_at", self.value.get_obj_at(key).map(Some), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;
    use std::cell::RefCell;

    #[test]
    fn getters_reject_wrong_kind() {
        let v = Value::string("x");
        assert!(matches!(
            v.get_int(),
            Err(JsonError::TypeMismatch {
                expected: "number",
                found: Kind::String
            })
        ));
        assert!(v.get_bool().is_err());
        assert_eq!(v.get_str().unwrap(), "x");
    }

    #[test]
    fn setters_keep_kind_in_sync() {
        let mut v = Value::int(1);
        v.set_number(2.5).unwrap();
        assert_eq!(v.kind(), Kind::Double);
        v.set_int(9).unwrap();
        assert_eq!(v.kind(), Kind::Int);
        assert_eq!(v.get_double().unwrap(), 9.0);
        assert!(v.set_str("nope").is_err());
        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn lenient_defaults_and_reports() {
        let seen = RefCell::new(Vec::new());
        let sink = |d: &Diagnostic| seen.borrow_mut().push(d.clone());
        let v = Value::array_from([Value::int(4)]);
        let view = v.lenient(&sink);
        assert_eq!(view.int(), 0);
        assert_eq!(view.str(), "");
        assert!(!view.bool());
        assert_eq!(view.arr_at(0), Some(&Value::int(4)));
        assert_eq!(view.arr_at(3), None);
        assert_eq!(view.obj_at("k"), None);
        assert_eq!(seen.borrow().len(), 5);
    }
}
