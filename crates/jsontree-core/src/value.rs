//! The JSON tree: [`Value`], its [`Kind`], the dual-projection [`Number`], and the
//! insertion-ordered [`Map`] used for objects.
//!
//! Every `Value` exclusively owns its subtree. Children are moved into their parent and
//! dropped with it, so a subtree is freed exactly once and can never be shared between
//! two parents or inserted into itself.

use std::fmt;

/// Absolute tolerance used to decide whether a number's fractional part is zero.
pub const NUMBER_EPSILON: f64 = 1e-9;

/// The discriminant of a [`Value`], with numbers split into `Int` and `Double`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lower-case name used in diagnostics and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Int and Double both belong to the number family.
    pub fn is_number(self) -> bool {
        matches!(self, Kind::Int | Kind::Double)
    }

    /// Parse a kind name as printed by [`Kind::as_str`]. `number` is accepted as `Double`.
    pub fn from_name(name: &str) -> Option<Kind> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "null" => Kind::Null,
            "bool" | "boolean" => Kind::Bool,
            "int" | "integer" => Kind::Int,
            "double" | "float" | "number" => Kind::Double,
            "string" | "str" => Kind::String,
            "array" | "arr" => Kind::Array,
            "object" | "obj" => Kind::Object,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON number holding both an integer and a floating projection.
///
/// Whether the number is an `Int` or a `Double` is derived from the floating projection
/// every time [`Number::kind`] is called: it is an `Int` when the value is finite, fits
/// in `i64`, and its fractional part is within [`NUMBER_EPSILON`] of zero.
///
/// Precision ceiling: numbers built from `i64` (or parsed from an integer literal that
/// fits in `i64`) keep the exact integer; everything else is IEEE-754 binary64.
#[derive(Debug, Clone, Copy)]
pub struct Number {
    int: i64,
    float: f64,
}

impl Number {
    pub fn from_i64(n: i64) -> Self {
        Number {
            int: n,
            float: n as f64,
        }
    }

    /// The integer projection is the truncated value, saturating at the `i64` bounds.
    pub fn from_f64(f: f64) -> Self {
        Number {
            int: f as i64,
            float: f,
        }
    }

    pub fn kind(&self) -> Kind {
        if is_integral(self.float) {
            Kind::Int
        } else {
            Kind::Double
        }
    }

    pub fn is_int(&self) -> bool {
        self.kind() == Kind::Int
    }

    pub fn as_i64(&self) -> i64 {
        self.int
    }

    pub fn as_f64(&self) -> f64 {
        self.float
    }

    pub fn set_i64(&mut self, n: i64) {
        *self = Number::from_i64(n);
    }

    pub fn set_f64(&mut self, f: f64) {
        *self = Number::from_f64(f);
    }
}

fn is_integral(f: f64) -> bool {
    f.is_finite()
        && f >= i64::MIN as f64
        && f <= i64::MAX as f64
        && (f - f.trunc()).abs() < NUMBER_EPSILON
}

impl PartialEq for Number {
    /// Two Ints compare by their integer projection, anything else by the float.
    fn eq(&self, other: &Self) -> bool {
        match (self.kind(), other.kind()) {
            (Kind::Int, Kind::Int) => self.int == other.int,
            _ => self.float == other.float,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::from_i64(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::from_f64(f)
    }
}

/// Insertion-ordered key/value pairs with unique keys.
///
/// Lookups and duplicate detection are linear scans; iteration and serialization follow
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    pub fn new() -> Self {
        Map {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of `key` in insertion order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Pair at `index` in insertion order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries.get(index).map(|(k, v)| (k.as_str(), v))
    }

    /// Insert or replace. An existing key keeps its position and the displaced value is
    /// returned; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove `key`, shifting later pairs down so relative order is kept.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let i = self.position(key)?;
        Some(self.entries.remove(i).1)
    }

    pub(crate) fn try_reserve(
        &mut self,
        additional: usize,
    ) -> std::result::Result<(), std::collections::TryReserveError> {
        self.entries.try_reserve(additional)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (&str, &mut Value)> + ExactSizeIterator {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.entries.into_iter().map(|(_, v)| v)
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    /// Later duplicates replace earlier values in place.
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Map::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// One node of a JSON tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order.
    Object(Map),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn int(n: i64) -> Self {
        Value::Number(Number::from_i64(n))
    }

    /// A number whose kind (Int or Double) is decided by its fractional part.
    ///
    /// NaN and the infinities are stored but serialize as `null`, so they do not survive
    /// a stringify/parse round trip.
    pub fn number(f: f64) -> Self {
        Value::Number(Number::from_f64(f))
    }

    /// Same as [`Value::number`]; a whole `f` still classifies as Int.
    pub fn double(f: f64) -> Self {
        Value::number(f)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// An array taking ownership of `items` in order.
    pub fn array_from(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// An object taking ownership of `pairs` in order. A repeated key replaces the
    /// earlier value and keeps the earlier position.
    pub fn object_from<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(pairs.into_iter().collect())
    }

    /// Deep copy; the result shares nothing with `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Drop the value held in `slot`, leaving `None`. Calling it again is a no-op.
    pub fn free(slot: &mut Option<Value>) {
        drop(slot.take());
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => n.kind(),
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Byte length of a string, element count of an array, pair count of an object;
    /// zero for every other kind.
    pub fn size(&self) -> usize {
        match self {
            Value::String(s) => s.len(),
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Value::Array(items) => 1 + items.iter().map(Value::node_count).sum::<usize>(),
            Value::Object(map) => 1 + map.values().map(Value::node_count).sum::<usize>(),
            _ => 1,
        }
    }

    /// Container nesting depth: 0 for scalars, 1 for a flat array or object.
    pub fn depth(&self) -> usize {
        match self {
            Value::Array(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            Value::Object(map) => 1 + map.values().map(Value::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::int(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::number(f)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array_from(iter)
    }
}
