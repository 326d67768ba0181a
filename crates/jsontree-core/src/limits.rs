//! Parser configuration.

/// Nesting depth allowed by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Knobs for [`Parser`](crate::parser::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum array/object nesting. `None` disables the check, which lets adversarial
    /// input grow the call stack without bound.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
