//! Recursive-descent parser: converts JSON text into a [`Value`] tree.
//!
//! One character of lookahead selects the production: `{` object, `[` array, `"` string,
//! `t`/`f` boolean, `n` null, digit or `-` number. Whitespace (space, tab, CR, LF) is
//! skipped before every value and around structural tokens.
//!
//! # Key design decisions
//!
//! - **Raw escapes**: escapes are never interpreted. A backslash consumes the next
//!   character, or `\u` plus the next four characters, and the whole sequence is stored
//!   verbatim in the string. The serializer re-emits it unchanged.
//! - **Numbers**: a literal without `.` or exponent that fits in `i64` is stored exactly;
//!   everything else goes through `f64` and is classified Int/Double by
//!   [`NUMBER_EPSILON`](crate::value::NUMBER_EPSILON).
//! - **No partial trees**: the first violation aborts the whole parse. Values built so
//!   far are owned by the failing stack frames and dropped as the error propagates.
//! - **Bounded recursion**: nesting is limited by [`ParseOptions::max_depth`].

use crate::diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
use crate::error::{Result, SyntaxError};
use crate::limits::ParseOptions;
use crate::value::{Map, Number, Value};

type ParseResult<T> = std::result::Result<T, SyntaxError>;

/// Parse a complete JSON document with default options.
///
/// Leading and trailing whitespace is allowed; any other trailing text is rejected.
pub fn parse(input: &str) -> Result<Value> {
    Parser::new(input).parse()
}

/// Parse a complete JSON document with explicit options.
pub fn parse_with(input: &str, options: ParseOptions) -> Result<Value> {
    Parser::with_options(input, options).parse()
}

/// Single-pass parser over an in-memory buffer.
pub struct Parser<'a, D: Diagnostics = TracingDiagnostics> {
    input: &'a str,
    pos: usize,
    depth: usize,
    options: ParseOptions,
    diagnostics: D,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser::with_diagnostics(input, options, TracingDiagnostics)
    }
}

impl<'a, D: Diagnostics> Parser<'a, D> {
    pub fn with_diagnostics(input: &'a str, options: ParseOptions, diagnostics: D) -> Self {
        Parser {
            input,
            pos: 0,
            depth: 0,
            options,
            diagnostics,
        }
    }

    /// Parse exactly one value followed only by whitespace.
    pub fn parse(mut self) -> Result<Value> {
        let outcome = self.parse_root().and_then(|value| {
            self.skip_whitespace();
            if self.pos < self.input.len() {
                Err(SyntaxError::TrailingCharacters)
            } else {
                Ok(value)
            }
        });
        self.finish(outcome)
    }

    /// Parse one value and return it with the byte offset where parsing stopped.
    /// Whatever follows is left for the caller.
    pub fn parse_prefix(mut self) -> Result<(Value, usize)> {
        let outcome = self.parse_root().map(|value| (value, self.pos));
        self.finish(outcome)
    }

    fn finish<T>(&self, outcome: ParseResult<T>) -> Result<T> {
        outcome.map_err(|err| {
            self.diagnostics
                .report(&Diagnostic::ParseRejected(err.clone()));
            err.into()
        })
    }

    fn parse_root(&mut self) -> ParseResult<Value> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return Err(SyntaxError::EmptyInput);
        }
        self.parse_value()
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(SyntaxError::UnexpectedEnd),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn parse_literal(&mut self, word: &str, value: Value) -> ParseResult<Value> {
        if self.input[self.pos..].starts_with(word) {
            self.pos += word.len();
            Ok(value)
        } else {
            Err(SyntaxError::InvalidLiteral)
        }
    }

    /// `-? digits ( . digits )? ( [eE] [+-]? digits )?`, where a second `.` or exponent
    /// marker is a hard error rather than the end of the token.
    fn parse_number(&mut self) -> ParseResult<Value> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        if self.eat_digits() == 0 {
            return Err(SyntaxError::MalformedNumber);
        }

        let mut seen_dot = false;
        let mut seen_exp = false;
        loop {
            match self.peek() {
                Some(b'.') => {
                    if seen_dot || seen_exp {
                        return Err(SyntaxError::MalformedNumber);
                    }
                    seen_dot = true;
                    self.pos += 1;
                    if self.eat_digits() == 0 {
                        return Err(SyntaxError::MalformedNumber);
                    }
                }
                Some(b'e' | b'E') => {
                    if seen_exp {
                        return Err(SyntaxError::MalformedNumber);
                    }
                    seen_exp = true;
                    self.pos += 1;
                    if matches!(self.peek(), Some(b'+' | b'-')) {
                        self.pos += 1;
                    }
                    if self.eat_digits() == 0 {
                        return Err(SyntaxError::MalformedNumber);
                    }
                }
                _ => break,
            }
        }

        let text = &self.input[start..self.pos];
        if !seen_dot && !seen_exp {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Number(Number::from_i64(n)));
            }
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Number(Number::from_f64(f))),
            _ => Err(SyntaxError::MalformedNumber),
        }
    }

    /// Parse a quoted string starting at the opening quote and return its content with
    /// every escape kept verbatim.
    fn parse_string(&mut self) -> ParseResult<String> {
        self.pos += 1; // opening quote
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b'"') => {
                    let content = self.input[start..self.pos].to_string();
                    self.pos += 1;
                    return Ok(content);
                }
                Some(b'\\') => match escape_len(&self.input[self.pos..]) {
                    Some(len) => self.pos += len,
                    None => return Err(SyntaxError::UnterminatedString),
                },
                Some(_) => self.pos += 1,
                None => return Err(SyntaxError::UnterminatedString),
            }
        }
    }

    fn parse_array(&mut self) -> ParseResult<Value> {
        self.enter()?;
        self.pos += 1; // '['
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.eat(b']') {
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(b']') {
                        return Err(SyntaxError::TrailingComma);
                    }
                }
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => return Err(self.unexpected()),
                None => return Err(SyntaxError::UnexpectedEnd),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> ParseResult<Value> {
        self.enter()?;
        self.pos += 1; // '{'
        let mut map = Map::new();

        self.skip_whitespace();
        if self.eat(b'}') {
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'"') => {}
                Some(_) => return Err(self.unexpected()),
                None => return Err(SyntaxError::UnexpectedEnd),
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.pos += 1,
                Some(_) => return Err(self.unexpected()),
                None => return Err(SyntaxError::UnexpectedEnd),
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(b'}') {
                        return Err(SyntaxError::TrailingComma);
                    }
                }
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => return Err(self.unexpected()),
                None => return Err(SyntaxError::UnexpectedEnd),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        match self.options.max_depth {
            Some(max) if self.depth > max => Err(SyntaxError::NestingTooDeep(max)),
            _ => Ok(()),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    fn unexpected(&self) -> SyntaxError {
        match self.input[self.pos..].chars().next() {
            Some(c) => SyntaxError::UnexpectedCharacter(c),
            None => SyntaxError::UnexpectedEnd,
        }
    }
}

/// Byte length of the escape starting at the backslash that opens `rest`: the backslash
/// plus one character, or `\u` plus four characters of any kind. `None` if `rest` ends
/// before the escape is complete.
pub(crate) fn escape_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices().skip(1);
    let (_, c) = chars.next()?;
    let tail = if c == 'u' { 4 } else { 0 };
    let mut end = 1 + c.len_utf8();
    for _ in 0..tail {
        let (i, c) = chars.next()?;
        end = i + c.len_utf8();
    }
    Some(end)
}
