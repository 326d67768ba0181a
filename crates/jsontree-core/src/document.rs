//! File binding: load a JSON file into a tree and write a tree back out.
//!
//! A [`Document`] keeps the parsed tree next to its last serialized text. `save` calls
//! [`Document::sync`] first, so edits made through [`Document::content_mut`] are always
//! written. The target file is overwritten unconditionally; there is no atomic replace.

use std::fs;
use std::path::Path;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{JsonError, Result};
use crate::limits::ParseOptions;
use crate::parser::Parser;
use crate::serializer::stringify;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    text: String,
    content: Value,
}

impl Document {
    /// Wrap an existing tree; the text is rendered immediately.
    pub fn new(content: Value) -> Self {
        Document {
            text: stringify(&content),
            content,
        }
    }

    /// Read and parse `path`. No document is produced on an I/O or syntax error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, ParseOptions::default(), TracingDiagnostics)
    }

    pub fn load_with<D: Diagnostics>(
        path: impl AsRef<Path>,
        options: ParseOptions,
        diagnostics: D,
    ) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| JsonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_text_with(text, options, diagnostics)?;
        tracing::debug!(path = %path.display(), bytes = doc.text.len(), "loaded JSON document");
        Ok(doc)
    }

    /// Parse text that did not come from a file. The text is kept as given until the next
    /// `sync`.
    pub fn from_text_with<D: Diagnostics>(
        text: String,
        options: ParseOptions,
        diagnostics: D,
    ) -> Result<Self> {
        let content = Parser::with_diagnostics(&text, options, diagnostics).parse()?;
        Ok(Document { text, content })
    }

    /// Re-render the cached text from the current tree.
    pub fn sync(&mut self) {
        self.text = stringify(&self.content);
    }

    /// Sync, then overwrite `path` with the canonical text.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.sync();
        fs::write(path, &self.text).map_err(|source| JsonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = self.text.len(), "saved JSON document");
        Ok(())
    }

    /// Text as of the last load, `from_text_with`, `new`, or `sync`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Value {
        &mut self.content
    }

    pub fn into_value(self) -> Value {
        self.content
    }
}

impl From<Value> for Document {
    fn from(content: Value) -> Self {
        Document::new(content)
    }
}
