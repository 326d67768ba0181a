//! Injectable observer for non-fatal conditions.
//!
//! Parsing, conversion, the [`Lenient`](crate::access::Lenient) accessor view, and
//! [`Document`](crate::document::Document) report what went wrong through a
//! [`Diagnostics`] implementation chosen by the caller. The default,
//! [`TracingDiagnostics`], forwards each event to `tracing`; [`Silent`] discards them;
//! any `Fn(&Diagnostic)` closure can be used to collect them.

use crate::error::{JsonError, SyntaxError};
use crate::value::Kind;

/// A condition worth reporting that does not by itself abort the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The parser rejected the input.
    ParseRejected(SyntaxError),
    /// `convert_to` was asked for the kind the value already has.
    ConversionNoop { kind: Kind },
    /// `convert_to` could not convert; the value was left as it was.
    ConversionFailed { from: Kind, to: Kind, reason: String },
    /// A lenient accessor fell back to its default.
    AccessorMisuse { operation: &'static str, message: String },
}

pub trait Diagnostics {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Emits every diagnostic as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::ParseRejected(err) => {
                tracing::warn!(error = %err, "rejected JSON input");
            }
            Diagnostic::ConversionNoop { kind } => {
                tracing::debug!(%kind, "conversion to the same kind is a no-op");
            }
            Diagnostic::ConversionFailed { from, to, reason } => {
                tracing::warn!(%from, %to, reason = %reason, "conversion failed");
            }
            Diagnostic::AccessorMisuse { operation, message } => {
                tracing::warn!(operation, message = %message, "accessor fell back to default");
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

impl<F> Diagnostics for F
where
    F: Fn(&Diagnostic),
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

impl Diagnostic {
    pub(crate) fn accessor(operation: &'static str, err: &JsonError) -> Self {
        Diagnostic::AccessorMisuse {
            operation,
            message: err.to_string(),
        }
    }
}
