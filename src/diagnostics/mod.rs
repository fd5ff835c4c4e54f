//! Diagnostics module for ChordPro syntax checking
//!
//! Syntax problems are data, not failures: the validator returns a
//! [`ValidationReport`] which the editor renders as inline marks keyed by
//! line number. Errors make a document invalid; warnings never do.

pub mod syntax;

pub use syntax::validate_chordpro_syntax;

use serde::{Deserialize, Serialize};

/// Kind identifier for a diagnostic, stable for programmatic matching
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MalformedDirective,
    UnmatchedBracket,
    EmptyChord,
    EmptyDirectiveValue,
}

/// One problem at a specific location
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-indexed line number
    pub line: usize,
    /// 1-indexed character column
    pub column: usize,
    pub kind: DiagnosticKind,
    /// Human-readable message; always names the line
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, column: usize, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            kind,
            message: message.into(),
        }
    }
}

/// Result of validating a document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Build a report; validity is derived from the error list
    pub fn new(errors: Vec<Diagnostic>, warnings: Vec<Diagnostic>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn valid() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::valid()
    }
}
