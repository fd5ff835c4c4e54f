//! ChordPro syntax diagnostics - detects malformed directives and unmatched chord brackets
//!
//! Scans the raw text (not normalized) one line at a time with explicit state:
//! - On `{`: open a directive; a second `{` before closing is malformed
//! - On `}`: close and check the directive body; with nothing open it is stray
//! - On `[` / `]`: pair chord brackets outside directives
//! - At line end: anything still open is reported on its opening line
//!
//! The only state carried across lines is the "unterminated directive" flag,
//! which swallows one stray `}` on the following line so a directive split
//! across two lines is reported once, not twice.

use crate::parse::directives::is_flag_directive;
use crate::parse::lexer::LineSplitter;

use super::{Diagnostic, DiagnosticKind, ValidationReport};

#[derive(Default)]
struct Findings {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Findings {
    fn malformed(&mut self, line: usize, column: usize, detail: String) {
        self.errors.push(Diagnostic::new(
            line,
            column,
            DiagnosticKind::MalformedDirective,
            format!("line {}: malformed directive, {}", line, detail),
        ));
    }

    fn unmatched(&mut self, line: usize, column: usize, detail: String) {
        self.errors.push(Diagnostic::new(
            line,
            column,
            DiagnosticKind::UnmatchedBracket,
            format!("line {}: unmatched {}", line, detail),
        ));
    }
}

/// Validate ChordPro text, collecting every error rather than stopping at the first
pub fn validate_chordpro_syntax(text: &str) -> ValidationReport {
    let mut findings = Findings::default();
    let mut carried_open_directive = false;

    for (idx, (_, line)) in LineSplitter::new(text).enumerate() {
        carried_open_directive = check_line(line, idx + 1, carried_open_directive, &mut findings);
    }

    ValidationReport::new(findings.errors, findings.warnings)
}

/// Check one line; returns true when a directive was left open at line end
fn check_line(line: &str, number: usize, carried_open_directive: bool, findings: &mut Findings) -> bool {
    let mut absorb_close = carried_open_directive;
    // (1-indexed column, byte index) of the open delimiter
    let mut brace: Option<(usize, usize)> = None;
    let mut bracket: Option<(usize, usize)> = None;

    for (col_idx, (byte, c)) in line.char_indices().enumerate() {
        let column = col_idx + 1;
        match c {
            '{' => match brace {
                Some((open_column, _)) => findings.malformed(
                    number,
                    column,
                    format!("'{{' at column {} inside the directive opened at column {}", column, open_column),
                ),
                None => brace = Some((column, byte)),
            },
            '}' => match brace.take() {
                Some((open_column, start)) => {
                    check_directive_body(&line[start + 1..byte], number, open_column, findings)
                }
                None if absorb_close => absorb_close = false,
                None => findings.malformed(number, column, format!("'}}' at column {} has no opening '{{'", column)),
            },
            '[' if brace.is_none() => {
                if let Some((open_column, _)) = bracket {
                    findings.unmatched(
                        number,
                        open_column,
                        format!("'[' at column {} is reopened before it is closed", open_column),
                    );
                }
                bracket = Some((column, byte));
            }
            ']' if brace.is_none() => match bracket.take() {
                Some((open_column, start)) => {
                    if line[start + 1..byte].trim().is_empty() {
                        findings.warnings.push(Diagnostic::new(
                            number,
                            open_column,
                            DiagnosticKind::EmptyChord,
                            format!("line {}: empty chord brackets at column {}", number, open_column),
                        ));
                    }
                }
                None => findings.unmatched(number, column, format!("']' at column {} has no opening '['", column)),
            },
            _ => {}
        }
    }

    if let Some((open_column, _)) = bracket {
        findings.unmatched(number, open_column, format!("'[' at column {} is never closed", open_column));
    }

    match brace {
        Some((open_column, _)) => {
            findings.malformed(number, open_column, format!("'{{' at column {} is never closed", open_column));
            true
        }
        None => false,
    }
}

fn check_directive_body(body: &str, number: usize, column: usize, findings: &mut Findings) {
    let (name, value) = match body.split_once(':') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (body.trim(), None),
    };

    if name.is_empty() {
        findings.malformed(number, column, "empty directive name".to_string());
        return;
    }

    match value {
        None if !is_flag_directive(&name.to_lowercase()) => {
            findings.malformed(number, column, format!("'{}' is missing the ':' separator", name))
        }
        Some("") => findings.warnings.push(Diagnostic::new(
            number,
            column,
            DiagnosticKind::EmptyDirectiveValue,
            format!("line {}: directive '{}' has an empty value", number, name),
        )),
        _ => {}
    }
}
