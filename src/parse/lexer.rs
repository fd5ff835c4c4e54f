//! Single-pass line tokenizer for ChordPro text
//!
//! Walks the text once, line by line, with an explicit state machine per
//! line:
//! - inside `{...}`: directive body, brackets are not chords
//! - inside `[...]`: chord capture
//! - otherwise: lyric text
//!
//! Both states reset at every line end, so an unterminated `[` or `{` can
//! never swallow the rest of the document.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::models::chord::is_chord_symbol;

/// Iterator over `(byte_offset, line)` pairs accepting `\n`, `\r\n` and `\r`
///
/// Like `str::lines`, a trailing line ending does not produce an extra
/// empty line and empty text produces no lines.
pub struct LineSplitter<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> LineSplitter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        let rest = &self.text[start..];
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                let bytes = rest.as_bytes();
                let mut next = start + idx + 1;
                if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
                    next += 1;
                }
                self.pos = next;
                Some((start, &rest[..idx]))
            }
            None => {
                self.pos = self.text.len();
                Some((start, rest))
            }
        }
    }
}

/// A bracketed chord symbol with its source position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordToken {
    pub symbol: String,
    /// 1-indexed line number
    pub line: usize,
    /// 0-indexed character column of the symbol's first character
    pub column: usize,
    /// Byte range of the symbol in the source text
    pub start: usize,
    pub end: usize,
}

/// A `{name: value}` directive with its source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveToken {
    /// Trimmed, lower-cased directive name
    pub name: String,
    /// Trimmed value; None when the directive has no colon
    pub value: Option<String>,
    pub line: usize,
    /// Byte range of the whole `{...}` in the source text
    pub span: Range<usize>,
    /// Byte range of the trimmed value in the source text
    pub value_span: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Chord(ChordToken),
    Directive(DirectiveToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// `[Verse 1]`-style header, carrying the trimmed name
    Header(String),
    /// A line holding exactly one directive and nothing else
    Directive,
    Content,
}

#[derive(Debug, Clone)]
pub struct LexedLine<'a> {
    /// 1-indexed line number
    pub number: usize,
    pub text: &'a str,
    pub kind: LineKind,
    pub tokens: Vec<Token>,
}

impl<'a> LexedLine<'a> {
    pub fn chords(&self) -> impl Iterator<Item = &ChordToken> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Chord(chord) => Some(chord),
            Token::Directive(_) => None,
        })
    }

    pub fn directives(&self) -> impl Iterator<Item = &DirectiveToken> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Directive(directive) => Some(directive),
            Token::Chord(_) => None,
        })
    }
}

/// Tokenize a whole document
pub fn lex(text: &str) -> Vec<LexedLine<'_>> {
    LineSplitter::new(text)
        .enumerate()
        .map(|(idx, (offset, line))| lex_line(idx + 1, offset, line))
        .collect()
}

/// Section header test: the trimmed line is a single `[...]` span whose
/// inner text is not a chord symbol. Returns the trimmed header name.
pub fn header_name(line: &str) -> Option<&str> {
    let inner = line.trim().strip_prefix('[')?.strip_suffix(']')?;
    if inner.contains(['[', ']']) {
        return None;
    }
    let name = inner.trim();
    if name.is_empty() || is_chord_symbol(name) {
        return None;
    }
    Some(name)
}

/// Tokenize one line; `offset` is the line's byte offset in the document
pub fn lex_line(number: usize, offset: usize, line: &str) -> LexedLine<'_> {
    if line.trim().is_empty() {
        return LexedLine { number, text: line, kind: LineKind::Blank, tokens: Vec::new() };
    }

    if let Some(name) = header_name(line) {
        return LexedLine {
            number,
            text: line,
            kind: LineKind::Header(name.to_string()),
            tokens: Vec::new(),
        };
    }

    let mut tokens = Vec::new();
    // (byte index just past the opening delimiter, char column of that position)
    let mut bracket: Option<(usize, usize)> = None;
    let mut brace: Option<usize> = None;

    for (column, (idx, c)) in line.char_indices().enumerate() {
        match c {
            '{' if brace.is_none() => {
                brace = Some(idx);
                bracket = None;
            }
            '}' => {
                if let Some(open) = brace.take() {
                    tokens.push(Token::Directive(directive_token(number, offset, line, open, idx)));
                }
            }
            '[' if brace.is_none() => bracket = Some((idx + 1, column + 1)),
            ']' if brace.is_none() => {
                if let Some((start, start_column)) = bracket.take() {
                    if let Some(chord) = chord_token(number, offset, line, start, start_column, idx) {
                        tokens.push(Token::Chord(chord));
                    }
                }
            }
            _ => {}
        }
    }

    let kind = match tokens.as_slice() {
        [Token::Directive(directive)]
            if line.trim() == &line[directive.span.start - offset..directive.span.end - offset] =>
        {
            LineKind::Directive
        }
        _ => LineKind::Content,
    };

    LexedLine { number, text: line, kind, tokens }
}

fn chord_token(
    number: usize,
    offset: usize,
    line: &str,
    start: usize,
    start_column: usize,
    end: usize,
) -> Option<ChordToken> {
    let raw = &line[start..end];
    let symbol = raw.trim();
    if symbol.is_empty() {
        return None;
    }

    let leading = &raw[..raw.len() - raw.trim_start().len()];
    let symbol_start = start + leading.len();

    Some(ChordToken {
        symbol: symbol.to_string(),
        line: number,
        column: start_column + leading.chars().count(),
        start: offset + symbol_start,
        end: offset + symbol_start + symbol.len(),
    })
}

fn directive_token(number: usize, offset: usize, line: &str, open: usize, close: usize) -> DirectiveToken {
    let body_start = open + 1;
    let body = &line[body_start..close];

    let (name, value, value_span) = match body.find(':') {
        Some(colon) => {
            let raw_value = &body[colon + 1..];
            let value = raw_value.trim();
            let leading = raw_value.len() - raw_value.trim_start().len();
            let value_start = offset + body_start + colon + 1 + leading;
            (
                &body[..colon],
                Some(value.to_string()),
                Some(value_start..value_start + value.len()),
            )
        }
        None => (body, None, None),
    };

    DirectiveToken {
        name: name.trim().to_lowercase(),
        value,
        line: number,
        span: offset + open..offset + close + 1,
        value_span,
    }
}
