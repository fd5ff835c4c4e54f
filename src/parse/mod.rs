//! ChordPro text parsing
//!
//! This module provides the notation-aware scanners: the shared line
//! lexer, normalization, directive extraction, chord scanning and
//! section segmentation. Every entry point is a pure function of its
//! input text.

pub mod lexer;
pub mod normalize;
pub mod directives;
pub mod chords;
pub mod sections;

pub use lexer::{ChordToken, DirectiveToken, LineKind};
pub use normalize::normalize_content;
pub use directives::parse_metadata;
pub use chords::{parse_chord_progression, scan_chord_tokens};
pub use sections::parse_sections;
