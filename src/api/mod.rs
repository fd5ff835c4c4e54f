//! ChordPro Engine WASM API
//!
//! This module provides the JavaScript-facing API consumed by the song
//! editor, the import pipeline and the storage layer.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `notation`: Normalization, metadata, chords, transposition, validation, sections
//! - `codec`: Compressed blob encode/decode

pub mod helpers;
pub mod notation;
pub mod codec;

pub use notation::{
    normalize_chordpro, parse_chordpro_metadata, parse_chordpro_progression, parse_chordpro_sections,
    scan_chordpro_tokens, semitone_delta_js, transpose_chordpro_chords, transpose_chordpro_text,
    validate_chordpro,
};
pub use codec::{compress_data, decompress_data};
