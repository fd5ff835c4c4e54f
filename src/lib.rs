//! ChordPro Notation Engine WASM Module
//!
//! Pure text-processing core for ChordPro songs: normalization, metadata
//! extraction, chord scanning, transposition, syntax validation, section
//! segmentation, plus a compact value codec for storage. The `api` module
//! exposes all of it to JavaScript.

pub mod models;
pub mod parse;
pub mod transposition;
pub mod diagnostics;
pub mod codec;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use parse::{
    normalize_content, parse_chord_progression, parse_metadata, parse_sections, scan_chord_tokens, ChordToken,
};
pub use transposition::{semitone_delta, transpose_chords, transpose_text, TransposeOptions};
pub use diagnostics::{validate_chordpro_syntax, Diagnostic, DiagnosticKind, ValidationReport};
pub use codec::CodecError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("ChordPro engine WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
