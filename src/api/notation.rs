//! WASM API for the notation-aware components
//!
//! Thin wrappers: arguments are deserialized from JavaScript, the pure Rust
//! function runs, and the result is serialized back. None of these fail on
//! malformed song text; errors only come from bad JavaScript arguments.

use wasm_bindgen::prelude::*;

use crate::diagnostics::validate_chordpro_syntax;
use crate::parse::{normalize_content, parse_chord_progression, parse_metadata, parse_sections, scan_chord_tokens};
use crate::transposition::{semitone_delta, transpose_chords_with, transpose_text_with, TransposeOptions};
use crate::{wasm_log, wasm_warn};

use super::helpers::{deserialize, deserialize_or_default, serialize};

/// Canonicalize line endings, whitespace and directive spacing
#[wasm_bindgen(js_name = normalizeContent)]
pub fn normalize_chordpro(text: &str) -> String {
    normalize_content(text)
}

/// Extract the metadata record (title, artist, key, tempo, ...)
#[wasm_bindgen(js_name = parseChordProMetadata)]
pub fn parse_chordpro_metadata(text: &str) -> Result<JsValue, JsValue> {
    serialize(&parse_metadata(text), "Metadata serialization error")
}

/// Unique chords in first-seen order
#[wasm_bindgen(js_name = parseChordProgression)]
pub fn parse_chordpro_progression(text: &str) -> Result<JsValue, JsValue> {
    serialize(&parse_chord_progression(text), "Chord progression serialization error")
}

/// Every chord token with line, column and byte range
#[wasm_bindgen(js_name = scanChordTokens)]
pub fn scan_chordpro_tokens(text: &str) -> Result<JsValue, JsValue> {
    serialize(&scan_chord_tokens(text), "Chord token serialization error")
}

/// Semitone distance between two keys, or `undefined` for unknown keys
#[wasm_bindgen(js_name = semitoneDelta)]
pub fn semitone_delta_js(source_key: &str, target_key: &str) -> Option<i32> {
    semitone_delta(source_key, target_key)
}

/// Transpose a chord list (1:1, order preserved)
///
/// # Parameters
/// - `chords_js`: JavaScript array of chord strings
/// - `source_key`, `target_key`: key names such as "G", "Bb", "F#m"
/// - `options_js`: optional `{ spelling: "sharps" | "flats" }`
#[wasm_bindgen(js_name = transposeChords)]
pub fn transpose_chordpro_chords(
    chords_js: JsValue,
    source_key: &str,
    target_key: &str,
    options_js: JsValue,
) -> Result<JsValue, JsValue> {
    let chords: Vec<String> = deserialize(chords_js, "Chord list deserialization error")?;
    let options: TransposeOptions = deserialize_or_default(options_js, "Transpose options deserialization error")?;

    warn_on_unknown_keys(source_key, target_key);
    wasm_log!("transposeChords: {} chords, {} -> {}", chords.len(), source_key, target_key);

    let transposed = transpose_chords_with(&chords, source_key, target_key, &options);
    serialize(&transposed, "Chord list serialization error")
}

/// Transpose every chord (and the key directive) inside ChordPro text
#[wasm_bindgen(js_name = transposeChordPro)]
pub fn transpose_chordpro_text(
    text: &str,
    source_key: &str,
    target_key: &str,
    options_js: JsValue,
) -> Result<String, JsValue> {
    let options: TransposeOptions = deserialize_or_default(options_js, "Transpose options deserialization error")?;
    warn_on_unknown_keys(source_key, target_key);
    Ok(transpose_text_with(text, source_key, target_key, &options))
}

/// Line-precise syntax report
#[wasm_bindgen(js_name = validateChordProSyntax)]
pub fn validate_chordpro(text: &str) -> Result<JsValue, JsValue> {
    let report = validate_chordpro_syntax(text);
    if !report.is_valid {
        wasm_log!("validateChordProSyntax: {} errors", report.errors.len());
    }
    serialize(&report, "Validation report serialization error")
}

/// Named sections with their lines and chords
#[wasm_bindgen(js_name = parseSections)]
pub fn parse_chordpro_sections(text: &str) -> Result<JsValue, JsValue> {
    serialize(&parse_sections(text), "Section serialization error")
}

fn warn_on_unknown_keys(source_key: &str, target_key: &str) {
    if semitone_delta(source_key, target_key).is_none() {
        wasm_warn!(
            "Unrecognized key pair '{}' -> '{}', chords returned unchanged",
            source_key,
            target_key
        );
    }
}
