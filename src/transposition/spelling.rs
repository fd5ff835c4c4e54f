/// Key-signature based note spelling
///
/// Format: key name → Sharps / Flats / Mixed
///
/// Transposed notes are spelled with the accidental family of the target
/// key's signature:
///   "D"   → Sharps   (D E F# G A B C#)
///   "Bb"  → Flats    (Bb C D Eb F G A)
///   "Dm"  → Flats    (relative of F)
///   "C"   → Mixed    (no signature; C# Eb F# Ab Bb)
///
/// Keys missing from the table (theoretical keys like "G#" or "Fb") fall
/// back to the accidental written on their tonic.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::key::Key;
use crate::models::note::{Accidental, Letter, Note};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharps,
    Flats,
    /// Common chromatic names for keys without a signature
    Mixed,
}

const SHARP_SPELLINGS: [Note; 12] = [
    Note::new(Letter::C, Accidental::Natural),
    Note::new(Letter::C, Accidental::Sharp),
    Note::new(Letter::D, Accidental::Natural),
    Note::new(Letter::D, Accidental::Sharp),
    Note::new(Letter::E, Accidental::Natural),
    Note::new(Letter::F, Accidental::Natural),
    Note::new(Letter::F, Accidental::Sharp),
    Note::new(Letter::G, Accidental::Natural),
    Note::new(Letter::G, Accidental::Sharp),
    Note::new(Letter::A, Accidental::Natural),
    Note::new(Letter::A, Accidental::Sharp),
    Note::new(Letter::B, Accidental::Natural),
];

const FLAT_SPELLINGS: [Note; 12] = [
    Note::new(Letter::C, Accidental::Natural),
    Note::new(Letter::D, Accidental::Flat),
    Note::new(Letter::D, Accidental::Natural),
    Note::new(Letter::E, Accidental::Flat),
    Note::new(Letter::E, Accidental::Natural),
    Note::new(Letter::F, Accidental::Natural),
    Note::new(Letter::G, Accidental::Flat),
    Note::new(Letter::G, Accidental::Natural),
    Note::new(Letter::A, Accidental::Flat),
    Note::new(Letter::A, Accidental::Natural),
    Note::new(Letter::B, Accidental::Flat),
    Note::new(Letter::B, Accidental::Natural),
];

const MIXED_SPELLINGS: [Note; 12] = [
    Note::new(Letter::C, Accidental::Natural),
    Note::new(Letter::C, Accidental::Sharp),
    Note::new(Letter::D, Accidental::Natural),
    Note::new(Letter::E, Accidental::Flat),
    Note::new(Letter::E, Accidental::Natural),
    Note::new(Letter::F, Accidental::Natural),
    Note::new(Letter::F, Accidental::Sharp),
    Note::new(Letter::G, Accidental::Natural),
    Note::new(Letter::A, Accidental::Flat),
    Note::new(Letter::A, Accidental::Natural),
    Note::new(Letter::B, Accidental::Flat),
    Note::new(Letter::B, Accidental::Natural),
];

lazy_static! {
    static ref KEY_SIGNATURES: HashMap<&'static str, Spelling> = build_key_signature_table();
}

fn build_key_signature_table() -> HashMap<&'static str, Spelling> {
    let mut table = HashMap::new();

    // No signature
    add_keys(&mut table, Spelling::Mixed, &["C", "Am"]);

    // Major keys with sharps in the signature
    add_keys(&mut table, Spelling::Sharps, &["G", "D", "A", "E", "B", "F#", "C#"]);

    // Major keys with flats in the signature
    add_keys(&mut table, Spelling::Flats, &["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"]);

    // Relative minors: Em (G) through A#m (C#)
    add_keys(
        &mut table,
        Spelling::Sharps,
        &["Em", "Bm", "F#m", "C#m", "G#m", "D#m", "A#m"],
    );

    // Relative minors: Dm (F) through Abm (Cb)
    add_keys(&mut table, Spelling::Flats, &["Dm", "Gm", "Cm", "Fm", "Bbm", "Ebm", "Abm"]);

    table
}

fn add_keys(table: &mut HashMap<&'static str, Spelling>, spelling: Spelling, keys: &[&'static str]) {
    for key in keys {
        table.insert(*key, spelling);
    }
}

/// Spelling convention of a key's signature
pub fn spelling_for_key(key: &Key) -> Spelling {
    if let Some(spelling) = KEY_SIGNATURES.get(key.name().as_str()) {
        return *spelling;
    }

    match key.tonic.accidental {
        Accidental::Flat => Spelling::Flats,
        Accidental::Sharp | Accidental::Natural => Spelling::Sharps,
    }
}

/// Spell a pitch class (0-11) as a note name
pub fn spell_pitch_class(pitch_class: u8, spelling: Spelling) -> Note {
    let idx = (pitch_class % 12) as usize;
    match spelling {
        Spelling::Sharps => SHARP_SPELLINGS[idx],
        Spelling::Flats => FLAT_SPELLINGS[idx],
        Spelling::Mixed => MIXED_SPELLINGS[idx],
    }
}
