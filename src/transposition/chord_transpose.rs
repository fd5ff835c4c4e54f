/// Chromatic chord transposition between keys
///
/// Instead of degree mapping, chords move by a fixed semitone delta:
/// the delta is the distance between the source and target key tonics,
/// and every root and bass note is shifted by it. Suffix text (`m7`,
/// `sus4`, `(add9)`) is reattached verbatim.
///
/// Example: C → D is +2 semitones, so [C, F, G, Am] → [D, G, A, Bm].
///
/// Anything that does not parse as a chord passes through untouched.

use serde::{Deserialize, Serialize};

use crate::models::chord::Chord;
use crate::models::key::Key;
use crate::models::note::shift_pitch_class;
use crate::parse::lexer::{lex, Token};

use super::spelling::{spell_pitch_class, spelling_for_key, Spelling};

/// Caller-tunable transposition settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransposeOptions {
    /// Force sharp or flat names; None follows the target key's signature
    pub spelling: Option<Spelling>,
}

/// Semitone distance from `source_key` up to `target_key`, in 0..12
///
/// Returns None when either key name is not recognized.
pub fn semitone_delta(source_key: &str, target_key: &str) -> Option<i32> {
    let source: Key = source_key.parse().ok()?;
    let target: Key = target_key.parse().ok()?;
    Some((target.pitch_class() as i32 - source.pitch_class() as i32).rem_euclid(12))
}

/// Transpose a single chord symbol by `semitones`
pub fn transpose_chord(symbol: &str, semitones: i32, spelling: Spelling) -> String {
    match Chord::parse(symbol) {
        Some(chord) => chord
            .map_notes(|note| spell_pitch_class(shift_pitch_class(note.pitch_class(), semitones), spelling))
            .to_string(),
        None => {
            log::trace!("passing through unrecognized chord '{}'", symbol);
            symbol.to_string()
        }
    }
}

/// Resolved shift for a key pair: (semitones, spelling), or None for a no-op
fn plan(source_key: &str, target_key: &str, options: &TransposeOptions) -> Option<(i32, Spelling)> {
    let delta = match semitone_delta(source_key, target_key) {
        Some(delta) => delta,
        None => {
            log::debug!(
                "unrecognized key pair '{}' -> '{}', chords left unchanged",
                source_key,
                target_key
            );
            return None;
        }
    };
    if delta == 0 {
        return None;
    }

    let spelling = match options.spelling {
        Some(spelling) => spelling,
        None => spelling_for_key(&target_key.parse::<Key>().ok()?),
    };
    Some((delta, spelling))
}

/// Transpose a chord list from one key to another (1:1, order preserved)
pub fn transpose_chords<S: AsRef<str>>(chords: &[S], source_key: &str, target_key: &str) -> Vec<String> {
    transpose_chords_with(chords, source_key, target_key, &TransposeOptions::default())
}

pub fn transpose_chords_with<S: AsRef<str>>(
    chords: &[S],
    source_key: &str,
    target_key: &str,
    options: &TransposeOptions,
) -> Vec<String> {
    match plan(source_key, target_key, options) {
        Some((delta, spelling)) => chords
            .iter()
            .map(|chord| transpose_chord(chord.as_ref(), delta, spelling))
            .collect(),
        None => chords.iter().map(|chord| chord.as_ref().to_string()).collect(),
    }
}

/// Transpose every chord in ChordPro text, in place
///
/// Only chord tokens and `{key: ...}` directive values change; every other
/// byte of the input is copied through.
pub fn transpose_text(text: &str, source_key: &str, target_key: &str) -> String {
    transpose_text_with(text, source_key, target_key, &TransposeOptions::default())
}

pub fn transpose_text_with(text: &str, source_key: &str, target_key: &str, options: &TransposeOptions) -> String {
    let (delta, spelling) = match plan(source_key, target_key, options) {
        Some(plan) => plan,
        None => return text.to_string(),
    };

    let mut output = String::with_capacity(text.len());
    let mut copied = 0;

    for line in lex(text) {
        for token in &line.tokens {
            let (range, replacement) = match token {
                Token::Chord(chord) => (chord.start..chord.end, transpose_chord(&chord.symbol, delta, spelling)),
                Token::Directive(directive) if directive.name == "key" => match (&directive.value, &directive.value_span) {
                    (Some(value), Some(span)) if !value.is_empty() => {
                        (span.clone(), transpose_chord(value, delta, spelling))
                    }
                    _ => continue,
                },
                Token::Directive(_) => continue,
            };

            output.push_str(&text[copied..range.start]);
            output.push_str(&replacement);
            copied = range.end;
        }
    }

    output.push_str(&text[copied..]);
    output
}
