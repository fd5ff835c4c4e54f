//! Chord symbol model
//!
//! A chord symbol splits into three parts:
//! - root note (`F#` in `F#m7/C#`)
//! - suffix, kept verbatim (`m7`)
//! - optional bass note after a slash (`C#`), plus any verbatim text after it
//!
//! Only the notes are parsed; quality text is carried along unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::note::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    pub suffix: String,
    pub bass: Option<Note>,
    /// Text following the bass note, e.g. `(b5)` in `C(add9)/E(b5)`
    pub bass_suffix: String,
}

impl Chord {
    /// Parse a chord symbol, returning None when the root is not a note name
    ///
    /// The bass split happens at the first `/` that is followed by a note
    /// name, so `C6/9` keeps `/9` in its suffix while `G/B` has bass `B`.
    pub fn parse(symbol: &str) -> Option<Chord> {
        let (root, consumed) = Note::parse_prefix(symbol)?;
        let rest = &symbol[consumed..];

        for (idx, _) in rest.match_indices('/') {
            let after = &rest[idx + 1..];
            if let Some((bass, bass_len)) = Note::parse_prefix(after) {
                return Some(Chord {
                    root,
                    suffix: rest[..idx].to_string(),
                    bass: Some(bass),
                    bass_suffix: after[bass_len..].to_string(),
                });
            }
        }

        Some(Chord {
            root,
            suffix: rest.to_string(),
            bass: None,
            bass_suffix: String::new(),
        })
    }

    /// Rebuild the chord with new root and bass notes, keeping all suffix text
    pub fn map_notes(&self, mut f: impl FnMut(Note) -> Note) -> Chord {
        Chord {
            root: f(self.root),
            suffix: self.suffix.clone(),
            bass: self.bass.map(&mut f),
            bass_suffix: self.bass_suffix.clone(),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}{}", bass, self.bass_suffix)?;
        }
        Ok(())
    }
}

/// Quality vocabulary accepted after a chord root, longest entries first
const QUALITY_WORDS: &[&str] = &[
    "major", "minor", "maj", "Maj", "MAJ", "min", "dim", "aug", "sus", "add", "alt", "omit", "no",
    "m", "M", "b", "#", "♭", "♯", "+", "-", "°", "o", "ø", "Δ", "^", "(", ")", ",", "/", "*",
];

/// Check whether `s` reads as a chord symbol rather than a word
///
/// Used by the section-header heuristic: `[Am]`, `[G/B]`, `[Dsus4]` and
/// `[N.C.]` are chords, while `[Chorus]`, `[Bridge]` and `[Verse 1]` are
/// not. Every character after the root must belong to the chord quality
/// vocabulary (digits, `maj`, `sus`, `add`, accidentals, brackets, ...).
pub fn is_chord_symbol(s: &str) -> bool {
    if matches!(s, "N.C." | "N.C" | "NC") {
        return true;
    }

    let chord = match Chord::parse(s) {
        Some(chord) => chord,
        None => return false,
    };

    is_quality_text(&chord.suffix) && is_quality_text(&chord.bass_suffix)
}

fn is_quality_text(mut text: &str) -> bool {
    while !text.is_empty() {
        if let Some(c) = text.chars().next() {
            if c.is_ascii_digit() {
                text = &text[1..];
                continue;
            }
        }

        match QUALITY_WORDS.iter().find(|word| text.starts_with(*word)) {
            Some(word) => text = &text[word.len()..],
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_chord() {
        let chord = Chord::parse("Am").unwrap();
        assert_eq!(chord.root.to_string(), "A");
        assert_eq!(chord.suffix, "m");
        assert_eq!(chord.bass, None);
    }

    #[test]
    fn test_parse_slash_chord() {
        let chord = Chord::parse("G/B").unwrap();
        assert_eq!(chord.root.to_string(), "G");
        assert_eq!(chord.suffix, "");
        assert_eq!(chord.bass.unwrap().to_string(), "B");
    }

    #[test]
    fn test_parse_six_nine_keeps_slash_in_suffix() {
        let chord = Chord::parse("C6/9").unwrap();
        assert_eq!(chord.suffix, "6/9");
        assert_eq!(chord.bass, None);
    }

    #[test]
    fn test_parse_parenthesized_alterations() {
        let chord = Chord::parse("C(add9)/E(b5)").unwrap();
        assert_eq!(chord.suffix, "(add9)");
        assert_eq!(chord.bass.unwrap().to_string(), "E");
        assert_eq!(chord.bass_suffix, "(b5)");
        assert_eq!(chord.to_string(), "C(add9)/E(b5)");
    }

    #[test]
    fn test_parse_rejects_unknown_roots() {
        assert!(Chord::parse("X").is_none());
        assert!(Chord::parse("InvalidChord").is_none());
        assert!(Chord::parse("???").is_none());
        assert!(Chord::parse("").is_none());
    }

    #[test]
    fn test_display_round_trips_ascii_symbols() {
        for symbol in ["F#m7b5", "Bbsus4", "Cmaj7/G", "D/F#", "E7#9", "Abdim7"] {
            assert_eq!(Chord::parse(symbol).unwrap().to_string(), symbol);
        }
    }

    #[test]
    fn test_is_chord_symbol_accepts_chords() {
        for symbol in ["A", "Am", "G/B", "Dsus4", "Cmaj7", "F#m7b5", "E7#9", "Gadd9", "Bb°7", "N.C.", "C(add9)/E(b5)"] {
            assert!(is_chord_symbol(symbol), "{} should be a chord", symbol);
        }
    }

    #[test]
    fn test_is_chord_symbol_rejects_section_names() {
        for name in ["Chorus", "Bridge", "Verse 1", "Intro", "Coda", "Ending", "Fade", "Amen", "Pre-Chorus"] {
            assert!(!is_chord_symbol(name), "{} should not be a chord", name);
        }
    }
}
