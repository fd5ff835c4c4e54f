/// Note names and chromatic pitch-class arithmetic
///
/// A note is a letter (A-G) plus an optional sharp or flat. Pitch classes
/// are numbered 0-11 starting from C:
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Parse an uppercase note letter
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Pitch class of the natural note
    pub fn pitch_class(&self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Parse an accidental sign (ASCII or Unicode)
    pub fn from_char(c: char) -> Option<Accidental> {
        match c {
            '#' | '♯' => Some(Accidental::Sharp),
            'b' | '♭' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    fn offset(&self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// A spelled note name such as `C`, `F#` or `Bb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Note {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Parse a note name at the start of `s`
    ///
    /// Returns the note and the number of bytes consumed. Only uppercase
    /// letters start a note, so lyric text like `a` or `be` never matches.
    ///
    /// Examples:
    ///   "F#m7" → (F#, 2)
    ///   "Bbsus4" → (Bb, 2)
    ///   "E/G#" → (E, 1)
    pub fn parse_prefix(s: &str) -> Option<(Note, usize)> {
        let mut chars = s.chars();
        let first = chars.next()?;
        let letter = Letter::from_char(first)?;
        let mut consumed = first.len_utf8();

        let accidental = match chars.next() {
            Some(c) => match Accidental::from_char(c) {
                Some(acc) => {
                    consumed += c.len_utf8();
                    acc
                }
                None => Accidental::Natural,
            },
            None => Accidental::Natural,
        };

        Some((Note::new(letter, accidental), consumed))
    }

    /// Chromatic pitch class (0-11)
    pub fn pitch_class(&self) -> u8 {
        (self.letter.pitch_class() as i8 + self.accidental.offset()).rem_euclid(12) as u8
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.as_str())
    }
}

impl FromStr for Note {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Note::parse_prefix(s) {
            Some((note, consumed)) if consumed == s.len() => Ok(note),
            _ => Err(format!("Invalid note name: '{}'", s)),
        }
    }
}

/// Shift a pitch class by a signed number of semitones, wrapping at the octave
pub fn shift_pitch_class(pitch_class: u8, semitones: i32) -> u8 {
    (pitch_class as i32 + semitones).rem_euclid(12) as u8
}
