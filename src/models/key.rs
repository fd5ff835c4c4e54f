/// Musical keys used as transposition endpoints
///
/// A key is a tonic note plus a mode. Both sharp and flat spellings of all
/// 12 pitch classes are accepted, along with theoretical keys (E#, Fb, ...)
/// which resolve to their enharmonic pitch class.
///
/// Note: enharmonic keys (C# and Db) stay distinct because they imply
/// different note spellings for transposed chords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::note::{Accidental, Letter, Note};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub tonic: Note,
    pub mode: Mode,
}

impl Key {
    pub fn new(tonic: Note, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    pub fn pitch_class(&self) -> u8 {
        self.tonic.pitch_class()
    }

    pub fn is_minor(&self) -> bool {
        self.mode == Mode::Minor
    }

    /// Canonical ASCII name, e.g. "Bb", "F#m"
    pub fn name(&self) -> String {
        match self.mode {
            Mode::Major => self.tonic.to_string(),
            Mode::Minor => format!("{}m", self.tonic),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Key {
    type Err = String;

    /// Parse a key name. The tonic letter is case-insensitive ("bb" is B flat),
    /// the accidental may be ASCII or Unicode, and the mode suffix is one of
    /// "", "maj", "major" (major) or "m", "min", "minor" (minor).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let first = chars
            .next()
            .ok_or_else(|| "Invalid key: empty key name".to_string())?;
        let letter = Letter::from_char(first.to_ascii_uppercase())
            .ok_or_else(|| format!("Invalid key: '{}'", s))?;

        let mut rest = chars.as_str();
        let mut accidental = Accidental::Natural;
        if let Some(c) = rest.chars().next() {
            if let Some(acc) = Accidental::from_char(c) {
                accidental = acc;
                rest = &rest[c.len_utf8()..];
            }
        }

        let mode = match rest.trim() {
            "" | "M" => Mode::Major,
            "m" => Mode::Minor,
            other => match other.to_ascii_lowercase().as_str() {
                "maj" | "major" => Mode::Major,
                "min" | "minor" => Mode::Minor,
                _ => return Err(format!("Invalid key: '{}'", s)),
            },
        };

        Ok(Key::new(Note::new(letter, accidental), mode))
    }
}
