use serde::{Deserialize, Serialize};

/// Name given to content that appears before any section header
pub const UNTITLED_SECTION: &str = "Untitled";

/// A named block of a song (Verse, Chorus, ...) with its own chord set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub lines: Vec<String>,
    pub chords: Vec<String>,
}

impl Section {
    pub fn has_chords(&self) -> bool {
        !self.chords.is_empty()
    }
}
