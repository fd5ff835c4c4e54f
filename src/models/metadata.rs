//! Song metadata extracted from ChordPro directives
//!
//! Known fields are typed (`Option<String>` for text, `Option<u32>` for
//! numbers); anything else lands in the `custom` map. A field that could not
//! be parsed is simply absent, never defaulted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of metadata directives with a typed slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Title,
    Subtitle,
    Artist,
    Composer,
    Lyricist,
    Key,
    Tempo,
    TimeSignature,
    Capo,
    Year,
    Album,
    Genre,
    Copyright,
}

impl MetadataField {
    /// Resolve a lower-cased directive name (or alias) to a known field
    pub fn from_name(name: &str) -> Option<MetadataField> {
        match name {
            "title" | "t" => Some(MetadataField::Title),
            "subtitle" | "st" => Some(MetadataField::Subtitle),
            "artist" => Some(MetadataField::Artist),
            "composer" => Some(MetadataField::Composer),
            "lyricist" => Some(MetadataField::Lyricist),
            "key" => Some(MetadataField::Key),
            "tempo" => Some(MetadataField::Tempo),
            "time" | "timesignature" | "time_signature" => Some(MetadataField::TimeSignature),
            "capo" => Some(MetadataField::Capo),
            "year" => Some(MetadataField::Year),
            "album" => Some(MetadataField::Album),
            "genre" => Some(MetadataField::Genre),
            "copyright" => Some(MetadataField::Copyright),
            _ => None,
        }
    }

    /// Canonical (JS-facing) name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Subtitle => "subtitle",
            MetadataField::Artist => "artist",
            MetadataField::Composer => "composer",
            MetadataField::Lyricist => "lyricist",
            MetadataField::Key => "key",
            MetadataField::Tempo => "tempo",
            MetadataField::TimeSignature => "timeSignature",
            MetadataField::Capo => "capo",
            MetadataField::Year => "year",
            MetadataField::Album => "album",
            MetadataField::Genre => "genre",
            MetadataField::Copyright => "copyright",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            MetadataField::Tempo | MetadataField::Capo | MetadataField::Year
        )
    }
}

/// Metadata record for one song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyricist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capo: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Unrecognized directives, keyed by lower-cased name
    #[serde(flatten)]
    pub custom: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directive value unless the slot is already filled
    ///
    /// Returns false when the value was rejected (non-numeric value for a
    /// numeric field) or the slot was already taken.
    pub fn set_if_absent(&mut self, name: &str, value: &str) -> bool {
        let field = match MetadataField::from_name(name) {
            Some(field) => field,
            None => {
                if self.custom.contains_key(name) {
                    return false;
                }
                self.custom.insert(name.to_string(), value.to_string());
                return true;
            }
        };

        if field.is_numeric() {
            let number = match value.parse::<u32>() {
                Ok(number) => number,
                Err(_) => return false,
            };
            let slot = match field {
                MetadataField::Tempo => &mut self.tempo,
                MetadataField::Capo => &mut self.capo,
                _ => &mut self.year,
            };
            return fill(slot, number);
        }

        let slot = match field {
            MetadataField::Title => &mut self.title,
            MetadataField::Subtitle => &mut self.subtitle,
            MetadataField::Artist => &mut self.artist,
            MetadataField::Composer => &mut self.composer,
            MetadataField::Lyricist => &mut self.lyricist,
            MetadataField::Key => &mut self.key,
            MetadataField::TimeSignature => &mut self.time_signature,
            MetadataField::Album => &mut self.album,
            MetadataField::Genre => &mut self.genre,
            _ => &mut self.copyright,
        };
        fill(slot, value.to_string())
    }

    /// True when no field, known or custom, is present
    pub fn is_empty(&self) -> bool {
        *self == Metadata::default()
    }
}

fn fill<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}
