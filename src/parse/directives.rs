//! Directive extraction
//!
//! Builds a [`Metadata`] record from `{name: value}` directives. Malformed
//! directives are skipped silently.

use crate::models::metadata::Metadata;

use super::lexer::lex;

/// Short forms of the section environment directives
const ENVIRONMENT_SHORTHANDS: &[(&str, Environment, Boundary)] = &[
    ("soc", Environment::Chorus, Boundary::Start),
    ("eoc", Environment::Chorus, Boundary::End),
    ("sov", Environment::Verse, Boundary::Start),
    ("eov", Environment::Verse, Boundary::End),
    ("sob", Environment::Bridge, Boundary::Start),
    ("eob", Environment::Bridge, Boundary::End),
    ("sot", Environment::Tab, Boundary::Start),
    ("eot", Environment::Tab, Boundary::End),
    ("sog", Environment::Grid, Boundary::Start),
    ("eog", Environment::Grid, Boundary::End),
];

/// Directives that are complete without a `: value` part
const FLAG_DIRECTIVES: &[&str] = &[
    "chorus",
    "new_page",
    "np",
    "new_physical_page",
    "npp",
    "new_song",
    "ns",
    "column_break",
    "colb",
    "grid",
    "g",
    "no_grid",
    "ng",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

/// Section environments opened by `{start_of_*}` directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Chorus,
    Verse,
    Bridge,
    Tab,
    Grid,
    Other,
}

impl Environment {
    fn from_suffix(suffix: &str) -> Environment {
        match suffix {
            "chorus" => Environment::Chorus,
            "verse" => Environment::Verse,
            "bridge" => Environment::Bridge,
            "tab" => Environment::Tab,
            "grid" => Environment::Grid,
            _ => Environment::Other,
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            Environment::Chorus => "Chorus",
            Environment::Verse => "Verse",
            Environment::Bridge => "Bridge",
            Environment::Tab => "Tab",
            Environment::Grid => "Grid",
            Environment::Other => "Section",
        }
    }
}

/// Classify a lower-cased directive name as a section environment boundary
pub fn environment_boundary(name: &str) -> Option<(Environment, Boundary)> {
    if let Some(suffix) = name.strip_prefix("start_of_") {
        return Some((Environment::from_suffix(suffix), Boundary::Start));
    }
    if let Some(suffix) = name.strip_prefix("end_of_") {
        return Some((Environment::from_suffix(suffix), Boundary::End));
    }
    ENVIRONMENT_SHORTHANDS
        .iter()
        .find(|(short, _, _)| *short == name)
        .map(|(_, env, boundary)| (*env, *boundary))
}

/// True for directives that are valid without a colon
pub fn is_flag_directive(name: &str) -> bool {
    environment_boundary(name).is_some() || FLAG_DIRECTIVES.contains(&name)
}

/// Extract song metadata from ChordPro text
///
/// Directives without a colon, with an empty name or with an empty value
/// are skipped. When a field repeats, the first occurrence is kept.
pub fn parse_metadata(text: &str) -> Metadata {
    let mut metadata = Metadata::new();

    for line in lex(text) {
        for directive in line.directives() {
            let value = match directive.value.as_deref() {
                Some(value) if !value.is_empty() => value,
                _ => continue,
            };
            if directive.name.is_empty() || environment_boundary(&directive.name).is_some() {
                continue;
            }

            if !metadata.set_if_absent(&directive.name, value) {
                log::debug!(
                    "skipped directive '{}' on line {} (duplicate or non-numeric)",
                    directive.name,
                    directive.line
                );
            }
        }
    }

    metadata
}
