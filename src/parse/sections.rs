//! Section segmentation
//!
//! Splits a song into named sections. Two kinds of boundaries are honoured:
//! - header lines such as `[Verse 1]` or `[Chorus]` (a lone bracket whose
//!   contents are not a chord, so `[Am]` stays a chord line)
//! - ChordPro environments: `{start_of_chorus}` / `{soc}` ... `{end_of_chorus}`
//!
//! Content before the first boundary goes into an implicit "Untitled"
//! section, which is dropped when it holds nothing but blank lines and
//! directives (typically the metadata block at the top of a song).

use crate::models::section::{Section, UNTITLED_SECTION};

use super::chords::parse_chord_progression;
use super::directives::{environment_boundary, Boundary};
use super::lexer::{lex, LexedLine, LineKind};

struct SectionBuilder<'a> {
    name: String,
    implicit: bool,
    lines: Vec<&'a LexedLine<'a>>,
}

impl<'a> SectionBuilder<'a> {
    fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), implicit: false, lines: Vec::new() }
    }

    fn implicit() -> Self {
        Self { name: UNTITLED_SECTION.to_string(), implicit: true, lines: Vec::new() }
    }

    fn finish(self) -> Option<Section> {
        let has_content = self.lines.iter().any(|line| line.kind == LineKind::Content);
        if self.implicit && !has_content {
            return None;
        }

        let first = self.lines.iter().position(|line| line.kind != LineKind::Blank);
        let last = self.lines.iter().rposition(|line| line.kind != LineKind::Blank);
        let lines: Vec<String> = match (first, last) {
            (Some(first), Some(last)) => self.lines[first..=last]
                .iter()
                .map(|line| line.text.trim().to_string())
                .collect(),
            _ => Vec::new(),
        };

        let chords = parse_chord_progression(&lines.join("\n"));
        Some(Section { name: self.name, lines, chords })
    }
}

/// Partition ChordPro text into sections, in document order
pub fn parse_sections(text: &str) -> Vec<Section> {
    let lexed = lex(text);
    let mut sections = Vec::new();
    let mut current = SectionBuilder::implicit();

    for line in &lexed {
        match &line.kind {
            LineKind::Header(name) => {
                let finished = std::mem::replace(&mut current, SectionBuilder::named(name.as_str()));
                sections.extend(finished.finish());
            }
            LineKind::Directive => {
                let boundary = line
                    .directives()
                    .next()
                    .and_then(|directive| {
                        environment_boundary(&directive.name).map(|(env, boundary)| (env, boundary, directive))
                    });

                match boundary {
                    Some((env, Boundary::Start, directive)) => {
                        let name = directive
                            .value
                            .as_deref()
                            .filter(|label| !label.is_empty())
                            .unwrap_or(env.default_name());
                        let finished = std::mem::replace(&mut current, SectionBuilder::named(name));
                        sections.extend(finished.finish());
                    }
                    Some((_, Boundary::End, _)) => {
                        let finished = std::mem::replace(&mut current, SectionBuilder::implicit());
                        sections.extend(finished.finish());
                    }
                    None => current.lines.push(line),
                }
            }
            LineKind::Blank | LineKind::Content => current.lines.push(line),
        }
    }

    sections.extend(current.finish());
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_from_headers() {
        let text = "[Verse 1]\n[G]Amazing [C]grace\n\n[Chorus]\n[D]How sweet [G]the sound";
        let sections = parse_sections(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Verse 1");
        assert_eq!(sections[0].lines, vec!["[G]Amazing [C]grace"]);
        assert_eq!(sections[0].chords, vec!["G", "C"]);
        assert_eq!(sections[1].name, "Chorus");
        assert_eq!(sections[1].chords, vec!["D", "G"]);
    }

    #[test]
    fn test_leading_content_goes_to_untitled() {
        let sections = parse_sections("[C]Intro line\n[Verse]\n[F]words");
        assert_eq!(sections[0].name, UNTITLED_SECTION);
        assert_eq!(sections[0].chords, vec!["C"]);
        assert_eq!(sections[1].name, "Verse");
    }

    #[test]
    fn test_metadata_only_preamble_is_dropped() {
        let sections = parse_sections("{title: Song}\n{key: G}\n\n[Verse]\n[G]la");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Verse");
    }

    #[test]
    fn test_section_without_chords_has_empty_list() {
        let sections = parse_sections("[Spoken]\nNo chords here at all");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].chords.is_empty());
        assert_eq!(sections[0].lines, vec!["No chords here at all"]);
    }

    #[test]
    fn test_chord_line_is_not_a_header() {
        let sections = parse_sections("[Intro]\n[Am]\n[Em]");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].chords, vec!["Am", "Em"]);
    }

    #[test]
    fn test_environment_directives() {
        let text = "{start_of_verse: Verse 2}\n[A]one\n{end_of_verse}\n{soc}\n[E]two\n{eoc}";
        let sections = parse_sections(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Verse 2");
        assert_eq!(sections[0].chords, vec!["A"]);
        assert_eq!(sections[1].name, "Chorus");
        assert_eq!(sections[1].chords, vec!["E"]);
    }

    #[test]
    fn test_empty_input_has_no_sections() {
        assert!(parse_sections("").is_empty());
    }
}
