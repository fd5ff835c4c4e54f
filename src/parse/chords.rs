//! Chord token scanner
//!
//! Extracts bracketed chords from ChordPro text. Chord symbols are opaque
//! here: `[C(add9)/E(b5)]` yields the single string `C(add9)/E(b5)`.
//! Section-header lines and directive bodies never contribute chords.

use std::collections::HashSet;

use super::lexer::{lex, ChordToken};

/// All chord tokens in document order, with positions
pub fn scan_chord_tokens(text: &str) -> Vec<ChordToken> {
    lex(text)
        .into_iter()
        .flat_map(|line| line.chords().cloned().collect::<Vec<_>>())
        .collect()
}

/// Ordered, de-duplicated chord progression (first occurrence wins)
pub fn parse_chord_progression(text: &str) -> Vec<String> {
    unique_in_order(lex(text).iter().flat_map(|line| line.chords()).map(|chord| chord.symbol.as_str()))
}

pub(crate) fn unique_in_order<'a>(symbols: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut progression = Vec::new();
    for symbol in symbols {
        if seen.insert(symbol) {
            progression.push(symbol.to_string());
        }
    }
    progression
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progression_deduplicates_in_first_seen_order() {
        let text = "[G]Amazing [Am]grace how [G]sweet";
        assert_eq!(parse_chord_progression(text), vec!["G", "Am"]);
    }

    #[test]
    fn test_progression_spans_lines() {
        let text = "[C]one [F]two\n[G]three [C]four\n[Am]five";
        assert_eq!(parse_chord_progression(text), vec!["C", "F", "G", "Am"]);
    }

    #[test]
    fn test_progression_skips_headers_and_directives() {
        let text = "{title: [X] marks}\n[Chorus]\n[D]Sing {c: [E] optional}";
        assert_eq!(parse_chord_progression(text), vec!["D"]);
    }

    #[test]
    fn test_progression_keeps_complex_tokens_opaque() {
        let text = "[C(add9)/E(b5)] [F#m7b5] [Bbsus4] [G/B]";
        assert_eq!(
            parse_chord_progression(text),
            vec!["C(add9)/E(b5)", "F#m7b5", "Bbsus4", "G/B"]
        );
    }

    #[test]
    fn test_unterminated_bracket_does_not_swallow_text() {
        let text = "[G]Start [Am no end\n[D]next";
        assert_eq!(parse_chord_progression(text), vec!["G", "D"]);
    }

    #[test]
    fn test_chord_only_line_is_not_a_header() {
        assert_eq!(parse_chord_progression("[Am]\n[Em]"), vec!["Am", "Em"]);
    }

    #[test]
    fn test_scan_tokens_keeps_duplicates() {
        let tokens = scan_chord_tokens("[G]a [G]b");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].column, 6);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_chord_progression("").is_empty());
        assert!(scan_chord_tokens("").is_empty());
    }
}
