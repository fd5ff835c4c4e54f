//! Content normalization
//!
//! Canonicalizes ChordPro text before it is stored or validated:
//! - `\r\n` and `\r` line endings become `\n`
//! - every line is trimmed
//! - leading and trailing blank lines are dropped (interior ones are kept)
//! - directive lines are rewritten as `{name: value}` with a lower-case name

use super::lexer::LineSplitter;

/// Normalize ChordPro text. Idempotent; empty input gives empty output.
pub fn normalize_content(text: &str) -> String {
    let lines: Vec<String> = LineSplitter::new(text)
        .map(|(_, line)| normalize_line(line.trim()))
        .collect();

    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn normalize_line(line: &str) -> String {
    match directive_body(line) {
        Some(body) => canonical_directive(body),
        None => line.to_string(),
    }
}

/// Body of a line that is exactly one `{...}` directive
fn directive_body(line: &str) -> Option<&str> {
    let body = line.strip_prefix('{')?.strip_suffix('}')?;
    if body.contains(['{', '}']) {
        return None;
    }
    Some(body)
}

fn canonical_directive(body: &str) -> String {
    match body.split_once(':') {
        Some((name, value)) => {
            let name = name.trim().to_lowercase();
            let value = value.trim();
            if value.is_empty() {
                format!("{{{}:}}", name)
            } else {
                format!("{{{}: {}}}", name, value)
            }
        }
        None => format!("{{{}}}", body.trim().to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings_collapse() {
        assert_eq!(normalize_content("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_lines_trimmed_and_outer_blank_lines_removed() {
        assert_eq!(normalize_content("\n\n  [G]Hello  \n\n\t world\n\n \n"), "[G]Hello\n\nworld");
    }

    #[test]
    fn test_directive_spacing() {
        assert_eq!(normalize_content("{Title :Amazing Grace}"), "{title: Amazing Grace}");
        assert_eq!(normalize_content("{ key:G }"), "{key: G}");
        assert_eq!(normalize_content("{SOC}"), "{soc}");
        assert_eq!(normalize_content("{title:   }"), "{title:}");
    }

    #[test]
    fn test_value_case_is_preserved() {
        assert_eq!(normalize_content("{ARTIST: John NEWTON}"), "{artist: John NEWTON}");
    }

    #[test]
    fn test_inline_braces_untouched() {
        assert_eq!(normalize_content("[G]la {c:x} la"), "[G]la {c:x} la");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize_content(""), "");
        assert_eq!(normalize_content(" \n\r\n\t"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_content("  {T:x}\r\n\r\n[C]a  \r\n");
        assert_eq!(normalize_content(&once), once);
    }
}
