// Test chord transposition between keys

use chordpro_wasm::parse::parse_chord_progression;
use chordpro_wasm::transposition::{semitone_delta, transpose_chords, transpose_text};

const SHARP_KEYS: [&str; 8] = ["C", "G", "D", "A", "E", "B", "F#", "C#"];
const FLAT_KEYS: [&str; 7] = ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"];

#[test]
fn test_c_to_d() {
    assert_eq!(
        transpose_chords(&["C", "F", "G", "Am"], "C", "D"),
        vec!["D", "G", "A", "Bm"]
    );
}

#[test]
fn test_invalid_chords_pass_through_in_position() {
    let result = transpose_chords(&["X", "InvalidChord", "C", "???"], "C", "D");

    assert_eq!(result.len(), 4);
    assert_eq!(result[0], "X");
    assert_eq!(result[1], "InvalidChord");
    assert_eq!(result[2], "D");
    assert_eq!(result[3], "???");
}

#[test]
fn test_output_is_one_to_one_with_duplicates() {
    let result = transpose_chords(&["G", "C", "G", "D", "G"], "G", "A");
    assert_eq!(result, vec!["A", "D", "A", "E", "A"]);
}

#[test]
fn test_round_trip_between_sharp_keys() {
    let chords = ["C", "Dm7", "Em", "F", "G7", "Am", "Bdim", "C/E", "F#m7b5", "Bb", "Ab", "Ebmaj7", "C#dim", "D/F#"];

    for target in SHARP_KEYS {
        let there = transpose_chords(&chords, "C", target);
        let back = transpose_chords(&there, target, "C");
        assert_eq!(back, chords, "C -> {} -> C", target);
    }
}

#[test]
fn test_c_major_spells_borrowed_chords_conventionally() {
    assert_eq!(transpose_chords(&["D", "C", "G"], "D", "C"), vec!["C", "Bb", "F"]);
    assert_eq!(transpose_chords(&["C", "Bb", "F"], "C", "D"), vec!["D", "C", "G"]);
    assert_eq!(transpose_chords(&["E", "Db", "A7", "F#m"], "E", "C"), vec!["C", "A", "F7", "Dm"]);
    assert_eq!(transpose_chords(&["D", "C#dim", "F", "Bb"], "D", "C"), vec!["C", "Bdim", "Eb", "Ab"]);
}

#[test]
fn test_chromatic_notes_follow_target_signature() {
    // Dm spells every accidental as a flat, so C#dim comes back as Dbdim
    let there = transpose_chords(&["Dm", "A7", "C#dim"], "Dm", "Em");
    assert_eq!(there, vec!["Em", "B7", "D#dim"]);
    assert_eq!(transpose_chords(&there, "Em", "Dm"), vec!["Dm", "A7", "Dbdim"]);
}

#[test]
fn test_round_trip_between_flat_keys() {
    let chords = ["F", "Gm", "Am", "Bb", "C7", "Dm", "Eb", "Bbmaj7/D", "Ab", "Db"];

    for target in FLAT_KEYS {
        let there = transpose_chords(&chords, "F", target);
        let back = transpose_chords(&there, target, "F");
        assert_eq!(back, chords, "F -> {} -> F", target);
    }
}

#[test]
fn test_round_trip_minor_keys() {
    let chords = ["Am", "Dm", "E7", "F", "G", "C"];
    let there = transpose_chords(&chords, "Am", "Em");
    assert_eq!(there, vec!["Em", "Am", "B7", "C", "D", "G"]);
    assert_eq!(transpose_chords(&there, "Em", "Am"), chords);
}

#[test]
fn test_enharmonic_targets() {
    assert_eq!(transpose_chords(&["B"], "B", "C"), vec!["C"]);
    assert_eq!(transpose_chords(&["E", "A", "B7"], "E", "F"), vec!["F", "Bb", "C7"]);
    assert_eq!(transpose_chords(&["E", "A", "B7"], "E", "F#"), vec!["F#", "B", "C#7"]);
    assert_eq!(transpose_chords(&["E", "A", "B7"], "E", "Gb"), vec!["Gb", "B", "Db7"]);
}

#[test]
fn test_bass_note_moves_independently() {
    assert_eq!(transpose_chords(&["C/G", "Am/G", "D/F#"], "C", "Eb"), vec!["Eb/Bb", "Cm/Bb", "F/A"]);
}

#[test]
fn test_semitone_delta_range() {
    for source in SHARP_KEYS.iter().chain(FLAT_KEYS.iter()) {
        for target in SHARP_KEYS.iter().chain(FLAT_KEYS.iter()) {
            let delta = semitone_delta(source, target).expect("known keys");
            assert!((0..12).contains(&delta));
        }
    }
}

#[test]
fn test_transpose_text_matches_progression() {
    let text = "{key: C}\n[Verse]\n[C]Here we [Am]go\n[F]and [G7]back\n[C]home";
    let transposed = transpose_text(text, "C", "D");

    assert!(transposed.starts_with("{key: D}\n[Verse]\n"));
    assert_eq!(parse_chord_progression(&transposed), vec!["D", "Bm", "G", "A7"]);
    assert_eq!(
        parse_chord_progression(&transposed),
        transpose_chords(&parse_chord_progression(text), "C", "D")
    );
}

#[test]
fn test_transpose_text_with_unknown_key_is_identity() {
    let text = "[C]la [G]la";
    assert_eq!(transpose_text(text, "C", "not a key"), text);
}
