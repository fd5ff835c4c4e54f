pub mod chord_transpose;
pub mod spelling;

pub use chord_transpose::{
    semitone_delta, transpose_chord, transpose_chords, transpose_chords_with, transpose_text,
    transpose_text_with, TransposeOptions,
};
pub use spelling::{spell_pitch_class, spelling_for_key, Spelling};
