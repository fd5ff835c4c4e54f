//! Models module for the ChordPro engine
//!
//! This module contains the data models shared by the scanners,
//! the transposition engine and the WASM API.

pub mod note;
pub mod key;
pub mod chord;
pub mod metadata;
pub mod section;

// Re-export commonly used types
pub use note::{Accidental, Letter, Note};
pub use key::{Key, Mode};
pub use chord::{is_chord_symbol, Chord};
pub use metadata::{Metadata, MetadataField};
pub use section::Section;
