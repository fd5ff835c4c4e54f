//! Compact codec for storing song data
//!
//! A reusable value codec with no ChordPro knowledge: it turns any
//! JSON-compatible value (chord progression caches, arrangement metadata)
//! into a small binary blob and back with exact fidelity.

pub mod compact;
pub mod error;

pub use compact::{decode, decode_from, encode, encode_to};
pub use error::CodecError;
