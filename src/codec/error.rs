//! Error types for the compact codec
//!
//! Decoding rejects any blob not produced by the encoder.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is shorter than the blob header
    #[error("blob too short: {0} bytes")]
    TooShort(usize),

    /// Header magic does not match
    #[error("not a compressed song blob (bad magic)")]
    BadMagic,

    /// Blob written by a newer or unknown format version
    #[error("unsupported blob format version {0}")]
    UnsupportedVersion(u8),

    /// Compression failed while encoding
    #[error("compression failed: {0}")]
    Compress(String),

    /// zlib stream is corrupt, truncated or fails its checksum
    #[error("corrupt compressed payload: {0}")]
    Decompress(String),

    /// Bytes remain after the end of the zlib stream
    #[error("{0} unexpected trailing bytes after payload")]
    TrailingBytes(usize),

    #[error("failed to serialize value: {0}")]
    Serialize(String),

    #[error("failed to deserialize payload: {0}")]
    Deserialize(String),
}
