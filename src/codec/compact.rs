//! Compact value codec
//!
//! Blob layout:
//! ```text
//! +-------+---------+---------------------------------+
//! | "CPZ" | version | zlib(compact JSON serialization) |
//! +-------+---------+---------------------------------+
//!   3 B      1 B
//! ```
//!
//! The payload is plain `serde_json`, so any JSON-compatible value
//! round-trips exactly, including `null`, `{}`, `[]` and deep nesting.
//! zlib's trailer checksum plus the explicit stream-end and trailing-byte
//! checks make corrupt or foreign blobs fail loudly.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::CodecError;

pub const MAGIC: [u8; 3] = *b"CPZ";
pub const FORMAT_VERSION: u8 = 1;
pub const HEADER_LEN: usize = MAGIC.len() + 1;
/// Largest decompressed payload `decode` accepts
pub const MAX_DECODED_LEN: usize = 32 * 1024 * 1024;

/// Encode a JSON value into a compressed blob
pub fn encode(value: &Value) -> Result<Vec<u8>, CodecError> {
    encode_to(value)
}

/// Decode a blob produced by [`encode`]
pub fn decode(bytes: &[u8]) -> Result<Value, CodecError> {
    decode_from(bytes)
}

/// Encode any serializable value
pub fn encode_to<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let json = serde_json::to_vec(value).map_err(|e| CodecError::Serialize(e.to_string()))?;

    let mut blob = Vec::with_capacity(HEADER_LEN + json.len() / 2);
    blob.extend_from_slice(&MAGIC);
    blob.push(FORMAT_VERSION);

    let mut encoder = ZlibEncoder::new(blob, Compression::default());
    encoder
        .write_all(&json)
        .map_err(|e| CodecError::Compress(e.to_string()))?;
    let blob = encoder
        .finish()
        .map_err(|e| CodecError::Compress(e.to_string()))?;

    log::debug!("encoded {} JSON bytes into {} byte blob", json.len(), blob.len());
    Ok(blob)
}

/// Decode a blob into any deserializable type
pub fn decode_from<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    let payload = read_header(bytes)?;
    let json = inflate(payload)?;
    serde_json::from_slice(&json).map_err(|e| CodecError::Deserialize(e.to_string()))
}

fn read_header(bytes: &[u8]) -> Result<&[u8], CodecError> {
    if bytes.len() < HEADER_LEN {
        return Err(CodecError::TooShort(bytes.len()));
    }
    if bytes[..MAGIC.len()] != MAGIC {
        return Err(CodecError::BadMagic);
    }
    let version = bytes[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    Ok(&bytes[HEADER_LEN..])
}

/// Inflate a complete zlib stream, rejecting truncation and trailing bytes
fn inflate(payload: &[u8]) -> Result<Vec<u8>, CodecError> {
    inflate_limited(payload, MAX_DECODED_LEN)
}

/// Inflate with an upper bound on the decompressed size
fn inflate_limited(payload: &[u8], limit: usize) -> Result<Vec<u8>, CodecError> {
    let mut inflater = Decompress::new(true);
    // One byte of headroom past the limit is enough to detect overflow
    let ceiling = limit.saturating_add(1);
    let mut output = Vec::with_capacity(payload.len().saturating_mul(4).max(64).min(ceiling));

    loop {
        if output.len() == output.capacity() {
            let headroom = (ceiling - output.len()).min(output.capacity().max(64));
            output.reserve_exact(headroom);
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let status = inflater
            .decompress_vec(&payload[before_in as usize..], &mut output, FlushDecompress::Finish)
            .map_err(|e| CodecError::Decompress(e.to_string()))?;

        if output.len() > limit {
            return Err(CodecError::Decompress(format!("payload inflates past {} bytes", limit)));
        }
        if status == Status::StreamEnd {
            break;
        }
        if inflater.total_in() == before_in && inflater.total_out() == before_out {
            return Err(CodecError::Decompress("truncated zlib stream".to_string()));
        }
    }

    let consumed = inflater.total_in() as usize;
    if consumed < payload.len() {
        return Err(CodecError::TrailingBytes(payload.len() - consumed));
    }

    Ok(output)
}
