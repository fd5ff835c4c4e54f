// Test compact codec round trips and corrupt-input rejection

use chordpro_wasm::codec::{decode, encode, CodecError};
use serde_json::{json, Value};

fn round_trip(value: &Value) -> Value {
    let blob = encode(value).expect("encode should succeed");
    decode(&blob).expect("decode should succeed")
}

#[test]
fn test_primitives_round_trip() {
    let values = [
        Value::Null,
        json!(true),
        json!(false),
        json!(0),
        json!(-42),
        json!(u64::MAX),
        json!(3.5),
        json!(-0.125),
        json!(""),
        json!("Ünïcödé ♯♭ ©"),
    ];
    for value in values {
        assert_eq!(round_trip(&value), value);
    }
}

#[test]
fn test_empty_containers_round_trip() {
    assert_eq!(round_trip(&json!({})), json!({}));
    assert_eq!(round_trip(&json!([])), json!([]));
    assert_eq!(round_trip(&json!({"a": {}, "b": [[], {}]})), json!({"a": {}, "b": [[], {}]}));
}

#[test]
fn test_deeply_nested_round_trip() {
    let mut value = json!("leaf");
    for depth in 0..64 {
        value = if depth % 2 == 0 {
            json!([value, null])
        } else {
            json!({ "level": depth, "child": value })
        };
    }
    assert_eq!(round_trip(&value), value);
}

#[test]
fn test_large_progression_is_smaller_than_json() {
    let chords: Vec<Value> = ["G", "C", "D", "Em"]
        .iter()
        .cycle()
        .take(1000)
        .map(|c| json!(c))
        .collect();
    let value = json!({ "songId": "amazing-grace", "chords": chords });

    let blob = encode(&value).unwrap();
    let text_len = serde_json::to_string(&value).unwrap().len();

    assert!(blob.len() < text_len, "blob {} bytes vs json {} bytes", blob.len(), text_len);
    assert_eq!(decode(&blob).unwrap(), value);
}

#[test]
fn test_realistic_arrangement_metadata() {
    let value = json!({
        "title": "Amazing Grace",
        "key": "G",
        "tempo": 90,
        "capo": null,
        "sections": [
            { "name": "Verse 1", "chords": ["G", "G7", "C", "G"] },
            { "name": "Chorus", "chords": [] }
        ],
        "flags": { "public": true, "reviewed": false }
    });
    assert_eq!(round_trip(&value), value);
}

#[test]
fn test_foreign_bytes_are_rejected() {
    assert!(decode(b"").is_err());
    assert!(decode(b"null").is_err());
    assert!(decode(&[0x78, 0x9c, 0x01, 0x02, 0x03]).is_err());
    assert_eq!(decode(b"PK\x03\x04rest"), Err(CodecError::BadMagic));
}

#[test]
fn test_corrupted_blob_is_rejected() {
    let blob = encode(&json!({ "chords": ["G", "C", "D"] })).unwrap();

    let mut flipped = blob.clone();
    let last = flipped.len() - 1;
    flipped[last] ^= 0xFF;
    assert!(decode(&flipped).is_err(), "checksum corruption must fail");

    let truncated = &blob[..blob.len() / 2];
    assert!(decode(truncated).is_err(), "truncated blob must fail");
}

/// xorshift64*, enough to sweep bit patterns reproducibly
struct BitSweep(u64);

impl BitSweep {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

fn assert_floats_round_trip(floats: &[f64]) {
    let value = Value::Array(floats.iter().map(|f| json!(f)).collect());
    let decoded = decode(&encode(&value).unwrap()).unwrap();

    for (original, back) in floats.iter().zip(decoded.as_array().unwrap()) {
        let back = back.as_f64().unwrap();
        assert_eq!(original.to_bits(), back.to_bits(), "{:e} came back as {:e}", original, back);
    }
}

#[test]
fn test_floats_round_trip_bit_exact() {
    assert_floats_round_trip(&[0.00021612928949865662, 1.0715660391465826e-75, 72.35, 0.1, f64::MAX, f64::MIN_POSITIVE]);
}

#[test]
fn test_random_float_bit_patterns_round_trip() {
    let mut sweep = BitSweep(0x9E37_79B9_7F4A_7C15);
    let floats: Vec<f64> = std::iter::repeat_with(|| f64::from_bits(sweep.next()))
        .filter(|f| f.is_finite())
        .take(20_000)
        .collect();

    assert_floats_round_trip(&floats);
}

#[test]
fn test_uniform_tempo_range_floats_round_trip() {
    let mut sweep = BitSweep(0xD1B5_4A32_D192_ED03);
    let floats: Vec<f64> = (0..20_000)
        .map(|_| (sweep.next() >> 11) as f64 / (1u64 << 53) as f64 * 300.0)
        .collect();

    assert_floats_round_trip(&floats);
}
