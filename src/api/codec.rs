//! WASM API for the compact codec
//!
//! `compressData` accepts any JSON-compatible JavaScript value and returns a
//! `Uint8Array`; `decompressData` reverses it and throws on foreign or
//! corrupt blobs.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::{wasm_error, wasm_info};

use super::helpers::{deserialize, js_error, serialize};

#[wasm_bindgen(js_name = compressData)]
pub fn compress_data(value_js: JsValue) -> Result<Vec<u8>, JsValue> {
    let value: Value = deserialize(value_js, "Value deserialization error")?;
    codec::encode(&value).map_err(|e| js_error(format!("compressData failed: {}", e)))
}

#[wasm_bindgen(js_name = decompressData)]
pub fn decompress_data(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let value = codec::decode(bytes).map_err(|e| {
        wasm_error!("decompressData rejected {} byte blob", bytes.len());
        JsValue::from_str(&format!("decompressData failed: {}", e))
    })?;
    wasm_info!("decompressData: {} byte blob decoded", bytes.len());
    serialize(&value, "Value serialization error")
}
