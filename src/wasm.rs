//! JavaScript bindings.
//!
//! Exposes the selection engine to WebAssembly consumers. Results cross
//! the boundary as plain objects via `serde-wasm-bindgen`, with the same
//! camelCase field names the `serde` feature produces.

use wasm_bindgen::prelude::*;

use crate::layout::Layout;
use crate::select::recommend;

/// Scores a row and returns the recommendation as a JS object.
///
/// Rejects invalid configurations (out-of-range or duplicate occupied
/// positions, zero stations) with an error string.
#[wasm_bindgen(js_name = findBestStation)]
pub fn find_best_station(
    station_count: u32,
    occupied: Vec<u32>,
    has_dividers: bool,
) -> Result<JsValue, JsValue> {
    let layout = Layout::new(station_count, occupied, has_dividers)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let result = recommend(&layout);
    serde_wasm_bindgen::to_value(&result).map_err(Into::into)
}

/// Maps a composite score to its presentation tier name.
#[wasm_bindgen(js_name = scoreTier)]
pub fn score_tier(score: u8) -> String {
    crate::describe::Tier::for_score(score).as_str().to_string()
}
