//! WASM bindings for touchstone-core
//!
//! This module exposes the Touchstone codec to JavaScript/WASM.

use wasm_bindgen::prelude::*;

mod frequency;
mod touchstone;
mod value;

pub use frequency::WasmFrequency;
pub use touchstone::WasmTouchstone;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
