//! WASM bindings for Frequency class

use js_sys::Float64Array;
use touchstone_core::frequency::{Frequency, FrequencyUnit};
use wasm_bindgen::prelude::*;

/// Frequency points of a Touchstone document for WASM
#[wasm_bindgen]
pub struct WasmFrequency {
    inner: Frequency,
}

#[wasm_bindgen]
impl WasmFrequency {
    /// Create a new Frequency object
    ///
    /// @param value - Frequency values expressed in `unit`
    /// @param unit - Frequency unit ('Hz', 'kHz', 'MHz', 'GHz'), GHz when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(value: Vec<f64>, unit: Option<String>) -> Result<WasmFrequency, JsValue> {
        let unit = match unit {
            Some(unit) => unit
                .parse::<FrequencyUnit>()
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => FrequencyUnit::default(),
        };

        Ok(WasmFrequency {
            inner: Frequency::from_values(value, unit),
        })
    }

    /// Frequency values in the stated unit as Float64Array
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> Float64Array {
        Float64Array::from(self.inner.value())
    }

    /// Get frequency array in Hz as Float64Array
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> Float64Array {
        Float64Array::from(self.inner.f().as_slice())
    }

    /// Start frequency in Hz
    #[wasm_bindgen(getter)]
    pub fn start(&self) -> f64 {
        self.inner.start()
    }

    /// Stop frequency in Hz
    #[wasm_bindgen(getter)]
    pub fn stop(&self) -> f64 {
        self.inner.stop()
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    /// Frequency unit as string
    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.inner.unit().as_str().to_string()
    }
}

impl WasmFrequency {
    /// Get the inner Frequency reference
    pub fn inner(&self) -> &Frequency {
        &self.inner
    }

    /// Create from existing Frequency
    pub fn from_frequency(freq: Frequency) -> Self {
        Self { inner: freq }
    }
}
