//! WASM bindings for Touchstone class

use js_sys::{Array, Float64Array};
use ndarray::Array3;
use num_complex::Complex64;
use touchstone_core::math::{complex_2_db, complex_2_degree, complex_2_magnitude};
use touchstone_core::{Resistance, Touchstone, TouchstoneError, WriterOptions};
use wasm_bindgen::prelude::*;

use crate::frequency::WasmFrequency;
use crate::value::from_js;

/// Touchstone document for WASM
#[wasm_bindgen]
pub struct WasmTouchstone {
    inner: Touchstone,
}

/// Helper function to extract number of ports from filename extension
fn extract_nports_from_filename(filename: &str) -> Option<usize> {
    let ext = filename.rsplit_once('.')?.1.to_lowercase();
    ext.strip_prefix('s')?
        .strip_suffix('p')?
        .parse()
        .ok()
        .filter(|&n| n > 0)
}

fn to_js(err: TouchstoneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl Default for WasmTouchstone {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmTouchstone {
    /// Create an empty document
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTouchstone {
        WasmTouchstone {
            inner: Touchstone::new(),
        }
    }

    /// Load a document from Touchstone file content
    ///
    /// Note: In WASM, we can't read files directly. Pass the file content as a string.
    ///
    /// @param content - The Touchstone file content as string
    /// @param filename - Original filename (e.g., "test.s2p") used to determine port count
    #[wasm_bindgen(js_name = fromTouchstoneContent)]
    pub fn from_touchstone_content(
        content: &str,
        filename: &str,
    ) -> Result<WasmTouchstone, JsValue> {
        let nports = extract_nports_from_filename(filename).ok_or_else(|| {
            JsValue::from_str("Invalid filename: expected .sNp extension (e.g., test.s2p)")
        })?;

        let inner = Touchstone::from_str(content, nports).map_err(to_js)?;
        Ok(WasmTouchstone { inner })
    }

    /// Parse `content` into this document
    ///
    /// After a data block error the header fields stay readable.
    #[wasm_bindgen(js_name = readFromString)]
    pub fn read_from_string(&mut self, content: &str, nports: usize) -> Result<(), JsValue> {
        self.inner.read_str(content, nports).map_err(to_js)
    }

    /// Render the document as Touchstone text
    ///
    /// @param precision - Decimal places of each value (default: 9)
    /// @param pairs_per_line - Value pairs per line for 3+ ports (default: 4)
    #[wasm_bindgen(js_name = writeToString)]
    pub fn write_to_string(
        &self,
        precision: Option<usize>,
        pairs_per_line: Option<usize>,
    ) -> Result<String, JsValue> {
        let defaults = WriterOptions::default();
        let options = WriterOptions {
            precision: precision.unwrap_or(defaults.precision),
            pairs_per_line: pairs_per_line.unwrap_or(defaults.pairs_per_line),
        };

        let mut buf = Vec::new();
        self.inner
            .write_with(&mut buf, &options)
            .map_err(to_js)?;
        String::from_utf8(buf).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Comment lines, without the leading "!"
    #[wasm_bindgen(getter)]
    pub fn comments(&self) -> Array {
        self.inner
            .comments()
            .iter()
            .map(|c| JsValue::from_str(c))
            .collect()
    }

    #[wasm_bindgen(js_name = setComments)]
    pub fn set_comments(&mut self, comments: Vec<String>) {
        self.inner.set_comments(comments);
    }

    /// Data format ('RI', 'MA', 'DB'), undefined when unset
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> Option<String> {
        self.inner.format().map(|f| f.as_str().to_string())
    }

    /// Assign the format; undefined or null clears it
    #[wasm_bindgen(js_name = setFormat)]
    pub fn set_format(&mut self, value: JsValue) -> Result<(), JsValue> {
        self.inner
            .set_format_value(from_js(&value).as_ref())
            .map_err(to_js)
    }

    /// Parameter type ('S', 'Y', 'Z', 'H', 'G'), undefined when unset
    #[wasm_bindgen(getter)]
    pub fn parameter(&self) -> Option<String> {
        self.inner.parameter().map(|p| p.as_str().to_string())
    }

    /// Assign the parameter type; undefined or null clears it
    #[wasm_bindgen(js_name = setParameter)]
    pub fn set_parameter(&mut self, value: JsValue) -> Result<(), JsValue> {
        self.inner
            .set_parameter_value(from_js(&value).as_ref())
            .map_err(to_js)
    }

    /// Reference resistance: a number, or one number per port
    #[wasm_bindgen(getter)]
    pub fn resistance(&self) -> JsValue {
        match self.inner.resistance() {
            Resistance::Single(r) => JsValue::from_f64(*r),
            Resistance::PerPort(rs) => Float64Array::from(rs.as_slice()).into(),
        }
    }

    /// Assign the reference resistance; undefined and null are rejected
    #[wasm_bindgen(js_name = setResistance)]
    pub fn set_resistance(&mut self, value: JsValue) -> Result<(), JsValue> {
        self.inner
            .set_resistance_value(from_js(&value).as_ref())
            .map_err(to_js)
    }

    /// Number of ports, undefined when unset
    #[wasm_bindgen(getter)]
    pub fn nports(&self) -> Option<usize> {
        self.inner.nports()
    }

    /// Assign the number of ports; undefined or null clears it
    #[wasm_bindgen(js_name = setNports)]
    pub fn set_nports(&mut self, value: JsValue) -> Result<(), JsValue> {
        self.inner
            .set_nports_value(from_js(&value).as_ref())
            .map_err(to_js)
    }

    /// Frequency points, undefined when unset
    #[wasm_bindgen(getter)]
    pub fn frequency(&self) -> Option<WasmFrequency> {
        self.inner
            .frequency()
            .cloned()
            .map(WasmFrequency::from_frequency)
    }

    #[wasm_bindgen(js_name = setFrequency)]
    pub fn set_frequency(&mut self, frequency: Option<WasmFrequency>) {
        self.inner
            .set_frequency(frequency.map(|f| f.inner().clone()));
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn nfreq(&self) -> usize {
        self.inner.nfreq()
    }

    /// Get real parts of the matrix as flattened Float64Array
    /// Shape: [nports * nports * nfreq] in row-major order
    #[wasm_bindgen(js_name = getMatrixRe)]
    pub fn get_matrix_re(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.matrix().iter().map(|z| z.re).collect();
        Float64Array::from(flat.as_slice())
    }

    /// Get imaginary parts of the matrix as flattened Float64Array
    #[wasm_bindgen(js_name = getMatrixIm)]
    pub fn get_matrix_im(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.matrix().iter().map(|z| z.im).collect();
        Float64Array::from(flat.as_slice())
    }

    /// Bind network data from flattened real and imaginary parts
    ///
    /// Both arrays are `[nports * nports * nfreq]` in row-major order; the port
    /// count and frequency must be set first.
    #[wasm_bindgen(js_name = setMatrix)]
    pub fn set_matrix(&mut self, re: Vec<f64>, im: Vec<f64>) -> Result<(), JsValue> {
        if re.len() != im.len() {
            return Err(JsValue::from_str(&format!(
                "Touchstone matrix has {} real parts but {} imaginary parts",
                re.len(),
                im.len()
            )));
        }
        let nports = self.inner.nports().unwrap_or(0);
        let nfreq = self.inner.frequency().map_or(0, |f| f.npoints());
        let data: Vec<Complex64> = re
            .into_iter()
            .zip(im)
            .map(|(re, im)| Complex64::new(re, im))
            .collect();

        let matrix = Array3::from_shape_vec((nports, nports, nfreq), data)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_matrix(matrix).map_err(to_js)
    }

    /// Get one matrix entry in dB across frequency
    /// @param i - Output port (0-based)
    /// @param j - Input port (0-based)
    #[wasm_bindgen(js_name = getDbAt)]
    pub fn get_db_at(&self, i: usize, j: usize) -> Result<Float64Array, JsValue> {
        self.port_pair_map(i, j, complex_2_db)
    }

    /// Get one matrix entry's magnitude across frequency
    #[wasm_bindgen(js_name = getMagAt)]
    pub fn get_mag_at(&self, i: usize, j: usize) -> Result<Float64Array, JsValue> {
        self.port_pair_map(i, j, complex_2_magnitude)
    }

    /// Get one matrix entry's phase in degrees across frequency
    #[wasm_bindgen(js_name = getDegAt)]
    pub fn get_deg_at(&self, i: usize, j: usize) -> Result<Float64Array, JsValue> {
        self.port_pair_map(i, j, complex_2_degree)
    }

    /// Get one matrix entry's real part across frequency
    #[wasm_bindgen(js_name = getReAt)]
    pub fn get_re_at(&self, i: usize, j: usize) -> Result<Float64Array, JsValue> {
        self.port_pair_map(i, j, |z| z.re)
    }

    /// Get one matrix entry's imaginary part across frequency
    #[wasm_bindgen(js_name = getImAt)]
    pub fn get_im_at(&self, i: usize, j: usize) -> Result<Float64Array, JsValue> {
        self.port_pair_map(i, j, |z| z.im)
    }
}

impl WasmTouchstone {
    fn port_pair_map(
        &self,
        i: usize,
        j: usize,
        f: impl Fn(Complex64) -> f64,
    ) -> Result<Float64Array, JsValue> {
        let pair = self.inner.port_pair(i, j).ok_or_else(|| {
            JsValue::from_str(&format!("Port pair ({}, {}) is out of range", i, j))
        })?;
        let values: Vec<f64> = pair.iter().map(|&z| f(z)).collect();
        Ok(Float64Array::from(values.as_slice()))
    }

    /// Get the inner Touchstone reference
    pub fn inner(&self) -> &Touchstone {
        &self.inner
    }

    /// Create from existing Touchstone
    pub fn from_touchstone(touchstone: Touchstone) -> Self {
        Self { inner: touchstone }
    }
}
