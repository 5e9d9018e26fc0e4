//! JavaScript bindings for [`Fraction`]
//!
//! Exposed to JS as class `Fraction`. Errors are logged to the browser
//! console and returned as string values.

use crate::error::FractionError;
use crate::fraction::Fraction;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
/// Call this once when loading the module to set up panic hooks
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the fraction-core library
#[wasm_bindgen(js_name = version)]
pub fn js_version() -> String {
    crate::version()
}

fn to_js_error(err: FractionError) -> JsValue {
    let message = JsValue::from_str(&err.to_string());
    web_sys::console::warn_1(&message);
    message
}

#[wasm_bindgen(js_name = Fraction)]
#[derive(Clone, Copy)]
pub struct JsFraction {
    inner: Fraction,
}

#[wasm_bindgen(js_class = Fraction)]
impl JsFraction {
    #[wasm_bindgen(constructor)]
    pub fn new(num: i32, den: i32) -> Result<JsFraction, JsValue> {
        let inner = Fraction::new(num, den).map_err(to_js_error)?;
        Ok(JsFraction { inner })
    }

    #[wasm_bindgen(js_name = fromInt)]
    pub fn from_int(n: i32) -> JsFraction {
        JsFraction {
            inner: Fraction::from_int(n),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn numerator(&self) -> i32 {
        self.inner.numerator()
    }

    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> i32 {
        self.inner.denominator()
    }

    pub fn add(&self, other: &JsFraction) -> Result<JsFraction, JsValue> {
        self.apply(other, <Fraction as CheckedAdd>::checked_add)
    }

    pub fn sub(&self, other: &JsFraction) -> Result<JsFraction, JsValue> {
        self.apply(other, <Fraction as CheckedSub>::checked_sub)
    }

    pub fn mul(&self, other: &JsFraction) -> Result<JsFraction, JsValue> {
        self.apply(other, <Fraction as CheckedMul>::checked_mul)
    }

    pub fn div(&self, other: &JsFraction) -> Result<JsFraction, JsValue> {
        let inner = self.inner.divide(&other.inner).map_err(to_js_error)?;
        Ok(JsFraction { inner })
    }

    pub fn equals(&self, other: &JsFraction) -> bool {
        self.inner == other.inner
    }

    #[wasm_bindgen(js_name = toInt)]
    pub fn to_int(&self) -> Result<i32, JsValue> {
        self.inner.to_int().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_repr(&self) -> String {
        self.inner.to_string()
    }
}

impl JsFraction {
    fn apply(
        &self,
        other: &JsFraction,
        op: fn(&Fraction, &Fraction) -> Option<Fraction>,
    ) -> Result<JsFraction, JsValue> {
        let inner = op(&self.inner, &other.inner)
            .ok_or_else(|| to_js_error(FractionError::Overflow))?;
        Ok(JsFraction { inner })
    }
}

impl From<Fraction> for JsFraction {
    fn from(inner: Fraction) -> Self {
        JsFraction { inner }
    }
}

impl From<JsFraction> for Fraction {
    fn from(value: JsFraction) -> Self {
        value.inner
    }
}
