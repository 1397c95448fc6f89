use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float32Array;

use crate::{
    error::PendulumError, sample::LEGACY_COLUMNS, sample::COLUMNS, simulate::DoublePendulum,
    toJsFloat32Array, types::Float,
};

pub mod util;

/// Convert a JS integer argument to a count, rejecting negatives.
fn count(name: &'static str, value: i32) -> Result<usize, PendulumError> {
    usize::try_from(value).map_err(|_| PendulumError::invalid(name, value, "must be at least 1"))
}

/// WebAssembly interface to the DoublePendulum engine.
#[wasm_bindgen]
pub struct InterfaceDoublePendulum(pub(crate) DoublePendulum);

#[wasm_bindgen]
impl InterfaceDoublePendulum {
    /// Angles in degrees
    #[wasm_bindgen(constructor)]
    pub fn new(
        m1: Float,
        m2: Float,
        l1: Float,
        l2: Float,
        theta1: Float,
        theta2: Float,
    ) -> Result<InterfaceDoublePendulum, JsError> {
        console_error_panic_hook::set_once();
        let pendulum = DoublePendulum::new(m1, m2, l1, l2, theta1, theta2)?;
        Ok(InterfaceDoublePendulum(pendulum))
    }

    #[wasm_bindgen(js_name = setMasses)]
    pub fn set_masses(&mut self, m1: Float, m2: Float) -> Result<(), JsError> {
        Ok(self.0.set_masses(m1, m2)?)
    }

    #[wasm_bindgen(js_name = setLengths)]
    pub fn set_lengths(&mut self, l1: Float, l2: Float) -> Result<(), JsError> {
        Ok(self.0.set_lengths(l1, l2)?)
    }

    #[wasm_bindgen(js_name = setAngles)]
    pub fn set_angles(&mut self, theta1: Float, theta2: Float) {
        self.0.set_angles(theta1, theta2)
    }

    pub fn reset(&mut self) {
        self.0.reset()
    }

    pub fn simulate(&mut self, n_steps: i32, dt: Float, n_record: i32) -> Result<(), JsError> {
        let n_steps = count("n_steps", n_steps)?;
        let n_record = count("n_record", n_record)?;
        self.0.simulate(n_steps, dt, n_record)?;
        tracing::debug!(samples = self.0.data().len(), "{}", self.0);
        Ok(())
    }

    /// Row-major samples, `COLUMNS.len()` values per row
    pub fn data(&self) -> Float32Array {
        let flat: Vec<Float> = self.0.data().iter().flat_map(|s| s.to_row()).collect();
        toJsFloat32Array!(flat)
    }

    /// Row-major samples in the 7-column layout
    #[wasm_bindgen(js_name = legacyData)]
    pub fn legacy_data(&self) -> Float32Array {
        let flat: Vec<Float> = self
            .0
            .legacy_data()
            .iter()
            .flat_map(|s| s.to_row())
            .collect();
        toJsFloat32Array!(flat)
    }

    #[wasm_bindgen(js_name = nColumns)]
    pub fn n_columns(legacy: bool) -> usize {
        if legacy {
            LEGACY_COLUMNS.len()
        } else {
            COLUMNS.len()
        }
    }

    pub fn describe(&self) -> String {
        self.0.to_string()
    }
}
