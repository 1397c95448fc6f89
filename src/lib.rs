#![allow(non_snake_case)]

use types::Float;
pub extern crate nalgebra as na;

pub mod config;
pub mod energy;
pub mod error;
pub mod integrators;
pub mod pendulum;
pub mod sample;
pub mod simulate;
pub mod types;
pub mod util;

#[cfg(not(target_arch = "wasm32"))]
pub mod plot;

// Wasm bindings
pub mod interface;

pub use error::{PendulumError, PendulumResult};
pub use simulate::DoublePendulum;

pub const GRAVITY: Float = 9.81;

pub const PI: Float = std::f64::consts::PI;
