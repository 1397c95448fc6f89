use serde::Serialize;

use crate::{
    energy::{kinetic_energy, potential_energy},
    pendulum::{PendulumParameters, PendulumState},
    types::Float,
};

/// Column names of the canonical 9-column row.
pub const COLUMNS: [&str; 9] = [
    "time",
    "x1",
    "y1",
    "theta1",
    "x2",
    "y2",
    "theta2",
    "kinetic_energy",
    "potential_energy",
];

/// Column names of the older 7-column row, without energies.
pub const LEGACY_COLUMNS: [&str; 7] = ["time", "x1", "y1", "theta1", "x2", "y2", "theta2"];

/// One recorded row of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordedSample {
    pub time: Float,
    pub x1: Float,
    pub y1: Float,
    pub theta1: Float,
    pub x2: Float,
    pub y2: Float,
    pub theta2: Float,
    pub kinetic_energy: Float,
    pub potential_energy: Float,
}

impl RecordedSample {
    pub fn record(time: Float, state: &PendulumState, params: &PendulumParameters) -> Self {
        let (p1, p2) = state.positions(params);
        RecordedSample {
            time,
            x1: p1.x,
            y1: p1.y,
            theta1: state.theta1,
            x2: p2.x,
            y2: p2.y,
            theta2: state.theta2,
            kinetic_energy: kinetic_energy(state, params),
            potential_energy: potential_energy(state, params),
        }
    }

    pub fn total_energy(&self) -> Float {
        self.kinetic_energy + self.potential_energy
    }

    /// Row in `COLUMNS` order
    pub fn to_row(&self) -> [Float; 9] {
        [
            self.time,
            self.x1,
            self.y1,
            self.theta1,
            self.x2,
            self.y2,
            self.theta2,
            self.kinetic_energy,
            self.potential_energy,
        ]
    }

    pub fn legacy(&self) -> LegacySample {
        LegacySample {
            time: self.time,
            x1: self.x1,
            y1: self.y1,
            theta1: self.theta1,
            x2: self.x2,
            y2: self.y2,
            theta2: self.theta2,
        }
    }
}

/// Reduced view of a `RecordedSample` kept for consumers of the 7-column layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegacySample {
    pub time: Float,
    pub x1: Float,
    pub y1: Float,
    pub theta1: Float,
    pub x2: Float,
    pub y2: Float,
    pub theta2: Float,
}

impl LegacySample {
    /// Row in `LEGACY_COLUMNS` order
    pub fn to_row(&self) -> [Float; 7] {
        [
            self.time,
            self.x1,
            self.y1,
            self.theta1,
            self.x2,
            self.y2,
            self.theta2,
        ]
    }
}

impl From<&RecordedSample> for LegacySample {
    fn from(sample: &RecordedSample) -> Self {
        sample.legacy()
    }
}
