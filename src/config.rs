use crate::types::Float;

/// Step size and sampling cadence pairs used by deployed front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
pub enum SimulationProfile {
    /// dt = 1e-3, one sample per 100 steps
    #[default]
    Standard,
    /// dt = 1e-4, one sample per 1000 steps
    Fine,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulateOptions {
    pub dt: Float,
    pub n_record: usize,
}

impl SimulateOptions {
    pub fn from_profile(profile: SimulationProfile) -> Self {
        match profile {
            SimulationProfile::Standard => SimulateOptions {
                dt: 0.001,
                n_record: 100,
            },
            SimulationProfile::Fine => SimulateOptions {
                dt: 0.0001,
                n_record: 1000,
            },
        }
    }

    /// Simulated time between two recorded samples
    pub fn sample_interval(&self) -> Float {
        self.n_record as Float * self.dt
    }
}

impl Default for SimulateOptions {
    fn default() -> Self {
        SimulateOptions::from_profile(SimulationProfile::default())
    }
}

impl From<SimulationProfile> for SimulateOptions {
    fn from(profile: SimulationProfile) -> Self {
        SimulateOptions::from_profile(profile)
    }
}
