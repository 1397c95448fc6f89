use std::fmt;

use crate::{
    config::SimulateOptions,
    error::{ensure_positive, PendulumError, PendulumResult},
    integrators::runge_kutta_4,
    pendulum::{derivative, PendulumParameters, PendulumState},
    sample::{LegacySample, RecordedSample},
    types::Float,
};

/// Double pendulum simulation engine. Owns the physical parameters, the
/// dynamic state, and the samples of the most recent run.
///
/// Not meant to be shared between threads; run one engine per pendulum.
#[derive(Debug, Clone)]
pub struct DoublePendulum {
    params: PendulumParameters,
    state: PendulumState,
    /// Angles (rad) last set through construction or `set_angles`
    initial_angles: (Float, Float),
    data: Vec<RecordedSample>,
}

impl DoublePendulum {
    /// Angles are given in degrees.
    pub fn new(
        m1: Float,
        m2: Float,
        l1: Float,
        l2: Float,
        theta1_deg: Float,
        theta2_deg: Float,
    ) -> PendulumResult<Self> {
        let params = PendulumParameters::new(m1, m2, l1, l2)?;
        Ok(DoublePendulum::from_parts(
            params,
            PendulumState::from_degrees(theta1_deg, theta2_deg),
        ))
    }

    pub fn from_parts(params: PendulumParameters, state: PendulumState) -> Self {
        DoublePendulum {
            params,
            state,
            initial_angles: (state.theta1, state.theta2),
            data: vec![],
        }
    }

    pub fn set_masses(&mut self, m1: Float, m2: Float) -> PendulumResult<()> {
        self.params.set_masses(m1, m2)?;
        tracing::trace!(m1, m2, "set masses");
        Ok(())
    }

    pub fn set_lengths(&mut self, l1: Float, l2: Float) -> PendulumResult<()> {
        self.params.set_lengths(l1, l2)?;
        tracing::trace!(l1, l2, "set lengths");
        Ok(())
    }

    /// Place the pendulum at rest at the given angles, in degrees.
    pub fn set_angles(&mut self, theta1_deg: Float, theta2_deg: Float) {
        self.state = PendulumState::from_degrees(theta1_deg, theta2_deg);
        self.initial_angles = (self.state.theta1, self.state.theta2);
        tracing::trace!(theta1_deg, theta2_deg, "set angles");
    }

    /// Return to the angles last set, at rest. Recorded samples are kept.
    pub fn reset(&mut self) {
        self.state = self.initial_state();
    }

    fn initial_state(&self) -> PendulumState {
        let (theta1, theta2) = self.initial_angles;
        PendulumState {
            theta1,
            theta2,
            omega1: 0.,
            omega2: 0.,
        }
    }

    /// Release the pendulum from the angles last set, at rest, and advance it
    /// `n_steps` RK4 steps of size `dt`, recording the starting state and then
    /// the state after every `n_record`-th step. Every run starts from the same
    /// initial condition, so repeated calls give identical samples. The final
    /// state stays available through `state()`, and the samples replace those
    /// of any previous run.
    ///
    /// Produces `n_steps / n_record + 1` samples, spaced `n_record * dt` apart.
    pub fn simulate(&mut self, n_steps: usize, dt: Float, n_record: usize) -> PendulumResult<()> {
        if n_steps == 0 {
            return Err(PendulumError::invalid(
                "n_steps",
                n_steps,
                "must be at least 1",
            ));
        }
        let dt = ensure_positive("dt", dt)?;
        if n_record == 0 {
            return Err(PendulumError::invalid(
                "n_record",
                n_record,
                "must be at least 1",
            ));
        }

        tracing::debug!(n_steps, dt, n_record, "simulating double pendulum");

        let params = self.params;
        let f = |x: &na::Vector4<Float>| derivative(&PendulumState::from_vector(x), &params);

        let start = self.initial_state();
        let mut data = Vec::with_capacity(n_steps / n_record + 1);
        data.push(RecordedSample::record(0., &start, &params));

        let mut x = start.as_vector();
        for step in 1..=n_steps {
            x = runge_kutta_4(&x, dt, f);
            if step % n_record == 0 {
                let t = step as Float * dt;
                data.push(RecordedSample::record(
                    t,
                    &PendulumState::from_vector(&x),
                    &params,
                ));
            }
        }

        self.state = PendulumState::from_vector(&x);
        self.data = data;

        tracing::debug!(
            samples = self.data.len(),
            theta1 = self.state.theta1,
            theta2 = self.state.theta2,
            "simulation finished"
        );
        Ok(())
    }

    pub fn simulate_with(&mut self, n_steps: usize, options: &SimulateOptions) -> PendulumResult<()> {
        self.simulate(n_steps, options.dt, options.n_record)
    }

    /// Samples of the latest run in time order; empty before the first run.
    pub fn data(&self) -> &[RecordedSample] {
        &self.data
    }

    /// Latest run in the 7-column layout (no energies)
    pub fn legacy_data(&self) -> Vec<LegacySample> {
        self.data.iter().map(LegacySample::from).collect()
    }

    /// Give up the samples of the latest run, leaving none behind.
    pub fn take_data(&mut self) -> Vec<RecordedSample> {
        std::mem::take(&mut self.data)
    }

    pub fn parameters(&self) -> &PendulumParameters {
        &self.params
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn initial_angles(&self) -> (Float, Float) {
        self.initial_angles
    }
}

impl Default for DoublePendulum {
    /// Unit masses and lengths, displaced 0.6 and 0.25 rad.
    fn default() -> Self {
        DoublePendulum::from_parts(
            PendulumParameters::default(),
            PendulumState {
                theta1: 0.6,
                theta2: 0.25,
                omega1: 0.,
                omega2: 0.,
            },
        )
    }
}

impl fmt::Display for DoublePendulum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m1, m2) = self.params.masses();
        let (l1, l2) = self.params.lengths();
        write!(
            f,
            "DoublePendulum(m1={}, m2={}, l1={}, l2={}, theta1={:.3}°, theta2={:.3}°)",
            m1,
            m2,
            l1,
            l2,
            self.state.theta1.to_degrees(),
            self.state.theta2.to_degrees()
        )
    }
}
