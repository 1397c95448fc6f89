use crate::{
    pendulum::{PendulumParameters, PendulumState},
    types::Float,
    GRAVITY,
};

/// Kinetic energy of both point masses.
/// The second bob's speed combines both angular velocities:
///     |v2|^2 = l1^2 w1^2 + l2^2 w2^2 + 2 l1 l2 w1 w2 cos(theta1 - theta2)
pub fn kinetic_energy(state: &PendulumState, params: &PendulumParameters) -> Float {
    let (m1, m2) = params.masses();
    let (l1, l2) = params.lengths();
    let w1 = state.omega1;
    let w2 = state.omega2;

    let v1_sq = l1 * l1 * w1 * w1;
    let v2_sq =
        v1_sq + l2 * l2 * w2 * w2 + 2. * l1 * l2 * w1 * w2 * (state.theta1 - state.theta2).cos();
    0.5 * m1 * v1_sq + 0.5 * m2 * v2_sq
}

/// Gravitational potential energy referenced to the pivot height, y up.
/// Negative whenever the bobs hang below the pivot.
pub fn potential_energy(state: &PendulumState, params: &PendulumParameters) -> Float {
    let (m1, m2) = params.masses();
    let (p1, p2) = state.positions(params);
    GRAVITY * (m1 * p1.y + m2 * p2.y)
}

/// Compute double pendulum system total energy
pub fn total_energy(state: &PendulumState, params: &PendulumParameters) -> Float {
    kinetic_energy(state, params) + potential_energy(state, params)
}
