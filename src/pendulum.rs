use na::{Vector2, Vector4};

use crate::{
    error::{ensure_positive, PendulumResult},
    types::Float,
    GRAVITY,
};

/// Masses (kg) and rod lengths (m) of the two links.
/// Fields are private so the strictly-positive invariant can only be
/// established through `new`/`set_*`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParameters {
    m1: Float,
    m2: Float,
    l1: Float,
    l2: Float,
}

impl PendulumParameters {
    pub fn new(m1: Float, m2: Float, l1: Float, l2: Float) -> PendulumResult<Self> {
        let mut params = PendulumParameters::default();
        params.set_masses(m1, m2)?;
        params.set_lengths(l1, l2)?;
        Ok(params)
    }

    pub fn set_masses(&mut self, m1: Float, m2: Float) -> PendulumResult<()> {
        let m1 = ensure_positive("m1", m1)?;
        let m2 = ensure_positive("m2", m2)?;
        self.m1 = m1;
        self.m2 = m2;
        Ok(())
    }

    pub fn set_lengths(&mut self, l1: Float, l2: Float) -> PendulumResult<()> {
        let l1 = ensure_positive("l1", l1)?;
        let l2 = ensure_positive("l2", l2)?;
        self.l1 = l1;
        self.l2 = l2;
        Ok(())
    }

    pub fn masses(&self) -> (Float, Float) {
        (self.m1, self.m2)
    }

    pub fn lengths(&self) -> (Float, Float) {
        (self.l1, self.l2)
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        PendulumParameters {
            m1: 1.0,
            m2: 1.0,
            l1: 1.0,
            l2: 1.0,
        }
    }
}

/// Angles are measured from the hanging-down rest position, both relative to
/// the vertical (theta2 is not relative to rod 1). They are never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendulumState {
    pub theta1: Float,
    pub theta2: Float,
    pub omega1: Float,
    pub omega2: Float,
}

impl PendulumState {
    /// State at rest at the given angles, in degrees.
    pub fn from_degrees(theta1_deg: Float, theta2_deg: Float) -> Self {
        PendulumState {
            theta1: theta1_deg.to_radians(),
            theta2: theta2_deg.to_radians(),
            omega1: 0.,
            omega2: 0.,
        }
    }

    /// State vector ordered (theta1, theta2, omega1, omega2)
    pub fn as_vector(&self) -> Vector4<Float> {
        Vector4::new(self.theta1, self.theta2, self.omega1, self.omega2)
    }

    pub fn from_vector(x: &Vector4<Float>) -> Self {
        PendulumState {
            theta1: x[0],
            theta2: x[1],
            omega1: x[2],
            omega2: x[3],
        }
    }

    /// Cartesian positions of the two bobs, pivot at origin, y pointing up.
    pub fn positions(&self, params: &PendulumParameters) -> (Vector2<Float>, Vector2<Float>) {
        let (l1, l2) = params.lengths();
        let p1 = Vector2::new(l1 * self.theta1.sin(), -l1 * self.theta1.cos());
        let p2 = p1 + Vector2::new(l2 * self.theta2.sin(), -l2 * self.theta2.cos());
        (p1, p2)
    }
}

/// Closed-form equations of motion of the planar double pendulum with point
/// masses at the rod ends, derived from its Lagrangian.
/// Returns (dtheta1, dtheta2, domega1, domega2).
///
/// Ref: https://www.myphysicslab.com/pendulum/double-pendulum-en.html
#[rustfmt::skip]
pub fn derivative(state: &PendulumState, params: &PendulumParameters) -> Vector4<Float> {
    let PendulumState { theta1, theta2, omega1, omega2 } = *state;
    let (m1, m2) = params.masses();
    let (l1, l2) = params.lengths();
    let g = GRAVITY;

    let delta = theta1 - theta2;
    let (s12, c12) = delta.sin_cos();
    // 2 m1 + m2 - m2 cos(2 delta) >= 2 m1 > 0, never singular
    let den = 2. * m1 + m2 - m2 * (2. * delta).cos();

    let domega1 = (-g * (2. * m1 + m2) * theta1.sin()
        - m2 * g * (theta1 - 2. * theta2).sin()
        - 2. * s12 * m2 * (omega2 * omega2 * l2 + omega1 * omega1 * l1 * c12))
        / (l1 * den);

    let domega2 = 2. * s12
        * (omega1 * omega1 * l1 * (m1 + m2)
            + g * (m1 + m2) * theta1.cos()
            + omega2 * omega2 * l2 * m2 * c12)
        / (l2 * den);

    Vector4::new(omega1, omega2, domega1, domega2)
}

#[cfg(test)]
mod pendulum_tests {
    use na::Matrix2;
    use rand::Rng;

    use crate::{assert_close, assert_vec_close, PI};

    use super::*;

    /// Manipulator-equation form M(q) qddot + C(q, qdot) qdot = tau_g(q), in
    /// relative joint coordinates q2 = theta2 - theta1.
    /// Ref: https://underactuated.csail.mit.edu/multibody.html#manipulator
    #[rustfmt::skip]
    fn manipulator_accelerations(state: &PendulumState, params: &PendulumParameters) -> Vector2<Float> {
        let (m1, m2) = params.masses();
        let (l1, l2) = params.lengths();
        let q1 = state.theta1;
        let q2 = state.theta2 - state.theta1;
        let q1dot = state.omega1;
        let q2dot = state.omega2 - state.omega1;

        let s1 = q1.sin();
        let s2 = q2.sin();
        let s12 = (q1 + q2).sin();
        let c2 = q2.cos();
        let I2 = m2 * l2 * l2;
        let m12 = I2 + m2 * l1 * l2 * c2;
        let M = Matrix2::new(
            (m1 + m2) * l1 * l1 + I2 + 2. * m2 * l1 * l2 * c2, m12,
            m12                                              , I2
        );
        let C = Matrix2::new(
            0.0,                                        -m2 * l1 * l2 * (2. * q1dot + q2dot) * s2,
            0.5 * m2 * l1 * l2 * (2. * q1dot + q2dot) * s2, -0.5 * m2 * l1 * l2 * q1dot * s2
        );
        let tau_g = -GRAVITY * Vector2::new(
            (m1 + m2) * l1 * s1 + m2 * l2 * s12,
            m2 * l2 * s12
        );
        let bias = C * Vector2::new(q1dot, q2dot) - tau_g;
        let qddot = M.lu().solve(&(-bias)).unwrap();

        // back to absolute angles
        Vector2::new(qddot[0], qddot[0] + qddot[1])
    }

    #[test]
    fn dynamics() {
        // Arrange
        let params = PendulumParameters::new(1.0, 3.0, 2.0, 4.0).unwrap();
        let state = PendulumState {
            theta1: 1.0,
            theta2: 3.0,
            omega1: 3.0,
            omega2: 7.0,
        };

        // Act
        let xdot = derivative(&state, &params);

        // Assert
        // reference values from RigidBodyDynamics.jl, converted from relative joint angles
        assert_close!(xdot[2], 68.8824, 1e-4);
        assert_close!(xdot[3] - xdot[2], -58.9877, 1e-4);
    }

    #[test]
    fn matches_manipulator_equation() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let params = PendulumParameters::new(
                rng.random_range(0.1..5.0),
                rng.random_range(0.1..5.0),
                rng.random_range(0.1..3.0),
                rng.random_range(0.1..3.0),
            )
            .unwrap();
            let state = PendulumState {
                theta1: rng.random_range(-PI..PI),
                theta2: rng.random_range(-PI..PI),
                omega1: rng.random_range(-5.0..5.0),
                omega2: rng.random_range(-5.0..5.0),
            };

            let xdot = derivative(&state, &params);
            let expected = manipulator_accelerations(&state, &params);

            assert_vec_close!(&xdot.fixed_rows::<2>(2), &expected, 1e-8);
        }
    }

    #[test]
    fn rest_is_fixed_point() {
        let params = PendulumParameters::new(2.0, 0.5, 1.5, 0.7).unwrap();
        let xdot = derivative(&PendulumState::default(), &params);
        assert_eq!(xdot, Vector4::zeros());
    }

    #[test]
    fn velocities_pass_through() {
        let state = PendulumState {
            theta1: 0.3,
            theta2: -0.2,
            omega1: 1.25,
            omega2: -0.5,
        };
        let xdot = derivative(&state, &PendulumParameters::default());
        assert_eq!(xdot[0], 1.25);
        assert_eq!(xdot[1], -0.5);
    }

    #[test]
    fn derivative_is_deterministic() {
        let params = PendulumParameters::new(1.3, 0.8, 1.1, 0.9).unwrap();
        let state = PendulumState {
            theta1: 2.1,
            theta2: -1.7,
            omega1: 0.4,
            omega2: 3.3,
        };
        let a = derivative(&state, &params);
        let b = derivative(&state, &params);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn set_masses_rejects_non_positive() {
        let mut params = PendulumParameters::new(2.0, 3.0, 1.0, 1.0).unwrap();
        assert!(params.set_masses(-1.0, 1.0).is_err());
        assert!(params.set_masses(1.0, 0.0).is_err());
        assert_eq!(params.masses(), (2.0, 3.0));
    }

    #[test]
    fn set_lengths_rejects_non_positive() {
        let mut params = PendulumParameters::default();
        assert!(params.set_lengths(1.0, -2.0).is_err());
        assert!(params.set_lengths(Float::NAN, 1.0).is_err());
        assert_eq!(params.lengths(), (1.0, 1.0));

        params.set_lengths(0.5, 2.0).unwrap();
        assert_eq!(params.lengths(), (0.5, 2.0));
    }

    #[test]
    fn degrees_are_converted() {
        let state = PendulumState::from_degrees(180., -90.);
        assert_close!(state.theta1, PI, 1e-12);
        assert_close!(state.theta2, -PI / 2., 1e-12);
        assert_eq!((state.omega1, state.omega2), (0., 0.));
    }

    #[test]
    fn positions_hanging_and_horizontal() {
        let params = PendulumParameters::new(1.0, 1.0, 2.0, 3.0).unwrap();

        let (p1, p2) = PendulumState::default().positions(&params);
        assert_vec_close!(&p1, &Vector2::new(0., -2.), 1e-12);
        assert_vec_close!(&p2, &Vector2::new(0., -5.), 1e-12);

        let (p1, p2) = PendulumState::from_degrees(90., 90.).positions(&params);
        assert_vec_close!(&p1, &Vector2::new(2., 0.), 1e-12);
        assert_vec_close!(&p2, &Vector2::new(5., 0.), 1e-12);
    }
}
