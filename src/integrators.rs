use na::Vector4;

use crate::types::Float;

/// Classical fourth-order Runge-Kutta step for the 4-dimensional pendulum
/// state x = (theta1, theta2, omega1, omega2), with xdot = f(x).
///
/// ```text
/// k1 = f(x)
/// k2 = f(x + dt/2 k1)
/// k3 = f(x + dt/2 k2)
/// k4 = f(x + dt k3)
/// x(k+1) = x(k) + dt/6 (k1 + 2 k2 + 2 k3 + k4)
/// ```
pub fn runge_kutta_4<F>(x: &Vector4<Float>, dt: Float, f: F) -> Vector4<Float>
where
    F: Fn(&Vector4<Float>) -> Vector4<Float>,
{
    let k1 = f(x);
    let k2 = f(&euler_step(x, &k1, dt / 2.0));
    let k3 = f(&euler_step(x, &k2, dt / 2.0));
    let k4 = f(&euler_step(x, &k3, dt));

    let f_final = (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0;
    euler_step(x, &f_final, dt)
}

/// Euler integration step:
///     x(k+1) = x(k) + dt * xdot
fn euler_step(x: &Vector4<Float>, xdot: &Vector4<Float>, dt: Float) -> Vector4<Float> {
    x + xdot * dt
}

#[cfg(test)]
mod integrator_tests {
    use crate::{assert_close, assert_vec_close};

    use super::*;

    #[test]
    fn exact_for_cubic_in_time() {
        // x0' = 3 t^2 encoded via x1 = t: f = (3 x1^2, 1, 0, 0)
        let f = |x: &Vector4<Float>| Vector4::new(3. * x[1] * x[1], 1., 0., 0.);
        let mut x = Vector4::zeros();
        let dt = 0.25;
        for _ in 0..8 {
            x = runge_kutta_4(&x, dt, f);
        }
        // x0 = t^3 at t = 2
        assert_close!(x[0], 8.0, 1e-12);
        assert_close!(x[1], 2.0, 1e-12);
    }

    #[test]
    fn harmonic_oscillator() {
        // x'' = -x, x(0) = 1, x'(0) = 0 stored in slots 0 and 2
        let f = |x: &Vector4<Float>| Vector4::new(x[2], 0., -x[0], 0.);
        let mut x = Vector4::new(1., 0., 0., 0.);
        let dt = 0.01;
        let n = 100;
        for _ in 0..n {
            x = runge_kutta_4(&x, dt, f);
        }
        let t = dt * n as Float;
        assert_vec_close!(
            &x,
            &Vector4::new(t.cos(), 0., -t.sin(), 0.),
            1e-9
        );
    }

    #[test]
    fn fourth_order_convergence() {
        // Halving dt should shrink the global error by roughly 2^4
        let f = |x: &Vector4<Float>| Vector4::new(x[2], 0., -x[0], 0.);
        let error = |dt: Float| {
            let n = (1.0 / dt).round() as usize;
            let mut x = Vector4::new(1., 0., 0., 0.);
            for _ in 0..n {
                x = runge_kutta_4(&x, dt, f);
            }
            (x[0] - (1.0 as Float).cos()).abs()
        };

        let ratio = error(0.1) / error(0.05);
        assert!(ratio > 12. && ratio < 20., "ratio = {}", ratio);
    }
}
