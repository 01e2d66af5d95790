/// Orbit-camera angle conversion.
///
/// In orbit mode the camera orientation is a Y-axis rotation (theta) followed
/// by an X-axis rotation (phi):
///
/// - `phi`   — how far from the equator; constrained to (-π/2, π/2).
/// - `theta` — how far from the prime meridian; unconstrained.
///
/// With a home vector of (0, 0, 1), theta is a CCW angle seen from above
/// (from +Y) and phi a CCW angle seen from the left (from -X). The planet's
/// axis is the Y axis, and theta = phi = 0 gives Z = 1.
use std::f64::consts::TAU;

/// Eye position on the unit sphere for the given orbit angles.
pub fn angles_to_vector(theta: f64, phi: f64) -> [f64; 3] {
    [
        theta.sin() * phi.cos(),
        phi.sin(),
        theta.cos() * phi.cos(),
    ]
}

/// Recover `(theta, phi)` from a unit vector. Exact inverse of
/// [`angles_to_vector`] for phi strictly inside (-π/2, π/2); at the poles
/// theta is degenerate.
pub fn vector_to_angles(v: [f64; 3]) -> (f64, f64) {
    (v[0].atan2(v[2]), v[1].asin())
}

/// Smallest absolute difference between two angles, modulo a full turn.
pub fn angle_delta(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-12;

    fn assert_vec(v: [f64; 3], expect: [f64; 3]) {
        for i in 0..3 {
            assert!((v[i] - expect[i]).abs() < EPS, "{v:?} vs {expect:?}");
        }
    }

    #[test]
    fn closed_form_values() {
        assert_vec(angles_to_vector(0.0, 0.0), [0.0, 0.0, 1.0]);
        assert_vec(angles_to_vector(PI, 0.0), [0.0, 0.0, -1.0]);
        let s = FRAC_PI_4.cos(); // √2/2
        assert_vec(angles_to_vector(FRAC_PI_2, FRAC_PI_4), [s, s, 0.0]);
    }

    #[test]
    fn round_trip_recovers_angles() {
        // theta over a full turn, phi strictly inside (-π/2, π/2).
        for i in 0..16 {
            let theta = i as f64 * TAU / 16.0;
            for j in 1..16 {
                let phi = -FRAC_PI_2 + j as f64 * PI / 16.0;
                let (t, p) = vector_to_angles(angles_to_vector(theta, phi));
                assert!(angle_delta(t, theta) < EPS, "theta={theta} phi={phi}");
                assert!((p - phi).abs() < EPS, "theta={theta} phi={phi}");
            }
        }
    }

    #[test]
    fn theta_is_recovered_modulo_full_turns() {
        let (t, _) = vector_to_angles(angles_to_vector(3.0 * FRAC_PI_2, FRAC_PI_4));
        // atan2 reports the equivalent angle in (-π, π].
        assert!((t - (-FRAC_PI_2)).abs() < EPS);
    }
}
