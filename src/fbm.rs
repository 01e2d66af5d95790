/// Band-limited gradient noise and fractional Brownian motion.
///
/// The noise primitive is the `noise` crate's Perlin generator, output in
/// `[-1.0, 1.0]`. The fBm amplitude schedule is consistent with that
/// convention: octave `f` contributes at most `1/2^f`, so the summed field is
/// bounded by the geometric series `Σ 1/2^f < 2` no matter how many layers
/// are requested.
use crate::grid::Grid;
use noise::{NoiseFn, Perlin};
use std::f64::consts::TAU;

/// Generate one layer of gradient noise over a `width × height` grid.
///
/// `frequency` is the number of noise periods across the image width; cells
/// are square, so the vertical period count scales with the aspect ratio.
///
/// A wrapped axis is sampled on a circle embedded in a higher-dimensional
/// noise domain, so the field is seamless across that edge — the same trick
/// as sampling a world map on a sphere to avoid a longitude seam, except the
/// axes wrap independently (a torus, not a sphere).
///
/// Deterministic: the same `(width, height, frequency, seed, wrap)` always
/// produces the same buffer.
pub fn generate_noise(
    width: usize,
    height: usize,
    frequency: f64,
    seed: u32,
    wrap_x: bool,
    wrap_y: bool,
) -> Grid {
    let perlin = Perlin::new(seed);
    // Radius that gives the embedded circle the same circumference the flat
    // axis would have, so feature size matches between wrapped and flat axes.
    let radius_x = frequency / TAU;
    let radius_y = frequency * (height as f64 / width as f64) / TAU;

    Grid::from_fn(width, height, |x, y| {
        let u = frequency * x as f64 / width as f64;
        let v = frequency * y as f64 / width as f64;
        let value = match (wrap_x, wrap_y) {
            (false, false) => perlin.get([u, v]),
            (true, false) => {
                let a = TAU * x as f64 / width as f64;
                perlin.get([radius_x * a.cos(), radius_x * a.sin(), v])
            }
            (false, true) => {
                let b = TAU * y as f64 / height as f64;
                perlin.get([u, radius_y * b.cos(), radius_y * b.sin()])
            }
            (true, true) => {
                let a = TAU * x as f64 / width as f64;
                let b = TAU * y as f64 / height as f64;
                perlin.get([
                    radius_x * a.cos(),
                    radius_x * a.sin(),
                    radius_y * b.cos(),
                    radius_y * b.sin(),
                ])
            }
        };
        value as f32
    })
}

/// Fractional Brownian motion — sums `layers` octaves of gradient noise,
/// doubling frequency and halving amplitude each octave.
///
/// Octave `f` is seeded with `base_seed + f`, so the whole stack is
/// reproducible from the single base seed.
pub fn fbm(
    width: usize,
    height: usize,
    base_frequency: f64,
    layers: u32,
    base_seed: u32,
    wrap_x: bool,
    wrap_y: bool,
) -> Grid {
    let mut sum = Grid::new(width, height);
    let mut frequency = base_frequency;
    let mut amplitude = 1.0f32;

    for f in 0..layers {
        let layer = generate_noise(width, height, frequency, base_seed + f, wrap_x, wrap_y);
        sum = sum.zip(&layer, |acc, n| acc + amplitude * n);
        frequency *= 2.0;
        amplitude /= 2.0;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fbm_is_bounded_by_the_amplitude_series() {
        // Σ 1/2^f for f in 0..layers, regardless of layer count.
        for layers in [1, 4, 8] {
            let bound: f32 = (0..layers).map(|f| 0.5f32.powi(f as i32)).sum();
            let g = fbm(64, 48, 5.0, layers, 0, false, false);
            assert!(
                g.max_abs() <= bound,
                "layers={layers}: {} > {bound}",
                g.max_abs()
            );
        }
    }

    #[test]
    fn same_parameters_same_noise() {
        let a = fbm(32, 32, 4.0, 3, 9, false, false);
        let b = fbm(32, 32, 4.0, 3, 9, false, false);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_noise(32, 32, 4.0, 1, false, false);
        let b = generate_noise(32, 32, 4.0, 2, false, false);
        assert!(a.data().iter().zip(b.data()).any(|(x, y)| x != y));
    }

    #[test]
    fn wrapped_axis_is_seamless() {
        let g = generate_noise(64, 32, 2.0, 5, true, false);
        // First and last columns are one pixel apart across the seam, so the
        // values must be close everywhere along the edge.
        for y in 0..32 {
            let d = (g.get(0, y) - g.get(63, y)).abs();
            assert!(d < 0.25, "seam discontinuity {d} at row {y}");
        }
    }
}
