/// Shading: skylight occlusion, surface normals, sea flattening and diffuse
/// lighting.
///
/// All stages are pure transforms of the elevation field. The final lighting
/// scalar is `dot(normal, light) × occlusion`; the Lambert term is
/// deliberately left unclamped, so back-facing slopes darken past zero
/// instead of clipping to black (see `lambert_is_not_clamped` below).
use crate::grid::{Grid, Grid3};
use std::f32::consts::FRAC_PI_2;

/// March directions for the horizon scan: 4-connected plus diagonals.
const SKY_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Maximum march distance of the horizon scan, in steps.
const SKY_RANGE: usize = 32;

/// Estimate per-pixel sky visibility from the heightfield, in `[0, 1]`.
///
/// For each direction the scan records the steepest upward slope to any
/// pixel within range, converts it to a horizon angle, and averages the
/// unobstructed fraction over all directions. A flat field is fully lit.
pub fn compute_skylight(elevation: &Grid) -> Grid {
    let (w, h) = (elevation.width(), elevation.height());
    Grid::from_fn(w, h, |x, y| {
        let here = elevation.get(x, y);
        let mut open = 0.0f32;
        for &(dx, dy) in &SKY_DIRECTIONS {
            let step = ((dx * dx + dy * dy) as f32).sqrt();
            let mut max_slope = 0.0f32;
            for t in 1..=SKY_RANGE {
                let sx = x as isize + dx * t as isize;
                let sy = y as isize + dy * t as isize;
                let rise = elevation.get_clamped(sx, sy) - here;
                max_slope = max_slope.max(rise / (step * t as f32));
            }
            open += 1.0 - max_slope.atan() / FRAC_PI_2;
        }
        (open / SKY_DIRECTIONS.len() as f32).clamp(0.0, 1.0)
    })
}

/// Derive per-pixel unit surface normals from elevation central differences.
/// Border gradients use edge-clamped neighbors.
pub fn compute_normals(elevation: &Grid) -> Grid3 {
    Grid3::from_fn(elevation.width(), elevation.height(), |x, y| {
        let (xi, yi) = (x as isize, y as isize);
        let dzdx =
            (elevation.get_clamped(xi + 1, yi) - elevation.get_clamped(xi - 1, yi)) / 2.0;
        let dzdy =
            (elevation.get_clamped(xi, yi + 1) - elevation.get_clamped(xi, yi - 1)) / 2.0;
        normalize([-dzdx, -dzdy, 1.0])
    })
}

/// Blend normals toward straight-up with a weight that keeps land normals
/// almost untouched and forces sea normals nearly flat, so water doesn't
/// render as jagged terrain. Output is renormalized to unit length.
pub fn flatten_sea_normals(normals: &Grid3, elevation: &Grid) -> Grid3 {
    const LAND_WEIGHT: f32 = 1000.0;
    const SEA_WEIGHT: f32 = 0.01;

    Grid3::from_fn(normals.width(), normals.height(), |x, y| {
        let n = normals.get(x, y);
        let w = if elevation.get(x, y) > 0.0 {
            LAND_WEIGHT
        } else {
            SEA_WEIGHT
        };
        normalize([n[0] * w, n[1] * w, n[2] * w + 1.0])
    })
}

/// Diffuse lighting: `dot(normal, light) × occlusion` per pixel.
///
/// `light_dir` is normalized here; `occlusion` is expected to already be
/// rescaled into `[0.25, 1.0]`. The dot product is not clamped to ≥ 0.
pub fn apply_lighting(normals: &Grid3, occlusion: &Grid, light_dir: [f32; 3]) -> Grid {
    let l = normalize(light_dir);
    Grid::from_fn(normals.width(), normals.height(), |x, y| {
        let n = normals.get(x, y);
        let lambert = n[0] * l[0] + n[1] * l[1] + n[2] * l[2];
        lambert * occlusion.get(x, y)
    })
}

#[inline]
fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn flat_field_is_fully_lit() {
        let sky = compute_skylight(&Grid::from_fn(16, 16, |_, _| 0.3));
        for &v in sky.data() {
            assert!((v - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn skylight_stays_in_unit_range_and_walls_occlude() {
        // A tall ridge through the middle of a flat plain.
        let g = Grid::from_fn(33, 33, |x, _| if x == 16 { 5.0 } else { 0.0 });
        let sky = compute_skylight(&g);
        assert!(sky.data().iter().all(|v| (0.0..=1.0).contains(v)));
        // Next to the wall is darker than far away from it.
        assert!(sky.get(15, 16) < sky.get(0, 16));
    }

    #[test]
    fn normals_are_unit_length_and_flat_where_flat() {
        let g = Grid::from_fn(8, 8, |x, _| x as f32 * 0.1);
        let normals = compute_normals(&g);
        for y in 0..8 {
            for x in 0..8 {
                assert!((length(normals.get(x, y)) - 1.0).abs() < 1e-5);
            }
        }
        let flat = compute_normals(&Grid::new(8, 8));
        assert_eq!(flat.get(4, 4), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn sea_flattening_keeps_unit_length() {
        let elevation = Grid::from_fn(16, 2, |x, _| x as f32 / 8.0 - 1.0);
        let slope = Grid::from_fn(16, 2, |x, y| ((x * 3 + y) as f32 * 0.37).sin());
        let normals = compute_normals(&slope);
        let flattened = flatten_sea_normals(&normals, &elevation);
        for y in 0..2 {
            for x in 0..16 {
                assert!((length(flattened.get(x, y)) - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn sea_normals_point_up_land_normals_survive() {
        let elevation = Grid::from_fn(2, 1, |x, _| if x == 0 { -0.5 } else { 0.5 });
        let tilted = Grid3::from_fn(2, 1, |_, _| normalize([0.6, 0.0, 0.8]));
        let out = flatten_sea_normals(&tilted, &elevation);
        // Sea: dominated by the up vector.
        assert!(out.get(0, 0)[2] > 0.999);
        // Land: essentially the original normal.
        assert!((out.get(1, 0)[0] - 0.6).abs() < 1e-3);
    }

    #[test]
    fn lambert_is_not_clamped() {
        // A slope facing away from the light must go negative, not black.
        let normals = Grid3::from_fn(1, 1, |_, _| normalize([-1.0, 1.0, 0.1]));
        let occlusion = Grid::from_fn(1, 1, |_, _| 1.0);
        let lighting = apply_lighting(&normals, &occlusion, [0.5, -0.5, 1.0]);
        assert!(lighting.get(0, 0) < 0.0);
    }

    #[test]
    fn lighting_scales_with_occlusion() {
        let normals = Grid3::from_fn(2, 1, |_, _| [0.0, 0.0, 1.0]);
        let occlusion = Grid::from_fn(2, 1, |x, _| if x == 0 { 0.25 } else { 1.0 });
        let lighting = apply_lighting(&normals, &occlusion, [0.0, 0.0, 1.0]);
        assert!((lighting.get(0, 0) - 0.25).abs() < 1e-6);
        assert!((lighting.get(1, 0) - 1.0).abs() < 1e-6);
    }
}
