/// Landmass classification and elevation synthesis.
///
/// The warped island field is thresholded into a sea/land mask, turned into a
/// signed distance field (coast = 0, growing inland and out to sea), and
/// normalized. The banded preset then terraces the land into discrete
/// elevation bands and collapses all water to a flat 0.
use crate::grid::{Grid, Mask};
use crate::sdf::signed_distance;

/// Classify each pixel: `true` = sea (below the threshold), `false` = land.
///
/// Land is the *high* side — the island field was shaped to peak centrally,
/// so values at or above the threshold are the landmass.
pub fn sea_mask(warped: &Grid, threshold: f32) -> Mask {
    Mask::from_fn(warped.width(), warped.height(), |x, y| {
        warped.get(x, y) < threshold
    })
}

/// Signed coastal distance normalized by its maximum magnitude, so the field
/// lies in `[-1, 1]` with max |v| exactly 1 (land positive, sea negative).
pub fn synthesize_elevation(sea: &Mask) -> Grid {
    let sd = signed_distance(sea);
    let peak = sd.max_abs();
    if peak > 0.0 { sd.map(|v| v / peak) } else { sd }
}

/// Terrace a normalized elevation field into discrete bands.
///
/// Band edges partition `[-1, 1)` at multiples of `bin_width`. A value maps
/// to `-1 + 2·i/n` where `i` counts the edges at or below it (right-open
/// bins) and `n` is the edge count; negative results collapse to 0, flattening
/// the whole water band.
pub fn quantize(elevation: &Grid, bin_width: f32) -> Grid {
    let n = (2.0 / bin_width).round() as usize;
    let edges: Vec<f32> = (0..n).map(|i| -1.0 + i as f32 * bin_width).collect();

    elevation.map(|v| {
        let i = edges.iter().filter(|&&e| e <= v).count();
        let banded = -1.0 + 2.0 * i as f32 / n as f32;
        banded.max(0.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_polarity_and_determinism() {
        let field = Grid::from_fn(10, 10, |x, y| (x as f32 + y as f32) / 20.0);
        let mask = sea_mask(&field, 0.5);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(mask.get(x, y), field.get(x, y) < 0.5);
            }
        }
        assert_eq!(mask, sea_mask(&field, 0.5));
    }

    #[test]
    fn normalized_elevation_peaks_at_one() {
        let sea = Mask::from_fn(32, 16, |x, y| {
            let (dx, dy) = (x as f32 - 16.0, y as f32 - 8.0);
            dx * dx + dy * dy > 36.0
        });
        let elevation = synthesize_elevation(&sea);
        assert!((elevation.max_abs() - 1.0).abs() < 1e-6);
        assert!(elevation.data().iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn quantized_values_sit_on_band_boundaries() {
        let sea = Mask::from_fn(40, 20, |x, _| x < 20);
        let elevation = synthesize_elevation(&sea);
        let banded = quantize(&elevation, 0.2);
        for &v in banded.data() {
            assert!(v >= 0.0, "water not collapsed: {v}");
            // Land values must land exactly on a 2/n lattice point.
            let steps = (v + 1.0) / 0.2;
            assert!(
                (steps - steps.round()).abs() < 1e-5,
                "{v} falls between bands"
            );
        }
    }

    #[test]
    fn quantize_collapses_water_to_zero() {
        let g = Grid::from_fn(6, 1, |x, _| -1.0 + x as f32 * 0.3);
        let banded = quantize(&g, 0.2);
        for x in 0..6 {
            if g.get(x, 0) < 0.0 {
                assert_eq!(banded.get(x, 0), 0.0);
            }
        }
    }

    #[test]
    fn quantize_keeps_peak_band() {
        let g = Grid::from_fn(3, 1, |x, _| x as f32 * 0.5);
        let banded = quantize(&g, 0.2);
        assert_eq!(banded.get(2, 0), 1.0);
    }
}
