/// Noise-driven domain warping.
///
/// The falloff-shaped island field on its own has a suspiciously regular
/// outline. Warping the sampling coordinates with noise-derived offsets
/// breaks that radial symmetry into organic coastlines.
use crate::grid::Grid;
use std::f32::consts::TAU;

/// Resample `source` at coordinates perturbed by `phase`.
///
/// The per-pixel offset is `(wx · cos(2π·phase), wy · sin(2π·phase))`,
/// truncated to whole pixels and added to the identity grid. Out-of-range
/// coordinates clamp to the buffer extent — they never wrap; periodicity is
/// the upstream noise generator's job when requested.
pub fn warp_field(source: &Grid, phase: &Grid, warp: (f32, f32)) -> Grid {
    assert_eq!(source.width(), phase.width());
    assert_eq!(source.height(), phase.height());
    let (wx, wy) = warp;

    Grid::from_fn(source.width(), source.height(), |x, y| {
        let angle = TAU * phase.get(x, y);
        let dx = (wx * angle.cos()) as isize;
        let dy = (wy * angle.sin()) as isize;
        source.get_clamped(x as isize + dx, y as isize + dy)
    })
}
