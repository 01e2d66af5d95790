/// Stretched radial falloff field.
///
/// Suppresses landmass near the image edges: the island field is later scaled
/// by this buffer, so terrain can only rise where the falloff is positive.
use crate::grid::Grid;

/// Evaluate the falloff at normalized coordinates `(u, v)`.
///
/// `clamp(1 - (u² + v²), 0, 1) / 2` — 0.5 at the center, falling to zero at
/// and outside the unit ellipse.
#[inline]
pub fn falloff_at(u: f32, v: f32) -> f32 {
    (1.0 - (u * u + v * v)).clamp(0.0, 1.0) / 2.0
}

/// Generate the falloff buffer. `u` and `v` are spaced linearly (endpoints
/// inclusive) over `[-sx, sx] × [-sy, sy]`.
///
/// Stretch values at or beyond the corner distance keep the falloff strictly
/// positive everywhere, softening the island boundary instead of clipping it.
pub fn falloff_field(width: usize, height: usize, stretch: (f32, f32)) -> Grid {
    assert!(width > 1 && height > 1, "falloff needs a 2D extent");
    let (sx, sy) = stretch;
    Grid::from_fn(width, height, |x, y| {
        let u = -sx + 2.0 * sx * x as f32 / (width - 1) as f32;
        let v = -sy + 2.0 * sy * y as f32 / (height - 1) as f32;
        falloff_at(u, v)
    })
}
