/// Exact Euclidean distance transform over boolean masks.
///
/// Two-pass lower-envelope-of-parabolas algorithm (Felzenszwalb &
/// Huttenlocher): a 1D squared-distance transform run first along columns,
/// then along rows. Exact, linear time per pass. Internals are `f64` so
/// squared distances on large images keep full integer precision.
use crate::grid::{Grid, Mask};

const INF: f64 = 1e20;

/// 1D squared distance transform of sampled function `f`.
fn edt_1d(f: &[f64]) -> Vec<f64> {
    let n = f.len();
    let mut d = vec![0.0; n];
    // v: parabola sites, z: boundaries between parabolas in the envelope.
    let mut v = vec![0usize; n];
    let mut z = vec![0.0f64; n + 1];
    let mut k = 0usize;
    z[0] = -INF;
    z[1] = INF;

    for q in 1..n {
        loop {
            let p = v[k];
            let s = ((f[q] + (q * q) as f64) - (f[p] + (p * p) as f64)) / (2.0 * (q - p) as f64);
            if s <= z[k] {
                // z[0] is -INF, so k never underflows here.
                k -= 1;
            } else {
                k += 1;
                v[k] = q;
                z[k] = s;
                z[k + 1] = INF;
                break;
            }
        }
    }

    k = 0;
    for q in 0..n {
        while z[k + 1] < q as f64 {
            k += 1;
        }
        let p = v[k];
        let dq = q as f64 - p as f64;
        d[q] = dq * dq + f[p];
    }
    d
}

/// Per-pixel Euclidean distance to the nearest `true` pixel of `mask`
/// (zero on the `true` pixels themselves).
///
/// A mask with no `true` pixel yields a uniform huge sentinel rather than an
/// error; downstream normalization flattens it.
pub fn distance_transform(mask: &Mask) -> Grid {
    let (w, h) = (mask.width(), mask.height());
    let mut sq = vec![0.0f64; w * h];
    for y in 0..h {
        for x in 0..w {
            sq[y * w + x] = if mask.get(x, y) { 0.0 } else { INF };
        }
    }

    // Columns first.
    let mut column = vec![0.0f64; h];
    for x in 0..w {
        for y in 0..h {
            column[y] = sq[y * w + x];
        }
        let d = edt_1d(&column);
        for y in 0..h {
            sq[y * w + x] = d[y];
        }
    }
    // Then rows.
    for y in 0..h {
        let d = edt_1d(&sq[y * w..(y + 1) * w]);
        sq[y * w..(y + 1) * w].copy_from_slice(&d);
    }

    Grid::from_fn(w, h, |x, y| sq[y * w + x].sqrt() as f32)
}

/// Signed distance from the land/sea boundary: positive and growing inland
/// (`sea` false), negative and growing out to sea (`sea` true).
pub fn signed_distance(sea: &Mask) -> Grid {
    let to_sea = distance_transform(sea);
    let to_land = distance_transform(&sea.inverted());
    to_sea.zip(&to_land, |s, l| s - l)
}
