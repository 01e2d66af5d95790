//! Prints the orbit-camera angle conversion at a few reference orientations,
//! showing that angles → vector → angles round-trips.

use planet_terrain::orbit::{angles_to_vector, vector_to_angles};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn show(theta: f64, phi: f64) {
    let [x, y, z] = angles_to_vector(theta, phi);
    println!("theta={theta:+.2}, phi={phi:+.2} :: {x:+.2}, {y:+.2}, {z:+.2}");
    let (t, p) = vector_to_angles([x, y, z]);
    println!("theta={t:+.2}, phi={p:+.2} :: {x:+.2}, {y:+.2}, {z:+.2}");
    println!();
}

fn main() {
    show(0.0, 0.0);
    show(PI, 0.0);
    show(PI, FRAC_PI_4);
    show(FRAC_PI_2, FRAC_PI_4);
    show(3.0 * FRAC_PI_2, FRAC_PI_4);
}
