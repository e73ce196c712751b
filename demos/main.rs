//! Demo driver: builds a mixed set of curves, lists them, samples each
//! at `t = pi/4`, then collects, sorts, and sums the circle subset.
//!
//! ```text
//! cargo run --example demo
//! ```

use std::io::{self, Write};

use parcurve::geometry::{Circle, Ellipse, Helix};
use parcurve::store::CurveSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut set = CurveSet::new();
    set.add_curve(Circle::new(4.0)?);
    set.add_curve(Ellipse::new(2.5, 1.5)?);
    set.add_curve(Circle::new(1.0)?);
    set.add_curve(Helix::new(2.0, 3.0)?);
    set.add_curve(Circle::new(2.5)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Curves:")?;
    set.write_curves(&mut out)?;

    writeln!(out, "\nPoints and derivatives at t = pi/4:")?;
    set.write_points_and_derivatives(&mut out)?;

    set.collect_circles();
    set.sort_circles();

    writeln!(out, "\nCircles by radius:")?;
    set.write_circles(&mut out)?;

    writeln!(out, "\nTotal radius sum: {}", set.total_radius_sum())?;
    Ok(())
}
