//! Text output for curves and curve sets.
//!
//! Line formats match the original consumer expectations: coordinates
//! carry 9 significant digits with trailing zeros trimmed, curve
//! listings carry the plain parameter values.

use std::fmt;
use std::io;

use crate::geometry::curve::{AnyCurve, Curve};

use super::CurveSet;

/// Parameter at which [`CurveSet::write_points_and_derivatives`] samples
/// every curve.
pub const SAMPLE_PARAMETER: f64 = std::f64::consts::FRAC_PI_4;

/// Formats a coordinate with 9 significant digits, trimming trailing
/// zeros, in the style of C++ `setprecision(9)` default notation.
struct Sig9(f64);

impl fmt::Display for Sig9 {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 || !v.is_finite() {
            return write!(f, "{v}");
        }
        let exp = v.abs().log10().floor() as i32;
        if (-4..9).contains(&exp) {
            let decimals = usize::try_from(8 - exp).unwrap_or(0);
            let s = format!("{v:.decimals$}");
            let s = s.trim_end_matches('0').trim_end_matches('.');
            write!(f, "{s}")
        } else {
            let s = format!("{v:.8e}");
            match s.split_once('e') {
                Some((mantissa, exp10)) => {
                    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                    write!(f, "{mantissa}e{exp10}")
                }
                None => write!(f, "{s}"),
            }
        }
    }
}

/// Formats an xyz triple as `<x> <y> <z>` with 9 significant digits
/// per coordinate.
struct Coords(f64, f64, f64);

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", Sig9(self.0), Sig9(self.1), Sig9(self.2))
    }
}

impl fmt::Display for AnyCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(c) => write!(f, "Circle with radius {}", c.radius()),
            Self::Ellipse(e) => {
                let (a, b) = e.parameters();
                write!(f, "Ellipse with parameters {a} {b}")
            }
            Self::Helix(h) => {
                let (r, p) = h.parameters();
                write!(f, "Helix with parameters {r} {p}")
            }
        }
    }
}

impl CurveSet {
    /// Writes one descriptive line per curve, in main-sequence order.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the output sink.
    pub fn write_curves<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for curve in self.curves() {
            writeln!(out, "{curve}")?;
        }
        Ok(())
    }

    /// Writes one `Circle with radius <R>` line per collected circle,
    /// in the derived sequence's current order.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the output sink.
    pub fn write_circles<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for circle in self.circles() {
            writeln!(out, "Circle with radius {}", circle.radius())?;
        }
        Ok(())
    }

    /// Writes, for every curve in main-sequence order, the position and
    /// first derivative sampled at `t = pi/4` as one line of six
    /// coordinates: `<point> <derivative>`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the output sink.
    pub fn write_points_and_derivatives<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for curve in self.curves() {
            let p = curve.point(SAMPLE_PARAMETER);
            let d = curve.derivative(SAMPLE_PARAMETER);
            writeln!(out, "{} {}", Coords(p.x, p.y, p.z), Coords(d.x, d.y, d.z))?;
        }
        Ok(())
    }
}

/// Writes the sampled positions of a single curve over its canonical
/// domain, one `<x> <y> <z>` line per sample, stepping the parameter by
/// `step`. Writes nothing if `step` is not positive.
///
/// # Errors
///
/// Returns any error reported by the output sink.
pub fn write_samples<W: io::Write>(curve: &impl Curve, out: &mut W, step: f64) -> io::Result<()> {
    if step <= 0.0 {
        return Ok(());
    }
    let domain = curve.domain();
    let mut t = domain.t_min;
    while t < domain.t_max {
        let p = curve.point(t);
        writeln!(out, "{}", Coords(p.x, p.y, p.z))?;
        t += step;
    }
    Ok(())
}
