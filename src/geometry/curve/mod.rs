mod circle;
mod ellipse;
mod helix;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use crate::error::{ParcurveError, Result};
use crate::math::{Point3, Vector3};

/// Tag identifying the concrete variant of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

/// Canonical sampling domain for a curve.
///
/// Evaluation itself accepts any real `t`; the domain covers one full
/// period for the closed variants and one turn for the helix, and is
/// what batch sampling iterates over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in 3D space.
///
/// All methods are total: a curve holds only validated parameters, so
/// evaluation cannot fail and accepts any real parameter value.
pub trait Curve {
    /// Evaluates the curve at parameter `t` (radians), returning the 3D point.
    fn point(&self, t: f64) -> Point3;

    /// Computes the first derivative with respect to `t`.
    fn derivative(&self, t: f64) -> Vector3;

    /// Returns the tag for the concrete variant.
    fn kind(&self) -> CurveKind;

    /// Returns the canonical sampling domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed over its domain.
    fn is_closed(&self) -> bool;
}

/// A curve of any supported variant.
///
/// Closed set of variants: code that needs variant-specific data
/// pattern-matches on this enum instead of downcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCurve {
    /// A circle in the `z = 0` plane.
    Circle(Circle),
    /// An axis-aligned ellipse in the `z = 0` plane.
    Ellipse(Ellipse),
    /// A circular helix along the z axis.
    Helix(Helix),
}

impl AnyCurve {
    /// Returns the inner circle, if this curve is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }
}

impl Curve for AnyCurve {
    fn point(&self, t: f64) -> Point3 {
        match self {
            Self::Circle(c) => c.point(t),
            Self::Ellipse(e) => e.point(t),
            Self::Helix(h) => h.point(t),
        }
    }

    fn derivative(&self, t: f64) -> Vector3 {
        match self {
            Self::Circle(c) => c.derivative(t),
            Self::Ellipse(e) => e.derivative(t),
            Self::Helix(h) => h.derivative(t),
        }
    }

    fn kind(&self) -> CurveKind {
        match self {
            Self::Circle(c) => c.kind(),
            Self::Ellipse(e) => e.kind(),
            Self::Helix(h) => h.kind(),
        }
    }

    fn domain(&self) -> CurveDomain {
        match self {
            Self::Circle(c) => c.domain(),
            Self::Ellipse(e) => e.domain(),
            Self::Helix(h) => h.domain(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Circle(c) => c.is_closed(),
            Self::Ellipse(e) => e.is_closed(),
            Self::Helix(h) => h.is_closed(),
        }
    }
}

impl From<Circle> for AnyCurve {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(e: Ellipse) -> Self {
        Self::Ellipse(e)
    }
}

impl From<Helix> for AnyCurve {
    fn from(h: Helix) -> Self {
        Self::Helix(h)
    }
}

/// Validates that a geometric parameter is strictly positive.
pub(crate) fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(ParcurveError::InvalidParameter { parameter, value });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn any_curve_delegates_evaluation() {
        let circle = Circle::new(2.0).unwrap();
        let any = AnyCurve::from(circle);
        assert_eq!(any.point(FRAC_PI_4), circle.point(FRAC_PI_4));
        assert_eq!(any.derivative(FRAC_PI_4), circle.derivative(FRAC_PI_4));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(AnyCurve::from(Circle::default()).kind(), CurveKind::Circle);
        assert_eq!(AnyCurve::from(Ellipse::default()).kind(), CurveKind::Ellipse);
        assert_eq!(AnyCurve::from(Helix::default()).kind(), CurveKind::Helix);
    }

    #[test]
    fn as_circle_on_circle() {
        let any = AnyCurve::from(Circle::new(3.0).unwrap());
        assert_eq!(any.as_circle().map(Circle::radius), Some(3.0));
    }

    #[test]
    fn as_circle_on_other_variants() {
        assert!(AnyCurve::from(Ellipse::default()).as_circle().is_none());
        assert!(AnyCurve::from(Helix::default()).as_circle().is_none());
    }

    #[test]
    fn check_positive_rejects_zero_and_negative() {
        assert!(check_positive("radius", 0.0).is_err());
        assert!(check_positive("radius", -1.0).is_err());
        assert!(check_positive("radius", 1e-12).is_ok());
    }
}
