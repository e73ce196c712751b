use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::{check_positive, Curve, CurveDomain, CurveKind};

/// An axis-aligned ellipse centered at the origin in the `z = 0` plane.
///
/// `P(t) = (a * cos(t), b * sin(t), 0)`
///
/// where `a` is the half-width (x semi-axis) and `b` the half-height
/// (y semi-axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    half_width: f64,
    half_height: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is not strictly positive.
    pub fn new(half_width: f64, half_height: f64) -> Result<Self> {
        check_positive("half_width", half_width)?;
        check_positive("half_height", half_height)?;
        Ok(Self {
            half_width,
            half_height,
        })
    }

    /// Returns the half-width (x semi-axis).
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Returns the half-height (y semi-axis).
    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    /// Returns both semi-axes as `(half_width, half_height)`.
    #[must_use]
    pub fn parameters(&self) -> (f64, f64) {
        (self.half_width, self.half_height)
    }

    /// Replaces both semi-axes with new validated values.
    ///
    /// Validation happens before any assignment: on failure the current
    /// semi-axes are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is not strictly positive.
    pub fn set_parameters(&mut self, half_width: f64, half_height: f64) -> Result<()> {
        check_positive("half_width", half_width)?;
        check_positive("half_height", half_height)?;
        self.half_width = half_width;
        self.half_height = half_height;
        Ok(())
    }
}

impl Default for Ellipse {
    /// An ellipse with half-width 2 and half-height 1.
    fn default() -> Self {
        Self {
            half_width: 2.0,
            half_height: 1.0,
        }
    }
}

impl Curve for Ellipse {
    fn point(&self, t: f64) -> Point3 {
        Point3::new(self.half_width * t.cos(), self.half_height * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        Vector3::new(-self.half_width * t.sin(), self.half_height * t.cos(), 0.0)
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
