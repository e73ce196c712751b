use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::{check_positive, Curve, CurveDomain, CurveKind};

/// A circle of radius `R` centered at the origin in the `z = 0` plane.
///
/// `P(t) = (R * cos(t), R * sin(t), 0)`
///
/// The parameter `t` is an angle in radians; evaluation is periodic and
/// accepts any real `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive.
    pub fn new(radius: f64) -> Result<Self> {
        check_positive("radius", radius)?;
        Ok(Self { radius })
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replaces the radius with a new validated value.
    ///
    /// On failure the current radius is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        check_positive("radius", radius)?;
        self.radius = radius;
        Ok(())
    }
}

impl Default for Circle {
    /// A unit circle.
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Curve for Circle {
    fn point(&self, t: f64) -> Point3 {
        Point3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
