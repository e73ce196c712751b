use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::{check_positive, Curve, CurveDomain, CurveKind};

/// A circular helix along the z axis.
///
/// `P(t) = (R * cos(t), R * sin(t), H / (2*pi) * t)`
///
/// where `R` is the radius and `H` the pitch: the rise in z per full
/// turn of the parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helix {
    radius: f64,
    pitch: f64,
}

impl Helix {
    /// Creates a new helix.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or the pitch is not strictly positive.
    pub fn new(radius: f64, pitch: f64) -> Result<Self> {
        check_positive("radius", radius)?;
        check_positive("pitch", pitch)?;
        Ok(Self { radius, pitch })
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the pitch: the rise in z per full turn.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns both parameters as `(radius, pitch)`.
    #[must_use]
    pub fn parameters(&self) -> (f64, f64) {
        (self.radius, self.pitch)
    }

    /// Replaces both parameters with new validated values.
    ///
    /// Validation happens before any assignment: on failure the current
    /// parameters are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or the pitch is not strictly positive.
    pub fn set_parameters(&mut self, radius: f64, pitch: f64) -> Result<()> {
        check_positive("radius", radius)?;
        check_positive("pitch", pitch)?;
        self.radius = radius;
        self.pitch = pitch;
        Ok(())
    }
}

impl Default for Helix {
    /// A helix with unit radius and unit pitch.
    fn default() -> Self {
        Self {
            radius: 1.0,
            pitch: 1.0,
        }
    }
}

impl Curve for Helix {
    fn point(&self, t: f64) -> Point3 {
        Point3::new(
            self.radius * t.cos(),
            self.radius * t.sin(),
            self.pitch / std::f64::consts::TAU * t,
        )
    }

    fn derivative(&self, t: f64) -> Vector3 {
        Vector3::new(
            -self.radius * t.sin(),
            self.radius * t.cos(),
            self.pitch / std::f64::consts::TAU,
        )
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Helix
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn evaluate_at_zero() {
        let h = Helix::new(2.0, 1.0).unwrap();
        let p = h.point(0.0);
        assert!((p - Point3::new(2.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn xy_projection_stays_on_radius() {
        let h = Helix::new(2.0, 3.0).unwrap();
        for i in 0..16 {
            let t = f64::from(i) * TAU / 16.0;
            let p = h.point(t);
            assert_relative_eq!(p.x.hypot(p.y), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn z_is_linear_in_t() {
        let h = Helix::new(1.0, 4.0).unwrap();
        let slope = 4.0 / TAU;
        assert_relative_eq!(h.point(1.0).z, slope, epsilon = 1e-12);
        assert_relative_eq!(h.point(-2.5).z, -2.5 * slope, epsilon = 1e-12);
    }

    #[test]
    fn rises_by_pitch_per_turn() {
        let h = Helix::new(1.5, 3.0).unwrap();
        let rise = h.point(0.3 + TAU).z - h.point(0.3).z;
        assert_relative_eq!(rise, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn derivative_has_constant_z() {
        let h = Helix::new(2.0, 5.0).unwrap();
        let d0 = h.derivative(0.0);
        let d1 = h.derivative(FRAC_PI_2);
        assert_relative_eq!(d0.z, 5.0 / TAU, epsilon = 1e-12);
        assert_relative_eq!(d1.z, 5.0 / TAU, epsilon = 1e-12);
        // xy part matches the circle derivative
        assert!((d0 - Vector3::new(0.0, 2.0, d0.z)).norm() < 1e-9);
    }

    #[test]
    fn default_parameters() {
        assert_eq!(Helix::default().parameters(), (1.0, 1.0));
    }

    #[test]
    fn invalid_parameters() {
        assert!(Helix::new(0.0, 1.0).is_err());
        assert!(Helix::new(1.0, 0.0).is_err());
        assert!(Helix::new(-1.0, -1.0).is_err());
    }

    #[test]
    fn set_parameters_is_atomic() {
        let mut h = Helix::new(1.0, 2.0).unwrap();
        assert!(h.set_parameters(3.0, -1.0).is_err());
        assert_eq!(h.parameters(), (1.0, 2.0));

        h.set_parameters(2.0, 0.5).unwrap();
        assert_eq!(h.parameters(), (2.0, 0.5));
    }

    #[test]
    fn kind_is_helix() {
        assert_eq!(Helix::default().kind(), CurveKind::Helix);
    }

    #[test]
    fn helix_is_not_closed() {
        assert!(!Helix::default().is_closed());
    }
}
