use thiserror::Error;

/// Top-level error type for the parcurve library.
#[derive(Debug, Error)]
pub enum ParcurveError {
    /// A geometric parameter passed to a constructor or setter was not
    /// strictly positive. The target object is left untouched.
    #[error("parameter {parameter} = {value} must be strictly positive")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
    },

    /// A curve id did not resolve to an entry in the store.
    #[error("curve not found in store")]
    CurveNotFound,
}

/// Convenience type alias for results using [`ParcurveError`].
pub type Result<T> = std::result::Result<T, ParcurveError>;
