pub mod error;
pub mod geometry;
pub mod math;
pub mod store;

pub use error::{ParcurveError, Result};
