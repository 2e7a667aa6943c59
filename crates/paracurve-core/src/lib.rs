pub mod error;
pub mod tolerance;

pub use error::{CurveError, Result};
pub use tolerance::Tolerance;
