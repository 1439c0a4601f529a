//! # naive-dotprod
//!
//! A naive single-precision dot product, the variants that reproduce its
//! exact summation order, and the probes used to study how its result varies
//! across implementations.

pub mod config;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod math;
pub mod probe;
pub mod report;
pub mod session;
pub mod utils;

pub use error::{Error, Result};
pub use session::run;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::inputs::InputSource;
    pub use crate::math::dot_product::{dot, naive_dot_product};
    pub use crate::probe::Probes;
}
