//! Error surface of the library
//!
//! Most of this crate is pure closed-form evaluation and cannot fail:
//! kinematically forbidden configurations yield an exact zero and channels
//! that are not yet modeled emit a warning with a placeholder value. The
//! only genuine failure mode is the external adaptive integrator missing
//! its tolerance target, which is propagated and never retried.

use crate::numeric::Float;
use thiserror::Error;

/// Errors that the width and spectrum computations can surface
#[derive(Debug, Error)]
pub enum Error {
    /// The adaptive quadrature did not reach the requested tolerance
    #[error("numerical integration of the {channel} channel did not converge (error estimate {error_estimate:e})")]
    IntegrationFailure {
        /// Channel whose differential quantity was being integrated
        channel: &'static str,
        /// Error estimate reported by the integrator
        error_estimate: Float,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
