//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as reals;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as reals;
pub type Complex = num_complex::Complex<Float>;

/// Mathematical functions
///
/// Free-function spellings keep the long closed-form expressions close to
/// the algebra they were transcribed from.
pub mod functions {
    use super::{Complex, Float};

    /// Square root of a non-negative real number
    pub fn sqrt(x: Float) -> Float {
        x.sqrt()
    }

    /// Square root of a real number, evaluated on the complex plane
    ///
    /// Negative arguments map to the positive imaginary axis, which is the
    /// branch the dispersive formulas in this crate rely on.
    pub fn sqrt_c(x: Float) -> Complex {
        Complex::new(x, 0.).sqrt()
    }

    /// Integer power of a real number
    pub fn powi(x: Float, n: i32) -> Float {
        x.powi(n)
    }

    /// Natural logarithm of a positive real number
    pub fn ln(x: Float) -> Float {
        x.ln()
    }

    /// Compute the conjugate of a Complex number
    pub fn conj(z: Complex) -> Complex {
        z.conj()
    }

    /// Real part of a Complex number
    pub fn re(z: Complex) -> Float {
        z.re
    }

    /// Imaginary part of a Complex number
    pub fn im(z: Complex) -> Float {
        z.im
    }

    /// Squared norm of a Complex number
    pub fn norm_sqr(z: Complex) -> Float {
        z.norm_sqr()
    }
}
