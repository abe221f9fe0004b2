//! Two-meson bubble loop with a sharp three-momentum cutoff

use crate::numeric::{functions::*, reals::consts::PI, Complex, Float};

/// Three-momentum cutoff regularizing the meson loop (MeV)
pub const Q_MAX: Float = 1.2e3;

/// Cutoff-regularized two-meson loop function G(Q, m)
///
/// Real below the two-meson threshold `Q = 2 m`, acquires the imaginary
/// part sigma / (16 pi) required by unitarity above it, and stays finite in
/// the `Q -> 0` limit.
pub fn bubble_loop(cme: Float, mass: Float) -> Complex {
    let a = sqrt(1. + powi(mass / Q_MAX, 2));
    let subtraction = 2. * ln((Q_MAX + sqrt(powi(mass, 2) + powi(Q_MAX, 2))) / mass);
    if cme == 0. {
        // sigma -> 2 i m / Q, so the sigma ln(..) term tends to 2 / a
        return Complex::new((2. / a - subtraction) / (16. * powi(PI, 2)), 0.);
    }
    let s = powi(cme, 2);
    let sig = sqrt_c(1. - 4. * powi(mass, 2) / s);
    (sig * ((sig * a + 1.) / (sig * a - 1.)).ln() - subtraction) / (16. * powi(PI, 2))
}
