//! Unitarized I=0 S-wave meson-meson amplitudes
//!
//! The lowest-order chiral kernel for the coupled pi pi / K Kbar system is
//! resummed with the bubble loop through the Bethe-Salpeter equation
//! T = (1 - V G)^-1 V. Chiral-limit (isospin-averaged) meson masses are
//! used throughout, matching the kernel.

use crate::{
    numeric::{functions::*, Complex, Float},
    parameters::{FPI, KAON_MASS_CHIRAL_LIMIT, PION_MASS_CHIRAL_LIMIT},
    unitarization::loops::bubble_loop,
};

/// Lowest-order chiral kernel in the (pi pi, K Kbar) channel basis
fn kernel(s: Float) -> (Float, Float, Float) {
    let v11 = -(2. * s - powi(PION_MASS_CHIRAL_LIMIT, 2)) / (2. * powi(FPI, 2));
    let v12 = -sqrt(3.) * s / (4. * powi(FPI, 2));
    let v22 = -3. * s / (4. * powi(FPI, 2));
    (v11, v12, v22)
}

/// Components of the 2x2 coupled-channel T matrix, which is symmetric
struct CoupledAmps {
    t11: Complex,
    t12: Complex,
    t22: Complex,
}

/// Closed-form inversion of the 2x2 Bethe-Salpeter equation
fn solve_bse(cme: Float) -> CoupledAmps {
    let s = powi(cme, 2);
    let (v11, v12, v22) = kernel(s);
    let g1 = bubble_loop(cme, PION_MASS_CHIRAL_LIMIT);
    let g2 = bubble_loop(cme, KAON_MASS_CHIRAL_LIMIT);

    let det = (1. - g1 * v11) * (1. - g2 * v22) - g1 * g2 * powi(v12, 2);
    CoupledAmps {
        t11: ((1. - g2 * v22) * v11 + g2 * powi(v12, 2)) / det,
        t12: v12 / det,
        t22: ((1. - g1 * v11) * v22 + g1 * powi(v12, 2)) / det,
    }
}

/// Unitarized pi pi -> pi pi amplitude at center-of-mass energy `cme`
pub fn amp_pipi_to_pipi_bse(cme: Float) -> Complex {
    solve_bse(cme).t11
}

/// Unitarized pi pi -> K Kbar amplitude at center-of-mass energy `cme`
pub fn amp_pipi_to_kk_bse(cme: Float) -> Complex {
    solve_bse(cme).t12
}

/// Unitarized K Kbar -> K Kbar amplitude at center-of-mass energy `cme`
pub fn amp_kk_to_kk_bse(cme: Float) -> Complex {
    solve_bse(cme).t22
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn amplitudes_are_real_below_the_pion_threshold() {
        let cme = 1.5 * PION_MASS_CHIRAL_LIMIT;
        assert_abs_diff_eq!(amp_pipi_to_pipi_bse(cme).im, 0., epsilon = 1e-12);
        assert_abs_diff_eq!(amp_pipi_to_kk_bse(cme).im, 0., epsilon = 1e-12);
    }

    #[test]
    fn resummation_reduces_to_the_kernel_for_vanishing_loop() {
        // Far below every threshold the loop is small but not zero, so only
        // check that the amplitude stays within a few percent of the kernel.
        let cme = 0.5 * PION_MASS_CHIRAL_LIMIT;
        let (v11, _, _) = kernel(powi(cme, 2));
        let t11 = amp_pipi_to_pipi_bse(cme);
        assert_relative_eq!(t11.re, v11, max_relative = 0.25);
    }

    #[test]
    fn coupled_channel_unitarity_between_thresholds() {
        // Between the pi pi and K Kbar thresholds T^-1 = V^-1 - G implies
        // Im (T^-1)_11 = -Im G_1 with only the pion channel open.
        let cme = 600.;
        assert!(cme > 2. * PION_MASS_CHIRAL_LIMIT);
        assert!(cme < 2. * KAON_MASS_CHIRAL_LIMIT);

        let amps = solve_bse(cme);
        let det_t = amps.t11 * amps.t22 - amps.t12 * amps.t12;
        let t_inv_11 = amps.t22 / det_t;

        let g1 = bubble_loop(cme, PION_MASS_CHIRAL_LIMIT);
        assert_relative_eq!(t_inv_11.im, -g1.im, max_relative = 1e-8);
    }
}
