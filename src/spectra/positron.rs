//! Positron spectral shapes of the individual decay channels
//!
//! Spectra are densities dN/dE per decay, in MeV^-1, evaluated on a caller
//! supplied grid of positron energies. The positron mass is neglected in
//! the spectral shapes.

use crate::{
    errors::{Error, Result},
    numeric::{functions::*, Float},
    parameters::{BR_PI_TO_MU_NU, CHARGED_PION_MASS, MUON_MASS},
};

/// Target absolute error handed to the quadrature rule
const TOLERANCE: Float = 1e-8;

/// Antiderivative of the Michel integrand (6x - 4x^2), up to the 1/(beta
/// gamma m_mu) prefactor of the boost convolution
fn michel_integral(x: Float) -> Float {
    3. * powi(x, 2) - 4. / 3. * powi(x, 3)
}

/// dN/dE at one positron energy from the decay of a muon of energy `eng_mu`
fn muon_point(eng_p: Float, eng_mu: Float) -> Float {
    if eng_mu < MUON_MASS || eng_p <= 0. {
        return 0.;
    }
    let gamma = eng_mu / MUON_MASS;
    let beta = sqrt(1. - 1. / powi(gamma, 2));
    if beta == 0. {
        // Michel spectrum in the muon rest frame
        let x = 2. * eng_p / MUON_MASS;
        if x >= 1. {
            return 0.;
        }
        return (6. * powi(x, 2) - 4. * powi(x, 3)) * 2. / MUON_MASS;
    }
    // Boost of the rest-frame spectrum: the positron energy E constrains
    // the rest-frame fraction x to [x-, x+], clamped to the Michel endpoint
    let xminus = 2. * eng_p / (MUON_MASS * gamma * (1. + beta));
    if xminus >= 1. {
        return 0.;
    }
    let xplus = (2. * eng_p / (MUON_MASS * gamma * (1. - beta))).min(1.);
    (michel_integral(xplus) - michel_integral(xminus)) / (beta * gamma * MUON_MASS)
}

/// Positron spectrum from the decay of a muon of energy `eng_mu`
pub fn muon(eng_ps: &[Float], eng_mu: Float) -> Vec<Float> {
    eng_ps.iter().map(|&e| muon_point(e, eng_mu)).collect()
}

/// dN/dE at one positron energy from the chain pi -> mu nu, mu -> e nu nu
fn charged_pion_point(eng_p: Float, eng_pi: Float) -> Result<Float> {
    if eng_pi < CHARGED_PION_MASS {
        return Ok(0.);
    }
    let mpi = CHARGED_PION_MASS;
    let mmu = MUON_MASS;
    // Muon energy and momentum in the pion rest frame
    let e_mu_star = (powi(mpi, 2) + powi(mmu, 2)) / (2. * mpi);
    let p_mu_star = (powi(mpi, 2) - powi(mmu, 2)) / (2. * mpi);

    let gamma = eng_pi / mpi;
    let beta = sqrt(1. - 1. / powi(gamma, 2));
    if beta == 0. {
        return Ok(BR_PI_TO_MU_NU * muon_point(eng_p, e_mu_star));
    }

    // The isotropic two-body decay makes the lab-frame muon energy uniform
    // between the boosted endpoints
    let e_mu_min = gamma * (e_mu_star - beta * p_mu_star);
    let e_mu_max = gamma * (e_mu_star + beta * p_mu_star);
    let out = quadrature::integrate(
        |e_mu| muon_point(eng_p, e_mu as Float) as f64,
        e_mu_min as f64,
        e_mu_max as f64,
        TOLERANCE as f64,
    );
    let integral = out.integral as Float;
    let error_estimate = out.error_estimate as Float;
    if error_estimate > 1e-4 * (1. + integral.abs()) {
        return Err(Error::IntegrationFailure {
            channel: "pi pi",
            error_estimate,
        });
    }
    Ok(BR_PI_TO_MU_NU * integral / (e_mu_max - e_mu_min))
}

/// Positron spectrum from the decay of a charged pion of energy `eng_pi`
///
/// Only the dominant pi -> mu nu chain contributes; the direct pi -> e nu
/// mode is helicity suppressed and neglected beyond the branching fraction.
pub fn charged_pion(eng_ps: &[Float], eng_pi: Float) -> Result<Vec<Float>> {
    eng_ps
        .iter()
        .map(|&e| charged_pion_point(e, eng_pi))
        .collect()
}

/// Index of the grid point closest to `value`
fn find_nearest(grid: &[Float], value: Float) -> Option<usize> {
    grid.iter()
        .map(|e| (e - value).abs())
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(idx, _)| idx)
}

/// Monochromatic positron line of energy `eng_e`, placed at the nearest
/// grid point with unit weight
pub fn electron_line(eng_ps: &[Float], eng_e: Float) -> Vec<Float> {
    let mut spec = vec![0.; eng_ps.len()];
    if let Some(idx) = find_nearest(eng_ps, eng_e) {
        spec[idx] = 1.;
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn michel_spectrum_is_normalized_at_rest() {
        let out = quadrature::integrate(
            |e| muon_point(e as Float, MUON_MASS) as f64,
            0.,
            (MUON_MASS / 2.) as f64,
            1e-10,
        );
        assert_relative_eq!(out.integral, 1., max_relative = 1e-6);
    }

    #[test]
    fn boosted_michel_spectrum_is_normalized() {
        let eng_mu = 1000.;
        let gamma = eng_mu / MUON_MASS;
        let beta = sqrt(1. - 1. / powi(gamma, 2));
        let e_max = gamma * (1. + beta) * MUON_MASS / 2.;
        let out = quadrature::integrate(
            |e| muon_point(e as Float, eng_mu) as f64,
            0.,
            e_max as f64,
            1e-10,
        );
        assert_relative_eq!(out.integral, 1., max_relative = 1e-5);
    }

    #[test]
    fn pion_spectrum_counts_one_positron_per_branching_fraction() {
        let eng_pi = 500.;
        let out = quadrature::integrate(
            |e| charged_pion_point(e as Float, eng_pi).unwrap() as f64,
            0.,
            eng_pi as f64,
            1e-8,
        );
        assert_relative_eq!(out.integral, BR_PI_TO_MU_NU as f64, max_relative = 1e-4);
    }

    #[test]
    fn spectra_vanish_for_unphysical_parent_energies() {
        let grid = [1., 10., 50.];
        assert!(muon(&grid, 50.).iter().all(|&x| x == 0.));
        assert!(charged_pion(&grid, 100.)
            .unwrap()
            .iter()
            .all(|&x| x == 0.));
    }

    #[test]
    fn electron_line_lands_on_the_nearest_grid_point() {
        let grid = [1., 10., 100., 1000.];
        let spec = electron_line(&grid, 120.);
        assert_eq!(spec, vec![0., 0., 1., 0.]);
    }
}
