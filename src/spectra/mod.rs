//! Positron spectra from dark-matter annihilation
//!
//! Continuum spectra are branching-fraction weighted sums of the channel
//! shapes from [`positron`]; monochromatic lines are reported separately
//! with their energy and branching fraction.

use std::collections::BTreeMap;

use crate::{
    cross_sections,
    errors::Result,
    numeric::Float,
    parameters::{PseudoScalarMediator, VectorMediator, CHARGED_PION_MASS, NEUTRAL_PION_MASS},
};

pub mod positron;

/// Spectra keyed by channel name, including a `"total"` entry
pub type SpectrumMap = BTreeMap<&'static str, Vec<Float>>;

/// A monochromatic positron line
#[derive(Debug, Clone, Copy)]
pub struct PositronLine {
    /// Line energy in MeV
    pub energy: Float,
    /// Branching fraction of the producing channel
    pub bf: Float,
}

/// Weight a channel spectrum by its branching fraction, skipping the
/// evaluation entirely for closed channels
fn weighted(
    bf: Float,
    len: usize,
    spec: impl FnOnce() -> Result<Vec<Float>>,
) -> Result<Vec<Float>> {
    if bf == 0. {
        return Ok(vec![0.; len]);
    }
    Ok(spec()?.into_iter().map(|x| bf * x).collect())
}

/// Elementwise sum of channel spectra
fn sum_spectra(specs: &[&[Float]], len: usize) -> Vec<Float> {
    (0..len)
        .map(|i| specs.iter().map(|spec| spec[i]).sum())
        .collect()
}

/// Continuum positron spectrum from x xbar annihilation through the vector
/// mediator, per annihilation, on the grid `eng_ps`
pub fn vector_positron_spectra(
    eng_ps: &[Float],
    cme: Float,
    params: &VectorMediator,
) -> Result<SpectrumMap> {
    let bfs = cross_sections::vector::branching_fractions(cme, params);
    let len = eng_ps.len();

    let pipi = weighted(bfs.pipi, len, || positron::charged_pion(eng_ps, cme / 2.))?;
    let mumu = weighted(bfs.mumu, len, || Ok(positron::muon(eng_ps, cme / 2.)))?;
    let ee = weighted(bfs.ee, len, || Ok(positron::electron_line(eng_ps, cme / 2.)))?;
    let total = sum_spectra(&[&pipi, &mumu, &ee], len);

    let mut spectra = SpectrumMap::new();
    spectra.insert("e e", ee);
    spectra.insert("mu mu", mumu);
    spectra.insert("pi pi", pipi);
    spectra.insert("total", total);
    Ok(spectra)
}

/// Positron lines of the vector model at center-of-mass energy `cme`
pub fn vector_positron_lines(
    cme: Float,
    params: &VectorMediator,
) -> BTreeMap<&'static str, PositronLine> {
    let bfs = cross_sections::vector::branching_fractions(cme, params);
    BTreeMap::from([(
        "e e",
        PositronLine {
            energy: cme / 2.,
            bf: bfs.ee,
        },
    )])
}

/// Positron spectrum of the three-pion channel
///
/// NOT YET MODELED: evaluating it requires sampling the three-body phase
/// space; returns zeros and is kept out of the total.
fn pseudo_scalar_spectrum_pi0pipi(eng_ps: &[Float], cme: Float) -> Vec<Float> {
    if cme > 2. * CHARGED_PION_MASS + NEUTRAL_PION_MASS {
        log::warn!("pi0 pi pi positron spectrum not yet available, returning zeros");
    }
    vec![0.; eng_ps.len()]
}

/// Continuum positron spectrum from x xbar annihilation through the
/// pseudo-scalar mediator, per annihilation, on the grid `eng_ps`
pub fn pseudo_scalar_positron_spectra(
    eng_ps: &[Float],
    cme: Float,
    params: &PseudoScalarMediator,
) -> Result<SpectrumMap> {
    let bfs = cross_sections::pseudo_scalar::branching_fractions(cme, params);
    let len = eng_ps.len();

    let mumu = weighted(bfs.mumu, len, || Ok(positron::muon(eng_ps, cme / 2.)))?;
    let pi0pipi = pseudo_scalar_spectrum_pi0pipi(eng_ps, cme);
    let total = mumu.clone();

    let mut spectra = SpectrumMap::new();
    spectra.insert("mu mu", mumu);
    spectra.insert("pi0 pi pi", pi0pipi);
    spectra.insert("total", total);
    Ok(spectra)
}

/// Positron lines of the pseudo-scalar model at center-of-mass energy `cme`
pub fn pseudo_scalar_positron_lines(
    cme: Float,
    params: &PseudoScalarMediator,
) -> BTreeMap<&'static str, PositronLine> {
    let bfs = cross_sections::pseudo_scalar::branching_fractions(cme, params);
    BTreeMap::from([(
        "e e",
        PositronLine {
            energy: cme / 2.,
            bf: bfs.ee,
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vector_params() -> VectorMediator {
        VectorMediator {
            mx: 100.,
            mv: 600.,
            gvxx: 1.,
            gvuu: 1.,
            gvdd: -1.,
            gvss: 0.,
            gvee: 1.,
            gvmumu: 1.,
        }
    }

    #[test]
    fn vector_total_is_elementwise_sum_of_channels() {
        let eng_ps = [1., 10., 50., 100., 200., 400.];
        let spectra = vector_positron_spectra(&eng_ps, 1000., &vector_params()).unwrap();
        let total = &spectra["total"];
        for (i, &t) in total.iter().enumerate() {
            let sum = spectra["e e"][i] + spectra["mu mu"][i] + spectra["pi pi"][i];
            assert_relative_eq!(t, sum, max_relative = 1e-12);
        }
    }

    #[test]
    fn closed_channels_contribute_zeros() {
        let mut params = vector_params();
        params.gvee = 0.;
        params.gvmumu = 0.;
        let eng_ps = [1., 10., 50., 100.];
        let spectra = vector_positron_spectra(&eng_ps, 1000., &params).unwrap();
        assert!(spectra["e e"].iter().all(|&x| x == 0.));
        assert!(spectra["mu mu"].iter().all(|&x| x == 0.));
        assert!(spectra["pi pi"].iter().any(|&x| x > 0.));
    }

    #[test]
    fn vector_line_sits_at_half_the_cm_energy() {
        let lines = vector_positron_lines(1000., &vector_params());
        let line = &lines["e e"];
        assert_relative_eq!(line.energy, 500.);
        assert!(line.bf > 0.);
    }
}
