//! Branching fractions sum to one whenever any annihilation channel is open

use approx::assert_relative_eq;
use dm_pheno::{
    cross_sections::{pseudo_scalar, vector},
    parameters::{PseudoScalarMediator, VectorMediator},
};

fn vector_params() -> VectorMediator {
    VectorMediator {
        mx: 100.,
        mv: 950.,
        gvxx: 1.,
        gvuu: 1.,
        gvdd: -0.5,
        gvss: 0.,
        gvee: 0.7,
        gvmumu: 0.3,
    }
}

fn pseudo_params() -> PseudoScalarMediator {
    PseudoScalarMediator {
        mx: 100.,
        mp: 800.,
        gpxx: 1.,
        gpee: 0.2,
        gpmumu: 0.4,
        gpuu: 0.1,
        gpdd: 0.1,
        gpgg: 0.05,
        gpaa: 0.05,
        beta: 0.1,
    }
}

#[test]
fn vector_fractions_sum_to_one_across_energies() {
    let params = vector_params();
    for cme in [300., 500., 900., 1500., 3000.] {
        let bfs = vector::branching_fractions(cme, &params);
        let sum: f64 = bfs.channels().iter().map(|(_, bf)| bf).sum();
        assert_relative_eq!(sum, 1., max_relative = 1e-12);
    }
}

#[test]
fn pseudo_scalar_fractions_sum_to_one_across_energies() {
    let params = pseudo_params();
    for cme in [250., 600., 1200., 2500.] {
        let bfs = pseudo_scalar::branching_fractions(cme, &params);
        let sum: f64 = bfs.channels().iter().map(|(_, bf)| bf).sum();
        assert_relative_eq!(sum, 1., max_relative = 1e-12);
    }
}

#[test]
fn fractions_vanish_below_the_dark_matter_threshold() {
    let bfs = vector::branching_fractions(150., &vector_params());
    assert!(bfs.channels().iter().all(|&(_, bf)| bf == 0.));

    let bfs = pseudo_scalar::branching_fractions(150., &pseudo_params());
    assert!(bfs.channels().iter().all(|&(_, bf)| bf == 0.));
}

#[test]
fn fractions_follow_the_cross_section_ratios() {
    let params = vector_params();
    let cme = 1500.;
    let sigmas = vector::annihilation_cross_sections(cme, &params);
    let bfs = vector::branching_fractions(cme, &params);
    assert_relative_eq!(bfs.ee, sigmas.ee / sigmas.total, max_relative = 1e-12);
    assert_relative_eq!(bfs.pipi, sigmas.pipi / sigmas.total, max_relative = 1e-12);
}
