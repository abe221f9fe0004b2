//! Kinematic threshold behavior of the partial widths

use dm_pheno::{
    parameters::{
        PseudoScalarMediator, ScalarMediator, VectorMediator, CHARGED_PION_MASS, MUON_MASS,
        NEUTRAL_PION_MASS,
    },
    widths::{pseudo_scalar, scalar, vector, Lepton},
};

fn scalar_params(ms: f64) -> ScalarMediator {
    ScalarMediator {
        mx: 200.,
        ms,
        gsxx: 1.,
        gsff: 0.1,
        gsgg: 0.1,
        gsaa: 0.1,
        vs: 5.,
    }
}

fn pseudo_params(mp: f64) -> PseudoScalarMediator {
    PseudoScalarMediator {
        mx: 200.,
        mp,
        gpxx: 1.,
        gpee: 0.1,
        gpmumu: 0.1,
        gpuu: 0.1,
        gpdd: 0.1,
        gpgg: 0.05,
        gpaa: 0.05,
        beta: 0.1,
    }
}

#[test]
fn scalar_fermion_width_is_zero_below_threshold() {
    let params = scalar_params(2. * MUON_MASS - 1.);
    assert_eq!(scalar::width_s_to_ff(MUON_MASS, &params), 0.);
}

#[test]
fn scalar_widths_open_smoothly_above_threshold() {
    let just_above = scalar::width_s_to_ff(MUON_MASS, &scalar_params(2. * MUON_MASS + 0.1));
    let well_above = scalar::width_s_to_ff(MUON_MASS, &scalar_params(2. * MUON_MASS + 10.));
    assert!(just_above > 0.);
    assert!(just_above < well_above);
}

#[test]
fn scalar_pion_widths_respect_their_own_thresholds() {
    // Between the two thresholds only the neutral channel is open
    let params = scalar_params(2. * NEUTRAL_PION_MASS + 5.);
    assert!(scalar::width_s_to_pi0pi0(&params) > 0.);
    assert_eq!(scalar::width_s_to_pipi(&params), 0.);
}

#[test]
fn pseudo_scalar_three_pion_width_is_zero_below_threshold() {
    let params = pseudo_params(2. * CHARGED_PION_MASS + NEUTRAL_PION_MASS - 1.);
    assert_eq!(pseudo_scalar::width_p_to_pi0pipi(&params).unwrap(), 0.);
}

#[test]
fn pseudo_scalar_three_pion_width_opens_above_threshold() {
    let params = pseudo_params(600.);
    let width = pseudo_scalar::width_p_to_pi0pipi(&params).unwrap();
    assert!(width > 0.);
    assert!(width.is_finite());
}

#[test]
fn vector_widths_close_below_threshold() {
    let params = VectorMediator {
        mx: 300.,
        mv: 100.,
        gvxx: 1.,
        gvuu: 1.,
        gvdd: -1.,
        gvss: 0.,
        gvee: 1.,
        gvmumu: 1.,
    };
    assert_eq!(vector::width_v_to_xx(&params), 0.);
    assert_eq!(vector::width_v_to_pipi(&params), 0.);
    assert_eq!(vector::width_v_to_ff(Lepton::Muon, &params), 0.);
    assert!(vector::width_v_to_ff(Lepton::Electron, &params) > 0.);
}
