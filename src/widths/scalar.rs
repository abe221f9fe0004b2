//! Partial decay widths of the scalar mediator
//!
//! The two-pion channels follow from leading-order chiral perturbation
//! theory with the scalar coupled through the quark masses and the trace
//! anomaly, which is where the vh/vs condensate factors originate. Every
//! width vanishes identically below its kinematic threshold.

use crate::{
    numeric::{functions::*, reals::consts::PI, Float},
    parameters::{
        ScalarMediator, ALPHA_EM, B0, CHARGED_PION_MASS, DOWN_QUARK_MASS, ELECTRON_MASS,
        MUON_MASS, NEUTRAL_PION_MASS, UP_QUARK_MASS, VH,
    },
};

/// Partial width for S -> gamma + gamma
pub fn width_s_to_gg(params: &ScalarMediator) -> Float {
    if params.ms <= 0. {
        return 0.;
    }
    powi(ALPHA_EM, 2) * powi(params.gsaa, 2) * powi(params.ms, 3)
        / (256. * powi(PI, 3) * powi(VH, 2))
}

/// Width into one pair of pions of mass `mpi`, without the identical- vs
/// distinct-particle symmetry factor.
fn width_s_to_2pi(mpi: Float, params: &ScalarMediator) -> Float {
    let ms = params.ms;
    if ms <= 2. * mpi {
        return 0.;
    }
    let gsff = params.gsff;
    let gsgg = params.gsgg;
    let vs = params.vs;

    let amp = 2.
        * gsgg
        * (2. * powi(mpi, 2) - powi(ms, 2))
        * (-9. * VH - 9. * gsff * vs + 2. * gsgg * vs)
        * (9. * VH + 8. * gsgg * vs)
        + B0 * (DOWN_QUARK_MASS + UP_QUARK_MASS)
            * (9. * VH + 4. * gsgg * vs)
            * (54. * gsgg * VH - 32. * powi(gsgg, 2) * vs
                + 9. * gsff * (9. * VH + 16. * gsgg * vs));

    sqrt(powi(ms, 2) - 4. * powi(mpi, 2)) * powi(amp, 2)
        / (32.
            * powi(ms, 2)
            * PI
            * powi(9. * VH + 9. * gsff * vs - 2. * gsgg * vs, 2)
            * powi(9. * VH + 4. * gsgg * vs, 2)
            * powi(9. * VH + 8. * gsgg * vs, 2))
}

/// Partial width for S -> pi0 + pi0
pub fn width_s_to_pi0pi0(params: &ScalarMediator) -> Float {
    width_s_to_2pi(NEUTRAL_PION_MASS, params)
}

/// Partial width for S -> pi+ + pi-
pub fn width_s_to_pipi(params: &ScalarMediator) -> Float {
    2. * width_s_to_2pi(CHARGED_PION_MASS, params)
}

/// Partial width for S -> x + xbar
pub fn width_s_to_xx(params: &ScalarMediator) -> Float {
    let ms = params.ms;
    let mx = params.mx;
    if ms <= 2. * mx {
        return 0.;
    }
    powi(params.gsxx, 2) * (ms - 2. * mx) * (ms + 2. * mx) * sqrt(powi(ms, 2) - 4. * powi(mx, 2))
        / (8. * powi(ms, 2) * PI)
}

/// Partial width for S -> f + fbar, for a Standard Model fermion of mass `mf`
pub fn width_s_to_ff(mf: Float, params: &ScalarMediator) -> Float {
    let ms = params.ms;
    if ms <= 2. * mf {
        return 0.;
    }
    powi(params.gsff, 2) * (ms - 2. * mf) * (ms + 2. * mf) * sqrt(powi(ms, 2) - 4. * powi(mf, 2))
        / (8. * powi(ms, 2) * PI)
}

/// Partial decay widths of the scalar mediator, one per open channel
#[derive(Debug, Clone, Copy)]
pub struct ScalarWidths {
    pub gg: Float,
    pub pi0pi0: Float,
    pub pipi: Float,
    pub xx: Float,
    pub ee: Float,
    pub mumu: Float,
    /// Sum of all the channels above
    pub total: Float,
}

impl ScalarWidths {
    /// Channel names and the associated partial widths, total excluded
    pub fn channels(&self) -> [(&'static str, Float); 6] {
        [
            ("g g", self.gg),
            ("pi0 pi0", self.pi0pi0),
            ("pi pi", self.pipi),
            ("x x", self.xx),
            ("e e", self.ee),
            ("mu mu", self.mumu),
        ]
    }
}

/// All partial widths of the scalar mediator, along with their sum
pub fn partial_widths(params: &ScalarMediator) -> ScalarWidths {
    let gg = width_s_to_gg(params);
    let pi0pi0 = width_s_to_pi0pi0(params);
    let pipi = width_s_to_pipi(params);
    let xx = width_s_to_xx(params);
    let ee = width_s_to_ff(ELECTRON_MASS, params);
    let mumu = width_s_to_ff(MUON_MASS, params);
    ScalarWidths {
        gg,
        pi0pi0,
        pipi,
        xx,
        ee,
        mumu,
        total: gg + pi0pi0 + pipi + xx + ee + mumu,
    }
}
