//! Partial decay widths of the vector mediator
//!
//! The pion channel proceeds through the isovector combination of the quark
//! couplings, so it closes entirely when gvuu equals gvdd.

use crate::{
    numeric::{functions::*, reals::consts::PI, Float},
    parameters::{VectorMediator, CHARGED_PION_MASS},
    widths::Lepton,
};

/// Partial width for V -> l+ + l-
pub fn width_v_to_ff(lepton: Lepton, params: &VectorMediator) -> Float {
    let mv = params.mv;
    let mf = lepton.mass();
    let gvll = match lepton {
        Lepton::Electron => params.gvee,
        Lepton::Muon => params.gvmumu,
    };
    if mv <= 2. * mf {
        return 0.;
    }
    powi(gvll, 2) * (powi(mv, 2) + 2. * powi(mf, 2)) * sqrt(powi(mv, 2) - 4. * powi(mf, 2))
        / (12. * PI * powi(mv, 2))
}

/// Partial width for V -> x + xbar
pub fn width_v_to_xx(params: &VectorMediator) -> Float {
    let mv = params.mv;
    let mx = params.mx;
    if mv <= 2. * mx {
        return 0.;
    }
    powi(params.gvxx, 2) * (powi(mv, 2) + 2. * powi(mx, 2)) * sqrt(powi(mv, 2) - 4. * powi(mx, 2))
        / (12. * PI * powi(mv, 2))
}

/// Partial width for V -> pi+ + pi-
pub fn width_v_to_pipi(params: &VectorMediator) -> Float {
    let mv = params.mv;
    if mv <= 2. * CHARGED_PION_MASS {
        return 0.;
    }
    let ksqr = powi(mv, 2) - 4. * powi(CHARGED_PION_MASS, 2);
    powi(params.gvdd - params.gvuu, 2) * ksqr * sqrt(ksqr) / (48. * PI * powi(mv, 2))
}

/// Partial decay widths of the vector mediator, one per open channel
#[derive(Debug, Clone, Copy)]
pub struct VectorWidths {
    pub ee: Float,
    pub mumu: Float,
    pub pipi: Float,
    pub xx: Float,
    /// Sum of all the channels above
    pub total: Float,
}

impl VectorWidths {
    /// Channel names and the associated partial widths, total excluded
    pub fn channels(&self) -> [(&'static str, Float); 4] {
        [
            ("e e", self.ee),
            ("mu mu", self.mumu),
            ("pi pi", self.pipi),
            ("x x", self.xx),
        ]
    }
}

/// All partial widths of the vector mediator, along with their sum
pub fn partial_widths(params: &VectorMediator) -> VectorWidths {
    let ee = width_v_to_ff(Lepton::Electron, params);
    let mumu = width_v_to_ff(Lepton::Muon, params);
    let pipi = width_v_to_pipi(params);
    let xx = width_v_to_xx(params);
    VectorWidths {
        ee,
        mumu,
        pipi,
        xx,
        total: ee + mumu + pipi + xx,
    }
}
