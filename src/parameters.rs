//! Physical constants and mediator parameter sets
//!
//! All dimensionful constants are in MeV (masses, energies) or appropriate
//! powers thereof (GF in MeV^-2). Values follow the PDG.

use crate::numeric::{functions::*, reals::consts::PI, Float};

/// Fine structure constant
pub const ALPHA_EM: Float = 1. / 137.04;

/// Fermi constant (MeV^-2)
pub const GF: Float = 1.166_378_7e-11;

/// CKM matrix element |V_us|
pub const VUS: Float = 0.2253;

/// Electron mass
pub const ELECTRON_MASS: Float = 0.510_998_928;

/// Muon mass
pub const MUON_MASS: Float = 105.658_371_5;

/// Neutral pion mass
pub const NEUTRAL_PION_MASS: Float = 134.9766;

/// Charged pion mass
pub const CHARGED_PION_MASS: Float = 139.570_18;

/// Neutral kaon mass
pub const NEUTRAL_KAON_MASS: Float = 497.61;

/// Charged kaon mass
pub const CHARGED_KAON_MASS: Float = 493.68;

/// Up quark mass (MS-bar)
pub const UP_QUARK_MASS: Float = 2.3;

/// Down quark mass (MS-bar)
pub const DOWN_QUARK_MASS: Float = 4.8;

/// Strange quark mass (MS-bar)
pub const STRANGE_QUARK_MASS: Float = 95.;

/// Higgs vacuum expectation value
pub const VH: Float = 246.219_65e3;

/// Pion decay constant
pub const FPI: Float = 92.2138;

/// Pion mass in the chiral limit, used by the unitarized amplitudes
pub const PION_MASS_CHIRAL_LIMIT: Float = (CHARGED_PION_MASS + NEUTRAL_PION_MASS) / 2.;

/// Kaon mass in the chiral limit, used by the unitarized amplitudes
pub const KAON_MASS_CHIRAL_LIMIT: Float = (CHARGED_KAON_MASS + NEUTRAL_KAON_MASS) / 2.;

/// Leading-order chiral condensate parameter B0, fixed by the pion mass
pub const B0: Float =
    NEUTRAL_PION_MASS * NEUTRAL_PION_MASS / (UP_QUARK_MASS + DOWN_QUARK_MASS);

/// Branching fraction of the charged pion into mu nu
pub const BR_PI_TO_MU_NU: Float = 0.9998;

/// Electromagnetic charge unit sqrt(4 pi alpha)
pub fn qe() -> Float {
    sqrt(4. * PI * ALPHA_EM)
}

/// Parameters of the scalar-mediator model
///
/// `vs` is the vacuum expectation value of the scalar field; `gsgg` couples
/// the scalar to gluons through the trace anomaly.
#[derive(Debug, Clone, Copy)]
pub struct ScalarMediator {
    /// Dark-matter fermion mass
    pub mx: Float,
    /// Scalar mediator mass
    pub ms: Float,
    /// Coupling to the dark-matter fermion
    pub gsxx: Float,
    /// Universal coupling to Standard Model fermions
    pub gsff: Float,
    /// Effective coupling to gluons
    pub gsgg: Float,
    /// Effective coupling to photons
    pub gsaa: Float,
    /// Scalar vacuum expectation value
    pub vs: Float,
}

/// Parameters of the pseudo-scalar-mediator model
#[derive(Debug, Clone, Copy)]
pub struct PseudoScalarMediator {
    /// Dark-matter fermion mass
    pub mx: Float,
    /// Pseudo-scalar mediator mass
    pub mp: Float,
    /// Coupling to the dark-matter fermion
    pub gpxx: Float,
    /// Coupling to electrons
    pub gpee: Float,
    /// Coupling to muons
    pub gpmumu: Float,
    /// Coupling to up quarks
    pub gpuu: Float,
    /// Coupling to down quarks
    pub gpdd: Float,
    /// Effective coupling to gluons
    pub gpgg: Float,
    /// Effective coupling to photons
    pub gpaa: Float,
    /// Mixing angle with the neutral pion
    pub beta: Float,
}

/// Parameters of the vector-mediator model
#[derive(Debug, Clone, Copy)]
pub struct VectorMediator {
    /// Dark-matter fermion mass
    pub mx: Float,
    /// Vector mediator mass
    pub mv: Float,
    /// Coupling to the dark-matter fermion
    pub gvxx: Float,
    /// Coupling to up quarks
    pub gvuu: Float,
    /// Coupling to down quarks
    pub gvdd: Float,
    /// Coupling to strange quarks
    pub gvss: Float,
    /// Coupling to electrons
    pub gvee: Float,
    /// Coupling to muons
    pub gvmumu: Float,
}
