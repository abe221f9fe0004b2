//! Mediator partial decay widths
//!
//! One submodule per mediator model. Each exposes the individual partial
//! widths together with a `partial_widths` summary that also carries the
//! total. All widths are in MeV.

use crate::{
    numeric::Float,
    parameters::{ELECTRON_MASS, MUON_MASS},
};

pub mod pseudo_scalar;
pub mod scalar;
pub mod vector;

/// Charged-lepton flavors the mediators can decay into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lepton {
    Electron,
    Muon,
}

impl Lepton {
    /// Lepton mass in MeV
    pub fn mass(self) -> Float {
        match self {
            Lepton::Electron => ELECTRON_MASS,
            Lepton::Muon => MUON_MASS,
        }
    }
}
