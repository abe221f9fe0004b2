//! Dark-matter phenomenology formula core
//!
//! Closed-form squared matrix elements, mediator decay widths, annihilation
//! cross sections and positron spectra for simplified dark-matter models
//! with scalar, pseudo-scalar and vector mediators, plus the unitarized
//! meson-meson amplitudes used by the final-state-interaction corrections.
//!
//! Every entry point is a pure function of its inputs. Masses and energies
//! are in MeV, widths in MeV, cross sections in MeV^-2 and spectral
//! densities in MeV^-1.

pub mod cross_sections;
pub mod errors;
pub mod kinematics;
pub mod matrix_elements;
pub mod numeric;
pub mod parameters;
pub mod spectra;
pub mod unitarization;
pub mod widths;

pub use errors::{Error, Result};
pub use kinematics::Momentum;
pub use numeric::{Complex, Float};
pub use parameters::{PseudoScalarMediator, ScalarMediator, VectorMediator};
