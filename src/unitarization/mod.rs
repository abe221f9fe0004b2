//! Unitarized meson-meson rescattering
//!
//! Provides the cutoff-regularized two-meson loop function and the I=0
//! S-wave coupled-channel amplitudes obtained by resumming the lowest-order
//! chiral kernel with it. These are the black-box numeric inputs of the
//! final-state-interaction corrections.

pub mod bethe_salpeter;
pub mod loops;

pub use bethe_salpeter::{amp_kk_to_kk_bse, amp_pipi_to_kk_bse, amp_pipi_to_pipi_bse};
pub use loops::bubble_loop;
