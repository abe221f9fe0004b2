//! Spin-averaged squared matrix elements
//!
//! Grouped by process family: long-lived kaon decays and simplified
//! dark-matter annihilation models. Every function is a pure evaluation of
//! a closed-form expression over the supplied final-state momenta.

pub mod kaon;
pub mod simplified;
