//! This module implements some domain-specific 4-momentum handling logic.

use crate::numeric::{functions::*, Float};
use nalgebra::SVector;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Relativistic 4-momentum, ordered (E, px, py, pz)
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 0;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 1;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 2;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 3;

/// Minkowski inner product with the (+, -, -, -) signature
///
/// This is the sole geometric primitive of the matrix-element formulas.
pub fn minkowski_dot(p1: &Momentum, p2: &Momentum) -> Float {
    p1[E] * p2[E] - p1[X] * p2[X] - p1[Y] * p2[Y] - p1[Z] * p2[Z]
}

/// Invariant mass squared of a 4-momentum
pub fn mass_sqr(p: &Momentum) -> Float {
    minkowski_dot(p, p)
}

/// Total energy of a set of final-state momenta
///
/// By energy conservation this is the center-of-mass energy Q when the
/// momenta are expressed in the center-of-mass frame.
pub fn total_energy(moms: &[Momentum]) -> Float {
    moms.iter().map(|p| p[E]).sum()
}

/// Back-to-back initial-state pair along the z axis
///
/// Reconstructs the momenta of two annihilating particles of mass `m` in
/// their center-of-mass frame with total energy `q`.
pub fn cm_pair(q: Float, m: Float) -> (Momentum, Momentum) {
    let energy = q / 2.;
    let p = sqrt(energy * energy - m * m);
    (
        Momentum::new(energy, 0., 0., p),
        Momentum::new(energy, 0., 0., -p),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minkowski_dot_has_mostly_minus_signature() {
        let p1 = Momentum::new(10., 1., 2., 3.);
        let p2 = Momentum::new(5., -1., 0., 2.);
        assert_relative_eq!(minkowski_dot(&p1, &p2), 50. + 1. - 0. - 6.);
    }

    #[test]
    fn cm_pair_conserves_energy_and_momentum() {
        let (p1, p2) = cm_pair(500., 100.);
        assert_relative_eq!(p1[E] + p2[E], 500.);
        assert_relative_eq!(p1[Z] + p2[Z], 0.);
        assert_relative_eq!(mass_sqr(&p1), 100. * 100., max_relative = 1e-12);
    }
}
