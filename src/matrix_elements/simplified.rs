//! Tree-level and radiative squared matrix elements from simplified models
//!
//! All processes are s-channel annihilations of a dark-matter fermion pair
//! `x` into a Standard Model fermion pair `f` through a mediator: scalar
//! (S), pseudo-scalar (P), vector (V) or axial-vector (A). The final-state
//! momenta are supplied in the center-of-mass frame; the initial momenta
//! are reconstructed back-to-back along z from the total energy Q where the
//! formula needs them.
//!
//! Argument conventions follow a common pattern: `moms` holds the fermion
//! momenta (and the photon last, for radiative channels), `mx`/`mf` the
//! initial/final fermion masses, `m*` the mediator mass, `cxx*`/`cff*` the
//! mediator couplings and `qf` the electric charge of the final fermion.

use crate::{
    kinematics::{cm_pair, minkowski_dot, total_energy, Momentum},
    numeric::{functions::*, reals::consts::PI, Float},
    parameters::ALPHA_EM,
};

/// Electromagnetic coupling of the radiated photon
fn e_em() -> Float {
    sqrt(4. * PI * ALPHA_EM)
}

// ### TREE-LEVEL SQUARED MATRIX ELEMENTS ###

/// x + x -> S* -> f + f
pub fn msqrd_xx_to_s_to_ff(
    moms: &[Momentum; 2],
    mx: Float,
    mf: Float,
    ms: Float,
    cxxs: Float,
    cffs: Float,
) -> Float {
    let q = total_energy(moms);

    powi(cffs, 2) * powi(cxxs, 2) * (powi(q, 2) - 4. * powi(mf, 2))
        * (powi(q, 2) - 4. * powi(mx, 2))
        / powi(powi(ms, 2) - powi(q, 2), 2)
}

/// x + x -> P* -> f + f
pub fn msqrd_xx_to_p_to_ff(
    moms: &[Momentum; 2],
    _mx: Float,
    _mf: Float,
    mp: Float,
    cxxp: Float,
    cffp: Float,
) -> Float {
    let q = total_energy(moms);

    powi(cffp, 2) * powi(cxxp, 2) * powi(q, 4) / powi(powi(mp, 2) - powi(q, 2), 2)
}

/// x + x -> V* -> f + f
pub fn msqrd_xx_to_v_to_ff(
    moms: &[Momentum; 2],
    mx: Float,
    mf: Float,
    mv: Float,
    cxxv: Float,
    cffv: Float,
) -> Float {
    let p3 = &moms[0];
    let p4 = &moms[1];

    let q = total_energy(moms);
    let (p1, p2) = cm_pair(q, mx);

    let p1_p4 = minkowski_dot(&p1, p4);
    let p2_p3 = minkowski_dot(&p2, p3);
    let p1_p3 = minkowski_dot(&p1, p3);
    let p2_p4 = minkowski_dot(&p2, p4);

    4. * powi(cffv, 2)
        * powi(cxxv, 2)
        * (2. * p1_p4 * p2_p3 + 2. * p1_p3 * p2_p4
            + (powi(mf, 2) + powi(mx, 2)) * powi(q, 2))
        / powi(powi(mv, 2) - powi(q, 2), 2)
}

/// x + x -> A* -> f + f
pub fn msqrd_xx_to_a_to_ff(
    moms: &[Momentum; 2],
    mx: Float,
    mf: Float,
    ma: Float,
    cxxa: Float,
    cffa: Float,
) -> Float {
    let p3 = &moms[0];
    let p4 = &moms[1];

    let q = total_energy(moms);
    let (p1, p2) = cm_pair(q, mx);

    let p1_p4 = minkowski_dot(&p1, p4);
    let p2_p3 = minkowski_dot(&p2, p3);
    let p1_p3 = minkowski_dot(&p1, p3);
    let p2_p4 = minkowski_dot(&p2, p4);

    4. * powi(cffa, 2)
        * powi(cxxa, 2)
        * (8. * powi(mf, 2) * powi(mx, 2) + 2. * p1_p4 * p2_p3 + 2. * p1_p3 * p2_p4
            - powi(mf, 2) * powi(q, 2)
            - powi(mx, 2) * powi(q, 2))
        / powi(-powi(ma, 2) + powi(q, 2), 2)
}

// ### RADIATIVE SQUARED MATRIX ELEMENTS ###

/// x + x -> S* -> f + f + gamma
pub fn msqrd_xx_to_s_to_ffg(
    moms: &[Momentum; 3],
    mx: Float,
    mf: Float,
    ms: Float,
    qf: Float,
    cxxs: Float,
    cffs: Float,
) -> Float {
    let p3 = &moms[0];
    let p4 = &moms[1];
    let k = &moms[2];

    let q = total_energy(moms);
    let e = e_em();

    // Masses rescaled by the center-of-mass energy
    let mfp = mf / q;
    let mxp = mx / q;
    let msp = ms / q;

    let k_p3 = minkowski_dot(k, p3);
    let k_p4 = minkowski_dot(k, p4);
    let p3_p4 = minkowski_dot(p3, p4);

    (-8.
        * powi(cffs, 2)
        * powi(cxxs, 2)
        * powi(e, 2)
        * (-1. + 4. * powi(mxp, 2))
        * (k_p3
            * k_p4
            * (powi(k_p3 + k_p4, 2) + 2. * (k_p3 + k_p4) * p3_p4 + 2. * powi(p3_p4, 2))
            - (k_p3 + k_p4)
                * powi(mfp, 2)
                * (powi(k_p3, 2) + k_p3 * p3_p4 + k_p4 * (k_p4 + p3_p4))
                * powi(q, 2)
            + (powi(k_p3, 2) + powi(k_p4, 2)) * powi(mfp, 4) * powi(q, 4))
        * powi(qf, 2))
        / (powi(k_p3, 2) * powi(k_p4, 2) * powi(-1. + powi(msp, 2), 2) * powi(q, 2))
}

/// x + x -> P* -> f + f + gamma
pub fn msqrd_xx_to_p_to_ffg(
    moms: &[Momentum; 3],
    _mx: Float,
    mf: Float,
    mp: Float,
    qf: Float,
    cxxp: Float,
    cffp: Float,
) -> Float {
    let p3 = &moms[0];
    let p4 = &moms[1];
    let k = &moms[2];

    let q = total_energy(moms);
    let e = e_em();

    let mfp = mf / q;
    let mpp = mp / q;

    let k_p3 = minkowski_dot(k, p3);
    let k_p4 = minkowski_dot(k, p4);
    let p3_p4 = minkowski_dot(p3, p4);

    (-2.
        * powi(cffp, 2)
        * powi(cxxp, 2)
        * powi(e, 2)
        * powi(q, 2)
        * (k_p3
            * k_p4
            * (-powi(k_p3 + k_p4, 2) - 2. * (k_p3 + k_p4) * p3_p4 - 2. * powi(p3_p4, 2))
            + powi(mfp, 2)
                * (powi(k_p3, 3)
                    + k_p3 * k_p4 * (k_p4 - 2. * p3_p4)
                    + powi(k_p3, 2) * (k_p4 + p3_p4)
                    + powi(k_p4, 2) * (k_p4 + p3_p4))
                * powi(q, 2)
            + (powi(k_p3, 2) + powi(k_p4, 2)) * powi(mfp, 4) * powi(q, 4))
        * powi(qf, 2))
        / (powi(k_p3, 2)
            * powi(k_p4, 2)
            * powi(
                2. * (k_p3 + k_p4 + p3_p4) + (2. * powi(mfp, 2) - powi(mpp, 2)) * powi(q, 2),
                2,
            ))
}

/// x + x -> V* -> f + f + gamma
pub fn msqrd_xx_to_v_to_ffg(
    moms: &[Momentum; 3],
    mx: Float,
    mf: Float,
    mv: Float,
    qf: Float,
    cxxv: Float,
    cffv: Float,
) -> Float {
    let p3 = &moms[0];
    let p4 = &moms[1];
    let k = &moms[2];

    let q = total_energy(moms);
    let e = e_em();
    let (p1, p2) = cm_pair(q, mx);

    let k_p3 = minkowski_dot(k, p3);
    let k_p4 = minkowski_dot(k, p4);
    let p3_p4 = minkowski_dot(p3, p4);

    let k_p1 = minkowski_dot(k, &p1);
    let p1_p3 = minkowski_dot(&p1, p3);
    let p1_p4 = minkowski_dot(&p1, p4);

    let k_p2 = minkowski_dot(k, &p2);
    let p2_p3 = minkowski_dot(&p2, p3);
    let p2_p4 = minkowski_dot(&p2, p4);

    (-4.
        * powi(cffv, 2)
        * powi(cxxv, 2)
        * powi(e, 2)
        * (2. * k_p3
            * k_p4
            * (-(k_p1 * k_p3 * p2_p3) + 2. * k_p4 * p1_p3 * p2_p3
                - k_p3 * p1_p4 * p2_p3
                - k_p4 * p1_p4 * p2_p3
                - k_p1 * k_p4 * p2_p4
                - k_p3 * p1_p3 * p2_p4
                - k_p4 * p1_p3 * p2_p4
                + 2. * k_p3 * p1_p4 * p2_p4
                - ((k_p1 + 2. * p1_p4) * p2_p3 + (k_p1 + 2. * p1_p3) * p2_p4) * p3_p4
                - k_p2
                    * (k_p3 * p1_p3 + k_p4 * p1_p4 + (p1_p3 + p1_p4) * p3_p4)
                - powi(mx, 2)
                    * (powi(k_p3, 2)
                        + powi(k_p4, 2)
                        + 2. * (k_p3 + k_p4) * p3_p4
                        + 2. * powi(p3_p4, 2)))
            + (powi(k_p3, 2) + powi(k_p4, 2))
                * powi(mf, 4)
                * (2. * powi(mx, 2) + powi(q, 2))
            + 2. * powi(mf, 2)
                * (k_p2 * powi(k_p3, 2) * p1_p3
                    + k_p2 * powi(k_p4, 2) * p1_p4
                    + powi(k_p3, 2) * p1_p4 * p2_p3
                    + powi(k_p4, 2) * p1_p4 * p2_p3
                    + powi(k_p3, 2) * p1_p3 * p2_p4
                    + powi(k_p4, 2) * p1_p3 * p2_p4
                    + k_p1
                        * (2. * k_p2 * k_p3 * k_p4
                            + powi(k_p3, 2) * p2_p3
                            + powi(k_p4, 2) * p2_p4)
                    + powi(mx, 2)
                        * (powi(k_p3, 3)
                            + powi(k_p3, 2) * k_p4
                            + k_p3 * powi(k_p4, 2)
                            + powi(k_p4, 3)
                            + powi(k_p3 - k_p4, 2) * p3_p4)
                    - k_p3 * k_p4 * p3_p4 * powi(q, 2)))
        * powi(qf, 2))
        / (powi(k_p3, 2)
            * powi(k_p4, 2)
            * powi(
                -2. * powi(mf, 2) + powi(mv, 2) - 2. * (k_p3 + k_p4 + p3_p4),
                2,
            ))
}

/// x + x -> A* -> f + f + gamma
pub fn msqrd_xx_to_a_to_ffg(
    moms: &[Momentum; 3],
    mx: Float,
    mf: Float,
    ma: Float,
    qf: Float,
    cxxa: Float,
    cffa: Float,
) -> Float {
    let p3 = &moms[0];
    let p4 = &moms[1];
    let k = &moms[2];

    let q = total_energy(moms);
    let e = e_em();
    let (p1, p2) = cm_pair(q, mx);

    let k_p3 = minkowski_dot(k, p3);
    let k_p4 = minkowski_dot(k, p4);
    let p3_p4 = minkowski_dot(p3, p4);

    let k_p1 = minkowski_dot(k, &p1);
    let p1_p3 = minkowski_dot(&p1, p3);
    let p1_p4 = minkowski_dot(&p1, p4);

    let k_p2 = minkowski_dot(k, &p2);
    let p2_p3 = minkowski_dot(&p2, p3);
    let p2_p4 = minkowski_dot(&p2, p4);

    (4. * powi(cffa, 2)
        * powi(cxxa, 2)
        * powi(e, 2)
        * (2. * k_p3
            * k_p4
            * (k_p1 * k_p3 * p2_p3 - 2. * k_p4 * p1_p3 * p2_p3
                + k_p3 * p1_p4 * p2_p3
                + k_p4 * p1_p4 * p2_p3
                + k_p1 * k_p4 * p2_p4
                + k_p3 * p1_p3 * p2_p4
                + k_p4 * p1_p3 * p2_p4
                - 2. * k_p3 * p1_p4 * p2_p4
                + ((k_p1 + 2. * p1_p4) * p2_p3 + (k_p1 + 2. * p1_p3) * p2_p4) * p3_p4
                + k_p2
                    * (k_p3 * p1_p3 + k_p4 * p1_p4 + (p1_p3 + p1_p4) * p3_p4)
                - powi(mx, 2)
                    * (powi(k_p3, 2)
                        + powi(k_p4, 2)
                        + 2. * (k_p3 + k_p4) * p3_p4
                        + 2. * powi(p3_p4, 2)))
            + (powi(k_p3, 2) + powi(k_p4, 2))
                * powi(mf, 4)
                * (-6. * powi(mx, 2) + powi(q, 2))
            + 2. * powi(mf, 2)
                * (-(k_p2 * powi(k_p3, 2) * p1_p3)
                    - k_p2 * powi(k_p4, 2) * p1_p4
                    - powi(k_p3, 2) * p1_p4 * p2_p3
                    - powi(k_p4, 2) * p1_p4 * p2_p3
                    - powi(k_p3, 2) * p1_p3 * p2_p4
                    - powi(k_p4, 2) * p1_p3 * p2_p4
                    + k_p1
                        * (2. * k_p2 * k_p3 * k_p4
                            - powi(k_p3, 2) * p2_p3
                            - powi(k_p4, 2) * p2_p4)
                    + powi(mx, 2)
                        * (powi(k_p3, 3)
                            + powi(k_p3, 2) * (k_p4 + p3_p4)
                            + powi(k_p4, 2) * (k_p4 + p3_p4)
                            + k_p3 * k_p4 * (k_p4 + 6. * p3_p4))
                    - k_p3 * k_p4 * p3_p4 * powi(q, 2)))
        * powi(qf, 2))
        / (powi(k_p3, 2)
            * powi(k_p4, 2)
            * powi(
                powi(ma, 2) - 2. * powi(mf, 2) - 2. * (k_p3 + k_p4 + p3_p4),
                2,
            ))
}
