//! Squared matrix elements for long-lived neutral kaon decays
//!
//! Each function takes the final-state 4-momenta in the kaon rest frame and
//! returns the spin-averaged squared matrix element divided by the flux
//! normalization 2Q, where Q is the sum of final-state energies. The kaon
//! momentum is reconstructed from energy conservation as (Q, 0, 0, 0).

use crate::{
    kinematics::{minkowski_dot, total_energy, Momentum},
    numeric::{functions::*, reals::consts::PI, Float},
    parameters::{ALPHA_EM, CHARGED_PION_MASS, ELECTRON_MASS, GF, NEUTRAL_KAON_MASS, VUS},
};

/// K_L -> pi + e + nu
///
/// Momentum ordering: pion, electron, neutrino.
pub fn kl_to_pi_e_nu(moms: &[Momentum; 3]) -> Float {
    let pp = &moms[0];
    let pe = &moms[1];
    let pn = &moms[2];

    let q = total_energy(moms);
    let pk = Momentum::new(q, 0., 0., 0.);

    let pe_pn = minkowski_dot(pe, pn);
    let pe_pk = minkowski_dot(pe, &pk);
    let pk_pn = minkowski_dot(&pk, pn);
    let pe_pp = minkowski_dot(pe, pp);
    let pk_pp = minkowski_dot(&pk, pp);
    let pn_pp = minkowski_dot(pn, pp);

    let mk = NEUTRAL_KAON_MASS;
    let mp = CHARGED_PION_MASS;

    let mat_elem_sqrd = -2.
        * powi(GF, 2)
        * (pe_pn * (powi(mk, 2) + powi(mp, 2) + 2. * pk_pp)
            - 2. * (pe_pk + pe_pp) * (pk_pn + pn_pp))
        * powi(VUS, 2);

    mat_elem_sqrd / (2. * q)
}

/// K_L -> pi + e + nu + gamma
///
/// Momentum ordering: pion, electron, neutrino, photon.
pub fn kl_to_pi_e_nu_gamma(moms: &[Momentum; 4]) -> Float {
    let pp = &moms[0];
    let pe = &moms[1];
    let pn = &moms[2];
    let pg = &moms[3];

    let q = total_energy(moms);
    let pk = Momentum::new(q, 0., 0., 0.);

    let pk_pn = minkowski_dot(&pk, pn);
    let pk_pp = minkowski_dot(&pk, pp);
    let pe_pk = minkowski_dot(pe, &pk);
    let pe_pg = minkowski_dot(pe, pg);
    let pe_pn = minkowski_dot(pe, pn);
    let pe_pp = minkowski_dot(pe, pp);
    let pg_pp = minkowski_dot(pg, pp);
    let pg_pk = minkowski_dot(pg, &pk);
    let pg_pn = minkowski_dot(pg, pn);
    let pn_pp = minkowski_dot(pn, pp);

    let e = sqrt(4. * PI * ALPHA_EM);
    let mp = CHARGED_PION_MASS;
    let mk = NEUTRAL_KAON_MASS;
    let me = ELECTRON_MASS;

    let mat_elem_sqrd = (2.
        * powi(e, 2)
        * powi(GF, 2)
        * (powi(mp, 4) * powi(pe_pg, 2) * pe_pn
            + powi(mk, 2)
                * (powi(mp, 2) * powi(pe_pg, 2) * pe_pn
                    + pg_pp
                        * (pe_pg * pg_pn * (pe_pp - pg_pp)
                            + powi(me, 2) * (pe_pn + pg_pn) * pg_pp
                            + pe_pg * pe_pn * (2. * pe_pp + pg_pp)
                            + powi(pe_pg, 2) * (2. * pe_pn - pn_pp)))
            + powi(mp, 2)
                * (powi(me, 2) * (pe_pn + pg_pn) * powi(pg_pp, 2)
                    + pe_pg
                        * pg_pp
                        * (pg_pn * (pe_pp - pg_pp) + pe_pn * (2. * pe_pp + pg_pp))
                    - 2. * powi(pe_pg, 3) * (pg_pn + pk_pn + pn_pp)
                    + powi(pe_pg, 2)
                        * (2. * pe_pn * (pg_pk + 2. * pg_pp + pk_pp)
                            - 2. * (pe_pk + pe_pp) * (pg_pn + pk_pn + pn_pp)
                            + pg_pp * (2. * (pg_pn + pk_pn) + pn_pp)))
            + pg_pp
                * (-(powi(pe_pg, 3) * (2. * pg_pn + 3. * (pk_pn + pn_pp)))
                    - 2. * powi(me, 2)
                        * pg_pp
                        * (-((pe_pn + pg_pn) * pk_pp)
                            + (pe_pk + pe_pp + pg_pk + pg_pp) * (pk_pn + pn_pp))
                    + powi(pe_pg, 2)
                        * (3. * pe_pn * (pg_pk + pg_pp) + 4. * pe_pn * pk_pp
                            + 2. * (pg_pn + pk_pn) * pk_pp
                            - 2. * (pg_pk + pg_pp) * pn_pp
                            - 3. * pe_pp * (pg_pn + 2. * (pk_pn + pn_pp))
                            - pe_pk * (3. * pg_pn + 4. * (pk_pn + pn_pp)))
                    + 2. * pe_pg
                        * (-(powi(pe_pp, 2) * pg_pn) - pe_pp * pg_pn * pg_pp
                            + pe_pn * (pe_pp + pg_pp) * (pg_pk + pg_pp)
                            - 2. * powi(pe_pp, 2) * pk_pn
                            - pe_pp * pg_pk * pk_pn
                            - 2. * pe_pp * pg_pp * pk_pn
                            + pg_pk * pg_pp * pk_pn
                            + powi(pg_pp, 2) * pk_pn
                            + pe_pp * pg_pn * pk_pp
                            - pg_pn * pg_pp * pk_pp
                            + pe_pn * (2. * pe_pp + pg_pp) * pk_pp
                            - 2. * powi(pe_pp, 2) * pn_pp
                            - pe_pp * pg_pk * pn_pp
                            - 2. * pe_pp * pg_pp * pn_pp
                            + pg_pk * pg_pp * pn_pp
                            + powi(pg_pp, 2) * pn_pp
                            - pe_pk
                                * (pg_pp * (pg_pn + pk_pn + pn_pp)
                                    + pe_pp * (pg_pn + 2. * (pk_pn + pn_pp))))))
        * powi(VUS, 2))
        / (powi(pe_pg, 2) * powi(pg_pp, 2));

    mat_elem_sqrd / (2. * q)
}

/// K_L -> pi + mu + nu
///
/// NOT YET MODELED: returns the placeholder value 1.0.
pub fn kl_to_pi_mu_nu(_moms: &[Momentum; 3]) -> Float {
    log::warn!("kl -> pi + mu + nu matrix element not yet available, returning 1.0");
    1.0
}

/// K_L -> pi0 + pi0 + pi0
///
/// NOT YET MODELED: returns the placeholder value 1.0.
pub fn kl_to_pi0_pi0_pi0(_moms: &[Momentum; 3]) -> Float {
    log::warn!("kl -> pi0 + pi0 + pi0 matrix element not yet available, returning 1.0");
    1.0
}

/// K_L -> pi + pi + pi0
///
/// NOT YET MODELED: returns the placeholder value 1.0.
pub fn kl_to_pi_pi_pi0(_moms: &[Momentum; 3]) -> Float {
    log::warn!("kl -> pi + pi + pi0 matrix element not yet available, returning 1.0");
    1.0
}
