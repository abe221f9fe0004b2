//! Squared matrix elements are real and non-negative over valid kinematics
//!
//! Final-state configurations are generated directly in the center-of-mass
//! frame: two-body states back to back at an arbitrary angle, three-body
//! states from two sampled momenta with the third balancing them. The
//! matrix elements reconstruct the total energy themselves, so every such
//! configuration is physical by construction.

use dm_pheno::{
    kinematics::Momentum,
    matrix_elements::{kaon, simplified},
    numeric::Float,
};
use proptest::prelude::*;

/// Back-to-back fermion pair of mass `mf` in the x-z plane
fn pair_config(q: Float, mf: Float, theta: Float) -> [Momentum; 2] {
    let energy = q / 2.;
    let p = (energy * energy - mf * mf).sqrt();
    [
        Momentum::new(energy, p * theta.sin(), 0., p * theta.cos()),
        Momentum::new(energy, -p * theta.sin(), 0., -p * theta.cos()),
    ]
}

/// On-shell momentum of mass `m` with spatial part (px, 0, pz)
fn on_shell(m: Float, px: Float, pz: Float) -> Momentum {
    Momentum::new((m * m + px * px + pz * pz).sqrt(), px, 0., pz)
}

proptest! {
    #[test]
    fn tree_level_annihilations_are_nonnegative(
        q in 300f64..3000.,
        mx_frac in 0.01f64..0.49,
        mf_frac in 0.01f64..0.49,
        theta in 0f64..std::f64::consts::PI,
        med_mass in 10f64..5000.,
        cxx in 0.1f64..2.,
        cff in 0.1f64..2.,
    ) {
        let mx = mx_frac * q;
        let mf = mf_frac * q;
        // Stay away from the propagator pole
        prop_assume!((med_mass * med_mass - q * q).abs() > 100.);

        let moms = pair_config(q, mf, theta);
        let values = [
            simplified::msqrd_xx_to_s_to_ff(&moms, mx, mf, med_mass, cxx, cff),
            simplified::msqrd_xx_to_p_to_ff(&moms, mx, mf, med_mass, cxx, cff),
            simplified::msqrd_xx_to_v_to_ff(&moms, mx, mf, med_mass, cxx, cff),
            simplified::msqrd_xx_to_a_to_ff(&moms, mx, mf, med_mass, cxx, cff),
        ];
        for value in values {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.);
        }
    }

    #[test]
    fn radiative_annihilations_are_nonnegative(
        mf in 0.5f64..200.,
        p3x in -400f64..400.,
        p3z in -400f64..400.,
        kx in 10f64..400.,
        kz in -400f64..400.,
        mx_frac in 0.01f64..0.49,
        med_mass in 10f64..5000.,
    ) {
        let p3 = on_shell(mf, p3x, p3z);
        let k = on_shell(0., kx, kz);
        let p4 = on_shell(mf, -p3x - kx, -p3z - kz);
        let moms = [p3, p4, k];
        let q = p3[0] + p4[0] + k[0];
        let mx = mx_frac * q;
        prop_assume!((med_mass * med_mass - q * q).abs() > 100.);

        let values = [
            simplified::msqrd_xx_to_s_to_ffg(&moms, mx, mf, med_mass, 1., 1., 1.),
            simplified::msqrd_xx_to_p_to_ffg(&moms, mx, mf, med_mass, 1., 1., 1.),
            simplified::msqrd_xx_to_v_to_ffg(&moms, mx, mf, med_mass, 1., 1., 1.),
            simplified::msqrd_xx_to_a_to_ffg(&moms, mx, mf, med_mass, 1., 1., 1.),
        ];
        for value in values {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.);
        }
    }

    #[test]
    fn kaon_semileptonic_decay_is_nonnegative(
        p_frac in 0.01f64..0.99,
        cos_star in -0.99f64..0.99,
    ) {
        use dm_pheno::parameters::{CHARGED_PION_MASS, ELECTRON_MASS, NEUTRAL_KAON_MASS};

        // Dalitz configuration at q = mK: pion recoiling along z against
        // the lepton pair, which decays back to back in its own rest frame
        // at an angle cos_star and is then boosted to the kaon frame.
        let mk = NEUTRAL_KAON_MASS;
        let mpi = CHARGED_PION_MASS;
        let me = ELECTRON_MASS;

        let e_pi_max = (mk * mk + mpi * mpi - me * me) / (2. * mk);
        let p = p_frac * (e_pi_max * e_pi_max - mpi * mpi).sqrt();
        let e_pi = (mpi * mpi + p * p).sqrt();

        let w2 = mk * mk + mpi * mpi - 2. * mk * e_pi;
        prop_assume!(w2 > 1.01 * me * me);
        let w = w2.sqrt();
        let e_w = mk - e_pi;
        let gamma = e_w / w;
        let v = -p / e_w;

        let kstar = (w2 - me * me) / (2. * w);
        let ee_star = (w2 + me * me) / (2. * w);
        let sin_star = (1. - cos_star * cos_star).sqrt();

        let pp = Momentum::new(e_pi, 0., 0., p);
        let pe = Momentum::new(
            gamma * (ee_star + v * kstar * cos_star),
            kstar * sin_star,
            0.,
            gamma * (kstar * cos_star + v * ee_star),
        );
        let pn = Momentum::new(
            gamma * kstar * (1. - v * cos_star),
            -kstar * sin_star,
            0.,
            gamma * kstar * (v - cos_star),
        );

        let value = kaon::kl_to_pi_e_nu(&[pp, pe, pn]);
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.);
    }
}
