//! Partial decay widths of the pseudo-scalar mediator
//!
//! The two-body channels have closed forms. The three-pion channels do
//! not: their differential widths in the two-pion invariant mass squared s
//! are integrated numerically with an adaptive double-exponential rule.

use crate::{
    errors::{Error, Result},
    numeric::{functions::*, reals::consts::PI, Float},
    parameters::{
        PseudoScalarMediator, ALPHA_EM, B0, CHARGED_PION_MASS, DOWN_QUARK_MASS, FPI,
        NEUTRAL_PION_MASS, UP_QUARK_MASS, VH,
    },
    widths::Lepton,
};

/// Target absolute error handed to the quadrature rule
const TOLERANCE: Float = 1e-8;

/// Partial width for P -> gamma + gamma
pub fn width_p_to_gg(params: &PseudoScalarMediator) -> Float {
    let ret = powi(ALPHA_EM, 2) * (1. - powi(params.beta, 2)) * powi(params.gpaa, 2)
        * powi(params.mp, 3)
        / (128. * powi(PI, 3) * powi(VH, 2));
    debug_assert!(ret >= 0.);
    ret
}

/// Partial width for P -> x + xbar
pub fn width_p_to_xx(params: &PseudoScalarMediator) -> Float {
    let mp = params.mp;
    let rx = params.mx / mp;
    if 2. * rx >= 1. {
        return 0.;
    }
    let ret =
        -((-1. + powi(params.beta, 2)) * powi(params.gpxx, 2) * mp * sqrt(1. - 4. * powi(rx, 2)))
            / (32. * PI);
    debug_assert!(ret >= 0.);
    ret
}

/// Partial width for P -> l+ + l-
pub fn width_p_to_ff(lepton: Lepton, params: &PseudoScalarMediator) -> Float {
    let mp = params.mp;
    let rf = lepton.mass() / mp;
    let gpff = match lepton {
        Lepton::Electron => params.gpee,
        Lepton::Muon => params.gpmumu,
    };
    if 2. * rf >= 1. {
        return 0.;
    }
    let ret = -((-1. + powi(params.beta, 2)) * powi(gpff, 2) * mp * sqrt(1. - 4. * powi(rf, 2)))
        / (8. * PI);
    debug_assert!(ret >= 0.);
    ret
}

/// Differential width dGamma/ds for P -> pi0 + pi0 + pi0
///
/// `s` is the invariant mass squared of a neutral pion pair.
pub fn dwidth_ds_p_to_pi0pi0pi0(s: Float, params: &PseudoScalarMediator) -> Float {
    let mp = params.mp;
    let mpi0 = NEUTRAL_PION_MASS;
    if mp < 3. * mpi0 {
        return 0.;
    }
    // Rounded quadrature abscissae can overshoot the Dalitz boundary where
    // both of these factors vanish.
    let kin = s * (-4. * powi(mpi0, 2) + s);
    let lambda =
        powi(mp, 4) + powi(powi(mpi0, 2) - s, 2) - 2. * powi(mp, 2) * (powi(mpi0, 2) + s);
    if kin <= 0. || lambda <= 0. {
        return 0.;
    }
    let beta = params.beta;
    let mq = DOWN_QUARK_MASS + UP_QUARK_MASS;
    let anomaly = params.gpgg * (DOWN_QUARK_MASS - UP_QUARK_MASS) + (params.gpdd - params.gpuu) * VH;

    let ret = -(powi(B0, 2)
        * sqrt(kin)
        * sqrt(lambda)
        * (-(powi(beta, 2) * powi(mq, 2) * powi(VH, 2))
            + 2. * beta * FPI * mq * VH * anomaly
            + (-1. + 10. * powi(beta, 2)) * powi(FPI, 2) * powi(anomaly, 2)))
        / (256. * powi(FPI, 4) * powi(mp, 3) * powi(PI, 3) * s * powi(VH, 2));
    debug_assert!(ret >= 0.);
    ret
}

/// Partial width for P -> pi0 + pi0 + pi0, integrated numerically
pub fn width_p_to_pi0pi0pi0(params: &PseudoScalarMediator) -> Result<Float> {
    let mp = params.mp;
    let mpi0 = NEUTRAL_PION_MASS;
    if mp < 3. * mpi0 {
        return Ok(0.);
    }
    let smin = 4. * powi(mpi0, 2);
    let smax = powi(mp - mpi0, 2);
    integrate_width("pi0 pi0 pi0", smin, smax, |s| {
        dwidth_ds_p_to_pi0pi0pi0(s, params)
    })
}

/// Differential width dGamma/ds for P -> pi0 + pi+ + pi-
///
/// `s` is the invariant mass squared of the charged pion pair.
pub fn dwidth_ds_p_to_pi0pipi(s: Float, params: &PseudoScalarMediator) -> Float {
    let mp = params.mp;
    let mpi = CHARGED_PION_MASS;
    let mpi0 = NEUTRAL_PION_MASS;
    if mp < 2. * mpi + mpi0 {
        return 0.;
    }
    let kin = s * (-4. * powi(mpi, 2) + s);
    let lambda =
        powi(mp, 4) + powi(powi(mpi0, 2) - s, 2) - 2. * powi(mp, 2) * (powi(mpi0, 2) + s);
    if kin <= 0. || lambda <= 0. {
        return 0.;
    }
    let beta = params.beta;
    let mq = DOWN_QUARK_MASS + UP_QUARK_MASS;
    let anomaly = params.gpgg * (DOWN_QUARK_MASS - UP_QUARK_MASS) + (params.gpdd - params.gpuu) * VH;

    let ret = (sqrt(kin)
        * sqrt(lambda)
        * (powi(beta, 2) * powi(2. * powi(mpi, 2) + mpi0 - 3. * s, 2) * powi(VH, 2)
            + 2. * B0
                * beta
                * (2. * powi(mpi, 2) + mpi0 - 3. * s)
                * VH
                * (-(beta * mq * VH) + FPI * anomaly)
            + powi(B0, 2)
                * (powi(beta, 2) * powi(mq, 2) * powi(VH, 2)
                    - 2. * beta * FPI * mq * VH * anomaly
                    - (-1. + 4. * powi(beta, 2)) * powi(FPI, 2) * powi(anomaly, 2))))
        / (2304. * powi(FPI, 4) * powi(mp, 3) * powi(PI, 3) * s * powi(VH, 2));
    debug_assert!(ret >= 0.);
    ret
}

/// Partial width for P -> pi0 + pi+ + pi-, integrated numerically
pub fn width_p_to_pi0pipi(params: &PseudoScalarMediator) -> Result<Float> {
    let mp = params.mp;
    if mp < 2. * CHARGED_PION_MASS + NEUTRAL_PION_MASS {
        return Ok(0.);
    }
    let smin = 4. * powi(CHARGED_PION_MASS, 2);
    let smax = powi(mp - NEUTRAL_PION_MASS, 2);
    integrate_width("pi0 pi pi", smin, smax, |s| dwidth_ds_p_to_pi0pipi(s, params))
}

/// Integrate a differential width over its Dalitz range, checking that the
/// quadrature error estimate came out acceptable.
fn integrate_width(
    channel: &'static str,
    smin: Float,
    smax: Float,
    dwidth_ds: impl Fn(Float) -> Float,
) -> Result<Float> {
    let out = quadrature::integrate(
        |s| dwidth_ds(s as Float) as f64,
        smin as f64,
        smax as f64,
        TOLERANCE as f64,
    );
    let integral = out.integral as Float;
    let error_estimate = out.error_estimate as Float;
    if error_estimate > 1e-4 * (1. + integral.abs()) {
        return Err(Error::IntegrationFailure {
            channel,
            error_estimate,
        });
    }
    Ok(integral)
}

/// Partial decay widths of the pseudo-scalar mediator, one per open channel
///
/// P -> 3 pi0 is available through [`width_p_to_pi0pi0pi0`] but is not part
/// of this table.
#[derive(Debug, Clone, Copy)]
pub struct PseudoScalarWidths {
    pub gg: Float,
    pub xx: Float,
    pub ee: Float,
    pub mumu: Float,
    pub pi0pipi: Float,
    /// Sum of all the channels above
    pub total: Float,
}

impl PseudoScalarWidths {
    /// Channel names and the associated partial widths, total excluded
    pub fn channels(&self) -> [(&'static str, Float); 5] {
        [
            ("g g", self.gg),
            ("x x", self.xx),
            ("e e", self.ee),
            ("mu mu", self.mumu),
            ("pi0 pi pi", self.pi0pipi),
        ]
    }
}

/// All partial widths of the pseudo-scalar mediator, along with their sum
pub fn partial_widths(params: &PseudoScalarMediator) -> Result<PseudoScalarWidths> {
    let gg = width_p_to_gg(params);
    let xx = width_p_to_xx(params);
    let ee = width_p_to_ff(Lepton::Electron, params);
    let mumu = width_p_to_ff(Lepton::Muon, params);
    let pi0pipi = width_p_to_pi0pipi(params)?;
    Ok(PseudoScalarWidths {
        gg,
        xx,
        ee,
        mumu,
        pi0pipi,
        total: gg + xx + ee + mumu + pi0pipi,
    })
}
