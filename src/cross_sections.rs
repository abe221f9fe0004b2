//! Dark-matter annihilation cross sections
//!
//! Tree-level s-channel annihilation of a Dirac dark-matter pair through
//! each mediator, evaluated at a center-of-mass energy `cme`. Cross
//! sections are in MeV^-2. Branching fractions are the per-channel share
//! of the total annihilation cross section at the same energy.

/// Annihilation through the vector mediator
pub mod vector {
    use crate::{
        numeric::{functions::*, reals::consts::PI, Float},
        parameters::{VectorMediator, CHARGED_PION_MASS},
        widths::{vector::partial_widths, Lepton},
    };

    /// Breit-Wigner propagator factor |mv^2 - s - i mv Gamma_v|^2
    fn propagator_sqr(cme: Float, params: &VectorMediator) -> Float {
        let mv = params.mv;
        let width_v = partial_widths(params).total;
        powi(powi(mv, 2) - powi(cme, 2), 2) + powi(mv, 2) * powi(width_v, 2)
    }

    /// Cross section for x + xbar -> V -> l+ + l-
    pub fn sigma_xx_to_v_to_ff(cme: Float, lepton: Lepton, params: &VectorMediator) -> Float {
        let mf = lepton.mass();
        let mx = params.mx;
        if cme <= 2. * mf || cme <= 2. * mx {
            return 0.;
        }
        let gvll = match lepton {
            Lepton::Electron => params.gvee,
            Lepton::Muon => params.gvmumu,
        };
        powi(gvll, 2)
            * powi(params.gvxx, 2)
            * (powi(cme, 2) + 2. * powi(mf, 2))
            * (powi(cme, 2) + 2. * powi(mx, 2))
            * sqrt(powi(cme, 2) - 4. * powi(mf, 2))
            / (12.
                * PI
                * powi(cme, 2)
                * sqrt(powi(cme, 2) - 4. * powi(mx, 2))
                * propagator_sqr(cme, params))
    }

    /// Cross section for x + xbar -> V -> pi+ + pi-
    pub fn sigma_xx_to_v_to_pipi(cme: Float, params: &VectorMediator) -> Float {
        let mx = params.mx;
        if cme <= 2. * CHARGED_PION_MASS || cme <= 2. * mx {
            return 0.;
        }
        let ksqr = powi(cme, 2) - 4. * powi(CHARGED_PION_MASS, 2);
        powi(params.gvdd - params.gvuu, 2)
            * powi(params.gvxx, 2)
            * ksqr
            * sqrt(ksqr)
            * (powi(cme, 2) + 2. * powi(mx, 2))
            / (48.
                * PI
                * powi(cme, 2)
                * sqrt(powi(cme, 2) - 4. * powi(mx, 2))
                * propagator_sqr(cme, params))
    }

    /// Annihilation cross sections of the vector model, one per channel
    #[derive(Debug, Clone, Copy)]
    pub struct VectorCrossSections {
        pub ee: Float,
        pub mumu: Float,
        pub pipi: Float,
        /// Sum of all the channels above
        pub total: Float,
    }

    impl VectorCrossSections {
        /// Channel names and the associated cross sections, total excluded
        pub fn channels(&self) -> [(&'static str, Float); 3] {
            [("e e", self.ee), ("mu mu", self.mumu), ("pi pi", self.pipi)]
        }
    }

    /// All annihilation cross sections at `cme`, along with their sum
    pub fn annihilation_cross_sections(cme: Float, params: &VectorMediator) -> VectorCrossSections {
        let ee = sigma_xx_to_v_to_ff(cme, Lepton::Electron, params);
        let mumu = sigma_xx_to_v_to_ff(cme, Lepton::Muon, params);
        let pipi = sigma_xx_to_v_to_pipi(cme, params);
        VectorCrossSections {
            ee,
            mumu,
            pipi,
            total: ee + mumu + pipi,
        }
    }

    /// Annihilation branching fractions of the vector model
    ///
    /// All fractions are zero when every channel is kinematically closed.
    #[derive(Debug, Clone, Copy)]
    pub struct VectorBranchingFractions {
        pub ee: Float,
        pub mumu: Float,
        pub pipi: Float,
    }

    impl VectorBranchingFractions {
        /// Channel names and the associated branching fractions
        pub fn channels(&self) -> [(&'static str, Float); 3] {
            [("e e", self.ee), ("mu mu", self.mumu), ("pi pi", self.pipi)]
        }
    }

    /// Per-channel share of the total annihilation cross section at `cme`
    pub fn branching_fractions(cme: Float, params: &VectorMediator) -> VectorBranchingFractions {
        let sigmas = annihilation_cross_sections(cme, params);
        if sigmas.total <= 0. {
            return VectorBranchingFractions {
                ee: 0.,
                mumu: 0.,
                pipi: 0.,
            };
        }
        VectorBranchingFractions {
            ee: sigmas.ee / sigmas.total,
            mumu: sigmas.mumu / sigmas.total,
            pipi: sigmas.pipi / sigmas.total,
        }
    }
}

/// Annihilation through the pseudo-scalar mediator
pub mod pseudo_scalar {
    use crate::{
        numeric::{functions::*, reals::consts::PI, Float},
        parameters::PseudoScalarMediator,
        widths::Lepton,
    };

    /// Cross section for x + xbar -> P -> l+ + l-
    ///
    /// Two-body phase-space reduction of the angle-independent squared
    /// matrix element: sigma = |M|^2 p_f / (16 pi s p_i).
    pub fn sigma_xx_to_p_to_ff(cme: Float, lepton: Lepton, params: &PseudoScalarMediator) -> Float {
        let mf = lepton.mass();
        let mx = params.mx;
        if cme <= 2. * mf || cme <= 2. * mx {
            return 0.;
        }
        let gpff = match lepton {
            Lepton::Electron => params.gpee,
            Lepton::Muon => params.gpmumu,
        };
        let msqrd = powi(gpff, 2) * powi(params.gpxx, 2) * powi(cme, 4)
            / powi(powi(params.mp, 2) - powi(cme, 2), 2);
        msqrd * sqrt(powi(cme, 2) - 4. * powi(mf, 2))
            / (16. * PI * powi(cme, 2) * sqrt(powi(cme, 2) - 4. * powi(mx, 2)))
    }

    /// Annihilation cross sections of the pseudo-scalar model
    #[derive(Debug, Clone, Copy)]
    pub struct PseudoScalarCrossSections {
        pub ee: Float,
        pub mumu: Float,
        /// Sum of all the channels above
        pub total: Float,
    }

    impl PseudoScalarCrossSections {
        /// Channel names and the associated cross sections, total excluded
        pub fn channels(&self) -> [(&'static str, Float); 2] {
            [("e e", self.ee), ("mu mu", self.mumu)]
        }
    }

    /// All annihilation cross sections at `cme`, along with their sum
    pub fn annihilation_cross_sections(
        cme: Float,
        params: &PseudoScalarMediator,
    ) -> PseudoScalarCrossSections {
        let ee = sigma_xx_to_p_to_ff(cme, Lepton::Electron, params);
        let mumu = sigma_xx_to_p_to_ff(cme, Lepton::Muon, params);
        PseudoScalarCrossSections {
            ee,
            mumu,
            total: ee + mumu,
        }
    }

    /// Annihilation branching fractions of the pseudo-scalar model
    #[derive(Debug, Clone, Copy)]
    pub struct PseudoScalarBranchingFractions {
        pub ee: Float,
        pub mumu: Float,
    }

    impl PseudoScalarBranchingFractions {
        /// Channel names and the associated branching fractions
        pub fn channels(&self) -> [(&'static str, Float); 2] {
            [("e e", self.ee), ("mu mu", self.mumu)]
        }
    }

    /// Per-channel share of the total annihilation cross section at `cme`
    pub fn branching_fractions(
        cme: Float,
        params: &PseudoScalarMediator,
    ) -> PseudoScalarBranchingFractions {
        let sigmas = annihilation_cross_sections(cme, params);
        if sigmas.total <= 0. {
            return PseudoScalarBranchingFractions { ee: 0., mumu: 0. };
        }
        PseudoScalarBranchingFractions {
            ee: sigmas.ee / sigmas.total,
            mumu: sigmas.mumu / sigmas.total,
        }
    }
}
