//! One electron candidate, as the selection sees it
//!
//! Bundles the isEM mask with the few kinematic quantities the re-tuned
//! cuts need, and knows how to derive those from the raw cluster and shower
//! measurements.

use crate::{
    isem::IsEm,
    numeric::Float,
    robust::{is_robust_loose, is_robust_medium, is_robuster_tight},
};

use prefix_num_ops::real::*;

/// Inputs of the robust selection for a single candidate
///
/// All fields are plain values; a candidate has no identity beyond them and
/// no lifecycle beyond the calls it is fed to.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// isEM failure mask filled by the reconstruction
    pub is_em: IsEm,

    /// Whether the track crossed a live module of the innermost pixel layer
    pub expect_b_layer: bool,

    /// Cluster eta in the second sampling (sign is irrelevant, the cuts are
    /// symmetric)
    pub eta: Float,

    /// Transverse energy in the calorimeter (MeV)
    pub et: Float,

    /// Measured Reta = E(3x7)/E(7x7) in the second sampling
    pub reta: Float,

    /// Measured lateral shower width in the second sampling
    pub w2: Float,
}
//
impl Candidate {
    /// Build a candidate from the raw cluster and shower quantities
    ///
    /// `eta2` is the cluster eta in the second sampling and `energy` the
    /// full cluster energy (MeV); the transverse energy is derived as
    /// `energy / cosh(|eta2|)`. `e237` and `e277` are the 3x7 and 7x7
    /// second-sampling energy sums; a candidate with an empty 7x7 window
    /// gets Reta = 0 and will fail the shape cut rather than divide by
    /// zero.
    pub fn from_cluster(
        is_em: IsEm,
        expect_b_layer: bool,
        eta2: Float,
        energy: Float,
        e237: Float,
        e277: Float,
        weta2: Float,
    ) -> Self {
        let eta = abs(eta2);
        Self {
            is_em,
            expect_b_layer,
            eta,
            et: energy / cosh(eta),
            reta: if e277 != 0. { e237 / e277 } else { 0. },
            w2: weta2,
        }
    }

    /// Robust-loose verdict for this candidate
    pub fn is_robust_loose(&self) -> bool {
        is_robust_loose(self.is_em, self.eta, self.et, self.reta, self.w2)
    }

    /// Robust-medium verdict for this candidate
    pub fn is_robust_medium(&self) -> bool {
        is_robust_medium(self.is_em, self.eta, self.et, self.reta, self.w2)
    }

    /// Robuster-tight verdict for this candidate
    pub fn is_robuster_tight(&self) -> bool {
        is_robuster_tight(
            self.is_em,
            self.expect_b_layer,
            self.eta,
            self.et,
            self.reta,
            self.w2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::GEV;

    #[test]
    fn cluster_kinematics_are_derived_correctly() {
        // A 40 GeV-eT candidate at eta2 = -1.0: cluster energy must be
        // eT * cosh(eta)
        let energy = 40. * GEV * (1.0 as Float).cosh();
        let cand = Candidate::from_cluster(
            IsEm::empty(),
            true,
            -1.0,
            energy,
            0.95 * 50. * GEV,
            50. * GEV,
            0.011,
        );
        assert_eq!(cand.eta, 1.0);
        assert!((cand.et - 40. * GEV).abs() < 1e-6 * GEV);
        assert!((cand.reta - 0.95).abs() < 1e-12);
        assert!(cand.is_robuster_tight());
    }

    #[test]
    fn empty_wide_window_fails_the_shape_cut() {
        // e277 = 0 means Reta = 0, which no threshold column accepts
        let cand = Candidate::from_cluster(
            IsEm::empty(),
            true,
            0.3,
            40. * GEV,
            1. * GEV,
            0.,
            0.011,
        );
        assert_eq!(cand.reta, 0.);
        assert!(!cand.is_robust_loose());
    }
}
