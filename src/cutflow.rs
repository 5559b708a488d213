//! Per-working-point counting of scanned candidates
//!
//! Every candidate that survives the eT preselection is classified once per
//! working point, so the counters form a cut flow: robuster-tight is a
//! subset of robust-medium, itself a subset of robust-loose. The deprecated
//! robust-tight gets a column of its own; it is not part of the chain
//! (different calorimeter treatment) and is tallied only so old selections
//! can be compared against the current one.

use crate::{candidate::Candidate, numeric::Float};

/// Cut-flow counters accumulated over one scan
#[derive(Debug, Default)]
pub struct CutFlow {
    /// Number of candidates seen, preselection included
    pub total: usize,

    /// Candidates above the eT preselection
    pub preselected: usize,

    /// ...of which robust-loose
    pub loose: usize,

    /// ...of which robust-medium
    pub medium: usize,

    /// ...of which robuster-tight
    pub robuster_tight: usize,

    /// Candidates passing the deprecated robust-tight, for comparison
    pub legacy_tight: usize,
}
//
impl CutFlow {
    /// Start an empty cut flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one candidate, applying the given eT preselection (MeV)
    ///
    /// Returns the robuster-tight verdict so callers can react to selected
    /// candidates without classifying twice.
    pub fn tally(&mut self, cand: &Candidate, et_min: Float) -> bool {
        self.total += 1;
        if cand.et < et_min {
            return false;
        }
        self.preselected += 1;

        // The tiers are strictly layered, so later verdicts only need
        // checking once the earlier ones passed
        let mut selected = false;
        if cand.is_robust_loose() {
            self.loose += 1;
            if cand.is_robust_medium() {
                self.medium += 1;
                if cand.is_robuster_tight() {
                    self.robuster_tight += 1;
                    selected = true;
                }
            }
        }

        #[allow(deprecated)]
        if crate::robust::is_robust_tight(cand.is_em, cand.expect_b_layer) {
            self.legacy_tight += 1;
        }

        selected
    }

    /// Selection efficiency of a working point relative to the preselection
    ///
    /// Defined as 0 for an empty scan rather than NaN, so reports stay
    /// printable.
    pub fn efficiency(&self, passed: usize) -> Float {
        if self.preselected == 0 {
            0.
        } else {
            passed as Float / self.preselected as Float
        }
    }
}
