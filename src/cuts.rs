//! Re-tuned shower-shape threshold tables
//!
//! The simulation mismodels the Reta and weta2 distributions, most visibly
//! at |eta| > 1.8, and the standard isEM thresholds are aggressive there.
//! These tables loosen the two cuts to recover the data/simulation agreement
//! in electron efficiency. The values are calibration decisions and must be
//! carried value-for-value; they are compiled in and never rebuilt at run
//! time.

use crate::{
    binning::{et_bin, eta_bin},
    numeric::Float,
};

/// Lower thresholds on Reta = E(3x7)/E(7x7) in the second sampling
///
/// Rows are eT bins, columns are |eta| bins.
const RETA_CUTS: [[Float; 10]; 11] = [
    [0.700, 0.700, 0.798, 0.700, 0.700, 0.690, 0.848, 0.876, 0.870, 0.894], // < 5 GeV
    [0.700, 0.700, 0.700, 0.700, 0.700, 0.715, 0.860, 0.880, 0.880, 0.880], // 5-10
    [0.860, 0.860, 0.860, 0.860, 0.860, 0.730, 0.860, 0.880, 0.880, 0.880], // 10-15
    [0.860, 0.860, 0.860, 0.860, 0.860, 0.740, 0.860, 0.880, 0.880, 0.880], // 15-20
    [0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900], // 20-30
    [0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900], // 30-40
    [0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900], // 40-50
    [0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900], // 50-60
    [0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900], // 60-70
    [0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900], // 70-80
    [0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900, 0.900], // > 80
];

/// Upper thresholds on weta2, the lateral shower width in the second
/// sampling
///
/// Rows are eT bins, columns are |eta| bins.
const WETA2_CUTS: [[Float; 10]; 11] = [
    [0.014, 0.014, 0.014, 0.014, 0.014, 0.028, 0.017, 0.014, 0.014, 0.014], // < 5 GeV
    [0.013, 0.013, 0.014, 0.014, 0.014, 0.026, 0.017, 0.014, 0.014, 0.014], // 5-10
    [0.013, 0.013, 0.014, 0.014, 0.014, 0.025, 0.017, 0.014, 0.014, 0.014], // 10-15
    [0.012, 0.012, 0.013, 0.013, 0.013, 0.025, 0.017, 0.014, 0.014, 0.014], // 15-20
    [0.012, 0.012, 0.012, 0.013, 0.015, 0.025, 0.015, 0.013, 0.013, 0.013], // 20-30
    [0.012, 0.012, 0.012, 0.013, 0.015, 0.025, 0.015, 0.013, 0.013, 0.013], // 30-40
    [0.012, 0.012, 0.012, 0.013, 0.015, 0.025, 0.015, 0.013, 0.013, 0.013], // 40-50
    [0.012, 0.012, 0.012, 0.013, 0.015, 0.025, 0.015, 0.013, 0.013, 0.013], // 50-60
    [0.012, 0.012, 0.012, 0.013, 0.015, 0.025, 0.015, 0.013, 0.013, 0.013], // 60-70
    [0.012, 0.012, 0.012, 0.013, 0.015, 0.025, 0.015, 0.013, 0.013, 0.013], // 70-80
    [0.012, 0.012, 0.012, 0.013, 0.015, 0.025, 0.015, 0.013, 0.013, 0.013], // > 80
];

/// Look up the re-tuned Reta threshold for a candidate
///
/// Takes eT in MeV and the absolute cluster eta in the second sampling. Pure
/// table lookup; the binning functions guarantee in-range indices for every
/// input.
pub fn reta_cut(et: Float, abs_eta: Float) -> Float {
    RETA_CUTS[et_bin(et)][eta_bin(abs_eta)]
}

/// Look up the re-tuned weta2 threshold for a candidate
pub fn weta2_cut(et: Float, abs_eta: Float) -> Float {
    WETA2_CUTS[et_bin(et)][eta_bin(abs_eta)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::{ETA_BIN_EDGES, GEV};

    #[test]
    fn low_energy_forward_candidate_hits_the_loosened_cell() {
        // eT = 3 GeV, |eta| = 1.9 lands in eT bin 0, eta bin 6
        assert_eq!(reta_cut(3. * GEV, 1.9), 0.848);
        assert_eq!(weta2_cut(3. * GEV, 1.9), 0.017);
    }

    #[test]
    fn reta_plateau_above_twenty_gev() {
        // The calibration keeps a flat 0.9 Reta threshold from 20 GeV up,
        // whatever the eta
        for et_gev in [20., 25., 47., 80., 1000., 1e6] {
            for &edge in &ETA_BIN_EDGES {
                assert_eq!(reta_cut(et_gev * GEV, edge - 0.05), 0.9);
            }
        }
    }

    #[test]
    fn crack_region_keeps_the_widest_w2_tolerance() {
        // The 1.37-1.52 transition region (eta bin 5) is the loosest w2
        // column in every energy row
        for et_gev in [2., 7., 12., 17., 25., 90.] {
            let crack = weta2_cut(et_gev * GEV, 1.45);
            for &edge in &ETA_BIN_EDGES {
                assert!(weta2_cut(et_gev * GEV, edge - 0.05) <= crack);
            }
        }
    }
}
