//! Calibration binning in pseudorapidity and transverse energy
//!
//! The re-tuned Reta and w2 thresholds are stored as one value per
//! (eT bin, |eta| bin) cell; these two functions map a candidate onto that
//! grid. Bin edges are calibration constants and must not be touched.

use crate::numeric::Float;

/// One GeV, in the MeV-based unit system of the calorimeter readout
pub const GEV: Float = 1000.;

/// Upper |eta| edges of the calibration bins; the last bin is also the
/// overflow bucket (the cluster acceptance ends at 2.47)
pub const ETA_BIN_EDGES: [Float; 10] =
    [0.1, 0.6, 0.8, 1.15, 1.37, 1.52, 1.81, 2.01, 2.37, 2.47];

/// Upper eT edges of the calibration bins (MeV); everything above 80 GeV
/// falls into a dedicated overflow bin
pub const ET_BIN_EDGES: [Float; 10] = [
    5. * GEV,
    10. * GEV,
    15. * GEV,
    20. * GEV,
    30. * GEV,
    40. * GEV,
    50. * GEV,
    60. * GEV,
    70. * GEV,
    80. * GEV,
];

/// Map an absolute pseudorapidity to its calibration bin, in [0, 9]
///
/// Returns the index of the first edge strictly above the input, or 9 if no
/// edge is. Callers pass |eta|; a signed value below -0.1 would land in the
/// overflow bin. Total over all inputs: NaN compares false against every
/// edge and falls into the overflow bin as well.
pub fn eta_bin(abs_eta: Float) -> usize {
    ETA_BIN_EDGES
        .iter()
        .position(|&edge| abs_eta < edge)
        .unwrap_or(ETA_BIN_EDGES.len() - 1)
}

/// Map a transverse energy (MeV) to its calibration bin, in [0, 10]
///
/// Same first-exceeding-edge policy as [`eta_bin`], but the overflow bucket
/// is a bin of its own (index 10). Negative energies are not rejected; they
/// land in the lowest bin.
pub fn et_bin(et: Float) -> usize {
    ET_BIN_EDGES
        .iter()
        .position(|&edge| et < edge)
        .unwrap_or(ET_BIN_EDGES.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eta_binning_steps_up_at_every_edge() {
        // Strictly monotonic step function across the first nine edges...
        for (bin, &edge) in ETA_BIN_EDGES.iter().enumerate().take(9) {
            assert_eq!(eta_bin(edge - 1e-4), bin);
            assert_eq!(eta_bin(edge + 1e-4), bin + 1);
            // An input sitting exactly on an edge belongs to the bin above
            assert_eq!(eta_bin(edge), bin + 1);
        }
        // ...while the last edge is invisible, bin 9 doubling as overflow
        assert_eq!(eta_bin(2.47 - 1e-4), 9);
        assert_eq!(eta_bin(2.47 + 1e-4), 9);
        assert_eq!(eta_bin(3.0), 9);
    }

    #[test]
    fn et_binning_covers_the_full_energy_range() {
        assert_eq!(et_bin(3. * GEV), 0);
        assert_eq!(et_bin(5. * GEV), 1);
        assert_eq!(et_bin(42. * GEV), 5);
        assert_eq!(et_bin(79.9 * GEV), 9);
        assert_eq!(et_bin(80. * GEV), 10);
        assert_eq!(et_bin(1e9), 10);
    }

    #[test]
    fn out_of_domain_inputs_still_get_a_bin() {
        // No validation anywhere in the selection chain: garbage kinematics
        // fall into a defined bin instead of erroring out
        assert_eq!(et_bin(-1. * GEV), 0);
        assert_eq!(eta_bin(-5.), 0);
        assert_eq!(eta_bin(Float::NAN), 9);
        assert_eq!(et_bin(Float::NAN), 10);
    }
}
