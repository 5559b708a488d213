//! The robust isEM working points
//!
//! Three escalating selections, each gated on the previous one:
//!
//! * [`is_robust_loose`] replays the loose isEM verdict with the Reta and
//!   weta2 bits taken out of the mask and the re-tuned thresholds of the
//!   [`cuts`](crate::cuts) module applied instead.
//! * [`is_robust_medium`] adds the remaining calorimeter and loose tracking
//!   cuts on top of that.
//! * [`is_robuster_tight`] adds the full tight track requirements, minus the
//!   tight angular-match cuts, and recovers candidates that lost their tight
//!   status to a disabled B-layer module: such electrons are picked up by
//!   the conversion recovery (which does not check the module status) and
//!   get the conversion-match bit set, so a candidate whose only tight
//!   failure is that bit is accepted whenever no B-layer hit was expected in
//!   the first place.
//!
//! [`is_robust_tight`] is the older form of the same recovery, kept solely
//! so existing selections can be compared against it.

use crate::{
    cuts::{reta_cut, weta2_cut},
    isem::IsEm,
    numeric::Float,
};

use prefix_num_ops::real::*;

/// Loose isEM bits with the second-sampling shape cuts removed
const LOOSE_NO_RETA_NO_W2: IsEm =
    IsEm::CLUSTER_MIDDLE_ENERGY.union(IsEm::HADLEAKETA);

/// Calorimeter bits of the medium and tight selections, shape cuts removed
const CALO_NO_RETA_NO_W2: IsEm = IsEm::HADLEAKETA
    .union(IsEm::CALOSTRIPS)
    .union(IsEm::CLUSTER_MIDDLE_ENERGY);

/// Medium isEM bits with the second-sampling shape cuts removed
const MEDIUM_NO_RETA_NO_W2: IsEm = CALO_NO_RETA_NO_W2
    .union(IsEm::TRACKING_NO_BLAYER)
    .union(IsEm::TRACK_MATCH_DETA);

/// Tight bits of the robuster selection: shape cuts removed, tight angular
/// matches (eta/phi) never included
const TIGHT_NO_RETA_NO_W2: IsEm = CALO_NO_RETA_NO_W2
    .union(IsEm::TRACKING)
    .union(IsEm::TRACK_MATCH_ETA)
    .union(IsEm::TRACK_MATCH_EOVERP)
    .union(IsEm::TRACK_A0_TIGHT)
    .union(IsEm::CONVMATCH)
    .union(IsEm::TRT);

/// Same group without the conversion-match bit, for the disabled-B-layer
/// recovery
const TIGHT_NO_RETA_NO_W2_NO_CONV: IsEm =
    TIGHT_NO_RETA_NO_W2.difference(IsEm::CONVMATCH);

/// Loose selection with re-tuned Reta and weta2 thresholds
///
/// Takes the candidate's isEM mask, the (signed or absolute) cluster eta in
/// the second sampling, the transverse energy in MeV, and the measured Reta
/// and weta2. Returns the bare verdict; there is no record of which cut
/// killed a rejected candidate.
pub fn is_robust_loose(is_em: IsEm, eta: Float, et: Float, reta: Float, w2: Float) -> bool {
    let abs_eta = abs(eta);

    // Does it pass the loose isEM with Reta and w2 removed?
    if is_em.intersects(LOOSE_NO_RETA_NO_W2) {
        return false;
    }

    // Re-apply the two removed cuts at their re-tuned values
    if w2 > weta2_cut(et, abs_eta) {
        return false;
    }
    if reta <= reta_cut(et, abs_eta) {
        return false;
    }

    true
}

/// Medium selection with re-tuned Reta and weta2 thresholds
pub fn is_robust_medium(is_em: IsEm, eta: Float, et: Float, reta: Float, w2: Float) -> bool {
    // If not robust-loose, then not robust-medium
    if !is_robust_loose(is_em, eta, et, reta, w2) {
        return false;
    }

    !is_em.intersects(MEDIUM_NO_RETA_NO_W2)
}

/// Tight selection with re-tuned shape thresholds and disabled-B-layer
/// recovery
///
/// `expect_b_layer` states whether the track crossed a live module of the
/// innermost pixel layer. A candidate whose only tight failure is the
/// conversion-match bit is kept when no B-layer hit was expected: the
/// conversion recovery flags electrons crossing disabled modules as
/// single-track conversions without checking the module status, and this is
/// where that gets undone.
pub fn is_robuster_tight(
    is_em: IsEm,
    expect_b_layer: bool,
    eta: Float,
    et: Float,
    reta: Float,
    w2: Float,
) -> bool {
    // If not robust-medium, then not robuster-tight
    if !is_robust_medium(is_em, eta, et, reta, w2) {
        return false;
    }

    // Clean tight candidate
    if !is_em.intersects(TIGHT_NO_RETA_NO_W2) {
        return true;
    }

    // Tight except for the conversion flag, crossing a dead module
    if !is_em.intersects(TIGHT_NO_RETA_NO_W2_NO_CONV) && !expect_b_layer {
        return true;
    }

    false
}

/// Older tight redefinition, superseded by [`is_robuster_tight`]
///
/// Applies the standard calorimeter cuts unchanged (no re-tuned Reta/weta2
/// thresholds, so it takes no kinematics), drops the tight eta/phi
/// track-cluster angular matches, and performs the same disabled-B-layer
/// conversion recovery as the robuster selection.
#[deprecated(note = "use is_robuster_tight; kept for comparison with older selections")]
pub fn is_robust_tight(is_em: IsEm, expect_b_layer: bool) -> bool {
    // Tight bits minus the eta/phi angular matches (the medium-level eta
    // match stays in through TRACK_MATCH_ETA)
    const TRACK_MATCH_NO_DPHI: IsEm =
        IsEm::TRACK_MATCH_ETA.union(IsEm::TRACK_MATCH_EOVERP);
    const TIGHT_ROBUST: IsEm = IsEm::CALO
        .union(IsEm::TRACKING)
        .union(TRACK_MATCH_NO_DPHI)
        .union(IsEm::TRACK_A0_TIGHT)
        .union(IsEm::CONVMATCH)
        .union(IsEm::TRT);
    const TIGHT_ROBUST_NO_CONV: IsEm = TIGHT_ROBUST.difference(IsEm::CONVMATCH);

    if !is_em.intersects(TIGHT_ROBUST) {
        return true;
    }

    // All tight cuts satisfied except the conversion flag, and no B-layer
    // hit expected
    if !is_em.intersects(TIGHT_ROBUST_NO_CONV) && !expect_b_layer {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::GEV;

    // A central, well-measured candidate: Reta cut 0.9, w2 cut 0.012 at
    // 40 GeV / |eta| 0.5
    const ETA: Float = 0.5;
    const ET: Float = 40. * GEV;
    const RETA: Float = 0.95;
    const W2: Float = 0.010;

    #[test]
    fn clean_candidate_passes_every_tier() {
        let mask = IsEm::empty();
        assert!(is_robust_loose(mask, ETA, ET, RETA, W2));
        assert!(is_robust_medium(mask, ETA, ET, RETA, W2));
        assert!(is_robuster_tight(mask, true, ETA, ET, RETA, W2));
    }

    #[test]
    fn shape_bits_in_the_mask_are_ignored() {
        // The whole point of the re-tuning: the standard Reta/w2 verdicts in
        // the mask are discarded in favor of the measured values
        let mask = IsEm::CLUSTER_MIDDLE_ERATIO_37 | IsEm::CLUSTER_MIDDLE_WIDTH;
        assert!(is_robust_loose(mask, ETA, ET, RETA, W2));
        assert!(is_robust_medium(mask, ETA, ET, RETA, W2));
        assert!(is_robuster_tight(mask, true, ETA, ET, RETA, W2));
    }

    #[test]
    fn measured_shapes_are_cut_at_the_retuned_thresholds() {
        let mask = IsEm::empty();
        // Reta at the threshold fails (strict inequality), w2 at the
        // threshold passes (non-strict)
        assert!(!is_robust_loose(mask, ETA, ET, 0.9, W2));
        assert!(is_robust_loose(mask, ETA, ET, RETA, 0.012));
        assert!(!is_robust_loose(mask, ETA, ET, RETA, 0.0121));
    }

    #[test]
    fn medium_adds_strips_and_loose_tracking() {
        for bit in [
            IsEm::CLUSTER_STRIPS_WTOT,
            IsEm::TRACK_PIXEL,
            IsEm::TRACK_A0,
            IsEm::TRACK_MATCH_ETA,
        ] {
            assert!(is_robust_loose(bit, ETA, ET, RETA, W2));
            assert!(!is_robust_medium(bit, ETA, ET, RETA, W2));
        }
    }

    #[test]
    fn tight_adds_blayer_trt_and_matching() {
        for bit in [
            IsEm::TRACK_BLAYER,
            IsEm::TRACK_MATCH_EOVERP,
            IsEm::TRACK_A0_TIGHT,
            IsEm::TRACK_TRT_RATIO,
        ] {
            assert!(is_robust_medium(bit, ETA, ET, RETA, W2));
            assert!(!is_robuster_tight(bit, false, ETA, ET, RETA, W2));
        }
        // The tight phi match is deliberately not part of the group
        let phi = IsEm::TRACK_MATCH_PHI;
        assert!(is_robuster_tight(phi, true, ETA, ET, RETA, W2));
    }

    #[test]
    fn disabled_blayer_conversion_is_recovered() {
        // Only tight failure is the conversion flag: kept exactly when no
        // B-layer hit was expected
        let mask = IsEm::CONVERSION_MATCH;
        assert!(is_robuster_tight(mask, false, ETA, ET, RETA, W2));
        assert!(!is_robuster_tight(mask, true, ETA, ET, RETA, W2));

        // Any second tight failure disables the recovery
        let mask = IsEm::CONVERSION_MATCH | IsEm::TRACK_BLAYER;
        assert!(!is_robuster_tight(mask, false, ETA, ET, RETA, W2));
    }

    #[test]
    fn eta_is_absolute_valued_internally() {
        let mask = IsEm::empty();
        // |eta| = 1.9 at 3 GeV: Reta cut 0.848, w2 cut 0.017, same verdicts
        // for both detector sides
        for eta in [1.9, -1.9] {
            assert!(is_robust_loose(mask, eta, 3. * GEV, 0.849, 0.017));
            assert!(!is_robust_loose(mask, eta, 3. * GEV, 0.848, 0.017));
        }
    }

    #[test]
    #[allow(deprecated)]
    fn legacy_tight_still_vetoes_on_shape_bits() {
        // The older redefinition never re-tuned the calorimeter part, so the
        // standard Reta bit is still fatal there
        assert!(is_robust_tight(IsEm::empty(), true));
        assert!(!is_robust_tight(IsEm::CLUSTER_MIDDLE_ERATIO_37, true));

        // Same conversion recovery, same angular-match exclusions
        assert!(is_robust_tight(IsEm::CONVERSION_MATCH, false));
        assert!(!is_robust_tight(IsEm::CONVERSION_MATCH, true));
        assert!(is_robust_tight(IsEm::TRACK_MATCH_PHI, true));
    }
}
