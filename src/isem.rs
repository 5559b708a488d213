//! The isEM electron quality mask
//!
//! The bit layout is an external, versioned contract (the egamma PID
//! enumeration): reconstruction fills one bit per identification cut, and a
//! SET bit records that the cut FAILED. A perfect candidate therefore carries
//! an empty mask. This crate never mutates a mask, it only tests it against
//! the fixed OR-groups defined below.

bitflags::bitflags! {
    /// Per-cut failure flags of one electron candidate
    ///
    /// Bit positions follow the electron column of the egamma PID
    /// enumeration and must not be renumbered: masks produced by the
    /// reconstruction are consumed as-is. Positions 7, 14, and 23 are
    /// reserved there and intentionally absent here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IsEm: u32 {
        /// Cluster outside the calorimeter acceptance in eta
        const CLUSTER_ETA_RANGE = 1 << 0;
        /// Candidate matched to a reconstructed photon conversion
        const CONVERSION_MATCH = 1 << 1;
        /// Too much energy leaking into the hadronic calorimeter
        const CLUSTER_HADRONIC_LEAKAGE = 1 << 2;
        /// Insufficient energy in the second sampling
        const CLUSTER_MIDDLE_ENERGY = 1 << 3;
        /// Failed Reta (E 3x7 over E 7x7) shower-shape ratio cut
        const CLUSTER_MIDDLE_ERATIO_37 = 1 << 4;
        /// Failed the E 3x3 over E 7x7 ratio cut
        const CLUSTER_MIDDLE_ERATIO_33 = 1 << 5;
        /// Failed the weta2 lateral shower-width cut
        const CLUSTER_MIDDLE_WIDTH = 1 << 6;

        /// First-sampling energy-ratio cut
        const CLUSTER_STRIPS_ERATIO = 1 << 8;
        /// Second-maximum energy cut in the strips
        const CLUSTER_STRIPS_DELTA_EMAX2 = 1 << 9;
        /// Energy difference between the two strip maxima
        const CLUSTER_STRIPS_DELTA_E = 1 << 10;
        /// Total shower width in the strips
        const CLUSTER_STRIPS_WTOT = 1 << 11;
        /// Shower-core fraction in the strips
        const CLUSTER_STRIPS_FRACM = 1 << 12;
        /// Three-strip shower width
        const CLUSTER_STRIPS_WETA1C = 1 << 13;
        /// Difference between the strip maxima (refined)
        const CLUSTER_STRIPS_DEMAXS1 = 1 << 15;

        /// Missing hit in the innermost (B-layer) pixel layer
        const TRACK_BLAYER = 1 << 16;
        /// Too few pixel hits
        const TRACK_PIXEL = 1 << 17;
        /// Too few silicon (pixel + SCT) hits
        const TRACK_SI = 1 << 18;
        /// Transverse impact parameter cut
        const TRACK_A0 = 1 << 19;
        /// Track-cluster eta match
        const TRACK_MATCH_ETA = 1 << 20;
        /// Track-cluster phi match
        const TRACK_MATCH_PHI = 1 << 21;
        /// Cluster-energy over track-momentum match
        const TRACK_MATCH_EOVERP = 1 << 22;

        /// Too few TRT hits
        const TRACK_TRT_HITS = 1 << 24;
        /// High-threshold TRT hit fraction
        const TRACK_TRT_RATIO = 1 << 25;
        /// High-threshold TRT hit fraction (90% working point)
        const TRACK_TRT_RATIO_90 = 1 << 26;
        /// Transverse impact parameter cut at the tight working point
        const TRACK_A0_TIGHT = 1 << 27;

        // ### STANDARD OR-GROUPS ###
        //
        // These combinations are fixed by the same external contract as the
        // bit positions. The working-point groups of the robust selection
        // are built from them in the `robust` module.

        /// Eta acceptance and hadronic-leakage cuts
        const HADLEAKETA = Self::CLUSTER_ETA_RANGE.bits()
            | Self::CLUSTER_HADRONIC_LEAKAGE.bits();
        /// All first-sampling (strips) cuts
        const CALOSTRIPS = Self::CLUSTER_STRIPS_ERATIO.bits()
            | Self::CLUSTER_STRIPS_DELTA_EMAX2.bits()
            | Self::CLUSTER_STRIPS_DELTA_E.bits()
            | Self::CLUSTER_STRIPS_WTOT.bits()
            | Self::CLUSTER_STRIPS_FRACM.bits()
            | Self::CLUSTER_STRIPS_WETA1C.bits()
            | Self::CLUSTER_STRIPS_DEMAXS1.bits();
        /// Second-sampling cuts, shower-shape bits included
        const CALOMIDDLE = Self::CLUSTER_MIDDLE_ENERGY.bits()
            | Self::CLUSTER_MIDDLE_ERATIO_37.bits()
            | Self::CLUSTER_MIDDLE_WIDTH.bits();
        /// Every calorimeter cut
        const CALO = Self::HADLEAKETA.bits()
            | Self::CALOSTRIPS.bits()
            | Self::CALOMIDDLE.bits();
        /// Track-quality cuts, B-layer requirement excluded
        const TRACKING_NO_BLAYER = Self::TRACK_PIXEL.bits()
            | Self::TRACK_SI.bits()
            | Self::TRACK_A0.bits();
        /// Every track-quality cut
        const TRACKING = Self::TRACKING_NO_BLAYER.bits()
            | Self::TRACK_BLAYER.bits();
        /// Track-cluster eta match alone
        const TRACK_MATCH_DETA = Self::TRACK_MATCH_ETA.bits();
        /// Transition-radiation-tracker cuts
        const TRT = Self::TRACK_TRT_HITS.bits()
            | Self::TRACK_TRT_RATIO.bits();
        /// Conversion-match cut alone
        const CONVMATCH = Self::CONVERSION_MATCH.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::IsEm;

    #[test]
    fn groups_match_the_external_contract() {
        // Numeric values of the standard groups, as printed by the original
        // PID constant dump
        assert_eq!(IsEm::HADLEAKETA.bits(), 0x5);
        assert_eq!(IsEm::CALOSTRIPS.bits(), 0xbf00);
        assert_eq!(IsEm::CALOMIDDLE.bits(), 0x58);
        assert_eq!(IsEm::TRACKING_NO_BLAYER.bits(), 0xe0000);
        assert_eq!(IsEm::TRACKING.bits(), 0xf0000);
        assert_eq!(IsEm::TRT.bits(), 0x3000000);
    }

    #[test]
    fn reserved_bits_survive_a_round_trip() {
        // Masks come from an external producer which may set bits this
        // version does not know about; they must be carried, not dropped
        let mask = IsEm::from_bits_retain((1 << 7) | (1 << 23));
        assert_eq!(mask.bits(), (1 << 7) | (1 << 23));
        assert!(!mask.intersects(IsEm::all()));
    }
}
