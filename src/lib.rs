//! Robust isEM electron identification
//!
//!
//! # Introduction (for the physicist)
//!
//! The simulation mismodels the Reta and weta2 shower-shape distributions,
//! most visibly at large |eta| where the standard isEM thresholds are also
//! the most aggressive, so the standard working points show a data/simulation
//! disagreement in electron efficiency. The robust working points defined
//! here replay the isEM decision with the two shape bits removed from the
//! mask and re-tuned, eT- and |eta|-binned thresholds applied to the
//! measured values instead.
//!
//! Separately, a tight candidate whose track crosses a disabled module of
//! the innermost pixel layer has no B-layer hit, gets recovered as a
//! single-track conversion, and is then vetoed by the conversion-match bit.
//! The robuster-tight working point accepts such candidates when no B-layer
//! hit was expected.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Everything here is a pure function: two binning scans, two table lookups,
//! and a short chain of bitmask tests. The calibration tables and bin edges
//! are compiled-in constants; thread safety comes free.
//!
//!
//! # Crate layout
//!
//! The [`robust`] module holds the working-point predicates, fed by
//! [`binning`] and [`cuts`]; [`isem`] types the externally defined bit
//! contract. [`candidate`] bundles one electron's inputs and derives them
//! from raw cluster quantities. The remaining modules ([`config`],
//! [`cutflow`], [`report`]) belong to the bundled `isem-scan` binary, which
//! runs the selection over a candidate list and prints the cut flow.

#![warn(missing_docs)]

pub mod binning;
pub mod candidate;
pub mod config;
pub mod cutflow;
pub mod cuts;
pub mod isem;
pub mod numeric;
pub mod report;
pub mod robust;

pub use crate::{
    candidate::Candidate,
    isem::IsEm,
    robust::{is_robust_loose, is_robust_medium, is_robuster_tight},
};
