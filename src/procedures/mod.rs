//! Procedures over clause sets.
//!
//! - [resolution] holds the refutation fixpoint, and the surface operations built on it.
//! - [scan] holds the pairwise scan made at each step of a refutation.

pub mod resolution;
pub mod scan;
