// Copyright 2025 Irreducible Inc.

//! Reduction from bounded-degree CSPs to k·R-dimensional matching.
//!
//! Every variable of the CSP is expanded into a [`Gadget`] of R² vertices
//! carrying R slope classes of R affine lines each; every allowed assignment
//! of a constraint is expanded into one hyperedge per combination of line
//! choices. The populated [`MatchingInstance`] is returned unverified; its
//! structural verifier is the caller's explicit, separate step.

mod gadget;
mod matching;
mod reduce;

pub use gadget::*;
pub use matching::*;
pub use reduce::*;
