// Copyright 2025 Irreducible Inc.

//! Bounded-degree CSP instances over a finite alphabet.
//!
//! A [`CspInstance`] holds the variables, constraints, alphabet size R and
//! partition count k of a constraint satisfaction problem, and assigns every
//! variable to one of the k partitions at construction time. Construction
//! validates the degree bound the downstream matching reduction relies on:
//! no variable may appear in more than R constraints.

mod error;
mod instance;

pub use error::*;
pub use instance::*;
