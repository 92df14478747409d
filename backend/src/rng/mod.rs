//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm. Every random choice made while
//! synthesizing a dataset goes through this module so that a seed fully
//! determines the output.

mod xorshift;

pub use xorshift::RngManager;
