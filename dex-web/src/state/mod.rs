//! Shared view state

pub mod verification;
