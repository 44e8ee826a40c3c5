//! Centralized normalization helpers shared by indexing and matching.

pub mod normalize;
