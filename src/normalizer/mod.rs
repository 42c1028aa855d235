// file: src/normalizer/mod.rs
// description: lineup normalization module exports
// reference: internal module structure

pub mod lineup;

pub use lineup::{LineupNormalizer, ParsedLineup, is_same_lineup, normalize_lineup};
