//! RNG seed derivation utilities for deterministic match behavior.
//!
//! All randomness in a match flows from one base seed: each round's deal and
//! the computer strategy derive their own seeds from it, so a whole match
//! replays identically given the same base seed.

/// Derive a seed for dealing a round's hands.
///
/// Unique per (match, round) combination; same inputs always produce the
/// same seed.
pub fn derive_dealing_seed(match_seed: u64, round_no: u32) -> u64 {
    // Simple arithmetic derivation; different multipliers keep contexts apart.
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive a seed for the computer strategy's own randomness (easy tier).
pub fn derive_strategy_seed(match_seed: u64) -> u64 {
    match_seed.wrapping_mul(31).wrapping_add(1)
}
