//! Oversized-hex cluster tables.
//!
//! Offsets are `(col, row)` in the canonical frame (row-major grid, default
//! orientation). Tier `n` covers tiers `1..=n` cumulatively.

use crate::grid::Cell;

const TIER_1: &[(i32, i32)] = &[(0, 0)];
const TIER_2: &[(i32, i32)] = &[(0, -1), (-1, -1)];
const TIER_3: &[(i32, i32)] = &[(0, 1), (-1, 1), (-1, 0), (1, 0)];
const TIER_4: &[(i32, i32)] = &[(-2, -1), (1, -1), (-1, -2), (0, -2), (1, -2)];

const TIER_ADDITIONS: [&[(i32, i32)]; 4] = [TIER_1, TIER_2, TIER_3, TIER_4];

/// Canonical offsets of cluster tiers `1..=tier`, in table order.
/// `tier` is expected in `1..=4`; larger values are capped.
pub(crate) fn canonical_cluster(tier: usize) -> impl Iterator<Item = Cell> {
    TIER_ADDITIONS
        .iter()
        .take(tier.min(TIER_ADDITIONS.len()))
        .flat_map(|add| add.iter().map(|&pair| Cell::from(pair)))
}

/// Number of cells in a cluster of the given tier.
pub(crate) fn cluster_len(tier: usize) -> usize {
    TIER_ADDITIONS
        .iter()
        .take(tier.min(TIER_ADDITIONS.len()))
        .map(|add| add.len())
        .sum()
}
