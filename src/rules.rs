//! Generation advance: the birth/survival rule over a sparse live set.
//!
//! # Sparsity
//!
//! The grid is 1000×1000 by default but rarely more than a few thousand cells
//! are alive, so the advance never scans the full plane. Only coordinates
//! adjacent to at least one live cell can change state; everything else is
//! dead now and stays dead. One pass over the live set accumulates neighbor
//! counts into a hash map keyed by candidate coordinate, then a pass over the
//! candidates applies the rule. Cost is O(live cells), not O(grid_size²).
//!
//! # Edge policy
//!
//! The grid has a hard edge, no torus. Off-grid neighbors are generated while
//! counting (a boundary cell still pushes counts onto coordinates outside the
//! grid) but are discarded before the rule applies, so they can never be born.
//! In the other direction, an off-grid coordinate is never in the live set, so
//! it contributes no count to any in-bounds cell. The boundary behaves as
//! permanently-dead padding.

use ahash::AHashMap;

use crate::board::LiveSet;

/// Computes the next generation of `current` on a `grid_size` × `grid_size`
/// grid.
///
/// Pure function: reads `current`, touches no other state. A candidate is
/// alive in the result iff its live-neighbor count is exactly 3, or exactly 2
/// while the candidate is alive in `current`.
pub fn next_generation(current: &LiveSet, grid_size: i32) -> LiveSet {
    let mut counts: AHashMap<_, u8> = AHashMap::with_capacity(current.len() * 4);
    for cell in current.iter() {
        for neighbor in cell.neighbors() {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }

    let mut next = LiveSet::with_capacity(current.len());
    for (cell, count) in counts {
        if !cell.in_bounds(grid_size) {
            continue;
        }
        if count == 3 || (count == 2 && current.contains(&cell)) {
            next.insert(cell);
        }
    }
    next
}
