//! The board and its access contract.
//!
//! [`GridState`] owns the single long-lived live set and is the only gateway
//! to it. Every read and write goes through one `RwLock`: snapshots take
//! shared access and may overlap each other, while injection and generation
//! advance take exclusive access and linearize against everything. Nothing
//! performs I/O or unbounded work while holding the guard; every hold is
//! bounded by the live-cell count, so no caller can stall another
//! indefinitely.
//!
//! # Invariants
//!
//! - Every coordinate in the board satisfies `0 <= x < grid_size` and
//!   `0 <= y < grid_size`. Enforced at injection and by the advance rule.
//! - Board membership is the sole aliveness record; there is no dead-cell
//!   bookkeeping anywhere.
//! - Readers only ever receive copies. A snapshot is never an alias into the
//!   live board and can never observe a half-applied mutation.

use std::sync::RwLock;
use std::time::Duration;

use ahash::AHashSet;

use crate::coord::Coord;
use crate::rules;

/// Set of live coordinates; absence means dead.
pub type LiveSet = AHashSet<Coord>;

/// Construction parameters for a board and its clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Bound of both axes; valid coordinates are `[0, grid_size - 1]²`.
    pub grid_size: i32,
    /// Simulation tick period (how often the clock advances a generation).
    pub tick_period: Duration,
}

impl Default for GridConfig {
    /// Reference values: a 1000×1000 grid advancing every 500ms.
    fn default() -> Self {
        Self {
            grid_size: 1000,
            tick_period: Duration::from_millis(500),
        }
    }
}

/// The shared board: one writer at a time, many concurrent readers.
pub struct GridState {
    cells: RwLock<LiveSet>,
    grid_size: i32,
}

impl GridState {
    /// Creates an empty board bounded by `config.grid_size`.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            cells: RwLock::new(LiveSet::new()),
            grid_size: config.grid_size,
        }
    }

    /// Axis bound this board was constructed with.
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Copies every live coordinate out under shared access.
    ///
    /// The result reflects a single consistent instant of the board and is
    /// independently owned; mutating the board afterwards does not affect it.
    pub fn snapshot(&self) -> Vec<Coord> {
        let cells = read_guard(&self.cells);
        cells.iter().copied().collect()
    }

    /// Inserts every in-bounds candidate under exclusive access and returns
    /// how many were accepted.
    ///
    /// Out-of-bounds candidates are ignored, not errors, and do not count.
    /// Already-live candidates are accepted idempotently: the board is
    /// unchanged but they still count. Infallible for any mix of in- and
    /// out-of-bounds coordinates.
    pub fn inject(&self, candidates: &[Coord]) -> usize {
        let mut cells = write_guard(&self.cells);
        let mut accepted = 0;
        for &cell in candidates {
            if cell.in_bounds(self.grid_size) {
                cells.insert(cell);
                accepted += 1;
            }
        }
        accepted
    }

    /// Replaces the board with its next generation under exclusive access.
    ///
    /// The successor set is computed from the prior contents in place; this
    /// is the only operation that kills cells. See [`rules::next_generation`].
    pub fn advance(&self) {
        let mut cells = write_guard(&self.cells);
        let next = rules::next_generation(&cells, self.grid_size);
        *cells = next;
    }

    /// Number of live cells right now.
    pub fn len(&self) -> usize {
        read_guard(&self.cells).len()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned guard still holds a consistent board: `advance` computes the
// full successor set before swapping, and `inject` inserts are individually
// invariant-preserving, so there is no torn state to recover from. Taking the
// inner value keeps the board usable after a panicked reader or writer.
fn read_guard(lock: &RwLock<LiveSet>) -> std::sync::RwLockReadGuard<'_, LiveSet> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_guard(lock: &RwLock<LiveSet>) -> std::sync::RwLockWriteGuard<'_, LiveSet> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
