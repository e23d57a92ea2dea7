//! Grid coordinates and Moore-neighborhood iteration.
//!
//! A [`Coord`] is a plain value: equality and hashing are componentwise and
//! there is no identity beyond the pair itself. Coordinates are signed so the
//! neighbor walk can step off the grid's low edge without wrapping; bounds
//! filtering happens in the rules and injection paths, not here.
//!
//! The serialized form is `{"X": .., "Y": ..}` with capitalized keys. The
//! streaming clients consume exactly that shape, so the rename attributes are
//! load-bearing wire compatibility, not style. Inbound decode additionally
//! accepts lowercase `x`/`y`: the reference injection client posts that
//! casing and the previous server matched field names case-insensitively.

use serde::{Deserialize, Serialize};

/// One cell position on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    #[serde(rename = "X", alias = "x")]
    pub x: i32,
    #[serde(rename = "Y", alias = "y")]
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight Moore neighbors, in a fixed row-major order.
    ///
    /// Neighbors may lie outside any particular grid, including at negative
    /// coordinates. A cell is never its own neighbor.
    #[inline]
    pub fn neighbors(self) -> [Coord; 8] {
        let Coord { x, y } = self;
        [
            Coord::new(x - 1, y - 1),
            Coord::new(x, y - 1),
            Coord::new(x + 1, y - 1),
            Coord::new(x - 1, y),
            Coord::new(x + 1, y),
            Coord::new(x - 1, y + 1),
            Coord::new(x, y + 1),
            Coord::new(x + 1, y + 1),
        ]
    }

    /// True when the coordinate lies inside `[0, grid_size-1]²`.
    #[inline]
    pub fn in_bounds(self, grid_size: i32) -> bool {
        self.x >= 0 && self.x < grid_size && self.y >= 0 && self.y < grid_size
    }
}
