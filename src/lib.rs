//! Sparse bounded Game of Life core with a concurrent snapshot/inject interface.
//!
//! ## Scope
//! This crate owns the simulation: a sparse set of live cells on a bounded
//! plane, the neighbor-counting generation advance, and the locking contract
//! that lets one ticking writer and many readers share the board. The
//! HTTP/WebSocket transport that carries snapshots to viewers and injections
//! from them sits outside this crate; [`wire`] fixes the payload shapes it
//! uses.
//!
//! ## Key invariants
//! - No coordinate outside `[0, grid_size-1]²` ever enters the board, through
//!   injection or through generation advance.
//! - Board membership is the only aliveness record; snapshots are owned
//!   copies of a single consistent instant, never aliases.
//! - Generation advance touches only cells adjacent to a live cell. Work is
//!   bounded by the live-cell count, never by the grid area.
//!
//! ## Flow
//! [`SimulationClock`] ticks on a fixed period and swaps in the next
//! generation under the board's exclusive guard. Concurrently, the transport
//! calls [`GridState::snapshot`] (shared access) on its own cadence and
//! [`GridState::inject`] (exclusive access) when clients supply cells. The
//! two cadences are independent; the guard is the only coupling.

pub mod board;
pub mod clock;
pub mod coord;
pub mod rules;
pub mod wire;

pub use board::{GridConfig, GridState, LiveSet};
pub use clock::SimulationClock;
pub use coord::Coord;
pub use wire::PayloadError;
