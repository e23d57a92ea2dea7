//! Concurrency contract tests: one ticking writer, many readers and
//! injectors sharing one board.
//!
//! These assert only schedule-independent facts: no lost updates across
//! concurrent injections, and bounds closure in every snapshot no matter how
//! reads interleave with the clock's exclusive swaps.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lifegrid::{Coord, GridConfig, GridState, LiveSet, SimulationClock};

/// Many threads injecting disjoint coordinate sets must all land: the union
/// appears in a post-hoc snapshot and every per-thread count is full.
#[test]
fn concurrent_disjoint_injects_are_never_lost() {
    const THREADS: i32 = 8;
    const PER_THREAD: i32 = 64;

    let state = Arc::new(GridState::new(&GridConfig::default()));
    let mut handles = Vec::new();
    for t in 0..THREADS {
        let state = Arc::clone(&state);
        handles.push(thread::spawn(move || {
            // Each thread owns column t; rows are disjoint by construction.
            let cells: Vec<Coord> = (0..PER_THREAD).map(|r| Coord::new(t, r)).collect();
            state.inject(&cells)
        }));
    }
    for handle in handles {
        assert_eq!(handle.join().unwrap(), PER_THREAD as usize);
    }

    let snapshot: LiveSet = state.snapshot().into_iter().collect();
    assert_eq!(snapshot.len(), (THREADS * PER_THREAD) as usize);
    for t in 0..THREADS {
        for r in 0..PER_THREAD {
            assert!(snapshot.contains(&Coord::new(t, r)));
        }
    }
}

/// Snapshot readers racing a fast clock and a stream of mixed-bounds
/// injections never observe an out-of-bounds coordinate.
#[test]
fn snapshots_stay_in_bounds_under_contention() {
    const GRID_SIZE: i32 = 64;

    let state = Arc::new(GridState::new(&GridConfig {
        grid_size: GRID_SIZE,
        tick_period: Duration::from_millis(1),
    }));
    state.inject(&[
        // R-pentomino: long-lived churn from a small seed.
        Coord::new(31, 30),
        Coord::new(32, 30),
        Coord::new(30, 31),
        Coord::new(31, 31),
        Coord::new(31, 32),
    ]);
    let clock = SimulationClock::start(Arc::clone(&state), Duration::from_millis(1));

    let injector = {
        let state = Arc::clone(&state);
        thread::spawn(move || {
            for i in 0..200 {
                // Alternate in-bounds cells with ones past every edge.
                state.inject(&[
                    Coord::new(i % GRID_SIZE, (i * 7) % GRID_SIZE),
                    Coord::new(-1 - i, i),
                    Coord::new(i, GRID_SIZE + i),
                ]);
            }
        })
    };

    let mut readers = Vec::new();
    for _ in 0..4 {
        let state = Arc::clone(&state);
        readers.push(thread::spawn(move || {
            for _ in 0..200 {
                for cell in state.snapshot() {
                    assert!(cell.in_bounds(GRID_SIZE));
                }
            }
        }));
    }

    injector.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    // The clock must have made progress despite the contention.
    while clock.generations() == 0 {
        thread::yield_now();
    }
    clock.stop();
}

/// An injection immediately followed by a snapshot from the same thread
/// always sees the injected cells, clock running or not.
///
/// The injected shapes are isolated 2×2 blocks (still lifes), so no number
/// of clock advances between the inject and the snapshot can remove them.
#[test]
fn inject_then_snapshot_is_read_your_writes() {
    let state = Arc::new(GridState::new(&GridConfig {
        grid_size: 1000,
        tick_period: Duration::from_millis(1),
    }));
    let clock = SimulationClock::start(Arc::clone(&state), Duration::from_millis(1));

    for i in 0..100i32 {
        // Blocks spaced 4 apart never interact.
        let (bx, by) = (4 * (i % 50) + 100, 4 * (i / 50) + 100);
        let block = [
            Coord::new(bx, by),
            Coord::new(bx, by + 1),
            Coord::new(bx + 1, by),
            Coord::new(bx + 1, by + 1),
        ];
        assert_eq!(state.inject(&block), 4);
        let snapshot: LiveSet = state.snapshot().into_iter().collect();
        for cell in block {
            assert!(
                snapshot.contains(&cell),
                "cell injected in block {i} missing from immediate snapshot"
            );
        }
    }
    clock.stop();
}
