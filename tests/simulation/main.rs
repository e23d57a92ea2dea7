//! Deterministic simulation tests.
//!
//! Random soups come from a seeded XorShift64 so every run replays the same
//! boards; there is no wall-clock or thread-schedule dependence in the rule
//! cross-checks. The concurrency tests do depend on real thread interleaving
//! and assert only schedule-independent facts.
//!
//! Run with: `cargo test --test simulation`

mod concurrent_access;

/// XorShift64 with Marsaglia's (13, 7, 17) constants. Seed 0 is remapped to
/// avoid the all-zero lockup state.
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-enough sample in `[0, upper)` for test data generation.
    pub fn next_range(&mut self, upper: u64) -> u64 {
        self.next_u64() % upper
    }
}
