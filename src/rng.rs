//! Deterministic generator of heap priorities.

use rand::{Rng, SeedableRng, XorShiftRng};
use std::fmt;

/// Seed used by versions built through `TreapMultiset::new`.
pub const DEFAULT_SEED: u32 = 6781;

/// Seed of the generator that assigns priorities when bulk loading sorted input.
pub const BULK_LOAD_SEED: u32 = 8271;

/// Multiplier of the priority modulus. A treap of `n` entries draws priorities in
/// `[0, n * PRIORITY_SCALE]`.
pub const PRIORITY_SCALE: u64 = 12;

/// A value-semantics wrapper around `XorShiftRng`.
///
/// Drawing a value never mutates the receiver: `draw` returns the value together with the
/// successor state, so every treap version can carry its own generator state without any shared
/// mutable state between versions.
///
/// # Examples
///
/// ```
/// use persistent_treap::rng::PriorityRng;
///
/// let rng = PriorityRng::new(1);
/// let (first, next) = rng.draw();
/// assert_eq!(rng.draw().0, first);
/// assert_eq!(PriorityRng::new(1).draw().1.draw().0, next.draw().0);
/// ```
#[derive(Clone)]
pub struct PriorityRng {
    inner: XorShiftRng,
}

impl PriorityRng {
    /// Constructs a generator from a seed. Equal seeds produce equal sequences.
    pub fn new(seed: u32) -> Self {
        // xorshift state must not be all zeros; the last three words never are
        PriorityRng {
            inner: XorShiftRng::from_seed([seed ^ 0x193a_6754, 0xa8a7_d469, 0x9783_0e05, 0x113b_a7bb]),
        }
    }

    /// Returns the next value and the successor state.
    pub fn draw(&self) -> (u32, PriorityRng) {
        let mut inner = self.inner.clone();
        let value = inner.next_u32();
        (value, PriorityRng { inner })
    }

    /// Draws a priority for an entry joining a treap that currently holds `len` entries.
    pub fn next_priority(&self, len: usize) -> (u32, PriorityRng) {
        let (value, next) = self.draw();
        (reduce(value, len), next)
    }

    /// Draws `count` raw values in order, advancing the receiver past them.
    pub(crate) fn fill(&mut self, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.inner.next_u32()).collect()
    }
}

/// Reduces a raw draw into the priority range of a treap holding `len` entries.
pub fn reduce(value: u32, len: usize) -> u32 {
    (u64::from(value) % (len as u64 * PRIORITY_SCALE + 1)) as u32
}

impl Default for PriorityRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for PriorityRng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PriorityRng").finish()
    }
}
