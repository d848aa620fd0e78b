//! Persistent probabilistic binary search tree where each node also maintains the heap invariant.

mod builder;
mod cursor;
mod export;
mod multiset;
mod node;
mod tree;

pub use self::cursor::Cursor;
pub use self::multiset::{TreapMultiset, TreapMultisetIter};
