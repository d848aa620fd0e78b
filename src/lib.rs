#![cfg_attr(feature = "clippy", feature(plugin))]
#![cfg_attr(feature = "clippy", plugin(clippy))]

extern crate log;
extern crate rand;
extern crate serde;

pub mod compare;
pub mod error;
pub mod rng;
pub mod treap;

pub use crate::error::Error;
pub use crate::treap::{Cursor, TreapMultiset};
