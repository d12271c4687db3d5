//! Red-black balancing over an arena of [`RbNode`]s.
//!
//! The functions here take the arena and the current root and return the new
//! root; the owning [`RbTree`](crate::RbTree) keeps the bookkeeping.

pub mod print;
pub mod types;
pub mod util;

pub use print::print;
pub use types::{Color, RbNode, RbNodeLike};
pub use util::{assert_red_black_tree, insert, insert_at, remove};
