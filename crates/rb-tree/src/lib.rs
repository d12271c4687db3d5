//! Generic red-black tree over an index arena.
//!
//! Nodes live in a `Vec` owned by the tree and link to each other through
//! `Option<u32>` indices (`p` / `l` / `r`), so parent back-references need
//! neither raw pointers nor reference counting.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`ItemNode`] traits, [`Side`], [`Slot`] |
//! | [`util`] | Navigation primitives: `side`, `connect`, `rotate`, `swap`, `first`, `next` … |
//! | [`red_black`] | Insertion fixup, deletion with double-black resolution, invariant checker |
//! | [`tree`] | [`RbTree`], the owning set with comparator and destructor capabilities |
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use rb_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for i in [5, 1, 3] {
//!     tree.insert(i).unwrap();
//! }
//! assert!(tree.insert(3).is_err());
//!
//! let mut seen = Vec::new();
//! tree.for_each(&mut seen, |item, seen| {
//!     seen.push(*item);
//!     ControlFlow::Continue(())
//! })
//! .unwrap();
//! assert_eq!(seen, vec![1, 3, 5]);
//!
//! tree.delete(&3).unwrap();
//! assert!(!tree.contains(&3));
//! ```

pub mod error;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use error::TreeError;
pub use red_black::{Color, RbNode};
pub use tree::RbTree;
pub use types::{ItemNode, Node, Side, Slot};
