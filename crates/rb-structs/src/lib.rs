//! Client data structures on top of [`rb_tree`].
//!
//! - [`strings`]: a set of words in byte order and their concatenation.
//! - [`vector`]: a set of real vectors and the search for the largest norm.
//! - [`cli`]: the line-oriented driver used by the `rb-structs` binary.

pub mod cli;
pub mod error;
pub mod strings;
pub mod vector;

pub use error::StructsError;
pub use strings::{concatenate, concatenate_all, new_string_tree, string_compare, StringTree};
pub use vector::{
    copy_if_norm_is_larger, find_max_norm_vector, new_vector_tree, vector_compare, Vector,
    VectorTree,
};
