//! Sets of real-valued vectors ordered coordinate by coordinate.

use std::ops::ControlFlow;

use rb_tree::RbTree;

use crate::error::StructsError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    pub coords: Vec<f64>,
}

impl Vector {
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Squared L2 norm. Only ever compared, so the square root is skipped.
    pub fn norm(&self) -> f64 {
        self.coords.iter().map(|c| c * c).sum()
    }

    /// Parses a JSON array of numbers. `line` is only used in error messages.
    pub fn parse(text: &str, line: usize) -> Result<Self, StructsError> {
        let coords: Vec<f64> = serde_json::from_str(text)
            .map_err(|source| StructsError::Json { line, source })?;
        if coords.is_empty() {
            return Err(StructsError::EmptyVector { line });
        }
        Ok(Self { coords })
    }
}

pub type VectorTree = RbTree<Vector, fn(&Vector, &Vector) -> i32>;

/// Compares coordinate by coordinate; the first differing coordinate
/// decides. When one vector is a prefix of the other the shorter is smaller.
pub fn vector_compare(a: &Vector, b: &Vector) -> i32 {
    for (x, y) in a.coords.iter().zip(&b.coords) {
        if x < y {
            return -1;
        }
        if x > y {
            return 1;
        }
    }
    a.len().cmp(&b.len()) as i32
}

/// Copies `v` into `max` when `max` is still empty or `v` has a strictly
/// larger norm.
pub fn copy_if_norm_is_larger(v: &Vector, max: &mut Vector) -> ControlFlow<()> {
    if max.is_empty() || v.norm() > max.norm() {
        max.coords.clone_from(&v.coords);
    }
    ControlFlow::Continue(())
}

pub fn new_vector_tree() -> VectorTree {
    RbTree::with_comparator(vector_compare as fn(&Vector, &Vector) -> i32)
}

/// A copy of the vector with the largest norm, `None` for an empty tree.
///
/// Among vectors of equal norm the smallest under [`vector_compare`] wins.
pub fn find_max_norm_vector(tree: &VectorTree) -> Result<Option<Vector>, StructsError> {
    let mut max = Vector::default();
    tree.for_each(&mut max, copy_if_norm_is_larger)?;
    Ok((!max.is_empty()).then_some(max))
}
