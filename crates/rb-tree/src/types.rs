//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Each link
//! (`p` parent, `l` left, `r` right) is an `Option<u32>` index into that
//! arena, so rotations and reparenting are index rewrites and a freed node
//! can never be reached through a dangling link.

/// Binary tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node that stores one item of type `T`.
pub trait ItemNode<T>: Node {
    fn item(&self) -> &T;
}

/// Which child of its parent a node is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Where a node hangs: its parent and the side it occupies under that parent.
///
/// `None` in place of a slot stands for the tree root.
pub type Slot = (u32, Side);
