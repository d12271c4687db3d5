use crate::types::{ItemNode, Node};

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Red-black tree node stored in the arena.
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub item: T,
    pub color: Color,
}

impl<T> RbNode<T> {
    /// Detached red node.
    pub fn new(item: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            item,
            color: Color::Red,
        }
    }
}

impl<T> Node for RbNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ItemNode<T> for RbNode<T> {
    fn item(&self) -> &T {
        &self.item
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike<T>: ItemNode<T> {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }
}

impl<T> RbNodeLike<T> for RbNode<T> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
