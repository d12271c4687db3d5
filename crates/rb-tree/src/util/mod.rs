//! Binary tree (p / l / r) navigation primitives.
//!
//! Everything here is color-agnostic: the functions work on any arena of
//! [`Node`]s and are shared by the red-black algorithms and the owning
//! [`RbTree`](crate::RbTree).
//!
//! [`connect`] is the only function that rewrites an edge. Rotations,
//! position swaps and splicing are all expressed through it, so a parent
//! link and the matching child link are always written together.

pub mod swap;

use crate::types::{ItemNode, Node, Side, Slot};

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Child of `node` on `side`.
#[inline]
pub fn child<N: Node>(arena: &[N], node: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, node),
        Side::Right => get_r(arena, node),
    }
}

/// Which child of its parent `node` is, `None` for the root.
pub fn side<N: Node>(arena: &[N], node: u32) -> Option<Side> {
    slot(arena, node).map(|(_, side)| side)
}

/// Parent of `node` together with the side it hangs on.
pub fn slot<N: Node>(arena: &[N], node: u32) -> Option<Slot> {
    let p = get_p(arena, node)?;
    if get_l(arena, p) == Some(node) {
        Some((p, Side::Left))
    } else {
        Some((p, Side::Right))
    }
}

/// Hangs `child` into `slot`.
///
/// Writes the parent's child link (or makes `child` the root when `slot` is
/// `None`) and the child's back-reference. Returns the possibly new root.
pub fn connect<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    slot: Option<Slot>,
    child: Option<u32>,
) -> Option<u32> {
    let root = match slot {
        None => child,
        Some((p, Side::Left)) => {
            set_l(arena, p, child);
            root
        }
        Some((p, Side::Right)) => {
            set_r(arena, p, child);
            root
        }
    };
    if let Some(c) = child {
        set_p(arena, c, slot.map(|(p, _)| p));
    }
    root
}

/// Single rotation promoting `child` into the place of its parent `parent`.
///
/// The child's inner subtree moves over to `parent`, `parent` becomes the
/// child's outer child, and the promoted node takes over `parent`'s slot.
pub fn rotate<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    child: u32,
    parent: u32,
) -> Option<u32> {
    debug_assert_eq!(get_p(arena, child), Some(parent));
    let child_side = if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    };
    let parent_slot = slot(arena, parent);
    let inner = self::child(arena, child, child_side.opposite());

    let root = connect(arena, root, Some((parent, child_side)), inner);
    let root = connect(arena, root, Some((child, child_side.opposite())), Some(parent));
    connect(arena, root, parent_slot, Some(child))
}

/// The only child of `node`, if it has exactly one.
pub fn single_child<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    match (get_l(arena, node), get_r(arena, node)) {
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        _ => None,
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    while let Some((p, side)) = slot(arena, curr) {
        if side == Side::Left {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    while let Some((p, side)) = slot(arena, curr) {
        if side == Side::Right {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Number of nodes under `root`, counted by an in-order walk.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        curr = next(arena, i);
    }
    count
}

/// Outcome of a comparator descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// A node comparing equal to the probe.
    Found(u32),
    /// The empty slot the probe would be linked into (`None`: empty tree).
    Vacant(Option<Slot>),
}

/// Descends from `root` comparing `item` against each node.
pub fn locate<T, N, C>(arena: &[N], root: Option<u32>, item: &T, comparator: &C) -> Search
where
    N: ItemNode<T>,
    C: Fn(&T, &T) -> i32 + ?Sized,
{
    let Some(mut curr) = root else {
        return Search::Vacant(None);
    };
    loop {
        let cmp = comparator(item, arena[curr as usize].item());
        if cmp == 0 {
            return Search::Found(curr);
        }
        let side = if cmp < 0 { Side::Left } else { Side::Right };
        match child(arena, curr, side) {
            Some(next) => curr = next,
            None => return Search::Vacant(Some((curr, side))),
        }
    }
}

/// Finds a node comparing equal to `item`.
pub fn find<T, N, C>(arena: &[N], root: Option<u32>, item: &T, comparator: &C) -> Option<u32>
where
    N: ItemNode<T>,
    C: Fn(&T, &T) -> i32 + ?Sized,
{
    match locate(arena, root, item, comparator) {
        Search::Found(i) => Some(i),
        Search::Vacant(_) => None,
    }
}

fn leaf_first<N: Node>(arena: &[N], mut node: u32) -> u32 {
    loop {
        if let Some(l) = get_l(arena, node) {
            node = l;
        } else if let Some(r) = get_r(arena, node) {
            node = r;
        } else {
            return node;
        }
    }
}

/// Node indices in post-order (children before their parent).
///
/// Walks parent links, so it needs no stack regardless of tree height.
pub fn post_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::with_capacity(arena.len());
    let mut curr = root.map(|r| leaf_first(arena, r));
    while let Some(i) = curr {
        out.push(i);
        curr = match slot(arena, i) {
            None => None,
            Some((p, Side::Right)) => Some(p),
            Some((p, Side::Left)) => match get_r(arena, p) {
                Some(r) => Some(leaf_first(arena, r)),
                None => Some(p),
            },
        };
    }
    out
}

/// Removes the unlinked node at `idx` from the arena in O(1).
///
/// The last arena node moves into `idx`; links pointing at it are redirected.
/// Returns the removed node and the possibly new root.
pub fn swap_remove<N: Node>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    idx: u32,
) -> (N, Option<u32>) {
    debug_assert!(
        get_p(arena, idx).is_none() && get_l(arena, idx).is_none() && get_r(arena, idx).is_none()
    );
    let moved = (arena.len() - 1) as u32;
    let node = arena.swap_remove(idx as usize);
    if moved == idx {
        return (node, root);
    }

    let mut root = root;
    match get_p(arena, idx) {
        Some(p) => {
            if get_l(arena, p) == Some(moved) {
                set_l(arena, p, Some(idx));
            } else {
                set_r(arena, p, Some(idx));
            }
        }
        None => root = Some(idx),
    }
    if let Some(l) = get_l(arena, idx) {
        set_p(arena, l, Some(idx));
    }
    if let Some(r) = get_r(arena, idx) {
        set_p(arena, r, Some(idx));
    }
    (node, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::RbNode;

    fn cmp(a: &i32, b: &i32) -> i32 {
        a.cmp(b) as i32
    }

    /// Builds a plain (unbalanced) BST by linking each value at its vacant slot.
    fn build(values: &[i32]) -> (Vec<RbNode<i32>>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &v in values {
            let Search::Vacant(slot) = locate(&arena, root, &v, &cmp) else {
                panic!("duplicate {v}");
            };
            arena.push(RbNode::new(v));
            let idx = (arena.len() - 1) as u32;
            root = connect(&mut arena, root, slot, Some(idx));
        }
        (arena, root)
    }

    fn in_order(arena: &[RbNode<i32>], root: Option<u32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = first(arena, root);
        while let Some(i) = curr {
            out.push(arena[i as usize].item);
            curr = next(arena, i);
        }
        out
    }

    #[test]
    fn side_and_slot() {
        let (arena, root) = build(&[5, 3, 8]);
        let root = root.unwrap();
        assert_eq!(side(&arena, root), None);
        let three = find(&arena, Some(root), &3, &cmp).unwrap();
        let eight = find(&arena, Some(root), &8, &cmp).unwrap();
        assert_eq!(side(&arena, three), Some(Side::Left));
        assert_eq!(slot(&arena, eight), Some((root, Side::Right)));
    }

    #[test]
    fn rotate_left_and_back() {
        let (mut arena, root) = build(&[2, 1, 4, 3, 5]);
        let two = root.unwrap();
        let four = find(&arena, root, &4, &cmp).unwrap();

        let root = rotate(&mut arena, root, four, two);
        assert_eq!(root, Some(four));
        assert_eq!(get_p(&arena, four), None);
        assert_eq!(get_l(&arena, four), Some(two));
        let three = find(&arena, root, &3, &cmp).unwrap();
        assert_eq!(get_r(&arena, two), Some(three));
        assert_eq!(get_p(&arena, three), Some(two));
        assert_eq!(in_order(&arena, root), vec![1, 2, 3, 4, 5]);

        let root = rotate(&mut arena, root, two, four);
        assert_eq!(root, Some(two));
        assert_eq!(get_r(&arena, two), Some(four));
        assert_eq!(get_l(&arena, four), Some(three));
        assert_eq!(in_order(&arena, root), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotate_below_root_keeps_grandparent_side() {
        let (mut arena, root) = build(&[10, 5, 3, 7]);
        let five = find(&arena, root, &5, &cmp).unwrap();
        let three = find(&arena, root, &3, &cmp).unwrap();
        let root = rotate(&mut arena, root, three, five);
        assert_eq!(slot(&arena, three), Some((root.unwrap(), Side::Left)));
        assert_eq!(in_order(&arena, root), vec![3, 5, 7, 10]);
    }

    #[test]
    fn single_child_cases() {
        let (arena, root) = build(&[5, 3, 8, 9]);
        let five = root.unwrap();
        let three = find(&arena, root, &3, &cmp).unwrap();
        let eight = find(&arena, root, &8, &cmp).unwrap();
        let nine = find(&arena, root, &9, &cmp).unwrap();
        assert_eq!(single_child(&arena, five), None);
        assert_eq!(single_child(&arena, three), None);
        assert_eq!(single_child(&arena, eight), Some(nine));
    }

    #[test]
    fn navigation() {
        let (arena, root) = build(&[50, 20, 70, 10, 30, 60, 80, 25]);
        assert_eq!(in_order(&arena, root), vec![10, 20, 25, 30, 50, 60, 70, 80]);
        assert_eq!(size(&arena, root), 8);
        let last = last(&arena, root).unwrap();
        assert_eq!(arena[last as usize].item, 80);
        let mut back = Vec::new();
        let mut curr = Some(last);
        while let Some(i) = curr {
            back.push(arena[i as usize].item);
            curr = prev(&arena, i);
        }
        assert_eq!(back, vec![80, 70, 60, 50, 30, 25, 20, 10]);
    }

    #[test]
    fn post_order_visits_children_first() {
        let (arena, root) = build(&[50, 20, 70, 10, 30, 60, 80, 25]);
        let order: Vec<i32> = post_order(&arena, root)
            .into_iter()
            .map(|i| arena[i as usize].item)
            .collect();
        assert_eq!(order, vec![10, 25, 30, 20, 60, 80, 70, 50]);
        assert!(post_order(&arena, None).is_empty());
    }

    #[test]
    fn swap_remove_redirects_links() {
        let (mut arena, root) = build(&[5, 3, 8]);
        let three = find(&arena, root, &3, &cmp).unwrap();
        let three_slot = slot(&arena, three);
        let root = connect(&mut arena, root, three_slot, None);
        set_p(&mut arena, three, None);

        // Node 8 sits last in the arena and moves into the freed index.
        let (node, root) = swap_remove(&mut arena, root, three);
        assert_eq!(node.item, 3);
        assert_eq!(arena.len(), 2);
        let five = root.unwrap();
        assert_eq!(get_r(&arena, five), Some(three));
        assert_eq!(get_p(&arena, three), Some(five));
        assert_eq!(in_order(&arena, root), vec![5, 8]);

        // Removing the root moves the remaining node and makes it the root.
        let eight = three;
        let root = connect(&mut arena, root, Some((five, Side::Right)), None);
        let root = connect(&mut arena, root, None, Some(eight));
        let (node, root) = swap_remove(&mut arena, root, five);
        assert_eq!(node.item, 5);
        assert_eq!(root, Some(0));
        assert_eq!(in_order(&arena, root), vec![8]);
    }
}
