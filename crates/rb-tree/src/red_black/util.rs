use log::trace;

use crate::types::{Side, Slot};
use crate::util::{
    child, connect, first, get_l, get_p, get_r, locate, next, rotate, set_l, set_p, set_r,
    single_child, slot, swap, Search,
};

use super::types::{Color, RbNodeLike};

#[inline]
fn color_of<T, N>(arena: &[N], i: u32) -> Color
where
    N: RbNodeLike<T>,
{
    arena[i as usize].color()
}

#[inline]
fn set_color<T, N>(arena: &mut [N], i: u32, color: Color)
where
    N: RbNodeLike<T>,
{
    arena[i as usize].set_color(color);
}

/// Missing links count as black leaves.
#[inline]
fn is_red<T, N>(arena: &[N], i: Option<u32>) -> bool
where
    N: RbNodeLike<T>,
{
    i.map(|i| color_of::<T, N>(arena, i) == Color::Red)
        .unwrap_or(false)
}

/// Links the detached node `n` by comparator descent and rebalances.
///
/// Returns the new root, or `Err(existing)` with the index of a node that
/// compares equal, in which case nothing was linked.
pub fn insert<T, N, C>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Result<Option<u32>, u32>
where
    N: RbNodeLike<T>,
    C: Fn(&T, &T) -> i32 + ?Sized,
{
    let view: &[N] = arena;
    match locate(view, root, view[n as usize].item(), comparator) {
        Search::Found(existing) => Err(existing),
        Search::Vacant(slot) => Ok(insert_at::<T, N>(arena, root, n, slot)),
    }
}

/// Links the detached node `n` into the vacant `slot` and rebalances.
pub fn insert_at<T, N>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    slot: Option<Slot>,
) -> Option<u32>
where
    N: RbNodeLike<T>,
{
    set_color::<T, N>(arena, n, Color::Red);
    set_l(arena, n, None);
    set_r(arena, n, None);
    let root = connect(arena, root, slot, Some(n));
    insert_fixup::<T, N>(arena, root, n)
}

/// Local shape seen by the insertion fixup at node `n` (which is red).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InsertCase {
    /// `n` is the root.
    Root,
    /// Parent is black; nothing to repair.
    ParentBlack,
    /// Parent is a red root.
    RedRoot { parent: u32 },
    UncleRed { parent: u32, uncle: u32, grand: u32 },
    /// `n` is on the same side of the parent as the parent is of the grandparent.
    BlackUncleStraight { parent: u32, grand: u32 },
    BlackUncleZigZag { parent: u32, grand: u32 },
}

fn classify_insert<T, N>(arena: &[N], n: u32) -> InsertCase
where
    N: RbNodeLike<T>,
{
    let Some((parent, n_side)) = slot(arena, n) else {
        return InsertCase::Root;
    };
    if color_of::<T, N>(arena, parent) == Color::Black {
        return InsertCase::ParentBlack;
    }
    let Some((grand, parent_side)) = slot(arena, parent) else {
        return InsertCase::RedRoot { parent };
    };
    let uncle = child(arena, grand, parent_side.opposite());
    match uncle {
        Some(uncle) if is_red::<T, N>(arena, Some(uncle)) => InsertCase::UncleRed {
            parent,
            uncle,
            grand,
        },
        _ if n_side == parent_side => InsertCase::BlackUncleStraight { parent, grand },
        _ => InsertCase::BlackUncleZigZag { parent, grand },
    }
}

/// Restores the red-black invariants after `n` was linked as a red leaf.
///
/// Only the red-uncle case moves up the tree; the rotation cases finish
/// after at most two rotations.
fn insert_fixup<T, N>(arena: &mut [N], mut root: Option<u32>, mut n: u32) -> Option<u32>
where
    N: RbNodeLike<T>,
{
    loop {
        let case = classify_insert::<T, N>(arena, n);
        trace!("insert fixup at {n}: {case:?}");
        match case {
            InsertCase::Root => {
                set_color::<T, N>(arena, n, Color::Black);
                return root;
            }
            InsertCase::ParentBlack => return root,
            InsertCase::RedRoot { parent } => {
                set_color::<T, N>(arena, parent, Color::Black);
                return root;
            }
            InsertCase::UncleRed {
                parent,
                uncle,
                grand,
            } => {
                set_color::<T, N>(arena, parent, Color::Black);
                set_color::<T, N>(arena, uncle, Color::Black);
                set_color::<T, N>(arena, grand, Color::Red);
                n = grand;
            }
            InsertCase::BlackUncleStraight { parent, grand } => {
                root = rotate(arena, root, parent, grand);
                set_color::<T, N>(arena, parent, Color::Black);
                set_color::<T, N>(arena, grand, Color::Red);
                return root;
            }
            InsertCase::BlackUncleZigZag { parent, grand } => {
                root = rotate(arena, root, n, parent);
                root = rotate(arena, root, n, grand);
                set_color::<T, N>(arena, n, Color::Black);
                set_color::<T, N>(arena, grand, Color::Red);
                return root;
            }
        }
    }
}

/// Unlinks node `n` from the tree and rebalances.
///
/// A node with two children first trades position and color with its
/// in-order successor, so the node physically removed has at most one child.
/// On return `n` is fully detached (no parent, no children) and may be freed.
/// Returns the new root.
pub fn remove<T, N>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32>
where
    N: RbNodeLike<T>,
{
    let mut root = root;

    if let (Some(_), Some(r)) = (get_l(arena, n), get_r(arena, n)) {
        let successor = first(arena, Some(r)).unwrap_or(r);
        root = swap(arena, root, n, successor);
        let n_color = color_of::<T, N>(arena, n);
        let successor_color = color_of::<T, N>(arena, successor);
        set_color::<T, N>(arena, n, successor_color);
        set_color::<T, N>(arena, successor, n_color);
    }

    let replacement = single_child(arena, n);
    let n_slot = slot(arena, n);
    root = connect(arena, root, n_slot, replacement);
    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);

    if color_of::<T, N>(arena, n) == Color::Red {
        trace!("removed red node {n}");
    } else if let Some(c) = replacement.filter(|&c| is_red::<T, N>(arena, Some(c))) {
        trace!("removed black node {n}, red child {c} absorbs");
        set_color::<T, N>(arena, c, Color::Black);
    } else if let Some((parent, side)) = n_slot {
        root = solve_double_black::<T, N>(arena, root, parent, side);
    }

    if let Some(r) = root {
        set_color::<T, N>(arena, r, Color::Black);
    }
    root
}

/// Local shape seen by the double-black resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeleteCase {
    /// No sibling to borrow from; push the deficiency up.
    NoSibling,
    RedSibling { sibling: u32 },
    /// Black sibling whose children are both black (or missing).
    BlackNephews { sibling: u32 },
    /// Black sibling, the nephew nearer the deficient side is red, the far one is not.
    CloseRedNephew { sibling: u32, close: u32 },
    /// Black sibling with a red nephew on the far side.
    FarRedNephew { sibling: u32, far: u32 },
}

fn classify_delete<T, N>(arena: &[N], parent: u32, side: Side) -> DeleteCase
where
    N: RbNodeLike<T>,
{
    let Some(sibling) = child(arena, parent, side.opposite()) else {
        return DeleteCase::NoSibling;
    };
    if color_of::<T, N>(arena, sibling) == Color::Red {
        return DeleteCase::RedSibling { sibling };
    }
    let far = child(arena, sibling, side.opposite());
    let close = child(arena, sibling, side);
    match (far, close) {
        (Some(far), _) if is_red::<T, N>(arena, Some(far)) => {
            DeleteCase::FarRedNephew { sibling, far }
        }
        (_, Some(close)) if is_red::<T, N>(arena, Some(close)) => {
            DeleteCase::CloseRedNephew { sibling, close }
        }
        _ => DeleteCase::BlackNephews { sibling },
    }
}

/// Resolves a missing black unit under `parent` on `side`.
///
/// The deficient position itself may be empty. The loop climbs one level per
/// `BlackNephews` case with a black parent; every other case finishes within
/// a bounded number of rotations.
fn solve_double_black<T, N>(
    arena: &mut [N],
    mut root: Option<u32>,
    mut parent: u32,
    mut side: Side,
) -> Option<u32>
where
    N: RbNodeLike<T>,
{
    loop {
        let case = classify_delete::<T, N>(arena, parent, side);
        trace!("double black under {parent} ({side:?}): {case:?}");
        match case {
            DeleteCase::RedSibling { sibling } => {
                set_color::<T, N>(arena, sibling, Color::Black);
                set_color::<T, N>(arena, parent, Color::Red);
                root = rotate(arena, root, sibling, parent);
                continue;
            }
            DeleteCase::CloseRedNephew { sibling, close } => {
                set_color::<T, N>(arena, close, Color::Black);
                set_color::<T, N>(arena, sibling, Color::Red);
                root = rotate(arena, root, close, sibling);
                continue;
            }
            DeleteCase::FarRedNephew { sibling, far } => {
                let parent_color = color_of::<T, N>(arena, parent);
                set_color::<T, N>(arena, sibling, parent_color);
                set_color::<T, N>(arena, parent, Color::Black);
                set_color::<T, N>(arena, far, Color::Black);
                return rotate(arena, root, sibling, parent);
            }
            DeleteCase::BlackNephews { sibling } => {
                set_color::<T, N>(arena, sibling, Color::Red);
                if color_of::<T, N>(arena, parent) == Color::Red {
                    set_color::<T, N>(arena, parent, Color::Black);
                    return root;
                }
            }
            DeleteCase::NoSibling => {}
        }

        match slot(arena, parent) {
            Some((grand, parent_side)) => {
                parent = grand;
                side = parent_side;
            }
            None => return root,
        }
    }
}

/// Checks every structural and color invariant of the tree under `root`.
///
/// Verifies parent links, root color, the absence of red-red edges, uniform
/// black-height and strictly ascending order under `comparator`.
pub fn assert_red_black_tree<T, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    N: RbNodeLike<T>,
    C: Fn(&T, &T) -> i32 + ?Sized,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    if color_of::<T, N>(arena, root) != Color::Black {
        return Err("Root is not black".to_string());
    }

    fn black_height<T, N>(arena: &[N], node: Option<u32>) -> Result<usize, String>
    where
        N: RbNodeLike<T>,
    {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = get_l(arena, node);
        let r = get_r(arena, node);

        if let Some(li) = l {
            if get_p(arena, li) != Some(node) {
                return Err(format!("Broken parent link on left child of {node}"));
            }
        }
        if let Some(ri) = r {
            if get_p(arena, ri) != Some(node) {
                return Err(format!("Broken parent link on right child of {node}"));
            }
        }

        let black = color_of::<T, N>(arena, node) == Color::Black;
        if !black {
            if is_red::<T, N>(arena, l) {
                return Err(format!("Red node {node} has red left child"));
            }
            if is_red::<T, N>(arena, r) {
                return Err(format!("Red node {node} has red right child"));
            }
        }

        let lh = black_height::<T, N>(arena, l)?;
        let rh = black_height::<T, N>(arena, r)?;
        if lh != rh {
            return Err(format!("Black height mismatch at {node}: {lh} vs {rh}"));
        }

        Ok(lh + usize::from(black))
    }

    black_height::<T, N>(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            let cmp = comparator(arena[prev as usize].item(), arena[i as usize].item());
            if cmp >= 0 {
                return Err(format!("Node order violated between {prev} and {i}"));
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
