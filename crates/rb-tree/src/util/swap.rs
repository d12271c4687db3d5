use crate::types::{Node, Side};

use super::{connect, get_l, get_r, slot};

/// Exchanges the tree positions of `high` and its descendant `low`.
///
/// Only links move; each node keeps its item. Handles `low` being the direct
/// child of `high` as well as a deeper descendant (the in-order successor
/// case of deletion). Returns the possibly new root.
pub fn swap<N: Node>(arena: &mut [N], root: Option<u32>, high: u32, low: u32) -> Option<u32> {
    if high == low {
        return root;
    }

    let high_slot = slot(arena, high);
    let high_l = get_l(arena, high);
    let high_r = get_r(arena, high);
    let low_slot = slot(arena, low);
    let low_l = get_l(arena, low);
    let low_r = get_r(arena, low);

    let mut root = connect(arena, root, Some((high, Side::Left)), low_l);
    root = connect(arena, root, Some((high, Side::Right)), low_r);

    match low_slot {
        Some((low_p, low_side)) if low_p == high => {
            root = connect(arena, root, Some((low, low_side)), Some(high));
            let other = match low_side.opposite() {
                Side::Left => high_l,
                Side::Right => high_r,
            };
            root = connect(arena, root, Some((low, low_side.opposite())), other);
        }
        _ => {
            debug_assert!(low_slot.is_some(), "low must be a descendant of high");
            root = connect(arena, root, low_slot, Some(high));
            root = connect(arena, root, Some((low, Side::Left)), high_l);
            root = connect(arena, root, Some((low, Side::Right)), high_r);
        }
    }

    connect(arena, root, high_slot, Some(low))
}
