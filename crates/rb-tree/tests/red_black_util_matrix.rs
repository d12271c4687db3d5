use rb_tree::red_black::{assert_red_black_tree, insert, remove, RbNode};
use rb_tree::util::{find, size, swap_remove};

fn rb_cmp(a: &i32, b: &i32) -> i32 {
    a.cmp(b) as i32
}

fn insert_value(arena: &mut Vec<RbNode<i32>>, root: Option<u32>, value: i32) -> Option<u32> {
    arena.push(RbNode::new(value));
    let idx = (arena.len() - 1) as u32;
    let root = insert::<i32, _, _>(arena, root, idx, &rb_cmp).expect("distinct value");
    if let Err(err) = assert_red_black_tree::<i32, _, _>(arena, root, &rb_cmp) {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
    root
}

fn delete_value(arena: &mut Vec<RbNode<i32>>, root: Option<u32>, value: i32) -> Option<u32> {
    let Some(idx) = find(arena, root, &value, &rb_cmp) else {
        return root;
    };
    let root = remove::<i32, _>(arena, root, idx);
    let (node, root) = swap_remove(arena, root, idx);
    assert_eq!(node.item, value);
    if let Err(err) = assert_red_black_tree::<i32, _, _>(arena, root, &rb_cmp) {
        panic!("invalid red-black tree after delete({value}): {err}");
    }
    assert_eq!(size(arena, root), arena.len());
    root
}

#[test]
fn rb_util_insert_delete_various_numbers_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        root = insert_value(&mut arena, root, value);
    }
    assert_eq!(size(&arena, root), 13);

    root = delete_value(&mut arena, root, 100);
    assert_eq!(size(&arena, root), 12);

    root = delete_value(&mut arena, root, 33);
    root = delete_value(&mut arena, root, 33);
    assert_eq!(size(&arena, root), 11);

    root = delete_value(&mut arena, root, 10);
    assert_eq!(size(&arena, root), 10);

    root = delete_value(&mut arena, root, 60);
    assert_eq!(size(&arena, root), 9);

    root = delete_value(&mut arena, root, 22);
    assert_eq!(size(&arena, root), 8);
}

#[test]
fn rb_util_numbers_from_0_to_100_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;

    for i in 0..=100 {
        root = insert_value(&mut arena, root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    for i in 0..=100 {
        root = delete_value(&mut arena, root, i);
        assert_eq!(size(&arena, root), (100 - i) as usize);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_util_numbers_from_100_to_11_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;

    for i in (11..=100).rev() {
        root = insert_value(&mut arena, root, i);
    }
    for i in (11..=100).rev() {
        root = delete_value(&mut arena, root, i);
    }
    assert_eq!(root, None);
    assert!(arena.is_empty());
}

#[test]
fn rb_util_numbers_both_directions_from_50_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;

    root = insert_value(&mut arena, root, 50);
    for i in 1..=100 {
        root = insert_value(&mut arena, root, 50 + i);
        root = insert_value(&mut arena, root, 50 - i);
        assert_eq!(size(&arena, root), (i * 2 + 1) as usize);
    }
    for i in 1..=100 {
        root = delete_value(&mut arena, root, 50 - i);
        root = delete_value(&mut arena, root, 50 + i);
    }
    root = delete_value(&mut arena, root, 50);
    assert_eq!(root, None);
}

#[test]
fn rb_util_delete_from_the_middle_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;

    for i in 0..64 {
        root = insert_value(&mut arena, root, i);
    }
    // Interior nodes with two children go through the successor swap.
    for i in [31, 15, 47, 7, 23, 39, 55, 32, 16, 48] {
        root = delete_value(&mut arena, root, i);
    }
    assert_eq!(size(&arena, root), 54);
    assert!(find(&arena, root, &31, &rb_cmp).is_none());
    assert!(find(&arena, root, &30, &rb_cmp).is_some());
}
