//! Sets of strings in byte-lexicographic order.

use std::ops::ControlFlow;

use rb_tree::RbTree;

use crate::error::StructsError;

pub type StringTree = RbTree<String, fn(&String, &String) -> i32>;

/// Byte-wise lexicographic order, as `strcmp` would give for UTF-8 text.
#[allow(clippy::ptr_arg)]
pub fn string_compare(a: &String, b: &String) -> i32 {
    a.as_bytes().cmp(b.as_bytes()) as i32
}

/// Appends `word` and a line break to `acc`.
///
/// The trailing `\n` is part of the output contract: the concatenation of a
/// whole tree is one word per line, last line terminated.
#[allow(clippy::ptr_arg)]
pub fn concatenate(word: &String, acc: &mut String) -> ControlFlow<()> {
    acc.push_str(word);
    acc.push('\n');
    ControlFlow::Continue(())
}

pub fn new_string_tree() -> StringTree {
    RbTree::with_comparator(string_compare as fn(&String, &String) -> i32)
}

/// Every word of `tree` in ascending order, one per line.
pub fn concatenate_all(tree: &StringTree) -> Result<String, StructsError> {
    let mut out = String::new();
    tree.for_each(&mut out, concatenate)?;
    Ok(out)
}
