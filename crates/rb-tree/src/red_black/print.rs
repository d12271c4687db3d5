use std::fmt::Debug;

use super::types::{Color, RbNodeLike};

/// Debug printer for red-black trees.
///
/// One node per line, children indented under their parent; `∅` marks an
/// empty link.
pub fn print<T, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    T: Debug,
    N: RbNodeLike<T>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = match n.color() {
                Color::Black => "black",
                Color::Red => "red",
            };
            let left = print::<T, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<T, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {color} {:?}\n{tab}L={left}\n{tab}R={right}",
                n.item()
            )
        }
    }
}
