use std::fmt::{self, Debug};
use std::ops::ControlFlow;

use log::debug;

use crate::error::TreeError;
use crate::red_black::{self, RbNode};
use crate::util::{self, Search};

fn default_comparator<T: Ord>(a: &T, b: &T) -> i32 {
    a.cmp(b) as i32
}

/// Index the next node pushed onto an arena of `len` nodes would take.
///
/// `u32::MAX` is never handed out, so `len` always fits in a `u32`.
fn next_index(len: usize) -> Option<u32> {
    u32::try_from(len).ok().filter(|&idx| idx < u32::MAX)
}

/// Generic ordered set backed by an arena red-black tree.
///
/// Items are ordered by the comparator capability `C` and released by the
/// destructor capability `D`, which runs exactly once for every item the tree
/// gives up (on [`delete`](Self::delete), [`clear`](Self::clear) and drop).
/// Items comparing equal are the same item: the tree is a set.
pub struct RbTree<T, C = fn(&T, &T) -> i32, D = fn(T)>
where
    C: Fn(&T, &T) -> i32,
    D: FnMut(T),
{
    arena: Vec<RbNode<T>>,
    root: Option<u32>,
    comparator: C,
    destructor: D,
}

impl<T: Ord> RbTree<T> {
    /// Empty tree ordered by `Ord`, releasing items by dropping them.
    pub fn new() -> Self {
        Self::with_capabilities(default_comparator::<T>, drop::<T>)
    }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Empty tree ordered by `comparator`, releasing items by dropping them.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capabilities(comparator, drop::<T>)
    }
}

impl<T, C, D> RbTree<T, C, D>
where
    C: Fn(&T, &T) -> i32,
    D: FnMut(T),
{
    pub fn with_capabilities(comparator: C, destructor: D) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            destructor,
        }
    }

    /// Like [`with_capabilities`](Self::with_capabilities) with room for
    /// `capacity` items before the arena reallocates.
    pub fn with_capacity(capacity: usize, comparator: C, destructor: D) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            root: None,
            comparator,
            destructor,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Adds `item`.
    ///
    /// Fails without touching the tree when an equal item is already present
    /// or the arena cannot take another node; the item is handed back inside
    /// the error.
    pub fn insert(&mut self, item: T) -> Result<(), TreeError<T>> {
        let slot = match util::locate(&self.arena, self.root, &item, &self.comparator) {
            Search::Found(existing) => {
                debug!("insert rejected: duplicate of node {existing}");
                return Err(TreeError::Duplicate(item));
            }
            Search::Vacant(slot) => slot,
        };

        let Some(idx) = next_index(self.arena.len()) else {
            debug!("insert rejected: node index space exhausted");
            return Err(TreeError::CapacityExceeded(item));
        };
        if self.arena.try_reserve(1).is_err() {
            debug!("insert rejected: arena allocation failed");
            return Err(TreeError::CapacityExceeded(item));
        }

        self.arena.push(RbNode::new(item));
        self.root = red_black::insert_at::<T, _>(&mut self.arena, self.root, idx, slot);
        Ok(())
    }

    /// Removes the item comparing equal to `item` and releases it through
    /// the destructor.
    pub fn delete(&mut self, item: &T) -> Result<(), TreeError<T>> {
        match self.take(item) {
            Some(removed) => {
                (self.destructor)(removed);
                Ok(())
            }
            None => Err(TreeError::NotFound),
        }
    }

    /// Removes the item comparing equal to `item` and returns it to the
    /// caller instead of releasing it.
    pub fn take(&mut self, item: &T) -> Option<T> {
        let Some(idx) = util::find(&self.arena, self.root, item, &self.comparator) else {
            debug!("delete rejected: item not present");
            return None;
        };
        let root = red_black::remove::<T, _>(&mut self.arena, self.root, idx);
        let (node, root) = util::swap_remove(&mut self.arena, root, idx);
        self.root = root;
        Some(node.item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// The stored item comparing equal to `item`.
    pub fn find(&self, item: &T) -> Option<&T> {
        util::find(&self.arena, self.root, item, &self.comparator)
            .map(|i| &self.arena[i as usize].item)
    }

    /// Smallest item.
    pub fn first(&self) -> Option<&T> {
        util::first(&self.arena, self.root).map(|i| &self.arena[i as usize].item)
    }

    /// Largest item.
    pub fn last(&self) -> Option<&T> {
        util::last(&self.arena, self.root).map(|i| &self.arena[i as usize].item)
    }

    /// Calls `callback` on every item in ascending order, threading `context`
    /// through each call.
    ///
    /// A [`ControlFlow::Break`] stops the walk at once and the call fails with
    /// [`TreeError::Halted`]; effects of the calls made so far are kept.
    pub fn for_each<A, F>(&self, context: &mut A, mut callback: F) -> Result<(), TreeError<T>>
    where
        F: FnMut(&T, &mut A) -> ControlFlow<()>,
    {
        let mut visited = 0;
        let mut curr = util::first(&self.arena, self.root);
        while let Some(i) = curr {
            visited += 1;
            if callback(&self.arena[i as usize].item, context).is_break() {
                debug!("traversal halted after {visited} item(s)");
                return Err(TreeError::Halted { visited });
            }
            curr = util::next(&self.arena, i);
        }
        Ok(())
    }

    /// Releases every item through the destructor, children before parents.
    pub fn clear(&mut self) {
        let order = util::post_order(&self.arena, self.root);
        let mut items: Vec<Option<T>> = self.arena.drain(..).map(|n| Some(n.item)).collect();
        self.root = None;
        for i in order {
            if let Some(item) = items[i as usize].take() {
                (self.destructor)(item);
            }
        }
    }

    /// Checks the red-black invariants and that the arena holds exactly the
    /// nodes reachable from the root.
    pub fn assert_valid(&self) -> Result<(), String> {
        red_black::assert_red_black_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = util::size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(format!(
                "Size mismatch: {reachable} reachable, {} stored",
                self.arena.len()
            ));
        }
        Ok(())
    }
}

impl<T, C, D> Drop for RbTree<T, C, D>
where
    C: Fn(&T, &T) -> i32,
    D: FnMut(T),
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C, D> Debug for RbTree<T, C, D>
where
    T: Debug,
    C: Fn(&T, &T) -> i32,
    D: FnMut(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&red_black::print::<T, _>(&self.arena, self.root, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_tree() {
        let tree = RbTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(!tree.contains(&1));
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(format!("{tree:?}"), "∅");
        tree.assert_valid().unwrap();
    }

    #[test]
    fn capacity_is_preallocated() {
        let tree = RbTree::with_capacity(16, default_comparator::<u8>, drop::<u8>);
        assert!(tree.arena.capacity() >= 16);
    }

    fn by_key(a: &(i32, &'static str), b: &(i32, &'static str)) -> i32 {
        a.0.cmp(&b.0) as i32
    }

    #[test]
    fn duplicate_hands_item_back() {
        let mut tree: RbTree<(i32, &'static str), _> = RbTree::with_comparator(by_key);
        tree.insert((1, "first")).unwrap();
        let err = tree.insert((1, "second")).unwrap_err();
        assert_eq!(err, TreeError::Duplicate((1, "second")));
        assert_eq!(tree.find(&(1, "")), Some(&(1, "first")));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn destructor_runs_once_per_item() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&released);
        let mut tree = RbTree::with_capabilities(default_comparator::<i32>, move |item| {
            sink.borrow_mut().push(item)
        });
        for i in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert(i).unwrap();
        }
        tree.delete(&6).unwrap();
        assert_eq!(*released.borrow(), vec![6]);
        assert_eq!(tree.take(&5), Some(5));
        assert_eq!(*released.borrow(), vec![6]);
        assert_eq!(tree.delete(&6), Err(TreeError::NotFound));

        drop(tree);
        let released = released.borrow();
        assert_eq!(released.len(), 6);
        // Root is released last.
        assert_eq!(released.last(), Some(&4));
        let mut sorted = released.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 6, 7]);
    }

    #[test]
    fn clear_resets_and_tree_stays_usable() {
        let mut tree = RbTree::new();
        for i in 0..32 {
            tree.insert(i).unwrap();
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        tree.insert(9).unwrap();
        assert_eq!(tree.first(), Some(&9));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn debug_prints_structure() {
        let mut tree = RbTree::new();
        for i in [2, 1, 3] {
            tree.insert(i).unwrap();
        }
        let out = format!("{tree:?}");
        assert!(out.starts_with("Node[0] black 2"));
        assert!(out.contains("L=Node[1] red 1"));
        assert!(out.contains("R=Node[2] red 3"));
    }

    #[test]
    fn index_space_guard() {
        assert_eq!(next_index(0), Some(0));
        assert_eq!(next_index(41), Some(41));
        assert_eq!(next_index(u32::MAX as usize - 1), Some(u32::MAX - 1));
        assert_eq!(next_index(u32::MAX as usize), None);
        if let Some(len) = (u32::MAX as usize).checked_add(1) {
            assert_eq!(next_index(len), None);
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(TreeError::<()>::NotFound.to_string(), "item not present");
        assert_eq!(
            TreeError::<()>::Halted { visited: 2 }.to_string(),
            "traversal halted by callback after 2 item(s)"
        );
        assert_eq!(TreeError::Duplicate(3).into_item(), Some(3));
        assert_eq!(TreeError::<i32>::NotFound.into_item(), None);
    }
}
