//! Application-side tab order that reorder events are applied to.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::{ReorderError, ReorderResult};
use crate::reorder::TabReorderEvent;

/// Ordered set of tab identifiers mirroring one tab strip.
///
/// Positions count every element of the strip, including a leading element
/// that is never dragged, so `target_item_position` maps onto it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabOrder<Id: Hash + Eq> {
    items: IndexSet<Id>,
}

impl<Id> TabOrder<Id>
where
    Id: Hash + Eq + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    /// Append `id`. Returns false if it was already present.
    pub fn push(&mut self, id: Id) -> bool {
        self.items.insert(id)
    }

    pub fn remove(&mut self, id: &Id) -> bool {
        self.items.shift_remove(id)
    }

    pub fn position(&self, id: &Id) -> Option<usize> {
        self.items.get_index_of(id)
    }

    pub fn get(&self, index: usize) -> Option<&Id> {
        self.items.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.items.iter()
    }

    /// Move the item named by `event` to its target position.
    ///
    /// The target is clamped to the last position. Returns the item's new
    /// index.
    pub fn apply<Path>(&mut self, event: &TabReorderEvent<Id, Path>) -> ReorderResult<usize> {
        let from = self
            .position(&event.movable_item_id)
            .ok_or_else(|| ReorderError::UnknownItem(format!("{:?}", event.movable_item_id)))?;
        let to = event.target_item_position.min(self.items.len() - 1);
        self.items.move_index(from, to);
        tracing::debug!(id = ?event.movable_item_id, from, to, "tab order updated");
        Ok(to)
    }
}

impl<Id> Default for TabOrder<Id>
where
    Id: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> FromIterator<Id> for TabOrder<Id>
where
    Id: Hash + Eq + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &'static str, target: usize) -> TabReorderEvent<&'static str, ()> {
        TabReorderEvent {
            movable_item_id: id,
            target_item_position: target,
            path: (),
        }
    }

    #[test]
    fn test_apply_moves_right() {
        let mut order: TabOrder<_> = ["search", "a", "b", "c", "d"].into_iter().collect();
        assert_eq!(order.apply(&event("b", 4)), Ok(4));
        let items: Vec<_> = order.iter().copied().collect();
        assert_eq!(items, vec!["search", "a", "c", "d", "b"]);
    }

    #[test]
    fn test_apply_moves_left() {
        let mut order: TabOrder<_> = ["search", "a", "b", "c", "d"].into_iter().collect();
        assert_eq!(order.apply(&event("d", 1)), Ok(1));
        let items: Vec<_> = order.iter().copied().collect();
        assert_eq!(items, vec!["search", "d", "a", "b", "c"]);
    }

    #[test]
    fn test_apply_clamps_target() {
        let mut order: TabOrder<_> = ["search", "a", "b"].into_iter().collect();
        assert_eq!(order.apply(&event("a", 10)), Ok(2));
        assert_eq!(order.get(2), Some(&"a"));
    }

    #[test]
    fn test_apply_unknown_item() {
        let mut order: TabOrder<_> = ["search", "a"].into_iter().collect();
        assert_eq!(
            order.apply(&event("zzz", 1)),
            Err(ReorderError::UnknownItem("\"zzz\"".to_owned()))
        );
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_push_and_remove() {
        let mut order = TabOrder::new();
        assert!(order.push(1));
        assert!(!order.push(1));
        assert!(order.push(2));
        assert_eq!(order.position(&2), Some(1));
        assert!(order.remove(&1));
        assert_eq!(order.position(&2), Some(0));
        assert!(!order.is_empty());
    }
}
