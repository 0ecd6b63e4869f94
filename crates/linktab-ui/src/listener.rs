//! Document-scoped pointer listeners.
//!
//! A drag can outrun the element being dragged, so move and release are
//! observed at document scope. Every behavior acquires its pair of global
//! listeners on construction and must hand them back exactly once.

use linktab_core::alloc::{IndexSlot, SparseSet};

use crate::tree::NodeId;

/// Kind of document-scoped listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer moved anywhere in the document.
    PointerMove,
    /// Pointer button released anywhere in the document.
    PointerUp,
}

/// Handle to a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(IndexSlot);

#[derive(Debug, Clone, Copy)]
struct Listener {
    kind: ListenerKind,
    owner: NodeId,
}

/// Registry of document-scoped listeners, keyed by owning host element.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: SparseSet<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document listener of `kind` on behalf of `owner`.
    pub fn listen_global(&mut self, kind: ListenerKind, owner: NodeId) -> ListenerId {
        let id = ListenerId(self.listeners.push(Listener { kind, owner }));
        tracing::trace!(?kind, ?owner, ?id, "listener registered");
        id
    }

    /// Unregister a listener. Returns false for unknown or already removed ids.
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        match self.listeners.remove(id.0) {
            Some(listener) => {
                tracing::trace!(kind = ?listener.kind, owner = ?listener.owner, ?id, "listener removed");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.contains(id.0)
    }

    /// Owners of every live listener of `kind`.
    pub fn owners(&self, kind: ListenerKind) -> Vec<NodeId> {
        self.listeners
            .iter()
            .filter(|(_, listener)| listener.kind == kind)
            .map(|(_, listener)| listener.owner)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// The pointer-move and pointer-up listeners held by one behavior.
#[derive(Debug, PartialEq, Eq)]
pub struct GlobalListeners {
    pointer_move: ListenerId,
    pointer_up: ListenerId,
}

impl GlobalListeners {
    pub fn acquire(registry: &mut ListenerRegistry, owner: NodeId) -> Self {
        Self {
            pointer_move: registry.listen_global(ListenerKind::PointerMove, owner),
            pointer_up: registry.listen_global(ListenerKind::PointerUp, owner),
        }
    }

    /// Release both listeners. Consumes `self`, so a pair is released once.
    pub fn release(self, registry: &mut ListenerRegistry) {
        registry.unlisten(self.pointer_move);
        registry.unlisten(self.pointer_up);
    }

    pub fn pointer_move(&self) -> ListenerId {
        self.pointer_move
    }

    pub fn pointer_up(&self) -> ListenerId {
        self.pointer_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release_pair() {
        let mut registry = ListenerRegistry::new();
        let listeners = GlobalListeners::acquire(&mut registry, NodeId(3));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.owners(ListenerKind::PointerMove), vec![NodeId(3)]);
        assert_eq!(registry.owners(ListenerKind::PointerUp), vec![NodeId(3)]);

        let (move_id, up_id) = (listeners.pointer_move(), listeners.pointer_up());
        listeners.release(&mut registry);
        assert!(registry.is_empty());
        assert!(!registry.contains(move_id));
        assert!(!registry.contains(up_id));
    }

    #[test]
    fn test_stale_unlisten_is_noop() {
        let mut registry = ListenerRegistry::new();
        let first = registry.listen_global(ListenerKind::PointerMove, NodeId(1));
        assert!(registry.unlisten(first));

        // Slot reuse must not let the stale id remove the new listener.
        let second = registry.listen_global(ListenerKind::PointerMove, NodeId(2));
        assert!(!registry.unlisten(first));
        assert!(registry.contains(second));
        assert_eq!(registry.owners(ListenerKind::PointerMove), vec![NodeId(2)]);
    }

    #[test]
    fn test_owners_filter_by_kind() {
        let mut registry = ListenerRegistry::new();
        let _a = GlobalListeners::acquire(&mut registry, NodeId(1));
        registry.listen_global(ListenerKind::PointerUp, NodeId(9));
        assert_eq!(registry.owners(ListenerKind::PointerMove), vec![NodeId(1)]);
        assert_eq!(
            registry.owners(ListenerKind::PointerUp),
            vec![NodeId(1), NodeId(9)]
        );
    }
}
