use std::fmt::Debug;

use linktab_core::config::ReorderConfig;
use linktab_core::profiling::profile_function;

use crate::error::{ReorderError, ReorderResult};
use crate::layout::LayoutHost;
use crate::listener::{GlobalListeners, ListenerRegistry};
use crate::tree::NodeId;

use super::slot::{generate_weights, nearest_slot};
use super::types::{DragItemData, DragPhase, DragSession, TabReorderEvent};

/// Pointer-driven reorder behavior bound to one host element.
///
/// Owns the host's pair of document listeners from construction until
/// [`teardown`](Self::teardown). All visual effects go through the
/// [`LayoutHost`] passed to each callback.
pub struct ReorderBehavior<Id, Path> {
    host: NodeId,
    data: DragItemData<Id, Path>,
    config: ReorderConfig,
    /// Host's siblings in document order, host excluded.
    siblings: Vec<NodeId>,
    /// First child of the host's parent; its width bounds the drag on the left.
    leading: Option<NodeId>,
    session: DragSession,
    listeners: Option<GlobalListeners>,
}

impl<Id, Path> ReorderBehavior<Id, Path>
where
    Id: Clone + Debug,
    Path: Clone,
{
    /// Create a behavior for `host`, acquiring its document listeners.
    ///
    /// Call [`initialize`](Self::initialize) before the first press to bind
    /// the current sibling row.
    pub fn new(
        host: NodeId,
        data: DragItemData<Id, Path>,
        config: ReorderConfig,
        registry: &mut ListenerRegistry,
    ) -> Self {
        let listeners = GlobalListeners::acquire(registry, host);
        tracing::debug!(?host, id = ?data.id, "reorder behavior attached");
        Self {
            host,
            data,
            config,
            siblings: Vec::new(),
            leading: None,
            session: DragSession::default(),
            listeners: Some(listeners),
        }
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn data(&self) -> &DragItemData<Id, Path> {
        &self.data
    }

    /// Replace the host data, e.g. when the application toggles draggability.
    pub fn set_data(&mut self, data: DragItemData<Id, Path>) {
        self.data = data;
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn siblings(&self) -> &[NodeId] {
        &self.siblings
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn phase(&self) -> DragPhase {
        self.session.phase
    }

    /// Whether the document listeners are still held.
    pub fn has_listeners(&self) -> bool {
        self.listeners.is_some()
    }

    /// Bind to the host's current parent and sibling row.
    ///
    /// Safe to call repeatedly; every call re-reads the row, so siblings added
    /// or removed since the last call are picked up.
    pub fn initialize<L>(&mut self, layout: &mut L) -> ReorderResult<()>
    where
        L: LayoutHost + ?Sized,
    {
        let parent = layout
            .parent(self.host)
            .ok_or(ReorderError::NoParent(self.host))?;
        let nodes = layout.children(parent);
        let siblings: Vec<NodeId> = nodes.iter().copied().filter(|&n| n != self.host).collect();
        if siblings.is_empty() {
            return Err(ReorderError::NoSiblings(self.host));
        }

        self.leading = nodes.first().copied();
        self.siblings = siblings;
        Ok(())
    }

    /// Pointer pressed on the host.
    ///
    /// Returns whether a drag session started. Non-draggable hosts and hosts
    /// that cannot bind a sibling row ignore the press.
    pub fn on_press<L>(&mut self, layout: &mut L, pointer_x: f32) -> bool
    where
        L: LayoutHost + ?Sized,
    {
        if !self.data.is_draggable {
            tracing::trace!(host = ?self.host, "press ignored, host not draggable");
            return false;
        }
        if let Err(err) = self.initialize(layout) {
            tracing::warn!(host = ?self.host, "press ignored: {}", err);
            return false;
        }

        let min_left_offset = self.leading.map_or(0.0, |leading| layout.client_width(leading));
        self.session = DragSession {
            phase: DragPhase::Pressed,
            offset_x: layout.offset_left(self.host) - pointer_x,
            min_left_offset,
            ..DragSession::default()
        };

        for &sibling in &self.siblings {
            layout.remove_class(sibling, &self.config.active_class);
        }
        layout.add_class(self.host, &self.config.active_class);

        tracing::debug!(
            host = ?self.host,
            pointer_x,
            offset_x = self.session.offset_x,
            min_left_offset,
            "drag session started"
        );
        true
    }

    /// Pointer moved anywhere in the document.
    ///
    /// While pressed, moves the host under the pointer, recomputes the target
    /// slot and moves the gap to match, all in one step. Returns the new slot,
    /// or `None` when no session is active.
    pub fn on_move<L>(&mut self, layout: &mut L, pointer_x: f32) -> Option<usize>
    where
        L: LayoutHost + ?Sized,
    {
        if !self.session.phase.is_pressed() {
            return None;
        }
        profile_function!();
        self.session.phase = DragPhase::Dragging;

        let host_width = layout.client_width(self.host);
        let left = (pointer_x + self.session.offset_x).max(self.session.min_left_offset);
        layout.add_class(self.host, &self.config.dragging_class);
        layout.set_left(self.host, left);

        let center = left + host_width / 2.0;
        let lefts: Vec<f32> = self
            .siblings
            .iter()
            .map(|&sibling| layout.offset_left(sibling))
            .collect();
        let weights = generate_weights(&lefts, host_width);
        let slot = nearest_slot(&weights, center, self.config.min_target_slot)?;
        self.session.current_index = slot;

        self.set_sibling_margin(layout, self.session.destination_index, 0.0);
        self.session.destination_index = slot.saturating_sub(1);
        // Slot 0 has no sibling before it to carry the gap.
        if slot > 0 {
            self.set_sibling_margin(layout, self.session.destination_index, host_width);
        }

        tracing::trace!(host = ?self.host, left, center, slot, "drag moved");
        Some(slot)
    }

    /// Pointer released anywhere in the document.
    ///
    /// Ends the session. Only a session that moved restores the visual state
    /// and yields an event; a press released in place is a click.
    pub fn on_release<L>(
        &mut self,
        layout: &mut L,
        pointer_x: f32,
    ) -> Option<TabReorderEvent<Id, Path>>
    where
        L: LayoutHost + ?Sized,
    {
        match self.session.phase {
            DragPhase::Idle => return None,
            DragPhase::Pressed => {
                tracing::debug!(host = ?self.host, pointer_x, "released without moving");
                self.session = DragSession::default();
                return None;
            }
            DragPhase::Dragging => {}
        }

        self.restore_layout(layout);
        let target_item_position = self.session.current_index;
        self.session = DragSession::default();

        tracing::debug!(
            host = ?self.host,
            id = ?self.data.id,
            pointer_x,
            target_item_position,
            "drag completed"
        );
        Some(TabReorderEvent {
            movable_item_id: self.data.id.clone(),
            target_item_position,
            path: self.data.path.clone(),
        })
    }

    /// Abandon the current session without emitting an event.
    ///
    /// A drag in progress has its visual state undone as on release. Returns
    /// whether there was a session to abandon.
    pub fn cancel<L>(&mut self, layout: &mut L) -> bool
    where
        L: LayoutHost + ?Sized,
    {
        let phase = self.session.phase;
        if phase.has_moved() {
            self.restore_layout(layout);
        }
        self.session = DragSession::default();
        if phase.is_pressed() {
            tracing::debug!(host = ?self.host, ?phase, "drag session cancelled");
        }
        phase.is_pressed()
    }

    /// Undo every layout write made by `on_move`.
    fn restore_layout<L>(&self, layout: &mut L)
    where
        L: LayoutHost + ?Sized,
    {
        layout.remove_class(self.host, &self.config.dragging_class);
        if let Some(gap) = self.session.current_index.checked_sub(1) {
            self.set_sibling_margin(layout, gap, 0.0);
        }
        let previous = match self.session.destination_index {
            index if index > 1 => index - 1,
            _ => 1,
        };
        self.set_sibling_margin(layout, previous, 0.0);
        layout.set_left(self.host, 0.0);
    }

    fn set_sibling_margin<L>(&self, layout: &mut L, index: usize, margin: f32)
    where
        L: LayoutHost + ?Sized,
    {
        if let Some(&sibling) = self.siblings.get(index) {
            layout.set_margin_right(sibling, margin);
        }
    }
}

impl<Id, Path> ReorderBehavior<Id, Path> {
    /// Release the document listeners and drop any session.
    ///
    /// Returns whether listeners were released; later calls are no-ops.
    pub fn teardown(&mut self, registry: &mut ListenerRegistry) -> bool {
        self.session = DragSession::default();
        match self.listeners.take() {
            Some(listeners) => {
                listeners.release(registry);
                tracing::debug!(host = ?self.host, "reorder behavior torn down");
                true
            }
            None => false,
        }
    }
}

impl<Id, Path> Drop for ReorderBehavior<Id, Path> {
    fn drop(&mut self) {
        if self.listeners.is_some() {
            tracing::warn!(
                host = ?self.host,
                "reorder behavior dropped without teardown, document listeners leaked"
            );
        }
    }
}
