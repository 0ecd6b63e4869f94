//! Routes pointer events to reorder behaviors.

use std::fmt::Debug;

use indexmap::IndexMap;
use linktab_core::config::ReorderConfig;
use linktab_core::math::Vec2;
use linktab_core::profiling::profile_function;
use linktab_winit::event::{Event, EventBatch, HandleStatus, MouseButton};

use crate::error::ReorderResult;
use crate::layout::LayoutHost;
use crate::listener::{ListenerKind, ListenerRegistry};
use crate::reorder::{DragItemData, ReorderBehavior, TabReorderEvent};
use crate::tree::{NodeId, UiTree};

/// Owns the document listener registry and every attached reorder behavior.
///
/// Presses are delivered to the behavior of the element under the pointer.
/// Moves and releases go to every behavior holding a document listener of
/// that kind, whichever element the pointer is over.
pub struct ReorderSystem<Id, Path> {
    registry: ListenerRegistry,
    behaviors: IndexMap<NodeId, ReorderBehavior<Id, Path>>,
    config: ReorderConfig,
    pointer: Vec2,
}

impl<Id, Path> ReorderSystem<Id, Path>
where
    Id: Clone + Debug,
    Path: Clone,
{
    pub fn new() -> Self {
        Self::with_config(ReorderConfig::default())
    }

    pub fn with_config(config: ReorderConfig) -> Self {
        Self {
            registry: ListenerRegistry::new(),
            behaviors: IndexMap::new(),
            config,
            pointer: Vec2::ZERO,
        }
    }

    /// Attach a reorder behavior to `host`.
    ///
    /// Replaces (and detaches) any behavior already attached to `host`. On
    /// error nothing stays attached and no listener is leaked.
    pub fn attach<L>(
        &mut self,
        host: NodeId,
        data: DragItemData<Id, Path>,
        layout: &mut L,
    ) -> ReorderResult<()>
    where
        L: LayoutHost + ?Sized,
    {
        self.detach(host, &mut *layout);

        let mut behavior =
            ReorderBehavior::new(host, data, self.config.clone(), &mut self.registry);
        if let Err(err) = behavior.initialize(layout) {
            behavior.teardown(&mut self.registry);
            return Err(err);
        }
        self.behaviors.insert(host, behavior);
        Ok(())
    }

    /// Tear down and remove the behavior on `host`.
    ///
    /// A drag in progress on `host` is cancelled first, so its gap and
    /// pointer-following position do not outlive the behavior.
    pub fn detach<L>(&mut self, host: NodeId, layout: &mut L) -> bool
    where
        L: LayoutHost + ?Sized,
    {
        match self.behaviors.shift_remove(&host) {
            Some(mut behavior) => {
                behavior.cancel(layout);
                behavior.teardown(&mut self.registry);
                true
            }
            None => false,
        }
    }

    /// Tear down every behavior, cancelling any drag in progress.
    pub fn detach_all<L>(&mut self, layout: &mut L)
    where
        L: LayoutHost + ?Sized,
    {
        for (_, mut behavior) in self.behaviors.drain(..) {
            behavior.cancel(layout);
            behavior.teardown(&mut self.registry);
        }
    }

    /// Update the data of an attached behavior.
    pub fn set_item_data(&mut self, host: NodeId, data: DragItemData<Id, Path>) -> bool {
        match self.behaviors.get_mut(&host) {
            Some(behavior) => {
                behavior.set_data(data);
                true
            }
            None => false,
        }
    }

    pub fn behavior(&self, host: NodeId) -> Option<&ReorderBehavior<Id, Path>> {
        self.behaviors.get(&host)
    }

    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Last pointer position seen by [`handle_events`](Self::handle_events).
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    /// Whether any attached behavior is mid-drag.
    pub fn is_dragging(&self) -> bool {
        self.behaviors.values().any(|b| b.phase().has_moved())
    }

    /// Deliver a press on `host` to its behavior (the element-local listener).
    pub fn press<L>(&mut self, host: NodeId, pointer_x: f32, layout: &mut L) -> bool
    where
        L: LayoutHost + ?Sized,
    {
        self.behaviors
            .get_mut(&host)
            .is_some_and(|behavior| behavior.on_press(layout, pointer_x))
    }

    /// Deliver a document-level move to every move listener.
    ///
    /// Returns whether any behavior was dragging.
    pub fn pointer_moved<L>(&mut self, pointer_x: f32, layout: &mut L) -> bool
    where
        L: LayoutHost + ?Sized,
    {
        let mut moved = false;
        for owner in self.registry.owners(ListenerKind::PointerMove) {
            if let Some(behavior) = self.behaviors.get_mut(&owner) {
                moved |= behavior.on_move(layout, pointer_x).is_some();
            }
        }
        moved
    }

    /// Deliver a document-level release to every release listener.
    pub fn pointer_released<L>(
        &mut self,
        pointer_x: f32,
        layout: &mut L,
    ) -> Vec<TabReorderEvent<Id, Path>>
    where
        L: LayoutHost + ?Sized,
    {
        let mut completed = Vec::new();
        for owner in self.registry.owners(ListenerKind::PointerUp) {
            if let Some(behavior) = self.behaviors.get_mut(&owner) {
                completed.extend(behavior.on_release(layout, pointer_x));
            }
        }
        completed
    }

    /// Handle one frame of pointer events against `tree`.
    ///
    /// Returns the reorder events completed during the batch, in order.
    pub fn handle_events(
        &mut self,
        events: &mut EventBatch,
        tree: &mut UiTree,
    ) -> Vec<TabReorderEvent<Id, Path>> {
        profile_function!();
        let mut completed = Vec::new();

        events.dispatch(|event| match event {
            Event::MouseMoved(pos) => {
                self.pointer = *pos;
                if self.pointer_moved(pos.x, &mut *tree) {
                    HandleStatus::consumed()
                } else {
                    HandleStatus::ignored()
                }
            }
            Event::MouseButtonDown(MouseButton::Left) => {
                let Some(host) = self.host_at(self.pointer, &mut *tree) else {
                    return HandleStatus::ignored();
                };
                self.press(host, self.pointer.x, &mut *tree);
                // Presses on a host never reach elements beneath it.
                HandleStatus::consumed()
            }
            Event::MouseButtonUp(MouseButton::Left) => {
                let was_dragging = self.is_dragging();
                completed.extend(self.pointer_released(self.pointer.x, &mut *tree));
                if was_dragging {
                    HandleStatus::consumed()
                } else {
                    HandleStatus::ignored()
                }
            }
            _ => HandleStatus::ignored(),
        });

        completed
    }

    /// Nearest element at `point`, or ancestor of it, with a behavior attached.
    fn host_at(&self, point: Vec2, tree: &mut UiTree) -> Option<NodeId> {
        let mut node = tree.hit_test(point);
        while let Some(id) = node {
            if self.behaviors.contains_key(&id) {
                return Some(id);
            }
            node = tree.parent(id);
        }
        None
    }
}

impl<Id, Path> Default for ReorderSystem<Id, Path>
where
    Id: Clone + Debug,
    Path: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, Path> Drop for ReorderSystem<Id, Path> {
    fn drop(&mut self) {
        for (_, mut behavior) in self.behaviors.drain(..) {
            behavior.teardown(&mut self.registry);
        }
    }
}
