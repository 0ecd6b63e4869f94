//! Data carried in and out of a reorder behavior.

/// Per-host data supplied by the owning application.
///
/// `id` and `path` are opaque to the behavior; they are only echoed back in
/// the [`TabReorderEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItemData<Id, Path> {
    pub id: Id,
    pub path: Path,
    /// When false the behavior ignores presses entirely.
    pub is_draggable: bool,
}

impl<Id, Path> DragItemData<Id, Path> {
    pub fn new(id: Id, path: Path) -> Self {
        Self {
            id,
            path,
            is_draggable: true,
        }
    }

    pub fn draggable(mut self, is_draggable: bool) -> Self {
        self.is_draggable = is_draggable;
        self
    }
}

/// Emitted once per completed drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabReorderEvent<Id, Path> {
    pub movable_item_id: Id,
    /// Slot the host was dropped into, never below the configured minimum.
    pub target_item_position: usize,
    pub path: Path,
}

/// Where a behavior is in its press/move/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No pointer pressed on the host.
    #[default]
    Idle,
    /// Pressed, no movement yet. Releasing now is a click, not a reorder.
    Pressed,
    /// Pressed and moved at least once.
    Dragging,
}

impl DragPhase {
    pub fn is_pressed(&self) -> bool {
        !matches!(self, DragPhase::Idle)
    }

    pub fn has_moved(&self) -> bool {
        matches!(self, DragPhase::Dragging)
    }
}

/// Transient state of one press-to-release interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    pub phase: DragPhase,
    /// Host left offset minus pointer x, captured at press.
    pub offset_x: f32,
    /// The host is never drawn left of this offset.
    pub min_left_offset: f32,
    /// Slot computed by the last move.
    pub current_index: usize,
    /// Sibling currently holding the gap margin.
    pub destination_index: usize,
}
