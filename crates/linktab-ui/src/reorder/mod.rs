//! Drag-to-reorder behavior for tab-like elements.
//!
//! A [`ReorderBehavior`] is attached to one host element inside a row of
//! siblings. While the pointer is held on the host it follows the pointer
//! horizontally, a gap opens at the sibling nearest to its center, and on
//! release a [`TabReorderEvent`] reports the slot it was dropped into.
//!
//! ```text
//! Idle --press--> Pressed --move--> Dragging --release--> Idle (event)
//!                    |                 ^  |
//!                    |                 +--+ move
//!                    +----release----> Idle (no event)
//! ```

pub mod behavior;
pub mod slot;
pub mod types;

pub use behavior::ReorderBehavior;
pub use slot::{generate_weights, nearest_slot};
pub use types::{DragItemData, DragPhase, DragSession, TabReorderEvent};
