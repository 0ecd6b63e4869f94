//! Linktab - drag-and-drop reordering for tab strips
//!
//! Linktab lets the user drag a tab along its strip. The dragged tab follows
//! the pointer, a gap opens where it would land, and on release the owning
//! application receives a single event naming the tab and its new slot.
//!
//! - **Core**: collections, logging and profiling setup, configuration
//! - **Events**: winit pointer events batched per frame
//! - **UI**: Taffy laid out tab strips, reorder behaviors and their dispatcher
//!
//! # Quick Start
//!
//! ```rust
//! use linktab::prelude::*;
//!
//! let mut tree = UiTree::new();
//! let strip = tree.tab_strip(800.0, 28.0).unwrap();
//! tree.add_tab(strip, 80.0).unwrap();
//! let tab = tree.add_tab(strip, 80.0).unwrap();
//! tree.add_tab(strip, 80.0).unwrap();
//!
//! let mut system = ReorderSystem::new();
//! system.attach(tab, DragItemData::new("docs", "/links"), &mut tree).unwrap();
//!
//! let mut batch = EventBatch::new(vec![
//!     Event::MouseMoved(Vec2::new(100.0, 10.0)),
//!     Event::MouseButtonDown(MouseButton::Left),
//!     Event::MouseMoved(Vec2::new(200.0, 10.0)),
//!     Event::MouseButtonUp(MouseButton::Left),
//! ]);
//! for event in system.handle_events(&mut batch, &mut tree) {
//!     println!("{:?} moved to {}", event.movable_item_id, event.target_item_position);
//! }
//! ```

// Re-export core types
pub use linktab_core as core;
pub use linktab_core::{logging, math};

pub use linktab_ui as ui;
pub use linktab_winit as winit;

/// Prelude module for convenient imports
pub mod prelude {
    pub use linktab_core::config::ReorderConfig;
    pub use linktab_core::math::Vec2;

    pub use linktab_winit::{Event, EventBatch, EventQueue, HandleStatus, MouseButton};

    pub use linktab_ui::{
        DragItemData, DragPhase, LayoutHost, NodeId, ReorderBehavior, ReorderError,
        ReorderResult, ReorderSystem, TabOrder, TabReorderEvent, UiTree,
    };
}
