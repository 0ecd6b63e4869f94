//! Linktab UI - drag-to-reorder for tab strips
//!
//! This crate provides pointer-driven reordering of tab-like elements:
//! - An element tree laid out by Taffy (flex rows of tabs)
//! - A [`LayoutHost`] trait, the whole contract with the rendering side
//! - Document-scoped listener registration with explicit teardown
//! - [`ReorderBehavior`], the per-tab press/move/release state machine
//! - [`ReorderSystem`], which routes batched pointer events to behaviors
//! - [`TabOrder`], the application-side order reorder events are applied to
//!
//! ## Quick Start
//!
//! ```rust
//! use linktab_core::math::Vec2;
//! use linktab_ui::{DragItemData, ReorderSystem, TabOrder, UiTree};
//! use linktab_winit::{Event, EventBatch, MouseButton};
//!
//! let mut tree = UiTree::new();
//! let strip = tree.tab_strip(800.0, 28.0).unwrap();
//! let search = tree.add_tab(strip, 80.0).unwrap();
//! let tabs: Vec<_> = (0..4).map(|_| tree.add_tab(strip, 80.0).unwrap()).collect();
//!
//! let mut system = ReorderSystem::new();
//! for (i, &tab) in tabs.iter().enumerate() {
//!     system.attach(tab, DragItemData::new(i, "/links"), &mut tree).unwrap();
//! }
//!
//! // Drag the first movable tab (at x = 80) to the far right.
//! let mut batch = EventBatch::new(vec![
//!     Event::MouseMoved(Vec2::new(90.0, 10.0)),
//!     Event::MouseButtonDown(MouseButton::Left),
//!     Event::MouseMoved(Vec2::new(330.0, 10.0)),
//!     Event::MouseButtonUp(MouseButton::Left),
//! ]);
//! let completed = system.handle_events(&mut batch, &mut tree);
//! assert_eq!(completed.len(), 1);
//!
//! let mut order: TabOrder<_> = std::iter::once(usize::MAX).chain(0..4).collect();
//! order.apply(&completed[0]).unwrap();
//! # let _ = search;
//! ```

pub mod error;
pub mod layout;
pub mod listener;
pub mod reorder;
pub mod store;
pub mod system;
pub mod tree;

pub use error::{ReorderError, ReorderResult};
pub use layout::{LayoutHost, LayoutRect};
pub use listener::{GlobalListeners, ListenerId, ListenerKind, ListenerRegistry};
pub use reorder::{
    DragItemData, DragPhase, DragSession, ReorderBehavior, TabReorderEvent, generate_weights,
    nearest_slot,
};
pub use store::TabOrder;
pub use system::ReorderSystem;
pub use tree::{DEFAULT_STRIP_HEIGHT, NodeId, UiNode, UiTree};

pub use linktab_core::config::ReorderConfig;
