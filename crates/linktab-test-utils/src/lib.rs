//! Test utilities for Linktab.
//!
//! This crate provides a [`MockLayout`], a [`LayoutHost`] with fixed geometry
//! that records every write made through it. It lets reorder behaviors be
//! exercised against exact offsets without running a layout engine.
//!
//! # Example
//!
//! ```rust
//! use linktab_core::config::ReorderConfig;
//! use linktab_test_utils::{LayoutCall, MockLayout};
//! use linktab_ui::{DragItemData, ListenerRegistry, ReorderBehavior};
//!
//! let (mut layout, nodes) = MockLayout::row(&[0.0, 80.0, 80.0, 160.0, 240.0], 80.0);
//! let mut registry = ListenerRegistry::new();
//! let mut behavior = ReorderBehavior::new(
//!     nodes[1],
//!     DragItemData::new("tab", ()),
//!     ReorderConfig::default(),
//!     &mut registry,
//! );
//!
//! behavior.on_press(&mut layout, 100.0);
//! behavior.on_move(&mut layout, 190.0);
//! assert!(layout.calls().contains(&LayoutCall::SetLeft { node: nodes[1], left: 170.0 }));
//! behavior.teardown(&mut registry);
//! ```

pub mod mock_layout;

pub use mock_layout::*;
