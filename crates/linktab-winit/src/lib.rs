//! Pointer event plumbing for linktab.
//!
//! Converts `winit` window events into the small [`event::Event`] model the
//! reorder system consumes, and batches them per frame.

pub mod event;

pub use event::{Event, EventBatch, EventQueue, HandleStatus, MouseButton};
