//! Linktab Core
//!
//! Shared building blocks for the linktab crates: collections, logging,
//! profiling hooks, math re-exports and reorder configuration.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;
