//! Math types used for pointer positions and layout measurements.
//!
//! Re-exports the SIMD-accelerated [`glam`] types. Only the 2D subset is
//! meaningful for a horizontal tab strip, but the whole crate is exposed so
//! callers do not need a direct `glam` dependency.
//!
//! ```
//! use linktab_core::math::Vec2;
//!
//! let press = Vec2::new(100.0, 12.0);
//! let cursor = Vec2::new(180.0, 14.0);
//! assert_eq!((cursor - press).x, 80.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam
pub use glam::*;
