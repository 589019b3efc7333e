//! Display surfaces for the monomenu engine
//!
//! This crate provides:
//! - `GraphicsSurface`, a `DisplaySurface` on top of any `embedded-graphics`
//!   draw target with `BinaryColor` pixels (SSD1306, SH1106, simulators, ...)
//! - `Flush` trait for committing a frame buffer to the panel
//!
//! # Architecture
//!
//! Panel drivers in the embedded-graphics ecosystem draw into a RAM frame
//! buffer and push it to the panel on request. `GraphicsSurface` maps the
//! engine's drawing primitives onto embedded-graphics primitives and calls
//! `Flush::flush` whenever a screen commits a frame.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod graphics;

// Re-export key types
pub use graphics::{Flush, GraphicsSurface};
