//! Board-agnostic menu engine for small monochrome displays
//!
//! This crate contains everything between the button driver and the pixel
//! driver:
//!
//! - Input events (`Event`) with their wire codes
//! - The `DisplaySurface` trait screens draw on
//! - Screen kinds (blank, title, menu, value) and menu item kinds
//! - The scrollable menu with incremental row repaint
//! - `DisplayManager`, which owns the active screen and performs transitions
//!
//! # Example
//!
//! ```
//! use monomenu_core::{DisplayManager, Event, MenuItem, RecordingSurface, Screen, ScreenGraph};
//!
//! let mut graph = ScreenGraph::new();
//! let settings = graph.add(Screen::menu(
//!     Some("Settings"),
//!     &[MenuItem::toggle("Wi-Fi", false), MenuItem::back("Back")],
//!     0,
//! )?)?;
//! let main = graph.add(Screen::menu(
//!     Some("Main"),
//!     &[MenuItem::submenu("Settings", settings)],
//!     0,
//! )?)?;
//!
//! let mut dm = DisplayManager::new(RecordingSurface::new(128, 64), graph, main)?;
//! dm.redraw()?;
//! dm.handle_event(Event::ButtonDown)?;
//! assert_eq!(dm.active(), settings);
//! # Ok::<(), monomenu_core::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod error;
pub mod event;
pub mod item;
pub mod layout;
pub mod manager;
pub mod screen;
pub mod surface;

pub use error::Error;
pub use event::Event;
pub use item::{Callback, ItemKind, Marker, MenuItem, MAX_MENU_ITEMS};
pub use layout::Layout;
pub use manager::DisplayManager;
pub use screen::{
    MenuState, Response, Screen, ScreenGraph, ScreenId, ScreenKind, Transition, ValueState,
    MAX_SCREENS, MAX_VALUE_LEN,
};
pub use surface::{Color, DisplaySurface, DrawOp, RecordingSurface, SurfaceError};
