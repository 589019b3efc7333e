//! Value screen
//!
//! Shows one value centered below the title bar, e.g. a sensor reading.

use heapless::String;

use super::draw_titlebar;
use crate::error::Error;
use crate::layout::Layout;
use crate::surface::{Color, DisplaySurface};

/// Maximum value length in bytes
pub const MAX_VALUE_LEN: usize = 24;

/// State of a value screen
#[derive(Debug, Clone, Default)]
pub struct ValueState {
    value: String<MAX_VALUE_LEN>,
}

impl ValueState {
    /// Create with the given text, truncated on a char boundary
    pub fn new(value: &str) -> Self {
        let mut state = Self::default();
        state.set(value);
        state
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Replace the text, truncated on a char boundary
    pub fn set(&mut self, value: &str) {
        self.value.clear();
        for ch in value.chars() {
            if self.value.push(ch).is_err() {
                break;
            }
        }
    }

    /// Full repaint with the value centered at mid-height
    pub fn redraw<S>(&self, title: Option<&str>, surface: &mut S, layout: &Layout) -> Result<(), Error>
    where
        S: DisplaySurface + ?Sized,
    {
        surface.fill(Color::Off)?;
        draw_titlebar(title, surface, layout)?;

        let x = surface.width().saturating_sub(layout.text_width(&self.value)) / 2;
        let y = surface.height().saturating_sub(layout.char_height) / 2;
        surface.text(&self.value, x, y, Color::On)?;

        surface.show()?;
        Ok(())
    }
}
