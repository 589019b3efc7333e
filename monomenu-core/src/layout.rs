//! Screen layout configuration
//!
//! Pixel geometry shared by all screens: title bar height, menu row height,
//! margins and the font cell size used to place text.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Pixel geometry of the title bar, menu rows and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Height of the inverted title band
    pub title_height: u16,
    /// Height of one menu row
    pub item_height: u16,
    /// Title text offset from the top edge
    pub top_margin: u16,
    /// Text offset from the left edge
    pub left_margin: u16,
    /// Marker offset from the right edge
    pub right_margin: u16,
    /// Font cell width
    pub char_width: u16,
    /// Font cell height
    pub char_height: u16,
    /// Side of the toggle marker box
    pub marker_size: u16,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title_height: 16,
            item_height: 12,
            top_margin: 2,
            left_margin: 5,
            right_margin: 5,
            char_width: 6,
            char_height: 10,
            marker_size: 6,
        }
    }
}

impl Layout {
    /// Check that a menu row can be laid out at all
    pub fn validate(&self) -> Result<(), Error> {
        if self.item_height == 0 || self.char_width == 0 {
            return Err(Error::InvalidLayout);
        }
        Ok(())
    }

    /// Number of menu rows that fit below the title bar
    ///
    /// Never less than one, so a menu on a tiny surface still has a
    /// selectable row.
    pub fn items_on_screen(&self, surface_height: u16) -> usize {
        let rows = surface_height.saturating_sub(self.title_height) / self.item_height.max(1);
        usize::from(rows).max(1)
    }

    /// Top edge of a visible menu row
    pub fn row_top(&self, line: usize) -> u16 {
        let line = u16::try_from(line).unwrap_or(u16::MAX);
        self.title_height
            .saturating_add(line.saturating_mul(self.item_height))
    }

    /// Vertical text offset that centers a glyph cell inside a menu row
    pub fn row_text_offset(&self) -> u16 {
        self.item_height.saturating_sub(self.char_height) / 2
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, text: &str) -> u16 {
        let chars = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        chars.saturating_mul(self.char_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let layout = Layout::default();
        // 128x64 panel: (64 - 16) / 12
        assert_eq!(layout.items_on_screen(64), 4);
        assert_eq!(layout.items_on_screen(52), 3);
        assert_eq!(layout.row_top(0), 16);
        assert_eq!(layout.row_top(2), 40);
        assert_eq!(layout.row_text_offset(), 1);
    }

    #[test]
    fn test_tiny_surface_keeps_one_row() {
        let layout = Layout::default();
        assert_eq!(layout.items_on_screen(10), 1);
        assert_eq!(layout.items_on_screen(0), 1);
    }

    #[test]
    fn test_text_width() {
        let layout = Layout::default();
        assert_eq!(layout.text_width(""), 0);
        assert_eq!(layout.text_width("42"), 12);
        assert_eq!(layout.text_width("25°C"), 24);
    }

    #[test]
    fn test_validate() {
        assert!(Layout::default().validate().is_ok());

        let flat = Layout {
            item_height: 0,
            ..Layout::default()
        };
        assert_eq!(flat.validate(), Err(Error::InvalidLayout));

        let narrow = Layout {
            char_width: 0,
            ..Layout::default()
        };
        assert_eq!(narrow.validate(), Err(Error::InvalidLayout));
    }
}
