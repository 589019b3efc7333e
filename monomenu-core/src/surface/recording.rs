//! Recording surface
//!
//! A `DisplaySurface` that keeps a log of drawing calls instead of pixels.
//! Used on the host to check exactly what a screen repainted.

use heapless::{String, Vec};

use super::{Color, DisplaySurface, SurfaceError};

/// Maximum number of operations kept between `clear_ops` calls
pub const MAX_RECORDED_OPS: usize = 128;

/// Maximum recorded text length per `text` call
pub const MAX_RECORDED_TEXT: usize = 24;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// `fill(color)`
    Fill(Color),
    /// `fill_rect(x, y, width, height, color)`
    FillRect {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    },
    /// `rect(x, y, width, height, color)`
    Rect {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    },
    /// `text(text, x, y, color)`, text truncated to `MAX_RECORDED_TEXT`
    Text {
        text: String<MAX_RECORDED_TEXT>,
        x: u16,
        y: u16,
        color: Color,
    },
    /// `show()`
    Show,
}

/// Surface that records drawing calls
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u16,
    height: u16,
    ops: Vec<DrawOp, MAX_RECORDED_OPS>,
    /// Number of `show` calls since creation
    frames: u32,
    /// Set when an operation was dropped because the log was full
    overflowed: bool,
}

impl RecordingSurface {
    /// Create a surface with the given pixel size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            frames: 0,
            overflowed: false,
        }
    }

    /// Recorded operations, oldest first
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget recorded operations (the frame counter is kept)
    pub fn clear_ops(&mut self) {
        self.ops.clear();
        self.overflowed = false;
    }

    /// Number of committed frames
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Check if operations were dropped since the last `clear_ops`
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Recorded text strings, oldest first
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Top edges of full-width filled rectangles (row bands and title bars)
    pub fn bands(&self) -> impl Iterator<Item = (u16, Color)> + '_ {
        let width = self.width;
        self.ops.iter().filter_map(move |op| match *op {
            DrawOp::FillRect {
                x: 0,
                y,
                width: w,
                color,
                ..
            } if w == width => Some((y, color)),
            _ => None,
        })
    }

    fn record(&mut self, op: DrawOp) {
        if self.ops.push(op).is_err() {
            self.overflowed = true;
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn fill(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.record(DrawOp::Fill(color));
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError> {
        self.record(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError> {
        self.record(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn text(&mut self, text: &str, x: u16, y: u16, color: Color) -> Result<(), SurfaceError> {
        let mut recorded = String::new();
        for ch in text.chars() {
            if recorded.push(ch).is_err() {
                break;
            }
        }
        self.record(DrawOp::Text {
            text: recorded,
            x,
            y,
            color,
        });
        Ok(())
    }

    fn show(&mut self) -> Result<(), SurfaceError> {
        self.frames += 1;
        self.record(DrawOp::Show);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new(128, 64);
        surface.fill(Color::Off).unwrap();
        surface.fill_rect(0, 16, 128, 12, Color::On).unwrap();
        surface.text("Hello", 5, 17, Color::Off).unwrap();
        surface.show().unwrap();

        assert_eq!(surface.ops().len(), 4);
        assert_eq!(surface.ops()[0], DrawOp::Fill(Color::Off));
        assert_eq!(surface.ops()[3], DrawOp::Show);
        assert_eq!(surface.texts().collect::<std::vec::Vec<_>>(), ["Hello"]);
        assert_eq!(surface.bands().collect::<std::vec::Vec<_>>(), [(16, Color::On)]);
        assert_eq!(surface.frames(), 1);
    }

    #[test]
    fn test_bands_skip_partial_rects() {
        let mut surface = RecordingSurface::new(128, 64);
        surface.fill_rect(117, 19, 6, 6, Color::On).unwrap();
        assert_eq!(surface.bands().count(), 0);
    }

    #[test]
    fn test_long_text_truncated() {
        let mut surface = RecordingSurface::new(128, 64);
        surface
            .text("This label is far too long to record", 0, 0, Color::On)
            .unwrap();
        let text = surface.texts().next().unwrap();
        assert_eq!(text.len(), MAX_RECORDED_TEXT);
        assert!(text.starts_with("This label"));
    }

    #[test]
    fn test_overflow_flag() {
        let mut surface = RecordingSurface::new(8, 8);
        for _ in 0..MAX_RECORDED_OPS + 1 {
            surface.show().unwrap();
        }
        assert!(surface.overflowed());
        assert_eq!(surface.ops().len(), MAX_RECORDED_OPS);
        assert_eq!(surface.frames(), MAX_RECORDED_OPS as u32 + 1);

        surface.clear_ops();
        assert!(!surface.overflowed());
        assert!(surface.ops().is_empty());
    }
}
