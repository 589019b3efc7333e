//! Display surface abstraction
//!
//! Screens draw through this trait and never touch the panel driver
//! directly. Implementations exist for framebuffer drivers (see the
//! `monomenu-display` crate) and for host-side recording.

pub mod recording;

pub use recording::{DrawOp, RecordingSurface, MAX_RECORDED_OPS, MAX_RECORDED_TEXT};

/// Pixel color on a 1-bit display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Background (pixel off)
    #[default]
    Off,
    /// Foreground (pixel lit)
    On,
}

impl Color {
    /// The opposite color
    pub fn invert(self) -> Self {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }

    /// Returns true if the pixel is lit
    pub fn is_on(self) -> bool {
        self == Color::On
    }
}

impl From<bool> for Color {
    fn from(lit: bool) -> Self {
        if lit {
            Color::On
        } else {
            Color::Off
        }
    }
}

/// Display surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication error with the display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Buffer overflow
    BufferOverflow,
}

/// Drawing surface of a monochrome pixel display
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Drawing calls only touch the frame buffer; nothing reaches the panel
/// until `show` is called.
pub trait DisplaySurface {
    /// Width in pixels, constant for the lifetime of the surface
    fn width(&self) -> u16;

    /// Height in pixels, constant for the lifetime of the surface
    fn height(&self) -> u16;

    /// Fill the entire surface with one color
    fn fill(&mut self, color: Color) -> Result<(), SurfaceError>;

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError>;

    /// Draw a rectangle outline
    fn rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    fn text(&mut self, text: &str, x: u16, y: u16, color: Color) -> Result<(), SurfaceError>;

    /// Commit the drawn frame to the display
    fn show(&mut self) -> Result<(), SurfaceError>;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn height(&self) -> u16 {
        (**self).height()
    }

    fn fill(&mut self, color: Color) -> Result<(), SurfaceError> {
        (**self).fill(color)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError> {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError> {
        (**self).rect(x, y, width, height, color)
    }

    fn text(&mut self, text: &str, x: u16, y: u16, color: Color) -> Result<(), SurfaceError> {
        (**self).text(text, x, y, color)
    }

    fn show(&mut self) -> Result<(), SurfaceError> {
        (**self).show()
    }
}
