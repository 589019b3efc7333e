//! Error type shared by the whole engine

use crate::screen::ScreenId;
use crate::surface::SurfaceError;

/// Engine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Menu built with no items or an out-of-range initial selection
    InvalidMenuState,
    /// Fixed-capacity storage is full
    CapacityExceeded,
    /// Screen id is not part of the graph
    UnknownScreen(ScreenId),
    /// Operation does not apply to this kind of screen
    WrongScreenKind(ScreenId),
    /// Layout cannot hold a single row
    InvalidLayout,
    /// Display surface failure
    Surface(SurfaceError),
    /// Failure reported by a menu item callback
    Callback(&'static str),
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Surface(err)
    }
}
