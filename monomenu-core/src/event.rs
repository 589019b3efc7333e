//! Input events delivered by the host loop
//!
//! The host polls its buttons (debouncing is its business) and feeds one
//! `Event` at a time into the `DisplayManager`.

/// Input events routed to the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Move the selection up
    Up,
    /// Move the selection down
    Down,
    /// Reserved, no effect
    Left,
    /// Reserved, no effect
    Right,
    /// Select button pressed
    ButtonDown,
    /// Reserved, no effect
    ButtonUp,
    /// Repaint the active screen
    Redraw,
}

// Wire format values
const EVENT_UP: u8 = 0;
const EVENT_DOWN: u8 = 1;
const EVENT_LEFT: u8 = 2;
const EVENT_RIGHT: u8 = 3;
const EVENT_BUTTON_DOWN: u8 = 4;
const EVENT_BUTTON_UP: u8 = 5;
const EVENT_REDRAW: u8 = 6;

impl Event {
    /// Parse an event from its numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            EVENT_UP => Some(Event::Up),
            EVENT_DOWN => Some(Event::Down),
            EVENT_LEFT => Some(Event::Left),
            EVENT_RIGHT => Some(Event::Right),
            EVENT_BUTTON_DOWN => Some(Event::ButtonDown),
            EVENT_BUTTON_UP => Some(Event::ButtonUp),
            EVENT_REDRAW => Some(Event::Redraw),
            _ => None,
        }
    }

    /// Convert to the numeric code
    pub fn code(self) -> u8 {
        match self {
            Event::Up => EVENT_UP,
            Event::Down => EVENT_DOWN,
            Event::Left => EVENT_LEFT,
            Event::Right => EVENT_RIGHT,
            Event::ButtonDown => EVENT_BUTTON_DOWN,
            Event::ButtonUp => EVENT_BUTTON_UP,
            Event::Redraw => EVENT_REDRAW,
        }
    }

    /// Returns true for events that are accepted but never acted on
    pub fn is_reserved(&self) -> bool {
        matches!(self, Event::Left | Event::Right | Event::ButtonUp)
    }
}
