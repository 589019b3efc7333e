//! Screens
//!
//! A screen is one full-surface unit of content together with its event
//! handling. Screens never switch the display themselves: they return a
//! `Response` and the `DisplayManager` performs the transition.

pub mod graph;
pub mod menu;
pub mod value;

pub use graph::{ScreenGraph, MAX_SCREENS};
pub use menu::MenuState;
pub use value::{ValueState, MAX_VALUE_LEN};

use crate::error::Error;
use crate::event::Event;
use crate::item::{Callback, MenuItem};
use crate::layout::Layout;
use crate::surface::{Color, DisplaySurface};

/// Index of a screen inside a `ScreenGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenId(u8);

impl ScreenId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Screen change requested by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Screen to activate
    pub target: ScreenId,
    /// Record the current screen as the target's back reference
    pub descend: bool,
}

/// Outcome of handling one event
///
/// The manager applies `transition` first and then runs `callback` with the
/// screen that produced the response.
#[derive(Clone, Default)]
pub struct Response<'a> {
    pub transition: Option<Transition>,
    pub callback: Option<Callback<'a>>,
}

impl<'a> Response<'a> {
    /// Nothing for the manager to do
    pub const fn none() -> Self {
        Self {
            transition: None,
            callback: None,
        }
    }

    /// Switch to another screen
    pub const fn transition(target: ScreenId, descend: bool) -> Self {
        Self {
            transition: Some(Transition { target, descend }),
            callback: None,
        }
    }

    /// Return to `back`, if there is anywhere to return to
    pub(crate) fn ascend(back: Option<ScreenId>) -> Self {
        match back {
            Some(target) => Self::transition(target, false),
            None => {
                warn!("no screen to return to");
                Self::none()
            }
        }
    }
}

/// Per-kind screen state
#[derive(Debug, Clone)]
pub enum ScreenKind<'a> {
    /// Clears the display, nothing else
    Blank,
    /// Title bar only
    Title,
    /// Scrollable menu
    Menu(MenuState<'a>),
    /// Single value, any button press returns
    Value(ValueState),
}

/// A node of the navigation graph
#[derive(Debug, Clone)]
pub struct Screen<'a> {
    title: Option<&'a str>,
    /// Screen this one was entered from, captured on descent
    back: Option<ScreenId>,
    kind: ScreenKind<'a>,
}

impl<'a> Screen<'a> {
    /// Screen that only clears the display
    pub const fn blank() -> Self {
        Self {
            title: None,
            back: None,
            kind: ScreenKind::Blank,
        }
    }

    /// Screen showing only a title bar
    pub const fn titled(title: &'a str) -> Self {
        Self {
            title: Some(title),
            back: None,
            kind: ScreenKind::Title,
        }
    }

    /// Menu screen
    ///
    /// Fails with `InvalidMenuState` for an empty item list or an `active`
    /// index past the end, and with `CapacityExceeded` for more than
    /// `MAX_MENU_ITEMS` items.
    pub fn menu(
        title: Option<&'a str>,
        items: &[MenuItem<'a>],
        active: usize,
    ) -> Result<Self, Error> {
        Ok(Self {
            title,
            back: None,
            kind: ScreenKind::Menu(MenuState::new(items, active)?),
        })
    }

    /// Value screen, text longer than `MAX_VALUE_LEN` is truncated
    pub fn value(title: Option<&'a str>, value: &str) -> Self {
        Self {
            title,
            back: None,
            kind: ScreenKind::Value(ValueState::new(value)),
        }
    }

    pub fn title(&self) -> Option<&'a str> {
        self.title
    }

    /// Screen this one returns to
    pub fn back(&self) -> Option<ScreenId> {
        self.back
    }

    pub(crate) fn set_back(&mut self, back: ScreenId) {
        self.back = Some(back);
    }

    pub fn kind(&self) -> &ScreenKind<'a> {
        &self.kind
    }

    pub fn as_menu(&self) -> Option<&MenuState<'a>> {
        match &self.kind {
            ScreenKind::Menu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&ValueState> {
        match &self.kind {
            ScreenKind::Value(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn as_value_mut(&mut self) -> Option<&mut ValueState> {
        match &mut self.kind {
            ScreenKind::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Bind the screen to a surface before it becomes active
    ///
    /// Recomputes everything derived from the surface size. Idempotent.
    pub fn register<S>(&mut self, surface: &S, layout: &Layout)
    where
        S: DisplaySurface + ?Sized,
    {
        if let ScreenKind::Menu(menu) = &mut self.kind {
            menu.cache_geometry(surface.height(), layout);
        }
    }

    /// Handle one input event
    pub fn handle_event<S>(
        &mut self,
        event: Event,
        surface: &mut S,
        layout: &Layout,
    ) -> Result<Response<'a>, Error>
    where
        S: DisplaySurface + ?Sized,
    {
        if event == Event::Redraw {
            self.redraw(surface, layout)?;
            return Ok(Response::none());
        }
        if event.is_reserved() {
            trace!("reserved event {} ignored", event.code());
            return Ok(Response::none());
        }

        let title = self.title;
        let back = self.back;

        match (&mut self.kind, event) {
            (ScreenKind::Menu(menu), Event::Up) => {
                menu.move_up(title, surface, layout)?;
                Ok(Response::none())
            }
            (ScreenKind::Menu(menu), Event::Down) => {
                menu.move_down(title, surface, layout)?;
                Ok(Response::none())
            }
            (ScreenKind::Menu(menu), Event::ButtonDown) => menu.press(back, surface, layout),
            (ScreenKind::Value(_), Event::ButtonDown) => Ok(Response::ascend(back)),
            // Navigation on screens without a cursor
            _ => Ok(Response::none()),
        }
    }

    /// Repaint the whole screen and flush
    pub fn redraw<S>(&self, surface: &mut S, layout: &Layout) -> Result<(), Error>
    where
        S: DisplaySurface + ?Sized,
    {
        match &self.kind {
            ScreenKind::Blank => {
                surface.fill(Color::Off)?;
                surface.show()?;
            }
            ScreenKind::Title => {
                surface.fill(Color::Off)?;
                draw_titlebar(self.title, surface, layout)?;
                surface.show()?;
            }
            ScreenKind::Menu(menu) => menu.redraw(self.title, surface, layout)?,
            ScreenKind::Value(value) => value.redraw(self.title, surface, layout)?,
        }
        Ok(())
    }
}

/// Paint the inverted title band, with the title text if there is one
pub(crate) fn draw_titlebar<S>(
    title: Option<&str>,
    surface: &mut S,
    layout: &Layout,
) -> Result<(), Error>
where
    S: DisplaySurface + ?Sized,
{
    surface.fill_rect(0, 0, surface.width(), layout.title_height, Color::On)?;
    if let Some(title) = title {
        surface.text(title, layout.left_margin, layout.top_margin, Color::Off)?;
    }
    Ok(())
}
