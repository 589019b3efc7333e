//! Display manager
//!
//! Owns the display surface and the screen graph, keeps track of the one
//! active screen and routes every input event to it.

use crate::error::Error;
use crate::event::Event;
use crate::layout::Layout;
use crate::screen::{Screen, ScreenGraph, ScreenId};
use crate::surface::DisplaySurface;

/// Active-screen state machine
///
/// Exactly one screen is active at a time. Transitions are synchronous:
/// when `handle_event` returns, the new screen is active and painted.
pub struct DisplayManager<'a, S: DisplaySurface> {
    surface: S,
    screens: ScreenGraph<'a>,
    layout: Layout,
    active: ScreenId,
}

impl<'a, S: DisplaySurface> DisplayManager<'a, S> {
    /// Create a manager with the default layout and `start` active
    ///
    /// Nothing is drawn until the first `redraw` or `Event::Redraw`.
    pub fn new(surface: S, screens: ScreenGraph<'a>, start: ScreenId) -> Result<Self, Error> {
        Self::with_layout(surface, screens, start, Layout::default())
    }

    /// Create a manager with a custom layout
    pub fn with_layout(
        surface: S,
        mut screens: ScreenGraph<'a>,
        start: ScreenId,
        layout: Layout,
    ) -> Result<Self, Error> {
        layout.validate()?;
        screens.validate()?;

        let screen = screens.get_mut(start).ok_or(Error::UnknownScreen(start))?;
        screen.register(&surface, &layout);

        Ok(Self {
            surface,
            screens,
            layout,
            active: start,
        })
    }

    /// Id of the active screen
    pub fn active(&self) -> ScreenId {
        self.active
    }

    pub fn active_screen(&self) -> &Screen<'a> {
        &self.screens[self.active]
    }

    pub fn screen(&self, id: ScreenId) -> Option<&Screen<'a>> {
        self.screens.get(id)
    }

    pub fn screens(&self) -> &ScreenGraph<'a> {
        &self.screens
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give back the surface and the graph
    pub fn release(self) -> (S, ScreenGraph<'a>) {
        (self.surface, self.screens)
    }

    /// Repaint the active screen
    pub fn redraw(&mut self) -> Result<(), Error> {
        self.screens[self.active].redraw(&mut self.surface, &self.layout)
    }

    /// Make `target` the active screen and repaint it
    ///
    /// With `descend` the current screen is recorded as the target's back
    /// reference, so a later Back returns here.
    pub fn transition(&mut self, target: ScreenId, descend: bool) -> Result<(), Error> {
        let previous = self.active;
        let screen = self
            .screens
            .get_mut(target)
            .ok_or(Error::UnknownScreen(target))?;

        if descend {
            screen.set_back(previous);
        }
        screen.register(&self.surface, &self.layout);
        self.active = target;

        debug!(
            "screen {} -> {} (descend: {})",
            previous.index(),
            target.index(),
            descend
        );
        self.redraw()
    }

    /// Route an event to the active screen
    ///
    /// A transition requested by the screen is applied before the item
    /// callback runs; callback errors are returned as-is.
    pub fn handle_event(&mut self, event: Event) -> Result<(), Error> {
        let origin = self.active;
        let response =
            self.screens[origin].handle_event(event, &mut self.surface, &self.layout)?;

        if let Some(transition) = response.transition {
            self.transition(transition.target, transition.descend)?;
        }
        if let Some(callback) = response.callback {
            callback(&self.screens[origin])?;
        }
        Ok(())
    }

    /// Route a raw event code; unknown codes are ignored
    pub fn handle_code(&mut self, code: u8) -> Result<(), Error> {
        match Event::from_code(code) {
            Some(event) => self.handle_event(event),
            None => {
                trace!("ignoring unknown event code {}", code);
                Ok(())
            }
        }
    }

    /// Replace the text of a value screen, repainting it if active
    pub fn set_value(&mut self, id: ScreenId, value: &str) -> Result<(), Error> {
        let screen = self.screens.get_mut(id).ok_or(Error::UnknownScreen(id))?;
        screen
            .as_value_mut()
            .ok_or(Error::WrongScreenKind(id))?
            .set(value);

        if id == self.active {
            self.redraw()?;
        }
        Ok(())
    }
}
