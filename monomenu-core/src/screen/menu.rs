//! Scrollable menu
//!
//! Keeps a window of `items_on_screen` rows over the item list. Moving the
//! selection inside the window repaints only the two affected rows; moving
//! past the window edge scrolls by one and repaints the whole screen.

use core::ops::Range;

use heapless::Vec;

use super::{draw_titlebar, Response};
use crate::error::Error;
use crate::item::{ItemKind, Marker, MenuItem, MAX_MENU_ITEMS};
use crate::layout::Layout;
use crate::screen::ScreenId;
use crate::surface::{Color, DisplaySurface};

/// Navigation state of a menu screen
///
/// Invariants, once registered:
/// - `active < items.len()`
/// - `top <= active <= top + items_on_screen - 1`
/// - `top <= items.len() - items_on_screen` when the list is longer than
///   the window, `top == 0` otherwise
#[derive(Debug, Clone)]
pub struct MenuState<'a> {
    items: Vec<MenuItem<'a>, MAX_MENU_ITEMS>,
    /// Highlighted item
    active: usize,
    /// First visible item
    top: usize,
    /// Visible rows, derived from the surface height on registration
    items_on_screen: usize,
}

impl<'a> MenuState<'a> {
    /// Create a menu with `active` highlighted
    pub fn new(items: &[MenuItem<'a>], active: usize) -> Result<Self, Error> {
        if items.is_empty() || active >= items.len() {
            return Err(Error::InvalidMenuState);
        }
        let items = Vec::from_slice(items).map_err(|_| Error::CapacityExceeded)?;

        // Window starts on the first page; registration scrolls it only as
        // far as needed to show `active`
        Ok(Self {
            items,
            active,
            top: 0,
            items_on_screen: 1,
        })
    }

    pub fn items(&self) -> &[MenuItem<'a>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the highlighted item
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Index of the first visible item
    pub fn top_index(&self) -> usize {
        self.top
    }

    pub fn items_on_screen(&self) -> usize {
        self.items_on_screen
    }

    pub fn active_item(&self) -> &MenuItem<'a> {
        &self.items[self.active]
    }

    /// Absolute indices of the visible items
    pub fn visible_range(&self) -> Range<usize> {
        self.top..(self.top + self.items_on_screen).min(self.items.len())
    }

    /// Recompute the window size and pull the window over the selection
    pub(crate) fn cache_geometry(&mut self, surface_height: u16, layout: &Layout) {
        self.items_on_screen = layout.items_on_screen(surface_height);

        let rows = self.items_on_screen;
        if self.top > self.active {
            self.top = self.active;
        }
        if self.active >= self.top + rows {
            self.top = self.active + 1 - rows;
        }
        self.top = self.top.min(self.items.len().saturating_sub(rows));
    }

    pub(crate) fn move_up<S>(
        &mut self,
        title: Option<&str>,
        surface: &mut S,
        layout: &Layout,
    ) -> Result<(), Error>
    where
        S: DisplaySurface + ?Sized,
    {
        if self.active == 0 {
            return Ok(());
        }

        let prev = self.active;
        self.active -= 1;
        let prev_line = prev - self.top;

        if prev_line == 0 {
            self.top -= 1;
            trace!("menu scrolled up, top={}", self.top);
            self.redraw(title, surface, layout)
        } else {
            self.draw_item(prev_line, surface, layout)?;
            self.draw_item(prev_line - 1, surface, layout)?;
            surface.show()?;
            Ok(())
        }
    }

    pub(crate) fn move_down<S>(
        &mut self,
        title: Option<&str>,
        surface: &mut S,
        layout: &Layout,
    ) -> Result<(), Error>
    where
        S: DisplaySurface + ?Sized,
    {
        if self.active + 1 >= self.items.len() {
            return Ok(());
        }

        let prev = self.active;
        self.active += 1;
        let prev_line = prev - self.top;

        if prev_line == self.items_on_screen - 1 {
            self.top += 1;
            trace!("menu scrolled down, top={}", self.top);
            self.redraw(title, surface, layout)
        } else {
            self.draw_item(prev_line, surface, layout)?;
            self.draw_item(prev_line + 1, surface, layout)?;
            surface.show()?;
            Ok(())
        }
    }

    /// Act on the highlighted item
    ///
    /// `back` is the owning screen's back reference.
    pub(crate) fn press<S>(
        &mut self,
        back: Option<ScreenId>,
        surface: &mut S,
        layout: &Layout,
    ) -> Result<Response<'a>, Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let item = &mut self.items[self.active];
        let callback = item.callback();

        let mut response = match item.kind() {
            ItemKind::Back => Response::ascend(back),
            ItemKind::Submenu(target) => Response::transition(target, true),
            ItemKind::Toggle { .. } => {
                item.toggle_enabled();
                let line = self.active - self.top;
                self.draw_item(line, surface, layout)?;
                surface.show()?;
                Response::none()
            }
            ItemKind::Leaf => Response::none(),
        };

        response.callback = callback;
        Ok(response)
    }

    /// Draw one visible row; rows past the end of the list stay blank
    pub fn draw_item<S>(&self, line: usize, surface: &mut S, layout: &Layout) -> Result<(), Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let index = self.top + line;
        let Some(item) = self.items.get(index) else {
            return Ok(());
        };

        let band = Color::from(index == self.active);
        let ink = band.invert();

        let width = surface.width();
        let y = layout.row_top(line);
        let text_y = y.saturating_add(layout.row_text_offset());

        surface.fill_rect(0, y, width, layout.item_height, band)?;
        surface.text(item.label(), layout.left_margin, text_y, ink)?;

        let glyph_x = width
            .saturating_sub(layout.right_margin)
            .saturating_sub(layout.char_width);
        let box_x = width
            .saturating_sub(layout.right_margin)
            .saturating_sub(layout.marker_size);
        let box_y = y.saturating_add(layout.item_height.saturating_sub(layout.marker_size) / 2);

        match item.marker() {
            Marker::Blank => {}
            Marker::Descend => surface.text(">", glyph_x, text_y, ink)?,
            Marker::Ascend => surface.text("<", glyph_x, text_y, ink)?,
            Marker::Checked => {
                surface.fill_rect(box_x, box_y, layout.marker_size, layout.marker_size, ink)?
            }
            Marker::Unchecked => {
                surface.rect(box_x, box_y, layout.marker_size, layout.marker_size, ink)?
            }
        }
        Ok(())
    }

    /// Full repaint: title bar and every visible row
    pub fn redraw<S>(&self, title: Option<&str>, surface: &mut S, layout: &Layout) -> Result<(), Error>
    where
        S: DisplaySurface + ?Sized,
    {
        surface.fill(Color::Off)?;
        draw_titlebar(title, surface, layout)?;
        for line in 0..self.items_on_screen {
            self.draw_item(line, surface, layout)?;
        }
        surface.show()?;
        Ok(())
    }
}
