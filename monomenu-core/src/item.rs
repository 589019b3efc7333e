//! Menu items
//!
//! Every item has a label and an optional callback; what happens on a
//! button press depends on its `ItemKind`.

use core::fmt;

use crate::error::Error;
use crate::screen::{Screen, ScreenId};

/// Maximum items per menu
pub const MAX_MENU_ITEMS: usize = 16;

/// Hook run after an item's own action, with the menu screen that owns it
pub type Callback<'a> = &'a dyn Fn(&Screen<'_>) -> Result<(), Error>;

/// What an item does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemKind {
    /// Plain entry, only the callback runs
    Leaf,
    /// Descend into another screen of the graph
    Submenu(ScreenId),
    /// On/off setting flipped in place
    Toggle { enabled: bool },
    /// Return to the screen this menu was entered from
    Back,
}

/// Right-aligned glyph drawn after the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Marker {
    /// Nothing after the label
    Blank,
    /// `>`
    Descend,
    /// `<`
    Ascend,
    /// Filled box
    Checked,
    /// Outlined box
    Unchecked,
}

/// Entry of a menu screen
#[derive(Clone)]
pub struct MenuItem<'a> {
    label: &'a str,
    kind: ItemKind,
    callback: Option<Callback<'a>>,
}

impl<'a> MenuItem<'a> {
    /// Create an item of any kind
    pub const fn new(label: &'a str, kind: ItemKind) -> Self {
        Self {
            label,
            kind,
            callback: None,
        }
    }

    /// Plain entry
    pub const fn leaf(label: &'a str) -> Self {
        Self::new(label, ItemKind::Leaf)
    }

    /// Entry that descends into `target`
    pub const fn submenu(label: &'a str, target: ScreenId) -> Self {
        Self::new(label, ItemKind::Submenu(target))
    }

    /// On/off setting
    pub const fn toggle(label: &'a str, enabled: bool) -> Self {
        Self::new(label, ItemKind::Toggle { enabled })
    }

    /// Entry that returns to the previous screen
    pub const fn back(label: &'a str) -> Self {
        Self::new(label, ItemKind::Back)
    }

    /// Attach a callback, run on every press after the kind's own action
    pub fn with_callback(mut self, callback: Callback<'a>) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn callback(&self) -> Option<Callback<'a>> {
        self.callback
    }

    /// Toggle state, `None` for other kinds
    pub fn is_enabled(&self) -> Option<bool> {
        match self.kind {
            ItemKind::Toggle { enabled } => Some(enabled),
            _ => None,
        }
    }

    /// Flip a toggle and return its new state
    ///
    /// Items of other kinds are left alone and return `None`.
    pub fn toggle_enabled(&mut self) -> Option<bool> {
        match &mut self.kind {
            ItemKind::Toggle { enabled } => {
                *enabled = !*enabled;
                Some(*enabled)
            }
            _ => None,
        }
    }

    /// Glyph drawn at the right edge of the row
    pub fn marker(&self) -> Marker {
        match self.kind {
            ItemKind::Leaf => Marker::Blank,
            ItemKind::Submenu(_) => Marker::Descend,
            ItemKind::Toggle { enabled: true } => Marker::Checked,
            ItemKind::Toggle { enabled: false } => Marker::Unchecked,
            ItemKind::Back => Marker::Ascend,
        }
    }
}

impl fmt::Debug for MenuItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
