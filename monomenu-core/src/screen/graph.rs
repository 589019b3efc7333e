//! Screen arena
//!
//! All screens of an application live in one `ScreenGraph` and refer to
//! each other by `ScreenId`. A submenu shared by several parents is simply
//! referenced from several items.

use core::ops::{Index, IndexMut};

use heapless::Vec;

use super::{Screen, ScreenId, ScreenKind};
use crate::error::Error;
use crate::item::ItemKind;

/// Maximum screens per graph
pub const MAX_SCREENS: usize = 16;

/// Fixed-capacity arena of screens
#[derive(Debug, Clone, Default)]
pub struct ScreenGraph<'a> {
    screens: Vec<Screen<'a>, MAX_SCREENS>,
}

impl<'a> ScreenGraph<'a> {
    pub fn new() -> Self {
        Self { screens: Vec::new() }
    }

    /// Id the next `add` will return
    ///
    /// Lets a menu point at a screen that is added later, e.g. a child
    /// linking back to an ancestor.
    pub fn next_id(&self) -> ScreenId {
        ScreenId::new(self.screens.len() as u8)
    }

    /// Add a screen and return its id
    pub fn add(&mut self, screen: Screen<'a>) -> Result<ScreenId, Error> {
        let id = self.next_id();
        self.screens
            .push(screen)
            .map_err(|_| Error::CapacityExceeded)?;
        Ok(id)
    }

    pub fn get(&self, id: ScreenId) -> Option<&Screen<'a>> {
        self.screens.get(id.index())
    }

    pub fn get_mut(&mut self, id: ScreenId) -> Option<&mut Screen<'a>> {
        self.screens.get_mut(id.index())
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        id.index() < self.screens.len()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Screens with their ids, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ScreenId, &Screen<'a>)> {
        self.screens
            .iter()
            .enumerate()
            .map(|(index, screen)| (ScreenId::new(index as u8), screen))
    }

    /// Check that every submenu item points at a screen of this graph
    pub fn validate(&self) -> Result<(), Error> {
        for (_, screen) in self.iter() {
            let ScreenKind::Menu(menu) = screen.kind() else {
                continue;
            };
            for item in menu.items() {
                if let ItemKind::Submenu(target) = item.kind() {
                    if !self.contains(target) {
                        return Err(Error::UnknownScreen(target));
                    }
                }
            }
        }
        Ok(())
    }
}

impl<'a> Index<ScreenId> for ScreenGraph<'a> {
    type Output = Screen<'a>;

    fn index(&self, id: ScreenId) -> &Self::Output {
        &self.screens[id.index()]
    }
}

impl<'a> IndexMut<ScreenId> for ScreenGraph<'a> {
    fn index_mut(&mut self, id: ScreenId) -> &mut Self::Output {
        &mut self.screens[id.index()]
    }
}
