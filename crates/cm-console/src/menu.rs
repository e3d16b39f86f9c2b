//! The selection contract: pick one of N items, or cancel.
//!
//! A [`Menu`] is a cursor over a fixed list of items.  It is driven by
//! abstract [`Key`]s so any front end (curses, a test script) can feed it.
//! A [`MenuGroup`] lays several menus side by side with exactly one active
//! at a time.

use crate::{ConsoleError, ConsoleResult};

/// Keys a menu understands.  Front ends map their own key codes onto these.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

/// What a key press did to a single menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Still choosing.
    Pending,
    /// The player picked the item at this index.
    Selected(usize),
    /// The player backed out.
    Cancelled,
    /// The player moved focus off this menu (left or right).
    Leave(Key),
}

/// A vertical list with a clamped cursor.
#[derive(Clone, Debug)]
pub struct Menu {
    items:  Vec<String>,
    cursor: Option<usize>,
}

impl Menu {
    /// A menu over `items`, active with the cursor on the first item.
    pub fn new(items: Vec<String>) -> ConsoleResult<Self> {
        if items.is_empty() {
            return Err(ConsoleError::EmptyMenu);
        }
        Ok(Self { items, cursor: Some(0) })
    }

    /// A menu that starts inactive.
    pub fn inactive(items: Vec<String>) -> ConsoleResult<Self> {
        let mut menu = Self::new(items)?;
        menu.deactivate();
        Ok(menu)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The highlighted index; `None` while inactive.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.cursor.is_some()
    }

    /// The highlighted item; `None` while inactive.
    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|i| self.items[i].as_str())
    }

    /// Take focus with the cursor back on the first item.
    pub fn activate(&mut self) {
        self.cursor = Some(0);
    }

    pub fn deactivate(&mut self) {
        self.cursor = None;
    }

    /// Feed one key.  An inactive menu ignores everything.
    pub fn handle(&mut self, key: Key) -> MenuEvent {
        let Some(pos) = self.cursor else {
            return MenuEvent::Pending;
        };
        match key {
            Key::Up => {
                self.cursor = Some(pos.saturating_sub(1));
                MenuEvent::Pending
            }
            Key::Down => {
                self.cursor = Some((pos + 1).min(self.items.len() - 1));
                MenuEvent::Pending
            }
            Key::Enter => MenuEvent::Selected(pos),
            Key::Escape => {
                self.deactivate();
                MenuEvent::Cancelled
            }
            Key::Left | Key::Right => {
                self.deactivate();
                MenuEvent::Leave(key)
            }
        }
    }
}

/// The outcome of a key press on a [`MenuGroup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GroupEvent {
    Pending,
    Selected { menu: usize, item: usize },
    Cancelled,
}

/// Several menus side by side.  Left and right move focus between them,
/// wrapping at either end.
#[derive(Clone, Debug)]
pub struct MenuGroup {
    menus:  Vec<Menu>,
    active: usize,
}

impl MenuGroup {
    /// Group `menus` with focus on the first.
    pub fn new(menus: Vec<Menu>) -> ConsoleResult<Self> {
        if menus.is_empty() {
            return Err(ConsoleError::EmptyMenu);
        }
        let mut group = Self { menus, active: 0 };
        group.focus(0);
        Ok(group)
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Text of the item a [`GroupEvent::Selected`] refers to.
    pub fn item(&self, menu: usize, item: usize) -> Option<&str> {
        self.menus.get(menu)?.items().get(item).map(String::as_str)
    }

    fn focus(&mut self, index: usize) {
        for menu in &mut self.menus {
            menu.deactivate();
        }
        self.active = index;
        self.menus[index].activate();
    }

    pub fn handle(&mut self, key: Key) -> GroupEvent {
        let count = self.menus.len();
        match self.menus[self.active].handle(key) {
            MenuEvent::Pending => GroupEvent::Pending,
            MenuEvent::Selected(item) => GroupEvent::Selected { menu: self.active, item },
            MenuEvent::Cancelled => GroupEvent::Cancelled,
            MenuEvent::Leave(Key::Left) => {
                self.focus((self.active + count - 1) % count);
                GroupEvent::Pending
            }
            MenuEvent::Leave(_) => {
                self.focus((self.active + 1) % count);
                GroupEvent::Pending
            }
        }
    }

    /// Feed keys until one selects or cancels.  `None` when the keys run out
    /// first.
    pub fn run<I: IntoIterator<Item = Key>>(&mut self, keys: I) -> Option<GroupEvent> {
        keys.into_iter()
            .map(|key| self.handle(key))
            .find(|event| *event != GroupEvent::Pending)
    }
}
