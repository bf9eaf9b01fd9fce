//! Static tables for the app chrome.
//!
//! Labels are stored as lookup keys and resolved at display time.

use serde::Serialize;

/// Colour palette of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub border_dark: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub white: &'static str,
    pub hover: &'static str,
    pub notification: &'static str,
}

pub const COLORS: Palette = Palette {
    primary: "#1a1a1a",
    background: "#f8f8f8",
    border: "#e0e0e0",
    border_dark: "#d0d0d0",
    text_primary: "#1a1a1a",
    text_secondary: "#666",
    white: "#ffffff",
    hover: "#f5f5f5",
    notification: "#ff4444",
};

/// A navigation tab. `id` doubles as the name of the route it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub id: &'static str,
    pub key: &'static str,
}

/// A document filter tag with its badge count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: &'static str,
    pub key: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserMenuItem {
    pub id: &'static str,
    pub key: &'static str,
}

pub const TABS: &[Tab] = &[
    Tab {
        id: "home",
        key: "tabs.home",
    },
    Tab {
        id: "documenti",
        key: "tabs.documents",
    },
    Tab {
        id: "salute",
        key: "tabs.health",
    },
    Tab {
        id: "calendario",
        key: "tabs.calendar",
    },
    Tab {
        id: "impostazioni",
        key: "tabs.settings",
    },
];

pub const TAGS: &[Tag] = &[
    Tag {
        id: "tutti",
        key: "tags.all",
        count: 10,
    },
    Tag {
        id: "daLeggere",
        key: "tags.toRead",
        count: 1,
    },
    Tag {
        id: "cartella",
        key: "tags.folder",
        count: 3,
    },
];

pub const USERS: &[User] = &[
    User {
        id: 1,
        name: "User #1",
    },
    User {
        id: 2,
        name: "User #2",
    },
    User {
        id: 3,
        name: "User #3",
    },
    User {
        id: 4,
        name: "User #4",
    },
];

pub const USER_MENU_ITEMS: &[UserMenuItem] = &[
    UserMenuItem {
        id: "profile",
        key: "userMenu.profile",
    },
    UserMenuItem {
        id: "settings",
        key: "userMenu.settings",
    },
    UserMenuItem {
        id: "logout",
        key: "userMenu.logout",
    },
];

/// Where a configured lookup key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeySource {
    Tab,
    Tag,
    UserMenu,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySource::Tab => "tab",
            KeySource::Tag => "tag",
            KeySource::UserMenu => "user menu",
        }
    }
}

/// A lookup key carried by one of the constant tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfiguredKey {
    pub source: KeySource,
    pub id: &'static str,
    pub key: &'static str,
}

/// Every lookup key referenced by the tables, in table order.
pub fn configured_keys() -> Vec<ConfiguredKey> {
    let tabs = TABS.iter().map(|tab| ConfiguredKey {
        source: KeySource::Tab,
        id: tab.id,
        key: tab.key,
    });
    let tags = TAGS.iter().map(|tag| ConfiguredKey {
        source: KeySource::Tag,
        id: tag.id,
        key: tag.key,
    });
    let menu = USER_MENU_ITEMS.iter().map(|item| ConfiguredKey {
        source: KeySource::UserMenu,
        id: item.id,
        key: item.key,
    });
    tabs.chain(tags).chain(menu).collect()
}

pub fn find_tab(id: &str) -> Option<&'static Tab> {
    TABS.iter().find(|tab| tab.id == id)
}
