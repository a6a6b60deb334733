//! The page selector: a closed set of six destinations.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockdeck_core::DomainError;

/// Navigation destination. Any page can be reached from any page, always
/// by an explicit navigation action; there is no terminal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Inventory,
    Suppliers,
    Orders,
    Chat,
    Settings,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Inventory,
        Page::Suppliers,
        Page::Orders,
        Page::Chat,
        Page::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::Suppliers => "Suppliers",
            Page::Orders => "Orders",
            Page::Chat => "Chat",
            Page::Settings => "Settings",
        }
    }

    /// Destinations that render the explicit under-construction
    /// placeholder instead of a built page.
    pub fn under_construction(&self) -> bool {
        matches!(self, Page::Suppliers | Page::Orders | Page::Settings)
    }
}

impl core::fmt::Display for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = DomainError;

    /// Parse a page name. An out-of-set name is rejected, never clamped:
    /// silently mapping it to some default would corrupt navigation state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" => Ok(Page::Dashboard),
            "inventory" => Ok(Page::Inventory),
            "suppliers" => Ok(Page::Suppliers),
            "orders" => Ok(Page::Orders),
            "chat" => Ok(Page::Chat),
            "settings" => Ok(Page::Settings),
            other => Err(DomainError::validation(format!(
                "unknown page: {other}"
            ))),
        }
    }
}
