//! View-mode enums: the exclusive overlay and the color theme.

use serde::{Deserialize, Serialize};

/// An exclusive overlay shown above the page.
///
/// The session holds at most one of these at a time, as `Option<Modal>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    /// Free-form demo dialog opened from the hero section.
    Demo,
    /// Cart contents with totals.
    Cart,
    /// Notification inbox.
    Notifications,
    /// Mock login form.
    Login,
    /// Profile card of the logged-in user.
    Profile,
    /// Site-wide search box.
    Search,
}

impl std::fmt::Display for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Demo => write!(f, "demo"),
            Self::Cart => write!(f, "cart"),
            Self::Notifications => write!(f, "notifications"),
            Self::Login => write!(f, "login"),
            Self::Profile => write!(f, "user"),
            Self::Search => write!(f, "search"),
        }
    }
}

impl std::str::FromStr for Modal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "demo" => Ok(Self::Demo),
            "cart" => Ok(Self::Cart),
            "notifications" => Ok(Self::Notifications),
            "login" => Ok(Self::Login),
            "user" | "profile" => Ok(Self::Profile),
            "search" => Ok(Self::Search),
            _ => Err(format!("invalid modal: {s}")),
        }
    }
}

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
