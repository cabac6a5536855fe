//! Views of the application and the navigation routes between them.

use serde::{Deserialize, Serialize};

/// The screen currently shown.
///
/// Without a session only [`View::Unauthenticated`] is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Login / registration screen.
    #[default]
    Unauthenticated,
    /// Main wardrobe page.
    Home,
    /// Picture upload page.
    AddPicture,
    /// Profile and dashboard page.
    Profile,
}

impl View {
    /// Whether this view requires a session.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::Home => write!(f, "home"),
            Self::AddPicture => write!(f, "add_picture"),
            Self::Profile => write!(f, "profile"),
        }
    }
}

/// Bottom navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Link to the main wardrobe page.
    Home,
    /// Link to the picture upload page.
    Add,
    /// Link to the profile page.
    Profile,
}

impl Route {
    /// The view this route leads to.
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::Home => View::Home,
            Self::Add => View::AddPicture,
            Self::Profile => View::Profile,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Add => write!(f, "add"),
            Self::Profile => write!(f, "profile"),
        }
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "add" => Ok(Self::Add),
            "profile" => Ok(Self::Profile),
            _ => Err(format!("invalid route: {s}")),
        }
    }
}
