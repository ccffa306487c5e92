//! Navigation locations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A navigable location in the app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "screen", content = "id", rename_all = "snake_case")]
pub enum Route {
    /// `/`: entry point, immediately redirected.
    #[default]
    Index,
    /// `/login`: the only screen in the auth group.
    Login,
    /// `/dashboard`: default landing surface once signed in.
    Dashboard,
    /// `/orders/{id}`
    OrderDetail(String),
}

impl Route {
    /// Whether this location belongs to the unauthenticated (auth) group.
    pub const fn is_auth_group(&self) -> bool {
        matches!(self, Self::Login)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Index => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::OrderDetail(id) => format!("/orders/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Error returned when a path does not name a known screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        match trimmed {
            "" => Ok(Self::Index),
            "/login" => Ok(Self::Login),
            "/dashboard" => Ok(Self::Dashboard),
            other => other
                .strip_prefix("/orders/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::OrderDetail(id.to_string()))
                .ok_or_else(|| UnknownRoute(s.to_string())),
        }
    }
}
