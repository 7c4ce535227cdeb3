//! Page Routing
//!
//! Maps URL paths to pages and keeps signed-out users on the auth pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Tasks,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/tasks" => Page::Tasks,
            _ => Page::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Dashboard => "/dashboard",
            Page::Tasks => "/tasks",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Tasks)
    }
}

/// The page actually shown for a requested page and session state
pub fn guard(requested: Page, signed_in: bool) -> Page {
    match (requested.requires_auth(), signed_in) {
        (true, false) => Page::Login,
        (false, true) => Page::Dashboard,
        _ => requested,
    }
}
