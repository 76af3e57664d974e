//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state (scroll offsets, animation
//! bindings, form buffers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: NavState              // current path + menu overlay flag
//! ├── portfolio: Portfolio       // content rendered by the views
//! ├── status_message: String     // status bar text
//! ├── reduced_motion: bool       // skip entrance animations
//! ├── resume_path: PathBuf       // source file for "Download CV"
//! └── mount_seq: u64             // bumped on navigation; remount signal
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::path::PathBuf;

use crate::core::config::ResolvedConfig;
use crate::core::content::Portfolio;
use crate::core::router::{self, RouteId};

/// The shared navigation state: the router writes `current_path`, the
/// navigation shell reads it. `menu_open` belongs to the shell's overlay
/// toggle and only changes on explicit user action (navigation closes it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub current_path: String,
    pub menu_open: bool,
}

impl NavState {
    pub fn new(start_path: &str) -> Self {
        Self {
            current_path: start_path.to_string(),
            menu_open: false,
        }
    }
}

pub struct App {
    pub nav: NavState,
    pub portfolio: Portfolio,
    pub status_message: String,
    pub reduced_motion: bool,
    pub resume_path: PathBuf,
    /// Monotone counter identifying the current view mount. The TUI
    /// compares it against the generation its bindings were built for and
    /// rebuilds them when they differ.
    pub mount_seq: u64,
}

impl App {
    pub fn new(start_path: &str) -> Self {
        Self {
            nav: NavState::new(start_path),
            portfolio: Portfolio::default(),
            status_message: String::from("Welcome! Press m for menu, q to quit."),
            reduced_motion: false,
            resume_path: PathBuf::from("resume.pdf"),
            mount_seq: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(&config.start_route);
        app.reduced_motion = config.reduced_motion;
        app.resume_path = config.resume_path.clone();
        if let Some(name) = &config.name {
            app.portfolio.profile.name = name.clone();
        }
        if let Some(headline) = &config.headline {
            app.portfolio.profile.headline = headline.clone();
        }
        if let Some(email) = &config.email {
            app.portfolio.profile.email = email.clone();
        }
        app
    }

    /// The route view the current path selects, if any.
    pub fn current_route(&self) -> Option<RouteId> {
        router::resolve(&self.nav.current_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::router::RouteId;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new("/");
        assert_eq!(app.nav.current_path, "/");
        assert!(!app.nav.menu_open);
        assert_eq!(app.current_route(), Some(RouteId::Home));
        assert_eq!(app.mount_seq, 0);
    }

    #[test]
    fn test_current_route_none_for_undeclared_path() {
        let app = App::new("/missing");
        assert_eq!(app.current_route(), None);
    }
}
