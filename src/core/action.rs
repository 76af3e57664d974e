//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User clicks the About link? That's `Action::Navigate("/about")`.
//! User presses `m`? That's `Action::ToggleMenu`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns an `Effect`. No side effects here.
//! I/O (the resume copy) happens in the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: navigate, then assert on `app.nav`.

use log::info;

use crate::core::router;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a path. Declared paths select their view; an undeclared
    /// path leaves the view area empty (out of scope by design).
    Navigate(String),
    /// Toggle the nav menu overlay.
    ToggleMenu,
    /// Activating an outbound link surfaces its URL in the status line.
    OpenLink(String),
    /// Request the resume copy ("Download CV"). The copy itself is an
    /// effect; the reducer stays pure.
    CopyResume,
    Quit,
}

/// What the caller must do after `update` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The current view changed: drop the old view's bindings and mount
    /// the new one.
    Remount,
    /// Copy `app.resume_path` into the working directory.
    CopyResume,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(path) => {
            if path == app.nav.current_path {
                // Same-route clicks are a no-op; no remount, no animation replay.
                return Effect::None;
            }
            info!("Navigate: {} -> {}", app.nav.current_path, path);
            app.nav.current_path = path;
            app.nav.menu_open = false;
            app.mount_seq += 1;
            let label = router::ROUTES
                .iter()
                .find(|r| r.path == app.nav.current_path)
                .map(|r| r.label)
                .unwrap_or("nowhere");
            app.status_message = format!("Viewing {label}");
            Effect::Remount
        }
        Action::ToggleMenu => {
            app.nav.menu_open = !app.nav.menu_open;
            Effect::None
        }
        Action::OpenLink(url) => {
            info!("Open link: {url}");
            app.status_message = url;
            Effect::None
        }
        Action::CopyResume => Effect::CopyResume,
        Action::Quit => Effect::Quit,
    }
}
