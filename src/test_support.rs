//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Creates a test App at the root route with animations disabled, so
/// rendered frames are settled and assertable.
pub fn test_app() -> App {
    test_app_at("/")
}

/// Creates a test App at an arbitrary path.
pub fn test_app_at(path: &str) -> App {
    let mut app = App::new(path);
    app.reduced_motion = true;
    app
}
