//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (NavState)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Router (path table)  │
//!                    │  • Content (portfolio)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    anim    │      │    Web     │
//!     │  Adapter   │      │   engine   │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum — everything that can happen in the app
//! - [`router`]: the static path → view table
//! - [`content`]: the portfolio content model
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod content;
pub mod router;
pub mod state;
