//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core (router, reducer, content) stays adapter-agnostic.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (entrance sequences, underline moves, footer pulse on
//!   screen): draws every ~80ms for smooth animation.
//! - **Idle** (everything settled): sleeps up to 500ms, only redraws on
//!   events or terminal resize.
//!
//! ## Mount lifecycle
//!
//! Navigation bumps `App::mount_seq`. The loop notices the new generation
//! before the next draw, unmounts the old view's binding set (cancelling
//! pending scroll triggers, detaching hover bindings) and mounts the new
//! view's descriptors at the current frame clock. The chrome binder
//! (navbar + footer) is mounted once and lives for the whole run.

pub mod component;
mod event;
pub mod markdown;
pub mod ui;
pub mod views;

use std::io::stdout;
use std::path::PathBuf;

use log::{info, warn};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect};
use tui_scrollview::ScrollViewState;

use crate::anim::TriggerBinder;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::router::{ROUTES, RouteId};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ZoneSet;
use crate::tui::views::navbar::NavbarState;
use crate::tui::views::HitKind;
use crate::tui::views::{about, contact, footer, home, navbar, projects, skills};

/// Rows scrolled per wheel tick.
const WHEEL_STEP: u16 = 3;
/// Scroll offset past which the navbar switches to its elevated style.
const ELEVATE_AFTER: u16 = 4;

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub scroll_state: ScrollViewState,
    /// Binding set of the currently mounted route view.
    pub view_binder: TriggerBinder,
    /// Persistent navbar + footer bindings, mounted once at startup.
    pub chrome_binder: TriggerBinder,
    /// `App::mount_seq` generation `view_binder` was built for.
    pub bound_seq: Option<u64>,
    pub navbar: NavbarState,
    pub form: contact::ContactFormState,
    /// Layout of the last drawn frame (target positions, content height).
    pub layout: views::ViewLayout,
    pub zones: ZoneSet,
    pub view_area: Rect,
}

impl TuiState {
    /// Build presentation state for a fresh app: chrome bindings mounted,
    /// the starting route mounted at clock zero.
    pub fn for_app(app: &App, now: f32) -> Self {
        let mut chrome_descriptors = navbar::descriptors();
        chrome_descriptors.extend(footer::descriptors(&app.portfolio));
        let chrome_binder = TriggerBinder::mount(
            chrome_descriptors,
            footer::hover_specs(&app.portfolio),
            now,
            app.reduced_motion,
        );
        let mut tui = Self {
            scroll_state: ScrollViewState::default(),
            view_binder: TriggerBinder::new(),
            chrome_binder,
            bound_seq: None,
            navbar: NavbarState::new(),
            form: contact::ContactFormState::default(),
            layout: views::ViewLayout::default(),
            zones: ZoneSet::default(),
            view_area: Rect::default(),
        };
        tui.remount(app, now);
        tui
    }

    /// Remount if navigation moved the app to a new generation. Returns
    /// true when a remount happened.
    pub fn sync(&mut self, app: &App, now: f32) -> bool {
        if self.bound_seq == Some(app.mount_seq) {
            return false;
        }
        self.remount(app, now);
        true
    }

    /// Swap the view binding set for the current route. The old set is
    /// unmounted first so nothing leaks across navigations.
    fn remount(&mut self, app: &App, now: f32) {
        self.view_binder.unmount();
        self.view_binder = mount_view(app, now);
        self.bound_seq = Some(app.mount_seq);
        self.scroll_state = ScrollViewState::default();
        self.form = contact::ContactFormState::default();
        info!(
            "mounted view for {} ({} bindings)",
            app.nav.current_path,
            self.view_binder.binding_count()
        );
    }

    fn max_scroll(&self) -> u16 {
        self.layout
            .height
            .saturating_sub(self.view_area.height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset().y as i32;
        let next = (current + delta).clamp(0, self.max_scroll() as i32) as u16;
        self.scroll_state.set_offset(Position { x: 0, y: next });
    }

    /// True while the footer's pulsing brand mark is inside the viewport,
    /// which forces the fast redraw cadence.
    fn footer_on_screen(&self) -> bool {
        self.layout
            .positions
            .get(&footer::CONTENT)
            .is_some_and(|&top| {
                let scroll_y = self.scroll_state.offset().y;
                top < scroll_y + self.view_area.height
            })
    }
}

/// Build the binding set for the route the app currently shows.
fn mount_view(app: &App, now: f32) -> TriggerBinder {
    let p = &app.portfolio;
    let rm = app.reduced_motion;
    match app.current_route() {
        Some(RouteId::Home) => {
            TriggerBinder::mount(home::descriptors(p), home::hover_specs(p), now, rm)
        }
        Some(RouteId::About) => {
            TriggerBinder::mount(about::descriptors(p), about::hover_specs(p), now, rm)
        }
        Some(RouteId::Projects) => {
            TriggerBinder::mount(projects::descriptors(p), projects::hover_specs(p), now, rm)
        }
        Some(RouteId::Skills) => TriggerBinder::mount(skills::descriptors(p), vec![], now, rm),
        Some(RouteId::Contact) => TriggerBinder::mount(contact::descriptors(p), vec![], now, rm),
        None => TriggerBinder::new(),
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = std::time::Instant::now();
    let mut tui = TuiState::for_app(&app, 0.0);
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = start_time.elapsed().as_secs_f32();

        // Navigation happened: rebuild the view's binding set.
        if tui.sync(&app, now) {
            needs_redraw = true;
        }

        let animating = tui.view_binder.animating(now)
            || tui.chrome_binder.animating(now)
            || tui.navbar.animating(now)
            || tui.footer_on_screen();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;

            // Evaluate scroll triggers against the just-drawn layout, and
            // let the navbar react to the scroll position.
            let scroll_y = tui.scroll_state.offset().y;
            let viewport = tui.view_area.height;
            tui.view_binder
                .observe_scroll(&tui.layout.positions, scroll_y, viewport, now);
            tui.chrome_binder
                .observe_scroll(&tui.layout.positions, scroll_y, viewport, now);
            tui.navbar.set_elevated(scroll_y > ELEVATE_AFTER, now);
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = handle_event(&mut app, &mut tui, tui_event, now);
            match effect {
                Effect::Quit => should_quit = true,
                Effect::CopyResume => copy_resume(&mut app),
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one event through the modal dispatch: overlay first, then the
/// contact form when it holds focus, then global browse keys.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, now: f32) -> Effect {
    // Resize just needs a redraw (already flagged by the caller).
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // Mouse hover — always active regardless of mode.
    if let TuiEvent::MouseMove(x, y) = event {
        let scroll_y = tui.scroll_state.offset().y;
        let hover = ui::hit_test(&tui.zones, tui.view_area, scroll_y, x, y)
            .and_then(|zone| zone.hover);
        tui.view_binder.set_hovered(hover, now);
        tui.chrome_binder.set_hovered(hover, now);
        return Effect::None;
    }

    if let TuiEvent::MouseClick(x, y) = event {
        let scroll_y = tui.scroll_state.offset().y;
        let Some(zone) = ui::hit_test(&tui.zones, tui.view_area, scroll_y, x, y) else {
            return Effect::None;
        };
        return match zone.kind.clone() {
            HitKind::Route(path) => update(app, Action::Navigate(path.to_string())),
            HitKind::Link(url) => update(app, Action::OpenLink(url)),
            HitKind::DownloadCv => update(app, Action::CopyResume),
            HitKind::MenuToggle => update(app, Action::ToggleMenu),
            HitKind::Field(field) => {
                tui.form.focus_field(field);
                Effect::None
            }
            HitKind::Card => Effect::None,
        };
    }

    // Scroll events work in every mode.
    match event {
        TuiEvent::ScrollUp => {
            tui.scroll_by(-(WHEEL_STEP as i32));
            return Effect::None;
        }
        TuiEvent::ScrollDown => {
            tui.scroll_by(WHEEL_STEP as i32);
            return Effect::None;
        }
        TuiEvent::ScrollPageUp => {
            tui.scroll_by(-(tui.view_area.height as i32));
            return Effect::None;
        }
        TuiEvent::ScrollPageDown => {
            tui.scroll_by(tui.view_area.height as i32);
            return Effect::None;
        }
        TuiEvent::ScrollToTop => {
            tui.scroll_state.set_offset(Position { x: 0, y: 0 });
            return Effect::None;
        }
        TuiEvent::ScrollToBottom => {
            let max = tui.max_scroll();
            tui.scroll_state.set_offset(Position { x: 0, y: max });
            return Effect::None;
        }
        _ => {}
    }

    // Menu overlay captures navigation keys while open.
    if app.nav.menu_open {
        return match event {
            TuiEvent::CursorUp => {
                tui.navbar.menu_selected =
                    (tui.navbar.menu_selected + ROUTES.len() - 1) % ROUTES.len();
                Effect::None
            }
            TuiEvent::CursorDown => {
                tui.navbar.menu_selected = (tui.navbar.menu_selected + 1) % ROUTES.len();
                Effect::None
            }
            TuiEvent::Enter => {
                let path = ROUTES[tui.navbar.menu_selected].path;
                update(app, Action::Navigate(path.to_string()))
            }
            TuiEvent::Escape | TuiEvent::InputChar('m') => update(app, Action::ToggleMenu),
            TuiEvent::InputChar('q') => update(app, Action::Quit),
            _ => Effect::None,
        };
    }

    // Contact form holds focus: it consumes keys until dismissed.
    if app.current_route() == Some(RouteId::Contact) && tui.form.focus.is_some() {
        tui.form.handle_event(&event);
        return Effect::None;
    }

    // Browse mode.
    match event {
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('m') => update(app, Action::ToggleMenu),
        TuiEvent::InputChar(c @ '1'..='5') => {
            let index = (c as u8 - b'1') as usize;
            update(app, Action::Navigate(ROUTES[index].path.to_string()))
        }
        // Home shortcuts, mirroring its buttons.
        TuiEvent::InputChar('p') if app.current_route() == Some(RouteId::Home) => {
            update(app, Action::Navigate("/projects".to_string()))
        }
        TuiEvent::InputChar('d') if app.current_route() == Some(RouteId::Home) => {
            update(app, Action::CopyResume)
        }
        // Tab on the contact view focuses the form.
        TuiEvent::Tab if app.current_route() == Some(RouteId::Contact) => {
            tui.form.focus_first();
            Effect::None
        }
        TuiEvent::CursorUp => {
            tui.scroll_by(-1);
            Effect::None
        }
        TuiEvent::CursorDown => {
            tui.scroll_by(1);
            Effect::None
        }
        _ => Effect::None,
    }
}

/// The "Download CV" effect: copy the configured resume into the working
/// directory as an opaque byte stream and report the outcome.
fn copy_resume(app: &mut App) {
    let file_name = app
        .resume_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resume.pdf"));
    if app.resume_path == file_name {
        app.status_message = format!("{} is already in the working directory", file_name.display());
        return;
    }
    match std::fs::copy(&app.resume_path, &file_name) {
        Ok(bytes) => {
            info!("copied {} ({} bytes)", file_name.display(), bytes);
            app.status_message = format!("Saved {} ({} bytes)", file_name.display(), bytes);
        }
        Err(e) => {
            warn!("resume copy from {} failed: {}", app.resume_path.display(), e);
            app.status_message = format!("Resume copy failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_char(c: char) -> TuiEvent {
        TuiEvent::InputChar(c)
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut app = App::new("/");
        let mut tui = TuiState::for_app(&app, 0.0);
        let effect = handle_event(&mut app, &mut tui, event_char('3'), 0.0);
        assert_eq!(effect, Effect::Remount);
        assert_eq!(app.nav.current_path, "/projects");
    }

    #[test]
    fn test_remount_swaps_binding_sets() {
        let mut app = App::new("/");
        let mut tui = TuiState::for_app(&app, 0.0);
        let home_bindings = tui.view_binder.binding_count();
        assert!(home_bindings > 0);

        update(&mut app, Action::Navigate("/skills".to_string()));
        tui.remount(&app, 1.0);
        assert_eq!(tui.bound_seq, Some(app.mount_seq));
        assert!(tui.view_binder.binding_count() > 0);
        assert_eq!(tui.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_menu_captures_navigation_keys() {
        let mut app = App::new("/");
        let mut tui = TuiState::for_app(&app, 0.0);
        handle_event(&mut app, &mut tui, event_char('m'), 0.0);
        assert!(app.nav.menu_open);

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown, 0.0);
        assert_eq!(tui.navbar.menu_selected, 1);
        let effect = handle_event(&mut app, &mut tui, TuiEvent::Enter, 0.0);
        assert_eq!(effect, Effect::Remount);
        assert_eq!(app.nav.current_path, "/about");
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn test_form_focus_consumes_characters() {
        let mut app = App::new("/contact");
        let mut tui = TuiState::for_app(&app, 0.0);
        tui.form.focus_first();
        // 'q' goes into the name field instead of quitting
        let effect = handle_event(&mut app, &mut tui, event_char('q'), 0.0);
        assert_eq!(effect, Effect::None);
        assert_eq!(tui.form.name, "q");
        // Esc releases focus; the next 'q' quits
        handle_event(&mut app, &mut tui, TuiEvent::Escape, 0.0);
        assert!(tui.form.focus.is_none());
        let effect = handle_event(&mut app, &mut tui, event_char('q'), 0.0);
        assert_eq!(effect, Effect::Quit);
    }

    #[test]
    fn test_home_shortcut_keys_only_apply_on_home() {
        let mut app = App::new("/about");
        let mut tui = TuiState::for_app(&app, 0.0);
        let effect = handle_event(&mut app, &mut tui, event_char('p'), 0.0);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.current_path, "/about");

        update(&mut app, Action::Navigate("/".to_string()));
        tui.remount(&app, 0.0);
        let effect = handle_event(&mut app, &mut tui, event_char('p'), 0.0);
        assert_eq!(effect, Effect::Remount);
        assert_eq!(app.nav.current_path, "/projects");
    }

    #[test]
    fn test_missing_resume_reports_failure_in_status() {
        let mut app = App::new("/");
        app.resume_path = PathBuf::from("/definitely/not/here/resume.pdf");
        copy_resume(&mut app);
        assert!(app.status_message.starts_with("Resume copy failed"));
    }
}
