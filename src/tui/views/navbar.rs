//! # Navbar
//!
//! Persistent top chrome: brand mark, one link per route, and the
//! animated active-link underline. The underline is driven purely by
//! `NavState.current_path` — on every path change the old link's
//! underline retracts (0.3s) while the new one extends (0.5s, eased).
//! On narrow terminals the links collapse behind a menu toggle; the
//! overlay lists every route and closes on navigation.
//!
//! Entrance (bar fade, brand slide-in with overshoot, link cascade) is
//! bound once at startup in the chrome binder, since the shell never
//! remounts.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::anim::{
    AnimationDescriptor, Ease, Sequence, StyleState, TargetId, Transition, TriggerBinder,
};
use crate::core::router::{self, ROUTES};
use crate::core::state::App;
use crate::tui::views::{ACCENT, HitKind, HitZone, MUTED, TEXT};

pub const BAR: TargetId = TargetId(1);
pub const BRAND: TargetId = TargetId(2);

const LINK_BASE: u16 = 3;

pub fn link_target(index: usize) -> TargetId {
    TargetId(LINK_BASE + index as u16)
}

/// Below this width the link row collapses behind the menu toggle.
pub const COLLAPSE_WIDTH: u16 = 64;

const UNDERLINE_RETRACT: f32 = 0.3;
const UNDERLINE_EXTEND: f32 = 0.5;
const ELEVATE: f32 = 0.3;

pub fn descriptors() -> Vec<AnimationDescriptor> {
    let links: Vec<TargetId> = (0..ROUTES.len()).map(link_target).collect();
    Sequence::new()
        .then(
            AnimationDescriptor::from_to(BAR, StyleState::hidden(), StyleState::VISIBLE)
                .duration(0.8),
        )
        .also(
            AnimationDescriptor::from_to(
                BRAND,
                StyleState::hidden().with_dx(-4.0),
                StyleState::VISIBLE,
            )
            .duration(0.8)
            .delay(0.2)
            .ease(Ease::OutBack),
        )
        .also(
            AnimationDescriptor::group(links, StyleState::hidden(), StyleState::VISIBLE)
                .duration(0.5)
                .stagger(0.1)
                .delay(0.4),
        )
        .build()
}

/// Underline and elevation state. Persisted across frames in `TuiState`;
/// transitions are retargeted when the observed path or scroll changes.
pub struct NavbarState {
    underlines: HashMap<&'static str, Transition>,
    elevated: Transition,
    /// Path the underlines were last retargeted for.
    active_path: String,
    /// Menu overlay selection (Up/Down + Enter).
    pub menu_selected: usize,
}

impl NavbarState {
    pub fn new() -> Self {
        Self {
            underlines: ROUTES
                .iter()
                .map(|r| (r.path, Transition::idle(0.0)))
                .collect(),
            elevated: Transition::idle(0.0),
            active_path: String::new(),
            menu_selected: 0,
        }
    }

    /// Retarget the underline transitions when the current path changed:
    /// every non-active underline retracts, the active one extends.
    fn sync_underlines(&mut self, current_path: &str, now: f32) {
        if self.active_path == current_path {
            return;
        }
        self.active_path = current_path.to_string();
        for route in ROUTES {
            let transition = self
                .underlines
                .entry(route.path)
                .or_insert_with(|| Transition::idle(0.0));
            if router::is_active(current_path, route) {
                *transition = transition.retarget(1.0, now, UNDERLINE_EXTEND, Ease::OutQuad);
            } else if transition.target() > 0.0 {
                *transition = transition.retarget(0.0, now, UNDERLINE_RETRACT, Ease::Linear);
            }
        }
    }

    /// Elevated style kicks in once the view is scrolled past a few rows.
    pub fn set_elevated(&mut self, on: bool, now: f32) {
        let target = if on { 1.0 } else { 0.0 };
        if self.elevated.target() != target {
            self.elevated = self.elevated.retarget(target, now, ELEVATE, Ease::OutQuad);
        }
    }

    /// True while any underline or the elevation is still moving.
    pub fn animating(&self, now: f32) -> bool {
        !self.elevated.settled(now) || self.underlines.values().any(|t| !t.settled(now))
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new()
    }
}

fn opacity_style(base: Style, opacity: f32) -> Option<Style> {
    if opacity < 0.05 {
        None
    } else if opacity < 0.55 {
        Some(base.add_modifier(Modifier::DIM))
    } else {
        Some(base)
    }
}

/// Draw the two-row bar (links row + underline row) and record its hit
/// zones in screen coordinates.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    state: &mut NavbarState,
    binder: &TriggerBinder,
    now: f32,
    zones: &mut Vec<HitZone>,
) {
    state.sync_underlines(&app.nav.current_path, now);

    let bar_opacity = binder.style(BAR, now).opacity;
    let Some(bar_style) = opacity_style(Style::default(), bar_opacity) else {
        return;
    };
    let elevated = state.elevated.value(now) > 0.5;
    let row_style = if elevated {
        bar_style.bg(Color::Rgb(24, 28, 38))
    } else {
        bar_style
    };

    let links_row = Rect::new(area.x, area.y, area.width, 1);
    let underline_row = Rect::new(area.x, area.y + 1, area.width, 1);

    // Brand, with its slide-in offset.
    let brand_style_state = binder.style(BRAND, now);
    let brand_x = (1.0 + brand_style_state.dx).round().max(0.0) as u16;
    if let Some(style) = opacity_style(row_style, bar_opacity * brand_style_state.opacity) {
        let brand = Paragraph::new(Line::from(vec![
            Span::styled("Port", style.fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("folio", style.fg(TEXT).add_modifier(Modifier::BOLD)),
        ]));
        let w = 9u16.min(area.width.saturating_sub(brand_x));
        frame.render_widget(brand, Rect::new(area.x + brand_x, links_row.y, w, 1));
    }

    if area.width < COLLAPSE_WIDTH {
        // Collapsed: just the menu toggle at the right edge.
        let label = if app.nav.menu_open { "✕ Menu" } else { "≡ Menu" };
        let w = label.chars().count() as u16;
        let x = area.width.saturating_sub(w + 1);
        let rect = Rect::new(area.x + x, links_row.y, w, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                row_style.fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            rect,
        );
        zones.push(HitZone {
            rect,
            kind: HitKind::MenuToggle,
            hover: None,
        });
        return;
    }

    // Full link row, right-aligned like the source's desktop navbar.
    let total: u16 = ROUTES.iter().map(|r| r.label.len() as u16 + 4).sum();
    let mut x = area.width.saturating_sub(total + 1);
    let mut underline = vec![' '; area.width as usize];

    for (i, route) in ROUTES.iter().enumerate() {
        let active = router::is_active(&app.nav.current_path, route);
        let link_opacity = bar_opacity * binder.style(link_target(i), now).opacity;
        let w = route.label.len() as u16 + 2;
        let rect = Rect::new(area.x + x + 1, links_row.y, w, 1);

        if let Some(style) = opacity_style(row_style, link_opacity) {
            let fg = if active { ACCENT } else { TEXT };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {} ", route.label),
                    style.fg(fg),
                )),
                rect,
            );
        }

        // Fill this link's slice of the underline row.
        let level = state
            .underlines
            .get(route.path)
            .map(|t| t.value(now))
            .unwrap_or(0.0);
        let filled = (level * w as f32).round() as usize;
        let start = (x + 1) as usize;
        for c in underline.iter_mut().skip(start).take(filled.min(w as usize)) {
            *c = '─';
        }

        zones.push(HitZone {
            rect,
            kind: HitKind::Route(route.path),
            hover: None,
        });
        x += w + 2;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            underline.into_iter().collect::<String>(),
            Style::default().fg(ACCENT),
        )),
        underline_row,
    );
}

/// Centered route list shown while the menu overlay is open. Closes on
/// navigation or toggle; selection wraps.
pub fn render_menu_overlay(
    frame: &mut Frame,
    screen: Rect,
    app: &App,
    state: &NavbarState,
    zones: &mut Vec<HitZone>,
) {
    let height = ROUTES.len() as u16 + 2;
    let width = 24u16.min(screen.width);
    let x = screen.width.saturating_sub(width) / 2;
    let y = (screen.height.saturating_sub(height) / 2).max(1);
    let overlay = Rect::new(x, y, width, height.min(screen.height));

    frame.render_widget(Clear, overlay);

    let lines: Vec<Line<'_>> = ROUTES
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let active = router::is_active(&app.nav.current_path, route);
            let selected = i == state.menu_selected;
            let mut style = if active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            if selected {
                style = style.bg(Color::Rgb(40, 46, 60));
            }
            Line::from(Span::styled(format!("  {}  ", route.label), style))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title("Menu")
                .border_style(Style::default().fg(MUTED)),
        ),
        overlay,
    );

    for (i, route) in ROUTES.iter().enumerate() {
        zones.push(HitZone {
            rect: Rect::new(overlay.x + 1, overlay.y + 1 + i as u16, width - 2, 1),
            kind: HitKind::Route(route.path),
            hover: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underlines_move_on_route_change() {
        let mut state = NavbarState::new();
        state.sync_underlines("/", 0.0);
        // Home extends from 0 toward 1
        let home_mid = state.underlines["/"].value(0.25);
        assert!(home_mid > 0.0 && home_mid < 1.0);
        assert!((state.underlines["/"].value(0.5) - 1.0).abs() < 1e-6);

        // Navigate: Home retracts, About extends
        state.sync_underlines("/about", 1.0);
        assert!((state.underlines["/"].value(1.3)).abs() < 1e-6);
        assert!((state.underlines["/about"].value(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sync_is_idempotent_for_same_path() {
        let mut state = NavbarState::new();
        state.sync_underlines("/", 0.0);
        let settled = state.underlines["/"].value(10.0);
        // Re-syncing much later must not restart the extend animation
        state.sync_underlines("/", 10.0);
        assert_eq!(state.underlines["/"].value(10.0), settled);
    }

    #[test]
    fn test_undeclared_path_leaves_zero_underlines_extended() {
        let mut state = NavbarState::new();
        state.sync_underlines("/", 0.0);
        state.sync_underlines("/nope", 5.0);
        for t in state.underlines.values() {
            assert!((t.value(20.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_elevation_retargets_once() {
        let mut state = NavbarState::new();
        state.set_elevated(true, 1.0);
        assert!(state.animating(1.1));
        let mid = state.elevated.value(1.15);
        state.set_elevated(true, 1.15); // no-op, same target
        assert_eq!(state.elevated.value(1.15), mid);
        assert!((state.elevated.value(1.5) - 1.0).abs() < 1e-6);
    }
}
