use crate::core::router::RouteId;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::views::{HitZone, MUTED, Stack, ViewLayout};
use crate::tui::views::{about, contact, footer, home, navbar, projects, skills};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::Style;
use ratatui::text::Span;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

/// Hit zones recorded during a draw pass: chrome (and overlay) zones in
/// screen coordinates, view/footer zones in scroll-content coordinates.
#[derive(Debug, Default)]
pub struct ZoneSet {
    pub screen: Vec<HitZone>,
    pub content: Vec<HitZone>,
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: f32) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(2), Min(0), Length(1)]);
    let [navbar_area, view_area, status_area] = layout.areas(frame.area());

    let mut zones = ZoneSet::default();

    navbar::render(
        frame,
        navbar_area,
        app,
        &mut tui.navbar,
        &tui.chrome_binder,
        now,
        &mut zones.screen,
    );

    tui.layout = draw_view_area(frame, view_area, app, tui, now, &mut zones.content);

    // Status line
    let status = format!(
        " {} │ 1-5: sections  m: menu  q: quit",
        app.status_message
    );
    frame.render_widget(
        Span::styled(status, Style::default().fg(MUTED)),
        status_area,
    );

    // Menu overlay goes on top of everything; its zones shadow the rest.
    if app.nav.menu_open {
        navbar::render_menu_overlay(frame, frame.area(), app, &tui.navbar, &mut zones.screen);
    }

    tui.view_area = view_area;
    tui.zones = zones;
}

/// Render the routed view plus the footer into one scroll view. An
/// undeclared path renders only the footer — nothing is defined for the
/// view itself.
fn draw_view_area(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    now: f32,
    zones: &mut Vec<HitZone>,
) -> ViewLayout {
    let content_width = area.width.saturating_sub(1);
    if content_width == 0 || area.height == 0 {
        return ViewLayout::default();
    }

    let mut stack = Stack::new(content_width);
    match app.current_route() {
        Some(RouteId::Home) => {
            home::render(&mut stack, zones, &app.portfolio, &tui.view_binder, now)
        }
        Some(RouteId::About) => {
            about::render(&mut stack, zones, &app.portfolio, &tui.view_binder, now)
        }
        Some(RouteId::Projects) => {
            projects::render(&mut stack, zones, &app.portfolio, &tui.view_binder, now)
        }
        Some(RouteId::Skills) => skills::render(&mut stack, &app.portfolio, &tui.view_binder, now),
        Some(RouteId::Contact) => contact::render(
            &mut stack,
            zones,
            &app.portfolio,
            &tui.form,
            &tui.view_binder,
            now,
        ),
        None => {}
    }
    footer::render(&mut stack, zones, &app.portfolio, &tui.chrome_binder, now);

    let mut scroll_view = ScrollView::new(Size::new(content_width, stack_height(&stack)))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    let layout = stack.finish(
        &mut scroll_view,
        &[&tui.view_binder, &tui.chrome_binder],
        now,
    );

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);
    layout
}

fn stack_height(stack: &Stack<'_>) -> u16 {
    stack.height().max(1)
}

/// Resolve a mouse position to the topmost zone under it. Screen zones
/// (chrome, overlay) win over content zones; content coordinates account
/// for the scroll offset.
pub fn hit_test<'a>(
    zones: &'a ZoneSet,
    view_area: Rect,
    scroll_y: u16,
    x: u16,
    y: u16,
) -> Option<&'a HitZone> {
    fn contains(rect: Rect, x: u16, y: u16) -> bool {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    }

    // Later-pushed screen zones (the overlay) sit on top.
    if let Some(zone) = zones.screen.iter().rev().find(|z| contains(z.rect, x, y)) {
        return Some(zone);
    }

    if !contains(view_area, x, y) {
        return None;
    }
    let content_x = x - view_area.x;
    let content_y = (y - view_area.y) + scroll_y;
    zones
        .content
        .iter()
        .rev()
        .find(|z| contains(z.rect, content_x, content_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::HitKind;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, now: f32) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_each_route_renders_its_view_and_no_other() {
        let cases = [
            ("/", "Hi, I'm", &["What I Do", "Get In Touch", "My Technical Skills"][..]),
            ("/about", "What I Do", &["Hi, I'm", "Get In Touch"][..]),
            ("/skills", "My Technical Skills", &["What I Do", "Hi, I'm"][..]),
            ("/contact", "Get In Touch", &["What I Do", "Hi, I'm"][..]),
        ];
        for (path, expect, absent) in cases {
            let app = crate::test_support::test_app_at(path);
            let mut tui = TuiState::for_app(&app, 0.0);
            let screen = draw(&app, &mut tui, 0.0);
            assert!(screen.contains(expect), "{path} should show {expect:?}");
            for other in absent {
                assert!(
                    !screen.contains(other),
                    "{path} should not show {other:?}"
                );
            }
        }
    }

    #[test]
    fn test_projects_route_renders_project_cards() {
        let app = crate::test_support::test_app_at("/projects");
        let mut tui = TuiState::for_app(&app, 0.0);
        let screen = draw(&app, &mut tui, 0.0);
        assert!(screen.contains("Projects"));
        assert!(screen.contains("Plantation Management System"));
    }

    #[test]
    fn test_undeclared_path_renders_no_view_content() {
        let app = crate::test_support::test_app_at("/missing");
        let mut tui = TuiState::for_app(&app, 0.0);
        let screen = draw(&app, &mut tui, 0.0);
        for marker in ["Hi, I'm", "What I Do", "Get In Touch", "My Technical Skills"] {
            assert!(!screen.contains(marker));
        }
    }

    #[test]
    fn test_hit_test_prefers_screen_zones_and_offsets_content() {
        let view_area = Rect::new(0, 2, 80, 20);
        let zones = ZoneSet {
            screen: vec![HitZone {
                rect: Rect::new(10, 0, 10, 1),
                kind: HitKind::Route("/about"),
                hover: None,
            }],
            content: vec![HitZone {
                rect: Rect::new(0, 30, 20, 2),
                kind: HitKind::DownloadCv,
                hover: None,
            }],
        };

        let hit = hit_test(&zones, view_area, 0, 12, 0).unwrap();
        assert_eq!(hit.kind, HitKind::Route("/about"));

        // content row 30 is on screen row 30 - scroll 25 + view.y 2 = 7
        let hit = hit_test(&zones, view_area, 25, 5, 7).unwrap();
        assert_eq!(hit.kind, HitKind::DownloadCv);

        // same spot without scroll hits nothing
        assert!(hit_test(&zones, view_area, 0, 5, 7).is_none());
    }
}
