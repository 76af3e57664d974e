//! End-to-end navigation scenarios: router → reducer → rendered frame,
//! with the navbar highlight and binding lifecycle observed from outside.

use folio::core::action::{Action, Effect, update};
use folio::core::router::{self, ROUTES};
use folio::core::state::App;
use folio::tui::TuiState;
use folio::tui::ui::{draw_ui, hit_test};
use folio::tui::views::{HitKind, home, projects};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Color;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;

fn settled_app(path: &str) -> App {
    let mut app = App::new(path);
    app.reduced_motion = true;
    app
}

fn draw(app: &App, tui: &mut TuiState, now: f32) -> Buffer {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw_ui(f, app, tui, now)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_string(buffer: &Buffer, y: u16) -> String {
    (0..WIDTH)
        .map(|x| buffer.cell(Position::new(x, y)).unwrap().symbol())
        .collect()
}

/// Foreground color of the first cell of `label` in the navbar link row.
fn nav_label_fg(buffer: &Buffer, label: &str) -> Color {
    let row = row_string(buffer, 0);
    let x = row.find(label).unwrap_or_else(|| panic!("{label} not in navbar: {row:?}")) as u16;
    buffer.cell(Position::new(x, 0)).unwrap().style().fg.unwrap_or(Color::Reset)
}

#[test]
fn every_declared_path_renders_exactly_one_view() {
    let markers = [
        ("/", "Hi, I'm"),
        ("/about", "What I Do"),
        ("/projects", "Plantation Management System"),
        ("/skills", "My Technical Skills"),
        ("/contact", "Get In Touch"),
    ];
    for (path, marker) in markers {
        let app = settled_app(path);
        let mut tui = TuiState::for_app(&app, 0.0);
        let buffer = draw(&app, &mut tui, 0.0);
        let screen: String = (0..HEIGHT).map(|y| row_string(&buffer, y)).collect();
        assert!(screen.contains(marker), "{path} should render {marker:?}");
        for (other_path, other_marker) in markers {
            if other_path != path {
                assert!(
                    !screen.contains(other_marker),
                    "{path} must not render {other_path}'s content"
                );
            }
        }
    }
}

#[test]
fn clicking_about_moves_the_active_highlight() {
    let mut app = settled_app("/");
    let mut tui = TuiState::for_app(&app, 0.0);

    // Settled frame at the start route: Home is the single active link.
    let buffer = draw(&app, &mut tui, 10.0);
    assert_eq!(nav_label_fg(&buffer, "Home"), Color::Cyan);
    assert_ne!(nav_label_fg(&buffer, "About"), Color::Cyan);

    // Click the About link through the recorded hit zones.
    let about_zone = tui
        .zones
        .screen
        .iter()
        .find(|z| z.kind == HitKind::Route("/about"))
        .expect("navbar should expose an About zone")
        .clone();
    let zone = hit_test(
        &tui.zones,
        tui.view_area,
        0,
        about_zone.rect.x,
        about_zone.rect.y,
    )
    .expect("About zone should be hittable");
    let HitKind::Route(path) = zone.kind.clone() else {
        panic!("expected a route zone");
    };
    let effect = update(&mut app, Action::Navigate(path.to_string()));
    assert_eq!(effect, Effect::Remount);
    assert!(tui.sync(&app, 10.0));

    // The first frame after navigation retargets the underline
    // transitions; a later frame shows them settled.
    let buffer = draw(&app, &mut tui, 20.0);
    assert_eq!(app.nav.current_path, "/about");
    assert_eq!(nav_label_fg(&buffer, "About"), Color::Cyan);
    assert_ne!(nav_label_fg(&buffer, "Home"), Color::Cyan);

    let buffer = draw(&app, &mut tui, 21.0);
    // The underline row carries the new link's extended underline.
    assert!(row_string(&buffer, 1).contains('─'));
}

#[test]
fn exactly_one_nav_link_is_active_per_route() {
    for route in ROUTES {
        let app = settled_app(route.path);
        let mut tui = TuiState::for_app(&app, 0.0);
        let buffer = draw(&app, &mut tui, 10.0);
        let active = ROUTES
            .iter()
            .filter(|r| nav_label_fg(&buffer, r.label) == Color::Cyan)
            .count();
        assert_eq!(active, 1, "exactly one active link on {}", route.path);
    }
}

#[test]
fn menu_toggle_round_trips_without_touching_the_path() {
    let mut app = settled_app("/skills");
    let nav_before = app.nav.clone();

    assert_eq!(update(&mut app, Action::ToggleMenu), Effect::None);
    assert!(app.nav.menu_open);
    assert_eq!(app.nav.current_path, "/skills");

    assert_eq!(update(&mut app, Action::ToggleMenu), Effect::None);
    assert_eq!(app.nav, nav_before);
    assert_eq!(app.mount_seq, 0, "menu toggling must not remount");
}

#[test]
fn navigating_away_releases_the_old_views_bindings() {
    let mut app = App::new("/projects");
    let mut tui = TuiState::for_app(&app, 0.0);
    assert!(tui.view_binder.binding_count() > 0);

    // Hover a project card, then navigate away mid-hover.
    tui.view_binder.set_hovered(Some(projects::card_target(0)), 1.0);
    update(&mut app, Action::Navigate("/".to_string()));
    assert!(tui.sync(&app, 2.0));

    // The old card's hover binding is gone, not ramping back forever.
    assert_eq!(tui.view_binder.hover_level(projects::card_target(0), 3.0), 0.0);
    // The new mount carries Home's bindings, including its hover specs.
    let home_starts = tui.view_binder.scheduled_starts(2.0);
    assert!(!home_starts.is_empty());
    assert!(home_starts.iter().any(|(t, _)| *t == home::HEADING));
}

#[test]
fn home_social_cascade_staggers_by_fixed_interval() {
    let app = App::new("/");
    let tui = TuiState::for_app(&app, 0.0);
    let starts = tui.view_binder.scheduled_starts(0.0);

    let mut social: Vec<f32> = starts
        .iter()
        .filter(|(t, _)| (0..app.portfolio.socials.len()).any(|i| home::social_target(i) == *t))
        .map(|(_, offset)| *offset)
        .collect();
    social.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(social.len(), app.portfolio.socials.len());
    for pair in social.windows(2) {
        assert!((pair[1] - pair[0] - 0.15).abs() < 1e-4, "stagger interval must be 0.15");
    }
}

#[test]
fn unknown_start_route_is_unreachable_from_the_router() {
    assert_eq!(router::resolve("/blog"), None);
    // The app still runs; the view area just has nothing declared for it.
    let app = settled_app("/blog");
    let mut tui = TuiState::for_app(&app, 0.0);
    let buffer = draw(&app, &mut tui, 0.0);
    let screen: String = (0..HEIGHT).map(|y| row_string(&buffer, y)).collect();
    assert!(!screen.contains("Hi, I'm"));
    assert!(!screen.contains("Get In Touch"));
}
