//! # Router
//!
//! Maps a URL-style path to exactly one route view. The table is static and
//! immutable; paths are unique and matching is exact (no prefixes, no
//! params, no catch-all). Unknown paths resolve to `None` and the view area
//! renders nothing — the declared path set is total for the app's own
//! navigation surface.
//!
//! The router owns no state. The current path lives in
//! [`NavState`](crate::core::state::NavState) and only changes through
//! `update(app, Action::Navigate(..))`.

/// Identifies one of the five route views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteId {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

/// One row of the route table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub view: RouteId,
    /// Link text in the navbar and menu overlay.
    pub label: &'static str,
}

/// The full navigable surface, in navbar order.
pub const ROUTES: &[Route] = &[
    Route { path: "/", view: RouteId::Home, label: "Home" },
    Route { path: "/about", view: RouteId::About, label: "About" },
    Route { path: "/projects", view: RouteId::Projects, label: "Projects" },
    Route { path: "/skills", view: RouteId::Skills, label: "Skills" },
    Route { path: "/contact", view: RouteId::Contact, label: "Contact" },
];

/// Exact-match path lookup.
pub fn resolve(path: &str) -> Option<RouteId> {
    ROUTES.iter().find(|r| r.path == path).map(|r| r.view)
}

/// Inverse of [`resolve`]; every `RouteId` has exactly one path.
pub fn path_of(view: RouteId) -> &'static str {
    ROUTES
        .iter()
        .find(|r| r.view == view)
        .map(|r| r.path)
        .unwrap_or("/")
}

/// Active-link predicate for the navigation shell. At most one route is
/// active for any current path; zero when the path is undeclared.
pub fn is_active(current_path: &str, route: &Route) -> bool {
    current_path == route.path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_path_resolves_to_its_view() {
        assert_eq!(resolve("/"), Some(RouteId::Home));
        assert_eq!(resolve("/about"), Some(RouteId::About));
        assert_eq!(resolve("/projects"), Some(RouteId::Projects));
        assert_eq!(resolve("/skills"), Some(RouteId::Skills));
        assert_eq!(resolve("/contact"), Some(RouteId::Contact));
    }

    #[test]
    fn test_unknown_paths_resolve_to_none() {
        assert_eq!(resolve("/blog"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("/about/"), None); // exact match only
        assert_eq!(resolve("about"), None);
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_path_of_round_trips() {
        for route in ROUTES {
            assert_eq!(resolve(path_of(route.view)), Some(route.view));
        }
    }

    #[test]
    fn test_exactly_one_active_link_per_declared_path() {
        for route in ROUTES {
            let active = ROUTES
                .iter()
                .filter(|r| is_active(route.path, r))
                .count();
            assert_eq!(active, 1);
        }
        let active = ROUTES.iter().filter(|r| is_active("/nope", r)).count();
        assert_eq!(active, 0);
    }
}
