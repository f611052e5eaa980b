//! Client-side route table and the auth guard in front of the dashboard.

use serde::{Deserialize, Serialize};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Overview,
    Sales,
    Inventory,
    Suppliers,
    Insights,
    Plugins,
}

impl DashboardTab {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "sales" => Some(DashboardTab::Sales),
            "inventory" => Some(DashboardTab::Inventory),
            "suppliers" => Some(DashboardTab::Suppliers),
            "insights" => Some(DashboardTab::Insights),
            "plugins" => Some(DashboardTab::Plugins),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "page", content = "tab", rename_all = "lowercase")]
pub enum Route {
    Home,
    Login,
    Dashboard(DashboardTab),
}

impl Route {
    pub const DASHBOARD_ROOT: Route = Route::Dashboard(DashboardTab::Overview);

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Dashboard(DashboardTab::Overview) => "/dashboard",
            Route::Dashboard(DashboardTab::Sales) => "/dashboard/sales",
            Route::Dashboard(DashboardTab::Inventory) => "/dashboard/inventory",
            Route::Dashboard(DashboardTab::Suppliers) => "/dashboard/suppliers",
            Route::Dashboard(DashboardTab::Insights) => "/dashboard/insights",
            Route::Dashboard(DashboardTab::Plugins) => "/dashboard/plugins",
        }
    }

    /// Matches a path; the flag is set when the path had to be rewritten.
    /// Unknown dashboard sub-paths land on the dashboard root, anything
    /// else unknown on the home page.
    pub fn parse(path: &str) -> (Route, bool) {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => (Route::Home, false),
            ["login"] => (Route::Login, false),
            ["dashboard"] => (Route::DASHBOARD_ROOT, false),
            ["dashboard", tab] => match DashboardTab::from_segment(tab) {
                Some(tab) => (Route::Dashboard(tab), false),
                None => (Route::DASHBOARD_ROOT, true),
            },
            ["dashboard", ..] => (Route::DASHBOARD_ROOT, true),
            _ => (Route::Home, true),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub requested: String,
    pub route: Route,
    pub redirected: bool,
}

/// Path matching followed by the session guard: anonymous visitors are sent
/// from the dashboard to `/login`, signed-in users from `/` and `/login` to
/// the dashboard.
pub fn resolve(path: &str, session: &Session) -> Navigation {
    let (matched, rewritten) = Route::parse(path);
    let route = match (matched, session.is_signed_in()) {
        (r, false) if r.requires_session() => Route::Login,
        (Route::Home | Route::Login, true) => Route::DASHBOARD_ROOT,
        (r, _) => r,
    };
    Navigation {
        requested: path.to_string(),
        route,
        redirected: rewritten || route != matched,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
}

impl NavItem {
    pub fn is_active(&self, current: Route) -> bool {
        self.route == current
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

pub fn sidebar() -> Vec<NavGroup> {
    let item = |name, tab| NavItem { name, route: Route::Dashboard(tab) };
    vec![
        NavGroup {
            title: "General",
            items: vec![
                item("Dashboard", DashboardTab::Overview),
                item("Sales", DashboardTab::Sales),
                item("Inventory", DashboardTab::Inventory),
            ],
        },
        NavGroup {
            title: "Tools",
            items: vec![
                item("Suppliers", DashboardTab::Suppliers),
                item("Insights", DashboardTab::Insights),
                item("Plugins", DashboardTab::Plugins),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;

    fn signed_in() -> Session {
        Session::Authenticated(User {
            id: "u1".into(),
            display_name: "Sam".into(),
            email: "sam@example.com".into(),
        })
    }

    #[test]
    fn test_parses_known_paths() {
        assert_eq!(Route::parse("/"), (Route::Home, false));
        assert_eq!(Route::parse("/login"), (Route::Login, false));
        assert_eq!(Route::parse("/dashboard"), (Route::DASHBOARD_ROOT, false));
        assert_eq!(
            Route::parse("/dashboard/plugins/"),
            (Route::Dashboard(DashboardTab::Plugins), false)
        );
        assert_eq!(
            Route::parse("/dashboard/sales?page=2"),
            (Route::Dashboard(DashboardTab::Sales), false)
        );
    }

    #[test]
    fn test_unknown_dashboard_subpath_redirects_to_root() {
        assert_eq!(Route::parse("/dashboard/settings"), (Route::DASHBOARD_ROOT, true));
        assert_eq!(Route::parse("/dashboard/sales/42"), (Route::DASHBOARD_ROOT, true));
        assert_eq!(Route::parse("/pricing"), (Route::Home, true));
    }

    #[test]
    fn test_paths_round_trip_through_parse() {
        for group in sidebar() {
            for item in group.items {
                assert_eq!(Route::parse(item.route.path()), (item.route, false));
            }
        }
    }

    #[test]
    fn test_guard_sends_anonymous_to_login() {
        let nav = resolve("/dashboard/inventory", &Session::Anonymous);
        assert_eq!(nav.route, Route::Login);
        assert!(nav.redirected);
    }

    #[test]
    fn test_guard_sends_signed_in_away_from_landing_and_login() {
        let nav = resolve("/login", &signed_in());
        assert_eq!(nav.route, Route::DASHBOARD_ROOT);
        assert!(nav.redirected);

        let nav = resolve("/", &signed_in());
        assert_eq!(nav.route, Route::DASHBOARD_ROOT);
        assert!(nav.redirected);

        let nav = resolve("/dashboard/insights", &signed_in());
        assert_eq!(nav.route, Route::Dashboard(DashboardTab::Insights));
        assert!(!nav.redirected);
    }

    #[test]
    fn test_sidebar_marks_active_entry() {
        let current = Route::Dashboard(DashboardTab::Suppliers);
        let active: Vec<_> = sidebar()
            .into_iter()
            .flat_map(|g| g.items)
            .filter(|i| i.is_active(current))
            .map(|i| i.name)
            .collect();
        assert_eq!(active, vec!["Suppliers"]);
    }
}
