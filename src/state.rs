use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::DEFAULT_BASE_URL;
use crate::fixtures::FixtureSource;
use crate::logging::{log_route, log_view, v_str};
use crate::routes::{resolve, sidebar, DashboardTab, NavGroup, Navigation, Route};
use crate::session::{IdentityProvider, Session};
use crate::views::{
    AutomationDemo, ChatDemo, InsightsPage, InventoryBoard, Overview, PluginBoard, SalesLedger,
    SupplierPanel,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub fixture_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_base: DEFAULT_BASE_URL.to_string(), fixture_seed: None }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("SOUS_API_BASE")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            fixture_seed: std::env::var("FIXTURE_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }

    /// Explicit seed, or one taken from the wall clock when unset.
    pub fn seed(&self) -> u64 {
        self.fixture_seed.unwrap_or_else(|| Utc::now().timestamp_millis() as u64)
    }
}

/// Landing page: the two interactive demos.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Landing {
    pub chat: ChatDemo,
    pub automation: AutomationDemo,
}

/// State of whichever page is mounted. Replacing it drops the previous
/// page's fixtures.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", content = "state", rename_all = "lowercase")]
pub enum Page {
    Landing(Landing),
    Login,
    Overview(Overview),
    Sales(SalesLedger),
    Inventory(InventoryBoard),
    Suppliers(SupplierPanel),
    Insights(InsightsPage),
    Plugins(PluginBoard),
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Landing(_) => "landing",
            Page::Login => "login",
            Page::Overview(_) => "overview",
            Page::Sales(_) => "sales",
            Page::Inventory(_) => "inventory",
            Page::Suppliers(_) => "suppliers",
            Page::Insights(_) => "insights",
            Page::Plugins(_) => "plugins",
        }
    }
}

/// Top-level app shell: session, current route, mounted page and the
/// mobile sidebar toggle.
#[derive(Debug)]
pub struct AppState {
    session: Session,
    route: Route,
    page: Page,
    sidebar_open: bool,
    base_seed: u64,
    mounts: u64,
    clock: Option<DateTime<Utc>>,
}

impl AppState {
    /// Starts on `/`, already run through the guard for whoever the
    /// identity provider reports.
    pub fn new(cfg: &Config, identity: &impl IdentityProvider) -> Self {
        Self::build(cfg.seed(), None, identity.session())
    }

    /// Pins the fixture clock so pages mount reproducibly.
    pub fn with_clock(seed: u64, now: DateTime<Utc>, identity: &impl IdentityProvider) -> Self {
        Self::build(seed, Some(now), identity.session())
    }

    fn build(base_seed: u64, clock: Option<DateTime<Utc>>, session: Session) -> Self {
        let mut app = Self {
            session,
            route: Route::Home,
            page: Page::Landing(Landing::default()),
            sidebar_open: false,
            base_seed,
            mounts: 0,
            clock,
        };
        app.navigate(Route::Home.path());
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn nav(&self) -> Vec<NavGroup> {
        sidebar()
    }

    /// Resolves `path` against the session and mounts the target page.
    /// Every navigation remounts, so fixtures are regenerated even when the
    /// route is unchanged.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let nav = resolve(path, &self.session);
        log_route(&nav.requested, nav.route.path(), nav.redirected);
        self.route = nav.route;
        self.sidebar_open = false;
        self.page = self.mount(nav.route);
        log_view(self.page.name(), "mount", &[("path", v_str(nav.route.path()))]);
        nav
    }

    /// Re-reads the identity provider. A changed session re-runs the guard:
    /// signing in re-resolves the current route, signing out lands on `/`.
    pub fn refresh_session(&mut self, identity: &impl IdentityProvider) -> Option<Navigation> {
        let session = identity.session();
        if session == self.session {
            return None;
        }
        let target = if session.is_signed_in() {
            self.route.path()
        } else {
            Route::Home.path()
        };
        self.session = session;
        Some(self.navigate(target))
    }

    fn mount(&mut self, route: Route) -> Page {
        let tab = match route {
            Route::Home => return Page::Landing(Landing::default()),
            Route::Login => return Page::Login,
            Route::Dashboard(tab) => tab,
        };
        let mut src = self.next_source();
        match tab {
            DashboardTab::Overview => Page::Overview(Overview::mount(&mut src)),
            DashboardTab::Sales => Page::Sales(SalesLedger::mount(&mut src)),
            DashboardTab::Inventory => Page::Inventory(InventoryBoard::mount(&mut src)),
            DashboardTab::Suppliers => Page::Suppliers(SupplierPanel::mount(&mut src)),
            DashboardTab::Insights => Page::Insights(InsightsPage::mount()),
            DashboardTab::Plugins => Page::Plugins(PluginBoard::mount()),
        }
    }

    fn next_source(&mut self) -> FixtureSource {
        let seed = self.base_seed.wrapping_add(self.mounts);
        self.mounts += 1;
        match self.clock {
            Some(now) => FixtureSource::with_clock(seed, now),
            None => FixtureSource::new(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixed_clock;
    use crate::session::User;

    fn signed_in() -> Session {
        Session::Authenticated(User {
            id: "u_1".into(),
            display_name: "Dana".into(),
            email: "dana@example.com".into(),
        })
    }

    #[test]
    fn test_config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.api_base, DEFAULT_BASE_URL);
        assert_eq!(Config { fixture_seed: Some(9), ..cfg }.seed(), 9);
    }

    #[test]
    fn test_starts_on_landing_or_dashboard_by_session() {
        let app = AppState::with_clock(1, fixed_clock(), &Session::Anonymous);
        assert_eq!(app.route(), Route::Home);
        assert!(matches!(app.page(), Page::Landing(_)));

        let app = AppState::with_clock(1, fixed_clock(), &signed_in());
        assert_eq!(app.route(), Route::DASHBOARD_ROOT);
        assert!(matches!(app.page(), Page::Overview(_)));
    }

    #[test]
    fn test_anonymous_dashboard_visit_lands_on_login() {
        let mut app = AppState::with_clock(1, fixed_clock(), &Session::Anonymous);
        let nav = app.navigate("/dashboard/sales");
        assert_eq!(nav.route, Route::Login);
        assert!(matches!(app.page(), Page::Login));
    }

    #[test]
    fn test_sign_in_on_login_moves_to_dashboard() {
        let mut app = AppState::with_clock(1, fixed_clock(), &Session::Anonymous);
        app.navigate("/login");
        let nav = app.refresh_session(&signed_in()).unwrap();
        assert_eq!(nav.route, Route::DASHBOARD_ROOT);
        assert!(matches!(app.page(), Page::Overview(_)));
    }

    #[test]
    fn test_sign_in_on_landing_moves_to_dashboard() {
        let mut app = AppState::with_clock(1, fixed_clock(), &Session::Anonymous);
        assert_eq!(app.route(), Route::Home);
        let nav = app.refresh_session(&signed_in()).unwrap();
        assert_eq!(nav.route, Route::DASHBOARD_ROOT);
        assert!(nav.redirected);
        assert!(matches!(app.page(), Page::Overview(_)));
    }

    #[test]
    fn test_unchanged_session_does_not_remount() {
        let mut app = AppState::with_clock(1, fixed_clock(), &signed_in());
        app.navigate("/dashboard/suppliers");
        assert!(app.refresh_session(&signed_in()).is_none());
        assert_eq!(app.route(), Route::Dashboard(DashboardTab::Suppliers));
    }

    #[test]
    fn test_navigation_closes_sidebar() {
        let mut app = AppState::with_clock(1, fixed_clock(), &signed_in());
        app.toggle_sidebar();
        assert!(app.sidebar_open());
        app.navigate("/dashboard/inventory");
        assert!(!app.sidebar_open());
        assert!(matches!(app.page(), Page::Inventory(_)));
    }

    #[test]
    fn test_nav_exposes_both_sidebar_groups() {
        let app = AppState::with_clock(1, fixed_clock(), &signed_in());
        let titles: Vec<_> = app.nav().iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["General", "Tools"]);
        let active: Vec<_> = app
            .nav()
            .into_iter()
            .flat_map(|g| g.items)
            .filter(|i| i.is_active(app.route()))
            .map(|i| i.name)
            .collect();
        assert_eq!(active, vec!["Dashboard"]);
    }

    #[test]
    fn test_remount_regenerates_fixtures() {
        let mut app = AppState::with_clock(1, fixed_clock(), &signed_in());
        app.navigate("/dashboard/inventory");
        let first = match app.page() {
            Page::Inventory(b) => b.items()[0].id.clone(),
            other => panic!("unexpected page {}", other.name()),
        };
        app.navigate("/dashboard/inventory");
        let second = match app.page() {
            Page::Inventory(b) => b.items()[0].id.clone(),
            other => panic!("unexpected page {}", other.name()),
        };
        assert_ne!(first, second);
    }

    #[test]
    fn test_sign_out_returns_home() {
        let mut app = AppState::with_clock(1, fixed_clock(), &signed_in());
        app.navigate("/dashboard/plugins");
        let nav = app.refresh_session(&Session::Anonymous).unwrap();
        assert_eq!(nav.route, Route::Home);
        assert!(!app.session().is_signed_in());
        assert!(matches!(app.page(), Page::Landing(_)));
    }
}
