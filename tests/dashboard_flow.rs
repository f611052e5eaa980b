//! Walks the app shell the way a visitor would: land, get bounced to login,
//! sign in, move between dashboard pages.

use chrono::{TimeZone, Utc};

use sous::popover::{Placement, Rect, StaticGeometry, Viewport};
use sous::routes::{resolve, DashboardTab, Route};
use sous::session::{Session, User};
use sous::state::{AppState, Page};
use sous::views::PluginTab;

fn owner() -> User {
    User {
        id: "user_42".into(),
        display_name: "Marisol".into(),
        email: "marisol@example.com".into(),
    }
}

fn app(session: Session) -> AppState {
    AppState::with_clock(7, Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(), &session)
}

#[test]
fn visitor_is_bounced_then_signs_in() {
    let mut shell = app(Session::Anonymous);
    assert!(matches!(shell.page(), Page::Landing(_)));

    let nav = shell.navigate("/dashboard/inventory");
    assert_eq!(nav.route, Route::Login);
    assert!(nav.redirected);

    let nav = shell.refresh_session(&Session::Authenticated(owner())).unwrap();
    assert_eq!(nav.route, Route::DASHBOARD_ROOT);
    match shell.page() {
        Page::Overview(o) => assert_eq!(o.revenue().len(), 7),
        other => panic!("expected overview, got {}", other.name()),
    }
}

#[test]
fn signing_in_from_landing_opens_dashboard() {
    let mut shell = app(Session::Anonymous);
    assert_eq!(shell.route(), Route::Home);

    let nav = shell.refresh_session(&Session::Authenticated(owner())).unwrap();
    assert_eq!(nav.requested, "/");
    assert_eq!(nav.route, Route::DASHBOARD_ROOT);
    assert!(nav.redirected);
    assert_eq!(shell.page().name(), "overview");

    let nav = shell.navigate("/");
    assert_eq!(nav.route, Route::DASHBOARD_ROOT);
    assert_eq!(shell.page().name(), "overview");
}

#[test]
fn unknown_paths_redirect() {
    let signed_in = Session::Authenticated(owner());
    assert_eq!(resolve("/dashboard/reports", &signed_in).route, Route::DASHBOARD_ROOT);
    assert_eq!(resolve("/", &signed_in).route, Route::DASHBOARD_ROOT);
    assert_eq!(resolve("/careers", &signed_in).route, Route::DASHBOARD_ROOT);
    assert_eq!(resolve("/careers", &Session::Anonymous).route, Route::Home);
    assert_eq!(resolve("/dashboard/reports", &Session::Anonymous).route, Route::Login);
}

#[test]
fn each_tab_mounts_its_page() {
    let mut shell = app(Session::Authenticated(owner()));
    for (path, name) in [
        ("/dashboard", "overview"),
        ("/dashboard/sales", "sales"),
        ("/dashboard/inventory", "inventory"),
        ("/dashboard/suppliers", "suppliers"),
        ("/dashboard/insights", "insights"),
        ("/dashboard/plugins", "plugins"),
    ] {
        let nav = shell.navigate(path);
        assert!(!nav.redirected, "{}", path);
        assert_eq!(shell.page().name(), name);
        assert_eq!(shell.route().path(), path);
    }
}

#[test]
fn sidebar_reports_exactly_one_active_entry() {
    let mut shell = app(Session::Authenticated(owner()));
    shell.navigate("/dashboard/insights");
    let active: Vec<_> = shell
        .nav()
        .into_iter()
        .flat_map(|g| g.items)
        .filter(|i| i.is_active(shell.route()))
        .map(|i| i.name)
        .collect();
    assert_eq!(active, vec!["Insights"]);
    assert_eq!(shell.route(), Route::Dashboard(DashboardTab::Insights));
}

#[test]
fn page_state_is_local_to_the_mount() {
    let mut shell = app(Session::Authenticated(owner()));
    shell.navigate("/dashboard/plugins");
    if let Page::Plugins(board) = shell.page_mut() {
        board.set_tab(PluginTab::Pos);
        board.set_search("clover");
        assert_eq!(board.filtered().len(), 1);
    }
    shell.navigate("/dashboard/sales");
    shell.navigate("/dashboard/plugins");
    match shell.page() {
        Page::Plugins(board) => assert_eq!(board.tab(), PluginTab::All),
        other => panic!("expected plugins, got {}", other.name()),
    }
}

#[test]
fn ledger_popover_places_by_row_position() {
    let mut shell = app(Session::Authenticated(owner()));
    shell.navigate("/dashboard/sales");
    let Page::Sales(ledger) = shell.page_mut() else {
        panic!("expected sales page");
    };
    let viewport = Viewport::new(800.0);
    let at = |top: f64| StaticGeometry {
        trigger: Some(Rect::new(top, 24.0, 140.0, 20.0)),
        viewport,
    };
    ledger.hover(0, &at(300.0));
    ledger.hover(19, &at(500.0));

    let first = ledger.rows()[0].popover.style().anchor.unwrap();
    let last = ledger.rows()[19].popover.style().anchor.unwrap();
    assert_eq!(first.placement, Placement::Below);
    assert_eq!(first.top, 334.0);
    assert_eq!(last.placement, Placement::Above);
    assert_eq!(last.top, 486.0);
    assert_eq!(last.translate_y_pct, -100.0);
}
