//! Behavioral tests for navigation and routing

use intervu_core::modal::meeting_path;
use intervu_core::{QUICK_ACTIONS, QuickActionIntent};

use crate::router::routes;

// ============================================================================
// ROUTE CONSTANT BEHAVIORS
// ============================================================================

#[test]
fn given_route_constants_when_checking_home_then_is_root() {
    assert_eq!(routes::HOME, "/");
}

#[test]
fn given_route_constants_when_checked_then_all_unique() {
    let routes = [routes::HOME, routes::SCHEDULE, routes::RECORDINGS, routes::MEETING];

    let unique: std::collections::HashSet<_> = routes.iter().collect();
    assert_eq!(unique.len(), routes.len(), "All routes should be unique");
}

#[test]
fn given_route_constants_except_home_when_checked_then_no_trailing_slash() {
    for route in [routes::SCHEDULE, routes::RECORDINGS, routes::MEETING] {
        assert!(route.starts_with('/'), "{route} should start with /");
        assert!(!route.ends_with('/'), "{route} should not end with /");
        assert_eq!(route, route.to_lowercase(), "{route} should be lowercase");
    }
}

// ============================================================================
// QUICK ACTION NAVIGATION BEHAVIORS
// ============================================================================

#[test]
fn given_navigating_quick_actions_when_resolved_then_target_a_routed_page() {
    let routed = [routes::SCHEDULE, routes::RECORDINGS];

    let targets: Vec<String> = QUICK_ACTIONS
        .iter()
        .filter_map(|action| match QuickActionIntent::for_title(action.title) {
            QuickActionIntent::Navigate(path) => Some(path),
            QuickActionIntent::OpenModal(_) => None,
        })
        .collect();

    assert_eq!(targets.len(), 2, "Schedule and Recordings navigate");
    for target in targets {
        assert!(
            routed.contains(&target.as_str()),
            "{target} should have a route"
        );
    }
}

#[test]
fn given_meeting_id_when_building_path_then_under_meeting_route() {
    let path = meeting_path("abc-123");
    assert!(path.starts_with(routes::MEETING));
    assert_eq!(path, "/meeting/abc-123");
}
