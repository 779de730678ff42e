//! Application state management
//!
//! The dashboard reads two asynchronous sources: the viewer's role and the
//! viewer's interviews. Both are plain signals provided through context, so
//! pages only read them and never fetch on their own.
//!
//! Use `init_sources()` once in the app shell and `use_dashboard_sources()`
//! in pages.

pub mod api;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use intervu_core::config::endpoints;
use intervu_core::{Config, DashboardView, Interview, QueryResult, RoleState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Reactive data sources behind the home page
#[derive(Debug, Clone, Copy)]
pub struct DashboardSources {
    pub role: Signal<RoleState>,
    pub interviews: Signal<QueryResult<Interview>>,
}

impl DashboardSources {
    /// Sources that never change, for previews and tests.
    #[must_use]
    pub fn fixed(role: RoleState, interviews: QueryResult<Interview>) -> Self {
        Self {
            role: RwSignal::new(role).into(),
            interviews: RwSignal::new(interviews).into(),
        }
    }

    /// Derive the page view from the current values (tracked).
    #[must_use]
    pub fn current_view(&self) -> DashboardView {
        self.role
            .with(|role| self.interviews.with(|query| DashboardView::derive(role, query)))
    }
}

/// Read the sources provided by the app shell.
///
/// # Panics
/// Panics if called outside of `App`, which provides the sources.
#[must_use]
pub fn use_dashboard_sources() -> DashboardSources {
    expect_context::<DashboardSources>()
}

/// Start resolving the role and subscribing to the interview list.
///
/// The interview list is re-fetched every `config.poll_interval` until the
/// calling owner is cleaned up. A refresh keeps the previous result visible
/// until it completes.
pub fn init_sources(config: &Config) -> DashboardSources {
    let (role, set_role) = signal(RoleState::Loading);
    let (interviews, set_interviews) = signal(QueryResult::<Interview>::Loading);

    let user_url = config.endpoint(endpoints::CURRENT_USER);
    spawn_local(async move {
        let resolved = api::fetch_current_user(&user_url)
            .await
            .map(|profile| RoleState::from_profile(profile.as_ref()))
            .unwrap_or_else(|e| {
                log::warn!("Could not resolve user role: {e}");
                RoleState::Unassigned
            });
        log::debug!("Role resolved: {resolved:?}");
        set_role.set(resolved);
    });

    let stopped = Arc::new(AtomicBool::new(false));
    {
        let stopped = Arc::clone(&stopped);
        on_cleanup(move || stopped.store(true, Ordering::Relaxed));
    }
    spawn_local(poll_interviews(
        config.endpoint(endpoints::MY_INTERVIEWS),
        config.poll_interval,
        set_interviews,
        stopped,
    ));

    DashboardSources {
        role: role.into(),
        interviews: interviews.into(),
    }
}

/// Fetch the interview list, then keep refreshing it on `interval`.
async fn poll_interviews(
    url: String,
    interval: Option<Duration>,
    set_interviews: WriteSignal<QueryResult<Interview>>,
    stopped: Arc<AtomicBool>,
) {
    loop {
        let result = QueryResult::from_fetch(api::fetch_my_interviews(&url).await);
        if stopped.load(Ordering::Relaxed) {
            break;
        }
        log::debug!("Interview query is {}", result.status());
        set_interviews.set(result);

        let Some(interval) = interval else {
            break;
        };
        gloo_timers::future::sleep(interval).await;
        if stopped.load(Ordering::Relaxed) {
            break;
        }
    }
    log::debug!("Stopped polling {url}");
}
