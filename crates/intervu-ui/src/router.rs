//! Router configuration for Intervu UI
//!
//! This module defines the routes and navigation structure for the application.

use leptos::prelude::*;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Home, MeetingRoom, NotFound, Recordings, Schedule};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const SCHEDULE: &str = "/schedule";
    pub const RECORDINGS: &str = "/recordings";
    /// Prefix of `/meeting/:id`
    pub const MEETING: &str = "/meeting";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Home />
                <Route path=StaticSegment("schedule") view=Schedule />
                <Route path=StaticSegment("recordings") view=Recordings />
                <Route path=(StaticSegment("meeting"), ParamSegment("id")) view=MeetingRoom />
            </Routes>
        </Router>
    }
}
