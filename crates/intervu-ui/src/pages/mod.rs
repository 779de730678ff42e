//! Page components for the Intervu UI
//!
//! This module contains the top-level page components for each route.

pub mod home;
pub mod meeting;
pub mod not_found;
pub mod recordings;
pub mod schedule;

pub use home::Home;
pub use meeting::MeetingRoom;
pub use not_found::NotFound;
pub use recordings::Recordings;
pub use schedule::Schedule;
