//! Leptos 0.7 CSR frontend for the Intervu interview dashboard
//!
//! This crate provides a client-side rendered web UI where interviewers start
//! and join meetings and candidates see their scheduled interviews.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Type-safe routing with leptos_router
//! - Page branching decided by `intervu_core::DashboardView`
//! - HTTP data sources polled into signals
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and navigation
//! - `pages`: Top-level page components
//! - `components`: Presentational components
//! - `state`: Data sources (role, interviews) and backend access
//! - `config`: Build-time configuration
//! - `utils`: Browser clock helpers

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

// Re-export main App component for convenience
pub use app::App;

#[cfg(test)]
mod tests;
