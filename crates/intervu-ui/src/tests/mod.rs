//! Behavioral tests for UI wiring
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on behavior rather than implementation details.

pub mod navigation_behaviors;
