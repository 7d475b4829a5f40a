//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The two pages never call each other. Onboarding writes the profile and
//! navigates; the dashboard reads it on load.

pub mod dashboard;
pub mod onboarding;
