//! Client-side data model.
//!
//! DESIGN
//! ======
//! The only persisted state is the onboarding profile; pages read and write
//! it through `profile` rather than touching storage themselves.

pub mod profile;
