//! User profile record and its persisted form.
//!
//! DESIGN
//! ======
//! The onboarding and dashboard pages share nothing except the single record
//! stored under [`STORAGE_KEY`]. It is a singleton: [`save_profile`] replaces
//! whatever was there and nothing in the app ever removes it.
//!
//! The stored form is a JSON object with exactly `name`, `email` and `goals`.
//! A stored JSON `null` reads back as "no record".

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, StorageError};

/// Storage key holding the serialized [`UserProfile`].
pub const STORAGE_KEY: &str = "userData";

/// Profile captured by the onboarding form.
///
/// Fields hold exactly what the user typed, empty strings included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub goals: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>, goals: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), goals: goals.into() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode profile: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored profile is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Serialize `profile` and write it under [`STORAGE_KEY`], overwriting any
/// previous record.
///
/// # Errors
///
/// Returns [`ProfileError::Storage`] if the backend rejects the write (for
/// example storage disabled or quota exceeded).
pub fn save_profile(store: &dyn KeyValueStore, profile: &UserProfile) -> Result<(), ProfileError> {
    let raw = serde_json::to_string(profile).map_err(ProfileError::Serialize)?;
    store.set(STORAGE_KEY, &raw)?;
    Ok(())
}

/// Read the record under [`STORAGE_KEY`].
///
/// `Ok(None)` means the key was never set (or holds JSON `null`).
///
/// # Errors
///
/// Returns [`ProfileError::Malformed`] when text is present but is not a
/// complete record, and [`ProfileError::Storage`] when the backend cannot be
/// read.
pub fn load_profile(store: &dyn KeyValueStore) -> Result<Option<UserProfile>, ProfileError> {
    let Some(raw) = store.get(STORAGE_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str::<Option<UserProfile>>(&raw).map_err(ProfileError::Malformed)
}
