use super::*;
use crate::state::profile::{STORAGE_KEY, load_profile};
use crate::util::storage::{MemoryStorage, StorageError};

struct FullStorage;

impl KeyValueStore for FullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }
}

#[test]
fn submit_saves_and_targets_dashboard() {
    let store = MemoryStorage::new();
    let ada = UserProfile::new("Ada", "ada@example.com", "learn systems");

    assert_eq!(submit_profile(&store, &ada).unwrap(), "/dashboard");
    assert_eq!(load_profile(&store).unwrap(), Some(ada));
}

#[test]
fn submit_overwrites_previous_profile() {
    let store = MemoryStorage::new();
    submit_profile(&store, &UserProfile::new("Ada", "ada@example.com", "learn systems")).unwrap();
    submit_profile(&store, &UserProfile::new("Alan", "alan@example.com", "break codes")).unwrap();

    let raw = store.get(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("Alan"));
    assert!(!raw.contains("Ada"));
}

#[test]
fn submit_accepts_empty_fields() {
    let store = MemoryStorage::new();
    assert_eq!(submit_profile(&store, &UserProfile::default()).unwrap(), DASHBOARD_PATH);
    assert_eq!(load_profile(&store).unwrap(), Some(UserProfile::default()));
}

#[test]
fn failed_write_yields_no_redirect_target() {
    let result = submit_profile(&FullStorage, &UserProfile::new("Ada", "ada@example.com", "learn systems"));
    assert!(matches!(result, Err(ProfileError::Storage(StorageError::Write(_)))));
}

#[test]
fn save_failed_message_includes_cause() {
    let err = ProfileError::Storage(StorageError::Unavailable);
    assert_eq!(
        save_failed_message(&err),
        "Could not save your profile: local storage is unavailable"
    );
}

#[test]
fn element_ids_match_form_contract() {
    assert_eq!(FORM_ID, "onboarding-form");
    assert_eq!([NAME_INPUT_ID, EMAIL_INPUT_ID, GOALS_INPUT_ID], ["name", "email", "goals"]);
}

// =============================================================
// collect_profile
// =============================================================

fn no_fallback(id: &str) -> String {
    panic!("fallback used for {id}")
}

#[test]
fn collect_profile_reads_fields_by_element_id() {
    let record = collect_profile(
        |id| match id {
            "name" => Some("Ada".to_owned()),
            "email" => Some("ada@example.com".to_owned()),
            "goals" => Some("learn systems".to_owned()),
            _ => None,
        },
        no_fallback,
    );
    assert_eq!(record, UserProfile::new("Ada", "ada@example.com", "learn systems"));
}

#[test]
fn collect_profile_prefers_document_over_fallback() {
    // A browser-restored value differs from the last value seen on input.
    let record = collect_profile(
        |id| (id == "name").then(|| "Restored".to_owned()),
        |id| format!("typed-{id}"),
    );
    assert_eq!(record, UserProfile::new("Restored", "typed-email", "typed-goals"));
}

#[test]
fn collect_profile_keeps_empty_document_values() {
    let record = collect_profile(|_| Some(String::new()), no_fallback);
    assert_eq!(record, UserProfile::default());
}
