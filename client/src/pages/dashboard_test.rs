use super::*;
use crate::state::profile::{STORAGE_KEY, save_profile};
use crate::util::storage::{MemoryStorage, StorageError};

fn store_with(raw: &str) -> MemoryStorage {
    let store = MemoryStorage::new();
    store.set(STORAGE_KEY, raw).unwrap();
    store
}

// =============================================================
// load
// =============================================================

#[test]
fn load_saved_profile_has_record() {
    let store = MemoryStorage::new();
    let ada = UserProfile::new("Ada", "ada@example.com", "learn systems");
    save_profile(&store, &ada).unwrap();
    assert_eq!(DashboardView::load(&store), DashboardView::HasRecord(ada));
}

#[test]
fn load_unset_key_is_no_record() {
    assert_eq!(DashboardView::load(&MemoryStorage::new()), DashboardView::NoRecord);
}

#[test]
fn load_corrupted_text_is_malformed() {
    assert_eq!(DashboardView::load(&store_with("{\"name\":")), DashboardView::Malformed);
}

#[test]
fn load_unreadable_backend_is_no_record() {
    struct Unreadable;
    impl KeyValueStore for Unreadable {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("SecurityError".to_owned()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }
    assert_eq!(DashboardView::load(&Unreadable), DashboardView::NoRecord);
}

#[test]
fn load_shows_latest_write_only() {
    let store = MemoryStorage::new();
    save_profile(&store, &UserProfile::new("Old", "old@example.com", "old")).unwrap();
    save_profile(&store, &UserProfile::new("New", "new@example.com", "new")).unwrap();
    assert_eq!(
        DashboardView::load(&store).lines(),
        vec!["Name: New", "Email: new@example.com", "Goals: new"]
    );
}

// =============================================================
// lines / markup
// =============================================================

#[test]
fn record_renders_three_labelled_lines() {
    let view = DashboardView::HasRecord(UserProfile::new("Ada", "ada@example.com", "learn systems"));
    assert_eq!(view.lines(), vec!["Name: Ada", "Email: ada@example.com", "Goals: learn systems"]);
    assert_eq!(
        view.to_markup(),
        "<p>Name: Ada</p><p>Email: ada@example.com</p><p>Goals: learn systems</p>"
    );
}

#[test]
fn no_record_renders_only_fallback() {
    let view = DashboardView::NoRecord;
    assert_eq!(view.lines(), vec![NO_RECORD_MESSAGE]);
    assert_eq!(view.to_markup(), "<p>No user data found. Please onboard first.</p>");
}

#[test]
fn malformed_renders_only_its_message() {
    let view = DashboardView::Malformed;
    assert_eq!(view.lines(), vec![MALFORMED_MESSAGE]);
    assert_eq!(view.to_markup(), format!("<p>{MALFORMED_MESSAGE}</p>"));
}

#[test]
fn empty_fields_render_bare_labels() {
    let view = DashboardView::HasRecord(UserProfile::default());
    assert_eq!(view.lines(), vec!["Name: ", "Email: ", "Goals: "]);
}

#[test]
fn field_markup_is_escaped() {
    let view = DashboardView::HasRecord(UserProfile::new(
        "<script>alert(1)</script>",
        "a&b@example.com",
        "\"quoted\"",
    ));
    assert_eq!(
        view.to_markup(),
        "<p>Name: &lt;script&gt;alert(1)&lt;/script&gt;</p>\
         <p>Email: a&amp;b@example.com</p>\
         <p>Goals: &quot;quoted&quot;</p>"
    );
}
