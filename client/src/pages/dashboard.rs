//! Dashboard page showing the onboarding profile saved in this browser.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::profile::{self, ProfileError, UserProfile};
use crate::util::escape::escape_html;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Element id of the container the profile markup is written into.
pub const CONTAINER_ID: &str = "user-data";

pub const NO_RECORD_MESSAGE: &str = "No user data found. Please onboard first.";
pub const MALFORMED_MESSAGE: &str = "Stored user data could not be read. Please onboard again.";

/// What the dashboard shows, decided once when the page loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    HasRecord(UserProfile),
    NoRecord,
    /// Text is stored under the key but does not decode to a profile.
    Malformed,
}

impl DashboardView {
    /// Resolve the view from whatever is currently in `store`.
    ///
    /// An unreadable backend is shown as [`DashboardView::NoRecord`]; a
    /// corrupted record is kept distinct as [`DashboardView::Malformed`].
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match profile::load_profile(store) {
            Ok(Some(record)) => Self::HasRecord(record),
            Ok(None) => Self::NoRecord,
            Err(e @ ProfileError::Malformed(_)) => {
                leptos::logging::warn!("dashboard: {e}");
                Self::Malformed
            }
            Err(e) => {
                leptos::logging::warn!("dashboard: profile unavailable: {e}");
                Self::NoRecord
            }
        }
    }

    /// Display lines, unescaped.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::HasRecord(record) => vec![
                format!("Name: {}", record.name),
                format!("Email: {}", record.email),
                format!("Goals: {}", record.goals),
            ],
            Self::NoRecord => vec![NO_RECORD_MESSAGE.to_owned()],
            Self::Malformed => vec![MALFORMED_MESSAGE.to_owned()],
        }
    }

    /// Container markup: one `<p>` per line, every line HTML-escaped.
    pub fn to_markup(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("<p>{}</p>", escape_html(line)))
            .collect()
    }
}

/// Dashboard page. Reads the stored profile once after mount; later storage
/// changes are not picked up until the next page load.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let markup = RwSignal::new(String::new());

    // Effects only run in the browser, so SSR renders an empty container and
    // hydration fills it.
    Effect::new(move || {
        let view = DashboardView::load(&BrowserStorage);
        markup.set(view.to_markup());
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
            </header>
            <div id=CONTAINER_ID class="dashboard-page__profile" inner_html=move || markup.get()></div>
            <a class="btn" href="/">"Edit profile"</a>
        </div>
    }
}
