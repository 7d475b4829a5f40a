//! Onboarding page: collects name, email and goals, then hands off to the
//! dashboard.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;

use crate::state::profile::{self, ProfileError, UserProfile};
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const FORM_ID: &str = "onboarding-form";
pub const NAME_INPUT_ID: &str = "name";
pub const EMAIL_INPUT_ID: &str = "email";
pub const GOALS_INPUT_ID: &str = "goals";

/// Where the browser goes after the profile is saved.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Persist the submitted profile and return the redirect target.
///
/// Values are stored exactly as entered. The target is only produced once
/// the write has succeeded.
///
/// # Errors
///
/// Propagates the [`ProfileError`] from the store; callers must not
/// navigate in that case.
pub fn submit_profile(store: &dyn KeyValueStore, record: &UserProfile) -> Result<&'static str, ProfileError> {
    profile::save_profile(store, record)?;
    Ok(DASHBOARD_PATH)
}

/// Build the profile from the form fields, looked up by element id.
///
/// `lookup` returns the current value of the element with the given id, or
/// `None` if it is not in the document; `fallback` supplies the value for
/// that case.
pub fn collect_profile<L, F>(lookup: L, fallback: F) -> UserProfile
where
    L: Fn(&str) -> Option<String>,
    F: Fn(&str) -> String,
{
    let field = |id: &str| lookup(id).unwrap_or_else(|| fallback(id));
    UserProfile::new(field(NAME_INPUT_ID), field(EMAIL_INPUT_ID), field(GOALS_INPUT_ID))
}

/// Status line shown when the save fails.
pub fn save_failed_message(err: &ProfileError) -> String {
    format!("Could not save your profile: {err}")
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let goals = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The document is authoritative: restored form values fire no input
        // event, so the signals can lag behind what is on screen.
        let record = collect_profile(element_value, |id| match id {
            NAME_INPUT_ID => name.get(),
            EMAIL_INPUT_ID => email.get(),
            _ => goals.get(),
        });
        match submit_profile(&BrowserStorage, &record) {
            Ok(target) => {
                leptos::logging::log!("onboarding: profile saved, redirecting to {target}");
                redirect(target);
            }
            Err(e) => {
                leptos::logging::warn!("onboarding: save failed: {e}");
                info.set(save_failed_message(&e));
            }
        }
    };

    view! {
        <div class="onboarding-page">
            <div class="onboarding-card">
                <h1>"Welcome"</h1>
                <p class="onboarding-card__subtitle">"Tell us a little about yourself."</p>
                <form id=FORM_ID class="onboarding-form" on:submit=on_submit>
                    <label class="onboarding-label" for=NAME_INPUT_ID>"Name"</label>
                    <input
                        id=NAME_INPUT_ID
                        class="onboarding-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="onboarding-label" for=EMAIL_INPUT_ID>"Email"</label>
                    <input
                        id=EMAIL_INPUT_ID
                        class="onboarding-input"
                        type="text"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="onboarding-label" for=GOALS_INPUT_ID>"Goals"</label>
                    <textarea
                        id=GOALS_INPUT_ID
                        class="onboarding-input onboarding-input--goals"
                        rows="4"
                        prop:value=move || goals.get()
                        on:input=move |ev| goals.set(event_target_value(&ev))
                    ></textarea>
                    <button class="onboarding-button" type="submit">
                        "Continue"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="onboarding-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Current value of the input or textarea with id `id`.
fn element_value(id: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
            return Some(input.value());
        }
        element
            .dyn_ref::<web_sys::HtmlTextAreaElement>()
            .map(web_sys::HtmlTextAreaElement::value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

fn redirect(target: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}
