//! Page behaviors built on the preference store.
//!
//! DESIGN
//! ======
//! Each function takes the capabilities it needs as arguments, so the page
//! components stay thin and every behavior runs natively against
//! `MemoryStore` in tests.
//!
//! "Has given a name" and "is logged in" are separate states: submitting a
//! name never sets `cc_logged_in`, so the landing entry guard only fires for
//! sessions established by an external login flow.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::nav::{Destination, Navigator};
use crate::notice::Notifier;
use crate::store::{FLAG_SET, PrefKey, Prefs};

/// Notice shown when the visitor confirms an empty name.
pub const NAME_REQUIRED_NOTICE: &str = "Please enter your name 🙂";

/// Name used in the greeting when none is stored.
pub const GREETING_PLACEHOLDER: &str = "there";

/// Outcome of the landing-page entry guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LandingEntry {
    /// A session is active; the page has navigated to the dashboard.
    Redirected,
    /// The landing page should render, with the stored name if any.
    Ready { prefill: Option<String> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a name is required")]
    MissingInput,
}

/// Run once per landing-page load.
pub fn enter_landing(prefs: &Prefs, nav: &dyn Navigator) -> LandingEntry {
    if prefs.is_logged_in() {
        log::debug!("session flag set; skipping landing page");
        nav.navigate(Destination::Dashboard);
        return LandingEntry::Redirected;
    }
    LandingEntry::Ready { prefill: prefs.read(PrefKey::UserName) }
}

/// Whether a key press in the name field confirms the name.
pub fn is_confirm_key(key: &str) -> bool {
    key == "Enter"
}

/// Validate `raw`, store it and continue to the dashboard.
///
/// Returns the stored (trimmed) name. On `MissingInput` the visitor has been
/// notified and nothing was written; the caller should refocus the field.
pub fn submit_name(
    prefs: &Prefs,
    nav: &dyn Navigator,
    notices: &dyn Notifier,
    raw: &str,
) -> Result<String, SubmitError> {
    let name = raw.trim();
    if name.is_empty() {
        notices.notify(NAME_REQUIRED_NOTICE);
        return Err(SubmitError::MissingInput);
    }

    prefs.write(PrefKey::UserName, name);
    prefs.write(PrefKey::SeenIntro, FLAG_SET);
    nav.navigate(Destination::Dashboard);
    Ok(name.to_owned())
}

/// Greeting line for the dashboard.
pub fn greeting_text(prefs: &Prefs) -> String {
    let name = prefs.read(PrefKey::UserName);
    format_greeting(name.as_deref().unwrap_or(GREETING_PLACEHOLDER))
}

pub fn format_greeting(name: &str) -> String {
    format!("Hi {name}! What would you like to do today?")
}

pub fn open_history(nav: &dyn Navigator) {
    nav.navigate(Destination::History);
}

/// Clear the session pair and return to the landing page.
///
/// Navigation happens even when storage refuses the removal.
pub fn logout(prefs: &Prefs, nav: &dyn Navigator) {
    if let Err(e) = prefs.clear_session() {
        log::warn!("logout could not clear session: {e}");
    }
    nav.navigate(Destination::Landing);
}
