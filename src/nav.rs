//! Full-page navigation between the landing, dashboard and history pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages pass no parameters to each other; anything the next page needs is
//! written to the preference store first. Navigation replaces the document,
//! so nothing after a `navigate` call is expected to matter.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::SiteConfig;

/// Logical navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Dashboard,
    History,
}

/// Performs a full-page transition.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}

/// [`Navigator`] that sets `window.location.href`.
#[derive(Clone, Debug)]
pub struct BrowserNavigator {
    config: SiteConfig,
}

impl BrowserNavigator {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, destination: Destination) {
        let href = self.config.href(destination);
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                log::warn!("navigation to {href} skipped: no window");
                return;
            };
            if let Err(e) = window.location().set_href(href) {
                log::warn!("navigation to {href} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("navigation to {href} skipped outside the browser");
        }
    }
}
