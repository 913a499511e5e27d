//! Root application component with routing and the shared services context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::nav::{BrowserNavigator, Navigator};
use crate::notice::{BrowserNotifier, Notifier};
use crate::pages::{dashboard::DashboardPage, history::HistoryPage, landing::LandingPage};
use crate::store::Prefs;
use crate::store::browser::BrowserStore;

/// Capabilities handed to every page. Built once per page load.
#[derive(Clone)]
pub struct Services {
    pub prefs: Prefs,
    pub nav: Arc<dyn Navigator>,
    pub notices: Arc<dyn Notifier>,
}

impl Services {
    pub fn new(prefs: Prefs, nav: Arc<dyn Navigator>, notices: Arc<dyn Notifier>) -> Self {
        Self { prefs, nav, notices }
    }

    /// Services backed by `localStorage`, `window.location` and `window.alert`.
    pub fn browser(config: SiteConfig) -> Self {
        Self::new(
            Prefs::new(Arc::new(BrowserStore)),
            Arc::new(BrowserNavigator::new(config)),
            Arc::new(BrowserNotifier),
        )
    }
}

/// Root application component.
#[component]
pub fn App(services: Services) -> impl IntoView {
    provide_meta_context();
    provide_context(services);

    view! {
        <Title text="CareerCraft"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
            </Routes>
        </Router>
    }
}
