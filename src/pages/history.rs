//! History destination. Past analyses live server-side, so this page only
//! offers the way back to the dashboard.

use leptos::prelude::*;

use crate::app::Services;
use crate::nav::Destination;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let services = expect_context::<Services>();

    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        services.nav.navigate(Destination::Dashboard);
    };

    view! {
        <div class="history-page">
            <header class="history-page__header toolbar">
                <button class="history-page__back" type="button" on:click=on_back>
                    "← Dashboard"
                </button>
            </header>
            <main class="history-page__body">
                <h1>"Analysis History"</h1>
                <p class="history-page__empty">"No past analyses found yet. Run an analysis first."</p>
            </main>
        </div>
    }
}
