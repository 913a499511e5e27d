//! Dashboard page with the visitor greeting, history and logout actions.

use leptos::prelude::*;

use crate::app::Services;
use crate::flow;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let greeting = flow::greeting_text(&services.prefs);

    let history_nav = services.nav.clone();
    let on_history = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        flow::open_history(history_nav.as_ref());
    };

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        flow::logout(&services.prefs, services.nav.as_ref());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__board-name">"CareerCraft"</span>
                <span class="toolbar__spacer"></span>
                <button id="logoutBtn" class="logout-btn" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <main class="dashboard-page__body">
                <h2 id="greetingText" class="greeting-text">{greeting}</h2>
                <div class="dashboard-page__actions">
                    <button id="checkHistoryBtn" class="check-history" type="button" on:click=on_history>
                        "Check History"
                    </button>
                </div>
            </main>
        </div>
    }
}
