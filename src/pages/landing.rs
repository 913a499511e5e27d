//! Landing page: name entry and continue button.

use leptos::html::Input;
use leptos::prelude::*;

use crate::app::Services;
use crate::flow::{self, LandingEntry};

/// Landing page. Skips straight to the dashboard when a session is active.
#[component]
pub fn LandingPage() -> impl IntoView {
    let services = expect_context::<Services>();
    match flow::enter_landing(&services.prefs, services.nav.as_ref()) {
        LandingEntry::Redirected => None,
        LandingEntry::Ready { prefill } => Some(view! { <NameCard prefill=prefill/> }),
    }
}

#[component]
fn NameCard(prefill: Option<String>) -> impl IntoView {
    let services = expect_context::<Services>();
    let name = RwSignal::new(prefill.unwrap_or_default());
    let input_ref = NodeRef::<Input>::new();

    let proceed = Callback::new(move |()| {
        let raw = name.get_untracked();
        let submitted = flow::submit_name(
            &services.prefs,
            services.nav.as_ref(),
            services.notices.as_ref(),
            &raw,
        );
        if submitted.is_err() {
            refocus(input_ref);
        }
    });

    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1>"CareerCraft"</h1>
                <p class="landing-card__subtitle">"What should we call you?"</p>
                <div class="landing-form">
                    <input
                        id="username"
                        class="name-input"
                        type="text"
                        placeholder="Your name"
                        autocomplete="given-name"
                        node_ref=input_ref
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if flow::is_confirm_key(&ev.key()) {
                                ev.prevent_default();
                                proceed.run(());
                            }
                        }
                    />
                    <button
                        id="goButton"
                        class="arrow-button"
                        type="button"
                        aria-label="Continue"
                        on:click=move |ev| {
                            ev.prevent_default();
                            proceed.run(());
                        }
                    >
                        "→"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn refocus(input_ref: NodeRef<Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
    }
}
