//! Top bar shown on signed-in pages: user badge, language toggle, logout.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::session_store::{apply_language, load_language, save_language};
use crate::util::storage::BrowserStorage;

/// Next language in the toggle cycle.
pub(crate) fn next_language(current: &str) -> &'static str {
    if current == "en" { "tr" } else { "en" }
}

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = use_auth();
    let language = RwSignal::new(load_language(&BrowserStorage));

    let on_toggle_language = move |_| {
        let next = next_language(&language.get());
        if save_language(&BrowserStorage, next) {
            apply_language(next);
            language.set(next.to_owned());
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.logout();
        });
        #[cfg(not(feature = "hydrate"))]
        auth.logout();
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"Shopfloor"</a>
            <div class="app-header__actions">
                <span class="app-header__user">
                    {move || auth.user().map(|u| u.username).unwrap_or_default()}
                </span>
                <button class="btn" on:click=on_toggle_language title="Language">
                    {move || language.get().to_ascii_uppercase()}
                </button>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
