//! Guard wrapper for every route that needs a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their content in `ProtectedRoute` instead of installing their
//! own redirect effects. While the session resolves the loading view is
//! shown; afterwards the children render or the user is sent away. Sending a
//! signed-out user to login goes through the redirect coordinator so the
//! attempted path and query are preserved.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::use_auth;
use crate::util::auth::{guard_redirect, location_url, redirect_options};
use crate::util::intended_url::IntendedUrl;
use crate::util::route_guard::{GuardConfig, GuardOutcome};
use crate::util::storage::BrowserStorage;

/// Render `children` only when the session satisfies the guard.
///
/// - `public`: skip the session requirement entirely.
/// - `permission`: module the user must hold (admins hold all).
/// - `loading_view`: placeholder while the session check is pending.
#[component]
pub fn ProtectedRoute(
    children: ChildrenFn,
    #[prop(optional)] public: bool,
    #[prop(optional, into)] permission: Option<String>,
    #[prop(optional, into)] loading_view: Option<ViewFn>,
) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    let config = if public {
        GuardConfig::public()
    } else {
        GuardConfig { require_auth: true, permission }
    };
    let outcome = Memo::new(move |_| config.evaluate(&auth.session()));

    Effect::new(move || {
        let outcome = outcome.get();
        let url = location_url(
            &location.pathname.get_untracked(),
            &location.search.get_untracked(),
            &location.hash.get_untracked(),
        );
        let intended = IntendedUrl::new(BrowserStorage);
        if let Some(to) = guard_redirect(outcome, &auth.session_untracked(), &url, &intended) {
            navigate(&to, redirect_options());
        }
    });

    move || match outcome.get() {
        GuardOutcome::Loading => match &loading_view {
            Some(placeholder) => placeholder.run(),
            None => view! { <LoadingPlaceholder/> }.into_any(),
        },
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect(_) => ().into_any(),
    }
}

/// Default loading view.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="auth-loading" role="status" aria-live="polite">
            <div class="auth-loading__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
