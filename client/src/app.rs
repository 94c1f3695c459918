//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::module::{JobOrdersPage, OrderDetailPage, OrdersPage, QualityPage, RollsPage};
use crate::state::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, starts the one-off session check and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::provide();
    start_session_check(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/shopfloor.css"/>
        <Title text="Shopfloor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("orders") view=OrdersPage/>
                <Route path=(StaticSegment("orders"), ParamSegment("id")) view=OrderDetailPage/>
                <Route path=StaticSegment("job-orders") view=JobOrdersPage/>
                <Route path=StaticSegment("rolls") view=RollsPage/>
                <Route path=StaticSegment("quality") view=QualityPage/>
            </Routes>
        </Router>
    }
}

/// Resolve the session once per page load.
///
/// The server check is authoritative. When it cannot be completed the
/// persisted snapshot stands in, so a flaky network does not log the user
/// out of the UI.
fn start_session_check(auth: AuthContext) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::session_store::{SessionSnapshot, apply_language, load_language};
        use crate::util::storage::BrowserStorage;

        apply_language(&load_language(&BrowserStorage));
        leptos::task::spawn_local(async move {
            let user = match crate::net::api::fetch_current_user().await {
                Ok(user) => user,
                Err(e) => {
                    log::warn!("session check failed, using stored snapshot: {e}");
                    SessionSnapshot::load(&BrowserStorage).to_user()
                }
            };
            auth.resolve(user);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
