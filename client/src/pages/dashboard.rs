//! Dashboard page linking to the production modules the user may open.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::protected_route::ProtectedRoute;
use crate::net::types::User;
use crate::state::auth::use_auth;

/// A navigable application module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleLink {
    /// Permission name gating the module.
    pub module: &'static str,
    pub title: &'static str,
    pub href: &'static str,
}

/// Every module the dashboard knows about, in display order.
pub const MODULES: &[ModuleLink] = &[
    ModuleLink { module: "orders", title: "Orders", href: "/orders" },
    ModuleLink { module: "job_orders", title: "Job Orders", href: "/job-orders" },
    ModuleLink { module: "rolls", title: "Rolls", href: "/rolls" },
    ModuleLink { module: "quality", title: "Quality Checks", href: "/quality" },
];

/// Modules `user` may open.
fn visible_modules(user: &User) -> Vec<ModuleLink> {
    MODULES.iter().copied().filter(|m| user.has_permission(m.module)).collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardContent/>
        </ProtectedRoute>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let modules = move || auth.user().map(|u| visible_modules(&u)).unwrap_or_default();

    view! {
        <AppHeader/>
        <main class="dashboard-page">
            <h1>"Dashboard"</h1>
            <Show
                when=move || !modules().is_empty()
                fallback=|| view! { <p class="dashboard-page__empty">"No modules are assigned to your account."</p> }
            >
                <ul class="dashboard-page__modules">
                    {move || {
                        modules()
                            .into_iter()
                            .map(|m| {
                                view! {
                                    <li>
                                        <a class="dashboard-page__module" href=m.href>
                                            {m.title}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </main>
    }
}
