//! Module landing pages, each gated by its module permission.
//!
//! The production screens themselves are served by the module teams; these
//! pages only establish the guarded routes and the shared chrome.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::dashboard::MODULES;
use crate::components::app_header::AppHeader;
use crate::components::protected_route::ProtectedRoute;

fn module_title(module: &str) -> &'static str {
    MODULES.iter().find(|m| m.module == module).map_or("Module", |m| m.title)
}

/// Guarded page shell for `module`.
#[component]
fn ModuleShell(module: &'static str, children: ChildrenFn) -> impl IntoView {
    view! {
        <ProtectedRoute permission=module>
            <AppHeader/>
            <main class="module-page">
                <h1>{module_title(module)}</h1>
                {children()}
            </main>
        </ProtectedRoute>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <ModuleShell module="orders">
            <p class="module-page__hint">"Select an order to see its job orders and rolls."</p>
        </ModuleShell>
    }
}

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let order_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <ModuleShell module="orders">
            <p class="module-page__hint">"Order " {order_id}</p>
        </ModuleShell>
    }
}

#[component]
pub fn JobOrdersPage() -> impl IntoView {
    view! {
        <ModuleShell module="job_orders">
            <p class="module-page__hint">"Job orders are grouped by production line."</p>
        </ModuleShell>
    }
}

#[component]
pub fn RollsPage() -> impl IntoView {
    view! {
        <ModuleShell module="rolls">
            <p class="module-page__hint">"Rolls move through the workflow stages shown here."</p>
        </ModuleShell>
    }
}

#[component]
pub fn QualityPage() -> impl IntoView {
    view! {
        <ModuleShell module="quality">
            <p class="module-page__hint">"Pending quality checks appear first."</p>
        </ModuleShell>
    }
}
