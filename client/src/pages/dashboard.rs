//! Dashboard page, the authenticated landing route.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <A href="/settings">"Settings"</A>
        </div>
    }
}
