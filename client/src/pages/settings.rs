//! Settings page for the signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}
