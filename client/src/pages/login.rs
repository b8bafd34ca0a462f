//! Login page, the redirect target for unauthenticated navigation.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"You need to sign in to view this page."</p>
            </div>
        </div>
    }
}
