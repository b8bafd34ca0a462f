//! Route guard components gating protected pages on a credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps route views in `app.rs`. The decision itself lives in
//! `util::auth::evaluate`; these components only turn it into either the
//! wrapped children or a router redirect, once per render pass.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::auth::{Credential, RenderDecision, evaluate};

/// Render `children` when `token` holds a credential, otherwise redirect to
/// the login page.
#[component]
pub fn RouteGuard(#[prop(into)] token: Signal<Option<String>>, children: ChildrenFn) -> impl IntoView {
    move || match evaluate(&Credential::from(token.get()), children.clone()) {
        RenderDecision::Render(children) => children().into_any(),
        RenderDecision::Redirect(target) => {
            log::debug!("route guard: no credential, redirecting to {target}");
            view! { <Redirect path=target/> }.into_any()
        }
    }
}

/// [`RouteGuard`] fed from the `AuthState` context.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = Signal::derive(move || auth.get().token);

    view! { <RouteGuard token=token>{children()}</RouteGuard> }
}
