use crate::auth::use_auth;
use crate::components::common::Spinner;
use crate::components::login::LoginPage;
use crate::web::router::use_router;
use hackwell::{GuardMode, GuardOutcome, guard};
use leptos::prelude::*;

/// Blocks its children until the session is authenticated.
///
/// Reads the auth context only; no requests of its own.
#[component]
pub fn AuthGuard(#[prop(optional)] mode: GuardMode, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // Re-render on outcome changes only, so a refreshed user doesn't remount the page.
    let outcome = Memo::new(move |_| auth.state.with(|state| guard(state, mode)));

    move || match outcome.get() {
        GuardOutcome::Loading => view! { <Spinner label="Checking session..." /> }.into_any(),
        GuardOutcome::LoginForm => view! { <LoginPage /> }.into_any(),
        GuardOutcome::Redirect(route) => {
            router.redirect(route);
            ().into_any()
        }
        GuardOutcome::Render => children().into_any(),
    }
}
