//! Hackwell dashboard frontend.
//!
//! - `web::router`: history-based routing over [`hackwell::AppRoute`]
//! - `auth`: session context shared by every page
//! - `components`: pages and shared widgets
//!
//! Data fetching and fallback rules live in `hackwell::views`; the pages here
//! only render them.

mod auth;
mod components {
    pub mod analytics;
    pub mod auth_guard;
    pub mod common;
    pub mod dashboard;
    pub mod data_entry;
    pub mod explainability;
    pub mod layout;
    pub mod login;
    pub mod patient_detail;
    pub mod patients;
    pub mod settings;
}
pub(crate) mod web;

use crate::auth::provide_auth;
use crate::components::analytics::AnalyticsPage;
use crate::components::auth_guard::AuthGuard;
use crate::components::dashboard::DashboardPage;
use crate::components::data_entry::DataEntryPage;
use crate::components::explainability::ExplainabilityPage;
use crate::components::layout::DashboardLayout;
use crate::components::login::LoginPage;
use crate::components::patient_detail::PatientDetailPage;
use crate::components::patients::PatientsPage;
use crate::components::settings::SettingsPage;
use crate::web::router::{Link, Router, RouterOutlet};
use hackwell::AppRoute;
use leptos::prelude::*;

fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Patients => view! { <PatientsPage /> }.into_any(),
        AppRoute::PatientDetail(id) => view! { <PatientDetailPage patient_id=id /> }.into_any(),
        AppRoute::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AppRoute::Explainability => view! { <ExplainabilityPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::DataEntry => view! { <DataEntryPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// A page behind the auth guard. The page itself is built only once the
/// guard lets it render, so nothing is fetched anonymously.
#[component]
fn ProtectedPage(route: AppRoute) -> impl IntoView {
    let route = StoredValue::new(route);
    view! {
        <AuthGuard>
            <DashboardLayout>{page(route.get_value())}</DashboardLayout>
        </AuthGuard>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <Link route=AppRoute::Dashboard class="btn btn-primary">"Go to dashboard"</Link>
            </div>
        </div>
    }
}

fn route_matcher(route: AppRoute) -> AnyView {
    if route.requires_auth() {
        view! { <ProtectedPage route=route /> }.into_any()
    } else {
        page(route)
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth = provide_auth();
    let is_authenticated = auth.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
