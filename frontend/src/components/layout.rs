use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use hackwell::AppRoute;
use leptos::prelude::*;

/// Sidebar navigation plus the signed-in user and a logout button.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_route();

    let on_logout = move |_| {
        auth.logout();
        router.navigate(&AppRoute::Login.to_path());
    };

    let nav = AppRoute::navigation()
        .into_iter()
        .filter_map(|route| {
            let label = route.nav_label()?;
            let active = route.clone();
            let class = move || {
                let selected = match (&current.get(), &active) {
                    (AppRoute::PatientDetail(_), AppRoute::Patients) => true,
                    (now, target) => now == target,
                };
                if selected { "active" } else { "" }.to_string()
            };
            Some(view! {
                <li class=class>
                    <Link route=route>{label}</Link>
                </li>
            })
        })
        .collect_view();

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <div class="drawer-content p-4 md:p-8">
                <div class="max-w-7xl mx-auto space-y-6">{children()}</div>
            </div>
            <div class="drawer-side">
                <aside class="w-64 min-h-full bg-base-100 flex flex-col">
                    <div class="p-6 text-xl font-bold text-primary">"Hackwell"</div>
                    <ul class="menu flex-1">{nav}</ul>
                    <div class="p-4 border-t border-base-300 space-y-2">
                        <div class="text-sm">
                            <div class="font-semibold">
                                {move || auth.user().map(|u| u.full_name).unwrap_or_default()}
                            </div>
                            <div class="text-base-content/60">
                                {move || auth.user().map(|u| u.email).unwrap_or_default()}
                            </div>
                        </div>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm w-full">
                            "Sign out"
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
