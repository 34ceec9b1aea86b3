use crate::auth::use_auth;
use crate::components::common::{Spinner, StatCard, SyntheticBadge, format_count, status_class};
use crate::web::router::Link;
use hackwell::AppRoute;
use hackwell::views::dashboard::{self, DashboardData};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let (data, set_data) = signal(Option::<DashboardData>::None);

    let load = move || {
        set_data.set(None);
        let api = auth.api();
        spawn_local(async move {
            set_data.set(Some(dashboard::load(&api).await));
        });
    };
    load();

    let greeting = move || {
        auth.user()
            .map(|u| format!("Welcome back, {}", u.full_name))
            .unwrap_or_else(|| "Welcome back, Doctor".to_string())
    };

    view! {
        <div>
            <h1 class="text-3xl font-bold">{greeting}</h1>
            <p class="text-base-content/70 mt-2">
                "Here's an overview of your patients and recent activity."
            </p>
        </div>
        {move || match data.get() {
            None => view! { <Spinner /> }.into_any(),
            Some(data) => {
                let overview = data.overview.data().clone();
                let overview_reason = data.overview.reason().map(str::to_string);
                let patients_reason = data.recent_patients.reason().map(str::to_string);
                let rows = data.recent_patients.into_data();
                view! {
                    <div class="flex justify-end">
                        <SyntheticBadge reason=overview_reason />
                    </div>
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <StatCard title="Total Patients" value=format_count(overview.total_patients) class="text-primary" />
                        <StatCard title="Active Cases" value=format_count(overview.active_cases) />
                        <StatCard title="Critical Alerts" value=format_count(overview.critical_alerts) class="text-error" />
                        <StatCard title="Recovery Rate" value=format!("{:.1}%", overview.recovery_rate) class="text-success" />
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <div class="flex items-center justify-between">
                                <h3 class="card-title">"Recent Patients"</h3>
                                <SyntheticBadge reason=patients_reason />
                            </div>
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Patient"</th>
                                        <th>"Condition"</th>
                                        <th>"Status"</th>
                                        <th>"Last Visit"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|row| {
                                            let status = status_class(&row.status);
                                            view! {
                                                <tr>
                                                    <td>
                                                        <Link route=AppRoute::PatientDetail(row.patient_id.clone()) class="link link-hover font-semibold">
                                                            {row.name}
                                                        </Link>
                                                        <div class="text-xs opacity-60">{row.patient_id}</div>
                                                    </td>
                                                    <td>{row.condition}</td>
                                                    <td><span class=status>{row.status}</span></td>
                                                    <td>{row.last_visit}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
