use crate::auth::use_auth;
use crate::components::common::{Spinner, StatCard, SyntheticBadge, format_count};
use hackwell::views::analytics::{self, AnalyticsData, TimeRange};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let auth = use_auth();
    let (range, set_range) = signal(TimeRange::default());
    let (data, set_data) = signal(Option::<AnalyticsData>::None);

    // Refetch whenever the range changes; responses for an older range are dropped.
    Effect::new(move |_| {
        let requested = range.get();
        set_data.set(None);
        let api = auth.api();
        spawn_local(async move {
            let loaded = analytics::load(&api, requested).await;
            if loaded.is_current(range.get_untracked()) {
                set_data.set(Some(loaded));
            }
        });
    });

    let options = TimeRange::ALL
        .into_iter()
        .map(|r| {
            view! {
                <option value=r.months().to_string() selected=move || range.get() == r>
                    {r.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">"Analytics"</h1>
                <p class="text-base-content/70 mt-2">"Population trends and risk distribution."</p>
            </div>
            <select
                class="select select-bordered"
                on:change=move |ev| {
                    let months = event_target_value(&ev).parse().unwrap_or_default();
                    if let Some(r) = TimeRange::from_months(months) {
                        set_range.set(r);
                    }
                }
            >
                {options}
            </select>
        </div>

        {move || match data.get() {
            None => view! { <Spinner /> }.into_any(),
            Some(data) => view! { <AnalyticsView data=data /> }.into_any(),
        }}
    }
}

#[component]
fn AnalyticsView(data: AnalyticsData) -> impl IntoView {
    let overview_reason = data.overview.reason().map(str::to_string);
    let volume_reason = data.volume.reason().map(str::to_string);
    let conditions_reason = data.conditions.reason().map(str::to_string);
    let risks_reason = data.risks.reason().map(str::to_string);
    let overview = data.overview.into_data();
    let volume = data.volume.into_data();
    let peak = volume.iter().map(|v| v.patients).max().unwrap_or(0).max(1);

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

        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">{format!("Patient Volume · {}", data.range.label())}</h3>
                    <SyntheticBadge reason=volume_reason />
                </div>
                <div class="flex items-end gap-3 h-48">
                    {volume
                        .into_iter()
                        .map(|v| {
                            let height = format!("height: {}%", v.patients * 100 / peak);
                            view! {
                                <div class="flex-1 flex flex-col items-center justify-end h-full gap-1">
                                    <span class="text-xs">{v.patients}</span>
                                    <div class="w-full bg-primary rounded-t" style=height title=format!("{} new", v.new_patients)></div>
                                    <span class="text-xs opacity-60">{v.month}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Conditions"</h3>
                        <SyntheticBadge reason=conditions_reason />
                    </div>
                    <ul class="space-y-2">
                        {data
                            .conditions
                            .into_data()
                            .into_iter()
                            .map(|c| view! {
                                <li class="flex items-center gap-2">
                                    <span class="w-32 text-sm">{c.name}</span>
                                    <progress class="progress progress-secondary flex-1" value=c.percentage max="100"></progress>
                                    <span class="text-xs w-16 text-right">{format!("{} ({:.0}%)", c.value, c.percentage)}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Risk Levels"</h3>
                        <SyntheticBadge reason=risks_reason />
                    </div>
                    <ul class="space-y-2">
                        {data
                            .risks
                            .into_data()
                            .into_iter()
                            .map(|r| view! {
                                <li class="flex items-center gap-2">
                                    <span class="w-32 text-sm">{r.risk}</span>
                                    <progress class="progress progress-accent flex-1" value=r.percentage max="100"></progress>
                                    <span class="text-xs w-16 text-right">{format!("{} ({:.0}%)", r.count, r.percentage)}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
