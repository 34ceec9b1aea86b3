use crate::auth::use_auth;
use crate::components::common::{Spinner, StatCard, SyntheticBadge, format_count};
use hackwell::views::explainability::{self, AiMetricsExt, ExplainabilityData};
use hackwell::views::integration::{self, IntegrationStatus};
use hackwell_shared::{AiInsight, InsightStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ExplainabilityPage() -> impl IntoView {
    let auth = use_auth();
    let (data, set_data) = signal(Option::<ExplainabilityData>::None);
    let (backend, set_backend) = signal(IntegrationStatus::Checking);

    let load = move || {
        set_data.set(None);
        set_backend.set(IntegrationStatus::Checking);
        let api = auth.api();
        spawn_local(async move {
            let (data, status) =
                futures::join!(explainability::load(&api), integration::check(&api));
            set_data.set(Some(data));
            set_backend.set(status);
        });
    };
    load();

    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">"AI Explainability"</h1>
                <p class="text-base-content/70 mt-2">
                    "Model insights, performance and prediction metrics."
                </p>
            </div>
            <button class="btn btn-outline btn-sm" on:click=move |_| load()>"Refresh"</button>
        </div>

        {move || view! { <BackendStatus status=backend.get() /> }}

        {move || match data.get() {
            None => view! { <Spinner /> }.into_any(),
            Some(data) => view! { <ExplainabilityView data=data /> }.into_any(),
        }}
    }
}

#[component]
fn BackendStatus(status: IntegrationStatus) -> impl IntoView {
    match status {
        IntegrationStatus::Checking => view! {
            <div class="alert"><span class="loading loading-dots loading-sm"></span> "Checking backend..."</div>
        }
        .into_any(),
        IntegrationStatus::Connected(snapshot) => view! {
            <div class="alert alert-success">
                {format!(
                    "Backend {} · {} patients sampled · {} total",
                    snapshot.health.status,
                    snapshot.patient_count,
                    format_count(snapshot.analytics.total_patients),
                )}
            </div>
        }
        .into_any(),
        IntegrationStatus::Error(message) => view! {
            <div class="alert alert-warning">{format!("Backend unreachable: {message}")}</div>
        }
        .into_any(),
    }
}

#[component]
fn ExplainabilityView(data: ExplainabilityData) -> impl IntoView {
    let urgent = data.urgent_insights().count();
    let metrics_reason = data.metrics.reason().map(str::to_string);
    let insights_reason = data.insights.reason().map(str::to_string);
    let models_reason = data.models.reason().map(str::to_string);
    let metrics = data.metrics.into_data();

    view! {
        <div class="flex justify-end">
            <SyntheticBadge reason=metrics_reason />
        </div>
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Predictions" value=format_count(metrics.total_predictions) class="text-primary" />
            <StatCard title="Success Rate" value=format!("{:.1}%", metrics.success_rate()) class="text-success" />
            <StatCard title="Models Deployed" value=metrics.models_deployed.to_string() />
            <StatCard title="Urgent Insights" value=urgent.to_string() class="text-error" />
        </div>

        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Insights"</h3>
                    <SyntheticBadge reason=insights_reason />
                </div>
                <div class="space-y-4">
                    {data
                        .insights
                        .into_data()
                        .into_iter()
                        .map(|insight| view! { <InsightCard insight=insight /> })
                        .collect_view()}
                </div>
            </div>
        </div>

        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Model Performance"</h3>
                    <SyntheticBadge reason=models_reason />
                </div>
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>"Model"</th>
                            <th>"Accuracy"</th>
                            <th>"Precision"</th>
                            <th>"Recall"</th>
                            <th>"AUC-ROC"</th>
                            <th>"Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {data
                            .models
                            .into_data()
                            .into_iter()
                            .map(|m| view! {
                                <tr>
                                    <td class="font-semibold">{m.model_name}</td>
                                    <td>{format!("{:.1}%", m.accuracy * 100.0)}</td>
                                    <td>{format!("{:.1}%", m.precision * 100.0)}</td>
                                    <td>{format!("{:.1}%", m.recall * 100.0)}</td>
                                    <td>{format!("{:.3}", m.auc_roc)}</td>
                                    <td>{m.last_updated.map(|t| t.date().to_string()).unwrap_or_default()}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn InsightCard(insight: AiInsight) -> impl IntoView {
    let badge = match insight.status {
        InsightStatus::Urgent => "badge badge-error",
        InsightStatus::Pending => "badge badge-warning",
        InsightStatus::Active => "badge badge-success",
        InsightStatus::Other => "badge badge-ghost",
    };
    let status = format!("{:?}", insight.status);

    view! {
        <div class="border border-base-300 rounded-box p-4 space-y-2">
            <div class="flex items-center justify-between">
                <span class="font-semibold">{format!("{} · {}", insight.patient, insight.kind)}</span>
                <span class=badge>{status}</span>
            </div>
            <p>{insight.prediction}</p>
            <div class="flex flex-wrap gap-1">
                {insight
                    .factors
                    .into_iter()
                    .map(|f| view! { <span class="badge badge-outline badge-sm">{f}</span> })
                    .collect_view()}
            </div>
            <p class="text-sm text-base-content/70">{insight.recommendation}</p>
            <progress class="progress progress-primary w-full" value=insight.confidence max="100"></progress>
        </div>
    }
}
