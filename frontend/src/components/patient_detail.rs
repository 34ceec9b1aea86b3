use crate::auth::use_auth;
use crate::components::common::{ErrorPanel, Spinner, SyntheticBadge, status_class};
use crate::web::router::Link;
use hackwell::AppRoute;
use hackwell::views::LoadState;
use hackwell::views::patient_detail::{self, PatientDetail};
use hackwell_shared::{RiskLevel, RiskPrediction};
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOP_FEATURES: usize = 5;

fn fmt_opt(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{v:.0}{unit}"))
        .unwrap_or_else(|| "n/a".to_string())
}

#[component]
pub fn PatientDetailPage(patient_id: String) -> impl IntoView {
    let auth = use_auth();
    let (state, set_state) = signal(LoadState::<PatientDetail>::Loading);

    let id = StoredValue::new(patient_id);
    let load = move || {
        set_state.set(LoadState::Loading);
        let api = auth.api();
        let patient_id = id.get_value();
        spawn_local(async move {
            set_state.set(patient_detail::load(&api, &patient_id).await);
        });
    };
    load();
    let retry = Callback::new(move |_| load());

    view! {
        <Link route=AppRoute::Patients class="btn btn-ghost btn-sm w-fit">"← Back to patients"</Link>
        {move || match state.get() {
            LoadState::Loading => view! { <Spinner label="Loading patient..." /> }.into_any(),
            LoadState::Failed(message) => {
                view! { <ErrorPanel message=message on_retry=retry /> }.into_any()
            }
            LoadState::Ready(detail) => view! { <DetailView detail=detail /> }.into_any(),
        }}
    }
}

#[component]
fn DetailView(detail: PatientDetail) -> impl IntoView {
    let PatientDetail {
        patient,
        vitals,
        medications,
        notes,
        prediction,
    } = detail;
    let status = patient.status.clone().unwrap_or_else(|| "Active".to_string());

    let vitals_reason = vitals.reason().map(str::to_string);
    let latest = vitals.data().first().cloned();
    let meds_reason = medications.reason().map(str::to_string);
    let notes_reason = notes.reason().map(str::to_string);
    let prediction_reason = prediction.reason().map(str::to_string);

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">{patient.name.clone()}</h1>
                        <p class="text-base-content/70">
                            {format!("{} · {} yrs · {}", patient.patient_id, patient.age, patient.gender)}
                        </p>
                    </div>
                    <span class=status_class(&status)>{status.clone()}</span>
                </div>
                <div class="flex flex-wrap gap-2 mt-2">
                    {patient
                        .chronic_conditions
                        .iter()
                        .map(|c| view! { <span class="badge badge-outline">{c.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Latest Vitals"</h3>
                        <SyntheticBadge reason=vitals_reason />
                    </div>
                    {match latest {
                        Some(v) => view! {
                            <div class="stats stats-vertical sm:stats-horizontal">
                                <div class="stat">
                                    <div class="stat-title">"Blood Pressure"</div>
                                    <div class="stat-value text-lg">
                                        {v.blood_pressure().unwrap_or_else(|| "n/a".to_string())}
                                    </div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Heart Rate"</div>
                                    <div class="stat-value text-lg">{fmt_opt(v.heart_rate, " bpm")}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"SpO2"</div>
                                    <div class="stat-value text-lg">{fmt_opt(v.blood_oxygen, "%")}</div>
                                </div>
                            </div>
                            <p class="text-xs opacity-60">
                                {format!("Recorded {}", v.recorded_at.date())}
                            </p>
                        }
                        .into_any(),
                        None => view! { <p class="opacity-60">"No vitals recorded."</p> }.into_any(),
                    }}
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Risk Prediction"</h3>
                        <SyntheticBadge reason=prediction_reason />
                    </div>
                    {match prediction.into_data() {
                        Some(p) => view! { <PredictionCard prediction=p /> }.into_any(),
                        None => view! { <p class="opacity-60">"No prediction available."</p> }.into_any(),
                    }}
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Active Medications"</h3>
                        <SyntheticBadge reason=meds_reason />
                    </div>
                    <ul class="space-y-2">
                        {medications
                            .into_data()
                            .into_iter()
                            .map(|m| {
                                let adherence = m
                                    .adherence_rate
                                    .map(|a| format!("{:.0}% adherence", a * 100.0))
                                    .unwrap_or_default();
                                view! {
                                    <li class="flex justify-between">
                                        <span class="font-semibold">{m.name}</span>
                                        <span class="text-sm opacity-70">
                                            {format!("{} · {}", m.dosage, m.frequency)}
                                        </span>
                                        <span class="text-xs opacity-60">{adherence}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Clinical Notes"</h3>
                        <SyntheticBadge reason=notes_reason />
                    </div>
                    <ul class="space-y-3">
                        {notes
                            .into_data()
                            .into_iter()
                            .map(|n| view! {
                                <li>
                                    <div class="text-xs opacity-60">
                                        {format!("{} · {}", n.visit_date.date(), n.note_type)}
                                    </div>
                                    <p class="text-sm">{n.content}</p>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PredictionCard(prediction: RiskPrediction) -> impl IntoView {
    let badge = match prediction.risk_level {
        RiskLevel::Low => "badge badge-success badge-lg",
        RiskLevel::Medium => "badge badge-warning badge-lg",
        RiskLevel::High => "badge badge-error badge-lg",
    };
    let features = prediction
        .top_features(TOP_FEATURES)
        .into_iter()
        .map(|(name, weight)| {
            let pct = weight * 100.0;
            view! {
                <li class="flex items-center gap-2">
                    <span class="w-40 text-sm">{name.replace('_', " ")}</span>
                    <progress class="progress progress-primary flex-1" value=pct max="100"></progress>
                    <span class="text-xs w-12 text-right">{format!("{pct:.0}%")}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="flex items-center gap-4">
            <span class=badge>{prediction.risk_level.label()}</span>
            <div class="text-sm">
                {format!(
                    "Score {:.0}% · confidence {:.0}% · {}-day {}",
                    prediction.risk_score * 100.0,
                    prediction.confidence * 100.0,
                    prediction.prediction_window,
                    prediction.prediction_type,
                )}
            </div>
        </div>
        <h4 class="font-semibold mt-4">"Key factors"</h4>
        <ul class="space-y-1">{features}</ul>
    }
}
