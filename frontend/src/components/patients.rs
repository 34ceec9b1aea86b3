use crate::auth::use_auth;
use crate::components::common::{ErrorPanel, Spinner, risk_class, status_class};
use crate::web::router::Link;
use hackwell::AppRoute;
use hackwell::views::LoadState;
use hackwell::views::patients::{self, PatientFilter, StatusFilter};
use hackwell_shared::Patient;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PatientsPage() -> impl IntoView {
    let auth = use_auth();
    let (state, set_state) = signal(LoadState::<Vec<Patient>>::Loading);
    let (filter, set_filter) = signal(PatientFilter::default());

    let load = move || {
        set_state.set(LoadState::Loading);
        let api = auth.api();
        spawn_local(async move {
            set_state.set(patients::load(&api).await);
        });
    };
    load();
    let retry = Callback::new(move |_| load());

    let chips = StatusFilter::ALL
        .into_iter()
        .map(|status| {
            let class = move || {
                if filter.with(|f| f.status == status) {
                    "btn btn-sm btn-primary"
                } else {
                    "btn btn-sm btn-ghost"
                }
            };
            view! {
                <button class=class on:click=move |_| set_filter.update(|f| f.status = status)>
                    {status.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">"Patients"</h1>
                <p class="text-base-content/70 mt-2">"Search and monitor your patient roster."</p>
            </div>
            <Link route=AppRoute::DataEntry class="btn btn-primary">"Add patient data"</Link>
        </div>

        <div class="flex flex-col md:flex-row gap-4">
            <input
                type="search"
                placeholder="Search by name, ID or condition"
                class="input input-bordered w-full md:max-w-sm"
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_filter.update(|f| f.search = value);
                }
            />
            <div class="join gap-1">{chips}</div>
        </div>

        {move || match state.get() {
            LoadState::Loading => view! { <Spinner /> }.into_any(),
            LoadState::Failed(message) => {
                view! { <ErrorPanel message=message on_retry=retry /> }.into_any()
            }
            LoadState::Ready(list) => {
                let visible: Vec<Patient> = filter
                    .with(|f| f.apply(&list).into_iter().cloned().collect());
                if visible.is_empty() {
                    return view! {
                        <div class="text-center py-16 text-base-content/60">
                            "No patients match the current filters."
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                        {visible.into_iter().map(|p| view! { <PatientCard patient=p /> }).collect_view()}
                    </div>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn PatientCard(patient: Patient) -> impl IntoView {
    let status = patient.status.clone().unwrap_or_else(|| "Active".to_string());
    let risk = patient.risk_level.clone().unwrap_or_else(|| "Unknown".to_string());
    let conditions = if patient.chronic_conditions.is_empty() {
        "No chronic conditions".to_string()
    } else {
        patient.chronic_conditions.join(", ")
    };
    let last_visit = patient.last_activity().date().to_string();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-3">
                <div class="flex items-center gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content rounded-full w-10">
                            <span>{patient.initials()}</span>
                        </div>
                    </div>
                    <div class="flex-1">
                        <Link route=AppRoute::PatientDetail(patient.patient_id.clone()) class="card-title link link-hover">
                            {patient.name.clone()}
                        </Link>
                        <div class="text-xs opacity-60">
                            {format!("{} · {} yrs · {}", patient.patient_id, patient.age, patient.gender)}
                        </div>
                    </div>
                    <span class=status_class(&status)>{status.clone()}</span>
                </div>
                <p class="text-sm">{conditions}</p>
                <div class="flex justify-between text-xs text-base-content/60">
                    <span>"Risk: " <span class=risk_class(&risk)>{risk.clone()}</span></span>
                    <span>{format!("Last visit {last_visit}")}</span>
                </div>
            </div>
        </div>
    }
}
