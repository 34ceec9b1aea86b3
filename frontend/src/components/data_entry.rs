use crate::auth::use_auth;
use crate::components::common::risk_class;
use crate::web::router::Link;
use hackwell::AppRoute;
use hackwell::views::data_entry::{
    self, CHRONIC_CONDITIONS, DataEntryForm, FieldError, GENDERS, SubmitError,
};
use hackwell_shared::{DataEntryReceipt, SubmissionStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

type Get = fn(&DataEntryForm) -> &String;
type Set = fn(&mut DataEntryForm) -> &mut String;

#[component]
pub fn DataEntryPage() -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(DataEntryForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);
    let (api_error, set_api_error) = signal(Option::<String>::None);
    let (receipt, set_receipt) = signal(Option::<DataEntryReceipt>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        errors.set(Vec::new());
        set_api_error.set(None);
        set_submitting.set(true);
        let api = auth.api();
        let snapshot = form.get_untracked();
        spawn_local(async move {
            match data_entry::submit(&api, &snapshot).await {
                Ok(r) => {
                    set_receipt.set(Some(r));
                    form.set(DataEntryForm::default());
                }
                Err(SubmitError::Invalid(list)) => errors.set(list),
                Err(e @ SubmitError::Api(_)) => set_api_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    let field = move |label: &'static str, name: &'static str, get: Get, set: Set| {
        let error = move || {
            errors.with(|list| {
                list.iter()
                    .find(|e| e.field() == name)
                    .map(ToString::to_string)
            })
        };
        view! {
            <label class="form-control w-full">
                <span class="label-text">{label}</span>
                <input
                    type="text"
                    inputmode="decimal"
                    class=move || {
                        if error().is_some() { "input input-bordered input-sm input-error" } else { "input input-bordered input-sm" }
                    }
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| *set(f) = value);
                    }
                />
                <span class="label-text-alt text-error">{error}</span>
            </label>
        }
    };

    let conditions = CHRONIC_CONDITIONS
        .into_iter()
        .map(|condition| {
            view! {
                <label class="label cursor-pointer justify-start gap-2">
                    <input
                        type="checkbox"
                        class="checkbox checkbox-sm"
                        prop:checked=move || form.with(|f| f.chronic_conditions.iter().any(|c| c == condition))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.toggle_condition(condition, checked));
                        }
                    />
                    <span class="label-text">{condition}</span>
                </label>
            }
        })
        .collect_view();

    let genders = GENDERS
        .into_iter()
        .map(|g| view! { <option value=g selected=move || form.with(|f| f.gender == g)>{g}</option> })
        .collect_view();

    view! {
        <div>
            <h1 class="text-3xl font-bold">"Patient Data Entry"</h1>
            <p class="text-base-content/70 mt-2">
                "Record a new assessment and receive an immediate risk prediction."
            </p>
        </div>

        {move || receipt.get().map(|r| view! { <ReceiptCard receipt=r /> })}
        <Show when=move || api_error.get().is_some()>
            <div role="alert" class="alert alert-error">
                <span>{move || api_error.get().unwrap_or_default()}</span>
            </div>
        </Show>
        <Show when=move || !errors.with(Vec::is_empty)>
            <div role="alert" class="alert alert-warning">
                {move || format!("{} field(s) need attention", errors.with(Vec::len))}
            </div>
        </Show>

        <form class="space-y-6" on:submit=on_submit>
            <div class="card bg-base-100 shadow">
                <div class="card-body grid grid-cols-1 md:grid-cols-3 gap-4">
                    <h3 class="card-title md:col-span-3">"Demographics"</h3>
                    {field("Patient ID", "patient_id", |f| &f.patient_id, |f| &mut f.patient_id)}
                    {field("Age", "age", |f| &f.age, |f| &mut f.age)}
                    <label class="form-control w-full">
                        <span class="label-text">"Gender"</span>
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.gender = value);
                            }
                        >
                            <option value="" selected=move || form.with(|f| f.gender.is_empty())>"Select"</option>
                            {genders}
                        </select>
                    </label>
                    {field("Height (cm)", "height", |f| &f.height, |f| &mut f.height)}
                    {field("Weight (kg)", "weight", |f| &f.weight, |f| &mut f.weight)}
                    {field("Family history", "family_history", |f| &f.family_history, |f| &mut f.family_history)}
                    <div class="md:col-span-3 flex flex-wrap gap-x-4">{conditions}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body grid grid-cols-1 md:grid-cols-3 gap-4">
                    <h3 class="card-title md:col-span-3">"Vital Signs"</h3>
                    {field("Systolic BP", "systolic_bp", |f| &f.systolic_bp, |f| &mut f.systolic_bp)}
                    {field("Diastolic BP", "diastolic_bp", |f| &f.diastolic_bp, |f| &mut f.diastolic_bp)}
                    {field("Heart rate", "heart_rate", |f| &f.heart_rate, |f| &mut f.heart_rate)}
                    {field("Blood oxygen (%)", "blood_oxygen", |f| &f.blood_oxygen, |f| &mut f.blood_oxygen)}
                    {field("Body temperature", "body_temp", |f| &f.body_temp, |f| &mut f.body_temp)}
                    {field("Respiratory rate", "respiratory_rate", |f| &f.respiratory_rate, |f| &mut f.respiratory_rate)}
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body grid grid-cols-1 md:grid-cols-3 gap-4">
                    <h3 class="card-title md:col-span-3">"Lab Results"</h3>
                    {field("Fasting glucose", "fasting_glucose", |f| &f.fasting_glucose, |f| &mut f.fasting_glucose)}
                    {field("HbA1c", "hba1c", |f| &f.hba1c, |f| &mut f.hba1c)}
                    {field("LDL cholesterol", "ldl_cholesterol", |f| &f.ldl_cholesterol, |f| &mut f.ldl_cholesterol)}
                    {field("HDL cholesterol", "hdl_cholesterol", |f| &f.hdl_cholesterol, |f| &mut f.hdl_cholesterol)}
                    {field("Triglycerides", "triglycerides", |f| &f.triglycerides, |f| &mut f.triglycerides)}
                    {field("Creatinine", "creatinine", |f| &f.creatinine, |f| &mut f.creatinine)}
                    {field("Hemoglobin", "hemoglobin", |f| &f.hemoglobin, |f| &mut f.hemoglobin)}
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body grid grid-cols-1 md:grid-cols-3 gap-4">
                    <h3 class="card-title md:col-span-3">"Medication & Lifestyle"</h3>
                    {field("Current medications", "current_medications", |f| &f.current_medications, |f| &mut f.current_medications)}
                    {field("Missed doses / week", "missed_doses", |f| &f.missed_doses, |f| &mut f.missed_doses)}
                    {field("Side effects", "side_effects", |f| &f.side_effects, |f| &mut f.side_effects)}
                    {field("Exercise (min / week)", "exercise_minutes", |f| &f.exercise_minutes, |f| &mut f.exercise_minutes)}
                    {field("Sleep (hours)", "sleep_duration", |f| &f.sleep_duration, |f| &mut f.sleep_duration)}
                    <label class="form-control w-full">
                        <span class="label-text">
                            {move || format!("Stress level: {}", form.with(|f| f.stress_level))}
                        </span>
                        <input
                            type="range"
                            min="1"
                            max="10"
                            step="1"
                            class="range range-primary range-sm"
                            prop:value=move || form.with(|f| f.stress_level.to_string())
                            on:input=move |ev| {
                                if let Ok(level) = event_target_value(&ev).parse::<f64>() {
                                    form.update(|f| f.stress_level = level);
                                }
                            }
                        />
                    </label>
                    {field("Smoking status", "smoking_status", |f| &f.smoking_status, |f| &mut f.smoking_status)}
                    {field("Alcohol usage", "alcohol_usage", |f| &f.alcohol_usage, |f| &mut f.alcohol_usage)}
                </div>
            </div>

            <div class="flex justify-end gap-2">
                <button type="button" class="btn btn-ghost" on:click=move |_| form.set(DataEntryForm::default())>
                    "Reset"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn ReceiptCard(receipt: DataEntryReceipt) -> impl IntoView {
    let alert = match receipt.status {
        SubmissionStatus::Success => "alert alert-success",
        SubmissionStatus::PartialSuccess => "alert alert-warning",
    };
    let prediction = receipt.prediction.map(|p| {
        let level = p.risk_level.label();
        view! {
            <span>
                "Predicted risk: "
                <span class=risk_class(level)>{level}</span>
                {format!(" ({:.0}%)", p.risk_score * 100.0)}
            </span>
        }
    });

    view! {
        <div role="status" class=alert>
            <div class="flex flex-col gap-1">
                <span class="font-semibold">{receipt.message}</span>
                {prediction}
                {receipt.error.map(|e| view! { <span class="text-sm">{e}</span> })}
            </div>
            <Link route=AppRoute::PatientDetail(receipt.patient_id) class="btn btn-sm">
                "View patient"
            </Link>
        </div>
    }
}
