use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16 gap-3 text-base-content/60">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            {label}
        </div>
    }
}

/// Page-level failure with a retry action that re-runs the fetch.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error">
            <span>{message}</span>
            <button class="btn btn-sm" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}

/// Marks a section rendered from placeholder data.
#[component]
pub fn SyntheticBadge(reason: Option<String>) -> impl IntoView {
    reason.map(|reason| {
        view! {
            <span class="badge badge-warning badge-outline text-xs" title=reason>
                "Sample data"
            </span>
        }
    })
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {class}")>{value}</div>
        </div>
    }
}

pub fn status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "stable" | "active" => "badge badge-success",
        "monitoring" | "pending" => "badge badge-warning",
        "critical" | "urgent" => "badge badge-error",
        "improving" => "badge badge-info",
        _ => "badge badge-ghost",
    }
}

pub fn risk_class(risk: &str) -> &'static str {
    match risk.to_ascii_lowercase().as_str() {
        "low" => "badge badge-success",
        "medium" => "badge badge-warning",
        "high" => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

/// Thousands separators for headline counts ("1,247").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
