use crate::auth::use_auth;
use crate::components::common::{Spinner, SyntheticBadge};
use hackwell::views::fallback;
use hackwell::views::settings::{
    self, STATUS_RESET_MS, SaveStatus, SaveStatuses, SettingsData, SettingsGroup,
};
use hackwell_shared::{NotificationSettings, Preferences, SecuritySettings, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let defaults = fallback::default_settings();

    let profile = RwSignal::new(UserProfile::default());
    let notifications = RwSignal::new(defaults.notifications);
    let preferences = RwSignal::new(defaults.preferences);
    let security = RwSignal::new(defaults.security);
    let (loaded, set_loaded) = signal(Option::<(Option<String>, Option<String>)>::None);
    let statuses = RwSignal::new(SaveStatuses::default());

    {
        let api = auth.api();
        spawn_local(async move {
            let SettingsData {
                profile: p,
                settings: s,
            } = settings::load(&api).await;
            let reasons = (p.reason().map(str::to_string), s.reason().map(str::to_string));
            profile.set(p.into_data());
            let s = s.into_data();
            notifications.set(s.notifications);
            preferences.set(s.preferences);
            security.set(s.security);
            set_loaded.set(Some(reasons));
        });
    }

    let save = move |group: SettingsGroup| {
        statuses.update(|s| s.set(group, SaveStatus::Saving));
        let api = auth.api();
        spawn_local(async move {
            let status = match group {
                SettingsGroup::Profile => {
                    settings::save_profile(&api, &profile.get_untracked()).await
                }
                SettingsGroup::Notifications => {
                    settings::save_notifications(&api, &notifications.get_untracked()).await
                }
                SettingsGroup::Preferences => {
                    settings::save_preferences(&api, &preferences.get_untracked()).await
                }
                SettingsGroup::Security => {
                    settings::save_security(&api, &security.get_untracked()).await
                }
            };
            if status.is_transient() {
                let shown = status.clone();
                set_timeout(
                    move || {
                        // Leave it if a newer save replaced this status.
                        statuses.update(|s| {
                            if s.get(group) == &shown {
                                s.set(group, SaveStatus::Idle);
                            }
                        });
                    },
                    Duration::from_millis(STATUS_RESET_MS.into()),
                );
            }
            statuses.update(|s| s.set(group, status));
        });
    };
    let on_save = Callback::new(save);

    view! {
        <div>
            <h1 class="text-3xl font-bold">"Settings"</h1>
            <p class="text-base-content/70 mt-2">"Profile, notifications and account security."</p>
        </div>
        {move || match loaded.get() {
            None => view! { <Spinner /> }.into_any(),
            Some((profile_reason, settings_reason)) => view! {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <ProfileCard profile=profile reason=profile_reason statuses=statuses on_save=on_save />
                    <NotificationsCard notifications=notifications reason=settings_reason.clone() statuses=statuses on_save=on_save />
                    <PreferencesCard preferences=preferences reason=settings_reason.clone() statuses=statuses on_save=on_save />
                    <SecurityCard security=security reason=settings_reason statuses=statuses on_save=on_save />
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn SaveButton(
    group: SettingsGroup,
    statuses: RwSignal<SaveStatuses>,
    on_save: Callback<SettingsGroup>,
) -> impl IntoView {
    let status = move || statuses.with(|s| s.get(group).clone());
    view! {
        <div class="card-actions items-center justify-end">
            {move || match status() {
                SaveStatus::Saved => view! { <span class="text-success text-sm">"Saved"</span> }.into_any(),
                SaveStatus::Failed(e) => view! { <span class="text-error text-sm">{e}</span> }.into_any(),
                _ => ().into_any(),
            }}
            <button
                class="btn btn-primary btn-sm"
                disabled=move || status() == SaveStatus::Saving
                on:click=move |_| on_save.run(group)
            >
                {move || if status() == SaveStatus::Saving { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}

fn text_field(
    label: &'static str,
    value: impl Fn() -> String + Send + Sync + 'static,
    set: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <span class="label-text">{label}</span>
            <input
                type="text"
                class="input input-bordered input-sm"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        </label>
    }
}

fn toggle(
    label: &'static str,
    checked: impl Fn() -> bool + Send + Sync + 'static,
    set: impl Fn(bool) + 'static,
) -> impl IntoView {
    view! {
        <label class="label cursor-pointer">
            <span class="label-text">{label}</span>
            <input
                type="checkbox"
                class="toggle toggle-primary"
                prop:checked=checked
                on:change=move |ev| set(event_target_checked(&ev))
            />
        </label>
    }
}

#[component]
fn ProfileCard(
    profile: RwSignal<UserProfile>,
    reason: Option<String>,
    statuses: RwSignal<SaveStatuses>,
    on_save: Callback<SettingsGroup>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-2">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Profile"</h3>
                    <SyntheticBadge reason=reason />
                </div>
                {text_field("Full name", move || profile.with(|p| p.full_name.clone()), move |v| profile.update(|p| p.full_name = v))}
                {text_field("Email", move || profile.with(|p| p.email.clone()), move |v| profile.update(|p| p.email = v))}
                {text_field("Phone", move || profile.with(|p| p.phone.clone()), move |v| profile.update(|p| p.phone = v))}
                {text_field("Department", move || profile.with(|p| p.department.clone()), move |v| profile.update(|p| p.department = v))}
                {text_field("License", move || profile.with(|p| p.license.clone()), move |v| profile.update(|p| p.license = v))}
                <SaveButton group=SettingsGroup::Profile statuses=statuses on_save=on_save />
            </div>
        </div>
    }
}

#[component]
fn NotificationsCard(
    notifications: RwSignal<NotificationSettings>,
    reason: Option<String>,
    statuses: RwSignal<SaveStatuses>,
    on_save: Callback<SettingsGroup>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-1">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Notifications"</h3>
                    <SyntheticBadge reason=reason />
                </div>
                {toggle("Email", move || notifications.with(|n| n.email), move |v| notifications.update(|n| n.email = v))}
                {toggle("Push", move || notifications.with(|n| n.push), move |v| notifications.update(|n| n.push = v))}
                {toggle("SMS", move || notifications.with(|n| n.sms), move |v| notifications.update(|n| n.sms = v))}
                {toggle("Critical alerts", move || notifications.with(|n| n.critical_alerts), move |v| notifications.update(|n| n.critical_alerts = v))}
                {toggle("Weekly reports", move || notifications.with(|n| n.weekly_reports), move |v| notifications.update(|n| n.weekly_reports = v))}
                <SaveButton group=SettingsGroup::Notifications statuses=statuses on_save=on_save />
            </div>
        </div>
    }
}

#[component]
fn PreferencesCard(
    preferences: RwSignal<Preferences>,
    reason: Option<String>,
    statuses: RwSignal<SaveStatuses>,
    on_save: Callback<SettingsGroup>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-2">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Preferences"</h3>
                    <SyntheticBadge reason=reason />
                </div>
                {text_field("Theme", move || preferences.with(|p| p.theme.clone()), move |v| preferences.update(|p| p.theme = v))}
                {text_field("Language", move || preferences.with(|p| p.language.clone()), move |v| preferences.update(|p| p.language = v))}
                {text_field("Timezone", move || preferences.with(|p| p.timezone.clone()), move |v| preferences.update(|p| p.timezone = v))}
                {text_field("Date format", move || preferences.with(|p| p.date_format.clone()), move |v| preferences.update(|p| p.date_format = v))}
                {text_field("Default view", move || preferences.with(|p| p.default_view.clone()), move |v| preferences.update(|p| p.default_view = v))}
                <SaveButton group=SettingsGroup::Preferences statuses=statuses on_save=on_save />
            </div>
        </div>
    }
}

#[component]
fn SecurityCard(
    security: RwSignal<SecuritySettings>,
    reason: Option<String>,
    statuses: RwSignal<SaveStatuses>,
    on_save: Callback<SettingsGroup>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-2">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Security"</h3>
                    <SyntheticBadge reason=reason />
                </div>
                {toggle("Two-factor authentication", move || security.with(|s| s.two_factor), move |v| security.update(|s| s.two_factor = v))}
                {toggle("Login alerts", move || security.with(|s| s.login_alerts), move |v| security.update(|s| s.login_alerts = v))}
                {text_field("Session timeout (minutes)", move || security.with(|s| s.session_timeout.clone()), move |v| security.update(|s| s.session_timeout = v))}
                {text_field("Password expiry (days)", move || security.with(|s| s.password_expiry.clone()), move |v| security.update(|s| s.password_expiry = v))}
                <SaveButton group=SettingsGroup::Security statuses=statuses on_save=on_save />
            </div>
        </div>
    }
}
