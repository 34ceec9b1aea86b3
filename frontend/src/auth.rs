//! Auth context.
//!
//! Wraps the core `AuthSession` in a Leptos context. The session stays the
//! source of truth; the signal mirrors its state so views re-render on
//! login and logout.

use crate::web::{FetchClient, WebStorage};
use hackwell::{ApiClient, ApiError, AuthSession, AuthState, ClientConfig, TokenManager, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

pub type Api = ApiClient<FetchClient>;
type Session = AuthSession<FetchClient>;

/// Backend URL baked in at build time.
fn client_config() -> ClientConfig {
    match ClientConfig::resolve(option_env!("HACKWELL_API_URL")) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("[Auth] {e}, using default backend").into());
            ClientConfig::default()
        }
    }
}

/// Auth state shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Rc<Session>, LocalStorage>,
    /// Mirror of the session state (read-only).
    pub state: ReadSignal<AuthState>,
    /// Last login failure. Outlives the login form, which the guard
    /// unmounts while the request is in flight.
    pub login_error: RwSignal<Option<String>>,
}

impl AuthContext {
    pub fn new(config: &ClientConfig) -> Self {
        let tokens = match WebStorage::open() {
            Some(store) => TokenManager::with_key(Rc::new(store), config.token_key.clone()),
            None => {
                web_sys::console::warn_1(&"[Auth] localStorage unavailable".into());
                TokenManager::detached()
            }
        };
        let session = AuthSession::new(ApiClient::new(config, FetchClient, tokens));

        let (state, set_state) = signal(session.state());
        session.subscribe(move |next| set_state.set(next.clone()));

        Self {
            session: StoredValue::new_local(session),
            state,
            login_error: RwSignal::new(None),
        }
    }

    /// Restores the session from storage and, when configured, checks the
    /// stored token with the backend.
    pub fn start(&self, revalidate: bool) {
        let session = self.session.get_value();
        spawn_local(async move {
            session.start(revalidate).await;
        });
    }

    /// API client carrying the session's token.
    pub fn api(&self) -> Api {
        self.session.with_value(|s| s.api().clone())
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::is_authenticated))
    }

    /// Signs in; a failure is also kept in `login_error`.
    pub async fn login(&self, username: String, password: String) -> Result<User, ApiError> {
        self.login_error.set(None);
        let session = self.session.get_value();
        let result = session.login(&username, &password).await;
        if let Err(e) = &result {
            self.login_error.set(Some(e.to_string()));
        }
        result
    }

    pub fn logout(&self) {
        self.login_error.set(None);
        self.session.with_value(|s| s.logout());
    }
}

/// Auth context from context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Creates the context, provides it, and starts the session.
pub fn provide_auth() -> AuthContext {
    let config = client_config();
    let ctx = AuthContext::new(&config);
    provide_context(ctx);
    ctx.start(config.revalidate_on_start);
    ctx
}
