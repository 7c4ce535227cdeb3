//! Application Context
//!
//! Session and navigation state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use taskdesk_core::{ClientConfig, HttpApi, Session};

use crate::routes::Page;
use crate::storage::BrowserTokenStore;

/// App-wide session and page signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bearer token of the signed-in user - read
    pub token: ReadSignal<Option<String>>,
    /// Bearer token of the signed-in user - write
    set_token: WriteSignal<Option<String>>,
    /// Requested page - read
    pub page: ReadSignal<Page>,
    /// Requested page - write
    set_page: WriteSignal<Page>,
    /// One-shot message for the login page (e.g. after registering)
    pub notice: RwSignal<Option<String>>,
    session: StoredValue<Session<BrowserTokenStore>>,
}

impl AppContext {
    /// Restore any persisted session and read the page from the URL
    pub fn new() -> Self {
        let session = Session::restore(BrowserTokenStore);
        let (token, set_token) = signal(session.current_token().map(str::to_string));
        let (page, set_page) = signal(Page::from_path(&current_path()));
        Self {
            token,
            set_token,
            page,
            set_page,
            notice: RwSignal::new(None),
            session: StoredValue::new(session),
        }
    }

    /// Non-reactive read of the current token
    pub fn current_token(&self) -> Option<String> {
        self.session.with_value(|s| s.current_token().map(str::to_string))
    }

    /// Store the token and go to the dashboard
    pub fn login(&self, token: String) {
        self.session.update_value(|s| s.login(token.clone()));
        self.set_token.set(Some(token));
        self.navigate(Page::Dashboard);
    }

    /// Drop the token; protected pages fall back to login
    pub fn logout(&self) {
        self.session.update_value(|s| s.logout());
        self.set_token.set(None);
        self.navigate(Page::Login);
    }

    pub fn navigate(&self, page: Page) {
        if let Ok(history) = window().history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(page.path()));
        }
        self.set_page.set(page);
    }

    /// Follow browser back/forward without touching history
    pub fn sync_with_location(&self) {
        self.set_page.set(Page::from_path(&current_path()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// API client for the configured server
pub fn api_client() -> HttpApi {
    HttpApi::new(ClientConfig::from_env())
}

fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}
