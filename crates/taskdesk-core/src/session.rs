//! Auth Session Store
//!
//! Owns the bearer token for the signed-in user. The token is mirrored into a
//! `TokenStore` so a page reload keeps the session.

use std::sync::Mutex;

use crate::api::TaskApi;
use crate::error::{ApiResult, AuthError};
use crate::models::{Credentials, NewUser, User};

/// Key under which the token is persisted
pub const TOKEN_KEY: &str = "token";

/// Persistent backing for the session token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ApiResult<()>;
    fn clear(&self);
}

/// Process-local store, for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// The current session: present token or none
#[derive(Debug)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Rebuild the session from whatever the store kept
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        if token.is_some() {
            log::debug!("restored session token from storage");
        }
        Self { store, token }
    }

    pub fn login(&mut self, token: String) {
        if let Err(e) = self.store.save(&token) {
            // Keep the in-memory session even if it won't survive a reload
            log::warn!("failed to persist session token: {}", e);
        }
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
    }

    pub fn current_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Exchange credentials for a bearer token
///
/// Any rejection, including transport failure, reads as bad credentials.
pub async fn sign_in<A: TaskApi + ?Sized>(
    api: &A,
    username: &str,
    password: &str,
) -> Result<String, AuthError> {
    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    match api.login(&credentials).await {
        Ok(response) => Ok(response.access_token),
        Err(e) => {
            log::warn!("login rejected for {}: {}", username, e);
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Create an account; the server's `detail` is surfaced when it sends one
pub async fn register<A: TaskApi + ?Sized>(
    api: &A,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    api.register(&user).await.map_err(|e| {
        log::warn!("registration failed for {}: {}", username, e);
        AuthError::Registration(e.detail().map(str::to_string))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::{MemoryApi, PASSWORD, TOKEN, USERNAME};
    use crate::error::ApiError;

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> Option<String> {
            None
        }
        fn save(&self, _token: &str) -> ApiResult<()> {
            Err(ApiError::Storage("quota exceeded".to_string()))
        }
        fn clear(&self) {}
    }

    #[tokio::test]
    async fn test_valid_login_sets_token() {
        let api = MemoryApi::new();
        let mut session = Session::restore(MemoryTokenStore::new());
        assert_eq!(session.current_token(), None);

        let token = sign_in(&api, USERNAME, PASSWORD).await.expect("login should succeed");
        session.login(token);

        assert_eq!(session.current_token(), Some(TOKEN));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_invalid_login_keeps_token_absent() {
        let api = MemoryApi::new();
        let session = Session::restore(MemoryTokenStore::new());

        let err = sign_in(&api, USERNAME, "wrong").await.unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid username or password");
        assert_eq!(session.current_token(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_reads_as_invalid_credentials() {
        let api = MemoryApi::new().failing("login");
        let err = sign_in(&api, USERNAME, PASSWORD).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn test_session_survives_restore() {
        let store = MemoryTokenStore::new();
        let mut session = Session::restore(store);
        session.login("abc".to_string());

        let restored = Session::restore(session.store);
        assert_eq!(restored.current_token(), Some("abc"));
    }

    #[test]
    fn test_logout_clears_memory_and_store() {
        let mut session = Session::restore(MemoryTokenStore::new());
        session.login("abc".to_string());
        session.logout();

        assert_eq!(session.current_token(), None);
        assert_eq!(session.store.load(), None);
    }

    #[test]
    fn test_store_failure_keeps_in_memory_token() {
        let mut session = Session::restore(BrokenStore);
        session.login("abc".to_string());
        assert_eq!(session.current_token(), Some("abc"));
    }

    #[test]
    fn test_empty_stored_token_is_ignored() {
        let store = MemoryTokenStore::new();
        store.save("").unwrap();
        assert!(!Session::restore(store).is_authenticated());
    }

    #[tokio::test]
    async fn test_register_surfaces_server_detail() {
        let api = MemoryApi::new();
        let err = register(&api, USERNAME, "other@example.com", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Email or username already registered");

        let user = register(&api, "grace", "grace@example.com", "pw").await.unwrap();
        assert_eq!(user.username, "grace");
    }
}
