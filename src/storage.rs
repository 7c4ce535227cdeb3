//! Browser Token Storage
//!
//! Persists the session token in `localStorage`.

use taskdesk_core::error::{ApiError, ApiResult};
use taskdesk_core::session::{TokenStore, TOKEN_KEY};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        let storage = local_storage()
            .ok_or_else(|| ApiError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
