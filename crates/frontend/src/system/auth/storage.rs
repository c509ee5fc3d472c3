use web_sys::window;

use super::session::{StoredTokens, TokenStore};

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.is_empty())
}

/// Tokens kept in `localStorage` so a reload does not sign the admin out
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> StoredTokens {
        StoredTokens {
            access_token: get_item(ACCESS_TOKEN_KEY),
            refresh_token: get_item(REFRESH_TOKEN_KEY),
        }
    }

    fn save(&self, tokens: &StoredTokens) {
        let Some(storage) = get_local_storage() else {
            log::warn!("localStorage unavailable, session will not survive a reload");
            return;
        };
        for (key, value) in [
            (ACCESS_TOKEN_KEY, &tokens.access_token),
            (REFRESH_TOKEN_KEY, &tokens.refresh_token),
        ] {
            let _ = match value {
                Some(token) => storage.set_item(key, token),
                None => storage.remove_item(key),
            };
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
