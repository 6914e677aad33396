use std::cell::RefCell;

use web_sys::Storage;

/// Storage key the bearer token lives under. The token is the sole signal of
/// "authenticated": at most one exists at a time, `set` replaces it.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Credential provider injected into the API client, so alternate storage can
/// replace the browser one without touching call sites.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Bearer token persisted in `window.localStorage`, durable across reloads
/// within the same browser profile.
#[derive(Debug, Default)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if let Err(error) = storage.set_item(TOKEN_STORAGE_KEY, token) {
                log::error!("Fail to persist token, error={error:?}");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(error) = storage.remove_item(TOKEN_STORAGE_KEY) {
                log::error!("Fail to clear token, error={error:?}");
            }
        }
    }
}

/// In-process token store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        self.token.replace(Some(token.to_owned()));
    }

    fn clear(&self) {
        self.token.replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_replaces_the_previous_token() {
        let store = MemoryTokenStore::default();
        store.set("first");
        store.set("second");
        assert_eq!(store.get(), Some("second".to_owned()));
    }

    #[test]
    fn clear_removes_the_token() {
        let store = MemoryTokenStore::default();
        store.set("token");
        store.clear();
        assert_eq!(store.get(), None);
    }
}
