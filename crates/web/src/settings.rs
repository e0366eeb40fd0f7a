//! Typed access to the browser's durable key/value storage.
//!
//! The two persisted settings live behind this store; view code never
//! touches `localStorage` directly.

use viewsmith_core::UserId;
use web_sys::Storage;

const USER_ID_KEY: &str = "userId";
const TOKEN_KEY: &str = "userToken";

#[derive(Clone)]
pub struct SettingsStore {
    storage: Storage,
}

impl SettingsStore {
    /// `None` when the environment exposes no local storage.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }

    /// The stable session identity: generated and persisted on first use,
    /// then reused unchanged on every subsequent load. A stored value that
    /// no longer parses is replaced, since nothing downstream could accept
    /// it.
    pub fn ensure_user_id(&self) -> UserId {
        if let Ok(Some(stored)) = self.storage.get_item(USER_ID_KEY) {
            if let Ok(id) = stored.parse::<UserId>() {
                return id;
            }
        }

        let id = UserId::new();
        let _ = self.storage.set_item(USER_ID_KEY, &id.to_string());
        id
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).ok().flatten()
    }

    /// Write-through: called on every token edit.
    pub fn set_token(&self, token: &str) {
        let _ = self.storage.set_item(TOKEN_KEY, token);
    }
}
