//! Session Storage
//!
//! The bearer token lives in `localStorage`; whoever signs the user in writes it.

#[derive(Clone, Debug)]
pub struct SessionStore {
    storage_key: String,
}

impl SessionStore {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Current session token, if a non-blank one is stored
    pub fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(&self.storage_key).ok().flatten()?;
        normalize_token(&raw)
    }
}

fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim();
    (!token.is_empty()).then(|| token.to_string())
}
