//! Persistent storage for the single bearer token slot.
//!
//! The browser implementation is one origin-scoped `localStorage` key, so
//! the token survives reloads of the same origin and nothing else. No expiry
//! logic and no validation live here; this is pure storage.
//!
//! TRADE-OFFS
//! ==========
//! Browser persistence is best-effort: `localStorage` access can fail (e.g.
//! disabled storage), in which case reads behave as an empty slot and writes
//! are dropped. SSR paths see an always-empty slot to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "bazar_jwt";

/// The single process-wide token slot.
///
/// All collaborators (session controller, request signing) go through this
/// trait; only the session controller removes or overwrites the slot, so the
/// published `authenticated` flag stays consistent with stored state.
pub trait TokenStore {
    /// Read the stored token, if any.
    fn get(&self) -> Option<String>;
    /// Overwrite the slot with `token`.
    fn set(&self, token: &str);
    /// Clear the slot.
    fn remove(&self);
}

/// `localStorage`-backed token slot under the `bazar_jwt` key.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory token slot, shared across clones.
///
/// Used by tests and usable wherever no browser storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create a slot pre-populated with `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn remove(&self) {
        *self.slot.borrow_mut() = None;
    }
}
