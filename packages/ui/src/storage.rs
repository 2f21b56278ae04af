//! Persisted language preference.
//!
//! Single localStorage key, read once at startup and overwritten on every
//! language change. Off the browser (SSR, native tests) both operations
//! are no-ops so rendering stays deterministic.

/// localStorage key holding the last explicitly chosen language.
pub const PREFERENCE_KEY: &str = "preferredLang";

/// Read the stored language key, if the browser has one.
pub fn read_preference() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(PREFERENCE_KEY)
            .ok()
            .flatten()
            .filter(|value| !value.trim().is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Best-effort write of the chosen language key.
pub fn write_preference(key: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(PREFERENCE_KEY, key);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
    }
}
