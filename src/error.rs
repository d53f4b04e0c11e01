//! Crate-wide error type.
//!
//! Nothing in this crate is allowed to take the page down. Fallible
//! operations return [`UiError`]; page-boundary callers (draft restore,
//! autosave install, DOM wiring) log and swallow it.

/// Error returned by draft, storage, config, and DOM operations.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// Stored draft text is not a flat JSON object of strings.
    #[error("stored draft is not a valid payload: {0}")]
    Deserialization(#[source] serde_json::Error),
    /// Draft payload could not be encoded.
    #[error("failed to encode draft payload: {0}")]
    Serialization(#[source] serde_json::Error),
    /// The form has no usable identifier to derive a storage key from.
    #[error("form has no identifier")]
    MissingIdentifier,
    /// Durable storage is disabled, full, or not present.
    #[error("durable store unavailable: {0}")]
    StoreUnavailable(String),
    /// A configuration override could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
    /// A browser DOM call failed.
    #[error("dom error: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl UiError {
    /// Wrap a thrown JS value as a DOM error.
    pub(crate) fn dom(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }

    /// Wrap a thrown JS value from the storage API.
    pub(crate) fn store(value: wasm_bindgen::JsValue) -> Self {
        Self::StoreUnavailable(format!("{value:?}"))
    }
}
