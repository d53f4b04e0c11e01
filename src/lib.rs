//! # attendance-ui
//!
//! Browser-side behavior for the attendance management pages, compiled to
//! WebAssembly with the `hydrate` feature. The pages are server-rendered;
//! this crate attaches to the existing markup once the DOM is ready.
//!
//! The core is form draft persistence: forms opted in with `data-autosave`
//! mirror their control values into `localStorage` on every change and are
//! restored on the next page load, so a reload does not lose unsaved input.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`drafts`] | Draft keys, payloads, and the save/load/restore store |
//! | [`autosave`] | Opt-in discovery and change-event wiring |
//! | [`storage`] | Durable key-value store interface and implementations |
//! | [`form`] | Form/control interface and in-memory form model |
//! | [`attendance`] | Marking form decisions (row status, submit gate, notifications) |
//! | [`search`] | Live row filtering |
//! | [`config`] | Page configuration from `data-ui-*` attributes |
//! | [`error`] | Crate error type |
//! | `dom` | `web-sys` bindings (hydrate only) |

pub mod attendance;
pub mod autosave;
pub mod config;
pub mod drafts;
pub mod error;
pub mod form;
pub mod search;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use error::UiError;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = dom::boot::on_dom_ready() {
        web_sys::console::error_1(&format!("attendance-ui start failed: {e}").into());
    }
}
