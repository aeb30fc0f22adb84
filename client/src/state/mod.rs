//! Client-side state modules.
//!
//! The session itself lives in a `RwSignal<stage::engine::Engine>` provided via
//! context from `app`. Modules here derive render-ready view models from it.

pub mod view;
