//! Browser glue for the stage engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window` lives here, behind `hydrate` cfg gates, so
//! components stay renderable on the server.

pub mod clock;
pub mod viewport;

use stage::engine::Action;

/// Log every engine action at debug level.
pub fn log_actions(actions: &[Action]) {
    for action in actions {
        log::debug!("engine: {action:?}");
    }
}
