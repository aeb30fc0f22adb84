//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the engine from context through `Memo`ed view models and
//! forward DOM input back into it. None of them own session state.

pub mod ambient_orbs;
pub mod animated_heading;
pub mod mode_toggle;
pub mod proceed_arrow;
pub mod project_card;
pub mod showcase;
pub mod site_header;
pub mod stickers;
pub mod typewriter_text;
