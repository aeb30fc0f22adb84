//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! `home` switches between the landing and content pages from the engine's
//! confirmed flag; each page delegates rendering to `components`.

pub mod content;
pub mod home;
pub mod landing;
