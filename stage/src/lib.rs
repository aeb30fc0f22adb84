//! Headless state machine for the two-track portfolio landing experience.
//!
//! This crate owns every piece of behaviour that is not markup: turning a
//! dragged knob into a discrete [`mode::Mode`], the timed landing reveal, the
//! proceed/confirm transition, the header toggle that keeps itself in sync
//! after confirmation, and the choice of which content view is mounted. It has
//! no browser dependencies; the `client` crate feeds it pointer, viewport, and
//! clock input and renders whatever it reports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] that routes input to every component |
//! | [`controller`] | Single writer of the selection state; proceed/confirm |
//! | [`selector`] | Drag/click toggle → discrete mode, with knob spring |
//! | [`header`] | Post-confirmation header toggle, scroll compacting |
//! | [`landing`] | Landing screen aggregate: toggle, reveal, typewriter, stickers |
//! | [`reveal`] | Staged landing reveal sequencer and ambient orbs |
//! | [`router`] | Which content view is mounted |
//! | [`schedule`] | Cancellable `(delay, action)` schedule against one clock |
//! | [`spring`] | Damped spring used for knob snaps |
//! | [`typewriter`] | Character-by-character text reveal |
//! | [`rotating`] | Cyclic rotating heading word |
//! | [`layout`] | Toggle geometry presets and viewport breakpoints |
//! | [`content`] | Static showcase catalogue for the two content views |
//! | [`mode`] | The discrete mode type |
//! | [`consts`] | Timings and sizes |
//! | [`error`] | Crate error type |

pub mod consts;
pub mod content;
pub mod controller;
pub mod engine;
pub mod error;
pub mod header;
pub mod landing;
pub mod layout;
pub mod mode;
pub mod reveal;
pub mod rotating;
pub mod router;
pub mod schedule;
pub mod selector;
pub mod spring;
pub mod typewriter;
