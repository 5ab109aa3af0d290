#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # leafbridge-entities
//!
//! Reusable, agnostic map overlay entities for leafbridge.
//!
//! The entities only hold state; turning them into client commands
//! and routing client events back is done in `leafbridge-core`.

pub mod event;
pub mod geo;
pub mod icon;
pub mod marker;
pub mod session;
pub mod tag;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
