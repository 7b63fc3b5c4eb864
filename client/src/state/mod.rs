//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `study`, `chat`, `ui`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod chat;
pub mod study;
pub mod ui;
