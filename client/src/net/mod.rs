//! Networking modules for the processing backend and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles study-content REST calls, `identity` manages the auth
//! session, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
