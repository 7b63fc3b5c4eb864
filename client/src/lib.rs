//! # client
//!
//! Leptos + WASM frontend for the OTUBE study companion.
//!
//! This crate contains pages, components, application state, and the REST
//! layer that talks to the processing backend and the identity provider.
//! Text formatting comes from the `blocks` crate; outline, layout, and SVG
//! rendering for the mind map come from the `mindmap` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
