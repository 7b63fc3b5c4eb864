//! Mind-map derivation engine: summary data in, positioned node graphs out.
//!
//! The pipeline is three pure stages. A structured summary plus the video's
//! key points become a three-level outline tree; the outline is laid out
//! left-to-right into flat positioned nodes and parent→child edges; the
//! layout serializes to a self-contained SVG string. Nothing in this crate
//! touches the DOM or any rendering library, so every stage runs and tests
//! on any target. The client crate owns the final raster/export step.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`summary`] | Wire types for summaries and key points |
//! | [`outline`] | Outline construction from summary data |
//! | [`layout`] | Geometric layout of an outline into nodes and edges |
//! | [`svg`] | SVG serialization of a layout |
//! | [`consts`] | Default geometry constants |

pub mod consts;
pub mod layout;
pub mod outline;
pub mod summary;
pub mod svg;
