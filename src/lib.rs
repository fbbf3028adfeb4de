//! epicast-rs: epidemic forecast chart mapping and stepping engine.
//!
//! This crate provides a Rust-idiomatic API with a strict split between
//! domain geometry (scales, marker models, the prediction pointer) and the
//! rendering substrate, which stays behind the [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
