#![deny(unsafe_code)]
//! Field-line animation engine for the brainstream viewer.
//!
//! A handful of moving [`FieldSource`]s (spin, attract, repel) define a force
//! field over the canvas; streamlines are traced from seed points by Euler
//! integration and repainted every frame. The whole simulation is
//! deterministic: a [`FieldEngine`] built from the same seed and config
//! produces bit-identical streamlines tick after tick.

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod looper;
pub mod params;
pub mod pixmap;
pub mod prng;
pub mod seed;
pub mod source;
pub mod streamline;

pub use color::Srgb;
pub use config::{ClearMode, EngineConfig, ReseedPolicy};
pub use engine::FieldEngine;
pub use error::EngineError;
pub use looper::{LoopState, RenderLoop};
pub use pixmap::Pixmap;
pub use prng::Xorshift64;
pub use seed::StreamlineSeed;
pub use source::{FieldModel, FieldSource, SourceKind};
pub use streamline::Streamline;
