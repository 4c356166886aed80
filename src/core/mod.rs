//! Core types: geometry, RNG, configuration, errors.
//!
//! This module contains the host-agnostic building blocks. Hosts
//! configure the engine via `CardConfig` rather than modifying the core.

pub mod geom;
pub mod rng;
pub mod config;
pub mod error;

pub use geom::{Position, Rect, GridCoord, Scale};
pub use rng::{GameRng, GameRngState};
pub use config::CardConfig;
pub use error::ConfigError;
