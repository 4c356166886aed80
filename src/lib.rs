//! # rust-bingo
//!
//! A bingo card engine for game hosts: card and square generation,
//! player marking, and click dispatch.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No rendering backend or event loop is assumed.
//!    Hosts supply a [`Surface`] for drawing and feed [`ClickEvent`]s in.
//!
//! 2. **Configuration Over Convention**: Grid shape, square spacing, and
//!    per-column number pools come from an explicit [`CardConfig`] passed
//!    into constructors. No ambient settings lookup.
//!
//! 3. **Fail Fast**: Malformed configuration (a column pool smaller than
//!    the squares that must draw distinct numbers from it) surfaces as a
//!    [`ConfigError`] at construction time, never as a hang.
//!
//! ## Architecture
//!
//! - **Ownership flows down**: a [`CardCollection`] owns [`BingoCard`]s,
//!   a card owns [`BingoSquare`]s. Draw calls and click events are
//!   delegated top-down unchanged; nothing holds an upward reference.
//!
//! - **Sampling without replacement**: each card shuffles a copy of every
//!   column's pool once and deals sequentially, so in-column numbers are
//!   unique by construction and termination is unconditional.
//!
//! - **Deterministic RNG**: all randomness (number dealing, marker
//!   rotation) goes through a seeded [`GameRng`] threaded explicitly
//!   through constructors and click handling.
//!
//! ## Modules
//!
//! - `core`: geometry, RNG, configuration, errors
//! - `render`: the `Surface`/`Drawable` seam and the sprite atlas
//! - `input`: the `ClickTarget` seam and event dispatch
//! - `cards`: squares, cards, card collections

pub mod core;
pub mod render;
pub mod input;
pub mod cards;

// Re-export commonly used types
pub use crate::core::{
    Position, Rect, GridCoord, Scale,
    GameRng, GameRngState,
    CardConfig, ConfigError,
};

pub use crate::render::{Surface, Drawable, SpriteSpec, SpriteInstance, SpriteAtlas};

pub use crate::input::{ClickEvent, ClickTarget, dispatch_click};

pub use crate::cards::{BingoSquare, BingoCard, CardCollection};
