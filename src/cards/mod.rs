//! Bingo cards: squares, cards, and collections.
//!
//! ## Key Types
//!
//! - `BingoSquare`: one numbered cell with call/highlight state
//! - `BingoCard`: a grid of squares with per-column unique numbers
//! - `CardCollection`: an ordered set of cards positioned together
//!
//! Construction is one-shot and top-down: a collection builds its
//! cards, a card deals its numbers and builds its squares. Nothing is
//! added or removed afterwards; only the square state flags mutate.

pub mod square;
pub mod card;
pub mod collection;

pub use square::{BingoSquare, HIGHLIGHT_SPRITE, LABEL_SPRITE, MARKER_SPRITE};
pub use card::BingoCard;
pub use collection::CardCollection;
