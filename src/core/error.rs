//! Configuration errors.
//!
//! Everything here surfaces at construction time. Draw and event
//! processing are total over well-formed, already-constructed objects,
//! so no other error states exist.

use thiserror::Error;

/// A defect in the host-supplied configuration or sprite atlas.
///
/// Returned fail-fast from card and square construction. In particular,
/// an undersized column pool is rejected immediately instead of hanging
/// a rejection-sampling loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("card layout defines no squares")]
    EmptyLayout,

    #[error("no number pool configured for column {column}")]
    MissingColumnPool { column: u8 },

    #[error("column {column} needs {required} distinct numbers but its pool only has {available}")]
    PoolTooSmall {
        column: u8,
        required: usize,
        available: usize,
    },

    #[error("sprite `{name}` is not registered in the atlas")]
    UnknownSprite { name: String },
}
