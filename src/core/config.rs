//! Card layout configuration.
//!
//! Hosts configure cards at startup by providing a `CardConfig`:
//! - `square_spacing`: pixel distance between neighboring squares
//! - `square_offsets`: the (column, row) pairs that make up a card
//! - `column_pools`: the numbers each column may draw from
//!
//! The engine never hardcodes a grid shape or number range - hosts
//! define them, or start from the [`CardConfig::classic`] preset.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::geom::GridCoord;

/// Number of columns and rows on a classic 75-ball card.
const CLASSIC_SIDE: u8 = 5;

/// Pool size per column on a classic 75-ball card (B-I-N-G-O).
const CLASSIC_POOL_SIZE: i32 = 15;

/// Immutable card layout configuration.
///
/// Constructed once by the host (typically deserialized from its
/// settings file) and borrowed by every card constructor. Column pools
/// must be at least as large as the number of squares in that column;
/// [`CardConfig::validate`] and card construction both enforce this.
///
/// ## Example
///
/// ```
/// use rust_bingo::core::CardConfig;
///
/// let config = CardConfig::new(60)
///     .with_grid(3, 3)
///     .with_column_pool(0, (1..=10).collect())
///     .with_column_pool(1, (11..=20).collect())
///     .with_column_pool(2, (21..=30).collect());
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Pixel spacing between adjacent squares, applied per grid step.
    pub square_spacing: i32,

    /// Ordered (column, row) offsets defining the grid shape.
    ///
    /// Squares are created in this order. Duplicate coordinates are a
    /// host mistake; the last square created for a coordinate wins.
    pub square_offsets: Vec<GridCoord>,

    /// Candidate numbers per column.
    ///
    /// Pools are disjoint by convention in the classic game; the engine
    /// only enforces in-column uniqueness, not cross-column.
    pub column_pools: FxHashMap<u8, Vec<i32>>,
}

impl CardConfig {
    /// Create an empty configuration with the given square spacing.
    #[must_use]
    pub fn new(square_spacing: i32) -> Self {
        Self {
            square_spacing,
            square_offsets: Vec::new(),
            column_pools: FxHashMap::default(),
        }
    }

    /// The classic 75-ball card: a full 5x5 grid with column pools
    /// 1-15, 16-30, 31-45, 46-60, 61-75.
    #[must_use]
    pub fn classic(square_spacing: i32) -> Self {
        let mut config = Self::new(square_spacing).with_grid(CLASSIC_SIDE, CLASSIC_SIDE);
        for col in 0..CLASSIC_SIDE {
            let start = i32::from(col) * CLASSIC_POOL_SIZE + 1;
            config = config.with_column_pool(col, (start..start + CLASSIC_POOL_SIZE).collect());
        }
        config
    }

    /// The classic card with the center square left out, matching
    /// physical cards that print a free space at (2, 2).
    #[must_use]
    pub fn classic_open_center(square_spacing: i32) -> Self {
        let mut config = Self::classic(square_spacing);
        let center = GridCoord::new(CLASSIC_SIDE / 2, CLASSIC_SIDE / 2);
        config.square_offsets.retain(|&coord| coord != center);
        config
    }

    /// Add a single square at (column, row).
    #[must_use]
    pub fn with_square(mut self, col: u8, row: u8) -> Self {
        self.square_offsets.push(GridCoord::new(col, row));
        self
    }

    /// Add a full grid of `cols` x `rows` squares, column-major.
    #[must_use]
    pub fn with_grid(mut self, cols: u8, rows: u8) -> Self {
        for col in 0..cols {
            for row in 0..rows {
                self.square_offsets.push(GridCoord::new(col, row));
            }
        }
        self
    }

    /// Set the candidate number pool for a column.
    #[must_use]
    pub fn with_column_pool(mut self, col: u8, numbers: Vec<i32>) -> Self {
        self.column_pools.insert(col, numbers);
        self
    }

    /// Get the number pool for a column.
    #[must_use]
    pub fn column_pool(&self, col: u8) -> Option<&[i32]> {
        self.column_pools.get(&col).map(Vec::as_slice)
    }

    /// Count the squares the layout places in a column.
    #[must_use]
    pub fn column_square_count(&self, col: u8) -> usize {
        self.square_offsets.iter().filter(|c| c.col == col).count()
    }

    /// Squares required per column, in ascending column order.
    #[must_use]
    pub fn column_requirements(&self) -> Vec<(u8, usize)> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for coord in &self.square_offsets {
            *counts.entry(coord.col).or_default() += 1;
        }
        let mut requirements: Vec<_> = counts.into_iter().collect();
        requirements.sort_unstable_by_key(|&(col, _)| col);
        requirements
    }

    /// Check that every column can deal enough distinct numbers.
    ///
    /// Errors identify the first offending column in ascending order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.square_offsets.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }

        for (col, required) in self.column_requirements() {
            let pool = self
                .column_pool(col)
                .ok_or(ConfigError::MissingColumnPool { column: col })?;
            if pool.len() < required {
                return Err(ConfigError::PoolTooSmall {
                    column: col,
                    required,
                    available: pool.len(),
                });
            }
        }

        Ok(())
    }
}
