//! A bingo card: a grid of squares with per-column unique numbers.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::config::CardConfig;
use crate::core::error::ConfigError;
use crate::core::geom::{GridCoord, Position, Scale};
use crate::core::rng::GameRng;
use crate::input::{dispatch_click, ClickEvent, ClickTarget};
use crate::render::{Drawable, SpriteAtlas, Surface};

use super::square::BingoSquare;

/// Deals each column's numbers by sampling without replacement.
///
/// A shuffled copy of every column's pool is cut down to exactly the
/// count the layout needs, so a deal can neither repeat a number within
/// a column nor loop. Undersized or missing pools are rejected here,
/// before any square exists.
#[derive(Debug)]
struct ColumnDealer {
    // A column rarely holds more than a handful of squares.
    piles: FxHashMap<u8, SmallVec<[i32; 8]>>,
}

impl ColumnDealer {
    fn new(config: &CardConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        if config.square_offsets.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }

        let mut piles = FxHashMap::default();
        // Ascending column order keeps equal seeds producing equal cards
        // for any ordering of the configured offsets.
        for (col, required) in config.column_requirements() {
            let pool = config
                .column_pool(col)
                .ok_or(ConfigError::MissingColumnPool { column: col })?;
            if pool.len() < required {
                return Err(ConfigError::PoolTooSmall {
                    column: col,
                    required,
                    available: pool.len(),
                });
            }

            let mut shuffled = pool.to_vec();
            rng.shuffle(&mut shuffled);
            shuffled.truncate(required);
            piles.insert(col, SmallVec::from_vec(shuffled));
        }

        Ok(Self { piles })
    }

    fn deal(&mut self, col: u8) -> Option<i32> {
        self.piles.get_mut(&col)?.pop()
    }
}

/// A bingo card comprising a number of squares.
///
/// Squares live at the spacing-scaled grid offsets the configuration
/// defines, and within each column their numbers are distinct members
/// of that column's pool. The layout is fixed at construction.
#[derive(Clone, Debug)]
pub struct BingoCard {
    name: String,
    position: Position,
    squares: FxHashMap<GridCoord, BingoSquare>,
}

impl BingoCard {
    /// Build a card at the given pixel origin.
    ///
    /// Walks the configured offsets in order, dealing each square a
    /// number for its column and placing it at
    /// `(spacing x col, spacing x row)` relative to the origin. Squares
    /// are named `"<card> [<col>,<row>]"`. Fails fast on malformed
    /// configuration or an incomplete sprite atlas.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        config: &CardConfig,
        atlas: &SpriteAtlas,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut dealer = ColumnDealer::new(config, rng)?;
        let mut squares = FxHashMap::default();

        for &coord in &config.square_offsets {
            let number = dealer.deal(coord.col).expect("pile sized to the layout");
            let offset = Position::new(
                config.square_spacing * i32::from(coord.col),
                config.square_spacing * i32::from(coord.row),
            );
            let square =
                BingoSquare::new(format!("{name} {coord}"), position, offset, number, atlas)?;
            squares.insert(coord, square);
        }

        debug!(card = %name, squares = squares.len(), "built bingo card");

        Ok(Self {
            name,
            position,
            squares,
        })
    }

    /// The card's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The card's pixel origin.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the square at a grid coordinate.
    #[must_use]
    pub fn square(&self, coord: GridCoord) -> Option<&BingoSquare> {
        self.squares.get(&coord)
    }

    /// Get the square at a grid coordinate, mutably.
    pub fn square_mut(&mut self, coord: GridCoord) -> Option<&mut BingoSquare> {
        self.squares.get_mut(&coord)
    }

    /// Iterate over all squares.
    pub fn squares(&self) -> impl Iterator<Item = &BingoSquare> {
        self.squares.values()
    }

    /// Iterate over all squares, mutably.
    pub fn squares_mut(&mut self) -> impl Iterator<Item = &mut BingoSquare> {
        self.squares.values_mut()
    }

    /// The numbers currently dealt to a column.
    #[must_use]
    pub fn column_numbers(&self, col: u8) -> Vec<i32> {
        self.squares
            .iter()
            .filter(|(coord, _)| coord.col == col)
            .map(|(_, square)| square.number())
            .collect()
    }

    /// Get the number of squares on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Check if the card has no squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Flip the highlight flag on every square carrying `number`.
    ///
    /// Returns how many squares were touched. Hosts call this when a
    /// number is called out (or retracted) to drive the visual cue.
    pub fn set_number_highlight(&mut self, number: i32, highlighted: bool) -> usize {
        let mut touched = 0;
        for square in self.squares.values_mut() {
            if square.number() == number {
                square.is_highlighted = highlighted;
                touched += 1;
            }
        }
        touched
    }

    /// Deliver a click event to the card's squares.
    ///
    /// Exactly the squares whose bounds contain the scaled event
    /// position react; returns how many did (0 or 1, squares never
    /// overlap).
    pub fn process_events(
        &mut self,
        event: &ClickEvent,
        scale: Scale,
        rng: &mut GameRng,
    ) -> usize {
        dispatch_click(
            self.squares.values_mut().map(|s| s as &mut dyn ClickTarget),
            event,
            scale,
            rng,
        )
    }
}

impl Drawable for BingoCard {
    /// Draw every square. Squares don't overlap, so order is free.
    fn draw(&self, surface: &mut dyn Surface) {
        for square in self.squares.values() {
            square.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::square::{HIGHLIGHT_SPRITE, LABEL_SPRITE, MARKER_SPRITE};
    use crate::render::SpriteSpec;

    fn test_atlas() -> SpriteAtlas {
        let mut atlas = SpriteAtlas::new();
        atlas.register(SpriteSpec::new(LABEL_SPRITE, 40, 40));
        atlas.register(SpriteSpec::new(MARKER_SPRITE, 48, 48));
        atlas.register(SpriteSpec::new(HIGHLIGHT_SPRITE, 56, 56));
        atlas
    }

    fn small_config() -> CardConfig {
        CardConfig::new(50)
            .with_grid(3, 3)
            .with_column_pool(0, (1..=5).collect())
            .with_column_pool(1, (6..=10).collect())
            .with_column_pool(2, (11..=15).collect())
    }

    #[test]
    fn test_one_square_per_offset() {
        let mut rng = GameRng::new(42);
        let card = BingoCard::new("test", Position::ORIGIN, &small_config(), &test_atlas(), &mut rng)
            .unwrap();

        assert_eq!(card.len(), 9);
        for col in 0..3 {
            for row in 0..3 {
                assert!(card.square(GridCoord::new(col, row)).is_some());
            }
        }
    }

    #[test]
    fn test_square_positions_and_names() {
        let mut rng = GameRng::new(42);
        let origin = Position::new(200, 100);
        let card = BingoCard::new("main", origin, &small_config(), &test_atlas(), &mut rng).unwrap();

        let square = card.square(GridCoord::new(2, 1)).unwrap();
        assert_eq!(square.position(), Position::new(300, 150));
        assert_eq!(square.name(), "main [2,1]");
    }

    #[test]
    fn test_columns_have_unique_pool_numbers() {
        let mut rng = GameRng::new(7);
        let config = small_config();
        let card = BingoCard::new("test", Position::ORIGIN, &config, &test_atlas(), &mut rng).unwrap();

        for col in 0..3 {
            let mut numbers = card.column_numbers(col);
            let pool = config.column_pool(col).unwrap();
            assert!(numbers.iter().all(|n| pool.contains(n)));

            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), 3, "column {col} repeated a number");
        }
    }

    #[test]
    fn test_same_seed_same_card() {
        let config = small_config();
        let atlas = test_atlas();

        let card1 =
            BingoCard::new("a", Position::ORIGIN, &config, &atlas, &mut GameRng::new(9)).unwrap();
        let card2 =
            BingoCard::new("a", Position::ORIGIN, &config, &atlas, &mut GameRng::new(9)).unwrap();

        for &coord in &config.square_offsets {
            assert_eq!(
                card1.square(coord).unwrap().number(),
                card2.square(coord).unwrap().number()
            );
        }
    }

    #[test]
    fn test_pool_too_small_fails_fast() {
        let mut rng = GameRng::new(42);
        let config = CardConfig::new(50)
            .with_grid(1, 4)
            .with_column_pool(0, vec![1, 2, 3]);

        let err = BingoCard::new("bad", Position::ORIGIN, &config, &test_atlas(), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PoolTooSmall {
                column: 0,
                required: 4,
                available: 3,
            }
        );
    }

    #[test]
    fn test_missing_pool_fails_fast() {
        let mut rng = GameRng::new(42);
        let config = CardConfig::new(50).with_grid(2, 1).with_column_pool(0, vec![1]);

        let err = BingoCard::new("bad", Position::ORIGIN, &config, &test_atlas(), &mut rng)
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingColumnPool { column: 1 });
    }

    #[test]
    fn test_empty_layout_fails_fast() {
        let mut rng = GameRng::new(42);
        let config = CardConfig::new(50);

        let err = BingoCard::new("bad", Position::ORIGIN, &config, &test_atlas(), &mut rng)
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyLayout);
    }

    #[test]
    fn test_exhausting_pool_is_allowed() {
        // Pool size exactly equals the squares in the column.
        let mut rng = GameRng::new(42);
        let config = CardConfig::new(50)
            .with_grid(1, 5)
            .with_column_pool(0, vec![1, 2, 3, 4, 5]);

        let card = BingoCard::new("full", Position::ORIGIN, &config, &test_atlas(), &mut rng)
            .unwrap();
        let mut numbers = card.column_numbers(0);
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_set_number_highlight() {
        let mut rng = GameRng::new(42);
        let mut card =
            BingoCard::new("test", Position::ORIGIN, &small_config(), &test_atlas(), &mut rng)
                .unwrap();

        let target = card.square(GridCoord::new(1, 1)).unwrap().number();
        assert_eq!(card.set_number_highlight(target, true), 1);
        assert!(card.square(GridCoord::new(1, 1)).unwrap().is_highlighted);

        // A number no square carries touches nothing.
        assert_eq!(card.set_number_highlight(-1, true), 0);

        assert_eq!(card.set_number_highlight(target, false), 1);
        assert!(!card.square(GridCoord::new(1, 1)).unwrap().is_highlighted);
    }

    #[test]
    fn test_host_drives_highlight_directly() {
        let mut rng = GameRng::new(42);
        let mut card =
            BingoCard::new("test", Position::ORIGIN, &small_config(), &test_atlas(), &mut rng)
                .unwrap();

        let coord = GridCoord::new(0, 2);
        card.square_mut(coord).unwrap().is_highlighted = true;
        assert!(card.square(coord).unwrap().is_highlighted);
        assert_eq!(card.squares().filter(|s| s.is_highlighted).count(), 1);

        for square in card.squares_mut() {
            square.is_highlighted = false;
        }
        assert!(card.squares().all(|s| !s.is_highlighted));
    }

    #[test]
    fn test_click_hits_exactly_one_square() {
        let mut rng = GameRng::new(42);
        let mut card =
            BingoCard::new("test", Position::ORIGIN, &small_config(), &test_atlas(), &mut rng)
                .unwrap();

        // Click the center of square (1, 1): spacing 50 puts it at (50, 50).
        let reacted = card.process_events(&ClickEvent::at(50, 50), Scale::IDENTITY, &mut rng);
        assert_eq!(reacted, 1);
        assert!(card.square(GridCoord::new(1, 1)).unwrap().is_called);
        assert!(!card.square(GridCoord::new(0, 0)).unwrap().is_called);
    }

    #[test]
    fn test_click_outside_changes_nothing() {
        let mut rng = GameRng::new(42);
        let mut card =
            BingoCard::new("test", Position::ORIGIN, &small_config(), &test_atlas(), &mut rng)
                .unwrap();

        let reacted = card.process_events(&ClickEvent::at(5000, 5000), Scale::IDENTITY, &mut rng);
        assert_eq!(reacted, 0);
        assert!(card.squares().all(|s| !s.is_called));
    }

    #[test]
    fn test_dealer_deals_whole_pile() {
        let mut rng = GameRng::new(1);
        let config = small_config();
        let mut dealer = ColumnDealer::new(&config, &mut rng).unwrap();

        for col in 0..3 {
            for _ in 0..3 {
                assert!(dealer.deal(col).is_some());
            }
            assert_eq!(dealer.deal(col), None);
        }
        assert_eq!(dealer.deal(9), None);
    }
}
