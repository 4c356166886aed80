//! An ordered set of bingo cards positioned together.

use tracing::debug;

use crate::core::config::CardConfig;
use crate::core::error::ConfigError;
use crate::core::geom::{Position, Scale};
use crate::core::rng::GameRng;
use crate::input::ClickEvent;
use crate::render::{Drawable, SpriteAtlas, Surface};

use super::card::BingoCard;

/// A set of bingo cards.
///
/// Cards are built in offsets order and named `"<collection>(<n>)"`
/// with a 1-based index. Each card deals from a fresh pile, so numbers
/// are independent across cards: duplicates between cards are normal,
/// exactly as with physical cards.
#[derive(Clone, Debug)]
pub struct CardCollection {
    name: String,
    position: Position,
    cards: Vec<BingoCard>,
}

impl CardCollection {
    /// Build one card per offset, positioned at `position + offset`.
    ///
    /// Offsets with adequate spacing keep card click regions disjoint;
    /// that is the caller's layout choice and is not validated here.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        offsets: &[Position],
        config: &CardConfig,
        atlas: &SpriteAtlas,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut cards = Vec::with_capacity(offsets.len());

        for (index, &offset) in offsets.iter().enumerate() {
            cards.push(BingoCard::new(
                format!("{}({})", name, index + 1),
                position + offset,
                config,
                atlas,
                rng,
            )?);
        }

        debug!(collection = %name, cards = cards.len(), "built card collection");

        Ok(Self {
            name,
            position,
            cards,
        })
    }

    /// The collection's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The collection's pixel origin.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get a card by construction index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&BingoCard> {
        self.cards.get(index)
    }

    /// Get a card by construction index, mutably.
    pub fn card_mut(&mut self, index: usize) -> Option<&mut BingoCard> {
        self.cards.get_mut(index)
    }

    /// Iterate over the cards in construction order.
    pub fn cards(&self) -> impl Iterator<Item = &BingoCard> {
        self.cards.iter()
    }

    /// Iterate over the cards in construction order, mutably.
    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut BingoCard> {
        self.cards.iter_mut()
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Flip the highlight flag on every square carrying `number`,
    /// across all cards. Returns how many squares were touched.
    pub fn set_number_highlight(&mut self, number: i32, highlighted: bool) -> usize {
        self.cards
            .iter_mut()
            .map(|card| card.set_number_highlight(number, highlighted))
            .sum()
    }

    /// Deliver a click event to every card.
    ///
    /// Dispatch is independent per card; with non-overlapping layouts a
    /// click is attributed to at most one square across the whole
    /// collection. Returns how many squares reacted.
    pub fn process_events(
        &mut self,
        event: &ClickEvent,
        scale: Scale,
        rng: &mut GameRng,
    ) -> usize {
        self.cards
            .iter_mut()
            .map(|card| card.process_events(event, scale, rng))
            .sum()
    }
}

impl Drawable for CardCollection {
    /// Draw the cards in construction order.
    fn draw(&self, surface: &mut dyn Surface) {
        for card in &self.cards {
            card.draw(surface);
        }
    }
}
