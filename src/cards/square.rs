//! A single numbered, clickable cell of a bingo card.

use tracing::trace;

use crate::core::error::ConfigError;
use crate::core::geom::{Position, Rect};
use crate::core::rng::GameRng;
use crate::input::ClickTarget;
use crate::render::{Drawable, SpriteAtlas, SpriteInstance, Surface};

/// Atlas name of the number label.
pub const LABEL_SPRITE: &str = "square-number";

/// Atlas name of the marker drawn over called squares.
pub const MARKER_SPRITE: &str = "bingo-marker";

/// Atlas name of the highlight drawn behind highlighted squares.
pub const HIGHLIGHT_SPRITE: &str = "bingo-highlight";

/// A square on a bingo card.
///
/// The number and position are fixed at construction; only the two
/// state flags mutate. `is_called` is the player's mark, toggled by
/// clicking the number. `is_highlighted` is driven externally, e.g. by
/// the host when the square's number is called out.
#[derive(Clone, Debug)]
pub struct BingoSquare {
    name: String,
    position: Position,
    number: i32,

    /// Player has marked this square.
    pub is_called: bool,

    /// Externally driven visual emphasis, independent of `is_called`.
    pub is_highlighted: bool,

    label: SpriteInstance,
    marker: SpriteInstance,
    highlighter: SpriteInstance,
}

impl BingoSquare {
    /// Create a square at `card_origin + offset` showing `number`.
    ///
    /// Resolves the label, marker, and highlight sprites through the
    /// atlas; an unregistered name is a configuration error. The click
    /// region is the label's bounding rect and never moves.
    pub fn new(
        name: impl Into<String>,
        card_origin: Position,
        offset: Position,
        number: i32,
        atlas: &SpriteAtlas,
    ) -> Result<Self, ConfigError> {
        let position = card_origin + offset;

        Ok(Self {
            name: name.into(),
            position,
            number,
            is_called: false,
            is_highlighted: false,
            label: atlas.label(LABEL_SPRITE, position, number.to_string())?,
            marker: atlas.instance(MARKER_SPRITE, position)?,
            highlighter: atlas.instance(HIGHLIGHT_SPRITE, position)?,
        })
    }

    /// The square's name, unique within its card.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute pixel position of the square's center.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The number printed on the square.
    #[must_use]
    pub fn number(&self) -> i32 {
        self.number
    }

    /// The marker sprite, rotated anew on every click.
    #[must_use]
    pub fn marker(&self) -> &SpriteInstance {
        &self.marker
    }

    /// The number was clicked on.
    ///
    /// Spins the marker to a fresh random angle so repeated marks don't
    /// look identical, then toggles `is_called`. Two clicks restore the
    /// original call state.
    pub fn handle_click(&mut self, rng: &mut GameRng) {
        self.marker.rotate_to(rng.gen_degrees());
        self.is_called = !self.is_called;
        trace!(square = %self.name, is_called = self.is_called, "square clicked");
    }
}

impl Drawable for BingoSquare {
    /// Draw back to front: highlight behind the number, marker on top.
    fn draw(&self, surface: &mut dyn Surface) {
        if self.is_highlighted {
            self.highlighter.draw(surface);
        }
        self.label.draw(surface);
        if self.is_called {
            self.marker.draw(surface);
        }
    }
}

impl ClickTarget for BingoSquare {
    fn bounds(&self) -> Rect {
        self.label.bounds
    }

    fn on_click(&mut self, rng: &mut GameRng) {
        self.handle_click(rng);
    }
}
