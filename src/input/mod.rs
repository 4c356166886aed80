//! Input seam toward the host.
//!
//! The host's event loop turns its native mouse events into
//! [`ClickEvent`]s and feeds them down the card hierarchy. Hit-testing
//! is a plain point-in-rect check against each target's fixed bounds;
//! with the layout spacing the engine produces, at most one target
//! contains any given point.

use crate::core::geom::{Position, Rect, Scale};
use crate::core::rng::GameRng;

/// A click reported by the host, in display pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    pub position: Position,
}

impl ClickEvent {
    /// Create a click event at a position.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }

    /// Create a click event from raw pixel coordinates.
    #[must_use]
    pub const fn at(x: i32, y: i32) -> Self {
        Self::new(Position::new(x, y))
    }
}

/// A clickable region with a reaction.
///
/// ## Implementation Notes
///
/// - `bounds` must be fixed after construction; the dispatcher assumes
///   regions do not move.
/// - `on_click` receives the shared RNG because reactions may want
///   cosmetic randomness (marker rotation).
pub trait ClickTarget {
    /// The clickable region, fixed at construction.
    fn bounds(&self) -> Rect;

    /// React to a click inside the region.
    fn on_click(&mut self, rng: &mut GameRng);

    /// Hit-test an event and click on containment.
    ///
    /// The event position is scaled before the test, mapping window
    /// coordinates of a resized display back onto the layout. Returns
    /// whether this target reacted.
    fn handle_event(&mut self, event: &ClickEvent, scale: Scale, rng: &mut GameRng) -> bool {
        if self.bounds().contains(event.position.scaled(scale)) {
            self.on_click(rng);
            true
        } else {
            false
        }
    }
}

/// Deliver one event to every target in a group.
///
/// Every target whose bounds contain the scaled position reacts.
/// Returns how many reacted: 0 or 1 for non-overlapping layouts.
pub fn dispatch_click<'a, I>(
    targets: I,
    event: &ClickEvent,
    scale: Scale,
    rng: &mut GameRng,
) -> usize
where
    I: IntoIterator<Item = &'a mut dyn ClickTarget>,
{
    let mut reacted = 0;
    for target in targets {
        if target.handle_event(event, scale, rng) {
            reacted += 1;
        }
    }
    reacted
}
