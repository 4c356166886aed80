//! Rendering seam toward the host.
//!
//! The engine never touches a drawing backend. It describes what to
//! draw as [`SpriteInstance`] data and hands each one to the single
//! primitive the host supplies: [`Surface::draw_sprite`]. Anything in
//! the engine that can be drawn implements [`Drawable`]; group types
//! implement it by delegating to their members.

pub mod sprite;

pub use sprite::{SpriteAtlas, SpriteInstance, SpriteSpec};

/// Host-supplied rendering sink.
///
/// ## Implementation Notes
///
/// - Resolve `sprite.name` against your texture store; the engine only
///   knows atlas names and pixel metrics.
/// - Draw at `sprite.position` (the center), rotated by
///   `sprite.rotation_degrees`, rendering `sprite.text` over the image
///   when present.
pub trait Surface {
    /// Draw one sprite at its fixed position.
    fn draw_sprite(&mut self, sprite: &SpriteInstance);
}

/// Anything the engine can draw onto a host surface.
pub trait Drawable {
    /// Draw onto the surface. Never mutates engine state.
    fn draw(&self, surface: &mut dyn Surface);
}
