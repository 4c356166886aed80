//! Sprite metrics and the name-to-sprite atlas.
//!
//! The `SpriteAtlas` stores the pixel metrics of every drawable the
//! host has loaded. Squares resolve their label, marker, and highlight
//! sprites through it at construction; an unregistered name is a
//! configuration error, surfaced immediately.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::geom::{Position, Rect};
use crate::render::{Drawable, Surface};

/// Pixel metrics for a named sprite the host has loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSpec {
    /// Atlas key, e.g. `"bingo-marker"`.
    pub name: String,

    pub width: i32,
    pub height: i32,
}

impl SpriteSpec {
    /// Create a sprite spec.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// One placed sprite: everything the host needs to draw it.
///
/// Position and bounds are fixed at creation; only the rotation
/// mutates (marker sprites re-randomize it on every click).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteInstance {
    /// Atlas key the host resolves to a texture.
    pub name: String,

    /// Center of the sprite in pixel coordinates.
    pub position: Position,

    /// Current rotation in degrees.
    pub rotation_degrees: f32,

    /// Text rendered over the image, when present (number labels).
    pub text: Option<String>,

    /// Axis-aligned bounds, derived from position and atlas metrics.
    pub bounds: Rect,
}

impl SpriteInstance {
    /// Set the rotation in degrees.
    pub fn rotate_to(&mut self, degrees: f32) {
        self.rotation_degrees = degrees;
    }
}

impl Drawable for SpriteInstance {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(self);
    }
}

/// Registry of sprite metrics, keyed by name.
///
/// Populated by the host after loading its textures, then borrowed by
/// square construction.
///
/// ## Example
///
/// ```
/// use rust_bingo::core::Position;
/// use rust_bingo::render::{SpriteAtlas, SpriteSpec};
///
/// let mut atlas = SpriteAtlas::new();
/// atlas.register(SpriteSpec::new("bingo-marker", 48, 48));
///
/// let marker = atlas.instance("bingo-marker", Position::new(100, 100)).unwrap();
/// assert_eq!(marker.bounds.width, 48);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpriteAtlas {
    sprites: FxHashMap<String, SpriteSpec>,
}

impl SpriteAtlas {
    /// Create a new empty atlas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sprite's metrics.
    ///
    /// Panics if a sprite with the same name already exists.
    pub fn register(&mut self, spec: SpriteSpec) {
        if self.sprites.contains_key(&spec.name) {
            panic!("Sprite `{}` already registered", spec.name);
        }
        self.sprites.insert(spec.name.clone(), spec);
    }

    /// Get a sprite's metrics by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpriteSpec> {
        self.sprites.get(name)
    }

    /// Check if a sprite name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    /// Place an image sprite centered at a position.
    pub fn instance(&self, name: &str, position: Position) -> Result<SpriteInstance, ConfigError> {
        let spec = self.get(name).ok_or_else(|| ConfigError::UnknownSprite {
            name: name.to_string(),
        })?;

        Ok(SpriteInstance {
            name: spec.name.clone(),
            position,
            rotation_degrees: 0.0,
            text: None,
            bounds: Rect::centered_at(position, spec.width, spec.height),
        })
    }

    /// Place a labeled sprite centered at a position.
    pub fn label(
        &self,
        name: &str,
        position: Position,
        text: impl Into<String>,
    ) -> Result<SpriteInstance, ConfigError> {
        let mut sprite = self.instance(name, position)?;
        sprite.text = Some(text.into());
        Ok(sprite)
    }

    /// Get the number of registered sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Check if the atlas is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Iterate over all registered sprite specs.
    pub fn iter(&self) -> impl Iterator<Item = &SpriteSpec> {
        self.sprites.values()
    }
}
