//! Layered sprite components for the character rig.
//!
//! The character is composed of a body layer and a weapon layer that
//! animate in lockstep; projectiles and HUD elements render on their
//! own layers.

use bevy::prelude::*;

/// Marker component for the root of a layered sprite entity.
#[derive(Component, Debug)]
pub struct LayeredSprite {
    /// Whether the sprite is facing right (false = facing left).
    pub facing_right: bool,
}

impl Default for LayeredSprite {
    fn default() -> Self {
        Self { facing_right: true }
    }
}

/// Defines the render order for sprite layers.
/// Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpriteLayer {
    /// Trench backdrop elements.
    Backdrop = 0,
    /// Character body (base layer).
    Body = 10,
    /// Weapon layer.
    Weapon = 20,
    /// Projectiles and muzzle effects.
    Effect = 30,
    /// HUD elements (ammo counter).
    Hud = 40,
}

impl SpriteLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z_index(&self) -> f32 {
        (*self as i32) as f32 * 0.01
    }
}

/// Component for body layer sprites.
#[derive(Component, Debug, Default)]
pub struct BodyLayer;

/// Component for weapon layer sprites.
#[derive(Component, Debug, Default)]
pub struct WeaponLayer;

/// The clip and frame a layer is currently showing.
///
/// Rendering samples this to pick a texture; a `None` clip means the
/// layer shows nothing this frame.
#[derive(Component, Debug, Default)]
pub struct LayerClip {
    pub clip: Option<String>,
    pub frame: u32,
}

impl LayerClip {
    pub fn set(&mut self, clip: Option<String>, frame: u32) {
        self.clip = clip;
        self.frame = frame;
    }

    /// Sprite key for the current frame, e.g. "lasgun_stand_idle_3".
    pub fn sprite_key(&self) -> Option<String> {
        self.clip
            .as_ref()
            .map(|clip| format!("{}_{}", clip, self.frame + 1))
    }
}

/// System to sync layer facing direction with the rig root.
pub fn sync_layer_facing(
    parent_query: Query<(&LayeredSprite, &Children), Changed<LayeredSprite>>,
    mut child_query: Query<&mut Sprite>,
) {
    for (layered_sprite, children) in &parent_query {
        for child in children.iter() {
            if let Ok(mut sprite) = child_query.get_mut(child) {
                sprite.flip_x = !layered_sprite.facing_right;
            }
        }
    }
}
