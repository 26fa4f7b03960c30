//! Pan/zoom transform between screen space and world space.
//!
//! `screen = world * scale + offset`. Screen points are relative to the top
//! left corner of the drawing surface.

use eframe::egui::{Pos2, Vec2};

use crate::config::LayoutConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    scale: f32,
    offset: Vec2,
    min_scale: f32,
    max_scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for Viewport {
    fn from(config: &LayoutConfig) -> Self {
        Self::new(config.min_scale, config.max_scale)
    }
}

impl Viewport {
    /// Bounds that are not positive and finite fall back to the defaults; swapped bounds are reordered.
    pub fn new(min_scale: f32, max_scale: f32) -> Self {
        let defaults = LayoutConfig::default();
        let usable = |bound: f32, fallback: f32| {
            if bound.is_finite() && bound > 0.0 {
                bound
            } else {
                fallback
            }
        };
        let low = usable(min_scale, defaults.min_scale);
        let high = usable(max_scale, defaults.max_scale);

        let mut viewport = Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            min_scale: low.min(high),
            max_scale: low.max(high),
        };
        viewport.scale = viewport.home_scale();
        viewport
    }

    /// Scale after a reset: 1, or the nearest bound when 1 is out of range.
    fn home_scale(&self) -> f32 {
        1.0f32.clamp(self.min_scale, self.max_scale)
    }

    pub fn scale_bounds(&self) -> (f32, f32) {
        (self.min_scale, self.max_scale)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn screen_to_world(&self, screen: Pos2) -> Vec2 {
        (screen.to_vec2() - self.offset) / self.scale
    }

    pub fn world_to_screen(&self, world: Vec2) -> Pos2 {
        (world * self.scale + self.offset).to_pos2()
    }

    /// Multiplies the scale, keeping the surface origin fixed.
    pub fn zoom_by(&mut self, factor: f32) {
        self.set_scale(self.scale * factor);
        tracing::debug!(scale = self.scale, "zoom");
    }

    /// Multiplies the scale, keeping the world point under `anchor` fixed.
    pub fn zoom_at(&mut self, factor: f32, anchor: Pos2) {
        let world_before = self.screen_to_world(anchor);
        self.set_scale(self.scale * factor);
        self.offset = anchor.to_vec2() - world_before * self.scale;
    }

    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.offset += screen_delta;
    }

    /// Moves the offset so `world` lands in the middle of a surface of `surface_size`.
    pub fn center_on(&mut self, world: Vec2, surface_size: Vec2) {
        self.offset = surface_size * 0.5 - world * self.scale;
    }

    pub fn reset(&mut self) {
        self.scale = self.home_scale();
        self.offset = Vec2::ZERO;
        tracing::debug!("view reset");
    }
}
