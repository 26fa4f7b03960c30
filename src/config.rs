//! Layout and view tunables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Constants for the settle pass, the viewport and the renderer.
///
/// The force constants are load-bearing for convergence: changing
/// `position_damping` or `velocity_damping` changes how fast (and whether)
/// the layout comes to rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Length of the settle pass run when a graph is built.
    pub iterations: usize,
    pub repulsion: f32,
    /// Scale applied to the repulsive force before it reaches velocity.
    pub repulsion_step: f32,
    pub rest_length: f32,
    pub spring_constant: f32,
    /// Fraction of velocity applied to position each step.
    pub position_damping: f32,
    /// Multiplier applied to velocity after each step.
    pub velocity_damping: f32,
    /// Floor for pairwise distances.
    pub min_distance: f32,
    pub node_radius: f32,
    pub pick_radius: f32,
    pub label_max_chars: usize,
    pub label_font_size: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Width and height of the box initial positions are scattered in.
    pub jitter: [f32; 2],
    pub pan_on_empty_drag: bool,
    /// Settle iterations advanced per frame; 0 settles before the first paint.
    pub steps_per_frame: usize,
    pub resettle_iterations: usize,
    pub resettle_after_drag: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            repulsion: 5000.0,
            repulsion_step: 0.1,
            rest_length: 100.0,
            spring_constant: 0.01,
            position_damping: 0.5,
            velocity_damping: 0.8,
            min_distance: 1.0,
            node_radius: 20.0,
            pick_radius: 20.0,
            label_max_chars: 8,
            label_font_size: 10.0,
            zoom_in_factor: 1.2,
            zoom_out_factor: 0.8,
            min_scale: 0.05,
            max_scale: 6.0,
            jitter: [300.0, 200.0],
            pan_on_empty_drag: true,
            steps_per_frame: 0,
            resettle_iterations: 30,
            resettle_after_drag: false,
        }
    }
}

impl LayoutConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("repulsion", self.repulsion),
            ("repulsion_step", self.repulsion_step),
            ("rest_length", self.rest_length),
            ("spring_constant", self.spring_constant),
            ("position_damping", self.position_damping),
            ("node_radius", self.node_radius),
            ("pick_radius", self.pick_radius),
            ("label_font_size", self.label_font_size),
            ("jitter[0]", self.jitter[0]),
            ("jitter[1]", self.jitter[1]),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!("{name} must be finite")));
            }
        }

        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(ConfigError::Validation(
                "min_distance must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.velocity_damping) {
            return Err(ConfigError::Validation(
                "velocity_damping must be within 0..=1".to_string(),
            ));
        }

        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(ConfigError::Validation(
                "min_scale must be positive".to_string(),
            ));
        }

        if !self.max_scale.is_finite() || self.min_scale > self.max_scale {
            return Err(ConfigError::Validation(
                "max_scale must be finite and not below min_scale".to_string(),
            ));
        }

        for (name, factor) in [
            ("zoom_in_factor", self.zoom_in_factor),
            ("zoom_out_factor", self.zoom_out_factor),
        ] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(ConfigError::Validation(format!("{name} must be positive")));
            }
        }

        Ok(())
    }
}
