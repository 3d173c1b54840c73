use std::path::Path;

use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Errors from loading or validating a field configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field dimensions must be non-zero on every axis, got {0:?}")]
    EmptyDimensions(UVec3),
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("decay factor must lie strictly between 0 and 1, got {0}")]
    DecayOutOfRange(f32),
    #[error("jitter range must be non-negative and finite, got {0}")]
    InvalidJitter(f32),
}

/// Constants of the stylised motion model.
///
/// Velocity and spin shrink by `decay_factor` (spin by its cube) each tick while
/// the gravity accumulator grows by `1 / decay_factor` until its length reaches
/// `max_fall`. This is not physical integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Multiplier applied to the impulse displacement.
    pub scale_factor: f32,
    /// Multiplier turning elapsed seconds into simulation time.
    pub time_factor: f32,
    pub decay_factor: f32,
    /// Impulses whose displacement length reaches this value are ignored.
    pub impulse_threshold: f32,
    /// Per-axis jitter is drawn from `[-jitter_range, jitter_range]`.
    pub jitter_range: f32,
    /// Initial gravity accumulator set when an impulse is accepted.
    pub gravity: Vec3,
    /// Per-axis rotation (radians per tick) a voxel starts tumbling with.
    pub initial_spin: Vec3,
    /// Length at which the gravity accumulator stops growing.
    pub max_fall: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            time_factor: 1.0,
            decay_factor: 0.95,
            impulse_threshold: 5.0,
            jitter_range: 0.5,
            gravity: Vec3::new(0.0, -0.5, 0.0),
            initial_spin: Vec3::new(0.05, 0.08, 0.03),
            max_fall: 50.0,
        }
    }
}

impl MotionParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(ConfigError::DecayOutOfRange(self.decay_factor));
        }
        positive("scale_factor", self.scale_factor)?;
        positive("time_factor", self.time_factor)?;
        positive("impulse_threshold", self.impulse_threshold)?;
        positive("max_fall", self.max_fall)?;
        if !(self.jitter_range >= 0.0 && self.jitter_range.is_finite()) {
            return Err(ConfigError::InvalidJitter(self.jitter_range));
        }
        Ok(())
    }
}

/// Layout of the voxel grid built at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Voxel count along each axis.
    pub dimensions: UVec3,
    /// Distance between neighbouring voxel origins.
    pub spacing: f32,
    /// Half-extent of every cube.
    pub voxel_size: f32,
    /// Extra offset added per grid step, so rows drift slightly apart.
    pub offset_step: f32,
    pub motion: MotionParams,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dimensions: UVec3::splat(8),
            spacing: 2.0,
            voxel_size: 1.0,
            offset_step: 0.025,
            motion: MotionParams::default(),
        }
    }
}

impl FieldConfig {
    /// Configuration for a field of `dimensions` voxels `spacing` apart,
    /// everything else at defaults.
    pub fn with_grid(dimensions: UVec3, spacing: f32) -> Self {
        Self {
            dimensions,
            spacing,
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions.min_element() == 0 {
            return Err(ConfigError::EmptyDimensions(self.dimensions));
        }
        positive("spacing", self.spacing)?;
        positive("voxel_size", self.voxel_size)?;
        if !self.offset_step.is_finite() {
            return Err(ConfigError::NotPositive {
                name: "offset_step",
                value: self.offset_step,
            });
        }
        self.motion.validate()
    }

    /// Total number of voxels the grid holds.
    pub fn voxel_count(&self) -> usize {
        let d = self.dimensions;
        d.x as usize * d.y as usize * d.z as usize
    }

    /// Rest origin of the voxel at grid index `(i, j, k)`.
    pub fn grid_origin(&self, index: UVec3) -> Vec3 {
        index.as_vec3() * (self.spacing + self.offset_step)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
