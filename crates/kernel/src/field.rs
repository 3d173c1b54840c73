use glam::{UVec3, Vec3};
use voxelfield_common::{ConfigError, FieldConfig};

use crate::chunk::Chunk;
use crate::component::{Drawable, Tickable, TransformSink};
use crate::jitter::{JitterSource, SeededJitter};
use crate::pick::{CameraState, Viewport};
use crate::voxel::Voxel;

/// What a pick that hit a voxel did to the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickOutcome {
    /// World-space point where the ray met the nearest voxel.
    pub impact: Vec3,
    /// Voxels that accepted the resulting impulse.
    pub accepted: usize,
}

/// The voxel grid as the host sees it: initialize, tick, draw, pick.
///
/// Owns a single chunk holding every voxel. Voxels are created once per
/// initialization; nothing is added or removed in between.
#[derive(Debug)]
pub struct VoxelField {
    config: FieldConfig,
    chunk: Chunk,
    frame: u64,
    pick_count: u64,
    last_impact: Option<Vec3>,
}

impl VoxelField {
    /// Build and populate a field with entropy-seeded jitter.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        Self::with_jitter(config, Box::new(SeededJitter::from_entropy()))
    }

    /// Build and populate a field that draws impulse jitter from `jitter`.
    pub fn with_jitter(
        config: FieldConfig,
        jitter: Box<dyn JitterSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            config,
            chunk: Chunk::with_jitter(jitter),
            frame: 0,
            pick_count: 0,
            last_impact: None,
        };
        field.initialize();
        Ok(field)
    }

    /// Lay out the voxel grid, replacing any existing members.
    pub fn initialize(&mut self) {
        let _span = tracing::info_span!("field_initialize").entered();
        self.chunk.clear();
        let dims = self.config.dimensions;
        for x in 0..dims.x {
            for y in 0..dims.y {
                for z in 0..dims.z {
                    let origin = self.config.grid_origin(UVec3::new(x, y, z));
                    self.chunk.add_voxel(Voxel::new(
                        origin,
                        self.config.voxel_size,
                        self.config.motion,
                    ));
                }
            }
        }
        tracing::debug!(voxels = self.chunk.len(), "voxel grid built");
    }

    /// Put every voxel back at rest in its grid slot.
    pub fn reset(&mut self) {
        self.initialize();
        self.frame = 0;
        self.last_impact = None;
        tracing::info!("field reset");
    }

    /// Handle a pointer click at `(x, y)` pixels.
    ///
    /// On a hit, every voxel receives an impulse from the impact point. A miss
    /// changes nothing.
    pub fn on_pick(
        &mut self,
        x: f32,
        y: f32,
        camera: &CameraState,
        viewport: Viewport,
    ) -> Option<PickOutcome> {
        let ray = viewport.pick_ray(x, y, camera);
        let Some(distance) = self.chunk.find_closest_voxel(&ray) else {
            tracing::debug!(x, y, "pick missed");
            return None;
        };
        let impact = ray.at(distance);
        let accepted = self.chunk.broadcast_impulse(impact);
        self.pick_count += 1;
        self.last_impact = Some(impact);
        tracing::debug!(distance, accepted, ?impact, "pick hit");
        Some(PickOutcome { impact, accepted })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    pub fn chunk_mut(&mut self) -> &mut Chunk {
        &mut self.chunk
    }

    /// Frames ticked since the last initialization.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Picks that hit a voxel, over the field's lifetime.
    pub fn pick_count(&self) -> u64 {
        self.pick_count
    }

    pub fn last_impact(&self) -> Option<Vec3> {
        self.last_impact
    }
}

impl Tickable for VoxelField {
    fn tick(&mut self, elapsed_seconds: f32) {
        let _span = tracing::debug_span!("field_tick", frame = self.frame).entered();
        self.chunk.tick_all(elapsed_seconds);
        self.frame += 1;
    }
}

impl Drawable for VoxelField {
    fn draw(&self, sink: &mut dyn TransformSink) {
        self.chunk.draw(sink);
    }
}
