use glam::{Mat4, Vec3};

/// Something advanced once per frame by elapsed wall time.
pub trait Tickable {
    fn tick(&mut self, elapsed_seconds: f32);
}

/// Something that emits voxel instances to a rendering collaborator.
pub trait Drawable {
    fn draw(&self, sink: &mut dyn TransformSink);
}

/// Receiver of per-voxel draw data, in emission order.
pub trait TransformSink {
    fn submit(&mut self, instance: VoxelInstance);
}

impl TransformSink for Vec<VoxelInstance> {
    fn submit(&mut self, instance: VoxelInstance) {
        self.push(instance);
    }
}

/// Snapshot of one voxel as the renderer needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelInstance {
    /// Accumulated rotation + translation since the voxel left rest.
    pub transform: Mat4,
    /// Origin the cube was built around.
    pub home: Vec3,
    /// Half-extent.
    pub size: f32,
    pub moving: bool,
}

impl VoxelInstance {
    /// Model matrix for a unit cube centered at zero (extent ±0.5).
    pub fn model_matrix(&self) -> Mat4 {
        self.transform
            * Mat4::from_translation(self.home)
            * Mat4::from_scale(Vec3::splat(self.size * 2.0))
    }
}
