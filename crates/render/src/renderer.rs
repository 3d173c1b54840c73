use glam::Vec3;
use voxelfield_kernel::{Drawable, VoxelField, VoxelInstance};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(7.0, 7.0, 40.0),
            target: Vec3::splat(7.0),
            fov_degrees: 60.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given field and view.
    fn render(&self, field: &VoxelField, view: &RenderView) -> Self::Output;
}

/// Text renderer for the CLI and logs.
///
/// Lists each drawn voxel's current center; moving voxels are marked `*`.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Only list moving voxels.
    pub moving_only: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moving_only() -> Self {
        Self { moving_only: true }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, field: &VoxelField, view: &RenderView) -> String {
        let _span = tracing::debug_span!("debug_text_render").entered();
        let mut instances: Vec<VoxelInstance> = Vec::with_capacity(field.chunk().len());
        field.draw(&mut instances);

        let moving = instances.iter().filter(|i| i.moving).count();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Voxel Field (frame={}, picks={}) ===\n",
            field.frame(),
            field.pick_count()
        ));
        out.push_str(&format!("Voxels: {} (moving: {moving})\n", instances.len()));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        for (index, inst) in instances.iter().enumerate() {
            if self.moving_only && !inst.moving {
                continue;
            }
            let p = inst.transform.transform_point3(inst.home);
            let mark = if inst.moving { '*' } else { ' ' };
            out.push_str(&format!(
                "  {mark}[{index:>4}] pos=({:.2}, {:.2}, {:.2})\n",
                p.x, p.y, p.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;
    use voxelfield_common::FieldConfig;
    use voxelfield_kernel::{NoJitter, Tickable};

    fn small_field() -> VoxelField {
        let config = FieldConfig::with_grid(UVec3::new(2, 1, 1), 2.0);
        VoxelField::with_jitter(config, Box::new(NoJitter)).unwrap()
    }

    #[test]
    fn debug_renderer_lists_every_voxel() {
        let field = small_field();
        let output = DebugTextRenderer::new().render(&field, &RenderView::default());

        assert!(output.contains("frame=0"));
        assert!(output.contains("Voxels: 2 (moving: 0)"));
        assert_eq!(output.matches("pos=").count(), 2);
    }

    #[test]
    fn moving_only_filters_resting_voxels() {
        let mut field = small_field();
        field.chunk_mut().broadcast_impulse(Vec3::new(-3.0, 0.0, 0.0));
        field.tick(1.0 / 60.0);

        let output = DebugTextRenderer::moving_only().render(&field, &RenderView::default());
        assert!(output.contains("Voxels: 2 (moving: 1)"));
        assert_eq!(output.matches("pos=").count(), 1);
        assert!(output.contains("*[   0]"));
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 60.0);
        assert_eq!(view.target, Vec3::splat(7.0));
    }
}
