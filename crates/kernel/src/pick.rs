//! Screen-space pointer to world-space ray.

use glam::{Mat4, Vec3};
use voxelfield_common::Ray;

/// Camera matrices owned by the host; read-only here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub view: Mat4,
    pub projection: Mat4,
    pub inverse_view: Mat4,
}

impl CameraState {
    /// Build from view and projection, deriving the inverse view.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view,
            projection,
            inverse_view: view.inverse(),
        }
    }

    /// Camera eye in world space.
    pub fn eye(&self) -> Vec3 {
        self.inverse_view.transform_point3(Vec3::ZERO)
    }
}

/// Screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Unproject pointer `(x, y)` (pixels, origin top-left) into a world ray.
    ///
    /// Zero-sized viewports are treated as one pixel wide/high.
    pub fn pick_ray(&self, x: f32, y: f32, camera: &CameraState) -> Ray {
        let width = self.width.max(1) as f32;
        let height = self.height.max(1) as f32;
        let proj = camera.projection;

        let dx = ((2.0 * x) / width - 1.0) / proj.x_axis.x;
        let dy = ((-2.0 * y) / height + 1.0) / proj.y_axis.y;

        let origin = camera.inverse_view.transform_point3(Vec3::ZERO);
        let direction = camera
            .inverse_view
            .transform_vector3(Vec3::new(dx, dy, -1.0));
        Ray::new(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(eye: Vec3, target: Vec3) -> CameraState {
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let projection = Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
        CameraState::new(view, projection)
    }

    #[test]
    fn center_pixel_looks_down_view_axis() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let vp = Viewport::new(1280, 720);
        let ray = vp.pick_ray(640.0, 360.0, &cam);
        assert!((ray.origin - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn eye_matches_inverse_view_origin() {
        let cam = camera_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO);
        assert!((cam.eye() - Vec3::new(3.0, 4.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn left_and_top_edges_bend_ray() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let vp = Viewport::new(800, 600);
        let ray = vp.pick_ray(0.0, 0.0, &cam);
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn edge_ray_matches_field_of_view() {
        let cam = camera_at(Vec3::ZERO, Vec3::NEG_Z);
        let vp = Viewport::new(100, 100);
        // Top edge at the horizontal center: half the vertical fov above the axis.
        let ray = vp.pick_ray(50.0, 0.0, &cam);
        let angle = ray.direction.angle_between(Vec3::NEG_Z);
        assert!((angle - 30.0_f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn zero_viewport_stays_finite() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let ray = Viewport::new(0, 0).pick_ray(0.0, 0.0, &cam);
        assert!(ray.direction.is_finite());
    }
}
