use glam::{Mat4, Vec3};
use voxelfield_kernel::CameraState;

/// Fly camera with position, yaw, pitch, and projection parameters.
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        // Backed off along +Z from the default 8x8x8 grid, facing it.
        Self {
            position: Vec3::new(7.0, 7.0, 40.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            speed: 10.0,
            sensitivity: 0.003,
        }
    }
}

impl FlyCamera {
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Move along the camera's local axes, `direction` in (right, up, forward).
    pub fn translate(&mut self, direction: Vec3, dt: f32) {
        let delta =
            self.right() * direction.x + Vec3::Y * direction.y + self.forward() * direction.z;
        self.position += delta * self.speed * dt;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn inverse_view(&self) -> Mat4 {
        self.view_matrix().inverse()
    }

    /// Matrices handed to the picking query.
    pub fn camera_state(&self) -> CameraState {
        CameraState::new(self.view_matrix(), self.projection_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_faces_negative_z() {
        let cam = FlyCamera::default();
        assert!((cam.forward() - Vec3::NEG_Z).length() < 1e-5);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn translate_moves_forward() {
        let mut cam = FlyCamera::default();
        let start = cam.position;
        cam.translate(Vec3::Z, 1.0);
        assert!(cam.position.z < start.z);
    }

    #[test]
    fn camera_state_eye_is_position() {
        let mut cam = FlyCamera::default();
        cam.rotate(120.0, -40.0);
        let state = cam.camera_state();
        assert!((state.eye() - cam.position).length() < 1e-3);
        assert!((state.inverse_view - cam.inverse_view()).abs_diff_eq(Mat4::ZERO, 1e-5));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.rotate(0.0, -10_000.0);
        assert!(cam.pitch <= 89.0_f32.to_radians());
    }
}
