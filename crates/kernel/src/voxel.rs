use glam::{Mat4, Vec3};
use voxelfield_common::MotionParams;

use crate::component::{Drawable, Tickable, TransformSink, VoxelInstance};
use crate::jitter::JitterSource;

/// A single cube with its own motion state.
///
/// At rest (`moving == false`) velocity and gravity are zero and the transform is
/// identity. An accepted impulse sets `moving`, and nothing ever clears it again:
/// decay drives velocity and spin toward zero without reaching it.
#[derive(Debug, Clone)]
pub struct Voxel {
    origin: Vec3,
    home: Vec3,
    size: f32,
    velocity: Vec3,
    gravity: Vec3,
    rotation: Vec3,
    transform: Mat4,
    moving: bool,
    params: MotionParams,
}

impl Voxel {
    /// Create a resting voxel centered at `origin` with half-extent `size`.
    pub fn new(origin: Vec3, size: f32, params: MotionParams) -> Self {
        Self {
            origin,
            home: origin,
            size,
            velocity: Vec3::ZERO,
            gravity: Vec3::ZERO,
            rotation: params.initial_spin,
            transform: Mat4::IDENTITY,
            moving: false,
            params,
        }
    }

    /// Current anchor point; migrates while the voxel moves.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Origin at construction.
    pub fn home(&self) -> Vec3 {
        self.home
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Per-axis rotation applied on the next tick, in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// World transform accumulated since the voxel left rest.
    pub fn position_transform(&self) -> Mat4 {
        self.transform
    }

    /// Push the voxel away from `impact`.
    ///
    /// The displacement is `(origin - impact + jitter) * scale_factor`, with jitter
    /// drawn independently per axis. It is accepted only when its length is below
    /// `impulse_threshold`; otherwise nothing changes. Returns whether it was accepted.
    pub fn apply_impulse(&mut self, impact: Vec3, jitter: &mut dyn JitterSource) -> bool {
        let range = self.params.jitter_range;
        let noise = Vec3::new(
            jitter.sample(range),
            jitter.sample(range),
            jitter.sample(range),
        );
        let displacement = (self.origin - impact + noise) * self.params.scale_factor;

        if displacement.length() >= self.params.impulse_threshold {
            return false;
        }

        self.velocity = displacement;
        self.gravity = self.params.gravity;
        self.moving = true;
        true
    }

    pub fn instance(&self) -> VoxelInstance {
        VoxelInstance {
            transform: self.transform,
            home: self.home,
            size: self.size,
            moving: self.moving,
        }
    }
}

impl Tickable for Voxel {
    fn tick(&mut self, elapsed_seconds: f32) {
        if !self.moving {
            return;
        }
        let p = self.params;
        let t = elapsed_seconds * p.time_factor;

        // Spin about the current anchor, X then Y then Z.
        let spin = Mat4::from_translation(self.origin)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_translation(-self.origin);
        let spun = spin * self.transform;
        if spun.is_finite() {
            self.transform = spun;
        }
        self.rotation *= p.decay_factor.powi(3);

        let step = (self.velocity + self.gravity) * t;
        if step.is_finite() {
            self.origin += step;
            self.transform = Mat4::from_translation(step) * self.transform;
        }

        self.velocity *= p.decay_factor;
        self.gravity = (self.gravity / p.decay_factor).clamp_length_max(p.max_fall);
    }
}

impl Drawable for Voxel {
    fn draw(&self, sink: &mut dyn TransformSink) {
        sink.submit(self.instance());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::{NoJitter, SeededJitter};

    const DT: f32 = 1.0 / 60.0;

    fn unit_voxel() -> Voxel {
        Voxel::new(Vec3::ZERO, 1.0, MotionParams::default())
    }

    fn moving_voxel() -> Voxel {
        let mut v = unit_voxel();
        assert!(v.apply_impulse(Vec3::new(-2.0, 1.0, 0.5), &mut NoJitter));
        v
    }

    #[test]
    fn new_voxel_is_at_rest() {
        let v = unit_voxel();
        assert!(!v.is_moving());
        assert_eq!(v.velocity(), Vec3::ZERO);
        assert_eq!(v.gravity(), Vec3::ZERO);
        assert_eq!(v.position_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn tick_at_rest_is_noop() {
        let mut v = Voxel::new(Vec3::new(3.0, 4.0, 5.0), 1.0, MotionParams::default());
        for _ in 0..10 {
            v.tick(DT);
        }
        assert_eq!(v.origin(), Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(v.position_transform(), Mat4::IDENTITY);
        assert_eq!(v.velocity(), Vec3::ZERO);
        assert_eq!(v.rotation(), MotionParams::default().initial_spin);
    }

    #[test]
    fn impulse_below_threshold_accepted() {
        let mut v = unit_voxel();
        assert!(v.apply_impulse(Vec3::new(4.999, 0.0, 0.0), &mut NoJitter));
        assert!(v.is_moving());
        assert_eq!(v.velocity(), Vec3::new(-4.999, 0.0, 0.0));
        assert_eq!(v.gravity(), MotionParams::default().gravity);
    }

    #[test]
    fn impulse_at_threshold_rejected() {
        let mut v = unit_voxel();
        assert!(!v.apply_impulse(Vec3::new(5.0, 0.0, 0.0), &mut NoJitter));
        assert!(!v.is_moving());
        assert_eq!(v.velocity(), Vec3::ZERO);
        assert_eq!(v.gravity(), Vec3::ZERO);
    }

    #[test]
    fn impulse_beyond_threshold_rejected() {
        let mut v = unit_voxel();
        assert!(!v.apply_impulse(Vec3::new(0.0, 5.001, 0.0), &mut NoJitter));
        assert!(!v.is_moving());
        assert_eq!(v.position_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn impulse_at_own_origin_accepted() {
        let mut v = unit_voxel();
        assert!(v.apply_impulse(Vec3::ZERO, &mut NoJitter));
        assert!(v.is_moving());
        assert_eq!(v.velocity(), Vec3::ZERO);
    }

    #[test]
    fn scale_factor_widens_displacement() {
        let params = MotionParams {
            scale_factor: 2.0,
            ..MotionParams::default()
        };
        let mut v = Voxel::new(Vec3::ZERO, 1.0, params);
        // 3.0 scaled to 6.0 crosses the threshold.
        assert!(!v.apply_impulse(Vec3::new(3.0, 0.0, 0.0), &mut NoJitter));
        assert!(v.apply_impulse(Vec3::new(2.0, 0.0, 0.0), &mut NoJitter));
        assert_eq!(v.velocity(), Vec3::new(-4.0, 0.0, 0.0));
    }

    #[test]
    fn seeded_jitter_reproduces_displacement() {
        let mut a = unit_voxel();
        let mut b = unit_voxel();
        let impact = Vec3::new(1.0, 1.0, 1.0);
        a.apply_impulse(impact, &mut SeededJitter::new(9));
        b.apply_impulse(impact, &mut SeededJitter::new(9));
        assert_eq!(a.velocity(), b.velocity());
        let diff = a.velocity() - Vec3::new(-1.0, -1.0, -1.0);
        assert!(diff.abs().max_element() <= 0.5);
    }

    #[test]
    fn impulse_does_not_touch_origin_or_transform() {
        let v = moving_voxel();
        assert_eq!(v.origin(), Vec3::ZERO);
        assert_eq!(v.position_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn moving_flag_is_sticky() {
        let mut v = moving_voxel();
        for _ in 0..500 {
            v.tick(DT);
            assert!(v.is_moving());
        }
        // A later rejected impulse does not stop it either.
        assert!(!v.apply_impulse(Vec3::splat(1000.0), &mut NoJitter));
        assert!(v.is_moving());
    }

    #[test]
    fn decay_is_monotonic() {
        let mut v = moving_voxel();
        for _ in 0..50 {
            let speed = v.velocity().length();
            let spin = v.rotation().length();
            let fall = v.gravity().length();
            v.tick(DT);
            assert!(v.velocity().length() < speed);
            assert!(v.rotation().length() < spin);
            assert!(v.gravity().length() > fall);
        }
    }

    #[test]
    fn gravity_saturates_at_max_fall() {
        let mut v = unit_voxel();
        assert!(v.apply_impulse(Vec3::ZERO, &mut NoJitter));
        for _ in 0..500 {
            v.tick(DT);
        }
        let max_fall = MotionParams::default().max_fall;
        assert!((v.gravity().length() - max_fall).abs() < 1e-3);
        assert!(v.gravity().y < 0.0);
    }

    #[test]
    fn long_fall_stays_finite() {
        let mut v = unit_voxel();
        assert!(v.apply_impulse(Vec3::ZERO, &mut NoJitter));
        for frame in 0..5000 {
            v.tick(DT);
            assert!(v.origin().is_finite(), "origin non-finite at frame {frame}");
            assert!(
                v.position_transform().is_finite(),
                "transform non-finite at frame {frame}"
            );
        }
        assert!(v.origin().y < -1000.0);
    }

    #[test]
    fn tick_moves_origin_by_combined_step() {
        let mut v = moving_voxel();
        let expected = (v.velocity() + v.gravity()) * DT;
        v.tick(DT);
        assert!((v.origin() - expected).length() < 1e-6);
        assert_ne!(v.position_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn transform_keeps_anchor_on_origin() {
        // The anchor is a fixed point of the spin, so the transform maps the
        // home position onto the migrated origin.
        let mut v = Voxel::new(Vec3::new(1.0, 2.0, 3.0), 1.0, MotionParams::default());
        assert!(v.apply_impulse(Vec3::new(0.0, 2.0, 3.0), &mut NoJitter));
        for _ in 0..20 {
            v.tick(DT);
        }
        let mapped = v.position_transform().transform_point3(v.home());
        assert!((mapped - v.origin()).length() < 1e-4);
    }

    #[test]
    fn time_factor_scales_step() {
        let params = MotionParams {
            time_factor: 2.0,
            ..MotionParams::default()
        };
        let mut v = Voxel::new(Vec3::ZERO, 1.0, params);
        v.apply_impulse(Vec3::new(-1.0, 0.0, 0.0), &mut NoJitter);
        let expected = (v.velocity() + v.gravity()) * DT * 2.0;
        v.tick(DT);
        assert!((v.origin() - expected).length() < 1e-6);
    }

    #[test]
    fn draw_emits_current_transform() {
        let mut v = moving_voxel();
        v.tick(DT);
        let mut sink: Vec<VoxelInstance> = Vec::new();
        v.draw(&mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].transform, v.position_transform());
        assert!(sink[0].moving);
    }
}
