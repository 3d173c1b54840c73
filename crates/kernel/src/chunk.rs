use glam::Vec3;
use voxelfield_common::Ray;

use crate::component::{Drawable, Tickable, TransformSink};
use crate::jitter::{JitterSource, SeededJitter};
use crate::voxel::Voxel;

/// Nearest intersection found by a ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the (unit) ray direction.
    pub distance: f32,
    /// World-space impact point.
    pub point: Vec3,
    /// Position of the hit voxel in the chunk.
    pub index: usize,
}

/// Owning collection of voxels.
///
/// Membership order carries no meaning. Queries scan linearly; among hits at
/// equal distance, the one met first in iteration order wins, which is not a
/// promise about grid order.
#[derive(Debug)]
pub struct Chunk {
    voxels: Vec<Voxel>,
    jitter: Box<dyn JitterSource>,
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    /// Empty chunk with entropy-seeded jitter.
    pub fn new() -> Self {
        Self::with_jitter(Box::new(SeededJitter::from_entropy()))
    }

    /// Empty chunk drawing impulse jitter from `jitter`.
    pub fn with_jitter(jitter: Box<dyn JitterSource>) -> Self {
        Self {
            voxels: Vec::new(),
            jitter,
        }
    }

    pub fn add_voxel(&mut self, voxel: Voxel) {
        self.voxels.push(voxel);
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn get(&self, index: usize) -> Option<&Voxel> {
        self.voxels.get(index)
    }

    /// Drop every member, keeping the jitter source.
    pub fn clear(&mut self) {
        self.voxels.clear();
    }

    /// Number of members that have accepted an impulse.
    pub fn moving_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_moving()).count()
    }

    /// Distance to the nearest voxel bounding sphere hit by `ray`, if any.
    pub fn find_closest_voxel(&self, ray: &Ray) -> Option<f32> {
        self.closest_hit(ray).map(|hit| hit.distance)
    }

    /// Nearest voxel hit by `ray`, with its impact point and index.
    pub fn closest_hit(&self, ray: &Ray) -> Option<RayHit> {
        let mut best: Option<(usize, f32)> = None;
        for (index, voxel) in self.voxels.iter().enumerate() {
            let Some(t) = ray_sphere(ray, voxel.origin(), voxel.size()) else {
                continue;
            };
            if best.is_none_or(|(_, d)| t < d) {
                best = Some((index, t));
            }
        }
        best.map(|(index, distance)| RayHit {
            distance,
            point: ray.at(distance),
            index,
        })
    }

    /// Apply an impulse from `impact` to every member. Returns how many accepted it.
    pub fn broadcast_impulse(&mut self, impact: Vec3) -> usize {
        let mut accepted = 0;
        for voxel in &mut self.voxels {
            if voxel.apply_impulse(impact, self.jitter.as_mut()) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Advance every member.
    pub fn tick_all(&mut self, elapsed_seconds: f32) {
        for voxel in &mut self.voxels {
            voxel.tick(elapsed_seconds);
        }
    }
}

impl Tickable for Chunk {
    fn tick(&mut self, elapsed_seconds: f32) {
        self.tick_all(elapsed_seconds);
    }
}

impl Drawable for Chunk {
    fn draw(&self, sink: &mut dyn TransformSink) {
        for voxel in &self.voxels {
            voxel.draw(sink);
        }
    }
}

/// Smallest non-negative root of the ray/sphere quadratic.
///
/// Assumes a unit direction, so the quadratic's leading coefficient is 1. A zero
/// direction never hits, even from inside the sphere.
fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    if ray.direction == Vec3::ZERO {
        return None;
    }
    let v = ray.origin - center;
    let b = 2.0 * ray.direction.dot(v);
    let c = v.dot(v) - radius * radius;
    let discriminant = b * b - 4.0 * c;
    if discriminant.is_nan() || discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let near = (-b - root) / 2.0;
    let far = (-b + root) / 2.0;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Origin inside the sphere.
        Some(far)
    } else {
        None
    }
}
