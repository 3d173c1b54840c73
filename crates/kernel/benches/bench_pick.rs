use std::hint::black_box;
use std::time::Instant;

use glam::{Mat4, UVec3, Vec3};
use voxelfield_common::{FieldConfig, Ray};
use voxelfield_kernel::{CameraState, SeededJitter, Tickable, Viewport, VoxelField};

fn make_field(side: u32) -> VoxelField {
    let config = FieldConfig::with_grid(UVec3::splat(side), 2.0);
    VoxelField::with_jitter(config, Box::new(SeededJitter::new(42)))
        .expect("bench config is valid")
}

fn camera() -> CameraState {
    let view = Mat4::look_at_rh(Vec3::new(8.0, 8.0, 40.0), Vec3::splat(8.0), Vec3::Y);
    let projection = Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
    CameraState::new(view, projection)
}

fn bench_closest_hit(side: u32, iterations: usize) {
    let field = make_field(side);
    let ray = Ray::new(Vec3::new(7.0, 7.0, 60.0), Vec3::NEG_Z);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(field.chunk().find_closest_voxel(black_box(&ray)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  closest hit ({} voxels, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}",
        field.chunk().len()
    );
}

fn bench_pick_and_tick(side: u32, frames: usize) {
    let mut field = make_field(side);
    let cam = camera();
    let viewport = Viewport::new(1280, 720);

    let start = Instant::now();
    for i in 0..frames {
        if i % 60 == 0 {
            let _ = black_box(field.on_pick(640.0, 360.0, &cam, viewport));
        }
        field.tick(black_box(1.0 / 60.0));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / frames as u32;
    println!(
        "  pick + tick ({} voxels, {frames} frames, {} moving): {per_iter:?}/frame, total {elapsed:?}",
        field.chunk().len(),
        field.chunk().moving_count()
    );
}

fn main() {
    println!("=== Voxel Field Benchmarks ===\n");

    println!("Closest-hit scan:");
    bench_closest_hit(8, 10_000);
    bench_closest_hit(16, 1_000);
    bench_closest_hit(32, 100);

    println!("\nPick + tick frames:");
    bench_pick_and_tick(8, 1_000);
    bench_pick_and_tick(16, 300);
    bench_pick_and_tick(32, 60);

    println!("\n=== Done ===");
}
