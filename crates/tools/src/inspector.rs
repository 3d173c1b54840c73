use glam::Vec3;
use voxelfield_kernel::VoxelField;

/// Read-only queries against a voxel field.
pub struct FieldInspector;

impl FieldInspector {
    /// Produce a summary of the field state.
    pub fn summary(field: &VoxelField) -> FieldSummary {
        let voxels = field.chunk().voxels();
        let lowest_y = voxels
            .iter()
            .map(|v| v.origin().y)
            .fold(None, |acc: Option<f32>, y| Some(acc.map_or(y, |a| a.min(y))));
        let max_speed = voxels
            .iter()
            .map(|v| v.velocity().length())
            .fold(0.0_f32, f32::max);
        FieldSummary {
            frame: field.frame(),
            voxel_count: voxels.len(),
            moving_count: field.chunk().moving_count(),
            pick_count: field.pick_count(),
            lowest_y,
            max_speed,
            last_impact: field.last_impact(),
        }
    }

    /// Details of the voxel at `index`.
    pub fn inspect_voxel(field: &VoxelField, index: usize) -> Option<VoxelInfo> {
        field.chunk().get(index).map(|v| VoxelInfo {
            index,
            origin: v.origin(),
            home: v.home(),
            velocity: v.velocity(),
            gravity: v.gravity(),
            rotation: v.rotation(),
            moving: v.is_moving(),
        })
    }

    /// Indices of every moving voxel.
    pub fn moving_voxels(field: &VoxelField) -> Vec<usize> {
        field
            .chunk()
            .voxels()
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_moving())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Summary of field state for the inspector.
#[derive(Debug, Clone)]
pub struct FieldSummary {
    pub frame: u64,
    pub voxel_count: usize,
    pub moving_count: usize,
    pub pick_count: u64,
    /// Lowest anchor height; `None` for an empty field.
    pub lowest_y: Option<f32>,
    pub max_speed: f32,
    pub last_impact: Option<Vec3>,
}

impl std::fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Field: frame={} voxels={} moving={} picks={}",
            self.frame, self.voxel_count, self.moving_count, self.pick_count
        )?;
        if let Some(y) = self.lowest_y {
            write!(f, " lowest_y={y:.2}")?;
        }
        write!(f, " max_speed={:.3}", self.max_speed)
    }
}

/// Detailed info about a single voxel.
#[derive(Debug, Clone)]
pub struct VoxelInfo {
    pub index: usize,
    pub origin: Vec3,
    pub home: Vec3,
    pub velocity: Vec3,
    pub gravity: Vec3,
    pub rotation: Vec3,
    pub moving: bool,
}

impl std::fmt::Display for VoxelInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Voxel [{}] origin=({:.2}, {:.2}, {:.2}) vel=({:.3}, {:.3}, {:.3}) moving={}",
            self.index,
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
            self.moving,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;
    use voxelfield_common::FieldConfig;
    use voxelfield_kernel::{NoJitter, Tickable};

    fn field(dims: UVec3) -> VoxelField {
        VoxelField::with_jitter(FieldConfig::with_grid(dims, 2.0), Box::new(NoJitter)).unwrap()
    }

    #[test]
    fn summary_of_resting_field() {
        let f = field(UVec3::new(2, 2, 2));
        let s = FieldInspector::summary(&f);
        assert_eq!(s.voxel_count, 8);
        assert_eq!(s.moving_count, 0);
        assert_eq!(s.lowest_y, Some(0.0));
        assert_eq!(s.max_speed, 0.0);
        assert_eq!(s.last_impact, None);
    }

    #[test]
    fn summary_tracks_motion() {
        let mut f = field(UVec3::new(3, 1, 1));
        f.chunk_mut().broadcast_impulse(Vec3::new(-1.0, 0.0, 0.0));
        f.tick(1.0 / 60.0);
        let s = FieldInspector::summary(&f);
        assert_eq!(s.frame, 1);
        assert_eq!(s.moving_count, 2);
        assert!(s.lowest_y.unwrap() < 0.0);
        assert!(s.max_speed > 0.0);
    }

    #[test]
    fn inspect_voxel_found_and_missing() {
        let f = field(UVec3::new(2, 1, 1));
        let info = FieldInspector::inspect_voxel(&f, 1).unwrap();
        assert!((info.origin.x - 2.025).abs() < 1e-6);
        assert_eq!(info.origin, info.home);
        assert!(FieldInspector::inspect_voxel(&f, 2).is_none());
    }

    #[test]
    fn moving_voxels_lists_indices() {
        let mut f = field(UVec3::new(4, 1, 1));
        f.chunk_mut().broadcast_impulse(Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(FieldInspector::moving_voxels(&f), vec![2, 3]);
    }

    #[test]
    fn summary_display() {
        let f = field(UVec3::ONE);
        let s = format!("{}", FieldInspector::summary(&f));
        assert!(s.contains("frame=0"));
        assert!(s.contains("voxels=1"));
    }
}
