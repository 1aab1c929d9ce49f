//! Downward ray intersection against track surface strips.

use glam::DVec3;

use neondrift_core::components::SegmentInfo;
use neondrift_core::enums::ContactCategory;

/// One horizontal collision surface: the walkable top of a segment.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceStrip {
    pub category: ContactCategory,
    /// Lateral center of the strip.
    pub center_x: f64,
    pub half_width: f64,
    /// Forward extent [min_z, max_z].
    pub min_z: f64,
    pub max_z: f64,
    /// Height of the walkable surface.
    pub top_y: f64,
}

impl SurfaceStrip {
    /// Build the walkable strip for a live segment. Segments sit with their
    /// surface at y = 0 and their near edge at `origin_z`.
    pub fn from_segment(info: &SegmentInfo) -> Self {
        Self {
            category: ContactCategory::Ground,
            center_x: 0.0,
            half_width: info.half_width,
            min_z: info.origin_z,
            max_z: info.origin_z + info.length,
            top_y: 0.0,
        }
    }

    /// Whether a point at (x, z) is over this strip.
    pub fn covers(&self, x: f64, z: f64) -> bool {
        (x - self.center_x).abs() <= self.half_width && z >= self.min_z && z <= self.max_z
    }
}

/// Result of a successful downward raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the surface.
    pub distance: f64,
    pub normal: DVec3,
}

/// Cast a ray straight down from `origin` through at most `max_distance`,
/// filtered to `category`. Returns the nearest hit.
pub fn raycast_down(
    origin: DVec3,
    max_distance: f64,
    category: ContactCategory,
    strips: &[SurfaceStrip],
) -> Option<RayHit> {
    let mut nearest: Option<RayHit> = None;
    for strip in strips {
        if strip.category != category || !strip.covers(origin.x, origin.z) {
            continue;
        }
        let distance = origin.y - strip.top_y;
        if distance < 0.0 || distance > max_distance {
            continue;
        }
        if nearest.map_or(true, |hit| distance < hit.distance) {
            nearest = Some(RayHit {
                distance,
                normal: DVec3::Y,
            });
        }
    }
    nearest
}
