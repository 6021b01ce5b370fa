//! Ray caster - finds the first wall along a ray by fixed-step marching
//!
//! A ray starts at the camera and advances `step` cells at a time. At each
//! sample the containing cell is looked up:
//!
//! - off the map: the ray stops at `max_depth` (counts as a hit, no seam)
//! - wall: the ray stops at the sample distance and corner seams are checked
//! - open: keep marching until `max_depth`
//!
//! Seam ("boundary") detection looks at the two corners of the hit cell
//! nearest to the camera. When the ray points at one of them within
//! `tolerance` radians, the hit is flagged so the shader can blank it and
//! adjacent wall faces read as separate blocks.

use arrayvec::ArrayVec;

use crate::map::Map;
use crate::types::{CellKind, MAX_MARCH_STEPS};

/// A ray in map space. `dir` is a unit vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin_x: f32,
    pub origin_y: f32,
    pub dir_x: f32,
    pub dir_y: f32,
}

impl Ray {
    /// Ray from an origin towards `angle` (0 looks along +y).
    pub fn from_angle(origin_x: f32, origin_y: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            origin_x,
            origin_y,
            dir_x: sin,
            dir_y: cos,
        }
    }

    #[inline(always)]
    pub fn point_at(&self, distance: f32) -> (f32, f32) {
        (
            self.origin_x + self.dir_x * distance,
            self.origin_y + self.dir_y * distance,
        )
    }
}

/// Outcome of a single cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Distance in cells from the origin, within `[0, max_depth]`.
    pub distance: f32,
    pub hit: bool,
    /// The ray grazes a corner of the hit cell.
    pub boundary: bool,
}

/// Marching parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastParams {
    pub max_depth: f32,
    pub step: f32,
    pub tolerance: f32,
}

impl CastParams {
    pub fn from_config(config: &crate::types::RenderConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            step: config.step,
            tolerance: config.boundary_tolerance,
        }
    }
}

/// Cast a ray from `(origin_x, origin_y)` towards `angle`.
pub fn cast(map: &Map, origin_x: f32, origin_y: f32, angle: f32, params: CastParams) -> HitResult {
    cast_ray(map, &Ray::from_angle(origin_x, origin_y, angle), params)
}

/// Cast a prepared ray.
pub fn cast_ray(map: &Map, ray: &Ray, params: CastParams) -> HitResult {
    let miss = HitResult {
        distance: params.max_depth,
        hit: false,
        boundary: false,
    };
    if !(params.step > 0.0) || !(params.max_depth > 0.0) {
        return miss;
    }
    // Also keeps the sample counter far below u32 and f32 integer limits.
    if params.max_depth / params.step > MAX_MARCH_STEPS as f32 {
        return miss;
    }

    // Distances are derived from an integer counter so they don't drift.
    let mut i: u32 = 0;
    let mut distance = 0.0_f32;
    while distance < params.max_depth {
        i += 1;
        distance = i as f32 * params.step;

        let (px, py) = ray.point_at(distance);
        let cell_x = px.floor() as i32;
        let cell_y = py.floor() as i32;

        match map.kind_at(cell_x, cell_y) {
            None => {
                return HitResult {
                    distance: params.max_depth,
                    hit: true,
                    boundary: false,
                };
            }
            Some(CellKind::Wall) => {
                return HitResult {
                    distance: distance.min(params.max_depth),
                    hit: true,
                    boundary: is_boundary(ray, cell_x, cell_y, params.tolerance),
                };
            }
            Some(CellKind::Open) => {}
        }
    }

    miss
}

/// Whether the ray points at one of the two nearest corners of the cell.
pub fn is_boundary(ray: &Ray, cell_x: i32, cell_y: i32, tolerance: f32) -> bool {
    // (distance to corner, cosine between ray and corner direction)
    let mut corners: ArrayVec<(f32, f32), 4> = ArrayVec::new();
    for tx in 0..2 {
        for ty in 0..2 {
            let vx = (cell_x + tx) as f32 - ray.origin_x;
            let vy = (cell_y + ty) as f32 - ray.origin_y;
            let d = (vx * vx + vy * vy).sqrt();
            // A corner under the camera has no direction; never a seam.
            let cos = if d > f32::EPSILON {
                ((ray.dir_x * vx + ray.dir_y * vy) / d).clamp(-1.0, 1.0)
            } else {
                -1.0
            };
            corners.push((d, cos));
        }
    }

    corners.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
    corners
        .iter()
        .take(2)
        .any(|&(_, cos)| cos.acos() < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CastParams {
        CastParams {
            max_depth: 16.0,
            step: 0.1,
            tolerance: 0.01,
        }
    }

    fn corridor() -> Map {
        // 3 wide, wall row at y = 5.
        Map::parse("...\n...\n...\n...\n...\n###").unwrap()
    }

    #[test]
    fn ray_direction_is_unit_length() {
        for k in 0..16 {
            let r = Ray::from_angle(0.0, 0.0, k as f32 * 0.7);
            let len = (r.dir_x * r.dir_x + r.dir_y * r.dir_y).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn straight_ray_hits_wall_row() {
        let hit = cast(&corridor(), 1.5, 0.5, 0.0, params());
        assert!(hit.hit);
        assert!(!hit.boundary);
        assert!((hit.distance - 4.5).abs() <= 0.1 + 1e-4);
    }

    #[test]
    fn leaving_the_map_reports_max_depth() {
        // Facing -y from the top row leaves the grid immediately.
        let hit = cast(&corridor(), 1.5, 0.5, std::f32::consts::PI, params());
        assert!(hit.hit);
        assert!(!hit.boundary);
        assert_eq!(hit.distance, 16.0);
    }

    #[test]
    fn open_field_within_depth_is_a_miss() {
        let map = Map::parse(&".".repeat(64)).unwrap();
        let hit = cast(
            &map,
            0.5,
            0.5,
            std::f32::consts::FRAC_PI_2,
            CastParams {
                max_depth: 8.0,
                ..params()
            },
        );
        assert!(!hit.hit);
        assert_eq!(hit.distance, 8.0);
    }

    #[test]
    fn corner_straight_ahead_is_a_boundary() {
        let ray = Ray {
            origin_x: 0.5,
            origin_y: 0.5,
            dir_x: std::f32::consts::FRAC_1_SQRT_2,
            dir_y: std::f32::consts::FRAC_1_SQRT_2,
        };
        assert!(is_boundary(&ray, 1, 1, 0.01));
    }

    #[test]
    fn corner_at_origin_is_not_a_boundary() {
        // Corner (1,1) coincides with the origin.
        let ray = Ray::from_angle(1.0, 1.0, 0.3);
        assert!(!is_boundary(&ray, 1, 1, 0.01));
    }

    #[test]
    fn wall_on_the_overshooting_sample_is_clamped_to_depth() {
        // Samples land at 0.3, 0.6, 0.9 and 1.2; only the last is in the wall.
        let map = Map::parse(".\n.\n#").unwrap();
        let hit = cast(
            &map,
            0.5,
            0.9,
            0.0,
            CastParams {
                max_depth: 1.0,
                step: 0.3,
                tolerance: 0.01,
            },
        );
        assert!(hit.hit);
        assert!(!hit.boundary);
        assert_eq!(hit.distance, 1.0);
    }

    #[test]
    fn too_many_samples_returns_miss_without_marching() {
        let map = Map::parse(&".".repeat(64)).unwrap();
        for step in [1e-9, f32::MIN_POSITIVE] {
            let hit = cast(
                &map,
                0.5,
                0.5,
                std::f32::consts::FRAC_PI_2,
                CastParams { step, ..params() },
            );
            assert!(!hit.hit);
            assert_eq!(hit.distance, 16.0);
        }
        let infinite = CastParams {
            max_depth: f32::INFINITY,
            ..params()
        };
        assert!(!cast(&corridor(), 1.5, 0.5, 0.0, infinite).hit);
    }

    #[test]
    fn zero_step_returns_miss_instead_of_looping() {
        let hit = cast(
            &corridor(),
            1.5,
            0.5,
            0.0,
            CastParams {
                step: 0.0,
                ..params()
            },
        );
        assert!(!hit.hit);
        assert_eq!(hit.distance, 16.0);
    }
}
