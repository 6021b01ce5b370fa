//! Ray caster behaviour on small hand-built maps.

use std::f32::consts::{PI, TAU};

use tui_raycaster::core::{cast, CastParams, Map};

/// Rows: `....` / `...#` / `...#` / `####`
fn four_by_four() -> Map {
    Map::parse("....\n...#\n...#\n####").unwrap()
}

fn params() -> CastParams {
    CastParams {
        max_depth: 16.0,
        step: 0.1,
        tolerance: 0.01,
    }
}

#[test]
fn straight_ahead_hits_bottom_wall_row() {
    let hit = cast(&four_by_four(), 1.5, 1.5, 0.0, params());
    assert!(hit.hit);
    assert!((hit.distance - 1.5).abs() <= 0.1 + 1e-4, "{}", hit.distance);
    assert!(!hit.boundary);
}

#[test]
fn ray_aimed_at_inner_corner_is_a_boundary() {
    // Corner shared by the walls at (3,1) and (3,2).
    let aim = (3.0_f32 - 0.5).atan2(2.0 - 0.5);
    let map = four_by_four();

    for offset in [0.0, 0.005, -0.005] {
        let hit = cast(&map, 0.5, 0.5, aim + offset, params());
        assert!(hit.hit);
        assert!(hit.boundary, "offset {} should graze the corner", offset);
    }
    for offset in [0.05, -0.05] {
        let hit = cast(&map, 0.5, 0.5, aim + offset, params());
        assert!(hit.hit);
        assert!(!hit.boundary, "offset {} is outside the tolerance", offset);
    }
}

#[test]
fn distance_stays_within_depth_for_every_direction() {
    let map = Map::default();
    let p = params();
    for i in 0..720 {
        let angle = i as f32 * TAU / 720.0;
        let hit = cast(&map, 14.0, 12.0, angle, p);
        assert!(hit.distance >= 0.0 && hit.distance <= p.max_depth);
        if !hit.hit {
            assert_eq!(hit.distance, p.max_depth);
        }
    }
}

#[test]
fn leaving_through_the_map_gap_reports_max_depth() {
    // The default map's top-right edge is open; from (12.5, 1.5) facing -y
    // the ray crosses row 0 and leaves the grid.
    let map = Map::default();
    let hit = cast(&map, 12.5, 1.5, PI, params());
    assert!(hit.hit);
    assert!(!hit.boundary);
    assert_eq!(hit.distance, 16.0);
}

#[test]
fn short_depth_turns_far_walls_into_misses() {
    let map = four_by_four();
    let hit = cast(
        &map,
        0.5,
        0.5,
        0.0,
        CastParams {
            max_depth: 1.0,
            ..params()
        },
    );
    assert!(!hit.hit);
    assert_eq!(hit.distance, 1.0);
}

#[test]
fn boundary_agrees_for_nearby_rays_away_from_the_seam() {
    // Rays hitting the middle of the bottom wall face, far from any corner.
    let map = four_by_four();
    let base = 0.0;
    let reference = cast(&map, 1.5, 1.5, base, params());
    for k in 1..=5 {
        let delta = k as f32 * 0.002;
        for angle in [base + delta, base - delta] {
            let hit = cast(&map, 1.5, 1.5, angle, params());
            assert_eq!(hit.boundary, reference.boundary);
        }
    }
}

#[test]
fn casting_is_deterministic() {
    let map = Map::default();
    for i in 0..64 {
        let angle = i as f32 * 0.37;
        let a = cast(&map, 3.3, 4.7, angle, params());
        let b = cast(&map, 3.3, 4.7, angle, params());
        assert_eq!(a, b);
    }
}
