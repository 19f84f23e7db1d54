// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Loop predicate tests against hand-checked geometry

use approx::assert_relative_eq;
use bimconvert::geometry::predicates::{
    is_3d, is_polygon, loop_normal, newells_normal, points_equal,
};
use nalgebra::{Point3, Vector3};

const TOL: f64 = 1e-9;

/// A planar rectangle in a tilted plane: 3D extent, still a polygon.
fn tilted_rectangle() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    ]
}

#[test]
fn test_tilted_loop_is_3d_and_still_a_polygon() {
    let points = tilted_rectangle();
    assert!(is_3d(&points, 0.001));
    assert!(is_polygon(&points, TOL));
}

#[test]
fn test_tilted_rectangle_normal_direction_and_area() {
    let points = tilted_rectangle();
    let normal = newells_normal(&points);
    // Edges are (2,0,0) and (0,1,1): the normal is along (0,-1,1) and the
    // magnitude is twice the area 2·√2.
    assert_relative_eq!(normal, Vector3::new(0.0, -4.0, 4.0), epsilon = 1e-9);
    assert_relative_eq!(normal.norm(), 2.0 * 2.0 * 2.0f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn test_unit_square_normal_magnitude_is_twice_area() {
    let square = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let normal = newells_normal(&square);
    assert_relative_eq!(normal, Vector3::new(0.0, 0.0, 2.0), epsilon = TOL);

    let unit = loop_normal(&square, TOL).unwrap();
    assert_relative_eq!(unit.into_inner(), Vector3::z(), epsilon = TOL);
}

#[test]
fn test_polygon_with_jittered_duplicates() {
    // Points closer than tolerance to their neighbor are rejected raw but
    // collapsed by the checked normal path.
    let noisy = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1e-12, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert!(!is_polygon(&noisy, 1e-9));
    let normal = loop_normal(&noisy, 1e-9).unwrap();
    assert_relative_eq!(normal.into_inner(), Vector3::z(), epsilon = 1e-9);
}

#[test]
fn test_collinearity_is_unit_independent() {
    // The same sliver shape at millimeter and kilometer scale must classify
    // identically.
    let thin = |scale: f64| {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0 * scale, 1e-12 * scale, 0.0),
            Point3::new(2.0 * scale, 0.0, 0.0),
        ]
    };
    assert_eq!(is_polygon(&thin(1.0), 1e-9), is_polygon(&thin(1e6), 1e-9));
    assert!(!is_polygon(&thin(1.0), 1e-9));
}

#[test]
fn test_points_equal_tolerance_boundary() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(0.0, 0.0, 1e-3);
    assert!(points_equal(&a, &b, 1e-3));
    assert!(!points_equal(&a, &b, 1e-4));
}
