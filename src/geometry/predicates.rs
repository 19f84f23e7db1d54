// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Tolerance-based geometric predicates over raw point sequences
//!
//! Tolerance is an explicit parameter on every comparison, sourced from the
//! caller's model-wide precision setting. Nothing here reads ambient state.

use nalgebra::{Point2, Point3, Unit, Vector3};

use crate::error::{ConvertError, Result};

/// Sum of squared coordinate differences. Never negative; zero iff the
/// points coincide exactly.
pub fn squared_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm_squared()
}

/// 2D variant of [`squared_distance`].
pub fn squared_distance_2d(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (b - a).norm_squared()
}

/// True iff the squared distance between the points is at most `tolerance²`.
pub fn points_equal(a: &Point3<f64>, b: &Point3<f64>, tolerance: f64) -> bool {
    squared_distance(a, b) <= tolerance * tolerance
}

/// 2D variant of [`points_equal`].
pub fn points_equal_2d(a: &Point2<f64>, b: &Point2<f64>, tolerance: f64) -> bool {
    squared_distance_2d(a, b) <= tolerance * tolerance
}

/// True iff any point's Z deviates from the first point's Z by more than
/// `tolerance`.
///
/// This detects genuine 3D extent, not non-planarity: a loop in a tilted
/// plane is 3D and still planar. Works for open polylines and closed loops
/// alike; an empty sequence has no Z extent.
pub fn is_3d(points: &[Point3<f64>], tolerance: f64) -> bool {
    match points.first() {
        Some(first) => points.iter().any(|p| (p.z - first.z).abs() > tolerance),
        None => false,
    }
}

/// True iff the loop is a usable polygon: at least 3 points, no two
/// consecutive points coincident within `tolerance` (wrapping last→first),
/// and not all points collinear.
///
/// An explicitly closed loop (last point repeating the first) is accepted;
/// the trailing repeat is ignored. Collinearity is tested against the Newell
/// normal magnitude scaled by the squared loop extent, which keeps the
/// threshold independent of the model's units.
pub fn is_polygon(points: &[Point3<f64>], tolerance: f64) -> bool {
    let mut points = points;
    if points.len() > 1 && points_equal(&points[0], &points[points.len() - 1], tolerance) {
        points = &points[..points.len() - 1];
    }
    if points.len() < 3 {
        return false;
    }
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        if points_equal(p, q, tolerance) {
            return false;
        }
    }

    let extent = bounding_extent(points);
    if extent <= 0.0 {
        return false;
    }
    newells_normal(points).norm() > tolerance * extent * extent
}

/// Best-fit normal of a closed point loop by Newell's method.
///
/// Accumulates the shoelace cross-sums over wrapping consecutive pairs. The
/// direction is stable even for loops that are only planar within tolerance;
/// the magnitude is twice the projected enclosed area. Degenerate input
/// (fewer than 3 points, or all points coincident) yields the zero vector;
/// check the magnitude before normalizing.
pub fn newells_normal(points: &[Point3<f64>]) -> Vector3<f64> {
    if points.len() < 3 {
        return Vector3::zeros();
    }
    let mut normal = Vector3::zeros();
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal
}

/// Checked unit normal of a loop: [`newells_normal`] over the effective
/// points (consecutive duplicates collapsed), failing with
/// [`ConvertError::DegenerateLoop`] instead of returning a zero vector.
pub fn loop_normal(points: &[Point3<f64>], tolerance: f64) -> Result<Unit<Vector3<f64>>> {
    let effective = effective_points(points, tolerance);
    if effective.len() < 3 {
        return Err(ConvertError::DegenerateLoop(format!(
            "{} effective points, need at least 3",
            effective.len()
        )));
    }
    Unit::try_new(newells_normal(&effective), tolerance)
        .ok_or_else(|| ConvertError::DegenerateLoop("loop encloses no area".into()))
}

/// Collapse consecutive coincident points, including the wrap-around pair.
fn effective_points(points: &[Point3<f64>], tolerance: f64) -> Vec<Point3<f64>> {
    let mut out: Vec<Point3<f64>> = Vec::with_capacity(points.len());
    for p in points {
        match out.last() {
            Some(last) if points_equal(last, p, tolerance) => {}
            _ => out.push(*p),
        }
    }
    while out.len() > 1 && points_equal(&out[0], out.last().unwrap(), tolerance) {
        out.pop();
    }
    out
}

/// Diagonal length of the axis-aligned bounding box of the points.
fn bounding_extent(points: &[Point3<f64>]) -> f64 {
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);
    for p in points {
        min = min.inf(&p.coords);
        max = max.sup(&p.coords);
    }
    (max - min).norm()
}
