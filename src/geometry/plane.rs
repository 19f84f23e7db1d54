// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Planes derived from axis frames

use nalgebra::{Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// An unbounded plane: an origin point and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3<f64>,
    pub normal: Unit<Vector3<f64>>,
}

impl Plane {
    /// Create a plane, normalizing the given normal direction.
    pub fn new(origin: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            origin,
            normal: Unit::new_normalize(normal),
        }
    }

    /// Signed distance from `point` to the plane; positive on the side the
    /// normal points into.
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        (point - self.origin).dot(&self.normal)
    }
}
