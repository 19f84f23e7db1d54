// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Cartesian transformation operator records

use nalgebra::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D cartesian transformation operator record.
///
/// `axis1`/`axis2`/`axis3` are the local X/Y/Z directions; any may be absent.
/// `scale` is the uniform scale factor; the non-uniform operator variant adds
/// `scale2`/`scale3`, which default to `scale` when absent. All fields carry
/// raw model data without normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformOperator3d {
    pub origin: Point3<f64>,
    pub axis1: Option<Vector3<f64>>,
    pub axis2: Option<Vector3<f64>>,
    pub axis3: Option<Vector3<f64>>,
    pub scale: Option<f64>,
    pub scale2: Option<f64>,
    pub scale3: Option<f64>,
}

impl TransformOperator3d {
    /// An operator that only translates to `origin`.
    pub fn translation(origin: Point3<f64>) -> Self {
        Self {
            origin,
            axis1: None,
            axis2: None,
            axis3: None,
            scale: None,
            scale2: None,
            scale3: None,
        }
    }

    /// Effective per-axis scale factors after defaulting: `scale2`/`scale3`
    /// fall back to `scale`, and an absent `scale` means 1.0.
    pub fn effective_scales(&self) -> (f64, f64, f64) {
        let s1 = self.scale.unwrap_or(1.0);
        let s2 = self.scale2.unwrap_or(s1);
        let s3 = self.scale3.unwrap_or(s1);
        (s1, s2, s3)
    }
}

/// A 2D cartesian transformation operator record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformOperator2d {
    pub origin: Point2<f64>,
    pub axis1: Option<Vector2<f64>>,
    pub axis2: Option<Vector2<f64>>,
    pub scale: Option<f64>,
    pub scale2: Option<f64>,
}

impl TransformOperator2d {
    /// Effective per-axis scale factors after defaulting.
    pub fn effective_scales(&self) -> (f64, f64) {
        let s1 = self.scale.unwrap_or(1.0);
        let s2 = self.scale2.unwrap_or(s1);
        (s1, s2)
    }
}
