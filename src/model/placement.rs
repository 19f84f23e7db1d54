// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Placement records: local axis placements and their parent chains

use nalgebra::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A local axis placement, 2D or 3D.
///
/// Directions are raw model data: possibly absent, possibly unnormalized.
/// Defaulting and normalization happen when a frame is built from the record,
/// not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisPlacement {
    /// Axis placement in 3D: origin, optional primary (Z) axis, optional
    /// reference (X) direction.
    ThreeD {
        origin: Point3<f64>,
        axis: Option<Vector3<f64>>,
        ref_direction: Option<Vector3<f64>>,
    },
    /// Axis placement in 2D: origin and optional reference (X) direction.
    TwoD {
        origin: Point2<f64>,
        ref_direction: Option<Vector2<f64>>,
    },
}

impl AxisPlacement {
    /// True for the 3D variant.
    pub fn is_3d(&self) -> bool {
        matches!(self, AxisPlacement::ThreeD { .. })
    }
}

/// An object placement: a local axis placement, optionally expressed relative
/// to a parent placement.
///
/// Parents form a singly linked chain toward the global frame. The source
/// data model guarantees acyclicity; resolution enforces a depth bound and
/// fails fast instead of walking a cycle forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPlacement {
    pub local: AxisPlacement,
    pub relative_to: Option<Box<ObjectPlacement>>,
}

impl ObjectPlacement {
    /// A placement with no parent.
    pub fn root(local: AxisPlacement) -> Self {
        Self {
            local,
            relative_to: None,
        }
    }

    /// A placement expressed relative to `parent`.
    pub fn relative(local: AxisPlacement, parent: ObjectPlacement) -> Self {
        Self {
            local,
            relative_to: Some(Box::new(parent)),
        }
    }
}
