// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Bimconvert
//!
//! Conversion of hierarchical placement and transformation records from BIM
//! exchange models into flat geometric primitives: rigid transforms, affine
//! transforms, axis frames, planes and loop normals, ready to be mapped onto
//! a B-rep geometry kernel's native types.
//!
//! All operations are pure value computations. Tolerance is an explicit
//! parameter on every geometric comparison, taken from the caller's
//! model-wide precision setting.

pub mod error;
pub mod geometry;
pub mod model;

pub use error::{ConvertError, Result};
pub use geometry::{
    local_transform, resolve_placement, AffineTransform, AxisFrame, AxisFrame2d, Plane,
    RigidTransform, Transform, MAX_PLACEMENT_DEPTH,
};
pub use model::{AxisPlacement, ObjectPlacement, TransformOperator2d, TransformOperator3d};
