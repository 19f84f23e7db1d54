// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Geometry module - frames, transforms, planes and predicates

mod frame;
pub mod placement;
mod plane;
pub mod predicates;
mod transform;

pub use frame::{AxisFrame, AxisFrame2d};
pub use placement::{local_transform, resolve_placement, MAX_PLACEMENT_DEPTH};
pub use plane::Plane;
pub use transform::{AffineTransform, RigidTransform, Transform};
