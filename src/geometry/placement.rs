// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Resolution of placement parent chains into a single rigid transform

use crate::error::{ConvertError, Result};
use crate::geometry::frame::{AxisFrame, AxisFrame2d};
use crate::geometry::transform::RigidTransform;
use crate::model::{AxisPlacement, ObjectPlacement};

/// Upper bound on placement chain length. The data model guarantees
/// acyclicity; a chain longer than this is treated as a cycle.
pub const MAX_PLACEMENT_DEPTH: usize = 1024;

/// Resolve a placement's parent chain into one composed transform.
///
/// Local coordinates are expressed in parent space, so the fold walks from
/// the leaf outward and applies each ancestor after everything below it.
/// 2D placements are lifted into the plane Z=0 before composition; a 2D
/// record sitting *above* a 3D record in the chain would require projecting
/// 3D data down and is rejected with
/// [`ConvertError::DimensionMismatch`].
pub fn resolve_placement(placement: &ObjectPlacement, tolerance: f64) -> Result<RigidTransform> {
    let mut transform = local_transform(&placement.local, tolerance)?;
    let mut seen_3d = placement.local.is_3d();
    let mut depth = 1usize;
    let mut current = placement.relative_to.as_deref();

    while let Some(parent) = current {
        depth += 1;
        if depth > MAX_PLACEMENT_DEPTH {
            return Err(ConvertError::MalformedHierarchy {
                bound: MAX_PLACEMENT_DEPTH,
            });
        }
        if seen_3d && !parent.local.is_3d() {
            return Err(ConvertError::DimensionMismatch {
                depth,
                reason: "2D placement above a 3D placement".into(),
            });
        }
        seen_3d = seen_3d || parent.local.is_3d();

        let parent_local = local_transform(&parent.local, tolerance)?;
        transform = parent_local.compose(&transform);
        current = parent.relative_to.as_deref();
    }

    log::trace!("resolved placement chain of depth {depth}");
    Ok(transform)
}

/// The transform of a single axis placement, ignoring any parent. 2D
/// placements are lifted into Z=0.
pub fn local_transform(placement: &AxisPlacement, tolerance: f64) -> Result<RigidTransform> {
    let frame = match placement {
        AxisPlacement::ThreeD {
            origin,
            axis,
            ref_direction,
        } => AxisFrame::build(*origin, axis.as_ref(), ref_direction.as_ref(), tolerance)?,
        AxisPlacement::TwoD {
            origin,
            ref_direction,
        } => AxisFrame2d::build(*origin, ref_direction.as_ref(), tolerance)?.lift(),
    };
    Ok(RigidTransform::from_frame(&frame))
}
