// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Orthonormal axis frames built from placement data
//!
//! Input directions are raw model data and are normalized here; the reference
//! direction is re-orthogonalized against the primary axis (Gram-Schmidt), so
//! every constructed frame satisfies the orthonormality invariant even when
//! the inputs were not orthogonal.

use nalgebra::{Point2, Point3, Unit, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::geometry::Plane;

/// A right-handed orthonormal coordinate frame in 3D.
///
/// Invariant: `x`, `y`, `z` are unit length and mutually orthogonal, with
/// `y = z × x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub origin: Point3<f64>,
    pub x: Unit<Vector3<f64>>,
    pub y: Unit<Vector3<f64>>,
    pub z: Unit<Vector3<f64>>,
}

/// An orthonormal coordinate frame in 2D. `y` is the counter-clockwise
/// perpendicular of `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame2d {
    pub origin: Point2<f64>,
    pub x: Unit<Vector2<f64>>,
    pub y: Unit<Vector2<f64>>,
}

impl AxisFrame {
    /// The global frame: origin at zero, axes aligned with the world axes.
    pub fn global() -> Self {
        Self {
            origin: Point3::origin(),
            x: Vector3::x_axis(),
            y: Vector3::y_axis(),
            z: Vector3::z_axis(),
        }
    }

    /// Build a frame from an origin, an optional primary (Z) axis and an
    /// optional reference (X) direction.
    ///
    /// A missing axis defaults to global Z; a missing reference direction
    /// defaults to global X and is re-orthogonalized against the axis. An
    /// explicitly supplied reference direction parallel to the primary axis
    /// within `tolerance` is a [`ConvertError::DegenerateAxis`] failure, as is
    /// any input direction with no usable length. A defaulted reference that
    /// happens to be parallel falls back to the global axis least aligned
    /// with the primary instead of failing.
    pub fn build(
        origin: Point3<f64>,
        axis: Option<&Vector3<f64>>,
        ref_direction: Option<&Vector3<f64>>,
        tolerance: f64,
    ) -> Result<Self> {
        let z = match axis {
            Some(a) => Unit::try_new(*a, tolerance).ok_or_else(|| {
                ConvertError::DegenerateAxis("primary axis has no usable length".into())
            })?,
            None => Vector3::z_axis(),
        };

        let reference = match ref_direction {
            Some(r) => {
                let r = Unit::try_new(*r, tolerance).ok_or_else(|| {
                    ConvertError::DegenerateAxis("reference direction has no usable length".into())
                })?;
                if z.cross(&r).norm() <= tolerance {
                    return Err(ConvertError::DegenerateAxis(
                        "reference direction is parallel to the primary axis".into(),
                    ));
                }
                r.into_inner()
            }
            None => {
                let d = Vector3::x();
                if z.cross(&d).norm() <= tolerance {
                    fallback_reference(&z)
                } else {
                    d
                }
            }
        };

        // Gram-Schmidt: strip the component of the reference along z.
        let x_raw = reference - z.into_inner() * reference.dot(&z);
        let x = Unit::try_new(x_raw, tolerance).ok_or_else(|| {
            ConvertError::DegenerateAxis(
                "reference direction collapses onto the primary axis".into(),
            )
        })?;
        let y = Unit::new_normalize(z.cross(&x));

        Ok(Self { origin, x, y, z })
    }

    /// The plane spanned by this frame: its origin with the primary axis as
    /// the normal.
    pub fn to_plane(&self) -> Plane {
        Plane {
            origin: self.origin,
            normal: self.z,
        }
    }
}

/// Global axis least aligned with `z`, used when the defaulted reference
/// direction turns out parallel to the primary axis.
pub(crate) fn fallback_reference(z: &Unit<Vector3<f64>>) -> Vector3<f64> {
    let ax = z.x.abs();
    let ay = z.y.abs();
    let az = z.z.abs();
    if ax <= ay && ax <= az {
        Vector3::x()
    } else if ay <= az {
        Vector3::y()
    } else {
        Vector3::z()
    }
}

impl AxisFrame2d {
    /// Build a 2D frame from an origin and an optional reference (X)
    /// direction; a missing direction defaults to global X.
    pub fn build(
        origin: Point2<f64>,
        ref_direction: Option<&Vector2<f64>>,
        tolerance: f64,
    ) -> Result<Self> {
        let x = match ref_direction {
            Some(r) => Unit::try_new(*r, tolerance).ok_or_else(|| {
                ConvertError::DegenerateAxis("reference direction has no usable length".into())
            })?,
            None => Vector2::x_axis(),
        };
        let y = Unit::new_unchecked(Vector2::new(-x.y, x.x));
        Ok(Self { origin, x, y })
    }

    /// Embed this frame in 3D at Z=0 (the 2D→3D lift).
    pub fn lift(&self) -> AxisFrame {
        AxisFrame {
            origin: Point3::new(self.origin.x, self.origin.y, 0.0),
            x: Unit::new_unchecked(Vector3::new(self.x.x, self.x.y, 0.0)),
            y: Unit::new_unchecked(Vector3::new(self.y.x, self.y.y, 0.0)),
            z: Vector3::z_axis(),
        }
    }
}
