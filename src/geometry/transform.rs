// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Rigid and affine transforms built from transformation operator records
//!
//! The builder inspects the operator's scale fields and produces the
//! narrowest correct representation: a [`RigidTransform`] when the scale is
//! absent or uniform, an [`AffineTransform`] when per-axis factors differ.
//! Uniform scale stays visible as a scalar annotation on the rigid form
//! instead of being baked into the rotation, so a rigid-only consumer can
//! reject it explicitly rather than silently losing it.

use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::geometry::frame::{fallback_reference, AxisFrame};
use crate::model::{TransformOperator2d, TransformOperator3d};

/// A distance-preserving transform: rotation + translation, annotated with a
/// uniform scale factor (1.0 for true placements).
///
/// Points map as `p ↦ R·(s·p) + t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    pub rotation: Rotation3<f64>,
    pub translation: Vector3<f64>,
    pub scale: f64,
}

/// A general affine transform: rotation + translation + independent per-axis
/// scale factors applied in the local frame before rotation.
///
/// Points map as `p ↦ R·(S·p) + t` with `S = diag(scale)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub rotation: Rotation3<f64>,
    pub translation: Vector3<f64>,
    pub scale: Vector3<f64>,
}

/// Tagged result of operator conversion; the caller inspects which variant
/// was produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    Rigid(RigidTransform),
    Affine(AffineTransform),
}

impl RigidTransform {
    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
            translation: Vector3::zeros(),
            scale: 1.0,
        }
    }

    /// The transform mapping local coordinates of `frame` into the frame's
    /// parent space.
    pub fn from_frame(frame: &AxisFrame) -> Self {
        let basis = Matrix3::from_columns(&[
            frame.x.into_inner(),
            frame.y.into_inner(),
            frame.z.into_inner(),
        ]);
        Self {
            rotation: Rotation3::from_matrix_unchecked(basis),
            translation: frame.origin.coords,
            scale: 1.0,
        }
    }

    /// Re-type a pre-composed homogeneous matrix as a rigid transform.
    ///
    /// No re-derivation or orthonormalization happens here; the caller
    /// guarantees the upper-left block is a rotation.
    pub fn from_matrix(m: &Matrix4<f64>) -> Self {
        let rotation = Rotation3::from_matrix_unchecked(m.fixed_view::<3, 3>(0, 0).into_owned());
        let translation = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
        Self {
            rotation,
            translation,
            scale: 1.0,
        }
    }

    /// Compose with a transform expressed in this transform's local space:
    /// the result applies `local` first, then `self`.
    pub fn compose(&self, local: &RigidTransform) -> Self {
        Self {
            rotation: self.rotation * local.rotation,
            translation: self.rotation * (local.translation * self.scale) + self.translation,
            scale: self.scale * local.scale,
        }
    }

    pub fn transform_point(&self, p: &nalgebra::Point3<f64>) -> nalgebra::Point3<f64> {
        self.rotation * (p * self.scale) + self.translation
    }

    /// Transform a direction; translation does not apply.
    pub fn transform_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * (v * self.scale)
    }

    pub fn to_matrix(&self) -> Matrix4<f64> {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&(self.rotation.matrix() * self.scale));
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }

    /// Inverse transform, or `None` when the annotated scale is zero.
    pub fn try_inverse(&self) -> Option<Self> {
        if self.scale == 0.0 {
            return None;
        }
        let inv_rotation = self.rotation.inverse();
        let inv_scale = 1.0 / self.scale;
        Some(Self {
            rotation: inv_rotation,
            translation: -(inv_rotation * (self.translation * inv_scale)),
            scale: inv_scale,
        })
    }
}

impl AffineTransform {
    pub fn transform_point(&self, p: &nalgebra::Point3<f64>) -> nalgebra::Point3<f64> {
        let scaled = nalgebra::Point3::new(
            p.x * self.scale.x,
            p.y * self.scale.y,
            p.z * self.scale.z,
        );
        self.rotation * scaled + self.translation
    }

    pub fn to_matrix(&self) -> Matrix4<f64> {
        let linear = self.rotation.matrix() * Matrix3::from_diagonal(&self.scale);
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&linear);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }

    /// Inverse as a homogeneous matrix, or `None` when any axis scale is
    /// zero. The inverse of scale-then-rotate is rotate-then-scale, which
    /// this representation cannot hold directly.
    pub fn try_inverse(&self) -> Option<Matrix4<f64>> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 || self.scale.z == 0.0 {
            return None;
        }
        self.to_matrix().try_inverse()
    }
}

impl Transform {
    pub fn is_rigid(&self) -> bool {
        matches!(self, Transform::Rigid(_))
    }

    pub fn to_matrix(&self) -> Matrix4<f64> {
        match self {
            Transform::Rigid(t) => t.to_matrix(),
            Transform::Affine(t) => t.to_matrix(),
        }
    }

    /// Build a transform from a 3D cartesian transformation operator.
    ///
    /// Axis defaults are global X/Y/Z; explicit axes win in the priority
    /// order axis3 > axis1 > axis2, with defaulted axes orthogonalized
    /// against the explicit ones. When axis1 is absent but axis2 is given,
    /// the in-plane basis is seeded from axis2, so axis2 alone orients the
    /// frame. When both in-plane axes are explicit and axis2 points to the
    /// far side of the local XZ plane, the frame is mirrored; the mirror is
    /// folded into a negative Y scale, which makes the result affine.
    pub fn from_operator(op: &TransformOperator3d, tolerance: f64) -> Result<Transform> {
        let z = match op.axis3 {
            Some(a) => Unit::try_new(a, tolerance).ok_or_else(|| {
                ConvertError::DegenerateAxis("axis3 has no usable length".into())
            })?,
            None => Vector3::z_axis(),
        };

        let (s1, mut s2, s3) = op.effective_scales();

        let (x, y) = match (op.axis1, op.axis2) {
            (Some(a1), a2) => {
                let a1 = Unit::try_new(a1, tolerance).ok_or_else(|| {
                    ConvertError::DegenerateAxis("axis1 has no usable length".into())
                })?;
                if z.cross(&a1).norm() <= tolerance {
                    return Err(ConvertError::DegenerateAxis(
                        "axis1 is parallel to axis3".into(),
                    ));
                }
                let x =
                    Unit::new_normalize(a1.into_inner() - z.into_inner() * a1.dot(&z));
                let y = Unit::new_normalize(z.cross(&x));

                if let Some(a2) = a2 {
                    let a2 = Unit::try_new(a2, tolerance).ok_or_else(|| {
                        ConvertError::DegenerateAxis("axis2 has no usable length".into())
                    })?;
                    // The component of axis2 along y is all that distinguishes
                    // it from a vector in the xz-plane, which cannot orient
                    // the frame.
                    let residual = a2.into_inner()
                        - z.into_inner() * a2.dot(&z)
                        - x.into_inner() * a2.dot(&x);
                    if residual.norm() <= tolerance {
                        return Err(ConvertError::DegenerateAxis(
                            "axis2 lies in the plane of axis1 and axis3".into(),
                        ));
                    }
                    if a2.dot(&y) < 0.0 {
                        log::debug!(
                            "operator axis2 flips orientation; folding mirror into Y scale"
                        );
                        s2 = -s2;
                    }
                }
                (x, y)
            }
            (None, Some(a2)) => {
                let a2 = Unit::try_new(a2, tolerance).ok_or_else(|| {
                    ConvertError::DegenerateAxis("axis2 has no usable length".into())
                })?;
                if z.cross(&a2).norm() <= tolerance {
                    return Err(ConvertError::DegenerateAxis(
                        "axis2 is parallel to axis3".into(),
                    ));
                }
                let y =
                    Unit::new_normalize(a2.into_inner() - z.into_inner() * a2.dot(&z));
                let x = Unit::new_normalize(y.cross(&z));
                (x, y)
            }
            (None, None) => {
                let d = Vector3::x();
                let seed = if z.cross(&d).norm() <= tolerance {
                    fallback_reference(&z)
                } else {
                    d
                };
                let x = Unit::new_normalize(seed - z.into_inner() * seed.dot(&z));
                let y = Unit::new_normalize(z.cross(&x));
                (x, y)
            }
        };

        let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[
            x.into_inner(),
            y.into_inner(),
            z.into_inner(),
        ]));
        let translation = op.origin.coords;

        Ok(classify(rotation, translation, s1, s2, s3))
    }

    /// Build a transform from a 2D operator, lifted into the plane Z=0.
    pub fn from_operator_2d(op: &TransformOperator2d, tolerance: f64) -> Result<Transform> {
        let x = match op.axis1 {
            Some(a) => Unit::try_new(a, tolerance).ok_or_else(|| {
                ConvertError::DegenerateAxis("axis1 has no usable length".into())
            })?,
            None => nalgebra::Vector2::x_axis(),
        };
        let y = nalgebra::Vector2::new(-x.y, x.x);

        let (s1, mut s2) = op.effective_scales();
        if let Some(a2) = op.axis2 {
            let a2 = Unit::try_new(a2, tolerance).ok_or_else(|| {
                ConvertError::DegenerateAxis("axis2 has no usable length".into())
            })?;
            if (a2.x * x.y - a2.y * x.x).abs() <= tolerance {
                return Err(ConvertError::DegenerateAxis(
                    "axis2 is parallel to axis1".into(),
                ));
            }
            if a2.dot(&y) < 0.0 {
                log::debug!("operator axis2 flips orientation; folding mirror into Y scale");
                s2 = -s2;
            }
        }

        let angle = x.y.atan2(x.x);
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        let translation = Vector3::new(op.origin.x, op.origin.y, 0.0);

        // A uniform 2D scale is carried on the lifted Z axis as well, so the
        // operator keeps its rigid-with-annotation form; Z=0 geometry never
        // sees the third factor.
        let s3 = if s1 == s2 { s1 } else { 1.0 };
        Ok(classify(rotation, translation, s1, s2, s3))
    }
}

/// Pick the narrowest representation for the given scale factors.
///
/// Comparison is exact: only a factor written as something other than 1.0 in
/// the source record makes the result scaled.
fn classify(
    rotation: Rotation3<f64>,
    translation: Vector3<f64>,
    s1: f64,
    s2: f64,
    s3: f64,
) -> Transform {
    if s1 == s2 && s2 == s3 {
        if s1 != 1.0 {
            log::debug!("uniform scale {s1} kept as annotation on rigid transform");
        }
        Transform::Rigid(RigidTransform {
            rotation,
            translation,
            scale: s1,
        })
    } else {
        Transform::Affine(AffineTransform {
            rotation,
            translation,
            scale: Vector3::new(s1, s2, s3),
        })
    }
}
