// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Input records supplied by the data-model collaborator
//!
//! These are plain value types mirroring the placement and transformation
//! operator records of a BIM exchange model. The conversion layer reads them
//! and never mutates or caches them.

mod operator;
mod placement;

pub use operator::{TransformOperator2d, TransformOperator3d};
pub use placement::{AxisPlacement, ObjectPlacement};
