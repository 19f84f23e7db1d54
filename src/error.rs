// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Typed failures for placement and transform conversion

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors reported by the conversion layer.
///
/// None of these are retried internally: each is a deterministic function of
/// its input, and a wrong-but-plausible transform or normal would corrupt
/// every shape derived from it downstream. Call sites decide whether to skip
/// the offending record or abort a larger batch.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConvertError {
    /// Two directions needed to span a frame are parallel within tolerance,
    /// or an input direction has no usable length.
    #[error("degenerate axis: {0}")]
    DegenerateAxis(String),

    /// A placement parent chain exceeded the depth bound, indicating a cycle
    /// or pathological input.
    #[error("malformed placement hierarchy: parent chain exceeds depth bound {bound}")]
    MalformedHierarchy { bound: usize },

    /// A 2D/3D mix in a placement chain that the lift policy cannot resolve
    /// (a 2D record above a 3D record would require projecting 3D down).
    #[error("dimension mismatch in placement chain at depth {depth}: {reason}")]
    DimensionMismatch { depth: usize, reason: String },

    /// Fewer than 3 effective points, or a zero-area loop, where a
    /// non-degenerate polygon was required.
    #[error("degenerate loop: {0}")]
    DegenerateLoop(String),
}
