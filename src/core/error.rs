// Copyright @yucwang 2026

use thiserror::Error;

/// Construction-time failures for degenerate geometry. A failed
/// construction is fatal to that object only; already-built structures
/// stay valid.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("quad spanned by degenerate edge vectors (|u x v| = {cross_norm})")]
    DegenerateQuad { cross_norm: f64 },

    #[error("cannot build a BVH over an empty object list")]
    EmptyBvh,
}
