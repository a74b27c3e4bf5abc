//! Mesh-subsystem error type.
//!
//! Only genuine precondition violations are errors.  "No route exists" is a
//! normal outcome and is modelled as `Ok(None)` by the search and the path
//! facade, never as an `Err`.

use thiserror::Error;

use nav_core::PortalId;

/// Errors produced by `nav-mesh`.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A path was requested against a mesh with zero regions.
    #[error("cannot route on an empty navigation mesh")]
    EmptyMesh,

    /// A portal's endpoints do not share an axis: the mesh is malformed.
    #[error("portal {0} is not axis-aligned")]
    DegeneratePortal(PortalId),
}

pub type MeshResult<T> = Result<T, MeshError>;
