//! `nav-core` — foundational types for the rect-navmesh pathfinding engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                                    |
//! |---------|---------------------------------------------|
//! | [`geo`] | `Point`, `Square`, `EDGE_EPSILON`           |
//! | [`ids`] | `RegionId`, `PortalId`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{EDGE_EPSILON, Point, Square};
pub use ids::{PortalId, RegionId};
