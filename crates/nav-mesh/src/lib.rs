//! `nav-mesh` — navigation-mesh construction, region-graph search, and
//! funnel path smoothing.
//!
//! The engine turns a static set of axis-aligned traversable squares into
//! an immutable connectivity graph, finds a corridor of regions between two
//! world positions, and string-pulls that corridor into a minimal polyline
//! an agent can walk.  The mesh is built once; queries are synchronous,
//! stateless, and safe to run concurrently over a shared `&NavMesh`.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`mesh`]   | `NavMesh` (CSR + R-tree), `MeshBuilder`, `Portal`     |
//! | [`search`] | `find_region_path` — corridor search                  |
//! | [`funnel`] | `pull` — string-pulling and corner inflation          |
//! | [`path`]   | `find_path` — endpoint snapping facade                |
//! | [`error`]  | `MeshError`, `MeshResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |
//!
//! # Example
//!
//! ```
//! use nav_core::{Point, Square};
//! use nav_mesh::{MeshBuilder, find_path};
//!
//! let mut builder = MeshBuilder::new();
//! builder.add_square(Square::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0)));
//! builder.add_square(Square::new(Point::new(10.0, 10.0), Point::new(20.0, 0.0)));
//! let mesh = builder.build();
//!
//! let path = find_path(&mesh, Point::new(2.0, 5.0), Point::new(18.0, 5.0), 0.0)
//!     .expect("mesh is non-empty")
//!     .expect("regions are connected");
//! assert_eq!(path.first(), Some(&Point::new(2.0, 5.0)));
//! assert_eq!(path.last(), Some(&Point::new(18.0, 5.0)));
//! ```

pub mod error;
pub mod funnel;
pub mod mesh;
pub mod path;
pub mod search;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MeshError, MeshResult};
pub use funnel::pull;
pub use mesh::{MeshBuilder, NavMesh, Portal};
pub use path::find_path;
pub use search::find_region_path;
