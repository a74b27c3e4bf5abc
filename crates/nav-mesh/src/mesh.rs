//! Navigation-mesh representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `RegionId r`, the portals on its boundary occupy the slice:
//!
//! ```text
//! adj_portal[ adj_start[r] .. adj_start[r+1] ]
//! ```
//!
//! Each adjacency is stored as a **single** [`Portal`] record referenced by
//! `PortalId` from both of its regions, so the two sides can never drift out
//! of sync.  Portal order within a region's slice is the insertion order of
//! the pairwise build pass; the region search depends on that order for
//! deterministic tie-breaking.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the region rectangles answers the two
//! queries the path facade needs: which region contains a point, and which
//! region is nearest to an off-mesh point.
//!
//! # Immutability
//!
//! A `NavMesh` is frozen by [`MeshBuilder::build`] and exposes no mutation
//! afterwards, so concurrent path queries may share one `&NavMesh` across
//! threads without locking.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use nav_core::{EDGE_EPSILON, Point, PortalId, RegionId, Square};

// ── R-tree region entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a region's rectangle with its
/// `RegionId`.
#[derive(Clone)]
struct RegionEntry {
    min: [f64; 2], // [min x, min y]
    max: [f64; 2], // [max x, max y]
    id: RegionId,
}

impl RTreeObject for RegionEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PointDistance for RegionEntry {
    /// Squared Euclidean distance from `point` to the rectangle; zero inside.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = (self.min[0] - point[0]).max(0.0).max(point[0] - self.max[0]);
        let dy = (self.min[1] - point[1]).max(0.0).max(point[1] - self.max[1]);
        dx * dx + dy * dy
    }

    /// Boundary-inclusive containment.
    fn contains_point(&self, point: &[f64; 2]) -> bool {
        point[0] >= self.min[0]
            && point[0] <= self.max[0]
            && point[1] >= self.min[1]
            && point[1] <= self.max[1]
    }
}

// ── Portal ────────────────────────────────────────────────────────────────────

/// The shared boundary segment between two adjacent regions.
///
/// Stored once per adjacency; both regions reference the same record.  The
/// endpoints share exactly one coordinate axis (the segment is vertical or
/// horizontal).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portal {
    pub start: Point,
    pub end: Point,
    /// The two regions this portal joins, in build order (lower id first).
    pub regions: [RegionId; 2],
}

impl Portal {
    /// The region on the far side of the portal from `region`.
    #[inline]
    pub fn other(&self, region: RegionId) -> RegionId {
        if self.regions[0] == region { self.regions[1] } else { self.regions[0] }
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// `true` when the endpoints share an axis within [`EDGE_EPSILON`].
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        (self.start.x - self.end.x).abs() <= EDGE_EPSILON
            || (self.start.y - self.end.y).abs() <= EDGE_EPSILON
    }
}

// ── NavMesh ───────────────────────────────────────────────────────────────────

/// Immutable navigation mesh: region rectangles, portal records, CSR
/// adjacency, and a spatial index for point queries.
///
/// Do not construct directly; use [`MeshBuilder`].
pub struct NavMesh {
    /// Region rectangles.  Indexed by `RegionId`.
    pub(crate) squares: Vec<Square>,

    /// One record per adjacency.  Indexed by `PortalId`.
    pub(crate) portals: Vec<Portal>,

    /// CSR row pointer.  Region `r`'s portals are at
    /// `adj_portal[adj_start[r] .. adj_start[r+1]]`.  Length = regions + 1.
    pub(crate) adj_start: Vec<u32>,

    /// CSR column array of portal ids, ordered per region by build order.
    pub(crate) adj_portal: Vec<PortalId>,

    spatial_idx: RTree<RegionEntry>,
}

impl NavMesh {
    /// Construct a mesh with no regions.
    ///
    /// Legal to hold, but any path request against it fails with
    /// [`MeshError::EmptyMesh`](crate::MeshError::EmptyMesh).
    pub fn empty() -> Self {
        MeshBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn region_count(&self) -> usize {
        self.squares.len()
    }

    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    // ── Element access ────────────────────────────────────────────────────

    #[inline]
    pub fn square(&self, region: RegionId) -> Square {
        self.squares[region.index()]
    }

    #[inline]
    pub fn portal(&self, portal: PortalId) -> &Portal {
        &self.portals[portal.index()]
    }

    /// Iterator over the `PortalId`s on `region`'s boundary, in build order.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn portals_of(&self, region: RegionId) -> impl Iterator<Item = PortalId> + '_ {
        let start = self.adj_start[region.index()] as usize;
        let end = self.adj_start[region.index() + 1] as usize;
        self.adj_portal[start..end].iter().copied()
    }

    /// Number of portals on `region`'s boundary.
    #[inline]
    pub fn degree(&self, region: RegionId) -> usize {
        let start = self.adj_start[region.index()] as usize;
        let end = self.adj_start[region.index() + 1] as usize;
        end - start
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The region containing `p` (boundary inclusive), or `None` if `p` is
    /// off the mesh.  When `p` lies on a shared boundary the lowest
    /// `RegionId` wins, keeping repeated queries deterministic.
    pub fn locate(&self, p: Point) -> Option<RegionId> {
        self.spatial_idx
            .locate_all_at_point(&[p.x, p.y])
            .map(|e| e.id)
            .min()
    }

    /// The region nearest to `p` plus the closest point on its boundary.
    ///
    /// Returns `None` only for an empty mesh.  Used to snap off-mesh query
    /// endpoints onto the mesh.
    pub fn nearest(&self, p: Point) -> Option<(RegionId, Point)> {
        self.spatial_idx.nearest_neighbor(&[p.x, p.y]).map(|e| {
            let snapped = self.squares[e.id.index()].closest_point(p);
            (e.id, snapped)
        })
    }
}

// ── MeshBuilder ───────────────────────────────────────────────────────────────

/// Collect region squares, then freeze them into a [`NavMesh`] with
/// [`build`](Self::build).
///
/// `build()` runs the O(n²) pairwise adjacency pass: every unordered pair of
/// squares whose boundaries coincide along one axis (within
/// [`EDGE_EPSILON`]) and overlap with positive length on the other gets a
/// single shared [`Portal`].  Gaps and point-touching corners produce no
/// portal; a square with no neighbours simply ends up with zero portals.
///
/// # Example
///
/// ```
/// use nav_core::{Point, Square};
/// use nav_mesh::MeshBuilder;
///
/// let mut b = MeshBuilder::new();
/// b.add_square(Square::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0)));
/// b.add_square(Square::new(Point::new(10.0, 15.0), Point::new(20.0, 5.0)));
/// let mesh = b.build();
/// assert_eq!(mesh.region_count(), 2);
/// assert_eq!(mesh.portal_count(), 1); // one shared record, two references
/// ```
pub struct MeshBuilder {
    squares: Vec<Square>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self { squares: Vec::new() }
    }

    /// Pre-allocate for the expected number of regions.
    pub fn with_capacity(regions: usize) -> Self {
        Self { squares: Vec::with_capacity(regions) }
    }

    /// Add a region square and return its `RegionId` (sequential from 0).
    pub fn add_square(&mut self, square: Square) -> RegionId {
        let id = RegionId(self.squares.len() as u32);
        self.squares.push(square);
        id
    }

    pub fn region_count(&self) -> usize {
        self.squares.len()
    }

    /// Consume the builder and produce an immutable [`NavMesh`].
    ///
    /// Adjacency lists are accumulated into temporary per-region `Vec`s and
    /// frozen into the CSR arrays, so a partially-linked mesh is never
    /// observable.  Time complexity: O(n²) pair scan + O(n log n) R-tree
    /// bulk load.
    pub fn build(self) -> NavMesh {
        let n = self.squares.len();
        let mut portals: Vec<Portal> = Vec::new();
        let mut adjacency: Vec<Vec<PortalId>> = vec![Vec::new(); n];

        for a in 0..n {
            for b in (a + 1)..n {
                let Some((start, end)) = shared_boundary(&self.squares[a], &self.squares[b])
                else {
                    continue;
                };
                let id = PortalId(portals.len() as u32);
                portals.push(Portal {
                    start,
                    end,
                    regions: [RegionId(a as u32), RegionId(b as u32)],
                });
                adjacency[a].push(id);
                adjacency[b].push(id);
            }
        }

        // Freeze per-region lists into CSR form.
        let mut adj_start = Vec::with_capacity(n + 1);
        let mut adj_portal = Vec::with_capacity(portals.len() * 2);
        adj_start.push(0u32);
        for list in &adjacency {
            adj_portal.extend_from_slice(list);
            adj_start.push(adj_portal.len() as u32);
        }

        // Bulk-load the R-tree for O(n log n) construction.
        let entries: Vec<RegionEntry> = self
            .squares
            .iter()
            .enumerate()
            .map(|(i, sq)| RegionEntry {
                min: [sq.top_left.x, sq.bottom_right.y],
                max: [sq.bottom_right.x, sq.top_left.y],
                id: RegionId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        NavMesh { squares: self.squares, portals, adj_start, adj_portal, spatial_idx }
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Adjacency detection ───────────────────────────────────────────────────────

/// The shared boundary segment of two squares, or `None` when they are not
/// adjacent.  Point-touching (zero-length overlap) does not count.
fn shared_boundary(a: &Square, b: &Square) -> Option<(Point, Point)> {
    // a's right side against b's left side, and the mirror.
    if (a.bottom_right.x - b.top_left.x).abs() <= EDGE_EPSILON {
        if let Some(p) = vertical_portal(a.bottom_right.x, a, b) {
            return Some(p);
        }
    }
    if (b.bottom_right.x - a.top_left.x).abs() <= EDGE_EPSILON {
        if let Some(p) = vertical_portal(b.bottom_right.x, a, b) {
            return Some(p);
        }
    }
    // a's top side against b's bottom side, and the mirror.
    if (a.top_left.y - b.bottom_right.y).abs() <= EDGE_EPSILON {
        if let Some(p) = horizontal_portal(a.top_left.y, a, b) {
            return Some(p);
        }
    }
    if (b.top_left.y - a.bottom_right.y).abs() <= EDGE_EPSILON {
        if let Some(p) = horizontal_portal(b.top_left.y, a, b) {
            return Some(p);
        }
    }
    None
}

/// Portal along `x` spanning the positive-length y-overlap of `a` and `b`.
fn vertical_portal(x: f64, a: &Square, b: &Square) -> Option<(Point, Point)> {
    let lo = a.bottom_right.y.max(b.bottom_right.y);
    let hi = a.top_left.y.min(b.top_left.y);
    (hi > lo).then(|| (Point::new(x, lo), Point::new(x, hi)))
}

/// Portal along `y` spanning the positive-length x-overlap of `a` and `b`.
fn horizontal_portal(y: f64, a: &Square, b: &Square) -> Option<(Point, Point)> {
    let lo = a.top_left.x.max(b.top_left.x);
    let hi = a.bottom_right.x.min(b.bottom_right.x);
    (hi > lo).then(|| (Point::new(lo, y), Point::new(hi, y)))
}
