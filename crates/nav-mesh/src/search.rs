//! Region-graph search: find an ordered corridor of regions from a start
//! region to a goal region.
//!
//! # Cost semantics
//!
//! The frontier is ordered by the squared distance from the **original start
//! point** to the candidate portal's midpoint, plus the squared start-to-goal
//! distance.  The second term is identical for every candidate of a query and
//! the cost does not accumulate along a sequence, so this is a greedy
//! nearest-portal expansion rather than a shortest-path search.  Consumers
//! depend on the corridor this ordering produces; do not change it to an
//! accumulating cost without revisiting every caller.  Squared distance
//! preserves the ordering of true distance, so no square roots are taken.
//!
//! Ties are broken by frontier insertion order: the heap key carries a
//! monotonically increasing sequence number, giving FIFO behaviour among
//! equal costs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use nav_core::{Point, PortalId, RegionId};

use crate::error::{MeshError, MeshResult};
use crate::mesh::NavMesh;

// ── Frontier candidate ────────────────────────────────────────────────────────

/// A partial region corridor on the frontier, ordered by `(cost, seq)`.
struct Candidate {
    cost: f64,
    /// Insertion counter; breaks cost ties in FIFO order.
    seq: u64,
    regions: Vec<RegionId>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Search the adjacency graph for a corridor from `start_region` to
/// `goal_region`.
///
/// Returns `Ok(Some(corridor))` ending in `goal_region` when the goal is
/// reachable, `Ok(None)` when the frontier drains without reaching it (a
/// normal outcome), and `Err` only for the malformed-mesh precondition of
/// [`MeshError::DegeneratePortal`].
pub fn find_region_path(
    mesh: &NavMesh,
    start_region: RegionId,
    start_point: Point,
    goal_region: RegionId,
    goal_point: Point,
) -> MeshResult<Option<Vec<RegionId>>> {
    // Visited set keyed by region identity.
    let mut visited = vec![false; mesh.region_count()];

    let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
    frontier.push(Reverse(Candidate { cost: 0.0, seq: 0, regions: vec![start_region] }));
    let mut next_seq = 1u64;

    // Constant for the whole query; folded into every candidate's cost.
    let goal_bias = start_point.distance_sq(goal_point);

    while let Some(Reverse(candidate)) = frontier.pop() {
        let Some(&current) = candidate.regions.last() else {
            continue;
        };
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;

        if current == goal_region {
            return Ok(Some(candidate.regions));
        }

        for portal_id in mesh.portals_of(current) {
            let portal = mesh.portal(portal_id);
            let next = portal.other(current);
            if visited[next.index()] {
                continue;
            }
            let mid = checked_midpoint(mesh, portal_id)?;
            let cost = start_point.distance_sq(mid) + goal_bias;

            let mut regions = candidate.regions.clone();
            regions.push(next);
            frontier.push(Reverse(Candidate { cost, seq: next_seq, regions }));
            next_seq += 1;
        }
    }

    Ok(None)
}

/// Midpoint of a portal, validating the axis-alignment invariant first.
///
/// A portal whose endpoints share no axis means the mesh itself is corrupt;
/// that is surfaced immediately rather than producing a skewed crossing
/// point.
fn checked_midpoint(mesh: &NavMesh, portal_id: PortalId) -> MeshResult<Point> {
    let portal = mesh.portal(portal_id);
    if !portal.is_axis_aligned() {
        return Err(MeshError::DegeneratePortal(portal_id));
    }
    Ok(portal.midpoint())
}
