//! Funnel (string-pulling) smoother: collapse a region corridor into the
//! minimal taut polyline between two concrete points.
//!
//! # Algorithm
//!
//! The corridor is first resolved into a list of *gates*: the shared
//! portals between consecutive regions, each oriented into `(left, right)`
//! endpoints as seen in the direction of travel, closed by a synthetic
//! zero-width gate at the destination.  A funnel anchored at a moving apex
//! then sweeps the gates: each candidate endpoint either narrows the funnel
//! or crosses the opposite boundary, in which case the apex is emitted as a
//! waypoint, relocated to the crossed side's point, and the sweep restarts
//! from the gate after the one that produced that side.
//!
//! # Corner inflation
//!
//! A positive `radius` offsets each interior waypoint along the normalized
//! sum of its normalized incoming and outgoing directions.  All directions
//! are taken from the original polyline so offsets never compound.

use nav_core::{EDGE_EPSILON, Point, PortalId, RegionId};

use crate::mesh::NavMesh;

/// String-pull `corridor` into a polyline from `start` to `end`.
///
/// Returns `None` for an empty corridor, for a single-region corridor that
/// does not contain both endpoints, and for a corridor with a missing
/// portal between consecutive regions (an internal consistency fault, logged
/// distinctly: the search and the mesh disagree on topology).
pub fn pull(
    mesh: &NavMesh,
    start: Point,
    end: Point,
    corridor: &[RegionId],
    radius: f64,
) -> Option<Vec<Point>> {
    if corridor.is_empty() {
        return None;
    }
    if corridor.len() == 1 {
        let square = mesh.square(corridor[0]);
        if square.contains(start) && square.contains(end) {
            return Some(vec![start, end]);
        }
        return None;
    }

    let mut gates = Vec::with_capacity(corridor.len());
    for pair in corridor.windows(2) {
        let portal_id = shared_portal(mesh, pair[0], pair[1])?;
        gates.push(oriented_gate(mesh, portal_id, pair[0], pair[1]));
    }
    // Zero-width gate closes the funnel exactly at the destination.
    gates.push(Gate { left: end, right: end });

    let mut path = run_funnel(start, end, &gates);
    if radius > 0.0 {
        inflate_corners(&mut path, radius);
    }
    Some(path)
}

// ── Gate resolution ───────────────────────────────────────────────────────────

/// A portal oriented for traversal: `left`/`right` as seen walking through
/// it from the preceding region.
#[derive(Copy, Clone)]
struct Gate {
    left: Point,
    right: Point,
}

/// The portal joining `from` and `to`, scanned from `from`'s CSR slice.
fn shared_portal(mesh: &NavMesh, from: RegionId, to: RegionId) -> Option<PortalId> {
    let found = mesh
        .portals_of(from)
        .find(|&id| mesh.portal(id).other(from) == to);
    if found.is_none() {
        // Should be unreachable: the search only chains adjacent regions.
        log::warn!("corridor is disconnected between {from} and {to}; mesh and search disagree");
    }
    found
}

/// Orient a portal's endpoints into `(left, right)` for travel from `from`
/// into `to`, judged by the region centers along the crossing axis (y-up
/// frame: walking +x puts left at +y, walking +y puts left at -x).
fn oriented_gate(mesh: &NavMesh, portal_id: PortalId, from: RegionId, to: RegionId) -> Gate {
    let portal = mesh.portal(portal_id);
    let (a, b) = (portal.start, portal.end);
    let from_center = mesh.square(from).center();
    let to_center = mesh.square(to).center();

    if (a.x - b.x).abs() <= EDGE_EPSILON {
        // Vertical portal, crossed along x.
        let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
        if to_center.x >= from_center.x {
            Gate { left: hi, right: lo }
        } else {
            Gate { left: lo, right: hi }
        }
    } else {
        // Horizontal portal, crossed along y.
        let (lo, hi) = if a.x <= b.x { (a, b) } else { (b, a) };
        if to_center.y >= from_center.y {
            Gate { left: lo, right: hi }
        } else {
            Gate { left: hi, right: lo }
        }
    }
}

// ── Funnel sweep ──────────────────────────────────────────────────────────────

/// Per-sweep funnel state: the apex, the current left/right boundary points
/// with the gates that produced them, the apex-relative boundary vectors,
/// and the opening angle between those vectors.
struct Funnel {
    apex: Point,
    left: Point,
    right: Point,
    left_gate: usize,
    right_gate: usize,
    left_vec: Point,
    right_vec: Point,
    angle: f64,
}

/// Outcome of feeding one gate to the funnel.
enum Step {
    /// Both candidates stayed inside (possibly narrowing the funnel).
    Narrowed,
    /// A candidate crossed the opposite boundary; the apex moves.
    Popped { new_apex: Point, restart: usize },
}

impl Funnel {
    fn seed(apex: Point, gate: Gate, index: usize) -> Self {
        let left_vec = gate.left - apex;
        let right_vec = gate.right - apex;
        Funnel {
            apex,
            left: gate.left,
            right: gate.right,
            left_gate: index,
            right_gate: index,
            left_vec,
            right_vec,
            angle: left_vec.angle_to(right_vec),
        }
    }

    /// Feed the next gate's candidates through the funnel.
    ///
    /// The left candidate pops the *right* side when it crosses clockwise
    /// past the right vector, and vice versa; otherwise a candidate replaces
    /// its own side whenever it closes the funnel angle.
    fn advance(&mut self, gate: Gate, index: usize) -> Step {
        // Left candidate.
        let left_vec = gate.left - self.apex;
        if self.right_vec.cross(left_vec) < 0.0 {
            return Step::Popped { new_apex: self.right, restart: self.right_gate + 1 };
        }
        let left_angle = left_vec.angle_to(self.right_vec);
        if left_angle < self.angle {
            self.left = gate.left;
            self.left_gate = index;
            self.left_vec = left_vec;
            self.angle = left_angle;
        }

        // Right candidate, mirrored against the (possibly updated) left.
        let right_vec = gate.right - self.apex;
        if self.left_vec.cross(right_vec) > 0.0 {
            return Step::Popped { new_apex: self.left, restart: self.left_gate + 1 };
        }
        let right_angle = right_vec.angle_to(self.left_vec);
        if right_angle < self.angle {
            self.right = gate.right;
            self.right_gate = index;
            self.right_vec = right_vec;
            self.angle = right_angle;
        }

        Step::Narrowed
    }
}

fn run_funnel(start: Point, end: Point, gates: &[Gate]) -> Vec<Point> {
    let mut path = Vec::with_capacity(gates.len() + 1);
    let mut apex = start;
    let mut seed = 0;

    'sweep: loop {
        // Seed from the next gate that does not touch the apex: a gate
        // sharing a corner with the apex would open a zero-width funnel and
        // swallow the following turn.
        while seed < gates.len() && (gates[seed].left == apex || gates[seed].right == apex) {
            seed += 1;
        }
        if seed >= gates.len() {
            break;
        }

        let mut funnel = Funnel::seed(apex, gates[seed], seed);
        for index in (seed + 1)..gates.len() {
            match funnel.advance(gates[index], index) {
                Step::Narrowed => {}
                Step::Popped { new_apex, restart } => {
                    path.push(apex);
                    apex = new_apex;
                    seed = restart;
                    continue 'sweep;
                }
            }
        }
        break;
    }

    path.push(apex);
    path.push(end);
    path
}

// ── Corner inflation ──────────────────────────────────────────────────────────

/// Offset interior waypoints by `radius` along the normalized sum of their
/// normalized incoming and outgoing directions.  Directions are measured on
/// the original polyline, never on already-offset points.  A near-zero sum
/// (a full reversal) leaves that waypoint in place.
fn inflate_corners(path: &mut [Point], radius: f64) {
    if path.len() <= 2 {
        return;
    }
    let original = path.to_vec();
    for i in 1..original.len() - 1 {
        let incoming = (original[i] - original[i - 1]).normalized();
        let outgoing = (original[i + 1] - original[i]).normalized();
        let sum = incoming + outgoing;
        let len = sum.length();
        if len <= EDGE_EPSILON {
            continue;
        }
        path[i] = original[i] + sum.scale(radius / len);
    }
}
