//! Path facade: resolve query endpoints onto the mesh, run the region
//! search and the funnel, and stitch the result back to the caller's
//! literal coordinates.

use nav_core::{Point, RegionId};

use crate::error::{MeshError, MeshResult};
use crate::funnel;
use crate::mesh::NavMesh;
use crate::search::find_region_path;

/// Compute a walkable polyline from `start` to `end` across `mesh`.
///
/// Endpoints that fall outside every region are snapped to the nearest
/// region boundary for the search and the funnel; the returned polyline is
/// then re-anchored so it always begins at the literal `start` and ends at
/// the literal `end`.
///
/// Returns `Ok(None)` when no route exists, a normal outcome the caller is
/// expected to handle (idle, pick another destination).  `Err` is reserved
/// for precondition violations: an empty mesh, or a malformed portal
/// discovered mid-search.
pub fn find_path(
    mesh: &NavMesh,
    start: Point,
    end: Point,
    radius: f64,
) -> MeshResult<Option<Vec<Point>>> {
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let Some((start_region, seed_start)) = resolve(mesh, start) else {
        return Ok(None);
    };
    let Some((goal_region, seed_end)) = resolve(mesh, end) else {
        return Ok(None);
    };

    let Some(corridor) =
        find_region_path(mesh, start_region, seed_start, goal_region, seed_end)?
    else {
        return Ok(None);
    };

    let Some(mut points) = funnel::pull(mesh, seed_start, seed_end, &corridor, radius) else {
        return Ok(None);
    };

    // Re-anchor at the caller's true coordinates when snapping moved them.
    if seed_start != start {
        points.insert(0, start);
    }
    if seed_end != end {
        points.push(end);
    }

    Ok(Some(points))
}

/// The region owning `p`, or the nearest region plus `p` snapped onto its
/// boundary when `p` is off the mesh.
fn resolve(mesh: &NavMesh, p: Point) -> Option<(RegionId, Point)> {
    if let Some(region) = mesh.locate(p) {
        return Some((region, p));
    }
    mesh.nearest(p)
}
