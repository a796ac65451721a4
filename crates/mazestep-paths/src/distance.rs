use mazestep_core::GridLocation;

/// Straight-line (L2) distance between two locations.
///
/// Used for both the step cost and the heuristic. Between orthogonal
/// neighbours it is exactly 1, and it never overestimates a 4-way path.
#[inline]
pub fn euclidean(a: GridLocation, b: GridLocation) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dz = f64::from(a.z - b.z);
    (dx * dx + dz * dz).sqrt()
}

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: GridLocation, b: GridLocation) -> i32 {
    (a.x - b.x).abs() + (a.z - b.z).abs()
}
