use std::collections::{HashMap, VecDeque};

use mazestep_core::GridLocation;

use crate::traits::Pather;

/// Fewest orthogonal moves from `from` to `to` through walkable interior
/// cells, or `None` if `to` cannot be reached.
///
/// Exhaustive and unweighted; meant as a reference answer for small grids.
pub fn bfs_distance<P: Pather>(pather: &P, from: GridLocation, to: GridLocation) -> Option<usize> {
    let walkable = |p: GridLocation| pather.is_interior(p) && !pather.is_wall(p);
    if !walkable(from) || !walkable(to) {
        return None;
    }

    let mut dist: HashMap<GridLocation, usize> = HashMap::from([(from, 0)]);
    let mut queue: VecDeque<GridLocation> = VecDeque::from([from]);

    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        if p == to {
            return Some(d);
        }
        for n in p.neighbors_4() {
            if walkable(n) && !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}
