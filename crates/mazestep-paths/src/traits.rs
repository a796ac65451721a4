use mazestep_core::{GridLocation, GridMap};

/// Read-only view of a grid for searching.
pub trait Pather {
    /// Whether `p` blocks movement. Must be `true` outside the grid.
    fn is_wall(&self, p: GridLocation) -> bool;

    /// Cells along X, boundary ring included.
    fn width(&self) -> i32;

    /// Cells along Z, boundary ring included.
    fn depth(&self) -> i32;

    /// Whether `p` lies strictly inside the boundary ring.
    fn is_interior(&self, p: GridLocation) -> bool {
        p.x >= 1 && p.x < self.width() - 1 && p.z >= 1 && p.z < self.depth() - 1
    }

    /// Walkable interior cells in row-major order.
    fn corridors(&self) -> Vec<GridLocation> {
        let mut out = Vec::new();
        for z in 1..self.depth() - 1 {
            for x in 1..self.width() - 1 {
                let p = GridLocation::new(x, z);
                if !self.is_wall(p) {
                    out.push(p);
                }
            }
        }
        out
    }
}

impl Pather for GridMap {
    #[inline]
    fn is_wall(&self, p: GridLocation) -> bool {
        GridMap::is_wall(self, p)
    }

    #[inline]
    fn width(&self) -> i32 {
        GridMap::width(self)
    }

    #[inline]
    fn depth(&self) -> i32 {
        GridMap::depth(self)
    }

    fn corridors(&self) -> Vec<GridLocation> {
        GridMap::corridors(self).collect()
    }
}
