//! The walkability grid shared by generators and searches.
//!
//! [`GridMap`] owns a `width × depth` array of [`Cell`] values. The outer ring
//! of cells is a permanent wall: [`GridMap::carve`] refuses to open it, so any
//! neighbour of an interior cell is always a valid index.

use std::fmt;

use crate::error::{ConfigError, MazeError};
use crate::geom::GridLocation;

/// Returned by the neighbour counters for locations on or outside the
/// boundary ring. No real count can reach it.
pub const BOUNDARY_SENTINEL: u8 = 5;

/// Smallest width or depth able to hold a single interior cell.
pub const MIN_SIZE: i32 = 3;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Wall,
    Corridor,
}

impl Cell {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Corridor)
    }

    /// The character used by the text form of a grid.
    pub const fn rune(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Corridor => '.',
        }
    }
}

/// A fixed-size 2D grid of walls and corridors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    cells: Vec<Cell>,
    width: i32,
    depth: i32,
}

impl GridMap {
    /// Create a grid with every cell set to [`Cell::Wall`].
    pub fn new(width: i32, depth: i32) -> Result<Self, MazeError> {
        if width < MIN_SIZE || depth < MIN_SIZE {
            return Err(ConfigError::GridTooSmall { width, depth }.into());
        }
        let len = width
            .checked_mul(depth)
            .ok_or(ConfigError::GridTooLarge { width, depth })?;
        Ok(Self {
            cells: vec![Cell::Wall; len as usize],
            width,
            depth,
        })
    }

    /// Parse a grid from rows of `#` (wall) and `.` (corridor).
    ///
    /// The first row is `z = 0`; within a row the first character is `x = 0`.
    /// Corridors on the boundary ring are rejected.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        // Saturated sizes are rejected by `new` as too large.
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let d = i32::try_from(rows.len()).unwrap_or(i32::MAX);
        let mut grid = Self::new(w, d)?;
        for (z, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(ConfigError::BadRow {
                    row: z,
                    expected: width,
                    found,
                }
                .into());
            }
            for (x, ch) in row.chars().enumerate() {
                let at = GridLocation::new(x as i32, z as i32);
                match ch {
                    '#' => {}
                    '.' if grid.is_interior(at) => {
                        grid.carve(at);
                    }
                    _ => return Err(ConfigError::BadRune { ch, at }.into()),
                }
            }
        }
        Ok(grid)
    }

    /// Number of cells along X.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of cells along Z.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    #[inline]
    fn index(&self, p: GridLocation) -> usize {
        (p.z * self.width + p.x) as usize
    }

    /// Whether `p` is inside the grid (boundary ring included).
    #[inline]
    pub fn contains(&self, p: GridLocation) -> bool {
        p.x >= 0 && p.x < self.width && p.z >= 0 && p.z < self.depth
    }

    /// Whether `p` is inside the grid and strictly inside the boundary ring.
    #[inline]
    pub fn is_interior(&self, p: GridLocation) -> bool {
        p.x > 0 && p.x < self.width - 1 && p.z > 0 && p.z < self.depth - 1
    }

    /// Whether `p` lies on the permanent boundary ring.
    #[inline]
    pub fn is_boundary(&self, p: GridLocation) -> bool {
        self.contains(p) && !self.is_interior(p)
    }

    /// Get the cell at `p`, or `None` if out of range.
    pub fn at(&self, p: GridLocation) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` blocks movement. Out-of-range locations are walls.
    #[inline]
    pub fn is_wall(&self, p: GridLocation) -> bool {
        !self.at(p).is_some_and(Cell::is_walkable)
    }

    /// Open `p` as a corridor.
    ///
    /// Returns `false`, leaving the grid untouched, when `p` is on the boundary
    /// ring or out of range.
    pub fn carve(&mut self, p: GridLocation) -> bool {
        if !self.is_interior(p) {
            return false;
        }
        let idx = self.index(p);
        self.cells[idx] = Cell::Corridor;
        true
    }

    /// Close `p` back into a wall. Does nothing if out of range.
    pub fn fill_wall(&mut self, p: GridLocation) {
        if self.contains(p) {
            let idx = self.index(p);
            self.cells[idx] = Cell::Wall;
        }
    }

    fn count_corridors(&self, p: GridLocation, offsets: [GridLocation; 4]) -> u8 {
        if !self.is_interior(p) {
            return BOUNDARY_SENTINEL;
        }
        offsets
            .into_iter()
            .filter(|&d| !self.is_wall(p + d))
            .count() as u8
    }

    /// Count the orthogonal neighbours of `p` that are corridors.
    ///
    /// Returns [`BOUNDARY_SENTINEL`] when `p` is on or outside the boundary.
    pub fn count_orthogonal_corridor_neighbors(&self, p: GridLocation) -> u8 {
        self.count_corridors(p, GridLocation::DIRECTIONS)
    }

    /// Count the diagonal neighbours of `p` that are corridors.
    ///
    /// Returns [`BOUNDARY_SENTINEL`] when `p` is on or outside the boundary.
    pub fn count_diagonal_corridor_neighbors(&self, p: GridLocation) -> u8 {
        self.count_corridors(p, GridLocation::DIAGONALS)
    }

    /// Sum of the orthogonal and diagonal counts (sentinels included).
    pub fn count_all_corridor_neighbors(&self, p: GridLocation) -> u8 {
        self.count_orthogonal_corridor_neighbors(p) + self.count_diagonal_corridor_neighbors(p)
    }

    /// Iterate over every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = GridLocation> + use<> {
        let (width, depth) = (self.width, self.depth);
        (0..depth).flat_map(move |z| (0..width).map(move |x| GridLocation::new(x, z)))
    }

    /// Iterate over corridor locations in row-major order.
    pub fn corridors(&self) -> impl Iterator<Item = GridLocation> + '_ {
        self.locations().filter(|&p| !self.is_wall(p))
    }

    /// Number of corridor cells.
    pub fn corridor_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walkable()).count()
    }

    /// The text form, one string per row.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| c.rune()).collect())
            .collect()
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

// Serialised as its text rows so that deserialisation re-checks the boundary.
#[cfg(feature = "serde")]
impl serde::Serialize for GridMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        GridMap::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serialises_as_rows() {
        let g = GridMap::from_rows(&["###", "#.#", "###"]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r####"["###","#.#","###"]"####);
        let back: GridMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn deserialise_rejects_open_boundary() {
        let res: Result<GridMap, _> = serde_json::from_str(r####"["#.#","#.#","###"]"####);
        assert!(res.is_err());
    }
}
