//! Grid coordinates: [`GridLocation`].
//!
//! A location is an `(x, z)` pair on the horizontal plane of the maze. X grows
//! along the grid width, Z along its depth.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLocation {
    pub x: i32,
    pub z: i32,
}

impl GridLocation {
    /// The four orthogonal offsets, in expansion order.
    pub const DIRECTIONS: [Self; 4] = [
        Self::new(1, 0),
        Self::new(0, 1),
        Self::new(-1, 0),
        Self::new(0, -1),
    ];

    /// The four diagonal offsets.
    pub const DIAGONALS: [Self; 4] = [
        Self::new(-1, -1),
        Self::new(1, 1),
        Self::new(-1, 1),
        Self::new(1, -1),
    ];

    /// Create a new location.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Return a location shifted by (dx, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// The four orthogonal neighbours, in [`DIRECTIONS`](Self::DIRECTIONS) order.
    #[inline]
    pub fn neighbors_4(self) -> [Self; 4] {
        Self::DIRECTIONS.map(|d| self + d)
    }

    /// The four diagonal neighbours.
    #[inline]
    pub fn diagonals(self) -> [Self; 4] {
        Self::DIAGONALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one orthogonal move away.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.z - other.z).abs() == 1
    }
}

impl PartialOrd for GridLocation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridLocation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl Add for GridLocation {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for GridLocation {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}
