//! Run configuration shared by the generator, the search engine and drivers.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, MazeError};
use crate::geom::GridLocation;
use crate::grid::MIN_SIZE;

/// Which carving algorithm builds the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Independent coin flip per interior cell. No connectivity guarantee.
    #[cfg_attr(feature = "serde", serde(rename = "random"))]
    RandomFill,
    /// Depth-first carving with one-cell-wide corridors.
    #[default]
    Recursive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RandomFill => "random",
            Self::Recursive => "recursive",
        })
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "random-fill" => Ok(Self::RandomFill),
            "recursive" => Ok(Self::Recursive),
            other => Err(format!("unknown strategy `{other}` (expected random or recursive)")),
        }
    }
}

/// What a search does when it rediscovers a location already on the open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rediscovery {
    /// Reparent only when the new path is strictly cheaper.
    #[default]
    Improve,
    /// Always reparent to the node being expanded.
    Overwrite,
}

/// Everything needed to build a grid and search it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Cells along X, boundary ring included.
    pub width: i32,
    /// Cells along Z, boundary ring included.
    pub depth: i32,
    /// World units per cell. Only drivers that place geometry use it.
    pub scale: f32,
    /// Seed for the random source. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub strategy: Strategy,
    /// First cell opened by [`Strategy::Recursive`].
    pub carve_seed: GridLocation,
    /// Chance, in percent, that [`Strategy::RandomFill`] opens a cell.
    pub corridor_percent: u32,
    pub rediscovery: Rediscovery,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 30,
            depth: 30,
            scale: 6.0,
            seed: None,
            strategy: Strategy::default(),
            carve_seed: GridLocation::new(5, 5),
            corridor_percent: 50,
            rediscovery: Rediscovery::default(),
        }
    }
}

impl MazeConfig {
    /// Check the values that would otherwise fail deep inside generation.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width < MIN_SIZE || self.depth < MIN_SIZE {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                depth: self.depth,
            }
            .into());
        }
        match self.strategy {
            Strategy::RandomFill if self.corridor_percent > 100 => {
                Err(ConfigError::BadPercent(self.corridor_percent).into())
            }
            Strategy::Recursive => {
                let s = self.carve_seed;
                if s.x <= 0 || s.x >= self.width - 1 || s.z <= 0 || s.z >= self.depth - 1 {
                    Err(ConfigError::SeedOutOfBounds(s).into())
                } else {
                    Ok(())
                }
            }
            Strategy::RandomFill => Ok(()),
        }
    }
}
