//! **mazestep-core** — grid types shared by the mazestep generator and search.
//!
//! This crate provides [`GridLocation`] coordinates, the [`GridMap`]
//! walkability grid with its permanent boundary wall, the [`MazeError`]
//! taxonomy and the [`MazeConfig`] run configuration.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use config::{MazeConfig, Rediscovery, Strategy};
pub use error::{ConfigError, MazeError};
pub use geom::GridLocation;
pub use grid::{BOUNDARY_SENTINEL, Cell, GridMap, MIN_SIZE};
