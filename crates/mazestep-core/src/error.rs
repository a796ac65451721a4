//! Error types shared by the mazestep crates.

use thiserror::Error;

use crate::geom::GridLocation;

/// Errors reported synchronously by grid, generator and search operations.
///
/// A search that exhausts its frontier is not an error; it finishes with
/// a `NoPath` outcome instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The requested grid, generator or search setup cannot be honoured.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// A search operation was invoked before a search was begun, or a path
    /// was requested before the search finished.
    #[error("search not ready: begin a search and run it to completion first")]
    NotReady,
}

/// Details for [`MazeError::InvalidConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid cannot hold the permanent boundary wall ring.
    #[error("grid {width}x{depth} is smaller than the 3x3 minimum")]
    GridTooSmall { width: i32, depth: i32 },
    /// The grid has more cells than can be indexed.
    #[error("grid {width}x{depth} is too large")]
    GridTooLarge { width: i32, depth: i32 },
    /// Random endpoint selection needs two distinct walkable cells.
    #[error("need at least 2 corridor cells to pick endpoints, found {found}")]
    TooFewCorridors { found: usize },
    /// A search endpoint is a wall or lies on the boundary ring.
    #[error("{0} is not a walkable interior cell")]
    NotWalkable(GridLocation),
    /// The carving seed is outside the grid interior.
    #[error("carve seed {0} is outside the grid interior")]
    SeedOutOfBounds(GridLocation),
    /// A fill probability above 100 percent.
    #[error("corridor percentage {0} is above 100")]
    BadPercent(u32),
    /// A text row whose width differs from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    BadRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An unknown character, or a corridor on the boundary ring, in text input.
    #[error("invalid cell \u{201c}{ch}\u{201d} at {at}")]
    BadRune { ch: char, at: GridLocation },
}
