//! Carving strategies and the [`MazeGen`] driver.

use log::debug;
use mazestep_core::{ConfigError, GridLocation, GridMap, MazeConfig, MazeError, Strategy};
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

/// An algorithm that opens corridors in a grid.
pub trait CarveStrategy {
    /// Carve into `grid` using `rng`. Returns the number of cells opened.
    fn carve<R: Rng + ?Sized>(&self, grid: &mut GridMap, rng: &mut R) -> Result<usize, MazeError>;
}

/// Opens each interior cell independently with a fixed probability.
///
/// The result may contain isolated pockets, so two corridor cells are not
/// guaranteed to be connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomFill {
    /// Chance, in percent, that a cell becomes a corridor.
    pub corridor_percent: u32,
}

impl Default for RandomFill {
    fn default() -> Self {
        Self { corridor_percent: 50 }
    }
}

impl CarveStrategy for RandomFill {
    fn carve<R: Rng + ?Sized>(&self, grid: &mut GridMap, rng: &mut R) -> Result<usize, MazeError> {
        if self.corridor_percent > 100 {
            return Err(ConfigError::BadPercent(self.corridor_percent).into());
        }
        let mut carved = 0;
        for p in grid.locations() {
            if !grid.is_interior(p) {
                continue;
            }
            if rng.random_range(0..100u32) < self.corridor_percent && grid.carve(p) {
                carved += 1;
            }
        }
        debug!(
            "random fill at {}% opened {carved} of {} interior cells",
            self.corridor_percent,
            (grid.width() - 2) * (grid.depth() - 2)
        );
        Ok(carved)
    }
}

/// Randomised depth-first carving from a seed cell.
///
/// A cell is opened only while it touches at most one corridor orthogonally,
/// so no 2×2 block of corridors can form. Each opened cell shuffles the four
/// directions once and visits its neighbours depth-first in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveCarve {
    pub seed: GridLocation,
}

impl Default for RecursiveCarve {
    fn default() -> Self {
        Self {
            seed: GridLocation::new(5, 5),
        }
    }
}

/// One pending cell of the depth-first walk.
struct Frame {
    at: GridLocation,
    dirs: [GridLocation; 4],
    next: usize,
}

impl RecursiveCarve {
    /// Open `at` if the guard allows it, returning its frame.
    fn open<R: Rng + ?Sized>(grid: &mut GridMap, rng: &mut R, at: GridLocation) -> Option<Frame> {
        // Covers the boundary too: the counter returns its sentinel there.
        if grid.count_orthogonal_corridor_neighbors(at) >= 2 {
            return None;
        }
        // Re-entering an open cell would let two lone cells bounce forever.
        if !grid.is_wall(at) {
            return None;
        }
        grid.carve(at);
        let mut dirs = GridLocation::DIRECTIONS;
        dirs.shuffle(rng);
        Some(Frame { at, dirs, next: 0 })
    }
}

impl CarveStrategy for RecursiveCarve {
    fn carve<R: Rng + ?Sized>(&self, grid: &mut GridMap, rng: &mut R) -> Result<usize, MazeError> {
        if !grid.is_interior(self.seed) {
            return Err(ConfigError::SeedOutOfBounds(self.seed).into());
        }

        let mut carved = 0;
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = Self::open(grid, rng, self.seed) {
            carved += 1;
            stack.push(frame);
        }

        let mut max_depth = stack.len();
        while let Some(top) = stack.last_mut() {
            if top.next == top.dirs.len() {
                stack.pop();
                continue;
            }
            let next = top.at + top.dirs[top.next];
            top.next += 1;
            if let Some(frame) = Self::open(grid, rng, next) {
                carved += 1;
                stack.push(frame);
                max_depth = max_depth.max(stack.len());
            }
        }

        debug!(
            "recursive carve from {} opened {carved} cells (max depth {max_depth})",
            self.seed
        );
        Ok(carved)
    }
}

/// Maze generator operating on a [`GridMap`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: GridMap,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator over an existing grid.
    pub fn with_grid(grid: GridMap, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Create a generator over a fresh all-wall grid.
    pub fn new(width: i32, depth: i32, rng: R) -> Result<Self, MazeError> {
        Ok(Self::with_grid(GridMap::new(width, depth)?, rng))
    }

    /// Run any carving strategy over the grid.
    pub fn generate(&mut self, strategy: &impl CarveStrategy) -> Result<usize, MazeError> {
        strategy.carve(&mut self.grid, &mut self.rng)
    }

    /// Open interior cells with probability `corridor_percent`.
    pub fn random_fill(&mut self, corridor_percent: u32) -> Result<usize, MazeError> {
        self.generate(&RandomFill { corridor_percent })
    }

    /// Carve one-cell-wide corridors depth-first from `seed`.
    pub fn recursive_carve(&mut self, seed: GridLocation) -> Result<usize, MazeError> {
        self.generate(&RecursiveCarve { seed })
    }

    /// Run the strategy selected by `config`.
    pub fn build(&mut self, config: &MazeConfig) -> Result<usize, MazeError> {
        carve_configured(config, &mut self.grid, &mut self.rng)
    }

    /// Give up the generator, keeping the grid.
    pub fn into_grid(self) -> GridMap {
        self.grid
    }
}

/// Build a fresh grid as described by `config`.
///
/// The configuration is validated before anything is allocated.
pub fn build_grid<R: Rng + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<GridMap, MazeError> {
    config.validate()?;
    let mut grid = GridMap::new(config.width, config.depth)?;
    let carved = carve_configured(config, &mut grid, rng)?;
    debug!(
        "built {}x{} grid with {} strategy ({carved} corridors)",
        config.width, config.depth, config.strategy
    );
    Ok(grid)
}

fn carve_configured<R: Rng + ?Sized>(
    config: &MazeConfig,
    grid: &mut GridMap,
    rng: &mut R,
) -> Result<usize, MazeError> {
    match config.strategy {
        Strategy::RandomFill => RandomFill {
            corridor_percent: config.corridor_percent,
        }
        .carve(grid, rng),
        Strategy::Recursive => RecursiveCarve {
            seed: config.carve_seed,
        }
        .carve(grid, rng),
    }
}
