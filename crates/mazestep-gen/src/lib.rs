//! Maze generation for mazestep grids.
//!
//! Two carving strategies write corridors into a [`GridMap`](mazestep_core::GridMap):
//! - **Random fill**: an independent coin flip per interior cell.
//! - **Recursive carving**: a randomised depth-first walk that keeps every
//!   corridor one cell wide.
//!
//! Both draw from any [`rand::Rng`], so a seeded generator reproduces a maze
//! exactly.

pub mod mapgen;

pub use mapgen::{CarveStrategy, MazeGen, RandomFill, RecursiveCarve, build_grid};
pub use mazestep_core::Strategy;
