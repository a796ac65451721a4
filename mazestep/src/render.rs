//! Text overlay of a grid and the live state of a search.

use std::fmt::Write as _;

use mazestep_core::{GridLocation, GridMap};
use mazestep_paths::{PathfindingEngine, SearchNode};

pub const OPEN: char = 'o';
pub const CLOSED: char = 'x';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// Draw `grid` with the engine's lists, `path` and the endpoints on top.
///
/// Later layers win: closed, open, path, then start and goal.
pub fn draw(grid: &GridMap, engine: &PathfindingEngine<'_, GridMap>, path: &[GridLocation]) -> String {
    let mut canvas: Vec<Vec<char>> = grid.rows().iter().map(|r| r.chars().collect()).collect();
    let mut put = |p: GridLocation, ch: char| {
        if let Some(cell) = canvas
            .get_mut(p.z as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *cell = ch;
        }
    };

    for n in engine.closed_nodes() {
        put(n.location, CLOSED);
    }
    for n in engine.open_nodes() {
        put(n.location, OPEN);
    }
    for &p in path {
        put(p, PATH);
    }
    if let Some(s) = engine.start() {
        put(s, START);
    }
    if let Some(g) = engine.goal() {
        put(g, GOAL);
    }

    let rows: Vec<String> = canvas.into_iter().map(String::from_iter).collect();
    rows.join("\n")
}

/// The first `limit` open nodes with their costs, best first.
pub fn frontier(engine: &PathfindingEngine<'_, GridMap>, limit: usize) -> String {
    let mut out = String::new();
    let open: Vec<&SearchNode> = engine.open_nodes().collect();
    for n in open.iter().take(limit) {
        let _ = writeln!(
            out,
            "  {:<9} G: {:>6.2}  H: {:>6.2}  F: {:>6.2}",
            n.location.to_string(),
            n.g,
            n.h,
            n.f
        );
    }
    if open.len() > limit {
        let _ = writeln!(out, "  ... {} more", open.len() - limit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> GridMap {
        GridMap::from_rows(&["#####", "#.#.#", "#...#", "#...#", "#####"]).unwrap()
    }

    #[test]
    fn draws_endpoints_and_lists() {
        let grid = room();
        let mut engine = PathfindingEngine::new(&grid);
        assert_eq!(draw(&grid, &engine, &[]), grid.to_string());

        engine
            .begin_search(GridLocation::new(1, 1), GridLocation::new(3, 1))
            .unwrap();
        engine.step().unwrap();
        engine.step().unwrap();
        let text = draw(&grid, &engine, &[]);
        assert_eq!(text, "#####\n#S#G#\n#xx.#\n#o..#\n#####");
    }

    #[test]
    fn draws_path_under_endpoints() {
        let grid = room();
        let mut engine = PathfindingEngine::new(&grid);
        engine
            .begin_search(GridLocation::new(1, 1), GridLocation::new(3, 1))
            .unwrap();
        engine.run_to_completion().unwrap();
        let path = engine.reconstruct_path().unwrap();
        let text = draw(&grid, &engine, &path);
        assert_eq!(text, "#####\n#S#G#\n#***#\n#ooo#\n#####");
    }

    #[test]
    fn frontier_lists_costs() {
        let grid = room();
        let mut engine = PathfindingEngine::new(&grid);
        engine
            .begin_search(GridLocation::new(1, 1), GridLocation::new(3, 1))
            .unwrap();
        engine.step().unwrap();
        engine.step().unwrap();
        engine.step().unwrap();
        // (3, 2) is closed by now; (1, 3) at 2 + √8 leads (2, 3) at 3 + √5.
        let text = frontier(&engine, 1);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("(1, 3)"));
        assert!(lines[0].contains("G:   2.00"));
        assert!(lines[0].contains("F:   4.83"));
        assert_eq!(lines[1], "  ... 1 more");

        let all = frontier(&engine, 5);
        assert_eq!(all.lines().count(), 2);
        assert!(all.lines().nth(1).unwrap().contains("F:   5.24"));
    }
}
