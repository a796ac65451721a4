//! The stepwise A* engine.
//!
//! A search session holds every discovered [`SearchNode`] in an arena. Each
//! node is on exactly one of two lists: the open list (frontier, kept sorted
//! by `f` then `h`) or the closed list (expanded, in closing order). A
//! location maps to at most one node, so it can never sit on both lists.

use std::collections::HashMap;

use log::{debug, info, trace};
use mazestep_core::{ConfigError, GridLocation, MazeError, Rediscovery};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::distance::euclidean;
use crate::node::{NodeId, NodeList, SearchNode};
use crate::traits::Pather;

/// How a finished search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The goal was expanded; a path can be reconstructed.
    Found,
    /// The open list ran dry before the goal was reached.
    NoPath,
}

/// Lifecycle of a [`PathfindingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No search has been begun.
    #[default]
    Uninitialized,
    /// A search is in progress; call [`PathfindingEngine::step`].
    Searching,
    /// The search is over. Only a new `begin_search` restarts it.
    Finished(SearchOutcome),
}

/// What a single [`PathfindingEngine::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepResult {
    /// The node that became current: the one moved to the closed list, or the
    /// node whose expansion exhausted the frontier.
    pub expanded: GridLocation,
    /// `expanded` is the goal and the search finished with a path.
    pub is_goal: bool,
    /// The frontier was exhausted and the search finished without a path.
    pub frontier_empty: bool,
}

/// State of one `begin_search` call. Replaced wholesale by the next one.
#[derive(Debug, Clone)]
struct Session {
    nodes: Vec<SearchNode>,
    by_location: HashMap<GridLocation, NodeId>,
    open: Vec<NodeId>,
    closed: Vec<NodeId>,
    start: NodeId,
    goal: GridLocation,
    current: NodeId,
    steps: usize,
    last: Option<StepResult>,
}

impl Session {
    fn new(start: GridLocation, goal: GridLocation) -> Self {
        let id = NodeId(0);
        Self {
            nodes: vec![SearchNode::new(start, 0.0, 0.0, None)],
            by_location: HashMap::from([(start, id)]),
            open: vec![id],
            closed: Vec::new(),
            start: id,
            goal,
            current: id,
            steps: 0,
            last: None,
        }
    }

    #[inline]
    fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    fn close(&mut self, id: NodeId) {
        self.nodes[id.0].list = NodeList::Closed;
        self.closed.push(id);
    }

    /// Discover or update the walkable neighbours of the current node.
    fn expand<P: Pather>(&mut self, pather: &P, rediscovery: Rediscovery) {
        let cid = self.current;
        // Only the start node is still open when it becomes current.
        if let Some(pos) = self.open.iter().position(|&id| id == cid) {
            self.open.remove(pos);
            self.close(cid);
        }

        let (here, here_g) = {
            let c = self.node(cid);
            (c.location, c.g)
        };

        for dir in GridLocation::DIRECTIONS {
            let next = here + dir;
            if !pather.is_interior(next) || pather.is_wall(next) {
                continue;
            }
            let known = self.by_location.get(&next).copied();
            if known.is_some_and(|id| self.node(id).is_closed()) {
                trace!("skip {next}: closed");
                continue;
            }

            let g = euclidean(here, next) + here_g;
            let h = euclidean(next, self.goal);

            match known {
                Some(id) => {
                    let node = &mut self.nodes[id.0];
                    if rediscovery == Rediscovery::Overwrite || g < node.g {
                        trace!("reparent {next} to {here}: g {:.2} -> {g:.2}", node.g);
                        node.reparent(g, h, cid);
                    }
                }
                None => {
                    let id = NodeId(self.nodes.len());
                    trace!("discover {next}: g {g:.2} h {h:.2}");
                    self.nodes.push(SearchNode::new(next, g, h, Some(cid)));
                    self.by_location.insert(next, id);
                    self.open.push(id);
                }
            }
        }

        // Stable: nodes with equal f and h keep their discovery order.
        let nodes = &self.nodes;
        self.open.sort_by(|&a, &b| {
            let (a, b) = (&nodes[a.0], &nodes[b.0]);
            a.f.total_cmp(&b.f).then(a.h.total_cmp(&b.h))
        });
    }

    /// Move the best open node to the closed list and make it current.
    fn pop_best(&mut self) -> Option<GridLocation> {
        if self.open.is_empty() {
            return None;
        }
        let id = self.open.remove(0);
        self.close(id);
        self.current = id;
        Some(self.node(id).location)
    }
}

/// Incrementally resumable A* search over a [`Pather`].
///
/// ```text
/// Uninitialized --begin_search--> Searching --step--> ... --> Finished(outcome)
///                                     ^                            |
///                                     +-------- begin_search ------+
/// ```
///
/// Step cost and heuristic are both [`euclidean`]. Movement is orthogonal and
/// never enters the boundary ring.
pub struct PathfindingEngine<'a, P: Pather> {
    pather: &'a P,
    rediscovery: Rediscovery,
    state: SearchState,
    session: Option<Session>,
}

impl<'a, P: Pather> PathfindingEngine<'a, P> {
    /// Create an engine over `pather`. No search is begun.
    pub fn new(pather: &'a P) -> Self {
        Self {
            pather,
            rediscovery: Rediscovery::default(),
            state: SearchState::Uninitialized,
            session: None,
        }
    }

    /// Choose how rediscovered open nodes are treated.
    pub fn with_rediscovery(mut self, rediscovery: Rediscovery) -> Self {
        self.rediscovery = rediscovery;
        self
    }

    pub fn rediscovery(&self) -> Rediscovery {
        self.rediscovery
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SearchState::Finished(_))
    }

    fn check_endpoint(&self, p: GridLocation) -> Result<(), MazeError> {
        if !self.pather.is_interior(p) || self.pather.is_wall(p) {
            return Err(ConfigError::NotWalkable(p).into());
        }
        Ok(())
    }

    /// Start a new search from `start` to `goal`, discarding any previous one.
    ///
    /// Both endpoints must be walkable interior cells. On error the previous
    /// session, if any, is left as it was.
    pub fn begin_search(&mut self, start: GridLocation, goal: GridLocation) -> Result<(), MazeError> {
        self.check_endpoint(start)?;
        self.check_endpoint(goal)?;
        self.session = Some(Session::new(start, goal));
        self.state = SearchState::Searching;
        debug!("begin search {start} -> {goal}");
        Ok(())
    }

    /// Start a new search between two random corridor cells.
    ///
    /// The corridor cells are shuffled; the first becomes the start and the
    /// first later cell not orthogonally adjacent to it becomes the goal. If
    /// every other cell is adjacent, the second cell is used.
    pub fn begin_random_search<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(GridLocation, GridLocation), MazeError> {
        let mut cells = self.pather.corridors();
        if cells.len() < 2 {
            return Err(ConfigError::TooFewCorridors { found: cells.len() }.into());
        }
        cells.shuffle(rng);
        let start = cells[0];
        let goal = cells[1..]
            .iter()
            .copied()
            .find(|&c| !start.is_adjacent(c))
            .unwrap_or(cells[1]);
        self.begin_search(start, goal)?;
        Ok((start, goal))
    }

    /// Perform one expansion.
    ///
    /// Expands the current node's orthogonal neighbours, re-sorts the open
    /// list and moves its best node to the closed list. The search finishes
    /// when that node is the goal, or when nothing is left to pop. Once
    /// finished, further calls do no work and repeat the final result.
    pub fn step(&mut self) -> Result<StepResult, MazeError> {
        let session = self.session.as_mut().ok_or(MazeError::NotReady)?;
        if let (SearchState::Finished(_), Some(last)) = (self.state, session.last) {
            return Ok(last);
        }

        session.steps += 1;
        let here = session.node(session.current).location;
        let (result, outcome) = if here == session.goal {
            // Only reachable when start and goal coincide.
            let result = StepResult {
                expanded: here,
                is_goal: true,
                frontier_empty: false,
            };
            (result, Some(SearchOutcome::Found))
        } else {
            session.expand(self.pather, self.rediscovery);
            match session.pop_best() {
                Some(next) => {
                    let is_goal = next == session.goal;
                    let result = StepResult {
                        expanded: next,
                        is_goal,
                        frontier_empty: false,
                    };
                    (result, is_goal.then_some(SearchOutcome::Found))
                }
                None => {
                    let result = StepResult {
                        expanded: here,
                        is_goal: false,
                        frontier_empty: true,
                    };
                    (result, Some(SearchOutcome::NoPath))
                }
            }
        };

        debug!(
            "step {}: expanded {} (open {}, closed {})",
            session.steps,
            result.expanded,
            session.open.len(),
            session.closed.len()
        );
        session.last = Some(result);
        if let Some(outcome) = outcome {
            info!(
                "search {} -> {} finished after {} steps: {outcome:?}",
                session.node(session.start).location,
                session.goal,
                session.steps
            );
            self.state = SearchState::Finished(outcome);
        }
        Ok(result)
    }

    /// Step until the search finishes.
    ///
    /// Every unfinished step closes a node that is never reopened, so this
    /// takes at most one step per walkable cell.
    pub fn run_to_completion(&mut self) -> Result<SearchOutcome, MazeError> {
        loop {
            self.step()?;
            if let SearchState::Finished(outcome) = self.state {
                return Ok(outcome);
            }
        }
    }

    /// The found path, from the goal back to the start (both included).
    ///
    /// Empty if the search finished without a path. Fails with
    /// [`MazeError::NotReady`] until the search has finished.
    pub fn reconstruct_path(&self) -> Result<Vec<GridLocation>, MazeError> {
        let session = match (self.state, self.session.as_ref()) {
            (SearchState::Finished(SearchOutcome::Found), Some(s)) => s,
            (SearchState::Finished(SearchOutcome::NoPath), _) => return Ok(Vec::new()),
            _ => return Err(MazeError::NotReady),
        };

        let mut path = Vec::new();
        let mut id = Some(session.current);
        while let Some(i) = id {
            let node = session.node(i);
            path.push(node.location);
            if i == session.start {
                break;
            }
            id = node.parent;
        }
        Ok(path)
    }

    /// Start location of the current session.
    pub fn start(&self) -> Option<GridLocation> {
        self.session.as_ref().map(|s| s.node(s.start).location)
    }

    /// Goal location of the current session.
    pub fn goal(&self) -> Option<GridLocation> {
        self.session.as_ref().map(|s| s.goal)
    }

    /// The most recently expanded node.
    pub fn current(&self) -> Option<&SearchNode> {
        self.session.as_ref().map(|s| s.node(s.current))
    }

    /// Number of `step` calls that did work in this session.
    pub fn steps_taken(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.steps)
    }

    /// Open list in expansion priority order.
    pub fn open_nodes(&self) -> impl Iterator<Item = &SearchNode> {
        self.session
            .iter()
            .flat_map(|s| s.open.iter().map(move |&id| s.node(id)))
    }

    /// Closed list in the order nodes were closed.
    pub fn closed_nodes(&self) -> impl Iterator<Item = &SearchNode> {
        self.session
            .iter()
            .flat_map(|s| s.closed.iter().map(move |&id| s.node(id)))
    }

    /// The node discovered at `p`, on either list.
    pub fn node_at(&self, p: GridLocation) -> Option<&SearchNode> {
        let s = self.session.as_ref()?;
        s.by_location.get(&p).map(|&id| s.node(id))
    }

    /// Look up a node by id, e.g. to follow a `parent` link.
    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.session.as_ref()?.nodes.get(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_distance;
    use mazestep_core::{GridMap, MazeConfig, Strategy};
    use mazestep_gen::build_grid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn p(x: i32, z: i32) -> GridLocation {
        GridLocation::new(x, z)
    }

    /// 5×5 room with one wall between (1,1) and (3,1).
    fn detour() -> GridMap {
        GridMap::from_rows(&["#####", "#.#.#", "#...#", "#...#", "#####"]).unwrap()
    }

    /// Two rooms split by a solid wall column.
    fn split() -> GridMap {
        GridMap::from_rows(&["#######", "#..#..#", "#..#..#", "#######"]).unwrap()
    }

    fn assert_walk(grid: &GridMap, path: &[GridLocation], goal: GridLocation, start: GridLocation) {
        assert_eq!(path.first(), Some(&goal));
        assert_eq!(path.last(), Some(&start));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not one move", w[0], w[1]);
        }
        assert!(path.iter().all(|&q| !grid.is_wall(q)));
    }

    fn assert_lists_consistent<P: Pather>(engine: &PathfindingEngine<'_, P>) {
        let open: Vec<_> = engine.open_nodes().collect();
        let closed: Vec<_> = engine.closed_nodes().collect();
        let open_locs: HashSet<_> = open.iter().map(|n| n.location).collect();
        let closed_locs: HashSet<_> = closed.iter().map(|n| n.location).collect();
        assert_eq!(open_locs.len(), open.len());
        assert_eq!(closed_locs.len(), closed.len());
        assert!(open_locs.is_disjoint(&closed_locs));
        assert!(open.iter().all(|n| n.is_open()));
        assert!(closed.iter().all(|n| n.is_closed()));
        for w in open.windows(2) {
            assert!((w[0].f, w[0].h) <= (w[1].f, w[1].h));
        }
    }

    #[test]
    fn not_ready_before_begin() {
        let grid = detour();
        let mut engine = PathfindingEngine::new(&grid);
        assert_eq!(engine.state(), SearchState::Uninitialized);
        assert_eq!(engine.step(), Err(MazeError::NotReady));
        assert_eq!(engine.run_to_completion(), Err(MazeError::NotReady));
        assert_eq!(engine.reconstruct_path(), Err(MazeError::NotReady));
        assert_eq!(engine.open_nodes().count(), 0);
        assert!(engine.start().is_none());
    }

    #[test]
    fn detour_steps_one_expansion_at_a_time() {
        let grid = detour();
        let mut engine = PathfindingEngine::new(&grid);
        engine.begin_search(p(1, 1), p(3, 1)).unwrap();
        assert_eq!(engine.state(), SearchState::Searching);
        assert_eq!(engine.reconstruct_path(), Err(MazeError::NotReady));

        let expanded: Vec<_> = (0..4).map(|_| engine.step().unwrap()).collect();
        assert_eq!(
            expanded.iter().map(|r| r.expanded).collect::<Vec<_>>(),
            vec![p(1, 2), p(2, 2), p(3, 2), p(3, 1)]
        );
        assert!(expanded[..3].iter().all(|r| !r.is_goal && !r.frontier_empty));
        assert!(expanded[3].is_goal);
        assert_eq!(engine.state(), SearchState::Finished(SearchOutcome::Found));
        assert_eq!(engine.steps_taken(), 4);

        let path = engine.reconstruct_path().unwrap();
        assert_eq!(path, vec![p(3, 1), p(3, 2), p(2, 2), p(1, 2), p(1, 1)]);
        assert_eq!(path.len() - 1, 4);
        assert_walk(&grid, &path, p(3, 1), p(1, 1));
    }

    #[test]
    fn open_list_exposes_costs() {
        let grid = detour();
        let mut engine = PathfindingEngine::new(&grid);
        engine.begin_search(p(1, 1), p(3, 1)).unwrap();
        assert_eq!(engine.open_nodes().count(), 1);
        assert_eq!(engine.current().unwrap().location, p(1, 1));

        engine.step().unwrap();
        engine.step().unwrap();
        let open: Vec<_> = engine.open_nodes().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].location, p(1, 3));
        assert_eq!(open[0].g, 2.0);
        assert_eq!(open[0].h, 8f64.sqrt());
        assert_eq!(open[0].f, open[0].g + open[0].h);

        let parent = open[0].parent.and_then(|id| engine.node(id)).unwrap();
        assert_eq!(parent.location, p(1, 2));
        assert_eq!(
            engine.closed_nodes().map(|n| n.location).collect::<Vec<_>>(),
            vec![p(1, 1), p(1, 2), p(2, 2)]
        );
        assert!(engine.node_at(p(3, 3)).is_none());
        assert_lists_consistent(&engine);
    }

    #[test]
    fn split_grid_has_no_path() {
        let grid = split();
        let mut engine = PathfindingEngine::new(&grid);
        engine.begin_search(p(1, 1), p(5, 2)).unwrap();
        assert_eq!(engine.run_to_completion(), Ok(SearchOutcome::NoPath));
        assert_eq!(engine.state(), SearchState::Finished(SearchOutcome::NoPath));
        assert_eq!(engine.reconstruct_path(), Ok(Vec::new()));
        // The left room has four cells; each is closed exactly once.
        assert_eq!(engine.closed_nodes().count(), 4);

        let last = engine.step().unwrap();
        assert!(last.frontier_empty);
        assert!(!last.is_goal);
        assert_eq!(engine.steps_taken(), 4);
    }

    #[test]
    fn start_equal_to_goal() {
        let grid = detour();
        let mut engine = PathfindingEngine::new(&grid);
        engine.begin_search(p(2, 3), p(2, 3)).unwrap();
        let r = engine.step().unwrap();
        assert!(r.is_goal);
        assert_eq!(r.expanded, p(2, 3));
        assert_eq!(engine.reconstruct_path(), Ok(vec![p(2, 3)]));
    }

    #[test]
    fn rerun_is_idempotent() {
        let grid = build_grid(&MazeConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        let mut engine = PathfindingEngine::new(&grid);
        let (start, goal) = engine.begin_random_search(&mut StdRng::seed_from_u64(6)).unwrap();
        engine.run_to_completion().unwrap();
        let first = engine.reconstruct_path().unwrap();
        let first_closed = engine.closed_nodes().count();

        engine.begin_search(start, goal).unwrap();
        assert_eq!(engine.state(), SearchState::Searching);
        assert_eq!(engine.closed_nodes().count(), 0);
        engine.run_to_completion().unwrap();
        assert_eq!(engine.reconstruct_path().unwrap(), first);
        assert_eq!(engine.closed_nodes().count(), first_closed);
    }

    #[test]
    fn failed_begin_keeps_previous_session() {
        let grid = detour();
        let mut engine = PathfindingEngine::new(&grid);
        engine.begin_search(p(1, 1), p(3, 1)).unwrap();
        engine.step().unwrap();

        assert_eq!(
            engine.begin_search(p(2, 1), p(3, 1)),
            Err(ConfigError::NotWalkable(p(2, 1)).into())
        );
        assert_eq!(
            engine.begin_search(p(1, 1), p(0, 2)),
            Err(ConfigError::NotWalkable(p(0, 2)).into())
        );
        assert_eq!(engine.state(), SearchState::Searching);
        assert_eq!(engine.start(), Some(p(1, 1)));
        assert_eq!(engine.steps_taken(), 1);
        assert_eq!(engine.run_to_completion(), Ok(SearchOutcome::Found));
    }

    #[test]
    fn random_endpoints() {
        let tiny = GridMap::from_rows(&["####", "#.##", "####"]).unwrap();
        let mut engine = PathfindingEngine::new(&tiny);
        assert_eq!(
            engine.begin_random_search(&mut StdRng::seed_from_u64(0)),
            Err(ConfigError::TooFewCorridors { found: 1 }.into())
        );
        assert_eq!(engine.state(), SearchState::Uninitialized);

        // Only two cells, and they touch: the fallback pair is used.
        let pair = GridMap::from_rows(&["####", "#..#", "####"]).unwrap();
        let mut engine = PathfindingEngine::new(&pair);
        let (s, g) = engine.begin_random_search(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_ne!(s, g);
        assert!(s.is_adjacent(g));

        let grid = detour();
        let mut engine = PathfindingEngine::new(&grid);
        for seed in 0..20 {
            let (s, g) = engine.begin_random_search(&mut StdRng::seed_from_u64(seed)).unwrap();
            assert_ne!(s, g);
            assert!(!s.is_adjacent(g));
            assert!(!grid.is_wall(s) && !grid.is_wall(g));
        }
    }

    #[test]
    fn matches_bfs_on_random_grids() {
        let mut solved = 0;
        for seed in 0..60 {
            let config = MazeConfig {
                width: 14,
                depth: 11,
                strategy: if seed % 2 == 0 {
                    Strategy::RandomFill
                } else {
                    Strategy::Recursive
                },
                carve_seed: p(3, 3),
                corridor_percent: 65,
                ..MazeConfig::default()
            };
            let grid = build_grid(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
            let mut engine = PathfindingEngine::new(&grid);
            let Ok((start, goal)) = engine.begin_random_search(&mut StdRng::seed_from_u64(seed))
            else {
                continue;
            };

            while !engine.is_finished() {
                engine.step().unwrap();
                assert_lists_consistent(&engine);
            }

            match bfs_distance(&grid, start, goal) {
                Some(moves) => {
                    assert_eq!(engine.state(), SearchState::Finished(SearchOutcome::Found));
                    let path = engine.reconstruct_path().unwrap();
                    assert_eq!(path.len() - 1, moves, "seed {seed}");
                    assert_walk(&grid, &path, goal, start);
                    solved += 1;
                }
                None => {
                    assert_eq!(engine.state(), SearchState::Finished(SearchOutcome::NoPath));
                    assert!(engine.reconstruct_path().unwrap().is_empty());
                }
            }
        }
        assert!(solved > 0);
    }

    /// Overwriting a rediscovered node with a costlier parent can stretch
    /// the final path; strict improvement keeps it shortest.
    #[test]
    fn overwrite_can_lengthen_path() {
        let grid = GridMap::from_rows(&[
            "######", "##...#", "#.#..#", "#..#.#", "#....#", "######",
        ])
        .unwrap();
        let (start, goal) = (p(4, 1), p(1, 2));
        assert_eq!(bfs_distance(&grid, start, goal), Some(8));

        let mut engine = PathfindingEngine::new(&grid);
        assert_eq!(engine.rediscovery(), Rediscovery::Improve);
        engine.begin_search(start, goal).unwrap();
        engine.run_to_completion().unwrap();
        let shortest = engine.reconstruct_path().unwrap();
        assert_eq!(shortest.len() - 1, 8);
        assert_walk(&grid, &shortest, goal, start);

        let mut engine = PathfindingEngine::new(&grid).with_rediscovery(Rediscovery::Overwrite);
        assert_eq!(engine.rediscovery(), Rediscovery::Overwrite);
        engine.begin_search(start, goal).unwrap();
        engine.run_to_completion().unwrap();
        let stretched = engine.reconstruct_path().unwrap();
        assert_eq!(
            stretched,
            vec![
                p(1, 2),
                p(1, 3),
                p(2, 3),
                p(2, 4),
                p(3, 4),
                p(4, 4),
                p(4, 3),
                p(4, 2),
                p(3, 2),
                p(3, 1),
                p(4, 1),
            ]
        );
        assert_walk(&grid, &stretched, goal, start);
    }

    #[test]
    fn overwrite_policy_still_walks() {
        for seed in 0..20 {
            let config = MazeConfig {
                width: 12,
                depth: 12,
                strategy: Strategy::RandomFill,
                corridor_percent: 80,
                rediscovery: Rediscovery::Overwrite,
                ..MazeConfig::default()
            };
            let grid = build_grid(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
            let mut engine = PathfindingEngine::new(&grid).with_rediscovery(config.rediscovery);
            let (start, goal) = engine.begin_random_search(&mut StdRng::seed_from_u64(seed)).unwrap();
            let outcome = engine.run_to_completion().unwrap();
            let reachable = bfs_distance(&grid, start, goal);
            assert_eq!(outcome == SearchOutcome::Found, reachable.is_some());
            if let Some(moves) = reachable {
                let path = engine.reconstruct_path().unwrap();
                assert!(path.len() - 1 >= moves);
                assert_walk(&grid, &path, goal, start);
            }
        }
    }
}
