//! Build a maze and watch an A* search work through it.
//!
//! ```text
//! mazestep --seed 7 --steps          # print every expansion
//! mazestep --strategy random --json  # run to completion, print the path as JSON
//! RUST_LOG=debug mazestep            # engine and generator logs
//! ```

mod render;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, warn};
use mazestep_core::{GridLocation, MazeConfig, Rediscovery, Strategy};
use mazestep_gen::build_grid;
use mazestep_paths::{PathfindingEngine, SearchOutcome, SearchState, bfs_distance};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Build a maze and step an A* search through it.
#[derive(Parser, Debug)]
#[command(name = "mazestep", version, about)]
struct Args {
    /// JSON file holding a maze configuration. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width, boundary included.
    #[arg(long)]
    width: Option<i32>,

    /// Grid depth, boundary included.
    #[arg(long)]
    depth: Option<i32>,

    /// Generator: `recursive` or `random`.
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Seed for maze generation and endpoint selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as `x,z`. Random when omitted.
    #[arg(long, value_parser = parse_location, requires = "goal")]
    start: Option<GridLocation>,

    /// Goal cell as `x,z`. Random when omitted.
    #[arg(long, value_parser = parse_location, requires = "start")]
    goal: Option<GridLocation>,

    /// Print the grid and frontier after every step.
    #[arg(long)]
    steps: bool,

    /// How many frontier entries to print per step.
    #[arg(long, default_value_t = 5)]
    frontier: usize,

    /// Always reparent rediscovered open nodes, even to a costlier path.
    #[arg(long)]
    overwrite: bool,

    /// Print the outcome and path as JSON instead of a drawing.
    #[arg(long)]
    json: bool,
}

fn parse_location(s: &str) -> Result<GridLocation, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,z`, got `{s}`"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let z = z.trim().parse::<i32>().map_err(|e| format!("bad z in `{s}`: {e}"))?;
    Ok(GridLocation::new(x, z))
}

impl Args {
    /// Merge the optional config file with the command-line overrides.
    fn to_config(&self) -> Result<MazeConfig, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("reading {}: {e}", path.display()))?;
                serde_json::from_str(&text).map_err(|e| format!("parsing {}: {e}", path.display()))?
            }
            None => MazeConfig::default(),
        };
        if let Some(w) = self.width {
            cfg.width = w;
        }
        if let Some(d) = self.depth {
            cfg.depth = d;
        }
        if let Some(s) = self.strategy {
            cfg.strategy = s;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.overwrite {
            cfg.rediscovery = Rediscovery::Overwrite;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = args.to_config()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "{}x{} {} maze, seed {seed}, scale {}",
        config.width, config.depth, config.strategy, config.scale
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = build_grid(&config, &mut rng)?;

    let mut engine = PathfindingEngine::new(&grid).with_rediscovery(config.rediscovery);
    debug!("rediscovery policy: {:?}", engine.rediscovery());
    let (start, goal) = match (args.start, args.goal) {
        (Some(start), Some(goal)) => {
            engine.begin_search(start, goal)?;
            (start, goal)
        }
        _ => engine.begin_random_search(&mut rng)?,
    };

    let outcome = if args.steps {
        println!("{}\n", render::draw(&grid, &engine, &[]));
        loop {
            let result = engine.step()?;
            println!(
                "step {}: expanded {}{}",
                engine.steps_taken(),
                result.expanded,
                if result.is_goal { " (goal)" } else { "" }
            );
            println!("{}", render::draw(&grid, &engine, &[]));
            print!("{}", render::frontier(&engine, args.frontier));
            println!();
            if let SearchState::Finished(outcome) = engine.state() {
                break outcome;
            }
        }
    } else {
        engine.run_to_completion()?
    };

    let path = engine.reconstruct_path()?;
    match bfs_distance(&grid, start, goal) {
        Some(moves) if outcome == SearchOutcome::Found && moves + 1 != path.len() => {
            warn!("path has {} moves, shortest is {moves}", path.len() - 1);
        }
        best => debug!("shortest move count by BFS: {best:?}"),
    }

    if args.json {
        let report = serde_json::json!({
            "seed": seed,
            "start": start,
            "goal": goal,
            "outcome": outcome,
            "steps": engine.steps_taken(),
            "path": path,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render::draw(&grid, &engine, &path));
    match outcome {
        SearchOutcome::Found => println!(
            "{start} -> {goal}: {} moves in {} steps",
            path.len() - 1,
            engine.steps_taken()
        ),
        SearchOutcome::NoPath => println!(
            "{start} -> {goal}: no path ({} cells explored)",
            engine.closed_nodes().count()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locations() {
        assert_eq!(parse_location("3,4"), Ok(GridLocation::new(3, 4)));
        assert_eq!(parse_location(" 10 , 2"), Ok(GridLocation::new(10, 2)));
        assert!(parse_location("3;4").is_err());
        assert!(parse_location("a,4").is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "mazestep",
            "--width",
            "12",
            "--strategy",
            "random",
            "--seed",
            "9",
            "--overwrite",
        ]);
        let cfg = args.to_config().unwrap();
        assert_eq!(cfg.width, 12);
        assert_eq!(cfg.depth, 30);
        assert_eq!(cfg.strategy, Strategy::RandomFill);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.rediscovery, Rediscovery::Overwrite);
    }

    #[test]
    fn endpoints_come_in_pairs() {
        assert!(Args::try_parse_from(["mazestep", "--start", "1,1"]).is_err());
        let args =
            Args::try_parse_from(["mazestep", "--start", "1,1", "--goal", "3,3"]).unwrap();
        assert_eq!(args.goal, Some(GridLocation::new(3, 3)));
    }

    #[test]
    fn invalid_size_is_rejected() {
        let args = Args::parse_from(["mazestep", "--width", "2"]);
        assert!(args.to_config().is_err());
    }
}
