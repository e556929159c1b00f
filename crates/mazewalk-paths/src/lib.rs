//! Step-driven maze solvers.
//!
//! This crate finds a route from the start cell of a [`Grid`] to one of its
//! exits with one of three strategies:
//!
//! - **Backtracking**: randomized depth-first search that marks dead ends
//! - **Breadth-first**: level-order search over move sequences, diagonals first
//! - **A\***: best-first search on `f = g + h` with a Euclidean heuristic
//!
//! Every solver runs synchronously inside [`solve`] and hands control back to
//! the host through a [`Stepper`] after each step, so a host can draw the
//! grid or stop the run by answering [`StepSignal::Cancel`].
//!
//! ```
//! use mazewalk_core::{Grid, Point};
//! use mazewalk_paths::{Algorithm, RunToEnd, SolverResult, solve};
//! use rand::SeedableRng;
//!
//! let mut grid = Grid::parse("S..\n...\n..E").unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let result = solve(&mut grid, Algorithm::BreadthFirst, &mut RunToEnd, &mut rng).unwrap();
//! assert_eq!(
//!     result,
//!     SolverResult::Found(vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)])
//! );
//! ```

mod astar;
mod backtrack;
mod bfs;
mod distance;
mod error;
mod moves;
mod path;
mod search;
mod step;

use std::fmt;

use mazewalk_core::{Grid, Point};
use rand::Rng;

pub use distance::{euclidean, nearest_euclidean};
pub use error::SolveError;
pub use moves::{Direction, Moves};
pub use path::{follow_parents, mark_found, replay};
pub use step::{RunToEnd, StepEvent, StepSignal, Stepper};

use search::Search;

/// The search strategy to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Backtracking,
    #[default]
    BreadthFirst,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Backtracking, Self::BreadthFirst, Self::AStar];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Backtracking => "random backtracking",
            Self::BreadthFirst => "breadth first",
            Self::AStar => "A*",
        })
    }
}

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverResult {
    /// Cells from the start to the reached exit, both included.
    Found(Vec<Point>),
    /// Every reachable cell was explored without meeting an exit.
    NotFound,
    /// The step hook asked to stop.
    Cancelled,
}

impl SolverResult {
    /// The route, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Number of moves in the route, if one was found.
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

impl fmt::Display for SolverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(p) => write!(f, "found a route of {} moves", p.len().saturating_sub(1)),
            Self::NotFound => write!(f, "no exit found"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Options for [`solve_with`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    pub algorithm: Algorithm,
    pub moves: Moves,
}

impl SolveConfig {
    /// Eight-way moves with the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            moves: Moves::Eight,
        }
    }

    /// Builder: use the given move set.
    pub fn with_moves(mut self, moves: Moves) -> Self {
        self.moves = moves;
        self
    }
}

/// Run `algorithm` over `grid` with eight-way moves.
///
/// See [`solve_with`].
pub fn solve<S, R>(
    grid: &mut Grid,
    algorithm: Algorithm,
    stepper: &mut S,
    rng: &mut R,
) -> Result<SolverResult, SolveError>
where
    S: Stepper + ?Sized,
    R: Rng + ?Sized,
{
    solve_with(grid, SolveConfig::new(algorithm), stepper, rng)
}

/// Run a solver over `grid`.
///
/// The grid must hold a start and at least one exit; otherwise an error is
/// returned before anything is touched. The run leaves its visit marks on the
/// grid, so call [`Grid::reset`] before solving the same grid again. `rng` is
/// only read by the backtracking solver.
pub fn solve_with<S, R>(
    grid: &mut Grid,
    config: SolveConfig,
    stepper: &mut S,
    rng: &mut R,
) -> Result<SolverResult, SolveError>
where
    S: Stepper + ?Sized,
    R: Rng + ?Sized,
{
    let start = grid.start().ok_or(SolveError::NoStart)?;
    let exits = grid.exits();
    if exits.is_empty() {
        return Err(SolveError::NoExit);
    }

    log::debug!(
        "{} from {start} towards {} exit(s), {:?} moves",
        config.algorithm,
        exits.len(),
        config.moves
    );

    let mut search = Search::new(grid, stepper, config.moves, start);
    let result = match config.algorithm {
        Algorithm::Backtracking => search.backtracking(rng),
        Algorithm::BreadthFirst => search.breadth_first(),
        Algorithm::AStar => search.astar(&exits)?,
    };

    let steps = search.steps;
    log::debug!("{}: {result} after {steps} steps", config.algorithm);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use mazewalk_core::{CellKind, Layout, Point, VisitState};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn run(grid: &mut Grid, config: SolveConfig) -> SolverResult {
        solve_with(grid, config, &mut RunToEnd, &mut rng()).unwrap()
    }

    fn assert_valid_route(grid: &Grid, route: &[Point], moves: Moves) {
        assert_eq!(grid.kind(route[0]), Some(CellKind::Start));
        assert_eq!(grid.kind(route[route.len() - 1]), Some(CellKind::Exit));
        for pair in route.windows(2) {
            let step = pair[1] - pair[0];
            assert!(pair[0].is_adjacent(pair[1]));
            if moves == Moves::Four {
                assert_eq!(step.x.abs() + step.y.abs(), 1);
            }
        }
        for &p in route {
            assert_ne!(grid.kind(p), Some(CellKind::Wall));
        }
    }

    const CORRIDOR: &str = "\
#########
S.......E
#########";

    #[test]
    fn corridor_route_lengths() {
        let n = 9;
        for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
            let mut g = Grid::parse(CORRIDOR).unwrap();
            let result = run(&mut g, SolveConfig::new(algorithm));
            assert_eq!(result.moves(), Some(n - 1), "{algorithm}");
        }

        for seed in 0..8 {
            let mut g = Grid::parse(CORRIDOR).unwrap();
            let result = solve(
                &mut g,
                Algorithm::Backtracking,
                &mut RunToEnd,
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();
            let route = result.path().unwrap();
            assert!(route.len() >= n);
            let distinct: HashSet<_> = route.iter().collect();
            assert_eq!(distinct.len(), route.len());
        }
    }

    #[test]
    fn enclosed_start_is_not_found() {
        let layout = "\
.....
.###.
.#S#.
.###.
....E";
        for algorithm in Algorithm::ALL {
            let mut g = Grid::parse(layout).unwrap();
            let result = run(&mut g, SolveConfig::new(algorithm));
            assert_eq!(result, SolverResult::NotFound, "{algorithm}");
        }
    }

    #[test]
    fn three_by_three_diagonal() {
        let expected = vec![Point::at(0, 0), Point::at(1, 1), Point::at(2, 2)];
        for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
            let mut g = Grid::parse("S..\n...\n..E").unwrap();
            assert_eq!(
                run(&mut g, SolveConfig::new(algorithm)),
                SolverResult::Found(expected.clone())
            );
        }
        let mut g = Grid::parse("S..\n...\n..E").unwrap();
        run(&mut g, SolveConfig::new(Algorithm::AStar));
        assert_eq!(g.at(Point::at(2, 2)).unwrap().meta().g, 2);
    }

    #[test]
    fn reference_maze_is_reachable_orthogonally() {
        let layout = "\
S#...
...#.
#.#..
##..#
....E";
        for algorithm in Algorithm::ALL {
            let mut g = Grid::parse(layout).unwrap();
            let config = SolveConfig::new(algorithm).with_moves(Moves::Four);
            let result = run(&mut g, config);
            let route = result.path().unwrap_or_else(|| panic!("{algorithm}: {result}"));
            assert_valid_route(&g, route, Moves::Four);
        }

        let mut g = Grid::parse(layout).unwrap();
        let four = SolveConfig::new(Algorithm::BreadthFirst).with_moves(Moves::Four);
        assert_eq!(run(&mut g, four).moves(), Some(12));
    }

    #[test]
    fn cancel_on_second_hook_call() {
        for algorithm in Algorithm::ALL {
            let mut g = Grid::parse(
                "\
S......
.......
.......
......E",
            )
            .unwrap();
            let mut calls = 0;
            let mut visited_at_cancel = None;
            let mut stepper = |grid: &Grid, _: StepEvent| {
                calls += 1;
                if calls == 2 {
                    visited_at_cancel = Some(grid.count(|c| c.is_visited()));
                    StepSignal::Cancel
                } else {
                    StepSignal::Continue
                }
            };
            let result = solve(&mut g, algorithm, &mut stepper, &mut rng()).unwrap();
            assert_eq!(result, SolverResult::Cancelled, "{algorithm}");
            assert_eq!(calls, 2, "{algorithm}");
            let visited = g.count(|c| c.is_visited());
            assert_eq!(visited_at_cancel, Some(visited), "{algorithm}");
            if algorithm == Algorithm::Backtracking {
                assert!(visited <= 2);
            }
        }
    }

    #[test]
    fn second_run_without_reset_finds_nothing() {
        for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
            let mut g = Grid::parse(
                "\
S...
.#..
...E",
            )
            .unwrap();
            let config = SolveConfig::new(algorithm);
            assert!(matches!(run(&mut g, config), SolverResult::Found(_)));
            assert_eq!(run(&mut g, config), SolverResult::NotFound);

            g.reset();
            assert!(matches!(run(&mut g, config), SolverResult::Found(_)));
        }
    }

    #[test]
    fn path_helpers_are_reexported() {
        let route = replay(Point::new(0, 0), &[Direction::DownRight, Direction::Down]);
        let mut g = Grid::square(3);
        mark_found(&mut g, &route);
        assert_eq!(g.count(|c| c.is_visited()), 3);
        let chain = follow_parents(&g, Point::new(1, 2));
        assert_eq!(chain, Some(vec![Point::new(1, 2)]));
    }

    #[test]
    fn missing_start_or_exit_is_an_error() {
        let mut no_start = Grid::parse("...E").unwrap();
        let mut no_exit = Grid::parse("S...").unwrap();
        for algorithm in Algorithm::ALL {
            assert_eq!(
                solve(&mut no_start, algorithm, &mut RunToEnd, &mut rng()),
                Err(SolveError::NoStart)
            );
            assert_eq!(
                solve(&mut no_exit, algorithm, &mut RunToEnd, &mut rng()),
                Err(SolveError::NoExit)
            );
        }
        assert_eq!(no_exit.count(|c| c.visit() != VisitState::Unvisited), 0);
    }

    #[test]
    fn default_maze_is_solved_by_every_algorithm() {
        let layout = Layout::default_maze();
        for algorithm in Algorithm::ALL {
            let mut g = Grid::from_layout(&layout);
            let result = run(&mut g, SolveConfig::new(algorithm));
            let route = result.path().unwrap_or_else(|| panic!("{algorithm}: {result}"));
            assert_valid_route(&g, route, Moves::Eight);
        }
    }

    #[test]
    fn reset_after_cancel_restores_editable_grid() {
        for algorithm in Algorithm::ALL {
            let mut g = Grid::parse("S...\n.##.\n...#\n##.E").unwrap();
            let before = g.clone();
            let mut calls = 0;
            let mut stop_later = |_: &Grid, _: StepEvent| {
                calls += 1;
                if calls == 4 {
                    StepSignal::Cancel
                } else {
                    StepSignal::Continue
                }
            };
            let result = solve(&mut g, algorithm, &mut stop_later, &mut rng()).unwrap();
            assert_eq!(result, SolverResult::Cancelled, "{algorithm}");
            assert_ne!(g, before);
            g.reset();
            assert_eq!(g, before);
        }
    }
}
