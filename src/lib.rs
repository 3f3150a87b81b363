//! Sparse, unbounded Conway's Game of Life.
//!
//! The live cells of a generation are a [`LiveSet`]. [`step`] computes the
//! following generation by scanning the padded bounding box of the set, and
//! [`Generations`] / [`iterate`] chain steps into a sequence starting with
//! the initial state.

pub mod bounds;
pub mod cells;
pub mod enc;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod pos;
pub mod render;

pub use bounds::{Bounds, corners};
pub use cells::{LiveSet, contains};
pub use enc::{PositionEncoder, RunLengthEncoded};
pub use engine::{
    GameOfLife, Generations, board_count, iterate, living_neighbors, neighbors_of, step,
    step_parallel, will_be_alive,
};
pub use error::{Error, Result};
pub use patterns::Pattern;
pub use pos::Pos2;
pub use render::{ALIVE_GLYPH, DEAD_GLYPH, Rendered, render};

pub fn parse_iterations(value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidIterationCount(value.to_owned()))
}

/// Renders `iterations + 1` boards of a named pattern, or fails before
/// simulating anything
pub fn run(pattern: &str, iterations: i64) -> Result<Vec<String>> {
    let pattern: Pattern = pattern.parse()?;
    let iterations = usize::try_from(iterations)
        .map_err(|_| Error::InvalidIterationCount(iterations.to_string()))?;

    log::debug!("running {pattern} for {iterations} generations");
    Ok(Generations::new(pattern.live_set())
        .take(board_count(iterations))
        .map(|generation| render(&generation))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_square() {
        let boards = run("square", 2).unwrap();

        assert_eq!(boards, vec!["▣ ▣\n▣ ▣"; 3]);
    }

    #[test]
    fn run_zero_iterations_is_initial_only() {
        let boards = run("glider", 0).unwrap();

        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0], render(&Pattern::Glider.live_set()));
    }

    #[test]
    fn run_rejects_unknown_pattern() {
        let err = run("spaceship", 5).unwrap_err();

        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(err.to_string().contains("glider, rpentomino, square"));
    }

    #[test]
    fn run_rejects_negative_count() {
        assert!(matches!(
            run("square", -1),
            Err(Error::InvalidIterationCount(_))
        ));
    }

    #[test]
    fn run_output_follows_steps() {
        let boards = run("rpentomino", 6).unwrap();
        let sets = iterate(Pattern::RPentomino.live_set(), 6);

        let expected: Vec<_> = sets.iter().map(render).collect();
        assert_eq!(boards, expected);
    }

    #[test]
    fn iteration_counts() {
        assert_eq!(parse_iterations("50").unwrap(), 50);
        assert_eq!(parse_iterations(" 0 ").unwrap(), 0);
        assert!(parse_iterations("-2").is_err());
        assert!(parse_iterations("ten").is_err());
        assert!(parse_iterations("1.5").is_err());
        assert!(parse_iterations("").is_err());
    }
}
