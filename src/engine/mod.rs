mod rule;

pub use self::rule::{living_neighbors, neighbors_of, will_be_alive};
use crate::{LiveSet, bounds::corners};
use rayon::prelude::*;

/// Computes the generation following `set`
///
/// Only cells inside the bounding box padded by one can be alive next, so
/// that region is scanned row by row and every cell is run through
/// [`will_be_alive`].
pub fn step(set: &LiveSet) -> LiveSet {
    let expanded = corners(set).expand(1);
    expanded
        .cells()
        .filter(|&cell| will_be_alive(cell, set))
        .collect()
}

/// Same as [`step`], with the rows evaluated on the rayon thread pool
pub fn step_parallel(set: &LiveSet) -> LiveSet {
    let expanded = corners(set).expand(1);
    let next: Vec<_> = (expanded.bottom_left.y..=expanded.top_right.y)
        .into_par_iter()
        .flat_map_iter(|y| expanded.row(y).filter(|&cell| will_be_alive(cell, set)))
        .collect();
    next.into()
}

/// Every generation of `initial`, generation 0 included
pub fn iterate(initial: LiveSet, iterations: usize) -> Vec<LiveSet> {
    Generations::new(initial).take(board_count(iterations)).collect()
}

#[inline]
pub fn board_count(iterations: usize) -> usize {
    iterations.saturating_add(1)
}

/// Lazy, endless sequence of generations, starting with generation 0
///
/// Only the latest generation is kept around, so long runs don't retain
/// every board. Bound it with [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct Generations {
    current: LiveSet,
    started: bool,
    step: fn(&LiveSet) -> LiveSet,
}

impl Generations {
    pub fn new(initial: LiveSet) -> Self {
        Self {
            current: initial,
            started: false,
            step,
        }
    }

    pub fn parallel(mut self) -> Self {
        self.step = step_parallel;
        self
    }
}

impl Iterator for Generations {
    type Item = LiveSet;

    fn next(&mut self) -> Option<Self::Item> {
        // the step is deferred until asked for, so `take(n + 1)` runs n steps
        if self.started {
            self.current = (self.step)(&self.current);
        }
        self.started = true;
        Some(self.current.clone())
    }
}

#[derive(Debug, Default)]
pub struct GameOfLife {
    alive: LiveSet,
    generation: usize,
}

impl GameOfLife {
    #[inline]
    pub fn from_alive(alive: impl Into<LiveSet>) -> Self {
        Self {
            alive: alive.into(),
            generation: 0,
        }
    }

    pub fn next_generation(&mut self) {
        self.alive = step(&self.alive);
        self.generation += 1;
        log::trace!("generation {}: {} alive", self.generation, self.alive.len());
    }

    pub fn next_generation_parallel(&mut self) {
        self.alive = step_parallel(&self.alive);
        self.generation += 1;
        log::trace!("generation {}: {} alive", self.generation, self.alive.len());
    }

    #[inline]
    pub fn alive(&self) -> &LiveSet {
        &self.alive
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[inline]
    pub fn take(self) -> LiveSet {
        self.alive
    }
}
