use crate::{mutate, Grid, Mutation};

/// Counters collected while computing one generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StepStats {
    /// Live cells in the new generation.
    pub alive: usize,
    pub born: usize,
    pub died: usize,
}

impl StepStats {
    /// `true` while the field is non-empty and something changed.
    ///
    /// Oscillators with period >= 2 keep this `true` forever; only exact
    /// stasis or extinction stops the simulation.
    pub fn advanced(&self) -> bool {
        self.alive > 0 && (self.born > 0 || self.died > 0)
    }
}

/// Computes the generation following `curr`.
///
/// Neighbours are always counted on `curr`, never on the partially built result.
pub fn step(curr: &Grid) -> (Grid, StepStats) {
    let (width, height) = curr.size();
    let mut stats = StepStats::default();
    let mut cells = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let alive = curr.get(row, col);
            let next = match mutate(alive, curr.count_neighbours(row, col)) {
                Mutation::Born => {
                    stats.born += 1;
                    true
                }
                Mutation::Die => {
                    stats.died += 1;
                    false
                }
                Mutation::Stay => alive,
            };
            stats.alive += next as usize;
            cells.push(next);
        }
    }
    (Grid::from_cells(width, height, cells), stats)
}

/// Owns the current generation and advances it in place.
pub struct Life {
    grid: Grid,
    generation: u64,
}

impl Life {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of updates performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the field with the next generation.
    pub fn update(&mut self) -> StepStats {
        let (next, stats) = step(&self.grid);
        self.grid = next;
        self.generation += 1;
        log::debug!(
            "generation {}: alive={} born={} died={}",
            self.generation,
            stats.alive,
            stats.born,
            stats.died
        );
        stats
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
