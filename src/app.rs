use crate::{
    init_field, read_delay, time_seed, Config, Delay, FrameLimiter, Grid, Life, Renderer,
    StartupError,
};
use anyhow::{Context, Result};
use rand::SeedableRng;
use std::io::{BufRead, Write};

/// What the run loop reports after the simulation stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
    /// Smoothed frame time in seconds.
    pub frametime: f64,
}

pub struct App<W: Write> {
    life: Life,                   // Current generation and its counter.
    renderer: Renderer<W>,        // Terminal output.
    fps_limiter: FrameLimiter,    // Waits the configured delay between frames.
    max_generations: Option<u64>, // Stop after this many updates even if still changing.
}

impl<W: Write> App<W> {
    pub fn new(grid: Grid, renderer: Renderer<W>, delay: Delay) -> Self {
        Self {
            life: Life::new(grid),
            renderer,
            fps_limiter: FrameLimiter::new(delay.as_duration()),
            max_generations: None,
        }
    }

    pub fn with_max_generations(mut self, max_generations: Option<u64>) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Greets the user, reads the field and the delay from `input`.
    ///
    /// `seed` - seed for the random field (if `None`, then it is taken from the clock)
    pub fn startup(
        input: &mut impl BufRead,
        renderer: &mut Renderer<W>,
        config: &Config,
        seed: Option<u64>,
        quiet: bool,
    ) -> Result<(Grid, Delay), StartupError> {
        if !quiet {
            renderer.greeting(config)?;
        }
        let seed = seed.unwrap_or_else(time_seed);
        log::info!("Random seed: {}", seed);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let grid = init_field(input, config, &mut rng)?;

        if !quiet {
            renderer.delay_prompt(config)?;
        }
        let delay = read_delay(input, config)?;
        Ok((grid, delay))
    }

    /// Renders generations until the field dies out or stops changing,
    /// then renders the final generation once more.
    pub fn run(&mut self) -> Result<RunSummary> {
        loop {
            self.draw()?;
            self.fps_limiter.delay();
            let stats = self.life.update();
            if !stats.advanced() {
                break;
            }
            if self
                .max_generations
                .is_some_and(|max| self.life.generation() >= max)
            {
                log::info!("Generation limit reached");
                break;
            }
        }
        self.draw()?;

        let summary = RunSummary {
            generations: self.life.generation(),
            population: self.life.grid().population(),
            frametime: self.fps_limiter.frametime(),
        };
        log::info!(
            "Simulation finished: generations={}, population={}, frametime={:.3}s",
            summary.generations,
            summary.population,
            summary.frametime
        );
        Ok(summary)
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }

    fn draw(&mut self) -> Result<()> {
        self.renderer
            .draw(self.life.grid())
            .with_context(|| format!("failed to draw generation {}", self.life.generation()))
    }
}
