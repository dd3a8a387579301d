/// Characters used for cells in both the input field and the rendered output.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Markers {
    pub alive: char,
    pub dead: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            alive: '@',
            dead: '.',
        }
    }
}

impl Markers {
    pub fn of(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }

    /// `Some(state)` for a known marker, `None` otherwise.
    pub fn parse(&self, ch: char) -> Option<bool> {
        if ch == self.alive {
            Some(true)
        } else if ch == self.dead {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub markers: Markers,
    pub default_delay_ms: u32,
    pub max_delay_ms: u32,
    /// Random fields are regenerated until at least `cells / min_density_divisor` are alive.
    pub min_density_divisor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            markers: Markers::default(),
            default_delay_ms: Self::DEFAULT_DELAY_MS,
            max_delay_ms: Self::MAX_DELAY_MS,
            min_density_divisor: Self::MIN_DENSITY_DIVISOR,
        }
    }
}

impl Config {
    pub const WIDTH: usize = 80;
    pub const HEIGHT: usize = 25;
    pub const DEFAULT_DELAY_MS: u32 = 300;
    pub const MAX_DELAY_MS: u32 = 3000;
    pub const MIN_DENSITY_DIVISOR: usize = 20;

    /// Config with default settings and a `width x height` field.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Minimal population accepted from the random generator.
    pub fn min_population(&self) -> usize {
        self.width * self.height / self.min_density_divisor
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("field dimensions must be positive".to_string());
        }
        if self.markers.alive == self.markers.dead {
            return Err("live and dead markers must differ".to_string());
        }
        if ['\n', '\r'].contains(&self.markers.alive) || ['\n', '\r'].contains(&self.markers.dead) {
            return Err("markers cannot be line breaks".to_string());
        }
        if self.max_delay_ms == 0 {
            return Err("max_delay_ms must be > 0".to_string());
        }
        if !(1..=self.max_delay_ms).contains(&self.default_delay_ms) {
            return Err("default_delay_ms must be between 1 and max_delay_ms".to_string());
        }
        if self.min_density_divisor == 0 {
            return Err("min_density_divisor must be > 0".to_string());
        }
        Ok(())
    }
}
