mod app;
mod error;
mod grid;
mod life;
mod render;
mod rule;
mod utils;

pub use app::{App, RunSummary};
pub use error::{DelayRangeError, FieldLoadError, StartupError};
pub use grid::{normalize, Grid};
pub use life::{step, Life, StepStats};
pub use render::Renderer;
pub use rule::{mutate, Mutation};
pub use utils::{
    generate_field, generate_field_seeded, init_field, parse_delay, parse_field, read_delay,
    time_seed, Config, Delay, FieldLoad, FrameLimiter, Markers,
};
