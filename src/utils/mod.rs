mod config;
mod delay;
mod fps_limit;
mod parse_field;
mod random;

pub use config::{Config, Markers};
pub use delay::{parse_delay, read_delay, Delay};
pub use fps_limit::FrameLimiter;
pub use parse_field::{init_field, parse_field, FieldLoad};
pub use random::{generate_field, generate_field_seeded, time_seed};
