use crate::{Config, DelayRangeError, StartupError};
use std::io::BufRead;
use std::time::Duration;

/// Pause between two rendered generations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Delay(u32);

impl Delay {
    pub fn ms(&self) -> u32 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0 as u64)
    }
}

/// Parses the delay line.
///
/// The leading integer (optionally signed) is used and anything after it is
/// ignored. A line without a leading integer selects the default delay.
pub fn parse_delay(line: &str, config: &Config) -> Result<Delay, DelayRangeError> {
    let s = line.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Ok(Delay(config.default_delay_ms));
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    match u32::try_from(value) {
        Ok(ms) if (1..=config.max_delay_ms).contains(&ms) => Ok(Delay(ms)),
        _ => Err(DelayRangeError {
            value,
            max: config.max_delay_ms,
        }),
    }
}

/// Reads one line from `reader` and parses it; end of input selects the default.
pub fn read_delay(reader: &mut impl BufRead, config: &Config) -> Result<Delay, StartupError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(Delay(config.default_delay_ms));
    }
    let delay = parse_delay(&line, config)?;
    log::info!("Delay: {} ms", delay.ms());
    Ok(delay)
}
