use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Sleeps a fixed delay between frames and keeps track of the real frame time.
pub struct FrameLimiter {
    delay: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FrameLimiter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            frame_timer: Instant::now(),
            frametime_smoothed: delay.as_secs_f64(),
        }
    }

    /// Smoothed duration of a whole frame (rendering, waiting and updating) in seconds.
    pub fn frametime(&self) -> f64 {
        self.frametime_smoothed
    }

    /// Blocks for the configured delay.
    pub fn delay(&mut self) {
        if !self.delay.is_zero() {
            sleep(self.delay);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_blocks_at_least_target() {
        let mut limiter = FrameLimiter::new(Duration::from_millis(5));
        let timer = Instant::now();
        limiter.delay();
        limiter.delay();
        assert!(timer.elapsed() >= Duration::from_millis(10));
        assert!(limiter.frametime() >= 0.005);
    }
}
