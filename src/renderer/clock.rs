use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the simulation loop. Called once at the end of every frame.
pub trait FrameLimiter {
    fn wait(&mut self);
}

/// Sleeps until `1 / fps` has passed since the previous call.
pub struct FrameClock {
    frame_time: Duration,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_nanos(1_000_000_000 / fps.max(1) as u64),
            last_frame: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}

impl FrameLimiter for FrameClock {
    fn wait(&mut self) {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_time {
            sleep(self.frame_time - elapsed);
        }
        self.last_frame = Instant::now();
    }
}
