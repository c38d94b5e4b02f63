use instant::Instant;
use std::thread;
use std::time::Duration;

pub struct FrameClock {
    timestamp: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { timestamp: Instant::now() }
    }

    pub fn tick(&mut self, target_fps: u32) -> Duration {
        if target_fps > 0 {
            let budget = Duration::from_secs_f64(1.0 / target_fps as f64);
            let elapsed = self.timestamp.elapsed();

            if elapsed < budget {
                thread::sleep(budget - elapsed);
            }
        }

        let now = Instant::now();
        let delta = now - self.timestamp;
        self.timestamp = now;

        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
