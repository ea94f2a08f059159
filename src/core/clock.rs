pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frames-per-second averaged over a fixed window
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_interval(FPS_UPDATE_INTERVAL)
    }

    pub fn with_interval(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the new average when a window closes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last completed average, 0 until the first window closes
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_after_interval() {
        let mut counter = FpsCounter::new();
        for _ in 0..59 {
            assert_eq!(counter.tick(1.0 / 60.0), None);
        }
        assert_eq!(counter.fps(), 0.0);

        // Push past the window edge regardless of float accumulation
        let fps = counter.tick(0.02).expect("window should close");
        assert!((fps - 60.0).abs() < 1.0);
        assert_eq!(counter.fps(), fps);
    }

    #[test]
    fn window_restarts_after_report() {
        let mut counter = FpsCounter::with_interval(0.5);
        assert_eq!(counter.tick(0.5), Some(2.0));
        assert_eq!(counter.tick(0.25), None);
        assert_eq!(counter.tick(0.25), Some(4.0));
    }
}
