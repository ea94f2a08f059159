use std::time::Instant;
use crate::traits::FrameSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the iterator was created
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame information.
/// Pull one item at the top of each redraw: `let frame = frames.next()`.
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

impl FrameSource for FrameIterator {
    fn resync(&mut self) {
        self.last_frame_time = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frames_are_numbered_in_order() {
        let mut frames = FrameIterator::new();
        let numbers: Vec<u64> = frames.by_ref().take(3).map(|f| f.number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
        assert_eq!(frames.next().map(|f| f.number), Some(3));
    }

    #[test]
    fn delta_measures_gap_between_frames() {
        let mut frames = FrameIterator::new();
        frames.next();

        thread::sleep(Duration::from_millis(10));
        let frame = frames.next().unwrap();

        assert!(frame.delta >= 0.009);
        assert!(frame.time >= frame.delta);
    }

    #[test]
    fn resync_discards_idle_time() {
        let mut frames = FrameIterator::new();
        thread::sleep(Duration::from_millis(20));
        frames.resync();

        let frame = frames.next().unwrap();
        assert!(frame.delta < 0.015);
        assert!(frame.time >= 0.019);
    }
}
