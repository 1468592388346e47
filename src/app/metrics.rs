use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use log::debug;

/// Frame pacing and rolling frame-time stats for the display loops.
pub struct Metrics {
    pub last_frame: Instant,
    pub frame_time: Duration,
    pub fps_counter: u32,
    pub fps_update_timer: Instant,
    pub current_fps: f32,
    pub frame_times: Vec<f32>,
}

impl Metrics {
    pub fn new(target_fps: u32) -> Self {
        Self {
            last_frame: Instant::now(),
            frame_time: Duration::from_secs_f32(1.0 / target_fps.max(1) as f32),
            fps_counter: 0,
            fps_update_timer: Instant::now(),
            current_fps: 0.0,
            frame_times: Vec::with_capacity(120),
        }
    }

    /// Time left until the next frame is due.
    pub fn until_next_frame(&self) -> Duration {
        self.frame_time.saturating_sub(self.last_frame.elapsed())
    }

    pub fn frame_due(&self) -> bool {
        self.last_frame.elapsed() >= self.frame_time
    }

    /// Call once per displayed frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        let frame_delta = now - self.last_frame;
        self.last_frame = now;

        self.fps_counter += 1;
        self.frame_times.push(frame_delta.as_secs_f32() * 1000.0);
        if self.frame_times.len() > 120 {
            self.frame_times.remove(0);
        }
        if self.fps_update_timer.elapsed() >= Duration::from_secs(1) {
            self.current_fps = self.fps_counter as f32;
            self.fps_counter = 0;
            self.fps_update_timer = now;
            debug!("{}", self);
        }
    }

    fn average_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FPS: {:.2} | Avg: {:.2}ms | Min: {:.2}ms | Max: {:.2}ms",
            self.current_fps,
            self.average_ms(),
            self.frame_times
                .iter()
                .copied()
                .reduce(f32::min)
                .unwrap_or(0.0),
            self.frame_times
                .iter()
                .copied()
                .reduce(f32::max)
                .unwrap_or(0.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_time_from_target() {
        let m = Metrics::new(300);
        assert!((m.frame_time.as_secs_f64() - 1.0 / 300.0).abs() < 1e-6);
        assert!(m.until_next_frame() <= m.frame_time);
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let m = Metrics::new(0);
        assert_eq!(m.frame_time, Duration::from_secs(1));
    }

    #[test]
    fn window_keeps_last_120_frames() {
        let mut m = Metrics::new(60);
        for _ in 0..130 {
            m.update();
        }
        assert_eq!(m.frame_times.len(), 120);
        assert!(m.to_string().starts_with("FPS:"));
    }
}
