//! Fade-in / slide-in animation shown when the status changes.

use std::time::{Duration, Instant};

use super::placement::Point;

/// Circular ease-in-out on `t` in [0, 1].
pub fn circle_ease_in_out(t: f64) -> f64 {
    let t = crate::clamp(t, 0.0, 1.0);
    let ease_in = |t: f64| 1.0 - (1.0 - t * t).max(0.0).sqrt();
    if t < 0.5 {
        ease_in(2.0 * t) / 2.0
    } else {
        (1.0 - ease_in(2.0 - 2.0 * t)) / 2.0 + 0.5
    }
}

/// State of the window at one instant of the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Point,
    /// Window opacity in [0, 1].
    pub opacity: f64,
    pub finished: bool,
}

/// Opacity 0 → 1 (linear) while sliding up from `target + rise` to `target`.
#[derive(Debug, Clone, Copy)]
pub struct ShowAnimation {
    start: Instant,
    duration: Duration,
    target: Point,
    rise: i32,
}

impl ShowAnimation {
    /// `rise` is the starting distance below the target, in pixels.
    pub fn new(start: Instant, duration: Duration, target: Point, rise: i32) -> Self {
        Self {
            start,
            duration,
            target,
            rise,
        }
    }

    /// Fraction of the animation elapsed at `now`, in [0, 1].
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        crate::clamp(elapsed.as_secs_f64() / self.duration.as_secs_f64(), 0.0, 1.0)
    }

    pub fn frame(&self, now: Instant) -> Frame {
        let t = self.progress(now);
        if t >= 1.0 {
            return Frame {
                origin: self.target,
                opacity: 1.0,
                finished: true,
            };
        }
        let offset = (f64::from(self.rise) * (1.0 - circle_ease_in_out(t))).round() as i32;
        Frame {
            origin: Point::new(self.target.x, self.target.y + offset),
            opacity: t,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert!(circle_ease_in_out(0.0).abs() < 1e-12);
        assert!((circle_ease_in_out(0.5) - 0.5).abs() < 1e-12);
        assert!((circle_ease_in_out(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ease_is_symmetric() {
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let mirrored = 1.0 - circle_ease_in_out(1.0 - t);
            assert!((circle_ease_in_out(t) - mirrored).abs() < 1e-9);
        }
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert_eq!(circle_ease_in_out(-1.0), 0.0);
        assert_eq!(circle_ease_in_out(2.0), 1.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let now = Instant::now();
        let anim = ShowAnimation::new(now, Duration::ZERO, Point::new(5, 5), 10);
        assert!(anim.frame(now).finished);
    }
}
