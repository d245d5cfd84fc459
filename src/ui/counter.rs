//! Count-up animation for statistics.
//!
//! The counter waits until it first becomes visible, then eases towards its
//! target once per display frame and finally snaps to the exact value. The
//! browser script in `static/counter.js` follows the same curve; the server
//! uses this type to render the initial state.

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Counting { started_at: Duration },
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedCounter {
    target: u64,
    duration: Duration,
    phase: CounterPhase,
    value: u64,
}

impl AnimatedCounter {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, DEFAULT_DURATION)
    }

    pub fn with_duration(target: u64, duration: Duration) -> Self {
        // Nothing to animate towards zero.
        let phase = if target == 0 {
            CounterPhase::Settled
        } else {
            CounterPhase::Idle
        };
        Self {
            target,
            duration,
            phase,
            value: 0,
        }
    }

    /// Builds a counter from display text, keeping only its digits
    /// (`"12.500 sub"` counts to 12500). Text without digits settles at 0.
    pub fn from_display(text: &str) -> Self {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        Self::new(digits.parse().unwrap_or(0))
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Starts counting the first time the counter scrolls into view. Later
    /// visibility changes are ignored.
    pub fn on_visible(&mut self, now: Duration) {
        if self.phase == CounterPhase::Idle {
            self.phase = CounterPhase::Counting { started_at: now };
        }
    }

    /// Advances to the frame timestamp `now` and returns the displayed value.
    pub fn on_frame(&mut self, now: Duration) -> u64 {
        let CounterPhase::Counting { started_at } = self.phase else {
            return self.value;
        };

        let progress = progress(now.saturating_sub(started_at), self.duration);
        if progress >= 1.0 {
            self.phase = CounterPhase::Settled;
            self.value = self.target;
        } else {
            self.value = (ease_out_expo(progress) * self.target as f64).floor() as u64;
        }
        self.value
    }
}

fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// `1 − 2^(−10·p)`, exactly 1 at `p = 1`.
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}
