use std::collections::VecDeque;
use std::time::Duration;

/// Sliding-window frame time tracker for instrumentation.
///
/// Keeps the most recent `window` samples; older ones fall off the back.
#[derive(Debug)]
pub struct FrameTimer {
    samples: VecDeque<Duration>,
    window: usize,
}

impl FrameTimer {
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "window must be positive");
        Self {
            samples: VecDeque::with_capacity(window),
            window,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        if self.samples.len() == self.window {
            self.samples.pop_front();
        }
        self.samples.push_back(dt);
    }

    /// The most recent sample.
    pub fn last(&self) -> Duration {
        self.samples.back().copied().unwrap_or(Duration::ZERO)
    }

    pub fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.samples.iter().sum();
        total / self.samples.len() as u32
    }

    pub fn max(&self) -> Duration {
        self.samples.iter().copied().max().unwrap_or(Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.samples.iter().copied().min().unwrap_or(Duration::ZERO)
    }

    pub fn count(&self) -> usize {
        self.samples.len()
    }
}
