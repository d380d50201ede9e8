use std::time::{Duration, Instant};

/// Length of one statistics window.
pub const STATS_WINDOW: Duration = Duration::from_secs(1);

/// Frame rate statistics over one window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsStats {
    pub min: f32,
    pub avg: f32,
    pub max: f32,
}

#[derive(Debug, Copy, Clone)]
struct Intervals {
    count: u32,
    sum: Duration,
    min: Duration,
    max: Duration,
}

impl Intervals {
    fn new(interval: Duration) -> Self {
        Self {
            count: 1,
            sum: interval,
            min: interval,
            max: interval,
        }
    }

    fn add(&mut self, interval: Duration) {
        self.count += 1;
        self.sum += interval;
        self.min = self.min.min(interval);
        self.max = self.max.max(interval);
    }

    fn stats(&self) -> FpsStats {
        // Zero-length intervals (coarse clocks) are clamped to a microsecond.
        let floor = Duration::from_micros(1);
        FpsStats {
            min: 1.0 / self.max.max(floor).as_secs_f32(),
            avg: self.count as f32 / self.sum.max(floor).as_secs_f32(),
            max: 1.0 / self.min.max(floor).as_secs_f32(),
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum State {
    Stopped,
    Started { window_start: Instant },
    FirstTick { window_start: Instant, prev: Instant },
    Collecting { window_start: Instant, prev: Instant, intervals: Intervals },
}

/// Collects min/avg/max frame rate over one-second windows.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    state: State,
}

impl FpsMeter {
    pub fn stopped() -> Self {
        Self { state: State::Stopped }
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, State::Stopped)
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.state = State::Started { window_start: now };
    }

    /// Stops timing and returns the statistics of the unfinished window, if any.
    pub fn stop(&mut self) -> Option<FpsStats> {
        let stats = self.intervals().map(|i| i.stats());
        self.state = State::Stopped;
        stats
    }

    pub fn tick(&mut self) -> Option<FpsStats> {
        self.tick_at(Instant::now())
    }

    /// Registers a frame presented at `now`. Returns statistics when a window closes.
    ///
    /// Ticks on a stopped meter are ignored.
    pub fn tick_at(&mut self, now: Instant) -> Option<FpsStats> {
        let window_start = match self.state {
            State::Stopped => return None,
            State::Started { window_start } => {
                self.state = State::FirstTick { window_start, prev: now };
                window_start
            }
            State::FirstTick { window_start, prev } => {
                self.state = State::Collecting {
                    window_start,
                    prev: now,
                    intervals: Intervals::new(now.saturating_duration_since(prev)),
                };
                window_start
            }
            State::Collecting { window_start, prev, mut intervals } => {
                intervals.add(now.saturating_duration_since(prev));
                self.state = State::Collecting { window_start, prev: now, intervals };
                window_start
            }
        };

        if now.saturating_duration_since(window_start) < STATS_WINDOW {
            return None;
        }

        let stats = self.intervals().map(|i| i.stats());
        self.state = State::FirstTick { window_start: now, prev: now };
        stats
    }

    fn intervals(&self) -> Option<Intervals> {
        match self.state {
            State::Collecting { intervals, .. } => Some(intervals),
            _ => None,
        }
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::stopped()
    }
}
