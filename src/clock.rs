//! The time parameter driving every rotating term at once.

/// A mutable phase value with two drive modes: idle (seek it explicitly) or
/// running (advance it by `rate · dt` on every tick).
///
/// Whoever owns the frame loop owns this clock. There is no scheduling here;
/// stopping the drive is simply a matter of not ticking anymore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorClock {
    value: f64,
    rate: f64,
    running: bool,
}

impl Default for VectorClock {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorClock {
    /// A fresh clock at time 0, idle, with a unit rate.
    pub fn new() -> Self {
        Self {
            value: 0.0,
            rate: 1.0,
            running: false,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Seek to an arbitrary time. Allowed in either state; no bounds apply.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Begin free-running at `rate` time units per unit of tick time.
    pub fn start(&mut self, rate: f64) {
        self.rate = rate;
        self.running = true;
    }

    /// Stop free-running. The value stays where it is.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Advance by `rate · dt` when running; idle clocks ignore the tick.
    /// Returns the current value either way.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.running {
            self.value += self.rate * dt;
        }
        self.value
    }
}
