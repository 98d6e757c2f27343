//! Frame clock and the two timer shapes the experience runs on.
//!
//! Timers are plain values advanced by the fixed step and owned by the
//! scene (or layer) that started them. Cancellation is ownership: when a
//! scene unmounts, its timers drop with it and can never fire again.

/// Fixed timestep accumulator. Converts variable frame deltas into a
/// whole number of fixed logic steps.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// Cap on steps produced by one frame, so a background tab cannot
    /// trigger a spiral of catch-up work.
    const MAX_STEPS: f32 = 10.0;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time; returns how many fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * Self::MAX_STEPS);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha between ticks, in [0, 1].
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// One-shot timer. Fires exactly once when its delay elapses, then goes
/// idle until re-armed.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: f32,
    armed: bool,
}

impl Countdown {
    /// An idle countdown that will not fire until started.
    pub fn idle() -> Self {
        Self {
            remaining: 0.0,
            armed: false,
        }
    }

    pub fn started(secs: f32) -> Self {
        Self {
            remaining: secs,
            armed: true,
        }
    }

    /// Arm (or re-arm) the countdown.
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs;
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn running(&self) -> bool {
        self.armed
    }

    /// Advance; answers true exactly once, on the tick the delay elapses.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.armed = false;
            return true;
        }
        false
    }
}

/// Repeating timer. Answers how many periods elapsed this tick, so a
/// long step can yield several firings.
#[derive(Debug, Clone)]
pub struct Pulse {
    period: f32,
    accumulator: f32,
}

impl Pulse {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn tick(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let fires = (self.accumulator / self.period) as u32;
        self.accumulator -= fires as f32 * self.period;
        fires
    }
}
