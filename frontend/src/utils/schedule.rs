use gloo_timers::callback::Interval;

/// Owns at most one repeating schedule.
///
/// Dropping the handle cancels it, so `stop` only has to let go of it.
#[derive(Debug)]
pub struct Ticker<H = Interval> {
    handle: Option<H>,
}

impl<H> Default for Ticker<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Ticker<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Installs the handle built by `schedule` unless one is already running.
    /// Returns whether a new schedule was started.
    pub fn start_with(&mut self, schedule: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(schedule());
        true
    }

    /// Idempotent. Returns whether something was running.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

impl Ticker<Interval> {
    pub fn start(&mut self, period_ms: u32, tick: impl FnMut() + 'static) -> bool {
        self.start_with(|| Interval::new(period_ms, tick))
    }
}
