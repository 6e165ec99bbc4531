use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared flag used to abandon a pending readiness wait.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready { attempts: u32 },
    GaveUp { attempts: u32 },
    Cancelled,
}

/// Bounded "retry until the markup is there" loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPoll {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for ReadinessPoll {
    fn default() -> Self {
        Self {
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ReadinessPoll {
    pub const DEFAULT_INTERVAL_MS: u32 = 500;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

    /// Probes immediately, then after every `interval_ms` sleep, for at most
    /// `max_attempts` probes (always at least one).
    pub async fn wait_until<P, S, F>(
        &self,
        mut probe: P,
        mut sleep: S,
        cancel: &CancelToken,
    ) -> Readiness
    where
        P: FnMut() -> bool,
        S: FnMut(u32) -> F,
        F: Future<Output = ()>,
    {
        let limit = self.max_attempts.max(1);
        let mut attempts = 0;
        loop {
            if cancel.is_cancelled() {
                return Readiness::Cancelled;
            }
            attempts += 1;
            if probe() {
                return Readiness::Ready { attempts };
            }
            if attempts >= limit {
                return Readiness::GaveUp { attempts };
            }
            sleep(self.interval_ms).await;
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}
