//! Sampling loop: one-shot or timed report emission with cooperative
//! cancellation.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use crate::error::Result;

use super::assembler::build_report;
use super::provider::HardwareProvider;

/// Floor for the sampling interval, bounding per-sample overhead.
pub const MIN_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    Once,
    Timed,
}

/// Cooperative cancellation token.
///
/// `cancel()` is safe to call from a signal handler thread; waiters parked
/// in [`CancelToken::wait`] wake immediately. Cancellation is checked at the
/// top of each sampling iteration and interrupts the inter-sample wait, but
/// never an in-flight report assembly.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    wakeup: Arc<(Mutex<()>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (lock, cvar) = &*self.wakeup;
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        self.cancelled.store(true, Ordering::SeqCst);
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Block for up to `timeout`, returning early if cancelled. Returns
    /// whether cancellation was observed.
    pub fn wait(&self, timeout: Duration) -> bool {
        let (lock, cvar) = &*self.wakeup;
        let mut guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        let deadline = std::time::Instant::now() + timeout;
        while !self.is_cancelled() {
            let now = std::time::Instant::now();
            if now >= deadline {
                break;
            }
            let (g, _timeout_result) = cvar
                .wait_timeout(guard, deadline - now)
                .unwrap_or_else(|e| e.into_inner());
            guard = g;
        }
        self.is_cancelled()
    }
}

/// Drives report assembly once or on a fixed interval.
#[derive(Debug, Clone)]
pub struct Sampler {
    mode: SampleMode,
    interval: Duration,
    components: Vec<String>,
}

impl Sampler {
    /// The interval is clamped to [`MIN_INTERVAL_MS`]; it only matters in
    /// timed mode.
    pub fn new(mode: SampleMode, interval_ms: u64, components: Vec<String>) -> Self {
        Self {
            mode,
            interval: Duration::from_millis(interval_ms.max(MIN_INTERVAL_MS)),
            components,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run the sampling loop, writing one pretty-printed JSON document per
    /// sample. Returns the number of samples emitted.
    ///
    /// In timed mode the loop runs until `cancel` fires; a sample that fails
    /// to serialize or write is logged and skipped, never fatal to the loop.
    pub fn run<W: Write>(
        &self,
        provider: &mut dyn HardwareProvider,
        out: &mut W,
        cancel: &CancelToken,
    ) -> Result<usize> {
        match self.mode {
            SampleMode::Once => {
                self.sample_once(provider, out)?;
                Ok(1)
            }
            SampleMode::Timed => {
                let mut emitted = 0usize;
                loop {
                    if cancel.is_cancelled() {
                        break;
                    }
                    match self.sample_once(provider, out) {
                        Ok(()) => emitted += 1,
                        Err(e) => log::error!("sample failed: {}", e),
                    }
                    if cancel.wait(self.interval) {
                        break;
                    }
                }
                Ok(emitted)
            }
        }
    }

    fn sample_once<W: Write>(&self, provider: &mut dyn HardwareProvider, out: &mut W) -> Result<()> {
        let report = build_report(provider, &self.components);
        let json = serde_json::to_string_pretty(&report)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }
}
