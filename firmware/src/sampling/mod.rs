#![cfg_attr(not(target_os = "none"), allow(dead_code))]

//! Sampling surface bridging firmware tasks with `wavemeter-core`.
//!
//! The measurement core is clock-agnostic; this module binds it to the
//! Embassy monotonic clock and wraps it in the mutex that makes the
//! producer/consumer hand-off safe on target.

#[cfg(target_os = "none")]
pub mod adc;

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
#[cfg(target_os = "none")]
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
#[cfg(not(target_os = "none"))]
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::{Duration, Instant};
use wavemeter_core::config::EstimatorConfig;
use wavemeter_core::estimator::WaveEstimator;
use wavemeter_core::sampler::MonotonicInstant;

/// Time between consecutive window drains by the report task.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(250);

#[cfg(target_os = "none")]
type SamplingMutex = CriticalSectionRawMutex;
#[cfg(not(target_os = "none"))]
type SamplingMutex = NoopRawMutex;

/// Monotonic timestamp handed to the measurement core.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FirmwareInstant(Instant);

impl FirmwareInstant {
    /// Captures the current monotonic time.
    #[cfg(target_os = "none")]
    pub fn now() -> Self {
        Self(Instant::now())
    }

    /// Returns the wrapped Embassy instant.
    #[allow(dead_code)]
    pub fn into_embassy(self) -> Instant {
        self.0
    }
}

impl From<Instant> for FirmwareInstant {
    fn from(instant: Instant) -> Self {
        Self(instant)
    }
}

impl MonotonicInstant for FirmwareInstant {
    fn saturating_duration_since(&self, earlier: Self) -> core::time::Duration {
        let micros = self.0.as_micros().saturating_sub(earlier.0.as_micros());
        core::time::Duration::from_micros(micros)
    }
}

/// Estimator state shared between the sampling producer and the draining
/// report task.
///
/// On target every access masks interrupts for its duration, so a drain's
/// read-and-reset cannot interleave with the producer.
pub type SharedEstimator = Mutex<SamplingMutex, RefCell<WaveEstimator<FirmwareInstant>>>;

/// Builds the shared estimator for the given sampling policy.
pub const fn shared_estimator(config: EstimatorConfig) -> SharedEstimator {
    Mutex::new(RefCell::new(WaveEstimator::new(config)))
}
