//! Composed sampling pipeline: edge detection, glitch gating, accumulation.

use core::time::Duration;

use crate::accumulator::{WindowAccumulator, WindowSummary};
use crate::config::EstimatorConfig;
use crate::sampler::{Crossing, EdgeDetector, MonotonicInstant};

/// Outcome of feeding one sample through the estimator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SampleOutcome {
    /// No crossing; the sample may still have contributed amplitude.
    Ignored,
    /// A half-cycle opened on this sample.
    HalfCycleOpened,
    /// A half-cycle closed on this sample. `recorded` is `false` when the
    /// glitch gate discarded it.
    HalfCycleClosed { duration: Duration, recorded: bool },
}

/// Owned measurement state shared between the sample producer and the
/// draining consumer.
///
/// The estimator itself is plain sequential state. Whoever embeds it decides
/// how producer and consumer are kept from interleaving: the firmware wraps
/// it in an interrupt-masking mutex so a drain suspends the producer, hosts
/// simply call it from one place.
pub struct WaveEstimator<TInstant> {
    config: EstimatorConfig,
    detector: EdgeDetector<TInstant>,
    window: WindowAccumulator,
    rejected_glitches: u32,
}

impl<TInstant: MonotonicInstant> WaveEstimator<TInstant> {
    #[must_use]
    pub const fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            detector: EdgeDetector::new(),
            window: WindowAccumulator::new(),
            rejected_glitches: 0,
        }
    }

    /// Returns the active sampling policy.
    #[must_use]
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Half-cycle closures discarded by the minimum-duration gate so far.
    #[must_use]
    pub const fn rejected_glitches(&self) -> u32 {
        self.rejected_glitches
    }

    /// Feeds one converter reading taken at `now` through the pipeline.
    pub fn on_sample(&mut self, sample: u16, now: TInstant) -> SampleOutcome {
        let outcome = match self.detector.classify(&self.config, sample, now) {
            Crossing::None => SampleOutcome::Ignored,
            Crossing::Opened => SampleOutcome::HalfCycleOpened,
            Crossing::Closed { duration } => {
                let recorded = duration > self.config.min_half_cycle;
                if recorded {
                    self.window.record_half_cycle(duration);
                } else {
                    self.rejected_glitches = self.rejected_glitches.saturating_add(1);
                }
                SampleOutcome::HalfCycleClosed { duration, recorded }
            }
        };

        // Amplitude capture fires on the opening sample but not on the
        // closing one.
        if self.detector.is_open() {
            self.window.record_amplitude(sample);
        }

        outcome
    }

    /// Returns `true` once the current window holds at least one half-cycle.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.window.has_data()
    }

    /// Drains the current window, if any half-cycle was recorded.
    pub fn drain(&mut self) -> Option<WindowSummary> {
        self.window.drain()
    }
}
