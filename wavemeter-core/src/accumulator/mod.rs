//! Running sums and counts for one measurement window.
//!
//! A window spans the time between two consecutive drains. The accumulator
//! keeps a reciprocal-duration sum so the reported frequency is the average
//! of instantaneous half-cycle frequencies rather than an average of
//! durations.

use core::time::Duration;

const MICROS_PER_SEC: u64 = 1_000_000;

/// Averaged results for one drained window.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct WindowSummary {
    /// Full-cycle frequency in Hz.
    pub frequency_hz: u32,
    /// Mean raw reading observed while half-cycles were open.
    pub amplitude: u16,
    /// Number of validated half-cycles contributing to the average.
    pub half_cycles: u32,
}

/// Accumulates half-cycle and amplitude observations between drains.
///
/// Sums are `u64` and counts `u32`: a gated half-cycle contributes at most
/// 20 000 to the frequency sum, so even a window left undrained for hours of
/// continuous 4 kHz input stays far from wrapping.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct WindowAccumulator {
    freq_sum: u64,
    freq_count: u32,
    amp_sum: u64,
    amp_count: u32,
}

impl WindowAccumulator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            freq_sum: 0,
            freq_count: 0,
            amp_sum: 0,
            amp_count: 0,
        }
    }

    /// Folds one validated half-cycle duration into the frequency average.
    ///
    /// `duration` must be nonzero; the estimator's glitch gate guarantees it.
    pub fn record_half_cycle(&mut self, duration: Duration) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.freq_sum += MICROS_PER_SEC / micros;
        self.freq_count += 1;
    }

    /// Folds one raw reading taken inside an open half-cycle.
    pub fn record_amplitude(&mut self, sample: u16) {
        self.amp_sum += u64::from(sample);
        self.amp_count += 1;
    }

    /// Returns `true` once at least one half-cycle has been recorded.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.freq_count > 0
    }

    /// Computes this window's averages and resets for the next window.
    ///
    /// Returns `None` when no half-cycle was recorded, leaving the (already
    /// empty) window in place. Each recorded duration spans half a period, so
    /// the averaged reciprocal is halved to report full-cycle Hz. Division is
    /// truncating, sum over count first, then the halving.
    pub fn drain(&mut self) -> Option<WindowSummary> {
        if !self.has_data() {
            return None;
        }

        let frequency = self.freq_sum / u64::from(self.freq_count) / 2;
        // Normally every recorded half-cycle contributed at least its opening
        // sample. The exception: a drain that lands inside an open half-cycle
        // takes those amplitude samples with it, so the closure can reach the
        // next window with an empty amplitude pair.
        let amplitude = self
            .amp_sum
            .checked_div(u64::from(self.amp_count))
            .unwrap_or(0);

        let summary = WindowSummary {
            frequency_hz: u32::try_from(frequency).unwrap_or(u32::MAX),
            amplitude: u16::try_from(amplitude).unwrap_or(u16::MAX),
            half_cycles: self.freq_count,
        };
        *self = Self::new();
        Some(summary)
    }
}
