//! Edge detection over the raw sample stream.
//!
//! The detector is a pure state machine: each call to
//! [`EdgeDetector::classify`] consumes one converter reading plus the instant
//! it was taken and reports whether a half-cycle opened or closed. No clock
//! source or interrupt machinery leaks in here, which keeps the hot path
//! drivable with synthetic samples.

use core::time::Duration;

use crate::config::EstimatorConfig;

/// Trait implemented by monotonic instant wrappers used for half-cycle
/// timing.
pub trait MonotonicInstant: Copy {
    /// Returns the saturating duration from `earlier` to `self`.
    fn saturating_duration_since(&self, earlier: Self) -> Duration;
}

/// Bare microsecond counters serve as instants on hosts without a clock
/// source.
impl MonotonicInstant for u64 {
    fn saturating_duration_since(&self, earlier: Self) -> Duration {
        Duration::from_micros(self.saturating_sub(earlier))
    }
}

/// Detector phase: waiting for an opening crossing, or timing an open
/// half-cycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EdgePhase<TInstant> {
    Idle,
    Open { since: TInstant },
}

/// What a single classified sample did to the detector state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Crossing {
    /// The sample stayed inside the band or on the non-transition side.
    None,
    /// The sample opened a new half-cycle.
    Opened,
    /// The sample closed the open half-cycle after `duration`.
    Closed { duration: Duration },
}

/// Threshold-band edge detector.
///
/// Invocations are assumed to be strictly serialized; there is only ever one
/// sample producer.
pub struct EdgeDetector<TInstant> {
    phase: EdgePhase<TInstant>,
}

impl<TInstant: MonotonicInstant> EdgeDetector<TInstant> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: EdgePhase::Idle,
        }
    }

    /// Returns `true` while a half-cycle is being timed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.phase, EdgePhase::Open { .. })
    }

    /// Classifies one reading against the configured band.
    ///
    /// Every closure is reported, including near-instant ones; the
    /// minimum-duration gate belongs to the caller.
    pub fn classify(
        &mut self,
        config: &EstimatorConfig,
        sample: u16,
        now: TInstant,
    ) -> Crossing {
        match self.phase {
            EdgePhase::Idle if config.polarity.opens(&config.band, sample) => {
                self.phase = EdgePhase::Open { since: now };
                Crossing::Opened
            }
            EdgePhase::Open { since } if config.polarity.closes(&config.band, sample) => {
                self.phase = EdgePhase::Idle;
                Crossing::Closed {
                    duration: now.saturating_duration_since(since),
                }
            }
            _ => Crossing::None,
        }
    }
}

impl<TInstant: MonotonicInstant> Default for EdgeDetector<TInstant> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EstimatorConfig, Polarity, ThresholdBand};

    fn rising_config() -> EstimatorConfig {
        EstimatorConfig::new(ThresholdBand::default_band())
    }

    #[test]
    fn opening_requires_the_upper_threshold() {
        let config = rising_config();
        let mut detector = EdgeDetector::new();

        assert_eq!(detector.classify(&config, 517, 0_u64), Crossing::None);
        assert!(!detector.is_open());

        assert_eq!(detector.classify(&config, 518, 10_u64), Crossing::Opened);
        assert!(detector.is_open());
    }

    #[test]
    fn closing_reports_the_elapsed_duration() {
        let config = rising_config();
        let mut detector = EdgeDetector::new();

        detector.classify(&config, 520, 100_u64);
        let crossing = detector.classify(&config, 495, 600_u64);
        assert_eq!(
            crossing,
            Crossing::Closed {
                duration: Duration::from_micros(500)
            }
        );
        assert!(!detector.is_open());
    }

    #[test]
    fn repeated_excursions_do_not_reopen() {
        let config = rising_config();
        let mut detector = EdgeDetector::new();

        assert_eq!(detector.classify(&config, 520, 0_u64), Crossing::Opened);
        // Staying above the upper threshold keeps the same half-cycle open.
        assert_eq!(detector.classify(&config, 530, 25_u64), Crossing::None);
        assert_eq!(detector.classify(&config, 519, 50_u64), Crossing::None);
        assert!(detector.is_open());
    }

    #[test]
    fn band_noise_produces_no_crossings() {
        let config = rising_config();
        let mut detector = EdgeDetector::new();

        // Chatter strictly inside the hysteresis band.
        for (i, sample) in [500_u16, 510, 505, 515, 499, 517].iter().enumerate() {
            assert_eq!(
                detector.classify(&config, *sample, i as u64 * 25),
                Crossing::None
            );
        }
        assert!(!detector.is_open());
    }

    #[test]
    fn falling_detect_mirrors_the_transitions() {
        let config = rising_config().with_polarity(Polarity::FallingDetect);
        let mut detector = EdgeDetector::new();

        assert_eq!(detector.classify(&config, 498, 0_u64), Crossing::Opened);
        assert_eq!(
            detector.classify(&config, 518, 400_u64),
            Crossing::Closed {
                duration: Duration::from_micros(400)
            }
        );
    }

    #[test]
    fn close_before_open_is_ignored() {
        let config = rising_config();
        let mut detector = EdgeDetector::new();

        assert_eq!(detector.classify(&config, 490, 0_u64), Crossing::None);
        assert!(!detector.is_open());
    }
}
