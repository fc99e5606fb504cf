use wavemeter_core::config::{EstimatorConfig, Polarity, ThresholdBand};
use wavemeter_core::estimator::{SampleOutcome, WaveEstimator};

/// Simulated conversion interval at a ~40 kHz sample rate.
const TICK_US: u64 = 25;

fn rising_estimator() -> WaveEstimator<u64> {
    WaveEstimator::new(EstimatorConfig::new(ThresholdBand::default_band()))
}

/// Feeds `samples` starting at `start`, one conversion per tick, and returns
/// the instant after the last one.
fn feed(est: &mut WaveEstimator<u64>, samples: &[u16], start: u64) -> u64 {
    let mut now = start;
    for &sample in samples {
        est.on_sample(sample, now);
        now += TICK_US;
    }
    now
}

#[test]
fn each_full_oscillation_yields_exactly_one_half_cycle() {
    let mut est = rising_estimator();

    // Four conversions per plateau: 100 us high, 100 us low.
    let oscillation = [525_u16, 525, 525, 525, 490, 490, 490, 490];
    let mut now = 0;
    for _ in 0..16 {
        now = feed(&mut est, &oscillation, now);
    }

    let summary = est.drain().expect("oscillations must record half-cycles");
    assert_eq!(summary.half_cycles, 16);
    assert_eq!(est.rejected_glitches(), 0);
}

#[test]
fn chatter_inside_the_band_never_opens_a_half_cycle() {
    let mut est = rising_estimator();

    let band = est.config().band;
    let chatter: Vec<u16> = (0..200)
        .map(|i| band.lower() + 1 + (i * 7) % (band.upper() - band.lower() - 1))
        .collect();
    let mut now = 0;
    for &sample in &chatter {
        assert_eq!(est.on_sample(sample, now), SampleOutcome::Ignored);
        now += TICK_US;
    }

    assert!(!est.has_data());
    assert_eq!(est.drain(), None);
}

#[test]
fn falling_detect_counts_the_mirrored_oscillation() {
    let config = EstimatorConfig::new(ThresholdBand::default_band())
        .with_polarity(Polarity::FallingDetect);
    let mut est = WaveEstimator::new(config);

    let oscillation = [490_u16, 490, 490, 490, 525, 525, 525, 525];
    let mut now = 0;
    for _ in 0..8 {
        now = feed(&mut est, &oscillation, now);
    }

    let summary = est.drain().expect("mirrored oscillations must record");
    assert_eq!(summary.half_cycles, 8);
    // The falling policy captures amplitude during the low excursion.
    assert_eq!(summary.amplitude, 490);
}

#[test]
fn excursions_that_never_reach_the_opening_threshold_are_ignored() {
    let mut est = rising_estimator();

    // Swings between the low excursion and the inside of the band: without a
    // reading at or above the upper threshold nothing ever opens.
    let swing = [490_u16, 495, 510, 517, 510, 495];
    let mut now = 0;
    for _ in 0..20 {
        now = feed(&mut est, &swing, now);
    }

    assert!(!est.has_data());
}
