use wavemeter_core::config::{EstimatorConfig, ThresholdBand};
use wavemeter_core::estimator::{SampleOutcome, WaveEstimator};
use wavemeter_core::telemetry::WindowLog;

/// Simulated conversion interval at a ~40 kHz sample rate.
const TICK_US: u64 = 25;

/// Clean square-ish wave with a 1000 us period: 500 us at 520, 500 us at 495.
fn square_wave_sample(now: u64) -> u16 {
    if now % 1_000 < 500 { 520 } else { 495 }
}

#[test]
fn square_wave_reports_period_frequency_and_plateau_amplitude() {
    let config = EstimatorConfig::new(ThresholdBand::new(508, 10).unwrap());
    let mut est = WaveEstimator::new(config);

    let mut opened = 0_u32;
    let mut now = 0;
    // Ten full cycles of the waveform.
    while now < 10_000 {
        if est.on_sample(square_wave_sample(now), now) == SampleOutcome::HalfCycleOpened {
            opened += 1;
        }
        now += TICK_US;
    }

    assert_eq!(opened, 10);
    assert!(est.has_data());

    let summary = est.drain().unwrap();
    assert_eq!(summary.half_cycles, 10);
    // Each measured half-cycle spans 500 us: 1_000_000/500 = 2000, averaged
    // and halved to the full-cycle 1000 Hz.
    assert_eq!(summary.frequency_hz, 1_000);
    // Every amplitude sample lands on the 520 plateau.
    assert_eq!(summary.amplitude, 520);
    assert_eq!(est.rejected_glitches(), 0);
}

#[test]
fn window_log_tracks_successive_drains() {
    let config = EstimatorConfig::new(ThresholdBand::default_band());
    let mut est = WaveEstimator::new(config);
    let mut log = WindowLog::<u64>::new();

    let mut now = 0;
    for window in 0..3_u64 {
        let window_end = (window + 1) * 10_000;
        while now < window_end {
            est.on_sample(square_wave_sample(now), now);
            now += TICK_US;
        }
        let summary = est.drain().expect("each window saw ten cycles");
        let seq = log.record(summary, now);
        assert_eq!(u64::from(seq), window);
    }

    assert_eq!(log.len(), 3);
    for record in log.oldest_first() {
        assert_eq!(record.summary.frequency_hz, 1_000);
        assert_eq!(record.summary.half_cycles, 10);
    }
    assert_eq!(log.latest().unwrap().drained_at, 30_000);
}
