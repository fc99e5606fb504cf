mod waveform;

use std::env;
use std::process;

use wavemeter_core::config::{DEFAULT_MIDPOINT, EstimatorConfig, ThresholdBand};
use wavemeter_core::estimator::WaveEstimator;
use wavemeter_core::telemetry::WindowLog;

use waveform::{WaveShape, Waveform};

/// Simulated conversion interval, matching a ~40 kHz free-running converter.
const TICK_US: u64 = 25;

/// Simulated time between consecutive window drains.
const REPORT_INTERVAL_US: u64 = 250_000;

#[derive(Copy, Clone, Debug)]
struct SimConfig {
    shape: WaveShape,
    frequency_hz: u32,
    amplitude: u16,
    seconds: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            shape: WaveShape::Square,
            frequency_hz: 1_000,
            amplitude: 80,
            seconds: 2,
        }
    }
}

fn main() {
    let config = parse_args().unwrap_or_else(|err| {
        eprintln!("{err}");
        eprintln!(
            "Usage: wavemeter-emulator [--wave <square|sine>] [--freq <hz>] \
             [--amp <counts>] [--seconds <s>]"
        );
        process::exit(2);
    });

    run(&config);
}

fn parse_args() -> Result<SimConfig, String> {
    let mut config = SimConfig::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--wave" => {
                let value = args.next().ok_or("--wave requires a value")?;
                config.shape = WaveShape::from_tag(&value)?;
            }
            "--freq" => {
                config.frequency_hz = parse_number(&mut args, "--freq")?;
                if config.frequency_hz == 0 || config.frequency_hz > 4_000 {
                    return Err("--freq must be between 1 and 4000 Hz".into());
                }
            }
            "--amp" => {
                config.amplitude = parse_number(&mut args, "--amp")?;
            }
            "--seconds" => {
                config.seconds = parse_number(&mut args, "--seconds")?;
                if config.seconds == 0 {
                    return Err("--seconds must be at least 1".into());
                }
            }
            other => return Err(format!("unrecognized argument `{other}`")),
        }
    }

    Ok(config)
}

fn parse_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, String> {
    let value = args.next().ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag}: `{value}` is not a valid number"))
}

fn run(config: &SimConfig) {
    let mut estimator =
        WaveEstimator::<u64>::new(EstimatorConfig::new(ThresholdBand::default_band()));
    let wave = Waveform::new(
        config.shape,
        config.frequency_hz,
        config.amplitude,
        DEFAULT_MIDPOINT,
    );
    let mut log = WindowLog::<u64>::new();

    println!(
        "Streaming a {:?} wave at {} Hz, amplitude {} counts, for {} s of simulated time.",
        config.shape, config.frequency_hz, config.amplitude, config.seconds
    );

    let total_us = config.seconds * 1_000_000;
    let mut next_report = REPORT_INTERVAL_US;
    let mut now = 0;

    while now < total_us {
        estimator.on_sample(wave.sample(now), now);
        now += TICK_US;

        if now >= next_report {
            next_report += REPORT_INTERVAL_US;
            match estimator.drain() {
                Some(summary) => {
                    let seq = log.record(summary, now);
                    println!(
                        "window {seq}: {} Hz, amplitude {}, {} half-cycles",
                        summary.frequency_hz, summary.amplitude, summary.half_cycles
                    );
                }
                None => println!("window at {now} us: no half-cycles observed"),
            }
        }
    }

    if log.is_empty() {
        println!("No signal detected above the threshold band.");
    } else {
        let windows = log.len() as u64;
        let mean_hz = log
            .oldest_first()
            .map(|record| u64::from(record.summary.frequency_hz))
            .sum::<u64>()
            / windows;
        println!(
            "{windows} windows, mean frequency {mean_hz} Hz, {} glitches rejected.",
            estimator.rejected_glitches()
        );
    }
}
