use defmt::info;
use embassy_time::Ticker;
use wavemeter_core::telemetry::WindowLog;

use crate::sampling::{FirmwareInstant, REPORT_INTERVAL, SharedEstimator};
use crate::status;

/// Periodic window drain: logs each summary and mirrors it into the status
/// atomics. Windows without a single half-cycle are skipped, not reported.
#[embassy_executor::task]
pub async fn run(estimator: &'static SharedEstimator) -> ! {
    let mut ticker = Ticker::every(REPORT_INTERVAL);
    let mut log = WindowLog::<FirmwareInstant>::new();

    loop {
        ticker.next().await;

        let drained = estimator.lock(|cell| cell.borrow_mut().drain());
        if let Some(summary) = drained {
            let seq = log.record(summary, FirmwareInstant::now());
            status::publish(seq, &summary);
            info!(
                "window {}: {} Hz, amplitude {}, {} half-cycles",
                seq, summary.frequency_hz, summary.amplitude, summary.half_cycles
            );
        }
    }
}
