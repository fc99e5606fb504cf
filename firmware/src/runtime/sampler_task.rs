use embassy_futures::yield_now;

use crate::sampling::adc::IfInputAdc;
use crate::sampling::{FirmwareInstant, SharedEstimator};

/// Free-running sampling loop: one conversion, one estimator update.
///
/// Each estimator access masks interrupts, so an update is indivisible with
/// respect to the draining report task. Yielding once per conversion keeps
/// the executor responsive without throttling the converter.
#[embassy_executor::task]
pub async fn run(mut adc: IfInputAdc<'static>, estimator: &'static SharedEstimator) -> ! {
    loop {
        let sample = adc.read_once();
        let now = FirmwareInstant::now();
        estimator.lock(|cell| {
            let _ = cell.borrow_mut().on_sample(sample, now);
        });
        yield_now().await;
    }
}
