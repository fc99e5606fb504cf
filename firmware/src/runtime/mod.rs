use cortex_m::interrupt;
use cortex_m::register::primask;
use critical_section::{self, RawRestoreState};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32 as hal;
use embassy_stm32::adc::Adc;
use static_cell::StaticCell;
use wavemeter_core::config::{EstimatorConfig, ThresholdBand};

use crate::sampling::adc::IfInputAdc;
use crate::sampling::{self, SharedEstimator};

mod report_task;
mod sampler_task;

critical_section::set_impl!(InterruptCriticalSection);

struct InterruptCriticalSection;

unsafe impl critical_section::Impl for InterruptCriticalSection {
    unsafe fn acquire() -> RawRestoreState {
        let primask = primask::read();
        interrupt::disable();
        primask.is_active()
    }

    unsafe fn release(restore_state: RawRestoreState) {
        if restore_state {
            unsafe {
                interrupt::enable();
            }
        }
    }
}

static ESTIMATOR: StaticCell<SharedEstimator> = StaticCell::new();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) {
    let config = hal::Config::default();
    let hal::Peripherals { ADC1, PA0, .. } = hal::init(config);

    let estimator: &'static SharedEstimator = &*ESTIMATOR.init(sampling::shared_estimator(
        EstimatorConfig::new(ThresholdBand::default_band()),
    ));

    let adc = IfInputAdc::new(Adc::new(ADC1), PA0);

    spawner
        .spawn(sampler_task::run(adc, estimator))
        .expect("failed to spawn sampler task");

    spawner
        .spawn(report_task::run(estimator))
        .expect("failed to spawn report task");

    core::future::pending::<()>().await;
}
