//! IF input sampling on the STM32G0 ADC.
//!
//! Wraps the Embassy ADC driver so the sampling task sees a bare
//! [`IfInputAdc::read_once`] producing raw readings from the radar IF pin.

#![cfg(target_os = "none")]

use embassy_stm32::Peri;
use embassy_stm32::adc::{Adc, Resolution, SampleTime};
use embassy_stm32::peripherals::{ADC1, PA0};

/// Embassy ADC wrapper that produces successive IF input samples.
pub struct IfInputAdc<'d> {
    adc: Adc<'d, ADC1>,
    pin: Peri<'d, PA0>,
    discard_next: bool,
}

impl<'d> IfInputAdc<'d> {
    /// Constructs a new helper on the IF input pin.
    ///
    /// The converter runs at 10-bit resolution to match the measurement
    /// core's 0..=1023 scale, with a long sample time so the high-impedance
    /// pre-amp output settles between conversions.
    pub fn new(mut adc: Adc<'d, ADC1>, pin: Peri<'d, PA0>) -> Self {
        adc.set_resolution(Resolution::BITS10);
        adc.set_sample_time(SampleTime::CYCLES160_5);
        Self {
            adc,
            pin,
            discard_next: true,
        }
    }

    /// Runs one conversion and returns the raw reading.
    pub fn read_once(&mut self) -> u16 {
        if self.discard_next {
            // The first conversion tracks the sampling capacitor charge
            // rather than the signal.
            self.discard_next = false;
            let _ = self.adc.blocking_read(&mut self.pin);
        }
        self.adc.blocking_read(&mut self.pin)
    }
}
