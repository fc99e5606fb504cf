#![no_std]

// Measurement core for the Doppler wavemeter.
//
// This crate stays portable across MCU firmware and host tooling by avoiding
// the Rust standard library and keeping the sampling pipeline free of any
// clock source or interrupt machinery. Everything advances one converter
// reading at a time, so the same code runs under the firmware sampling task,
// the host emulator, and the test suite.

pub mod accumulator;
pub mod config;
pub mod estimator;
pub mod sampler;
pub mod telemetry;
