#![cfg_attr(not(target_os = "none"), allow(dead_code))]

//! Shared status storage for the firmware target.
//!
//! Lightweight atomics mirror the most recently drained window so other
//! code can surface the measurement state without touching the shared
//! estimator.

use portable_atomic::{AtomicU32, Ordering};
use wavemeter_core::accumulator::WindowSummary;

/// Sequence number (+1) of the most recent window (0 == none yet).
static WINDOW_SEQ: AtomicU32 = AtomicU32::new(0);
/// Full-cycle frequency of the most recent window, in Hz.
static FREQUENCY_HZ: AtomicU32 = AtomicU32::new(0);
/// Mean amplitude of the most recent window, in converter counts.
static AMPLITUDE: AtomicU32 = AtomicU32::new(0);
/// Half-cycles contributing to the most recent window.
static HALF_CYCLES: AtomicU32 = AtomicU32::new(0);

fn encode_seq(seq: u32) -> u32 {
    seq.wrapping_add(1)
}

fn decode_seq(raw: u32) -> Option<u32> {
    if raw == 0 { None } else { Some(raw.wrapping_sub(1)) }
}

/// Latest window as seen by the status mirror.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusSnapshot {
    pub seq: u32,
    pub summary: WindowSummary,
}

/// Publishes a drained window to the status mirror.
pub fn publish(seq: u32, summary: &WindowSummary) {
    FREQUENCY_HZ.store(summary.frequency_hz, Ordering::Relaxed);
    AMPLITUDE.store(u32::from(summary.amplitude), Ordering::Relaxed);
    HALF_CYCLES.store(summary.half_cycles, Ordering::Relaxed);
    WINDOW_SEQ.store(encode_seq(seq), Ordering::Release);
}

/// Returns the most recently published window, if any.
pub fn snapshot() -> Option<StatusSnapshot> {
    let seq = decode_seq(WINDOW_SEQ.load(Ordering::Acquire))?;
    Some(StatusSnapshot {
        seq,
        summary: WindowSummary {
            frequency_hz: FREQUENCY_HZ.load(Ordering::Relaxed),
            amplitude: u16::try_from(AMPLITUDE.load(Ordering::Relaxed)).unwrap_or(u16::MAX),
            half_cycles: HALF_CYCLES.load(Ordering::Relaxed),
        },
    })
}
