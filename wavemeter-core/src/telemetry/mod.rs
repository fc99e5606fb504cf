//! Window history retained for diagnostics.
//!
//! Drained window summaries are mirrored into a fixed-size ring so hosts can
//! show recent measurement activity without touching the live accumulators.

use heapless::{HistoryBuf, OldestOrdered};

use crate::accumulator::WindowSummary;

/// Total number of window records retained in memory.
pub const WINDOW_LOG_CAPACITY: usize = 32;

/// One drained window tagged with its drain instant and sequence number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindowRecord<TInstant>
where
    TInstant: Copy,
{
    pub seq: u32,
    pub drained_at: TInstant,
    pub summary: WindowSummary,
}

/// Window history ring buffer type alias.
pub type WindowRing<TInstant, const CAPACITY: usize = WINDOW_LOG_CAPACITY> =
    HistoryBuf<WindowRecord<TInstant>, CAPACITY>;

/// Records drained windows into a fixed-size ring buffer.
pub struct WindowLog<TInstant, const CAPACITY: usize = WINDOW_LOG_CAPACITY>
where
    TInstant: Copy,
{
    ring: WindowRing<TInstant, CAPACITY>,
    next_seq: u32,
}

impl<TInstant, const CAPACITY: usize> WindowLog<TInstant, CAPACITY>
where
    TInstant: Copy,
{
    /// Creates a new window log with an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ring: HistoryBuf::new(),
            next_seq: 0,
        }
    }

    /// Records a drained summary and returns its sequence number.
    pub fn record(&mut self, summary: WindowSummary, drained_at: TInstant) -> u32 {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        self.ring.write(WindowRecord {
            seq,
            drained_at,
            summary,
        });

        seq
    }

    /// Returns an iterator over the recorded windows in chronological order.
    pub fn oldest_first(&self) -> OldestOrdered<'_, WindowRecord<TInstant>> {
        self.ring.oldest_ordered()
    }

    /// Returns the most recent window record, if available.
    pub fn latest(&self) -> Option<&WindowRecord<TInstant>> {
        self.ring.recent()
    }

    /// Returns the number of records currently stored.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` when no window records are stored.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

impl<TInstant, const CAPACITY: usize> Default for WindowLog<TInstant, CAPACITY>
where
    TInstant: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
