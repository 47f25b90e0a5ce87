//! `WalkStats` — counts of non-working days stepped over during a walk.

use crate::calendar::DayKind;

/// Accumulated skip counters.
///
/// Forward snaps and walks record each non-working day they step over, so a
/// calculation can report how many weekend days and holidays it crossed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Non-working weekend days stepped over.
    pub weekends_skipped: u32,
    /// Holidays on otherwise-working weekdays stepped over.
    pub holidays_skipped: u32,
}

impl WalkStats {
    /// Record one skipped day of the given kind. Working days are ignored.
    pub fn record(&mut self, kind: DayKind) {
        match kind {
            DayKind::Weekend => self.weekends_skipped += 1,
            DayKind::Holiday => self.holidays_skipped += 1,
            DayKind::Working => {}
        }
    }

    /// Total skipped days.
    pub fn total(&self) -> u32 {
        self.weekends_skipped + self.holidays_skipped
    }
}
