//! Video standard detection from the vertical sync period.
//!
//! The sync separator pulses once per field: every 20 ms for PAL, every
//! 16.7 ms for NTSC. Periods far outside that range are glitches or the
//! first edge after a dropout and are ignored.

use osd_common::VideoStandard;

/// Fields at or above this period are PAL.
pub const PAL_THRESHOLD_US: u64 = 18_000;

/// Shortest period accepted as a real field.
pub const MIN_FIELD_US: u64 = 10_000;

/// Longest period accepted as a real field.
pub const MAX_FIELD_US: u64 = 40_000;

/// Classify one field period.
pub const fn standard_from_period(period_us: u64) -> Option<VideoStandard> {
    if period_us < MIN_FIELD_US || period_us > MAX_FIELD_US {
        None
    } else if period_us >= PAL_THRESHOLD_US {
        Some(VideoStandard::Pal)
    } else {
        Some(VideoStandard::Ntsc)
    }
}

/// Tracks sync edges and reports the standard once it is stable.
///
/// A new standard is only reported after [`FieldTimer::CONFIRM_FIELDS`]
/// consecutive fields agree, so a single noisy edge does not flip the
/// overlay geometry.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldTimer {
    last_edge_us: Option<u64>,
    candidate: Option<VideoStandard>,
    streak: u8,
    current: Option<VideoStandard>,
}

impl FieldTimer {
    pub const CONFIRM_FIELDS: u8 = 4;

    pub const fn new() -> Self {
        Self {
            last_edge_us: None,
            candidate: None,
            streak: 0,
            current: None,
        }
    }

    /// Confirmed standard, if any.
    #[inline]
    pub const fn standard(&self) -> Option<VideoStandard> { self.current }

    /// Record a sync edge at `now_us`. Returns the standard when it changes.
    pub fn edge(
        &mut self,
        now_us: u64,
    ) -> Option<VideoStandard> {
        let previous = self.last_edge_us.replace(now_us)?;
        let Some(standard) = standard_from_period(now_us.saturating_sub(previous)) else {
            self.streak = 0;
            return None;
        };

        if self.candidate == Some(standard) {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.candidate = Some(standard);
            self.streak = 1;
        }

        if self.streak >= Self::CONFIRM_FIELDS && self.current != Some(standard) {
            self.current = Some(standard);
            return Some(standard);
        }
        None
    }
}
