//! Tick detection: fires the indicator dip as seams pass the pointer
//!
//! Frames sample the wheel at irregular intervals, so a seam is rarely hit
//! exactly. Instead the distance travelled since the previous frame is used as
//! a tolerance window: a tick is due when a seam lies within that window
//! behind the current rotation.

use crate::angle::normalize_angle;
use crate::config::{INDICATOR_PROGRESS_THRESHOLD, WheelGeometry};

/// Seam-crossing detector for one wheel geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDetector {
    indicator_offset: f64,
}

impl Default for TickDetector {
    fn default() -> Self {
        Self::from_geometry(&WheelGeometry::default())
    }
}

impl TickDetector {
    /// `indicator_offset` is the wheel rotation at which a seam sits under the indicator
    pub fn new(indicator_offset: f64) -> Self {
        Self { indicator_offset }
    }

    pub fn from_geometry(geometry: &WheelGeometry) -> Self {
        Self::new(geometry.indicator_offset())
    }

    pub fn indicator_offset(&self) -> f64 {
        self.indicator_offset
    }

    /// True when a seam fell between `last_observed` and the rounded `live_rotation`
    pub fn should_trigger(&self, live_rotation: f64, last_observed: f64, sector_count: usize) -> bool {
        if sector_count == 0 {
            return false;
        }

        let current = live_rotation.round();
        let tolerance = current - last_observed;
        if tolerance <= 0.0 {
            return false;
        }

        let degrees_per_sector = WheelGeometry::degrees_per_sector(sector_count);
        let adjusted = normalize_angle(current - self.indicator_offset);
        adjusted % degrees_per_sector <= tolerance
    }
}

/// Seam check against the default geometry
pub fn should_trigger_indicator(live_rotation: f64, last_observed: f64, sector_count: usize) -> bool {
    TickDetector::default().should_trigger(live_rotation, last_observed, sector_count)
}

/// Index used to de-duplicate ticks, counted from rotation zero
pub fn sector_index_at(live_rotation: f64, sector_count: usize) -> i64 {
    let degrees_per_sector = WheelGeometry::degrees_per_sector(sector_count);
    (live_rotation.round() / degrees_per_sector).floor() as i64
}

/// Whether the dip may be (re)started given its current progress
///
/// A dip that never started or has already reset reads exactly zero.
pub fn should_play_indicator(progress: f64, threshold: f64) -> bool {
    progress > threshold || progress == 0.0
}

/// [`should_play_indicator`] with the default threshold
pub fn should_play_indicator_default(progress: f64) -> bool {
    should_play_indicator(progress, INDICATOR_PROGRESS_THRESHOLD)
}
