//! Animation service seam
//!
//! The engine never interpolates or schedules frames itself. It configures an
//! external [`AnimationService`] (target value, duration, easing) and reads
//! back live values when the host's frame scheduler calls
//! [`SpinSession::on_frame`](crate::session::SpinSession::on_frame).

use serde::{Deserialize, Serialize};

/// Render target the service applies rotation transforms to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

/// Handle to a running or paused timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineId(pub u64);

/// The two targets the renderer hands over on mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHandles {
    /// The rotating wheel group
    pub wheel: TargetId,
    /// The fixed pointer that dips on each tick
    pub indicator: TargetId,
}

/// Easing curves used by the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    Power1Out,
    Power2Out,
    #[default]
    Power3Out,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - inv * inv,
            Easing::Power2Out => 1.0 - inv * inv * inv,
            Easing::Power3Out => 1.0 - inv * inv * inv * inv,
        }
    }
}

/// Rotation tween handed to the service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationTween {
    pub from: f64,
    pub to: f64,
    pub duration_secs: f64,
    pub easing: Easing,
}

/// One leg of a short animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DipStep {
    /// Rotation at the end of the leg
    pub rotation: f64,
    pub duration_secs: f64,
    pub easing: Easing,
}

/// Indicator dip: swing down, then spring back to rest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDip {
    pub down: DipStep,
    pub up: DipStep,
}

impl Default for IndicatorDip {
    fn default() -> Self {
        Self {
            down: DipStep {
                rotation: -10.0,
                duration_secs: 0.1,
                easing: Easing::Power1Out,
            },
            up: DipStep {
                rotation: 0.0,
                duration_secs: 0.15,
                easing: Easing::Power2Out,
            },
        }
    }
}

impl IndicatorDip {
    pub fn duration_secs(&self) -> f64 {
        self.down.duration_secs + self.up.duration_secs
    }

    /// Indicator rotation `elapsed` seconds into the dip
    pub fn rotation_at(&self, elapsed: f64) -> f64 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed < self.down.duration_secs {
            let t = elapsed / self.down.duration_secs;
            return self.down.rotation * self.down.easing.apply(t);
        }
        let up_elapsed = elapsed - self.down.duration_secs;
        if self.up.duration_secs <= 0.0 || up_elapsed >= self.up.duration_secs {
            return self.up.rotation;
        }
        let t = self.up.easing.apply(up_elapsed / self.up.duration_secs);
        self.down.rotation + (self.up.rotation - self.down.rotation) * t
    }
}

/// External time-driven animation service
///
/// Implementations own the frame clock. The session only issues commands and
/// samples values.
pub trait AnimationService {
    /// Snap a target to a rotation without animating
    fn set_rotation(&mut self, target: TargetId, rotation: f64);

    /// Start tweening a target's rotation
    fn animate_rotation(&mut self, target: TargetId, tween: RotationTween) -> TimelineId;

    /// Current rotation of a target
    fn current_rotation_of(&self, target: TargetId) -> f64;

    /// Build a paused short animation for a target
    fn create_short_animation(&mut self, target: TargetId, dip: &IndicatorDip) -> TimelineId;

    /// Restart a short animation from its beginning
    fn play_short_animation(&mut self, timeline: TimelineId);

    /// Timeline progress in `[0, 1]`
    fn progress_of(&self, timeline: TimelineId) -> f64;

    /// Stop and discard a timeline
    fn kill(&mut self, timeline: TimelineId);
}
