//! Headless animation service
//!
//! A clock-stepped [`AnimationService`] with no renderer attached. The CLI
//! drives spins with it and the tests use it to replay whole spins frame by
//! frame.

use std::collections::HashMap;

use crate::animation::{AnimationService, IndicatorDip, RotationTween, TargetId, TimelineId};

#[derive(Debug, Clone)]
enum TimelineKind {
    Rotation(RotationTween),
    Dip(IndicatorDip),
}

#[derive(Debug, Clone)]
struct Timeline {
    target: TargetId,
    kind: TimelineKind,
    elapsed: f64,
    playing: bool,
}

impl Timeline {
    fn duration(&self) -> f64 {
        match &self.kind {
            TimelineKind::Rotation(tween) => tween.duration_secs,
            TimelineKind::Dip(dip) => dip.duration_secs(),
        }
    }

    fn progress(&self) -> f64 {
        let duration = self.duration();
        if duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / duration).clamp(0.0, 1.0)
    }

    fn value(&self) -> f64 {
        match &self.kind {
            TimelineKind::Rotation(tween) => {
                let eased = tween.easing.apply(self.progress());
                tween.from + (tween.to - tween.from) * eased
            }
            TimelineKind::Dip(dip) => dip.rotation_at(self.elapsed),
        }
    }
}

/// Deterministic stand-in for a real animation runtime
#[derive(Debug, Default)]
pub struct HeadlessAnimator {
    rotations: HashMap<TargetId, f64>,
    timelines: HashMap<TimelineId, Timeline>,
    next_timeline: u64,
    clock: f64,
}

impl HeadlessAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds advanced since creation
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Number of timelines not yet killed
    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    /// Advance every playing timeline by `dt` seconds and apply the values
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.clock += dt;

        for timeline in self.timelines.values_mut() {
            if !timeline.playing {
                continue;
            }
            timeline.elapsed = (timeline.elapsed + dt).min(timeline.duration());
            self.rotations.insert(timeline.target, timeline.value());
            if timeline.elapsed >= timeline.duration() {
                timeline.playing = false;
            }
        }
    }

    fn insert(&mut self, timeline: Timeline) -> TimelineId {
        let id = TimelineId(self.next_timeline);
        self.next_timeline += 1;
        self.timelines.insert(id, timeline);
        id
    }
}

impl AnimationService for HeadlessAnimator {
    fn set_rotation(&mut self, target: TargetId, rotation: f64) {
        self.rotations.insert(target, rotation);
    }

    fn animate_rotation(&mut self, target: TargetId, tween: RotationTween) -> TimelineId {
        self.rotations.insert(target, tween.from);
        self.insert(Timeline {
            target,
            kind: TimelineKind::Rotation(tween),
            elapsed: 0.0,
            playing: true,
        })
    }

    fn current_rotation_of(&self, target: TargetId) -> f64 {
        self.rotations.get(&target).copied().unwrap_or(0.0)
    }

    fn create_short_animation(&mut self, target: TargetId, dip: &IndicatorDip) -> TimelineId {
        self.insert(Timeline {
            target,
            kind: TimelineKind::Dip(*dip),
            elapsed: 0.0,
            playing: false,
        })
    }

    fn play_short_animation(&mut self, timeline: TimelineId) {
        if let Some(timeline) = self.timelines.get_mut(&timeline) {
            timeline.elapsed = 0.0;
            timeline.playing = true;
        }
    }

    fn progress_of(&self, timeline: TimelineId) -> f64 {
        self.timelines
            .get(&timeline)
            .map(Timeline::progress)
            .unwrap_or(0.0)
    }

    fn kill(&mut self, timeline: TimelineId) {
        self.timelines.remove(&timeline);
    }
}
