//! Spin session: the `Idle -> Spinning -> Idle` state machine
//!
//! A session owns the wheel's persistent state and drives one spin at a time:
//!
//! ```text
//! spin()        select winner → plan rotation → animate_rotation(...)
//!   │
//!   ├── on_frame()   live rotation → TickDetector → indicator dip
//!   ├── on_frame()
//!   └── on_frame()   timeline done → store rotation → SpinOutcome
//! ```
//!
//! The host's frame scheduler advances the [`AnimationService`] and then calls
//! [`SpinSession::on_frame`]. There are no closures registered with the
//! service, so the session never shares its state.

use serde::{Deserialize, Serialize};

use crate::animation::{
    AnimationService, Easing, IndicatorDip, RenderHandles, RotationTween, TimelineId,
};
use crate::config::WheelConfig;
use crate::error::WheelResult;
use crate::planner::{RotationPlan, RotationPlanner};
use crate::sector::Sector;
use crate::selector::select_winning_sector_with;
use crate::tick::{TickDetector, sector_index_at, should_play_indicator};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
}

/// Rotation bookkeeping that survives between spins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    /// Accumulated rotation, never reset
    pub absolute_rotation: f64,
    /// Rounded rotation seen on the previous frame
    pub last_observed_rotation: f64,
    /// Sector index that last fired a tick
    pub last_triggered_sector: Option<i64>,
}

impl WheelState {
    /// Clear tick tracking at the start of a spin
    pub fn reset_tracking(&mut self) {
        self.last_observed_rotation = 0.0;
        self.last_triggered_sector = None;
    }
}

/// Result of a finished spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub winning_index: usize,
    pub winning_sector: Sector,
    /// Absolute rotation the wheel came to rest at
    pub total_rotation: f64,
    /// Ticks fired during the spin
    pub ticks: u32,
}

/// Spin notifications
pub trait SpinListener {
    fn on_spin_start(&mut self) {}

    fn on_spin_end(&mut self, _sector: &Sector) {}

    fn on_tick(&mut self, _sector_index: i64) {}
}

#[derive(Debug, Clone, Copy)]
struct ActiveSpin {
    winning_index: usize,
    plan: RotationPlan,
    timeline: TimelineId,
    ticks: u32,
}

/// Drives spins of one wheel through an [`AnimationService`]
pub struct SpinSession<A: AnimationService> {
    config: WheelConfig,
    animator: A,
    planner: RotationPlanner,
    detector: TickDetector,
    dip: IndicatorDip,
    handles: Option<RenderHandles>,
    indicator_timeline: Option<TimelineId>,
    state: WheelState,
    active: Option<ActiveSpin>,
    last_outcome: Option<SpinOutcome>,
    listener: Option<Box<dyn SpinListener>>,
}

impl<A: AnimationService> SpinSession<A> {
    /// Create a session; fails if the config cannot drive a spin
    pub fn new(config: WheelConfig, animator: A) -> WheelResult<Self> {
        config.validate()?;
        let geometry = config.geometry;
        Ok(Self {
            config,
            animator,
            planner: RotationPlanner::new(geometry),
            detector: TickDetector::from_geometry(&geometry),
            dip: IndicatorDip::default(),
            handles: None,
            indicator_timeline: None,
            state: WheelState::default(),
            active: None,
            last_outcome: None,
            listener: None,
        })
    }

    /// Builder: custom indicator dip (applies on the next attach)
    pub fn with_indicator_dip(mut self, dip: IndicatorDip) -> Self {
        self.dip = dip;
        self
    }

    pub fn set_listener(&mut self, listener: Box<dyn SpinListener>) {
        self.listener = Some(listener);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Take over the renderer's targets
    pub fn attach(&mut self, handles: RenderHandles) {
        if self.handles.is_some() {
            self.detach();
        }
        self.animator
            .set_rotation(handles.wheel, self.state.absolute_rotation);
        self.indicator_timeline = Some(
            self.animator
                .create_short_animation(handles.indicator, &self.dip),
        );
        self.handles = Some(handles);
    }

    /// Tear down timelines; an in-flight spin is dropped without an outcome
    pub fn detach(&mut self) {
        if let Some(active) = self.active.take() {
            log::info!("Spin to sector {} torn down", active.winning_index);
            self.animator.kill(active.timeline);
        }
        if let Some(timeline) = self.indicator_timeline.take() {
            self.animator.kill(timeline);
        }
        self.handles = None;
    }

    /// Replace the configuration between spins. Returns `false` while spinning.
    pub fn reconfigure(&mut self, config: WheelConfig) -> WheelResult<bool> {
        if self.active.is_some() {
            log::warn!("Reconfigure requested mid-spin, ignored");
            return Ok(false);
        }
        config.validate()?;
        self.planner = RotationPlanner::new(config.geometry);
        self.detector = TickDetector::from_geometry(&config.geometry);
        self.config = config;
        Ok(true)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SPIN
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start a spin. Returns `false` when already spinning or not attached.
    pub fn spin(&mut self) -> WheelResult<bool> {
        if self.active.is_some() {
            log::warn!("Spin requested while spinning, ignored");
            return Ok(false);
        }
        let Some(handles) = self.handles else {
            log::warn!("Spin requested without render targets, ignored");
            return Ok(false);
        };
        if self.indicator_timeline.is_none() {
            return Ok(false);
        }

        self.state.reset_tracking();

        let mut rng = rand::rng();
        let winning_index = select_winning_sector_with(&mut rng, &self.config.sectors)?;
        let plan = self.planner.plan_with(
            &mut rng,
            winning_index,
            self.config.sectors.len(),
            self.state.absolute_rotation,
            self.config.min_spins,
            self.config.max_spins,
        )?;

        if let Some(listener) = self.listener.as_mut() {
            listener.on_spin_start();
        }

        let timeline = self.animator.animate_rotation(
            handles.wheel,
            RotationTween {
                from: self.state.absolute_rotation,
                to: plan.total_rotation,
                duration_secs: self.config.duration_secs,
                easing: Easing::Power3Out,
            },
        );

        log::info!(
            "Spin started: sector {} ({}) over {:.1}s",
            winning_index,
            self.config.sectors[winning_index].label,
            self.config.duration_secs
        );

        self.active = Some(ActiveSpin {
            winning_index,
            plan,
            timeline,
            ticks: 0,
        });
        Ok(true)
    }

    /// Per-frame step; returns the outcome on the frame the spin completes
    pub fn on_frame(&mut self) -> Option<SpinOutcome> {
        let active = self.active?;
        let handles = self.handles?;
        let indicator = self.indicator_timeline?;

        let sector_count = self.config.sectors.len();
        let live = self.animator.current_rotation_of(handles.wheel);

        if self
            .detector
            .should_trigger(live, self.state.last_observed_rotation, sector_count)
        {
            let sector_index = sector_index_at(live, sector_count);
            if self.state.last_triggered_sector != Some(sector_index) {
                let progress = self.animator.progress_of(indicator);
                if should_play_indicator(progress, self.config.geometry.indicator_progress_threshold) {
                    self.animator.play_short_animation(indicator);
                    self.state.last_triggered_sector = Some(sector_index);
                    if let Some(spin) = self.active.as_mut() {
                        spin.ticks += 1;
                    }
                    log::trace!("Tick at {live:.1}° (sector {sector_index})");
                    if let Some(listener) = self.listener.as_mut() {
                        listener.on_tick(sector_index);
                    }
                }
            }
        }

        self.state.last_observed_rotation = live.round();

        if self.animator.progress_of(active.timeline) >= 1.0 {
            return self.complete();
        }
        None
    }

    fn complete(&mut self) -> Option<SpinOutcome> {
        let active = self.active.take()?;
        self.animator.kill(active.timeline);
        self.state.absolute_rotation = active.plan.total_rotation;

        let winning_sector = self.config.sectors[active.winning_index].clone();
        let outcome = SpinOutcome {
            winning_index: active.winning_index,
            winning_sector,
            total_rotation: active.plan.total_rotation,
            ticks: active.ticks,
        };

        log::info!(
            "Spin ended: {} at {:.2}° after {} ticks",
            outcome.winning_sector.label,
            outcome.total_rotation,
            outcome.ticks
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_spin_end(&outcome.winning_sector);
        }

        self.last_outcome = Some(outcome.clone());
        Some(outcome)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn state(&self) -> SpinState {
        if self.active.is_some() {
            SpinState::Spinning
        } else {
            SpinState::Idle
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.handles.is_some()
    }

    pub fn wheel_state(&self) -> &WheelState {
        &self.state
    }

    /// Plan of the spin in flight
    pub fn current_plan(&self) -> Option<&RotationPlan> {
        self.active.as_ref().map(|a| &a.plan)
    }

    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// The host advances the service clock through this
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}
