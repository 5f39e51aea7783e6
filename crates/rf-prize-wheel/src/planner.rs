//! Rotation planning: where the wheel must stop and how far it travels

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::angle::{FULL_TURN, normalize_angle, random_spin_count_with};
use crate::config::WheelGeometry;
use crate::error::{WheelError, WheelResult};

/// Immutable result of planning one spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationPlan {
    /// Absolute rotation the wheel is animated to
    pub total_rotation: f64,
    /// Landing point in the wheel frame, `[0, 360)`
    pub target_angle: f64,
    /// Wheel orientation (mod 360) that puts the landing point under the indicator
    pub wheel_rotation_needed: f64,
    /// Forward travel beyond the full turns, `[0, 360)`
    pub rotation_delta: f64,
    /// Center of the winning sector in the wheel frame
    pub sector_center_angle: f64,
    /// Landing offset from the sector center
    pub random_offset: f64,
    /// Full turns before the final approach
    pub spins: u32,
}

/// Plans spins against a fixed wheel geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationPlanner {
    geometry: WheelGeometry,
}

impl RotationPlanner {
    pub fn new(geometry: WheelGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Plan a spin that lands sector `winning_index` under the indicator.
    ///
    /// The landing point is drawn uniformly from the part of the sector that
    /// keeps `safe_zone` degrees clear of both seams. When the sector is too
    /// narrow for that margin the center is used.
    pub fn plan_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        winning_index: usize,
        sector_count: usize,
        current_rotation: f64,
        min_spins: u32,
        max_spins: u32,
    ) -> WheelResult<RotationPlan> {
        if sector_count == 0 {
            return Err(WheelError::InvalidInput("sector count must be positive".into()));
        }
        if winning_index >= sector_count {
            return Err(WheelError::InvalidInput(format!(
                "winning index {winning_index} out of range for {sector_count} sectors"
            )));
        }

        let degrees_per_sector = WheelGeometry::degrees_per_sector(sector_count);
        let sector_center_angle = self.geometry.sector_center_angle(winning_index, sector_count);

        let half_sector = degrees_per_sector / 2.0;
        let min_offset = -half_sector + self.geometry.safe_zone;
        let max_offset = half_sector - self.geometry.safe_zone;
        let random_offset = if max_offset > min_offset {
            rng.random_range(min_offset..max_offset)
        } else {
            0.0
        };

        let target_angle = normalize_angle(sector_center_angle + random_offset);
        let wheel_rotation_needed = normalize_angle(self.geometry.indicator_angle - target_angle);

        let mut rotation_delta = wheel_rotation_needed - normalize_angle(current_rotation);
        while rotation_delta < 0.0 {
            rotation_delta += FULL_TURN;
        }
        while rotation_delta >= FULL_TURN {
            rotation_delta -= FULL_TURN;
        }

        let spins = random_spin_count_with(rng, min_spins, max_spins)?;
        let total_rotation = current_rotation + f64::from(spins) * FULL_TURN + rotation_delta;

        let plan = RotationPlan {
            total_rotation,
            target_angle,
            wheel_rotation_needed,
            rotation_delta,
            sector_center_angle,
            random_offset,
            spins,
        };
        log::debug!(
            "Planned sector {winning_index}/{sector_count}: {spins} spins, delta {:.2}, total {:.2}",
            plan.rotation_delta,
            plan.total_rotation
        );
        Ok(plan)
    }
}

/// Plan a spin with the default geometry and the thread-local RNG
pub fn calculate_wheel_rotation(
    winning_index: usize,
    sector_count: usize,
    current_rotation: f64,
    min_spins: u32,
    max_spins: u32,
) -> WheelResult<RotationPlan> {
    RotationPlanner::default().plan_with(
        &mut rand::rng(),
        winning_index,
        sector_count,
        current_rotation,
        min_spins,
        max_spins,
    )
}
