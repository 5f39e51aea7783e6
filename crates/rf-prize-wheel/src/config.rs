//! Wheel configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angle::{FULL_TURN, normalize_angle};
use crate::error::{WheelError, WheelResult};
use crate::sector::{Sector, validate_sectors};

/// Angle where sector 0 begins (12 o'clock in screen space)
pub const FIRST_SECTOR_START: f64 = -90.0;

/// Fixed angle of the indicator pointer
pub const INDICATOR_ANGLE: f64 = -30.5;

/// Margin kept away from sector seams when picking the landing point
pub const SAFE_ZONE: f64 = 3.0;

/// Fraction of the dip animation after which it may be restarted
pub const INDICATOR_PROGRESS_THRESHOLD: f64 = 0.7;

/// Fixed angular layout of the wheel
///
/// All angles are degrees, clockwise, in the wheel's unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelGeometry {
    /// Where sector 0 begins
    pub first_sector_start: f64,
    /// Where the indicator points
    pub indicator_angle: f64,
    /// Seam margin for the landing point
    pub safe_zone: f64,
    /// Dip progress after which a new tick may restart it
    pub indicator_progress_threshold: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            first_sector_start: FIRST_SECTOR_START,
            indicator_angle: INDICATOR_ANGLE,
            safe_zone: SAFE_ZONE,
            indicator_progress_threshold: INDICATOR_PROGRESS_THRESHOLD,
        }
    }
}

impl WheelGeometry {
    /// Reject angles and thresholds that would poison every plan
    pub fn validate(&self) -> WheelResult<()> {
        for (name, value) in [
            ("first sector start", self.first_sector_start),
            ("indicator angle", self.indicator_angle),
        ] {
            if !value.is_finite() {
                return Err(WheelError::InvalidConfig(format!(
                    "{name} must be a finite angle, got {value}"
                )));
            }
        }
        if !self.safe_zone.is_finite() || self.safe_zone < 0.0 {
            return Err(WheelError::InvalidConfig(format!(
                "safe zone must be non-negative, got {}",
                self.safe_zone
            )));
        }
        if !(0.0..=1.0).contains(&self.indicator_progress_threshold) {
            return Err(WheelError::InvalidConfig(format!(
                "indicator progress threshold must be within [0, 1], got {}",
                self.indicator_progress_threshold
            )));
        }
        Ok(())
    }

    /// Slot width for `sector_count` sectors
    pub fn degrees_per_sector(sector_count: usize) -> f64 {
        FULL_TURN / sector_count as f64
    }

    /// Center of sector `index` in the unrotated frame
    pub fn sector_center_angle(&self, index: usize, sector_count: usize) -> f64 {
        let dps = Self::degrees_per_sector(sector_count);
        self.first_sector_start + index as f64 * dps + dps / 2.0
    }

    /// Start and end angle of sector `index`
    pub fn sector_span(&self, index: usize, sector_count: usize) -> (f64, f64) {
        let dps = Self::degrees_per_sector(sector_count);
        let start = self.first_sector_start + index as f64 * dps;
        (start, start + dps)
    }

    /// Wheel rotation (mod 360) at which a seam sits under the indicator
    pub fn indicator_offset(&self) -> f64 {
        normalize_angle(self.indicator_angle - self.first_sector_start)
    }

    /// Sector sitting under the indicator when the wheel is at `rotation`
    pub fn sector_under_indicator(&self, rotation: f64, sector_count: usize) -> usize {
        let dps = Self::degrees_per_sector(sector_count);
        let local = normalize_angle(self.indicator_angle - rotation - self.first_sector_start);
        ((local / dps).floor() as usize).min(sector_count.saturating_sub(1))
    }
}

/// Cosmetic parameters handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelStyle {
    pub frame_color: String,
    pub middle_color: String,
    pub middle_dot_color: String,
    pub win_indicator_color: String,
    pub win_indicator_dot_color: String,
    pub sticks_color: String,
    /// Alternating wedge fills
    pub wheel_colors: [String; 2],
    pub border_color: String,
    pub border_width: f32,
    pub wheel_shadow_color: String,
    pub wheel_shadow_opacity: f32,
    pub middle_shadow_color: String,
    pub middle_shadow_opacity: f32,
    pub indicator_shadow_color: String,
    pub indicator_shadow_opacity: f32,
    pub text_font_size: f32,
    pub text_color: String,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            frame_color: "#ddd".into(),
            middle_color: "#ddd".into(),
            middle_dot_color: "#bbb".into(),
            win_indicator_color: "#ddd".into(),
            win_indicator_dot_color: "#bbb".into(),
            sticks_color: "#ddd".into(),
            wheel_colors: ["#1592e8".into(), "#14c187".into()],
            border_color: "#ddd".into(),
            border_width: 2.0,
            wheel_shadow_color: "#000".into(),
            wheel_shadow_opacity: 0.15,
            middle_shadow_color: "#000".into(),
            middle_shadow_opacity: 0.2,
            indicator_shadow_color: "#000".into(),
            indicator_shadow_opacity: 0.22,
            text_font_size: 18.0,
            text_color: "#fff".into(),
        }
    }
}

impl WheelStyle {
    /// Fill color for the wedge at `index`
    pub fn wedge_color(&self, index: usize) -> &str {
        &self.wheel_colors[index % self.wheel_colors.len()]
    }
}

fn default_duration() -> f64 {
    4.0
}

fn default_min_spins() -> u32 {
    5
}

fn default_max_spins() -> u32 {
    8
}

/// Complete wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Ordered sectors (2–24)
    pub sectors: Vec<Sector>,
    /// Spin animation length (seconds)
    #[serde(default = "default_duration")]
    pub duration_secs: f64,
    /// Fewest full turns per spin
    #[serde(default = "default_min_spins")]
    pub min_spins: u32,
    /// Most full turns per spin
    #[serde(default = "default_max_spins")]
    pub max_spins: u32,
    #[serde(default)]
    pub geometry: WheelGeometry,
    #[serde(default)]
    pub style: WheelStyle,
}

impl WheelConfig {
    /// Config with default timing for the given sectors
    pub fn new(sectors: Vec<Sector>) -> Self {
        Self {
            sectors,
            duration_secs: default_duration(),
            min_spins: default_min_spins(),
            max_spins: default_max_spins(),
            geometry: WheelGeometry::default(),
            style: WheelStyle::default(),
        }
    }

    /// Demo wheel: `count` equally weighted "Prize N" sectors
    pub fn demo(count: usize) -> Self {
        const LABELS: [&str; 8] = [
            "Prize 1", "Prize 2", "Prize 3", "Prize 4", "Prize 5", "Prize 6", "Prize 7", "Prize 8",
        ];
        let sectors = (0..count)
            .map(|i| {
                let label = LABELS[i % LABELS.len()];
                Sector::new(i as i64 + 1, label)
                    .with_text(label)
                    .with_weight(10.0)
            })
            .collect();
        Self::new(sectors)
    }

    /// Builder: spin duration
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Builder: spin-count bounds
    pub fn with_spins(mut self, min: u32, max: u32) -> Self {
        self.min_spins = min;
        self.max_spins = max;
        self
    }

    /// Check everything a spin relies on
    pub fn validate(&self) -> WheelResult<()> {
        validate_sectors(&self.sectors)?;

        if self.min_spins > self.max_spins {
            return Err(WheelError::InvalidRange {
                min: self.min_spins,
                max: self.max_spins,
            });
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(WheelError::InvalidConfig(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        self.geometry.validate()
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> WheelResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> WheelResult<Self> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> WheelResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(&contents),
            Some("json") => Self::from_json(&contents),
            other => Err(WheelError::InvalidConfig(format!(
                "unsupported config extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> WheelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_offset() {
        let geometry = WheelGeometry::default();
        assert_eq!(geometry.indicator_offset(), 59.5);
    }

    #[test]
    fn test_sector_spans_tile_the_circle() {
        let geometry = WheelGeometry::default();
        for count in [2, 3, 7, 8, 24] {
            let (first_start, _) = geometry.sector_span(0, count);
            let (_, last_end) = geometry.sector_span(count - 1, count);
            assert!((last_end - first_start - 360.0).abs() < 1e-9);
            for i in 1..count {
                let (_, prev_end) = geometry.sector_span(i - 1, count);
                let (start, _) = geometry.sector_span(i, count);
                assert!((prev_end - start).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_sector_under_indicator_at_rest() {
        let geometry = WheelGeometry::default();
        // Unrotated: indicator at -30.5 lands in the second eighth (-45..0)
        assert_eq!(geometry.sector_under_indicator(0.0, 8), 1);
        // Rotating by a full sector moves the previous sector under the pointer
        assert_eq!(geometry.sector_under_indicator(45.0, 8), 0);
        assert_eq!(geometry.sector_under_indicator(90.0, 8), 7);
    }

    #[test]
    fn test_demo_config_is_valid() {
        let config = WheelConfig::demo(8);
        assert!(config.validate().is_ok());
        assert_eq!(config.sectors.len(), 8);
        assert_eq!(config.duration_secs, 4.0);
        assert_eq!((config.min_spins, config.max_spins), (5, 8));
        assert_eq!(config.style.wedge_color(3), "#14c187");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let inverted = WheelConfig::demo(4).with_spins(6, 2);
        assert!(matches!(
            inverted.validate(),
            Err(WheelError::InvalidRange { min: 6, max: 2 })
        ));

        let zero_duration = WheelConfig::demo(4).with_duration(0.0);
        assert!(matches!(zero_duration.validate(), Err(WheelError::InvalidConfig(_))));

        let too_few = WheelConfig::demo(1);
        assert!(matches!(too_few.validate(), Err(WheelError::SectorCount { count: 1 })));
    }

    #[test]
    fn test_validate_rejects_non_finite_geometry() {
        let cases = [
            WheelGeometry { indicator_angle: f64::NAN, ..WheelGeometry::default() },
            WheelGeometry { first_sector_start: f64::INFINITY, ..WheelGeometry::default() },
            WheelGeometry { safe_zone: f64::NAN, ..WheelGeometry::default() },
            WheelGeometry { indicator_progress_threshold: 1.5, ..WheelGeometry::default() },
            WheelGeometry { indicator_progress_threshold: -0.1, ..WheelGeometry::default() },
            WheelGeometry { indicator_progress_threshold: f64::NAN, ..WheelGeometry::default() },
        ];
        for geometry in cases {
            let mut config = WheelConfig::demo(6);
            config.geometry = geometry;
            assert!(
                matches!(config.validate(), Err(WheelError::InvalidConfig(_))),
                "accepted {geometry:?}"
            );
        }

        let yaml = "
sectors:
  - { id: 1, label: A }
  - { id: 2, label: B }
geometry:
  indicator_angle: .nan
";
        assert!(matches!(
            WheelConfig::from_yaml(yaml),
            Err(WheelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{"sectors": [{"id": 1, "label": "A"}, {"id": 2, "label": "B"}]}"#;
        let config = WheelConfig::from_json(json).unwrap();
        assert_eq!(config.duration_secs, 4.0);
        assert_eq!(config.min_spins, 5);
        assert_eq!(config.max_spins, 8);
        assert_eq!(config.geometry, WheelGeometry::default());
        assert_eq!(config.style.text_color, "#fff");
    }

    #[test]
    fn test_yaml_roundtrip_fields() {
        let yaml = "
sectors:
  - id: 1
    label: Car
    probability: 1
  - id: 2
    label: Nothing
    weight: 99
duration_secs: 2.5
min_spins: 3
max_spins: 3
style:
  text_color: '#000'
";
        let config = WheelConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sectors[1].effective_weight(), 99.0);
        assert_eq!(config.duration_secs, 2.5);
        assert_eq!(config.min_spins, 3);
        assert_eq!(config.style.text_color, "#000");
        assert_eq!(config.style.frame_color, "#ddd");
    }

    #[test]
    fn test_json_rejects_invalid_sector_count() {
        let json = r#"{"sectors": [{"id": 1, "label": "Lonely"}]}"#;
        assert!(matches!(
            WheelConfig::from_json(json),
            Err(WheelError::SectorCount { count: 1 })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wheel.json");
        std::fs::write(&path, WheelConfig::demo(6).to_json().unwrap()).unwrap();
        let loaded = WheelConfig::load(&path).unwrap();
        assert_eq!(loaded, WheelConfig::demo(6));

        let bad = dir.path().join("wheel.toml");
        std::fs::write(&bad, "").unwrap();
        assert!(matches!(WheelConfig::load(&bad), Err(WheelError::InvalidConfig(_))));
    }
}
