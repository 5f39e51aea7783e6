//! Sector definitions and sector-list validation

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};

/// Fewest sectors a wheel can carry
pub const MIN_SECTORS: usize = 2;

/// Most sectors a wheel can carry
pub const MAX_SECTORS: usize = 24;

/// Sector identifier (numeric or textual, as the host supplies it)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectorId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectorId::Number(n) => write!(f, "{n}"),
            SectorId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SectorId {
    fn from(value: i64) -> Self {
        SectorId::Number(value)
    }
}

impl From<i32> for SectorId {
    fn from(value: i32) -> Self {
        SectorId::Number(i64::from(value))
    }
}

impl From<String> for SectorId {
    fn from(value: String) -> Self {
        SectorId::Text(value)
    }
}

impl From<&str> for SectorId {
    fn from(value: &str) -> Self {
        SectorId::Text(value.to_string())
    }
}

/// One weighted slice of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Unique sector id
    pub id: SectorId,
    /// Display label
    pub label: String,
    /// Win weight (unset, non-positive or non-finite counts as 1)
    #[serde(default, alias = "probability", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Text drawn on the wedge, falls back to `label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Sector {
    /// Sector with the default weight
    pub fn new(id: impl Into<SectorId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight: None,
            text: None,
        }
    }

    /// Builder: set the win weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builder: set the wedge text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Weight used by the selector
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => 1.0,
        }
    }

    /// Text for the renderer
    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.label)
    }
}

/// Check count bounds and id uniqueness
pub fn validate_sectors(sectors: &[Sector]) -> WheelResult<()> {
    let count = sectors.len();
    if !(MIN_SECTORS..=MAX_SECTORS).contains(&count) {
        return Err(WheelError::SectorCount { count });
    }

    let mut seen = HashSet::with_capacity(count);
    for sector in sectors {
        if !seen.insert(&sector.id) {
            return Err(WheelError::DuplicateSectorId(sector.id.to_string()));
        }
    }
    Ok(())
}

/// Sum of effective weights
pub fn total_weight(sectors: &[Sector]) -> f64 {
    sectors.iter().map(Sector::effective_weight).sum()
}
