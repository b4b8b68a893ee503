//! Growth projection: maps a year on the slider to a render scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Years elapsed since planting, in `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct GrowthYear(u8);

impl GrowthYear {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;
    pub const DEFAULT: u8 = 5;

    pub fn new(year: i64) -> CoreResult<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&year) {
            Ok(Self(year as u8))
        } else {
            Err(CoreError::InvalidGrowthYear {
                year,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Clamp into range; used for slider input.
    pub fn saturating(year: i64) -> Self {
        Self(year.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Render scale for placed plants at this year.
    pub fn scale(&self) -> f32 {
        growth_scale(*self)
    }
}

impl Default for GrowthYear {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for GrowthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.0)
    }
}

impl TryFrom<i64> for GrowthYear {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GrowthYear> for u8 {
    fn from(year: GrowthYear) -> Self {
        year.0
    }
}

/// `0.5 + (year / 20) * 0.5`, giving 0.525 at year 1 and 1.0 at year 20.
pub fn growth_scale(year: GrowthYear) -> f32 {
    0.5 + (year.get() as f32 / GrowthYear::MAX as f32) * 0.5
}
