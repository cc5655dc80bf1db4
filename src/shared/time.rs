use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Whole minutes of estimated travel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hm_string())
    }
}

impl Duration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Rounds to the nearest minute. Negative and non-finite input collapses to zero.
    pub fn from_minutes_f64(minutes: f64) -> Self {
        if minutes.is_finite() && minutes > 0.0 {
            Self(minutes.round() as u32)
        } else {
            Self(0)
        }
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    pub const fn hours(&self) -> u32 {
        self.0 / 60
    }

    pub const fn minutes(&self) -> u32 {
        self.0 % 60
    }

    /// Formats as `{h}h {m}min` with unpadded minutes, e.g. `0h 4min`.
    pub fn to_hm_string(&self) -> String {
        format!("{}h {}min", self.hours(), self.minutes())
    }

    /// Parses the output of [`Duration::to_hm_string`].
    pub fn from_hm(value: &str) -> Option<Self> {
        let (hours, minutes) = value.trim().split_once(' ')?;
        let hours: u32 = hours.strip_suffix('h')?.parse().ok()?;
        let minutes: u32 = minutes.strip_suffix("min")?.parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        Some(Self(hours.checked_mul(60)?.checked_add(minutes)?))
    }
}
