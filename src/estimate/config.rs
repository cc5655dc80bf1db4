use crate::shared::geo::ASSUMED_SPEED_KMH;

pub const DEFAULT_WAYPOINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub waypoints: usize,
    /// Non positive or non finite speeds fall back to the default.
    pub speed_kmh: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            waypoints: DEFAULT_WAYPOINTS,
            speed_kmh: ASSUMED_SPEED_KMH,
        }
    }
}
