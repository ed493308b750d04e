//! Weather and venue adjustments.
//!
//! Pure functions mapping wind, precipitation chance, and temperature
//! deviation onto offensive corrections, plus the dome override that forces
//! neutral indoor conditions before any of them run.

use crate::constants::{DOME_TEMPERATURE, PRECIP_COEFF, TEMP_POLY, WIND_POLY};

/// Raw weather inputs as supplied by the schedule feed. Any field may be
/// unknown; dome games ignore all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Weather {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation_chance: Option<f64>,
}

impl Weather {
    pub fn new(temperature: f64, wind_speed: f64, precipitation_chance: f64) -> Self {
        Weather {
            temperature: Some(temperature),
            wind_speed: Some(wind_speed),
            precipitation_chance: Some(precipitation_chance),
        }
    }

    pub fn unknown() -> Self {
        Weather::default()
    }

    /// Resolve raw inputs against the venue. A dome forces exactly
    /// (72.5 °F, no wind, no precipitation) regardless of what was supplied.
    pub fn resolve(&self, is_dome: bool) -> GameConditions {
        if is_dome {
            GameConditions {
                temperature: Some(DOME_TEMPERATURE),
                wind_speed: Some(0.0),
                precipitation_chance: Some(0.0),
            }
        } else {
            GameConditions {
                temperature: self.temperature,
                wind_speed: self.wind_speed,
                precipitation_chance: self.precipitation_chance,
            }
        }
    }
}

/// Weather after the dome override. Fields still unknown here stay unknown
/// and fall through to the identity adjustments below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConditions {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation_chance: Option<f64>,
}

/// Multiplier on passing-derived points from wind speed (mph).
/// Unknown wind is the identity.
pub fn wind_impact(wind_speed: Option<f64>) -> f64 {
    match wind_speed {
        Some(w) => WIND_POLY[0] + WIND_POLY[1] * w + WIND_POLY[2] * w * w,
        None => 1.0,
    }
}

/// Fraction of passing value suppressed by precipitation chance (0–100).
/// Unknown precipitation suppresses nothing.
pub fn precipitation_impact(precipitation_chance: Option<f64>) -> f64 {
    match precipitation_chance {
        Some(p) => PRECIP_COEFF * p,
        None => 0.0,
    }
}

/// Multiplier on points from a team's deviation from its home comfort
/// temperature. Larger deviations suppress offense.
pub fn temperature_impact(delta: f64) -> f64 {
    1.0 - (TEMP_POLY[0] + TEMP_POLY[1] * delta + TEMP_POLY[2] * delta * delta)
}
