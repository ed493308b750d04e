//! Blending unit values into per-team phase values.
//!
//! A phase value is one of offensive-pass, offensive-rush, defensive-pass,
//! or defensive-rush. Offensive phases are fixed-weight mixes of their unit
//! values; defensive phases pass the calibrated unit value through, averaged
//! 50/50 with the normalized DAVE composite when one is available. Nothing
//! is clamped: unbounded inputs propagate unbounded outputs by design.

use crate::constants::{
    OFF_PASS_OL_WEIGHT, OFF_PASS_QB_WEIGHT, OFF_PASS_REC_WEIGHT, OFF_RUSH_OL_WEIGHT,
    OFF_RUSH_RUSH_WEIGHT,
};

/// Fixed blend weights for the offensive phases.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBlendWeights {
    pub qb: f64,
    pub receiving: f64,
    pub ol_pass: f64,
    pub rushing: f64,
    pub ol_rush: f64,
}

impl Default for PhaseBlendWeights {
    fn default() -> Self {
        PhaseBlendWeights {
            qb: OFF_PASS_QB_WEIGHT,
            receiving: OFF_PASS_REC_WEIGHT,
            ol_pass: OFF_PASS_OL_WEIGHT,
            rushing: OFF_RUSH_RUSH_WEIGHT,
            ol_rush: OFF_RUSH_OL_WEIGHT,
        }
    }
}

/// Offensive pass phase: quarterback-dominated, receivers second, line third.
pub fn offensive_pass_value(
    weights: &PhaseBlendWeights,
    qb_value: f64,
    receiving_value: f64,
    ol_pass_value: f64,
) -> f64 {
    qb_value * weights.qb + receiving_value * weights.receiving + ol_pass_value * weights.ol_pass
}

/// Offensive rush phase: ball carriers and run blocking.
pub fn offensive_rush_value(
    weights: &PhaseBlendWeights,
    rushing_value: f64,
    ol_rush_value: f64,
) -> f64 {
    rushing_value * weights.rushing + ol_rush_value * weights.ol_rush
}

/// Defensive phase: the calibrated unit value, steadied by the longer-horizon
/// composite when the source publishes one.
pub fn defensive_value(unit_value: f64, dave_normalized: Option<f64>) -> f64 {
    match dave_normalized {
        Some(dave) => (unit_value + dave) / 2.0,
        None => unit_value,
    }
}
