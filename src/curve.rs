//! Piecewise-linear calibration onto the common 0–10 value scale.
//!
//! Each semantic category gets a two-point curve: a designer-chosen floor
//! rating maps to 0 and a ceiling rating maps to 10. Values beyond either
//! calibration point extrapolate linearly: a historically bad unit can rate
//! below zero and an elite one above ten. That is intentional.

use crate::constants::{
    DAVE_DEF_CALIBRATION, DAVE_OFF_CALIBRATION, DEF_PASS_CALIBRATION, DEF_RUSH_CALIBRATION,
    OL_PASS_CALIBRATION, OL_RUSH_CALIBRATION, PASSING_CALIBRATION, PFF_PASSING_CALIBRATION,
    RECEIVING_CALIBRATION, RUSHING_CALIBRATION, VALUE_CEILING, VALUE_FLOOR,
};
use crate::error::ProjectionError;

/// Semantic category of an efficiency rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Passing,
    Rushing,
    Receiving,
    OlPass,
    OlRush,
    DefensePass,
    DefenseRush,
}

/// Two-point affine map from a raw rating scale onto the value scale.
#[derive(Clone, Copy, Debug)]
pub struct CalibrationCurve {
    slope: f64,
    intercept: f64,
}

impl CalibrationCurve {
    /// Build the line through (floor_x, floor_y) and (ceiling_x, ceiling_y).
    pub fn new(
        floor_x: f64,
        floor_y: f64,
        ceiling_x: f64,
        ceiling_y: f64,
    ) -> Result<Self, ProjectionError> {
        if floor_x == ceiling_x {
            return Err(ProjectionError::DegenerateCurve { floor_x });
        }
        let slope = (ceiling_y - floor_y) / (ceiling_x - floor_x);
        Ok(CalibrationCurve {
            slope,
            intercept: floor_y - slope * floor_x,
        })
    }

    /// Standard 0-to-10 curve from a (floor_x, ceiling_x) calibration pair.
    pub fn standard(calibration: (f64, f64)) -> Result<Self, ProjectionError> {
        CalibrationCurve::new(calibration.0, VALUE_FLOOR, calibration.1, VALUE_CEILING)
    }

    pub fn apply(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }
}

/// The full curve table for one run: one curve per category plus the two
/// DAVE composite curves. Built once from `constants` and passed by
/// reference into every calculator.
#[derive(Clone, Debug)]
pub struct CurveSet {
    passing: CalibrationCurve,
    rushing: CalibrationCurve,
    receiving: CalibrationCurve,
    ol_pass: CalibrationCurve,
    ol_rush: CalibrationCurve,
    defense_pass: CalibrationCurve,
    defense_rush: CalibrationCurve,
    dave_offense: CalibrationCurve,
    dave_defense: CalibrationCurve,
    pff_passing: CalibrationCurve,
}

impl CurveSet {
    pub fn standard() -> Result<Self, ProjectionError> {
        Ok(CurveSet {
            passing: CalibrationCurve::standard(PASSING_CALIBRATION)?,
            rushing: CalibrationCurve::standard(RUSHING_CALIBRATION)?,
            receiving: CalibrationCurve::standard(RECEIVING_CALIBRATION)?,
            ol_pass: CalibrationCurve::standard(OL_PASS_CALIBRATION)?,
            ol_rush: CalibrationCurve::standard(OL_RUSH_CALIBRATION)?,
            defense_pass: CalibrationCurve::standard(DEF_PASS_CALIBRATION)?,
            defense_rush: CalibrationCurve::standard(DEF_RUSH_CALIBRATION)?,
            dave_offense: CalibrationCurve::standard(DAVE_OFF_CALIBRATION)?,
            dave_defense: CalibrationCurve::standard(DAVE_DEF_CALIBRATION)?,
            pff_passing: CalibrationCurve::standard(PFF_PASSING_CALIBRATION)?,
        })
    }

    pub fn curve(&self, category: Category) -> &CalibrationCurve {
        match category {
            Category::Passing => &self.passing,
            Category::Rushing => &self.rushing,
            Category::Receiving => &self.receiving,
            Category::OlPass => &self.ol_pass,
            Category::OlRush => &self.ol_rush,
            Category::DefensePass => &self.defense_pass,
            Category::DefenseRush => &self.defense_rush,
        }
    }

    pub fn dave_offense(&self) -> &CalibrationCurve {
        &self.dave_offense
    }

    pub fn dave_defense(&self) -> &CalibrationCurve {
        &self.dave_defense
    }

    pub fn pff_passing(&self) -> &CalibrationCurve {
        &self.pff_passing
    }
}
