//! Per-team unit value calculators and the assembled `TeamStrength`.
//!
//! Player-based units (quarterback passing, receiving corps, rushing attack)
//! are usage-weighted averages of each player's recency-blended rating,
//! weighted by projected usage for the upcoming game. Team-based units
//! (offensive line, defense) blend the team's own multi-year efficiency
//! figures. Every unit value ends on the common 0–10 scale via its
//! calibration curve.

use tracing::{debug, warn};

use crate::aggregate::{aggregate, recency_sum};
use crate::constants::TEAM_UNIT_SUM_SCALE;
use crate::curve::Category;
use crate::error::ProjectionError;
use crate::phase::{defensive_value, offensive_pass_value, offensive_rush_value};
use crate::tables::{PlayerUsage, Position, SlateData};
use crate::ModelConfig;

/// The four phase values for one team, ready for the matchup engine.
#[derive(Clone, Debug)]
pub struct TeamStrength {
    pub team: String,
    pub offense_pass: f64,
    pub offense_rush: f64,
    pub defense_pass: f64,
    pub defense_rush: f64,
}

impl TeamStrength {
    /// Compute all four phase values for a team from the input snapshot.
    ///
    /// Fails if the team is missing from the roster or any required
    /// efficiency table.
    pub fn compute(
        team: &str,
        data: &SlateData,
        config: &ModelConfig,
    ) -> Result<Self, ProjectionError> {
        let roster = data.roster(team)?;

        let qb = quarterback_value(team, roster, data, config)?;
        let receiving = receiving_value(team, roster, data, config)?;
        let rushing = rushing_value(team, roster, data, config)?;
        let ol_pass = team_unit_value(team, Category::OlPass, data, config)?;
        let ol_rush = team_unit_value(team, Category::OlRush, data, config)?;
        let def_pass_unit = team_unit_value(team, Category::DefensePass, data, config)?;
        let def_rush_unit = team_unit_value(team, Category::DefenseRush, data, config)?;

        let dave_def = data
            .dave(team)
            .map(|d| config.curves.dave_defense().apply(d.defense));

        let strength = TeamStrength {
            team: team.to_string(),
            offense_pass: offensive_pass_value(&config.phase_weights, qb, receiving, ol_pass),
            offense_rush: offensive_rush_value(&config.phase_weights, rushing, ol_rush),
            defense_pass: defensive_value(def_pass_unit, dave_def),
            defense_rush: defensive_value(def_rush_unit, dave_def),
        };
        debug!(
            team,
            offense_pass = strength.offense_pass,
            offense_rush = strength.offense_rush,
            defense_pass = strength.defense_pass,
            defense_rush = strength.defense_rush,
            "computed team strength"
        );
        Ok(strength)
    }
}

/// Quarterback passing unit: the 50/50 blend of two views of the same
/// position group. The efficiency half weights QB ratings by projected pass
/// attempts; the grade half weights scouting grades by graded attempts and
/// runs them through the grade curve. A team with no graded quarterback
/// falls back to the efficiency half alone.
pub fn quarterback_value(
    team: &str,
    roster: &[PlayerUsage],
    data: &SlateData,
    config: &ModelConfig,
) -> Result<f64, ProjectionError> {
    let efficiency = usage_weighted_unit(
        team,
        roster,
        data,
        config,
        Category::Passing,
        &[Position::Quarterback],
        |p| p.pass_attempts,
    )?;

    let mut graded_attempts = 0.0;
    let mut graded_contribution = 0.0;
    for player in roster.iter().filter(|p| p.position == Position::Quarterback) {
        if let Some(graded) = data.passing_grade(&player.name) {
            if graded.attempts > 0.0 {
                graded_contribution += graded.grade * graded.attempts;
                graded_attempts += graded.attempts;
            }
        }
    }

    if graded_attempts == 0.0 {
        warn!(team, "no graded quarterback, passing value from efficiency only");
        return Ok(efficiency);
    }
    let grade_value = config
        .curves
        .pff_passing()
        .apply(graded_contribution / graded_attempts);
    Ok((efficiency + grade_value) / 2.0)
}

/// Receiving corps: WR/RB/TE ratings weighted by projected targets.
pub fn receiving_value(
    team: &str,
    roster: &[PlayerUsage],
    data: &SlateData,
    config: &ModelConfig,
) -> Result<f64, ProjectionError> {
    usage_weighted_unit(
        team,
        roster,
        data,
        config,
        Category::Receiving,
        &[
            Position::WideReceiver,
            Position::RunningBack,
            Position::TightEnd,
        ],
        |p| p.targets,
    )
}

/// Rushing attack: QB/RB/WR ratings weighted by projected carries.
pub fn rushing_value(
    team: &str,
    roster: &[PlayerUsage],
    data: &SlateData,
    config: &ModelConfig,
) -> Result<f64, ProjectionError> {
    usage_weighted_unit(
        team,
        roster,
        data,
        config,
        Category::Rushing,
        &[
            Position::Quarterback,
            Position::RunningBack,
            Position::WideReceiver,
        ],
        |p| p.rush_attempts,
    )
}

/// Team-level unit (offensive line, defense): the recency-discounted sum of
/// the team's per-season efficiency figures, scaled onto the calibration
/// axis and curved. The OL and defense curve constants expect that scaled
/// sum, not the per-season average.
pub fn team_unit_value(
    team: &str,
    category: Category,
    data: &SlateData,
    config: &ModelConfig,
) -> Result<f64, ProjectionError> {
    let records = data.team_records(team, category)?;
    let scaled = recency_sum(&records, &config.recency)? * TEAM_UNIT_SUM_SCALE;
    Ok(config.curves.curve(category).apply(scaled))
}

/// Usage-weighted average of per-player blended ratings over a position
/// group, then calibrated.
///
/// Zero total projected usage is a defined fallback, not an error: the raw
/// rating is 0 (league average on the raw scale) and a diagnostic is logged
/// so downstream consumers can flag the projection as low-confidence.
fn usage_weighted_unit(
    team: &str,
    roster: &[PlayerUsage],
    data: &SlateData,
    config: &ModelConfig,
    category: Category,
    positions: &[Position],
    usage: impl Fn(&PlayerUsage) -> f64,
) -> Result<f64, ProjectionError> {
    let mut total_volume = 0.0;
    let mut total_contribution = 0.0;

    for player in roster.iter().filter(|p| positions.contains(&p.position)) {
        let volume = usage(player);
        if volume <= 0.0 {
            continue;
        }
        let rating = aggregate(&data.player_records(&player.name, category), &config.recency)?;
        total_contribution += rating * volume;
        total_volume += volume;
    }

    let raw = if total_volume == 0.0 {
        warn!(team, ?category, "zero projected usage for unit, falling back to 0");
        0.0
    } else {
        total_contribution / total_volume
    };

    Ok(config.curves.curve(category).apply(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{OL_RUSH_CALIBRATION, PASSING_CALIBRATION, RECEIVING_CALIBRATION};
    use crate::curve::CalibrationCurve;
    use crate::tables::DaveRating;

    fn config() -> ModelConfig {
        ModelConfig::standard(["2024", "2023", "2022", "2021"]).unwrap()
    }

    fn seed_team_history(data: &mut SlateData, team: &str) {
        // Per-season magnitudes on the native rating axes: sack rate,
        // adjusted line yards, defensive DVOA.
        for (category, raw) in [
            (Category::OlPass, 0.08),
            (Category::OlRush, 4.3),
            (Category::DefensePass, 0.14),
            (Category::DefenseRush, -0.07),
        ] {
            data.insert_team_record("2024", category, team, raw);
            data.insert_team_record("2023", category, team, raw);
        }
    }

    #[test]
    fn test_single_qb_value_matches_curve() {
        let mut data = SlateData::default();
        data.insert_player_record("2024", Category::Passing, "QB One", 0.55, 500.0);
        let roster = vec![
            PlayerUsage::new("QB One", Position::Quarterback).with_pass_attempts(34.0),
        ];
        data.rosters.insert("AAA".into(), roster);

        let roster = data.roster("AAA").unwrap().to_vec();
        let value = quarterback_value("AAA", &roster, &data, &config()).unwrap();
        // Rating sits exactly at the passing calibration ceiling; with no
        // grade on file the efficiency half stands alone.
        assert!((value - 10.0).abs() < 1e-9);
        assert_eq!(PASSING_CALIBRATION.1, 0.55);
    }

    #[test]
    fn test_passing_blend_averages_grade_and_efficiency() {
        let mut data = SlateData::default();
        data.insert_player_record("2024", Category::Passing, "QB One", 0.55, 500.0);
        // A 62.5 grade calibrates to 5.0; blended with the ceiling-level
        // efficiency half the unit lands at 7.5.
        data.insert_passing_grade("QB One", 62.5, 500.0);
        let roster = vec![
            PlayerUsage::new("QB One", Position::Quarterback).with_pass_attempts(34.0),
        ];
        data.rosters.insert("AAA".into(), roster);

        let roster = data.roster("AAA").unwrap().to_vec();
        let value = quarterback_value("AAA", &roster, &data, &config()).unwrap();
        assert!((value - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_passing_grades_weight_by_graded_attempts() {
        let mut data = SlateData::default();
        data.insert_player_record("2024", Category::Passing, "QB One", 0.55, 400.0);
        data.insert_passing_grade("QB One", 95.0, 450.0);
        data.insert_passing_grade("QB Two", 30.0, 50.0);
        let roster = vec![
            PlayerUsage::new("QB One", Position::Quarterback).with_pass_attempts(30.0),
            PlayerUsage::new("QB Two", Position::Quarterback).with_pass_attempts(4.0),
        ];
        data.rosters.insert("AAA".into(), roster);

        let roster = data.roster("AAA").unwrap().to_vec();
        let value = quarterback_value("AAA", &roster, &data, &config()).unwrap();

        let cfg = config();
        let blended_grade = (95.0 * 450.0 + 30.0 * 50.0) / 500.0;
        let grade_value = cfg.curves.pff_passing().apply(blended_grade);
        // QB Two has no efficiency history, so the efficiency half blends
        // the ceiling rating with the zero fallback by projected attempts.
        let raw = (0.55 * 30.0) / 34.0;
        let efficiency = cfg.curves.curve(Category::Passing).apply(raw);
        assert!((value - (efficiency + grade_value) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_usage_weighting_favors_the_starter() {
        let mut data = SlateData::default();
        data.insert_player_record("2024", Category::Receiving, "wr one", 0.30, 120.0);
        data.insert_player_record("2024", Category::Receiving, "wr two", -0.20, 120.0);
        let roster = vec![
            PlayerUsage::new("WR One", Position::WideReceiver).with_targets(9.0),
            PlayerUsage::new("WR Two", Position::WideReceiver).with_targets(1.0),
        ];
        data.rosters.insert("AAA".into(), roster);

        let roster = data.roster("AAA").unwrap().to_vec();
        let value = receiving_value("AAA", &roster, &data, &config()).unwrap();

        let curve = CalibrationCurve::standard(RECEIVING_CALIBRATION).unwrap();
        let expected = curve.apply((0.30 * 9.0 + -0.20 * 1.0) / 10.0);
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_usage_unit_falls_back() {
        let mut data = SlateData::default();
        let roster = vec![PlayerUsage::new("WR One", Position::WideReceiver)];
        data.rosters.insert("AAA".into(), roster);

        let roster = data.roster("AAA").unwrap().to_vec();
        let value = receiving_value("AAA", &roster, &data, &config()).unwrap();

        // Raw fallback of 0 still passes through the calibration curve.
        let curve = CalibrationCurve::standard(RECEIVING_CALIBRATION).unwrap();
        assert!((value - curve.apply(0.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_player_gets_zero_rating_not_error() {
        let mut data = SlateData::default();
        let roster = vec![
            PlayerUsage::new("Rookie QB", Position::Quarterback).with_pass_attempts(30.0),
        ];
        data.rosters.insert("AAA".into(), roster);

        let roster = data.roster("AAA").unwrap().to_vec();
        let value = quarterback_value("AAA", &roster, &data, &config()).unwrap();
        let curve = CalibrationCurve::standard(PASSING_CALIBRATION).unwrap();
        assert!((value - curve.apply(0.0)).abs() < 1e-9);
    }

    #[test]
    fn test_ol_rush_value_sits_on_design_scale() {
        // A league-average 4.3 adjusted line yards every season must grade
        // mid-band once summed and scaled, not below the curve floor.
        let mut data = SlateData::default();
        for season in ["2024", "2023", "2022", "2021"] {
            data.insert_team_record(season, Category::OlRush, "AAA", 4.3);
        }

        let value = team_unit_value("AAA", Category::OlRush, &data, &config()).unwrap();

        let scaled = 4.3 * (1.0 + 0.5 + 0.25 + 0.125) * TEAM_UNIT_SUM_SCALE;
        let curve = CalibrationCurve::standard(OL_RUSH_CALIBRATION).unwrap();
        assert!((value - curve.apply(scaled)).abs() < 1e-9);
        assert!((value - 5.8373).abs() < 1e-3);
        assert!((0.0..=10.0).contains(&value));
    }

    #[test]
    fn test_team_unit_discounts_older_seasons_without_averaging() {
        // One extra season of identical play raises the scaled sum, so the
        // calibrated value moves; an average would be unchanged.
        let mut data = SlateData::default();
        data.insert_team_record("2024", Category::OlRush, "AAA", 4.3);
        let one = team_unit_value("AAA", Category::OlRush, &data, &config()).unwrap();

        data.insert_team_record("2023", Category::OlRush, "AAA", 4.3);
        let two = team_unit_value("AAA", Category::OlRush, &data, &config()).unwrap();
        assert!(two > one);
    }

    #[test]
    fn test_team_strength_requires_roster() {
        let data = SlateData::default();
        let err = TeamStrength::compute("AAA", &data, &config()).unwrap_err();
        assert_eq!(err, ProjectionError::missing("rosters", "AAA"));
    }

    #[test]
    fn test_team_strength_requires_efficiency_tables() {
        let mut data = SlateData::default();
        data.rosters.insert("AAA".into(), Vec::new());
        let err = TeamStrength::compute("AAA", &data, &config()).unwrap_err();
        assert_eq!(err, ProjectionError::missing("team efficiency", "AAA"));
    }

    #[test]
    fn test_dave_steadies_defense_only() {
        let mut data = SlateData::default();
        data.rosters.insert("AAA".into(), Vec::new());
        seed_team_history(&mut data, "AAA");

        let cfg = config();
        let without_dave = TeamStrength::compute("AAA", &data, &cfg).unwrap();

        data.dave.insert(
            "AAA".into(),
            DaveRating {
                offense: 5.0,
                defense: -10.5,
            },
        );
        let with_dave = TeamStrength::compute("AAA", &data, &cfg).unwrap();

        // DAVE defense of -10.5 normalizes to 10 and pulls both defensive
        // phases toward it; offense is untouched.
        assert_eq!(without_dave.offense_pass, with_dave.offense_pass);
        assert_eq!(without_dave.offense_rush, with_dave.offense_rush);
        let expected = (without_dave.defense_pass + 10.0) / 2.0;
        assert!((with_dave.defense_pass - expected).abs() < 1e-9);
    }
}
