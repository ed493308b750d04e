//! The matchup engine: two teams' phase values in, a projection out.
//!
//! Pipeline per game: pass-rate-adjusted offense/defense deltas → net
//! offensive value (precipitation suppressing the passing share) → points
//! polynomial with a surface baseline → wind and temperature multipliers →
//! home-field split → win percentages → market comparison.

use rayon::prelude::*;
use tracing::debug;

use crate::betting::{market_edges, recommend_bets, BetRecommendation, BettingLines, MarketEdges};
use crate::constants::{
    GRASS_BASELINE_POINTS, POINTS_POLY, TURF_BASELINE_POINTS, WIN_PCT_MAX, WIN_PCT_MIN,
    WIN_PCT_SLOPE,
};
use crate::error::ProjectionError;
use crate::tables::{PlayRates, SlateData};
use crate::team::TeamStrength;
use crate::weather::{precipitation_impact, temperature_impact, wind_impact, Weather};
use crate::ModelConfig;

/// Playing surface. Turf games score slightly higher historically, expressed
/// as a shifted points baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Grass,
    Turf,
}

/// One scheduled game with venue context and optional market lines.
#[derive(Clone, Debug)]
pub struct Matchup {
    pub home: String,
    pub away: String,
    pub surface: Surface,
    pub is_dome: bool,
    /// Neutral-site games keep the listed home/away designations but skip
    /// the home-field edge entirely.
    pub neutral: bool,
    pub weather: Weather,
    pub lines: Option<BettingLines>,
}

/// Output of the engine for one matchup.
#[derive(Clone, Debug)]
pub struct ProjectionResult {
    pub home_team: String,
    pub away_team: String,
    pub home_points: f64,
    pub away_points: f64,
    pub home_win_pct: f64,
    pub away_win_pct: f64,
    /// Present only when the matchup carried market lines.
    pub edges: Option<MarketEdges>,
    pub recommendations: Vec<BetRecommendation>,
}

impl ProjectionResult {
    /// Projected home margin; negative when the away side is favored.
    pub fn projected_margin(&self) -> f64 {
        self.home_points - self.away_points
    }

    pub fn projected_total(&self) -> f64 {
        self.home_points + self.away_points
    }
}

/// Win percentage from a projected point differential, where `point_diff`
/// is opponent points minus own points. Clamped to [0.1, 99.9]; the two
/// sides of a game always sum to exactly 100.
pub fn win_percentage(point_diff: f64) -> f64 {
    ((WIN_PCT_SLOPE * point_diff + 0.5) * 100.0).clamp(WIN_PCT_MIN, WIN_PCT_MAX)
}

/// Map net offensive value to projected points. A quartic with increasing
/// marginal returns: blowout-level value runs up the score faster than the
/// linear term alone.
pub fn points_from_value(value: f64, surface: Surface) -> f64 {
    let baseline = match surface {
        Surface::Grass => GRASS_BASELINE_POINTS,
        Surface::Turf => TURF_BASELINE_POINTS,
    };
    baseline
        + POINTS_POLY[0] * value
        + POINTS_POLY[1] * value.powi(2)
        + POINTS_POLY[2] * value.powi(3)
        + POINTS_POLY[3] * value.powi(4)
}

/// One team's net offensive value against an opponent.
///
/// The effective pass rate averages the offense's own tendency with the
/// opponent defense's tendency; each side pulls the play mix toward its
/// identity. Precipitation suppresses only the passing share.
fn net_offensive_value(
    own: &TeamStrength,
    opponent: &TeamStrength,
    own_rates: PlayRates,
    opponent_rates: PlayRates,
    precip_impact: f64,
) -> f64 {
    let pass_rate = (own_rates.offense_pass_rate + opponent_rates.defense_pass_rate) / 2.0;
    let pass_component = (own.offense_pass - opponent.defense_pass) * pass_rate / 100.0;
    let rush_component = (own.offense_rush - opponent.defense_rush) * (100.0 - pass_rate) / 100.0;
    pass_component * (1.0 - precip_impact) + rush_component
}

/// Project a single matchup. Fail-fast: any missing lookup aborts this
/// matchup with the offending table and key named, rather than projecting
/// from a silent default.
pub fn project(
    matchup: &Matchup,
    data: &SlateData,
    config: &ModelConfig,
) -> Result<ProjectionResult, ProjectionError> {
    let home = TeamStrength::compute(&matchup.home, data, config)?;
    let away = TeamStrength::compute(&matchup.away, data, config)?;
    let home_rates = data.play_rates(&matchup.home)?;
    let away_rates = data.play_rates(&matchup.away)?;

    let conditions = matchup.weather.resolve(matchup.is_dome);
    let precip = precipitation_impact(conditions.precipitation_chance);

    let home_net = net_offensive_value(&home, &away, home_rates, away_rates, precip);
    let away_net = net_offensive_value(&away, &home, away_rates, home_rates, precip);

    let mut home_points = points_from_value(home_net, matchup.surface);
    let mut away_points = points_from_value(away_net, matchup.surface);

    let wind = wind_impact(conditions.wind_speed);
    home_points *= wind;
    away_points *= wind;

    // Each team suffers for the distance between the game and its own home
    // climate. Indoors there is nothing to adapt to.
    if !matchup.is_dome {
        if let Some(game_temp) = conditions.temperature {
            let home_avg = data.home_avg_temperature(&matchup.home)?;
            let away_avg = data.home_avg_temperature(&matchup.away)?;
            home_points *= temperature_impact((home_avg - game_temp).abs());
            away_points *= temperature_impact((away_avg - game_temp).abs());
        }
    }

    // The home edge is split: half to the hosts, half against the visitors.
    // At a neutral site nobody hosts, so the table is not even consulted.
    if !matchup.neutral {
        let home_edge = data.home_advantage(&matchup.home)?;
        home_points += home_edge / 2.0;
        away_points -= home_edge / 2.0;
    }

    let home_win_pct = win_percentage(away_points - home_points);
    let away_win_pct = 100.0 - home_win_pct;

    let edges = matchup
        .lines
        .as_ref()
        .map(|lines| market_edges(lines, home_points, away_points, home_win_pct, away_win_pct));
    let recommendations = edges
        .as_ref()
        .map(|e| recommend_bets(e, home_win_pct, away_win_pct))
        .unwrap_or_default();

    debug!(
        home = %matchup.home,
        away = %matchup.away,
        home_points,
        away_points,
        home_win_pct,
        "projected matchup"
    );

    Ok(ProjectionResult {
        home_team: matchup.home.clone(),
        away_team: matchup.away.clone(),
        home_points,
        away_points,
        home_win_pct,
        away_win_pct,
        edges,
        recommendations,
    })
}

/// Project a whole slate in parallel. Each matchup is independent, so a
/// failure in one never masks the rest; callers get one `Result` per game.
pub fn project_slate(
    matchups: &[Matchup],
    data: &SlateData,
    config: &ModelConfig,
) -> Vec<Result<ProjectionResult, ProjectionError>> {
    matchups
        .par_iter()
        .map(|matchup| project(matchup, data, config))
        .collect()
}
