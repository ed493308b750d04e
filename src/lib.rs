//! Gridiron Core - pregame projection engine for professional football.
//!
//! Turns pre-loaded statistical snapshots (multi-year efficiency ratings,
//! projected usage, play-calling tendencies, weather, home-field effects)
//! into projected points, win probabilities, and betting-market comparisons
//! through a chain of weighted linear transforms.
//!
//! Loading, formatting, and persistence are collaborator concerns; this
//! crate consumes plain in-memory tables and produces plain result records.

pub mod aggregate;
pub mod betting;
pub mod constants;
pub mod curve;
pub mod error;
pub mod matchup;
pub mod phase;
pub mod tables;
pub mod team;
pub mod weather;

pub use aggregate::{aggregate, recency_sum, EfficiencyRecord, RecencyWeightTable};
pub use betting::{
    implied_win_pct, moneyline_from_win_pct, recommend_bets, BetMarket, BetRecommendation,
    BetSide, BettingLines, MarketEdges, OverUnder,
};
pub use curve::{CalibrationCurve, Category, CurveSet};
pub use error::ProjectionError;
pub use matchup::{
    points_from_value, project, project_slate, win_percentage, Matchup, ProjectionResult, Surface,
};
pub use phase::{defensive_value, offensive_pass_value, offensive_rush_value, PhaseBlendWeights};
pub use tables::{DaveRating, PassingGrade, PlayRates, PlayerUsage, Position, SlateData};
pub use team::TeamStrength;
pub use weather::{precipitation_impact, temperature_impact, wind_impact, GameConditions, Weather};

/// Immutable model configuration for one run: the recency weight schedule,
/// the calibration curve table, and the phase blend weights. Built once at
/// startup and passed by reference into every component; configuration
/// failures here abort the run before any matchup is touched.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub recency: RecencyWeightTable,
    pub curves: CurveSet,
    pub phase_weights: PhaseBlendWeights,
}

impl ModelConfig {
    /// Standard configuration: doubling recency divisors over the given
    /// seasons (newest first) and the canonical calibration constants.
    pub fn standard<S: Into<String>>(
        seasons_newest_first: impl IntoIterator<Item = S>,
    ) -> Result<Self, ProjectionError> {
        Ok(ModelConfig {
            recency: RecencyWeightTable::doubling(seasons_newest_first),
            curves: CurveSet::standard()?,
            phase_weights: PhaseBlendWeights::default(),
        })
    }

    /// Replace the recency schedule, keeping curves and weights.
    pub fn with_recency(mut self, recency: RecencyWeightTable) -> Self {
        self.recency = recency;
        self
    }
}
