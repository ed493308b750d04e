//! Recency-weighted aggregation of multi-year efficiency samples.
//!
//! Collapses per-season (rating, volume) observations for one subject into a
//! single current-value scalar. Older seasons contribute through a divisor
//! that grows with age, so the current season dominates the blend.

use std::collections::HashMap;

use crate::error::ProjectionError;

/// One player-year or team-year efficiency observation.
///
/// `raw_rating` is a signed efficiency figure (a DVOA-like fraction or a rate
/// stat); `volume` is the sample size behind it (attempts, targets, plays).
#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencyRecord {
    pub season: String,
    pub raw_rating: f64,
    pub volume: f64,
}

impl EfficiencyRecord {
    pub fn new(season: impl Into<String>, raw_rating: f64, volume: f64) -> Self {
        EfficiencyRecord {
            season: season.into(),
            raw_rating,
            volume,
        }
    }
}

/// Season label → volume divisor.
///
/// Every season referenced by input data must be present; an unknown season
/// is a configuration error, never a silent zero weight.
#[derive(Clone, Debug, Default)]
pub struct RecencyWeightTable {
    divisors: HashMap<String, f64>,
}

impl RecencyWeightTable {
    /// Build from explicit (season, divisor) pairs. Divisors must be positive.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ProjectionError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut divisors = HashMap::new();
        for (season, divisor) in pairs {
            let season = season.into();
            if divisor <= 0.0 {
                return Err(ProjectionError::NonPositiveWeight { season, divisor });
            }
            divisors.insert(season, divisor);
        }
        Ok(RecencyWeightTable { divisors })
    }

    /// Standard schedule: newest season first, divisor doubling per year back
    /// (1, 2, 4, 8, ...).
    pub fn doubling<S: Into<String>>(seasons_newest_first: impl IntoIterator<Item = S>) -> Self {
        let divisors = seasons_newest_first
            .into_iter()
            .enumerate()
            .map(|(i, season)| (season.into(), (1u64 << i) as f64))
            .collect();
        RecencyWeightTable { divisors }
    }

    pub fn divisor(&self, season: &str) -> Result<f64, ProjectionError> {
        self.divisors
            .get(season)
            .copied()
            .ok_or_else(|| ProjectionError::UnknownSeason(season.to_string()))
    }

    pub fn seasons(&self) -> impl Iterator<Item = &str> {
        self.divisors.keys().map(String::as_str)
    }
}

/// Collapse a subject's multi-year records into one scalar.
///
/// Each record contributes `raw_rating` weighted by `volume / divisor(season)`.
/// A subject with no effective volume at all (no records, or only zero-volume
/// records) aggregates to 0.0, a defined fallback so new or unlisted players
/// never break the pipeline.
pub fn aggregate(
    records: &[EfficiencyRecord],
    weights: &RecencyWeightTable,
) -> Result<f64, ProjectionError> {
    let mut total_contribution = 0.0;
    let mut total_volume = 0.0;

    for record in records {
        let effective_volume = record.volume / weights.divisor(&record.season)?;
        total_contribution += record.raw_rating * effective_volume;
        total_volume += effective_volume;
    }

    if total_volume == 0.0 {
        Ok(0.0)
    } else {
        Ok(total_contribution / total_volume)
    }
}

/// Unnormalized companion to `aggregate`: the recency-discounted sum
/// `sum(raw_rating * volume / divisor)` with no division by total volume.
///
/// Team-level unit figures are calibrated on this axis (see
/// `constants::TEAM_UNIT_SUM_SCALE`), where adding a season of history
/// raises the magnitude instead of averaging into it.
pub fn recency_sum(
    records: &[EfficiencyRecord],
    weights: &RecencyWeightTable,
) -> Result<f64, ProjectionError> {
    let mut total = 0.0;
    for record in records {
        total += record.raw_rating * record.volume / weights.divisor(&record.season)?;
    }
    Ok(total)
}
