use thiserror::Error;

/// Errors surfaced by the projection engine.
///
/// Configuration problems (`UnknownSeason`, `DegenerateCurve`) are fatal for
/// the whole run: the model must not proceed with a partial constant table.
/// A `MissingEntry` aborts only the matchup whose lookup failed; the caller
/// decides whether to continue with the rest of the slate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("no recency weight configured for season {0:?}")]
    UnknownSeason(String),

    #[error("degenerate calibration curve: floor and ceiling both at {floor_x}")]
    DegenerateCurve { floor_x: f64 },

    #[error("recency weight for season {season:?} must be positive, got {divisor}")]
    NonPositiveWeight { season: String, divisor: f64 },

    #[error("missing {table} entry for {key:?}")]
    MissingEntry { table: &'static str, key: String },
}

impl ProjectionError {
    pub(crate) fn missing(table: &'static str, key: &str) -> Self {
        ProjectionError::MissingEntry {
            table,
            key: key.to_string(),
        }
    }

    /// Whether this error invalidates the entire run rather than one matchup.
    pub fn is_config(&self) -> bool {
        !matches!(self, ProjectionError::MissingEntry { .. })
    }
}
