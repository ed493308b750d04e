//! Read-only input snapshot for one projection run.
//!
//! All file and network access happens in collaborators before the engine
//! runs; the engine only ever sees these plain in-memory tables. Accessors
//! return `Result` so that a missing key is a visible lookup failure, never
//! a silent default: a key that is present with value 0 is valid data, a
//! key that is absent is not.

use std::collections::HashMap;

use crate::aggregate::EfficiencyRecord;
use crate::curve::Category;
use crate::error::ProjectionError;

/// Roster position groups the model cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
}

/// One rostered player with projected (forward-looking) usage for the
/// upcoming game. Distinct from historical volume: these are the attempt,
/// carry, and target counts the player is expected to see this week.
#[derive(Clone, Debug)]
pub struct PlayerUsage {
    pub name: String,
    pub position: Position,
    pub pass_attempts: f64,
    pub rush_attempts: f64,
    pub targets: f64,
}

impl PlayerUsage {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        PlayerUsage {
            name: name.into(),
            position,
            pass_attempts: 0.0,
            rush_attempts: 0.0,
            targets: 0.0,
        }
    }

    pub fn with_pass_attempts(mut self, attempts: f64) -> Self {
        self.pass_attempts = attempts;
        self
    }

    pub fn with_rush_attempts(mut self, attempts: f64) -> Self {
        self.rush_attempts = attempts;
        self
    }

    pub fn with_targets(mut self, targets: f64) -> Self {
        self.targets = targets;
        self
    }
}

/// Situational play-calling tendencies, in percent of plays (0–100).
#[derive(Clone, Copy, Debug)]
pub struct PlayRates {
    pub offense_pass_rate: f64,
    pub defense_pass_rate: f64,
}

/// One quarterback's independent scouting grade (0-100) with the pass
/// attempts behind it, from the most recent season.
#[derive(Clone, Copy, Debug)]
pub struct PassingGrade {
    pub grade: f64,
    pub attempts: f64,
}

/// Longer-horizon composite efficiency ("DAVE"-like), on its native
/// percentage scale, prior to normalization.
#[derive(Clone, Copy, Debug)]
pub struct DaveRating {
    pub offense: f64,
    pub defense: f64,
}

/// Per-season, per-category player observations: player → (rating, volume).
pub type PlayerSeasonTable = HashMap<String, (f64, f64)>;

/// The full input snapshot for a slate of matchups.
#[derive(Clone, Debug, Default)]
pub struct SlateData {
    /// Team code → rostered players with projected usage.
    pub rosters: HashMap<String, Vec<PlayerUsage>>,
    /// Season → category → player observations. Player keys are stored
    /// lowercase; lookups normalize the same way.
    pub player_history: HashMap<String, HashMap<Category, PlayerSeasonTable>>,
    /// Season → category → team code → raw efficiency figure.
    pub team_history: HashMap<String, HashMap<Category, HashMap<String, f64>>>,
    /// Team code → offensive/defensive pass-rate tendencies.
    pub play_rates: HashMap<String, PlayRates>,
    /// Team code → full home edge in points (halved when applied).
    pub home_advantage: HashMap<String, f64>,
    /// Team code → historical average temperature at home, °F.
    pub home_avg_temperature: HashMap<String, f64>,
    /// Team code → composite rating, when the source publishes one.
    pub dave: HashMap<String, DaveRating>,
    /// Player (lowercased) → latest-season scouting grade for passing.
    pub passing_grades: HashMap<String, PassingGrade>,
}

impl SlateData {
    pub fn roster(&self, team: &str) -> Result<&[PlayerUsage], ProjectionError> {
        self.rosters
            .get(team)
            .map(Vec::as_slice)
            .ok_or_else(|| ProjectionError::missing("rosters", team))
    }

    /// Every historical observation for one player in one category.
    ///
    /// Absence is not an error here: a rookie or newly signed player simply
    /// has no history and aggregates to the zero fallback.
    pub fn player_records(&self, player: &str, category: Category) -> Vec<EfficiencyRecord> {
        let key = player.to_lowercase();
        let mut records = Vec::new();
        for (season, categories) in &self.player_history {
            if let Some((rating, volume)) = categories
                .get(&category)
                .and_then(|players| players.get(&key))
            {
                records.push(EfficiencyRecord::new(season.clone(), *rating, *volume));
            }
        }
        records
    }

    /// Every historical observation for one team in one category, each season
    /// counting as a unit-volume sample.
    ///
    /// Unlike players, a team absent from every season of a required table is
    /// a hard lookup failure: a silently defaulted line or defense corrupts
    /// the projection without detection.
    pub fn team_records(
        &self,
        team: &str,
        category: Category,
    ) -> Result<Vec<EfficiencyRecord>, ProjectionError> {
        let mut records = Vec::new();
        for (season, categories) in &self.team_history {
            if let Some(raw) = categories.get(&category).and_then(|teams| teams.get(team)) {
                records.push(EfficiencyRecord::new(season.clone(), *raw, 1.0));
            }
        }
        if records.is_empty() {
            return Err(ProjectionError::missing("team efficiency", team));
        }
        Ok(records)
    }

    pub fn play_rates(&self, team: &str) -> Result<PlayRates, ProjectionError> {
        self.play_rates
            .get(team)
            .copied()
            .ok_or_else(|| ProjectionError::missing("play rates", team))
    }

    pub fn home_advantage(&self, team: &str) -> Result<f64, ProjectionError> {
        self.home_advantage
            .get(team)
            .copied()
            .ok_or_else(|| ProjectionError::missing("home advantage", team))
    }

    pub fn home_avg_temperature(&self, team: &str) -> Result<f64, ProjectionError> {
        self.home_avg_temperature
            .get(team)
            .copied()
            .ok_or_else(|| ProjectionError::missing("average temperature", team))
    }

    /// Composite ratings are optional input; absence just skips the blend.
    pub fn dave(&self, team: &str) -> Option<DaveRating> {
        self.dave.get(team).copied()
    }

    /// Scouting grades are optional input; an ungraded quarterback simply
    /// contributes nothing to the grade half of the passing blend.
    pub fn passing_grade(&self, player: &str) -> Option<PassingGrade> {
        self.passing_grades.get(&player.to_lowercase()).copied()
    }

    /// Insert one player-season observation, normalizing the player key.
    pub fn insert_player_record(
        &mut self,
        season: impl Into<String>,
        category: Category,
        player: &str,
        rating: f64,
        volume: f64,
    ) {
        self.player_history
            .entry(season.into())
            .or_default()
            .entry(category)
            .or_default()
            .insert(player.to_lowercase(), (rating, volume));
    }

    /// Insert one passing grade, normalizing the player key.
    pub fn insert_passing_grade(&mut self, player: &str, grade: f64, attempts: f64) {
        self.passing_grades
            .insert(player.to_lowercase(), PassingGrade { grade, attempts });
    }

    /// Insert one team-season efficiency figure.
    pub fn insert_team_record(
        &mut self,
        season: impl Into<String>,
        category: Category,
        team: &str,
        raw: f64,
    ) {
        self.team_history
            .entry(season.into())
            .or_default()
            .entry(category)
            .or_default()
            .insert(team.to_string(), raw);
    }
}
