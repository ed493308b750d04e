//! Model constants: calibration points, blend weights, and scoring curves.
//!
//! Every designer-chosen figure in the projection chain lives here so that
//! nothing in the engine reads from scattered literals.

/// Calibration points per category: (floor_x, ceiling_x).
/// A raw rating at floor_x maps to 0, at ceiling_x maps to 10, extrapolated
/// linearly beyond either end.
pub const PASSING_CALIBRATION: (f64, f64) = (-0.80, 0.55);
pub const RUSHING_CALIBRATION: (f64, f64) = (-0.20, 0.25);
pub const RECEIVING_CALIBRATION: (f64, f64) = (-0.20, 0.30);

/// Offensive line pass protection is an adjusted sack rate: lower is better.
pub const OL_PASS_CALIBRATION: (f64, f64) = (0.85, 0.25);
/// Offensive line run blocking is adjusted line yards: higher is better.
pub const OL_RUSH_CALIBRATION: (f64, f64) = (22.5, 35.75);

/// Defensive DVOA: negative is better, so both curves slope downward.
pub const DEF_PASS_CALIBRATION: (f64, f64) = (3.55, -1.60);
pub const DEF_RUSH_CALIBRATION: (f64, f64) = (0.85, -2.00);

/// Team-level units (OL, defense) enter their curves as a recency-weighted
/// SUM of per-season figures scaled by this factor, not as the normalized
/// average. The four calibration pairs above are tuned to that axis: over
/// four seasons a flat per-season figure lands on the curve at 225/32 times
/// its own value.
pub const TEAM_UNIT_SUM_SCALE: f64 = 15.0 / 4.0;

/// Longer-horizon composite ("DAVE") ratings on their native percentage scale.
pub const DAVE_OFF_CALIBRATION: (f64, f64) = (-17.0, 17.0);
pub const DAVE_DEF_CALIBRATION: (f64, f64) = (9.5, -10.5);

/// Independent quarterback grade (0-100 scouting scale) blended 50/50 into
/// the passing unit alongside the efficiency-derived value.
pub const PFF_PASSING_CALIBRATION: (f64, f64) = (30.0, 95.0);

/// Value scale endpoints shared by every calibration curve.
pub const VALUE_FLOOR: f64 = 0.0;
pub const VALUE_CEILING: f64 = 10.0;

/// Offensive pass phase blend: quarterback / receiving corps / OL pass block.
pub const OFF_PASS_QB_WEIGHT: f64 = 0.50;
pub const OFF_PASS_REC_WEIGHT: f64 = 0.30;
pub const OFF_PASS_OL_WEIGHT: f64 = 0.20;

/// Offensive rush phase blend: rushing attack / OL run block.
pub const OFF_RUSH_RUSH_WEIGHT: f64 = 0.60;
pub const OFF_RUSH_OL_WEIGHT: f64 = 0.40;

/// Net-offensive-value to points polynomial, lowest degree first
/// (linear, quadratic, cubic, quartic terms).
pub const POINTS_POLY: [f64; 4] = [1.23, 0.0692, 0.0242, 0.000665];

/// Baseline points at zero net offensive value, by field surface.
pub const GRASS_BASELINE_POINTS: f64 = 23.667;
pub const TURF_BASELINE_POINTS: f64 = 24.333;

/// Win percentage slope per point of projected deficit.
pub const WIN_PCT_SLOPE: f64 = -0.0303;
/// Win percentages are clamped to this band; a game is never a lock.
pub const WIN_PCT_MIN: f64 = 0.1;
pub const WIN_PCT_MAX: f64 = 99.9;

/// Neutral indoor conditions forced for dome games.
pub const DOME_TEMPERATURE: f64 = 72.5;

/// Wind impact polynomial: constant, linear, quadratic in wind speed (mph).
pub const WIND_POLY: [f64; 3] = [0.999, 0.00317, -0.000458];

/// Fraction of passing value lost per percentage point of precipitation
/// chance.
pub const PRECIP_COEFF: f64 = 0.0025;

/// Temperature impact polynomial: constant, linear, quadratic in degrees of
/// deviation from a team's average home temperature.
pub const TEMP_POLY: [f64; 3] = [0.000664, 0.00148, 0.0000375];

/// Materiality thresholds before an edge becomes a recommendation.
pub const MONEYLINE_EDGE_THRESHOLD: f64 = 3.0;
pub const SPREAD_EDGE_THRESHOLD: f64 = 1.5;
pub const TOTAL_EDGE_THRESHOLD: f64 = 3.0;

/// Stake sizing multipliers (see `betting::recommend_bets`).
pub const SPREAD_STAKE_FACTOR: f64 = 7.5;
pub const TOTAL_STAKE_FACTOR: f64 = 3.0;
