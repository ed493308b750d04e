//! Betting-market comparisons: implied probabilities, edges, and sizing.
//!
//! Spread sign convention follows the market: a home spread of -3.0 means
//! the home side is favored by three. The model's projected spread is
//! therefore `away_points - home_points`.

use crate::constants::{
    MONEYLINE_EDGE_THRESHOLD, SPREAD_EDGE_THRESHOLD, SPREAD_STAKE_FACTOR, TOTAL_EDGE_THRESHOLD,
    TOTAL_STAKE_FACTOR,
};

/// Market lines for one game, American odds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BettingLines {
    pub home_moneyline: f64,
    pub away_moneyline: f64,
    pub home_spread: f64,
    pub away_spread: f64,
    pub total: f64,
}

/// Implied win percentage from an American moneyline.
pub fn implied_win_pct(moneyline: f64) -> f64 {
    if moneyline < 0.0 {
        -moneyline / (-moneyline + 100.0) * 100.0
    } else {
        100.0 / (moneyline + 100.0) * 100.0
    }
}

/// American moneyline that implies a given win percentage. Inverse of
/// `implied_win_pct` for a fair (vig-free) two-way market.
pub fn moneyline_from_win_pct(win_pct: f64) -> f64 {
    if win_pct > 50.0 {
        -(win_pct / (100.0 - win_pct)) * 100.0
    } else {
        ((100.0 - win_pct) / win_pct) * 100.0
    }
}

/// Signed differences between the model's projection and the market.
#[derive(Clone, Copy, Debug)]
pub struct MarketEdges {
    /// Market home spread minus projected (away - home) margin; positive
    /// favors the home side of the spread.
    pub spread_edge: f64,
    /// Projected total minus market total; positive favors the over.
    pub total_edge: f64,
    /// Projected win% minus moneyline-implied win%, percentage points.
    pub moneyline_edge_home: f64,
    pub moneyline_edge_away: f64,
    pub implied_home_win_pct: f64,
    pub implied_away_win_pct: f64,
}

/// Compare projected points and win percentages against the market.
pub fn market_edges(
    lines: &BettingLines,
    home_points: f64,
    away_points: f64,
    home_win_pct: f64,
    away_win_pct: f64,
) -> MarketEdges {
    let projected_spread = away_points - home_points;
    let implied_home = implied_win_pct(lines.home_moneyline);
    let implied_away = implied_win_pct(lines.away_moneyline);

    MarketEdges {
        spread_edge: lines.home_spread - projected_spread,
        total_edge: (home_points + away_points) - lines.total,
        moneyline_edge_home: home_win_pct - implied_home,
        moneyline_edge_away: away_win_pct - implied_away,
        implied_home_win_pct: implied_home,
        implied_away_win_pct: implied_away,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetSide {
    Home,
    Away,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverUnder {
    Over,
    Under,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BetMarket {
    Moneyline(BetSide),
    Spread(BetSide),
    Total(OverUnder),
}

/// One sized recommendation. Stake is in bankroll units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BetRecommendation {
    pub market: BetMarket,
    pub stake: f64,
}

/// Turn material edges into sized recommendations. Edges inside their
/// thresholds produce nothing.
pub fn recommend_bets(
    edges: &MarketEdges,
    home_win_pct: f64,
    away_win_pct: f64,
) -> Vec<BetRecommendation> {
    let mut bets = Vec::new();

    if edges.moneyline_edge_home > MONEYLINE_EDGE_THRESHOLD {
        bets.push(BetRecommendation {
            market: BetMarket::Moneyline(BetSide::Home),
            stake: moneyline_stake(edges.moneyline_edge_home, home_win_pct),
        });
    } else if edges.moneyline_edge_away > MONEYLINE_EDGE_THRESHOLD {
        bets.push(BetRecommendation {
            market: BetMarket::Moneyline(BetSide::Away),
            stake: moneyline_stake(edges.moneyline_edge_away, away_win_pct),
        });
    }

    if edges.spread_edge.abs() > SPREAD_EDGE_THRESHOLD {
        let side = if edges.spread_edge > 0.0 {
            BetSide::Home
        } else {
            BetSide::Away
        };
        bets.push(BetRecommendation {
            market: BetMarket::Spread(side),
            stake: 5.0 * (edges.spread_edge.abs() * SPREAD_STAKE_FACTOR).round(),
        });
    }

    if edges.total_edge.abs() >= TOTAL_EDGE_THRESHOLD {
        let side = if edges.total_edge > 0.0 {
            OverUnder::Over
        } else {
            OverUnder::Under
        };
        bets.push(BetRecommendation {
            market: BetMarket::Total(side),
            stake: 5.0 * (edges.total_edge.abs() * TOTAL_STAKE_FACTOR).round(),
        });
    }

    bets
}

/// Moneyline stake scales with both the edge and the projected win chance:
/// a big edge on a likely winner sizes up, a longshot sizes down.
fn moneyline_stake(edge: f64, win_pct: f64) -> f64 {
    5.0 * ((edge / 20.0) * (win_pct / 100.0) * 100.0).round()
}
