use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Player, Team};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCompositionReport {
    pub team: Team,
    pub total_players: usize,
    pub positions: BTreeMap<String, usize>,
    pub nationalities: BTreeMap<String, usize>,
    pub average_rating: f64,
    pub total_value: f64,
    pub injured_players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPerformanceReport {
    pub team: Team,
    pub players: Vec<Player>,
    pub highest_rated: Option<Player>,
    pub lowest_rated: Option<Player>,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueReport {
    pub team: Team,
    pub players: Vec<Player>,
    pub total_value: f64,
    pub most_valuable: Option<Player>,
    pub least_valuable: Option<Player>,
    pub average_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryReport {
    pub team: Team,
    pub total_players: usize,
    pub injured_players: Vec<Player>,
    pub injury_rate: f64,
}
