//! Derived statistics over the players of one team.
//!
//! Every builder is a pure function of `(team, players)`. Averages and rates
//! are `0.0` when there are no players.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::database::models::{
    InjuryReport, Player, PlayerPerformanceReport, Team, TeamCompositionReport, ValueReport,
};

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn count_by<'a>(values: impl Iterator<Item = Option<&'a str>>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in values.flatten().filter(|v| !v.is_empty()) {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Stable sort, highest key first. Equal keys keep their input order.
fn sorted_descending(mut players: Vec<Player>, key: impl Fn(&Player) -> f64) -> Vec<Player> {
    players.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    players
}

pub fn team_composition(team: Team, players: Vec<Player>) -> TeamCompositionReport {
    let positions = count_by(players.iter().map(|p| p.position.as_deref()));
    let nationalities = count_by(players.iter().map(|p| p.nationality.as_deref()));
    let total_rating: f64 = players.iter().map(Player::rating_or_zero).sum();
    let total_value: f64 = players.iter().map(Player::value_or_zero).sum();
    let total_players = players.len();

    let injured_players = players.into_iter().filter(|p| p.is_injured).collect();

    TeamCompositionReport {
        team,
        total_players,
        positions,
        nationalities,
        average_rating: mean(total_rating, total_players),
        total_value,
        injured_players,
    }
}

pub fn player_performance(team: Team, players: Vec<Player>) -> PlayerPerformanceReport {
    let total_rating: f64 = players.iter().map(Player::rating_or_zero).sum();
    let average_rating = mean(total_rating, players.len());
    let players = sorted_descending(players, Player::rating_or_zero);

    PlayerPerformanceReport {
        team,
        highest_rated: players.first().cloned(),
        lowest_rated: players.last().cloned(),
        players,
        average_rating,
    }
}

pub fn value_report(team: Team, players: Vec<Player>) -> ValueReport {
    let total_value: f64 = players.iter().map(Player::value_or_zero).sum();
    let average_value = mean(total_value, players.len());
    let players = sorted_descending(players, Player::value_or_zero);

    ValueReport {
        team,
        most_valuable: players.first().cloned(),
        least_valuable: players.last().cloned(),
        players,
        total_value,
        average_value,
    }
}

pub fn injury_report(team: Team, players: Vec<Player>) -> InjuryReport {
    let total_players = players.len();
    let injured_players: Vec<Player> = players.into_iter().filter(|p| p.is_injured).collect();
    let injury_rate = mean(injured_players.len() as f64 * 100.0, total_players);

    InjuryReport {
        team,
        total_players,
        injured_players,
        injury_rate,
    }
}
