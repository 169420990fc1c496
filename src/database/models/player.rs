use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::macros::merge_fields;
use super::nullable;
use crate::error::AppError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub contract_start: Option<NaiveDate>,
    pub contract_end: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub player_value: Option<f64>,
    pub team_id: Option<i64>,
    pub photo_url: Option<String>,
    pub is_injured: bool,
    pub injury_details: Option<String>,
    pub rating: Option<i32>,
}

/// Body of create and update requests. An absent field leaves the stored
/// value untouched and an explicit `null` clears an optional field. Dates
/// arrive as ISO strings; a null or blank date leaves the stored date as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerInput {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub nationality: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub jersey_number: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub height: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub weight: Option<Option<f64>>,
    pub contract_start: Option<String>,
    pub contract_end: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub salary: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub player_value: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub team_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub photo_url: Option<Option<String>>,
    pub is_injured: Option<bool>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub injury_details: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub rating: Option<Option<i32>>,
}

/// Exact-match criteria for listing players.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    pub team_id: Option<i64>,
    pub position: Option<String>,
    pub injured: Option<bool>,
}

/// Parses a calendar date. A time component, if present, is dropped.
pub fn parse_iso_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .map_err(|_| {
            AppError::bad_request(format!(
                "Invalid {}: '{}' is not an ISO date (YYYY-MM-DD)",
                field, raw
            ))
        })
}

/// `"true"` in any casing means injured; every other value means fit.
pub fn parse_injured_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

impl Player {
    /// Builds a new, not yet persisted player from a create request.
    pub fn from_input(input: PlayerInput) -> Result<Self, AppError> {
        let mut player = Player::default();
        player.apply(input)?;
        Ok(player)
    }

    /// Merges the supplied fields onto this record, then normalizes and
    /// validates the result. On error the record is left unchanged.
    pub fn apply(&mut self, input: PlayerInput) -> Result<(), AppError> {
        let mut merged = self.clone();

        // A blank date field is the same as an absent one.
        let parse = |field: &str, raw: Option<String>| {
            raw.filter(|r| !r.trim().is_empty())
                .map(|r| parse_iso_date(field, &r))
                .transpose()
        };
        let date_of_birth = parse("date_of_birth", input.date_of_birth)?;
        let contract_start = parse("contract_start", input.contract_start)?;
        let contract_end = parse("contract_end", input.contract_end)?;

        if let Some(full_name) = input.full_name {
            merged.full_name = full_name;
        }
        if let Some(is_injured) = input.is_injured {
            merged.is_injured = is_injured;
        }
        if date_of_birth.is_some() {
            merged.date_of_birth = date_of_birth;
        }
        if contract_start.is_some() {
            merged.contract_start = contract_start;
        }
        if contract_end.is_some() {
            merged.contract_end = contract_end;
        }

        merge_fields!(
            merged,
            input;
            nationality,
            position,
            jersey_number,
            height,
            weight,
            salary,
            player_value,
            team_id,
            photo_url,
            injury_details,
            rating,
        );

        merged.normalize_injury();
        merged.validate()?;

        *self = merged;
        Ok(())
    }

    /// Injury details only describe an injured player.
    pub fn normalize_injury(&mut self) {
        if !self.is_injured {
            self.injury_details = None;
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::bad_request("Player full name is required"));
        }
        if let Some(rating) = self.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(AppError::bad_request(format!(
                    "Rating must be between {} and {}, got {}",
                    MIN_RATING, MAX_RATING, rating
                )));
            }
        }
        if let (Some(start), Some(end)) = (self.contract_start, self.contract_end) {
            if end < start {
                return Err(AppError::bad_request(
                    "Contract end must not be before contract start",
                ));
            }
        }
        Ok(())
    }

    pub fn rating_or_zero(&self) -> f64 {
        f64::from(self.rating.unwrap_or(0))
    }

    pub fn value_or_zero(&self) -> f64 {
        self.player_value.unwrap_or(0.0)
    }
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        self.team_id.is_none_or(|id| player.team_id == Some(id))
            && self
                .position
                .as_ref()
                .is_none_or(|p| player.position.as_deref() == Some(p.as_str()))
            && self.injured.is_none_or(|injured| player.is_injured == injured)
    }

    pub fn apply<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        players.iter().filter(|p| self.matches(p)).collect()
    }
}
