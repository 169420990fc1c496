use serde::{Deserialize, Serialize};

use super::macros::merge_fields;
use super::nullable;
use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub established_year: Option<i32>,
    pub home_stadium: Option<String>,
    pub logo_url: Option<String>,
    pub club_colors: Option<String>,
    pub country: Option<String>,
    pub league: Option<String>,
    pub current_season_position: Option<i32>,
    pub team_value: Option<f64>,
    pub historical_performance: Option<String>,
    pub contact_information: Option<String>,
    pub description: Option<String>,
    pub wikipedia_link: Option<String>,
}

/// Body of create and update requests. An absent field leaves the stored
/// value untouched on update; an explicit `null` clears an optional field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub established_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub home_stadium: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub logo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub club_colors: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub league: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub current_season_position: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub team_value: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub historical_performance: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub contact_information: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub wikipedia_link: Option<Option<String>>,
}

/// Exact-match criteria for listing teams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamFilter {
    pub country: Option<String>,
    pub league: Option<String>,
}

impl Team {
    /// Builds a new, not yet persisted team from a create request.
    pub fn from_input(input: TeamInput) -> Result<Self, AppError> {
        let mut team = Team::default();
        team.apply(input);
        team.validate()?;
        Ok(team)
    }

    /// Merges the supplied fields onto this record.
    pub fn apply(&mut self, input: TeamInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        merge_fields!(
            self,
            input;
            established_year,
            home_stadium,
            logo_url,
            club_colors,
            country,
            league,
            current_season_position,
            team_value,
            historical_performance,
            contact_information,
            description,
            wikipedia_link,
        );
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::bad_request("Team name is required"));
        }
        Ok(())
    }
}

impl TeamFilter {
    /// Blank query values impose no constraint.
    pub fn new(country: Option<String>, league: Option<String>) -> Self {
        Self {
            country: country.filter(|c| !c.trim().is_empty()),
            league: league.filter(|l| !l.trim().is_empty()),
        }
    }

    pub fn matches(&self, team: &Team) -> bool {
        fn eq(expected: &Option<String>, actual: &Option<String>) -> bool {
            expected
                .as_ref()
                .is_none_or(|e| actual.as_deref() == Some(e.as_str()))
        }

        eq(&self.country, &team.country) && eq(&self.league, &team.league)
    }

    pub fn apply<'a>(&self, teams: &'a [Team]) -> Vec<&'a Team> {
        teams.iter().filter(|t| self.matches(t)).collect()
    }
}
