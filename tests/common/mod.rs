#![allow(dead_code)]

use actix_web::web;
use anyhow::Result;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

use soccer_api::AppState;
use soccer_api::config::Config;
use soccer_api::database::init_database;
use soccer_api::database::models::{Player, PlayerInput, Team, TeamInput};
use soccer_api::database::repositories::{player_repo, team_repo};
use soccer_api::handlers::shared::ApiResponse;

// Test database plus the state the handlers run against
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());

        let config = Config {
            database_url: database_url.clone(),
            activity_log_path: temp_dir.path().join("log.txt").display().to_string(),
            ..Config::test_config()
        };

        let pool = init_database(&database_url, 1).await?;

        Ok(TestContext {
            pool,
            config,
            temp_dir,
        })
    }

    pub fn state(&self) -> web::Data<AppState> {
        web::Data::new(AppState::new(self.pool.clone(), self.config.clone()))
    }

    pub fn activity_log(&self) -> PathBuf {
        PathBuf::from(&self.config.activity_log_path)
    }

    pub async fn insert_team(&self, input: TeamInput) -> Result<Team> {
        let team = Team::from_input(input)?;
        let mut tx = self.pool.begin().await?;
        let team = team_repo::create_team(&mut tx, &team).await?;
        tx.commit().await?;
        Ok(team)
    }

    pub async fn insert_player(&self, input: PlayerInput) -> Result<Player> {
        let player = Player::from_input(input)?;
        let mut tx = self.pool.begin().await?;
        let player = player_repo::create_player(&mut tx, &player).await?;
        tx.commit().await?;
        Ok(player)
    }
}

// Test data fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub fn team(name: &str, country: &str, league: &str) -> TeamInput {
        TeamInput {
            name: Some(name.to_string()),
            country: Some(Some(country.to_string())),
            league: Some(Some(league.to_string())),
            home_stadium: Some(Some(format!("{} Stadium", name))),
            established_year: Some(Some(1900)),
            ..TeamInput::default()
        }
    }

    pub fn player(name: &str, team_id: i64, position: &str, rating: i32, value: f64) -> PlayerInput {
        PlayerInput {
            full_name: Some(name.to_string()),
            team_id: Some(Some(team_id)),
            position: Some(Some(position.to_string())),
            nationality: Some(Some("Spain".to_string())),
            rating: Some(Some(rating)),
            player_value: Some(Some(value)),
            is_injured: Some(false),
            ..PlayerInput::default()
        }
    }

    pub fn injured(mut input: PlayerInput, details: &str) -> PlayerInput {
        input.is_injured = Some(true);
        input.injury_details = Some(Some(details.to_string()));
        input
    }

    pub fn team_json(name: &str) -> Value {
        json!({
            "name": name,
            "country": "Spain",
            "league": "La Liga",
            "established_year": 1899,
            "home_stadium": "Camp Nou"
        })
    }
}

// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    pub fn assert_success_response<T>(body: &[u8]) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let response: ApiResponse<T> =
            serde_json::from_slice(body).expect("Failed to parse JSON response");

        assert!(
            response.success,
            "Expected successful response but got error: {:?}",
            response.message
        );
        response.data.expect("Expected data in successful response")
    }

    pub fn assert_error_response(body: &[u8]) -> String {
        let response: ApiResponse<Value> =
            serde_json::from_slice(body).expect("Failed to parse JSON response");

        assert!(!response.success, "Expected an error response");
        assert!(response.data.is_none());
        response.message.expect("Expected an error message")
    }

    pub async fn assert_record_count(pool: &SqlitePool, table: &str, expected_count: i64) {
        let query = format!("SELECT COUNT(*) as count FROM {}", table);
        let result = sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(pool)
            .await
            .expect("Failed to count records");

        assert_eq!(
            result, expected_count,
            "Expected {} records in {} table, but found {}",
            expected_count, table, result
        );
    }
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
