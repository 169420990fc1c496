use actix_web::{HttpRequest, HttpResponse, Result, web};
use serde::Deserialize;
use sqlx::{Sqlite, Transaction};

use crate::{
    AppState,
    database::{
        models::{Player, PlayerFilter, PlayerInput, parse_injured_flag},
        repositories::{player_repo, team_repo},
        transaction::DatabaseTransaction,
    },
    error::AppError,
    handlers::shared::{ApiResponse, non_empty},
    services::Action,
};

#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub team_id: Option<String>,
    pub position: Option<String>,
    pub injured: Option<String>,
}

impl TryFrom<PlayerQuery> for PlayerFilter {
    type Error = AppError;

    fn try_from(query: PlayerQuery) -> Result<Self, Self::Error> {
        let team_id = non_empty(query.team_id)
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| AppError::bad_request(format!("Invalid team_id filter: {}", raw)))
            })
            .transpose()?;

        Ok(PlayerFilter {
            team_id,
            position: non_empty(query.position),
            injured: query.injured.as_deref().map(parse_injured_flag),
        })
    }
}

/// Rejects references to teams that do not exist.
async fn ensure_team_exists(
    tx: &mut Transaction<'_, Sqlite>,
    team_id: Option<i64>,
) -> Result<(), AppError> {
    if let Some(team_id) = team_id {
        if !team_repo::exists(&mut **tx, team_id).await? {
            log::warn!("Rejecting player for missing team {}", team_id);
            return Err(AppError::bad_request(format!(
                "Team {} does not exist",
                team_id
            )));
        }
    }
    Ok(())
}

pub async fn get_players(
    state: web::Data<AppState>,
    query: web::Query<PlayerQuery>,
) -> Result<HttpResponse> {
    let filter = PlayerFilter::try_from(query.into_inner())?;
    log::debug!("Fetching players with filter {:?}", filter);

    let players = player_repo::find_by_filter(&state.pool, &filter)
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(players))
}

pub async fn get_player(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    let player = player_repo::find_by_id(&state.pool, player_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            log::warn!("Player {} not found", player_id);
            AppError::not_found("Player")
        })?;

    Ok(ApiResponse::success(player))
}

pub async fn create_player(
    state: web::Data<AppState>,
    input: web::Json<PlayerInput>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let player = Player::from_input(input.into_inner())?;

    let player = DatabaseTransaction::run(&state.pool, |tx| {
        Box::pin(async move {
            ensure_team_exists(tx, player.team_id).await?;
            Ok(player_repo::create_player(tx, &player).await?)
        })
    })
    .await?;

    log::info!("Player {} created with id {}", player.full_name, player.id);
    state.activity_logger.log(
        "player",
        player.id,
        Action::Created,
        &format!("Player '{}' created", player.full_name),
        &req,
    );

    Ok(ApiResponse::created(player))
}

pub async fn update_player(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<PlayerInput>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    let input = input.into_inner();

    let player = DatabaseTransaction::run(&state.pool, |tx| {
        Box::pin(async move {
            let mut player = player_repo::find_by_id(&mut **tx, player_id)
                .await?
                .ok_or_else(|| {
                    log::warn!("Player {} not found", player_id);
                    AppError::not_found("Player")
                })?;

            let previous_team = player.team_id;
            player.apply(input)?;
            if player.team_id != previous_team {
                ensure_team_exists(tx, player.team_id).await?;
            }

            player_repo::update_player(tx, &player)
                .await?
                .ok_or_else(|| AppError::not_found("Player"))
        })
    })
    .await?;

    log::info!("Player {} updated", player.id);
    state.activity_logger.log(
        "player",
        player.id,
        Action::Updated,
        &format!("Player '{}' updated", player.full_name),
        &req,
    );

    Ok(ApiResponse::success(player))
}

pub async fn delete_player(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    DatabaseTransaction::run(&state.pool, |tx| {
        Box::pin(async move {
            player_repo::delete_player(tx, player_id)
                .await?
                .ok_or_else(|| {
                    log::warn!("Player {} not found", player_id);
                    AppError::not_found("Player")
                })
        })
    })
    .await?;

    log::info!("Player {} deleted", player_id);
    state.activity_logger.log(
        "player",
        player_id,
        Action::Deleted,
        "Player deleted",
        &req,
    );

    Ok(ApiResponse::success_message("Player deleted successfully"))
}
