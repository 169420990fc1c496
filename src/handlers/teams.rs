use actix_web::{HttpRequest, HttpResponse, Result, web};
use serde::Deserialize;

use crate::{
    AppState,
    database::{
        models::{Team, TeamFilter, TeamInput},
        repositories::{player_repo, team_repo},
        transaction::DatabaseTransaction,
    },
    error::AppError,
    handlers::shared::ApiResponse,
    services::Action,
};

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    pub country: Option<String>,
    pub league: Option<String>,
}

impl From<TeamQuery> for TeamFilter {
    fn from(query: TeamQuery) -> Self {
        TeamFilter::new(query.country, query.league)
    }
}

pub async fn get_teams(
    state: web::Data<AppState>,
    query: web::Query<TeamQuery>,
) -> Result<HttpResponse> {
    let filter = TeamFilter::from(query.into_inner());
    log::debug!("Fetching teams with filter {:?}", filter);

    let teams = team_repo::find_by_filter(&state.pool, &filter)
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(teams))
}

pub async fn get_team(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let team = team_repo::find_by_id(&state.pool, team_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            log::warn!("Team {} not found", team_id);
            AppError::not_found("Team")
        })?;

    Ok(ApiResponse::success(team))
}

pub async fn create_team(
    state: web::Data<AppState>,
    input: web::Json<TeamInput>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let team = Team::from_input(input.into_inner())?;

    let team = DatabaseTransaction::run(&state.pool, |tx| {
        Box::pin(async move { Ok(team_repo::create_team(tx, &team).await?) })
    })
    .await?;

    log::info!("Team {} created with id {}", team.name, team.id);
    state.activity_logger.log(
        "team",
        team.id,
        Action::Created,
        &format!("Team '{}' created", team.name),
        &req,
    );

    Ok(ApiResponse::created(team))
}

pub async fn update_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<TeamInput>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    let input = input.into_inner();

    let team = DatabaseTransaction::run(&state.pool, |tx| {
        Box::pin(async move {
            let mut team = team_repo::find_by_id(&mut **tx, team_id)
                .await?
                .ok_or_else(|| {
                    log::warn!("Team {} not found", team_id);
                    AppError::not_found("Team")
                })?;

            team.apply(input);
            team.validate()?;

            team_repo::update_team(tx, &team)
                .await?
                .ok_or_else(|| AppError::not_found("Team"))
        })
    })
    .await?;

    log::info!("Team {} updated", team.id);
    state.activity_logger.log(
        "team",
        team.id,
        Action::Updated,
        &format!("Team '{}' updated", team.name),
        &req,
    );

    Ok(ApiResponse::success(team))
}

/// Deletes the team together with every player that belongs to it.
pub async fn delete_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let (team, removed_players) = DatabaseTransaction::run(&state.pool, |tx| {
        Box::pin(async move {
            let team = team_repo::find_by_id(&mut **tx, team_id)
                .await?
                .ok_or_else(|| {
                    log::warn!("Team {} not found", team_id);
                    AppError::not_found("Team")
                })?;

            let removed_players = player_repo::delete_by_team(tx, team_id).await?;
            team_repo::delete_team(tx, team_id)
                .await?
                .ok_or_else(|| AppError::not_found("Team"))?;

            Ok((team, removed_players))
        })
    })
    .await?;

    log::info!(
        "Team {} deleted along with {} players",
        team_id,
        removed_players
    );
    state.activity_logger.log(
        "team",
        team_id,
        Action::Deleted,
        &format!(
            "Team '{}' deleted with {} players",
            team.name, removed_players
        ),
        &req,
    );

    Ok(ApiResponse::success_message("Team deleted successfully"))
}
