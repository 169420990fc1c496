use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::{
    AppState,
    database::{
        models::{Player, Team},
        repositories::{player_repo, team_repo},
    },
    error::AppError,
    handlers::shared::{ApiResponse, parse_team_id},
    services::reports,
};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub team_id: Option<String>,
}

/// Resolves the requested team and loads its players in id order.
async fn load_roster(state: &AppState, query: ReportQuery) -> Result<(Team, Vec<Player>), AppError> {
    let team_id = parse_team_id(query.team_id.as_deref())?;

    let team = team_repo::find_by_id(&state.pool, team_id)
        .await?
        .ok_or_else(|| {
            log::warn!("Report requested for unknown team {}", team_id);
            AppError::not_found("Team")
        })?;
    let players = player_repo::find_by_team(&state.pool, team_id).await?;

    Ok((team, players))
}

pub async fn team_composition(
    state: web::Data<AppState>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let (team, players) = load_roster(&state, query.into_inner()).await?;
    Ok(ApiResponse::success(reports::team_composition(team, players)))
}

pub async fn player_performance(
    state: web::Data<AppState>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let (team, players) = load_roster(&state, query.into_inner()).await?;
    Ok(ApiResponse::success(reports::player_performance(team, players)))
}

pub async fn value_report(
    state: web::Data<AppState>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let (team, players) = load_roster(&state, query.into_inner()).await?;
    Ok(ApiResponse::success(reports::value_report(team, players)))
}

pub async fn injury_report(
    state: web::Data<AppState>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let (team, players) = load_roster(&state, query.into_inner()).await?;
    Ok(ApiResponse::success(reports::injury_report(team, players)))
}
