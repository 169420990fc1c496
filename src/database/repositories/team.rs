use sqlx::{QueryBuilder, Sqlite, Transaction, sqlite::SqliteExecutor};

use crate::database::models::{Team, TeamFilter};

pub async fn create_team(
    tx: &mut Transaction<'_, Sqlite>,
    team: &Team,
) -> Result<Team, sqlx::Error> {
    let team = sqlx::query_as::<_, Team>(
        r#"
            INSERT INTO
                teams (
                    name,
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
                    wikipedia_link
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                name,
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
                wikipedia_link
        "#,
    )
    .bind(&team.name)
    .bind(team.established_year)
    .bind(&team.home_stadium)
    .bind(&team.logo_url)
    .bind(&team.club_colors)
    .bind(&team.country)
    .bind(&team.league)
    .bind(team.current_season_position)
    .bind(team.team_value)
    .bind(&team.historical_performance)
    .bind(&team.contact_information)
    .bind(&team.description)
    .bind(&team.wikipedia_link)
    .fetch_one(&mut **tx)
    .await?;

    Ok(team)
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Team>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let team = sqlx::query_as::<_, Team>(
        r#"
            SELECT
                id,
                name,
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
                wikipedia_link
            FROM
                teams
            WHERE
                id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(team)
}

pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Team>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let team = sqlx::query_as::<_, Team>(
        r#"
            SELECT
                id,
                name,
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
                wikipedia_link
            FROM
                teams
            WHERE
                name = ?
            ORDER BY
                id
            LIMIT 1
        "#,
    )
    .bind(name)
    .fetch_optional(executor)
    .await?;

    Ok(team)
}

pub async fn find_by_filter<'e, E>(executor: E, filter: &TeamFilter) -> Result<Vec<Team>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let mut query = QueryBuilder::<Sqlite>::new(
        r#"
            SELECT
                id,
                name,
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
                wikipedia_link
            FROM
                teams
        "#,
    );

    let mut separator = " WHERE ";
    if let Some(country) = &filter.country {
        query.push(separator).push("country = ").push_bind(country.clone());
        separator = " AND ";
    }
    if let Some(league) = &filter.league {
        query.push(separator).push("league = ").push_bind(league.clone());
    }
    query.push(" ORDER BY id");

    let teams = query.build_query_as::<Team>().fetch_all(executor).await?;

    Ok(teams)
}

pub async fn exists<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM teams WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(found.is_some())
}

pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM teams")
        .fetch_one(executor)
        .await
}

/// Writes every column of `team`; callers merge partial input beforehand.
pub async fn update_team(
    tx: &mut Transaction<'_, Sqlite>,
    team: &Team,
) -> Result<Option<Team>, sqlx::Error> {
    let team = sqlx::query_as::<_, Team>(
        r#"
            UPDATE
                teams
            SET
                name = ?,
                established_year = ?,
                home_stadium = ?,
                logo_url = ?,
                club_colors = ?,
                country = ?,
                league = ?,
                current_season_position = ?,
                team_value = ?,
                historical_performance = ?,
                contact_information = ?,
                description = ?,
                wikipedia_link = ?
            WHERE
                id = ?
            RETURNING
                id,
                name,
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
                wikipedia_link
        "#,
    )
    .bind(&team.name)
    .bind(team.established_year)
    .bind(&team.home_stadium)
    .bind(&team.logo_url)
    .bind(&team.club_colors)
    .bind(&team.country)
    .bind(&team.league)
    .bind(team.current_season_position)
    .bind(team.team_value)
    .bind(&team.historical_performance)
    .bind(&team.contact_information)
    .bind(&team.description)
    .bind(&team.wikipedia_link)
    .bind(team.id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(team)
}

pub async fn delete_team(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teams WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    Ok(if result.rows_affected() > 0 {
        Some(())
    } else {
        None
    })
}
