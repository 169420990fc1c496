use sqlx::{QueryBuilder, Sqlite, Transaction, sqlite::SqliteExecutor};

use crate::database::models::{Player, PlayerFilter};

const SELECT_PLAYERS: &str = r#"
    SELECT
        id,
        full_name,
        date_of_birth,
        nationality,
        position,
        jersey_number,
        height,
        weight,
        contract_start,
        contract_end,
        salary,
        player_value,
        team_id,
        photo_url,
        is_injured,
        injury_details,
        rating
    FROM
        players
"#;

pub async fn create_player(
    tx: &mut Transaction<'_, Sqlite>,
    player: &Player,
) -> Result<Player, sqlx::Error> {
    let player = sqlx::query_as::<_, Player>(
        r#"
            INSERT INTO
                players (
                    full_name,
                    date_of_birth,
                    nationality,
                    position,
                    jersey_number,
                    height,
                    weight,
                    contract_start,
                    contract_end,
                    salary,
                    player_value,
                    team_id,
                    photo_url,
                    is_injured,
                    injury_details,
                    rating
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                full_name,
                date_of_birth,
                nationality,
                position,
                jersey_number,
                height,
                weight,
                contract_start,
                contract_end,
                salary,
                player_value,
                team_id,
                photo_url,
                is_injured,
                injury_details,
                rating
        "#,
    )
    .bind(&player.full_name)
    .bind(player.date_of_birth)
    .bind(&player.nationality)
    .bind(&player.position)
    .bind(player.jersey_number)
    .bind(player.height)
    .bind(player.weight)
    .bind(player.contract_start)
    .bind(player.contract_end)
    .bind(player.salary)
    .bind(player.player_value)
    .bind(player.team_id)
    .bind(&player.photo_url)
    .bind(player.is_injured)
    .bind(&player.injury_details)
    .bind(player.rating)
    .fetch_one(&mut **tx)
    .await?;

    Ok(player)
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Player>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let mut query = QueryBuilder::<Sqlite>::new(SELECT_PLAYERS);
    query.push(" WHERE id = ").push_bind(id);

    let player = query
        .build_query_as::<Player>()
        .fetch_optional(executor)
        .await?;

    Ok(player)
}

/// Players matching every supplied criterion, in insertion order.
pub async fn find_by_filter<'e, E>(
    executor: E,
    filter: &PlayerFilter,
) -> Result<Vec<Player>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let mut query = QueryBuilder::<Sqlite>::new(SELECT_PLAYERS);

    let mut separator = " WHERE ";
    if let Some(team_id) = filter.team_id {
        query.push(separator).push("team_id = ").push_bind(team_id);
        separator = " AND ";
    }
    if let Some(position) = &filter.position {
        query.push(separator).push("position = ").push_bind(position.clone());
        separator = " AND ";
    }
    if let Some(injured) = filter.injured {
        query.push(separator).push("is_injured = ").push_bind(injured);
    }
    query.push(" ORDER BY id");

    let players = query.build_query_as::<Player>().fetch_all(executor).await?;

    Ok(players)
}

pub async fn find_by_team<'e, E>(executor: E, team_id: i64) -> Result<Vec<Player>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    find_by_filter(
        executor,
        &PlayerFilter {
            team_id: Some(team_id),
            ..PlayerFilter::default()
        },
    )
    .await
}

pub async fn find_by_name_and_team<'e, E>(
    executor: E,
    full_name: &str,
    team_id: i64,
) -> Result<Option<Player>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let mut query = QueryBuilder::<Sqlite>::new(SELECT_PLAYERS);
    query
        .push(" WHERE full_name = ")
        .push_bind(full_name.to_string())
        .push(" AND team_id = ")
        .push_bind(team_id)
        .push(" ORDER BY id LIMIT 1");

    let player = query
        .build_query_as::<Player>()
        .fetch_optional(executor)
        .await?;

    Ok(player)
}

pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM players")
        .fetch_one(executor)
        .await
}

/// Writes every column of `player`; callers merge partial input beforehand.
pub async fn update_player(
    tx: &mut Transaction<'_, Sqlite>,
    player: &Player,
) -> Result<Option<Player>, sqlx::Error> {
    let player = sqlx::query_as::<_, Player>(
        r#"
            UPDATE
                players
            SET
                full_name = ?,
                date_of_birth = ?,
                nationality = ?,
                position = ?,
                jersey_number = ?,
                height = ?,
                weight = ?,
                contract_start = ?,
                contract_end = ?,
                salary = ?,
                player_value = ?,
                team_id = ?,
                photo_url = ?,
                is_injured = ?,
                injury_details = ?,
                rating = ?
            WHERE
                id = ?
            RETURNING
                id,
                full_name,
                date_of_birth,
                nationality,
                position,
                jersey_number,
                height,
                weight,
                contract_start,
                contract_end,
                salary,
                player_value,
                team_id,
                photo_url,
                is_injured,
                injury_details,
                rating
        "#,
    )
    .bind(&player.full_name)
    .bind(player.date_of_birth)
    .bind(&player.nationality)
    .bind(&player.position)
    .bind(player.jersey_number)
    .bind(player.height)
    .bind(player.weight)
    .bind(player.contract_start)
    .bind(player.contract_end)
    .bind(player.salary)
    .bind(player.player_value)
    .bind(player.team_id)
    .bind(&player.photo_url)
    .bind(player.is_injured)
    .bind(&player.injury_details)
    .bind(player.rating)
    .bind(player.id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(player)
}

pub async fn delete_player(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM players WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    Ok(if result.rows_affected() > 0 {
        Some(())
    } else {
        None
    })
}

/// Removes every player of a team; returns how many were removed.
pub async fn delete_by_team(
    tx: &mut Transaction<'_, Sqlite>,
    team_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM players WHERE team_id = ?")
        .bind(team_id)
        .execute(&mut **tx)
        .await?;

    Ok(result.rows_affected())
}
