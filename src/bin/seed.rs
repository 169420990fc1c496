use anyhow::Result;

use soccer_api::Config;
use soccer_api::database::{init_database, report_contents, seed::seed_sample_data};

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    env_logger::init();

    let pool = init_database(&config.database_url, config.max_db_connections).await?;

    let summary = seed_sample_data(&pool).await?;
    println!(
        "Teams: {} created, {} already present",
        summary.teams_created, summary.teams_existing
    );
    println!(
        "Players: {} created, {} already present",
        summary.players_created, summary.players_existing
    );

    report_contents(&pool).await?;
    Ok(())
}
