use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use soccer_api::database::{init_database, report_contents};
use soccer_api::middleware::RequestIdMiddleware;
use soccer_api::{AppState, Config, routes};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Soccer Club Manager API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

fn cors(config: &Config) -> Cors {
    let cors = if config.allows_any_origin() {
        Cors::default().allow_any_origin()
    } else {
        Cors::default().allowed_origin(&config.cors_origin)
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            "Content-Type",
            "Accept",
            "X-Requested-With",
            "X-Correlation-ID",
        ])
        .expose_headers(vec!["X-Correlation-ID"])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Loads .env first so RUST_LOG can come from it.
    let config = Config::from_env()?;

    let default_filter = if config.is_development() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Starting Soccer Club Manager API server...");
    log::info!(
        "Configuration loaded (environment: {})",
        config.environment
    );
    if config.is_production() && config.allows_any_origin() {
        log::warn!("CORS accepts any origin in production; set CORS_ORIGIN to restrict it");
    }

    let pool = init_database(&config.database_url, config.max_db_connections).await?;
    log::info!("Database initialized");
    report_contents(&pool).await?;

    let server_address = config.server_address();
    let app_state = web::Data::new(AppState::new(pool, config.clone()));

    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(cors(&config))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await?;

    Ok(())
}
