use actix_web::web;

use crate::handlers::reports;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/team-composition", web::get().to(reports::team_composition))
            .route(
                "/player-performance",
                web::get().to(reports::player_performance),
            )
            .route("/value-report", web::get().to(reports::value_report))
            .route("/injury-report", web::get().to(reports::injury_report)),
    );
}
