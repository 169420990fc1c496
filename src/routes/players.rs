use actix_web::web;

use crate::handlers::players;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/players")
            .route("", web::get().to(players::get_players))
            .route("", web::post().to(players::create_player))
            .route("/{id}", web::get().to(players::get_player))
            .route("/{id}", web::put().to(players::update_player))
            .route("/{id}", web::delete().to(players::delete_player)),
    );
}
