use actix_web::web;

use crate::handlers::matches::match_handler::{
    create_match, delete_match, get_match, list_matches, update_score,
};

pub fn init_matches_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_matches))
            .route(web::post().to(create_match)),
    );

    cfg.service(
        web::resource("/{match_id}")
            .route(web::get().to(get_match))
            .route(web::delete().to(delete_match)),
    );

    cfg.service(web::resource("/{match_id}/score").route(web::patch().to(update_score)));
}
