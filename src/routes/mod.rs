use actix_web::web;

pub mod backend_health;
pub mod matches;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(web::scope("/matches").configure(matches::init_matches_routes));
}
