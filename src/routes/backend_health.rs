use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Liveness probe. No database round-trip: a response means the server
/// loop is up, nothing more.
#[get("/backend_health")]
pub async fn backend_health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "UP"
    }))
}
