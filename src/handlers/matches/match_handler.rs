use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::db::MatchQueries;
use crate::matches::status::match_status_at;
use crate::matches::validation::{MatchValidator, MAX_LIMIT};
use crate::models::matches::{CreateMatchRequest, ListMatchesQuery, UpdateScoreRequest};

/// Create a new match
#[tracing::instrument(name = "Create match", skip(pool, body))]
pub async fn create_match(
    pool: web::Data<PgPool>,
    body: web::Json<CreateMatchRequest>,
) -> HttpResponse {
    let validator = MatchValidator::new();
    let new_match = match validator.validate_create_match(&body) {
        Ok(new_match) => new_match,
        Err(issues) => {
            return HttpResponse::BadRequest().json(json!({
                "error": "Invalid match data",
                "details": issues
            }));
        }
    };

    let status = match_status_at(new_match.start_time, new_match.end_time, Utc::now());

    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.insert_match(&new_match, status).await {
        Ok(created) => {
            tracing::info!("Created match {} with status {}", created.id, status.as_str());
            HttpResponse::Created().json(json!({
                "message": "Match created",
                "data": created
            }))
        }
        Err(e) => {
            tracing::error!("Failed to create match: {}", e);
            storage_error("Failed to create match", &e)
        }
    }
}

/// List matches, most recently created first
#[tracing::instrument(name = "List matches", skip(pool))]
pub async fn list_matches(
    pool: web::Data<PgPool>,
    query: web::Query<ListMatchesQuery>,
) -> HttpResponse {
    let validator = MatchValidator::new();
    let limit = match validator.validate_list_limit(query.limit) {
        Ok(limit) => limit.min(MAX_LIMIT),
        Err(issues) => {
            return HttpResponse::BadRequest().json(json!({
                "error": "Invalid query parameters",
                "details": issues
            }));
        }
    };

    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.list_matches(limit).await {
        Ok(matches) => HttpResponse::Ok().json(json!({ "data": matches })),
        Err(e) => {
            tracing::error!("Failed to list matches: {}", e);
            storage_error("Failed to list matches", &e)
        }
    }
}

/// Get a single match by id. Ids are extracted as unsigned so a negative
/// path segment fails at the boundary with a 400.
#[tracing::instrument(name = "Get match", skip(pool), fields(match_id = %match_id))]
pub async fn get_match(pool: web::Data<PgPool>, match_id: web::Path<u64>) -> HttpResponse {
    let match_id = match_id.into_inner() as i64;

    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.get_match(match_id).await {
        Ok(Some(found)) => HttpResponse::Ok().json(json!({ "data": found })),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": "Match not found" })),
        Err(e) => {
            tracing::error!("Failed to fetch match {}: {}", match_id, e);
            storage_error("Failed to fetch match", &e)
        }
    }
}

/// Update the score of an existing match
#[tracing::instrument(name = "Update score", skip(pool, body), fields(match_id = %match_id))]
pub async fn update_score(
    pool: web::Data<PgPool>,
    match_id: web::Path<u64>,
    body: web::Json<UpdateScoreRequest>,
) -> HttpResponse {
    let match_id = match_id.into_inner() as i64;

    let validator = MatchValidator::new();
    let (home_score, away_score) = match validator.validate_update_score(&body) {
        Ok(scores) => scores,
        Err(issues) => {
            return HttpResponse::BadRequest().json(json!({
                "error": "Invalid score data",
                "details": issues
            }));
        }
    };

    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.update_score(match_id, home_score, away_score).await {
        Ok(Some(updated)) => {
            tracing::info!(
                "Updated score for match {} to {}:{}",
                match_id,
                home_score,
                away_score
            );
            HttpResponse::Ok().json(json!({
                "message": "Score updated",
                "data": updated
            }))
        }
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": "Match not found" })),
        Err(e) => {
            tracing::error!("Failed to update score for match {}: {}", match_id, e);
            storage_error("Failed to update score", &e)
        }
    }
}

/// Delete a match. Commentary rows are not cascaded; callers remove them
/// first or the foreign key rejects the delete.
#[tracing::instrument(name = "Delete match", skip(pool), fields(match_id = %match_id))]
pub async fn delete_match(pool: web::Data<PgPool>, match_id: web::Path<u64>) -> HttpResponse {
    let match_id = match_id.into_inner() as i64;

    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.delete_match(match_id).await {
        Ok(0) => HttpResponse::NotFound().json(json!({ "error": "Match not found" })),
        Ok(_) => {
            tracing::info!("Deleted match {}", match_id);
            HttpResponse::Ok().json(json!({ "message": "Match deleted" }))
        }
        Err(e) => {
            tracing::error!("Failed to delete match {}: {}", match_id, e);
            storage_error("Failed to delete match", &e)
        }
    }
}

/// Map a persistence failure to a 500 response. The body stays generic,
/// except for the undefined-table case, which names the setup script the
/// operator needs to run.
fn storage_error(error: &str, e: &sqlx::Error) -> HttpResponse {
    let message = match e {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("42P01") => {
            "The matches schema is missing. Apply scripts/schema.sql to the configured database."
        }
        _ => "A database error occurred.",
    };

    HttpResponse::InternalServerError().json(json!({
        "error": error,
        "message": message
    }))
}
