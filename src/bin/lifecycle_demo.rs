//! Sequential walk over the matches and commentary tables: create a match,
//! read it back, update its score, attach commentary, then tear everything
//! down in dependency order. Intended as a smoke check against a configured
//! database, not as part of the serving path.

use chrono::{Duration, Utc};
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use matchday_backend::config::settings::get_config;
use matchday_backend::db::{CommentaryQueries, MatchQueries};
use matchday_backend::matches::status::match_status_at;
use matchday_backend::models::commentary::NewCommentary;
use matchday_backend::models::matches::NewMatch;
use matchday_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "lifecycle-demo".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let connection_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(config.database.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres");

    let outcome = run_lifecycle(&connection_pool).await;

    // The pool is closed on every path before the process exits
    connection_pool.close().await;

    if let Err(e) = outcome {
        tracing::error!("Lifecycle demo failed: {}", e);
        std::process::exit(1);
    }
}

async fn run_lifecycle(pool: &PgPool) -> Result<(), sqlx::Error> {
    let match_queries = MatchQueries::new(pool.clone());
    let commentary_queries = CommentaryQueries::new(pool.clone());

    let now = Utc::now();
    let new_match = NewMatch {
        sport: "Football".to_string(),
        home_team: "River Plate".to_string(),
        away_team: "Boca Juniors".to_string(),
        start_time: now - Duration::hours(1),
        end_time: now + Duration::hours(1),
        home_score: 0,
        away_score: 0,
    };
    let status = match_status_at(new_match.start_time, new_match.end_time, now);

    let created = match_queries.insert_match(&new_match, status).await?;
    tracing::info!(
        "Created match {}: {} vs {} ({})",
        created.id,
        created.home_team,
        created.away_team,
        created.status.as_str()
    );

    let fetched = match_queries.get_match(created.id).await?;
    tracing::info!("Fetched match by id: {:?}", fetched.map(|m| m.id));

    let updated = match_queries.update_score(created.id, 2, 1).await?;
    tracing::info!(
        "Updated score: {:?}",
        updated.map(|m| (m.home_score, m.away_score))
    );

    let opening_goal = NewCommentary {
        match_id: created.id,
        minute: 23,
        period: "first-half".to_string(),
        event_type: "goal".to_string(),
        actor: "M. Borja".to_string(),
        team: "River Plate".to_string(),
        message: "Low drive into the bottom corner".to_string(),
        metadata: json!({ "assist": "N. De La Cruz", "distance_m": 18 }),
        tags: vec!["goal".to_string(), "highlight".to_string()],
    };
    let first = commentary_queries.insert_commentary(&opening_goal).await?;
    tracing::info!("Recorded commentary {} at minute {}", first.id, first.minute);

    let yellow_card = NewCommentary {
        match_id: created.id,
        minute: 57,
        period: "second-half".to_string(),
        event_type: "card".to_string(),
        actor: "C. Medina".to_string(),
        team: "Boca Juniors".to_string(),
        message: "Booked for a late challenge".to_string(),
        metadata: json!({ "card": "yellow" }),
        tags: vec!["discipline".to_string()],
    };
    let second = commentary_queries.insert_commentary(&yellow_card).await?;
    tracing::info!("Recorded commentary {} at minute {}", second.id, second.minute);

    let timeline = commentary_queries.list_for_match(created.id).await?;
    tracing::info!("Match {} has {} commentary events", created.id, timeline.len());

    // No cascade on the foreign key: commentary goes first, then the match
    let removed_commentary = commentary_queries.delete_for_match(created.id).await?;
    tracing::info!("Deleted {} commentary events", removed_commentary);

    let removed_matches = match_queries.delete_match(created.id).await?;
    tracing::info!("Deleted {} match row(s)", removed_matches);

    Ok(())
}
