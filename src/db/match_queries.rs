use sqlx::PgPool;
use tracing::debug;

use crate::models::matches::{Match, MatchStatus, NewMatch};

#[derive(Debug, Clone)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated match with its derived status and return the
    /// persisted row, including the assigned id and created_at.
    pub async fn insert_match(
        &self,
        new_match: &NewMatch,
        status: MatchStatus,
    ) -> Result<Match, sqlx::Error> {
        debug!(
            "Inserting match {} vs {} ({})",
            new_match.home_team, new_match.away_team, new_match.sport
        );

        sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (
                sport, home_team, away_team, status,
                start_time, end_time, home_score, away_score
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, sport, home_team, away_team, status, start_time, end_time,
                      home_score, away_score, created_at
            "#,
        )
        .bind(&new_match.sport)
        .bind(&new_match.home_team)
        .bind(&new_match.away_team)
        .bind(status)
        .bind(new_match.start_time)
        .bind(new_match.end_time)
        .bind(new_match.home_score)
        .bind(new_match.away_score)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_match(&self, match_id: i64) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT id, sport, home_team, away_team, status, start_time, end_time,
                   home_score, away_score, created_at
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Fetch up to `limit` matches, most recently created first.
    pub async fn list_matches(&self, limit: i64) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT id, sport, home_team, away_team, status, start_time, end_time,
                   home_score, away_score, created_at
            FROM matches
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Overwrite both scores and return the updated row, or None when the
    /// match does not exist.
    pub async fn update_score(
        &self,
        match_id: i64,
        home_score: i32,
        away_score: i32,
    ) -> Result<Option<Match>, sqlx::Error> {
        debug!("Updating score for match {}", match_id);

        sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET home_score = $2, away_score = $3
            WHERE id = $1
            RETURNING id, sport, home_team, away_team, status, start_time, end_time,
                      home_score, away_score, created_at
            "#,
        )
        .bind(match_id)
        .bind(home_score)
        .bind(away_score)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a match row. Returns the number of rows removed. Commentary
    /// referencing the match is not touched; the caller deletes it first.
    pub async fn delete_match(&self, match_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
