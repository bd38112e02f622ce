use sqlx::PgPool;
use tracing::debug;

use crate::models::commentary::{Commentary, NewCommentary};

#[derive(Debug, Clone)]
pub struct CommentaryQueries {
    pool: PgPool,
}

impl CommentaryQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_commentary(
        &self,
        new_commentary: &NewCommentary,
    ) -> Result<Commentary, sqlx::Error> {
        debug!(
            "Inserting commentary for match {} at minute {}",
            new_commentary.match_id, new_commentary.minute
        );

        sqlx::query_as::<_, Commentary>(
            r#"
            INSERT INTO commentary (
                match_id, minute, period, event_type,
                actor, team, message, metadata, tags
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, match_id, minute, period, event_type, actor, team, message,
                      metadata, tags, created_at
            "#,
        )
        .bind(new_commentary.match_id)
        .bind(new_commentary.minute)
        .bind(&new_commentary.period)
        .bind(&new_commentary.event_type)
        .bind(&new_commentary.actor)
        .bind(&new_commentary.team)
        .bind(&new_commentary.message)
        .bind(&new_commentary.metadata)
        .bind(&new_commentary.tags)
        .fetch_one(&self.pool)
        .await
    }

    /// All commentary for a match in the order it was recorded.
    pub async fn list_for_match(&self, match_id: i64) -> Result<Vec<Commentary>, sqlx::Error> {
        sqlx::query_as::<_, Commentary>(
            r#"
            SELECT id, match_id, minute, period, event_type, actor, team, message,
                   metadata, tags, created_at
            FROM commentary
            WHERE match_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn delete_commentary(&self, commentary_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM commentary WHERE id = $1")
            .bind(commentary_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remove every commentary row for a match. Run before deleting the
    /// match itself, since the foreign key does not cascade.
    pub async fn delete_for_match(&self, match_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM commentary WHERE match_id = $1")
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
