use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};

use super::map_db_error;
use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::tag::Tag;

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    user_id: i64,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_recent(&self, limit: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, user_id, created_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, user_id, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, user_id, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(map_row_to_post).transpose()
    }

    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, user_id, created_at)
            VALUES ($1, $2, $3, COALESCE($4, NOW()))
            RETURNING id, title, content, user_id, created_at
            "#,
        )
        .bind(input.title)
        .bind(input.content)
        .bind(input.user_id)
        .bind(input.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        insert_resolved_tags(&mut tx, row.id, &input.tag_ids).await?;

        tx.commit().await.map_err(map_db_error)?;
        map_row_to_post(row)
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = $2,
                content = $3
            WHERE id = $1
            RETURNING id, title, content, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        };

        // Replace the association set: drop rows outside the new id list,
        // then add the missing resolved ones. Unchanged pairs stay put.
        sqlx::query(
            r#"
            DELETE FROM post_tags
            WHERE post_id = $1 AND NOT (tag_id = ANY($2))
            "#,
        )
        .bind(id)
        .bind(&patch.tag_ids)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        insert_resolved_tags(&mut tx, id, &patch.tag_ids).await?;

        tx.commit().await.map_err(map_db_error)?;
        map_row_to_post(row).map(Some)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }

    async fn tags_for_post(&self, post_id: i64) -> Result<Vec<Tag>, DomainError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN post_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter()
            .map(|row| {
                Tag::new(row.id, row.name)
                    .map_err(|err| DomainError::Unexpected(err.to_string()))
            })
            .collect()
    }

    async fn posts_for_tag(&self, tag_id: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT p.id, p.title, p.content, p.user_id, p.created_at
            FROM posts p
            JOIN post_tags pt ON pt.post_id = p.id
            WHERE pt.tag_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            "#,
        )
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }
}

/// Inserts join rows for every candidate id that resolves to a tag.
/// Unknown ids are filtered out by the SELECT; existing pairs are kept
/// as-is via ON CONFLICT DO NOTHING.
async fn insert_resolved_tags(
    tx: &mut Transaction<'_, Postgres>,
    post_id: i64,
    tag_ids: &[i64],
) -> Result<(), DomainError> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO post_tags (post_id, tag_id)
        SELECT $1, t.id
        FROM tags t
        WHERE t.id = ANY($2)
        ON CONFLICT (post_id, tag_id) DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(tag_ids)
    .execute(&mut **tx)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

fn map_row_to_post(row: PostRow) -> Result<Post, DomainError> {
    Post::new(row.id, row.title, row.content, row.user_id, row.created_at)
        .map_err(|err| DomainError::Unexpected(err.to_string()))
}
