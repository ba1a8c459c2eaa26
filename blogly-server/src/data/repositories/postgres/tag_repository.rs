use async_trait::async_trait;
use sqlx::PgPool;

use super::map_db_error;
use crate::data::tag_repository::{NewTag, TagPatch, TagRepository};
use crate::domain::error::DomainError;
use crate::domain::tag::Tag;

#[derive(Debug, Clone)]
pub(crate) struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT id, name
            FROM tags
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_tag).collect()
    }

    async fn get_tag(&self, id: i64) -> Result<Option<Tag>, DomainError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT id, name
            FROM tags
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(map_row_to_tag).transpose()
    }

    async fn create_tag(&self, input: NewTag) -> Result<Tag, DomainError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(input.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_row_to_tag(row)
    }

    async fn update_tag(&self, id: i64, patch: TagPatch) -> Result<Option<Tag>, DomainError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            UPDATE tags
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(map_row_to_tag).transpose()
    }

    async fn delete_tag(&self, id: i64) -> Result<bool, DomainError> {
        // Association rows go first; the posts themselves are untouched.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM post_tags WHERE tag_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
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
}

fn map_row_to_tag(row: TagRow) -> Result<Tag, DomainError> {
    Tag::new(row.id, row.name).map_err(|err| DomainError::Unexpected(err.to_string()))
}
