//! Parameterized SQL against the `category` table.
//!
//! Every call runs on a caller-supplied connection (normally the open transaction),
//! so the repository itself holds no state.

use crate::model::{Category, NewCategory};
use sqlx::PgConnection;

const INSERT: &str = "INSERT INTO category (name) VALUES ($1) RETURNING id, name";
const UPDATE: &str = "UPDATE category SET name = $1 WHERE id = $2";
const DELETE: &str = "DELETE FROM category WHERE id = $1";
const SELECT_BY_ID: &str = "SELECT id, name FROM category WHERE id = $1";
const SELECT_ALL: &str = "SELECT id, name FROM category ORDER BY id";

#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    /// Insert one row; returns it with the generated id.
    pub async fn save(&self, conn: &mut PgConnection, category: &NewCategory) -> Result<Category, sqlx::Error> {
        tracing::debug!(sql = INSERT, name = %category.name, "query (tx)");
        sqlx::query_as::<_, Category>(INSERT)
            .bind(&category.name)
            .fetch_one(conn)
            .await
    }

    /// Replace the name of the row with `category.id`. A missing id is not an error here.
    pub async fn update(&self, conn: &mut PgConnection, category: &Category) -> Result<Category, sqlx::Error> {
        tracing::debug!(sql = UPDATE, id = category.id, name = %category.name, "query (tx)");
        sqlx::query(UPDATE)
            .bind(&category.name)
            .bind(category.id)
            .execute(conn)
            .await?;
        Ok(category.clone())
    }

    pub async fn delete(&self, conn: &mut PgConnection, category: &Category) -> Result<(), sqlx::Error> {
        tracing::debug!(sql = DELETE, id = category.id, "query (tx)");
        sqlx::query(DELETE).bind(category.id).execute(conn).await?;
        Ok(())
    }

    /// Fetch one row by primary key. Absence is `None`, not an error.
    pub async fn find_by_id(&self, conn: &mut PgConnection, id: i64) -> Result<Option<Category>, sqlx::Error> {
        tracing::debug!(sql = SELECT_BY_ID, id, "query (tx)");
        sqlx::query_as::<_, Category>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn find_all(&self, conn: &mut PgConnection) -> Result<Vec<Category>, sqlx::Error> {
        tracing::debug!(sql = SELECT_ALL, "query (tx)");
        sqlx::query_as::<_, Category>(SELECT_ALL).fetch_all(conn).await
    }
}
