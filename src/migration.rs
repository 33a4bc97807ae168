//! Schema bootstrap: create the database and the `category` table if they are missing.

use crate::error::{AppError, ConfigError};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const CREATE_CATEGORY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS category (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(200) NOT NULL
    )
"#;

/// Create the `category` table. Idempotent.
pub async fn ensure_category_table(pool: &PgPool) -> Result<(), AppError> {
    tracing::debug!("ensuring category table");
    sqlx::query(CREATE_CATEGORY_TABLE).execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` admin database and create the target database when absent.
/// A URL naming `postgres` itself (or no database) is left alone.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|_| invalid_url(database_url))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url
        .find("://")
        .ok_or_else(|| invalid_url(url))?
        + 3;
    let path_start = match url[scheme_end..].find('/') {
        Some(i) => scheme_end + i + 1,
        None => return Ok((url.to_string(), String::new())),
    };
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, query)) => (name, Some(query)),
        None => (path_and_query, None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(query) = query {
        admin_url.push('?');
        admin_url.push_str(query);
    }
    Ok((admin_url, db_name.trim().to_string()))
}

fn invalid_url(url: &str) -> AppError {
    AppError::Config(ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    })
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_admin_url_and_database_name() {
        let (admin, db) = parse_db_name_from_url("postgres://u:p@localhost:5432/category_api").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(db, "category_api");
    }

    #[test]
    fn keeps_query_string_on_admin_url() {
        let (admin, db) = parse_db_name_from_url("postgres://localhost/shop?sslmode=require").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=require");
        assert_eq!(db, "shop");
    }

    #[test]
    fn url_without_database_has_empty_name() {
        let (_, db) = parse_db_name_from_url("postgres://localhost").unwrap();
        assert_eq!(db, "");
    }

    #[test]
    fn rejects_url_without_scheme() {
        assert!(parse_db_name_from_url("localhost/db").is_err());
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("my\"db"), "\"my\"\"db\"");
    }
}
