//! Category use cases. Each call is one database transaction.

use crate::error::AppError;
use crate::model::{Category, CategoryCreateRequest, CategoryResponse, CategoryUpdateRequest, NewCategory};
use crate::repository::CategoryRepository;
use crate::service::RequestValidator;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create(&self, request: CategoryCreateRequest) -> Result<CategoryResponse, AppError>;
    async fn update(&self, id: i64, request: CategoryUpdateRequest) -> Result<CategoryResponse, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn find_by_id(&self, id: i64) -> Result<CategoryResponse, AppError>;
    async fn find_all(&self) -> Result<Vec<CategoryResponse>, AppError>;
}

fn not_found(id: i64) -> AppError {
    tracing::debug!(id, "category not found");
    AppError::NotFound("category not found".into())
}

/// `CategoryService` over PostgreSQL.
#[derive(Clone)]
pub struct PgCategoryService {
    pool: PgPool,
    repository: CategoryRepository,
}

impl PgCategoryService {
    pub fn new(pool: PgPool, repository: CategoryRepository) -> Self {
        PgCategoryService { pool, repository }
    }

    async fn find_existing(
        &self,
        tx: &mut Transaction<'static, Postgres>,
        id: i64,
    ) -> Result<Category, AppError> {
        self.repository
            .find_by_id(tx, id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

/// Commit when the unit of work succeeded, otherwise roll back and hand the error on.
/// A transaction dropped during a panic is rolled back by sqlx when the connection returns to the pool.
async fn finish<T>(tx: Transaction<'static, Postgres>, result: Result<T, AppError>) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

#[async_trait]
impl CategoryService for PgCategoryService {
    async fn create(&self, request: CategoryCreateRequest) -> Result<CategoryResponse, AppError> {
        RequestValidator::validate(&request)?;
        let mut tx = self.pool.begin().await?;
        let result = self
            .repository
            .save(&mut tx, &NewCategory { name: request.name })
            .await
            .map_err(AppError::from);
        let category = finish(tx, result).await?;
        tracing::debug!(id = category.id, "category created");
        Ok(category.into())
    }

    async fn update(&self, id: i64, request: CategoryUpdateRequest) -> Result<CategoryResponse, AppError> {
        RequestValidator::validate(&request)?;
        let mut tx = self.pool.begin().await?;
        let result = async {
            let mut category = self.find_existing(&mut tx, id).await?;
            category.name = request.name;
            Ok::<_, AppError>(self.repository.update(&mut tx, &category).await?)
        }
        .await;
        let category = finish(tx, result).await?;
        tracing::debug!(id, "category updated");
        Ok(category.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let result = async {
            let category = self.find_existing(&mut tx, id).await?;
            Ok::<_, AppError>(self.repository.delete(&mut tx, &category).await?)
        }
        .await;
        finish(tx, result).await?;
        tracing::debug!(id, "category deleted");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<CategoryResponse, AppError> {
        let mut tx = self.pool.begin().await?;
        let result = self.find_existing(&mut tx, id).await;
        Ok(finish(tx, result).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<CategoryResponse>, AppError> {
        let mut tx = self.pool.begin().await?;
        let result = self.repository.find_all(&mut tx).await.map_err(AppError::from);
        let categories = finish(tx, result).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }
}
