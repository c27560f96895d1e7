use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::department::Department;

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<Department, AppError>;
    async fn list(&self) -> Result<Vec<Department>, AppError>;
}

pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn create(&self, name: &str) -> Result<Department, AppError> {
        let department = sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(department)
    }

    async fn list(&self) -> Result<Vec<Department>, AppError> {
        let departments = sqlx::query_as::<_, Department>("SELECT id, name FROM departments")
            .fetch_all(&self.pool)
            .await?;

        Ok(departments)
    }
}
