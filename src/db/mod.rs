use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

pub mod department;
pub mod employee;
#[cfg(test)]
pub mod memory;

pub use department::{DepartmentRepository, PgDepartmentRepository};
pub use employee::{EmployeeRepository, PgEmployeeRepository};

/// Opens the pool and fails fast if the store is unreachable.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    info!("Connected to the database");

    Ok(pool)
}
