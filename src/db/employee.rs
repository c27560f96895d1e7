use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};

const EMPLOYEE_COLUMNS: &str =
    "id, name, email, phone, salary, department_id, status, created_at";

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, AppError>;
    async fn list(&self) -> Result<Vec<Employee>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;
    /// Returns the number of rows affected.
    async fn update(&self, id: i64, employee: &NewEmployee) -> Result<u64, AppError>;
    /// Returns the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, AppError> {
        let sql = format!(
            "INSERT INTO employees (name, email, phone, salary, department_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            EMPLOYEE_COLUMNS
        );

        let created = sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.phone)
            .bind(employee.salary)
            .bind(employee.department_id)
            .bind(&employee.status)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees", EMPLOYEE_COLUMNS);
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn update(&self, id: i64, employee: &NewEmployee) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE employees SET name = $1, email = $2, phone = $3, salary = $4, \
             department_id = $5, status = $6 WHERE id = $7",
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.salary)
        .bind(employee.department_id)
        .bind(&employee.status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
