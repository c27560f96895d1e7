use std::sync::Arc;

use log::{debug, info};

use crate::db::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};
use crate::utils::validation::validate_payload;

pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new_employee: &NewEmployee) -> Result<Employee, AppError> {
        validate_payload(new_employee)?;

        let employee = self.repo.create(new_employee).await?;
        info!("Created employee {}", employee.id);
        Ok(employee)
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee"))
    }

    /// Overwrites every mutable field. An unknown id is not an error.
    pub async fn update(&self, id: i64, employee: &NewEmployee) -> Result<(), AppError> {
        validate_payload(employee)?;

        let affected = self.repo.update(id, employee).await?;
        debug!("Updated employee {} ({} rows)", id, affected);
        Ok(())
    }

    /// An unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let affected = self.repo.delete(id).await?;
        debug!("Deleted employee {} ({} rows)", id, affected);
        Ok(())
    }
}
