use std::sync::Arc;

use log::info;

use crate::db::DepartmentRepository;
use crate::errors::AppError;
use crate::models::department::{Department, NewDepartment};
use crate::utils::validation::validate_payload;

pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new_department: &NewDepartment) -> Result<Department, AppError> {
        validate_payload(new_department)?;

        let department = self.repo.create(&new_department.name).await?;
        info!("Created department {}", department.id);
        Ok(department)
    }

    pub async fn list(&self) -> Result<Vec<Department>, AppError> {
        self.repo.list().await
    }
}
