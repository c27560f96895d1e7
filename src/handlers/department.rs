use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::department::NewDepartment;
use crate::services::DepartmentService;

pub async fn create_department(
    service: web::Data<DepartmentService>,
    new_department: web::Json<NewDepartment>,
) -> Result<HttpResponse, AppError> {
    let department = service.create(&new_department).await?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn get_departments(
    service: web::Data<DepartmentService>,
) -> Result<HttpResponse, AppError> {
    let departments = service.list().await?;
    Ok(HttpResponse::Ok().json(departments))
}
