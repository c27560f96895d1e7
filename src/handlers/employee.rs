use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::NewEmployee;
use crate::services::EmployeeService;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let employee = service.create(&new_employee).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    updates: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    service.update(id.into_inner(), &updates).await?;
    Ok(HttpResponse::Ok()
        .content_type(TEXT_PLAIN)
        .body("Employee updated successfully."))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type(TEXT_PLAIN)
        .body("Employee deleted successfully"))
}
