use actix_web::web;

use crate::errors::AppError;

pub mod department;
pub mod employee;

/// Bodies are decoded as JSON whatever the declared content type.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(|err, _req| AppError::InvalidJson(format!("Invalid JSON: {}", err)).into())
}

/// An id that cannot be parsed names no row.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("Unparsable employee id: {}", err);
        AppError::not_found("Employee").into()
    })
}

/// Route table. Services are expected in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::resource("/departments")
                .route(web::post().to(department::create_department))
                .route(web::get().to(department::get_departments)),
        )
        .service(
            web::resource("/employees")
                .route(web::post().to(employee::create_employee))
                .route(web::get().to(employee::get_employees)),
        )
        .service(
            web::resource("/employees/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        );
}
