mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod utils;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use crate::config::Config;
use crate::db::{PgDepartmentRepository, PgEmployeeRepository};
use crate::services::{DepartmentService, EmployeeService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("Database not reachable: {}", err);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, err)
    })?;

    let departments = web::Data::new(DepartmentService::new(Arc::new(
        PgDepartmentRepository::new(pool.clone()),
    )));
    let employees = web::Data::new(EmployeeService::new(Arc::new(PgEmployeeRepository::new(
        pool,
    ))));

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(departments.clone())
            .app_data(employees.clone())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
