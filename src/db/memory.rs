use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::db::{DepartmentRepository, EmployeeRepository};
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::{Employee, NewEmployee};

/// In-process stand-in for the Postgres repositories.
#[derive(Default)]
pub struct MemoryStore {
    departments: Mutex<Vec<Department>>,
    employees: Mutex<Vec<Employee>>,
    next_department_id: Mutex<i64>,
    next_employee_id: Mutex<i64>,
}

impl MemoryStore {
    pub fn department_count(&self) -> usize {
        self.departments.lock().unwrap().len()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.lock().unwrap().len()
    }
}

fn next_id(counter: &Mutex<i64>) -> i64 {
    let mut counter = counter.lock().unwrap();
    *counter += 1;
    *counter
}

#[async_trait]
impl DepartmentRepository for MemoryStore {
    async fn create(&self, name: &str) -> Result<Department, AppError> {
        let department = Department {
            id: next_id(&self.next_department_id),
            name: name.to_string(),
        };
        self.departments.lock().unwrap().push(department.clone());
        Ok(department)
    }

    async fn list(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.departments.lock().unwrap().clone())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, AppError> {
        let created = Employee {
            id: next_id(&self.next_employee_id),
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            salary: employee.salary,
            department_id: employee.department_id,
            status: employee.status.clone(),
            created_at: Utc::now(),
        };
        self.employees.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn update(&self, id: i64, employee: &NewEmployee) -> Result<u64, AppError> {
        let mut employees = self.employees.lock().unwrap();
        let mut affected = 0;
        for existing in employees.iter_mut().filter(|e| e.id == id) {
            existing.name = employee.name.clone();
            existing.email = employee.email.clone();
            existing.phone = employee.phone.clone();
            existing.salary = employee.salary;
            existing.department_id = employee.department_id;
            existing.status = employee.status.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok((before - employees.len()) as u64)
    }
}

/// Repository whose every call fails like an unreachable store.
pub struct BrokenStore;

fn unreachable_store() -> AppError {
    AppError::from(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl DepartmentRepository for BrokenStore {
    async fn create(&self, _name: &str) -> Result<Department, AppError> {
        Err(unreachable_store())
    }

    async fn list(&self) -> Result<Vec<Department>, AppError> {
        Err(unreachable_store())
    }
}

#[async_trait]
impl EmployeeRepository for BrokenStore {
    async fn create(&self, _employee: &NewEmployee) -> Result<Employee, AppError> {
        Err(unreachable_store())
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Err(unreachable_store())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Employee>, AppError> {
        Err(unreachable_store())
    }

    async fn update(&self, _id: i64, _employee: &NewEmployee) -> Result<u64, AppError> {
        Err(unreachable_store())
    }

    async fn delete(&self, _id: i64) -> Result<u64, AppError> {
        Err(unreachable_store())
    }
}
