use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::utils::json::null_as_default;
use crate::utils::validation::{require_non_blank, rule_error, OrderedValidate};

const EMAIL_DOMAIN: &str = "@gmail.com";

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: f64,
    pub department_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied employee fields, used for both create and full update.
/// `id` and `created_at` in the body are ignored. Missing or null fields
/// decode to zero values and are reported by validation.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NewEmployee {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub department_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email.contains('@') {
        return Err(rule_error("email_missing_at", "Email must contain @"));
    }
    let prefix = email
        .strip_suffix(EMAIL_DOMAIN)
        .ok_or_else(|| rule_error("email_domain", "Email must end with @gmail.com"))?;
    if prefix.is_empty() {
        return Err(rule_error(
            "email_prefix_required",
            "Email must have a prefix before @gmail.com",
        ));
    }
    Ok(())
}

impl OrderedValidate for NewEmployee {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.name, "name_required", "Employee name is required")?;
        validate_email(&self.email)?;
        require_non_blank(&self.phone, "phone_required", "Phone number is required")?;
        if self.salary < 0.0 {
            return Err(rule_error("salary_negative", "Salary must not be negative"));
        }
        if self.department_id < 0 {
            return Err(rule_error(
                "department_id_invalid",
                "A valid department_id is required",
            ));
        }
        require_non_blank(&self.status, "status_required", "Status is required")?;
        Ok(())
    }
}
