use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::utils::json::null_as_default;
use crate::utils::validation::{require_non_blank, rule_error, OrderedValidate};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewDepartment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

const MIN_NAME_LEN: usize = 2;

impl OrderedValidate for NewDepartment {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.name, "department_name_required", "Department name is required")?;
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(rule_error(
                "department_name_length",
                "Department name must be at least 2 characters",
            ));
        }
        Ok(())
    }
}
