// src/models/staff.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// A senha nunca sai do banco: o SELECT nem traz a coluna.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: Uuid,

    #[schema(example = "Aziz")]
    pub first_name: String,

    #[schema(example = "Karimov")]
    pub last_name: Option<String>,

    pub phone: Option<String>,

    #[schema(example = "aziz.k")]
    pub login: String,

    #[schema(example = "cashier")]
    pub staff_type: String,

    pub magazin_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,

    pub last_name: Option<String>,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "login is required"))]
    pub login: String,

    #[validate(length(min = 6, message = "password must have at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "staffType is required"))]
    pub staff_type: String,

    pub magazin_id: Uuid,
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaff {
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "login is required"))]
    pub login: String,
    #[validate(length(min = 6, message = "password must have at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "staffType is required"))]
    pub staff_type: String,
    pub magazin_id: Uuid,
}

// Debug manual: o request é logado na entrada e a senha não pode aparecer
impl fmt::Debug for CreateStaff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateStaff")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("login", &self.login)
            .field("password", &"***")
            .field("staff_type", &self.staff_type)
            .field("magazin_id", &self.magazin_id)
            .finish()
    }
}

impl fmt::Debug for UpdateStaff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateStaff")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("login", &self.login)
            .field("password", &"***")
            .field("staff_type", &self.staff_type)
            .field("magazin_id", &self.magazin_id)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetListStaffResponse {
    pub count: i64,
    pub staffs: Vec<Staff>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let req = CreateStaff {
            first_name: "Aziz".into(),
            last_name: None,
            phone: None,
            login: "aziz".into(),
            password: "hunter22".into(),
            staff_type: "cashier".into(),
            magazin_id: Uuid::nil(),
        };
        let printed = format!("{req:?}");
        assert!(!printed.contains("hunter22"));
        assert!(printed.contains("***"));
    }
}
