// src/db/staff_repo.rs

use crate::{
    common::query::SqlValue,
    db::{
        repository::PgRepository,
        schema::{Column, ColumnKind, Schema},
    },
    models::staff::{CreateStaff, Staff, UpdateStaff},
};

pub struct StaffSchema;

pub type StaffRepository = PgRepository<StaffSchema>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffColumn {
    FirstName,
    LastName,
    Phone,
    Login,
    Password,
    StaffType,
    MagazinId,
}

impl Column for StaffColumn {
    const ALL: &'static [Self] = &[
        StaffColumn::FirstName,
        StaffColumn::LastName,
        StaffColumn::Phone,
        StaffColumn::Login,
        StaffColumn::Password,
        StaffColumn::StaffType,
        StaffColumn::MagazinId,
    ];

    fn name(self) -> &'static str {
        match self {
            StaffColumn::FirstName => "first_name",
            StaffColumn::LastName => "last_name",
            StaffColumn::Phone => "phone",
            StaffColumn::Login => "login",
            StaffColumn::Password => "password",
            StaffColumn::StaffType => "staff_type",
            StaffColumn::MagazinId => "magazin_id",
        }
    }

    fn kind(self) -> ColumnKind {
        match self {
            StaffColumn::Password => ColumnKind::Secret,
            StaffColumn::MagazinId => ColumnKind::Uuid,
            _ => ColumnKind::Text,
        }
    }
}

impl Schema for StaffSchema {
    const ENTITY: &'static str = "Staff";
    const TABLE: &'static str = "staff";

    // Sem a coluna password de propósito. O join é com a loja (pai do staff).
    const SELECT_COLUMNS: &'static str = "s.id, s.first_name, s.last_name, s.phone, s.login, \
         s.staff_type, m.id AS magazin_id, s.created_at, s.updated_at";
    const FROM: &'static str = r#""staff" AS s INNER JOIN "magazin" AS m ON m.id = s.magazin_id"#;
    const ID_COLUMN: &'static str = "s.id";
    const SEARCH_COLUMN: &'static str = "s.first_name";
    const CREATED_AT_COLUMN: &'static str = "s.created_at";

    type Column = StaffColumn;
    type Record = Staff;
    type Create = CreateStaff;
    type Update = UpdateStaff;

    fn insert_values(input: &CreateStaff) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("first_name", input.first_name.clone().into()),
            ("last_name", input.last_name.clone().into()),
            ("phone", input.phone.clone().into()),
            ("login", input.login.clone().into()),
            ("password", SqlValue::Secret(input.password.clone())),
            ("staff_type", input.staff_type.clone().into()),
            ("magazin_id", input.magazin_id.into()),
        ]
    }

    fn update_values(input: &UpdateStaff) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("first_name", input.first_name.clone().into()),
            ("last_name", input.last_name.clone().into()),
            ("phone", input.phone.clone().into()),
            ("login", input.login.clone().into()),
            ("password", SqlValue::Secret(input.password.clone())),
            ("staff_type", input.staff_type.clone().into()),
            ("magazin_id", input.magazin_id.into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn password_is_written_as_secret() {
        let values = StaffSchema::insert_values(&CreateStaff {
            first_name: "Aziz".into(),
            last_name: None,
            phone: None,
            login: "aziz".into(),
            password: "hunter22".into(),
            staff_type: "cashier".into(),
            magazin_id: Uuid::nil(),
        });

        assert!(values.contains(&("password", SqlValue::Secret("hunter22".into()))));
    }

    #[test]
    fn password_column_is_never_selected() {
        assert!(!StaffSchema::SELECT_COLUMNS.contains("password"));
    }
}
