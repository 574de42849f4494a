// src/db/provider_repo.rs

use crate::{
    common::query::SqlValue,
    db::{
        repository::PgRepository,
        schema::{Column, ColumnKind, Schema},
    },
    models::provider::{CreateProvider, Provider, UpdateProvider},
};

pub struct ProviderSchema;

pub type ProviderRepository = PgRepository<ProviderSchema>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderColumn {
    Name,
    Phone,
    Status,
}

impl Column for ProviderColumn {
    const ALL: &'static [Self] = &[ProviderColumn::Name, ProviderColumn::Phone, ProviderColumn::Status];

    fn name(self) -> &'static str {
        match self {
            ProviderColumn::Name => "name",
            ProviderColumn::Phone => "phone",
            ProviderColumn::Status => "status",
        }
    }

    fn kind(self) -> ColumnKind {
        match self {
            ProviderColumn::Status => ColumnKind::Integer,
            _ => ColumnKind::Text,
        }
    }
}

impl Schema for ProviderSchema {
    const ENTITY: &'static str = "Provider";
    const TABLE: &'static str = "provider";

    const SELECT_COLUMNS: &'static str =
        "p.id, p.name, p.phone, p.status, p.created_at, p.updated_at";
    const FROM: &'static str = r#""provider" AS p"#;
    const ID_COLUMN: &'static str = "p.id";
    const SEARCH_COLUMN: &'static str = "p.name";
    const CREATED_AT_COLUMN: &'static str = "p.created_at";

    type Column = ProviderColumn;
    type Record = Provider;
    type Create = CreateProvider;
    type Update = UpdateProvider;

    fn insert_values(input: &CreateProvider) -> Vec<(&'static str, SqlValue)> {
        let mut values = vec![
            ("name", input.name.clone().into()),
            ("phone", input.phone.clone().into()),
        ];
        // Sem status: fica o DEFAULT da coluna
        if let Some(status) = input.status {
            values.push(("status", status.into()));
        }
        values
    }

    fn update_values(input: &UpdateProvider) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", input.name.clone().into()),
            ("phone", input.phone.clone().into()),
            ("status", input.status.into()),
        ]
    }
}
