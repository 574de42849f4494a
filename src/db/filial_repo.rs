// src/db/filial_repo.rs

use crate::{
    common::{helper::combine_first_letters, query::SqlValue},
    db::{
        repository::PgRepository,
        schema::{Column, ColumnKind, Schema},
    },
    models::filial::{CreateFilial, Filial, UpdateFilial},
};

pub struct FilialSchema;

pub type FilialRepository = PgRepository<FilialSchema>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilialColumn {
    FilialCode,
    Name,
    Address,
    Phone,
}

impl Column for FilialColumn {
    const ALL: &'static [Self] = &[
        FilialColumn::FilialCode,
        FilialColumn::Name,
        FilialColumn::Address,
        FilialColumn::Phone,
    ];

    fn name(self) -> &'static str {
        match self {
            FilialColumn::FilialCode => "filial_code",
            FilialColumn::Name => "name",
            FilialColumn::Address => "address",
            FilialColumn::Phone => "phone",
        }
    }

    fn kind(self) -> ColumnKind {
        ColumnKind::Text
    }
}

impl Schema for FilialSchema {
    const ENTITY: &'static str = "Filial";
    const TABLE: &'static str = "filial";

    const SELECT_COLUMNS: &'static str =
        "f.id, f.filial_code, f.name, f.address, f.phone, f.created_at, f.updated_at";
    const FROM: &'static str = r#""filial" AS f"#;
    const ID_COLUMN: &'static str = "f.id";
    const SEARCH_COLUMN: &'static str = "f.filial_code";
    const CREATED_AT_COLUMN: &'static str = "f.created_at";

    type Column = FilialColumn;
    type Record = Filial;
    type Create = CreateFilial;
    type Update = UpdateFilial;

    fn insert_values(input: &CreateFilial) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("filial_code", combine_first_letters(&input.name).into()),
            ("name", input.name.clone().into()),
            ("address", input.address.clone().into()),
            ("phone", input.phone.clone().into()),
        ]
    }

    // Update completo não regenera nem aceita filial_code
    fn update_values(input: &UpdateFilial) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", input.name.clone().into()),
            ("address", input.address.clone().into()),
            ("phone", input.phone.clone().into()),
        ]
    }
}
