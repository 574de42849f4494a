// src/db/magazin_repo.rs

use crate::{
    common::query::SqlValue,
    db::{
        repository::PgRepository,
        schema::{Column, ColumnKind, Schema},
    },
    models::magazin::{CreateMagazin, Magazin, UpdateMagazin},
};

pub struct MagazinSchema;

pub type MagazinRepository = PgRepository<MagazinSchema>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagazinColumn {
    Name,
    FilialId,
}

impl Column for MagazinColumn {
    const ALL: &'static [Self] = &[MagazinColumn::Name, MagazinColumn::FilialId];

    fn name(self) -> &'static str {
        match self {
            MagazinColumn::Name => "name",
            MagazinColumn::FilialId => "filial_id",
        }
    }

    fn kind(self) -> ColumnKind {
        match self {
            MagazinColumn::Name => ColumnKind::Text,
            MagazinColumn::FilialId => ColumnKind::Uuid,
        }
    }
}

impl Schema for MagazinSchema {
    const ENTITY: &'static str = "Magazin";
    const TABLE: &'static str = "magazin";

    // INNER JOIN: loja cuja filial sumiu não aparece
    const SELECT_COLUMNS: &'static str =
        "m.id, m.name, f.id AS filial_id, m.created_at, m.updated_at";
    const FROM: &'static str = r#""magazin" AS m INNER JOIN "filial" AS f ON f.id = m.filial_id"#;
    const ID_COLUMN: &'static str = "m.id";
    const SEARCH_COLUMN: &'static str = "m.name";
    const CREATED_AT_COLUMN: &'static str = "m.created_at";

    type Column = MagazinColumn;
    type Record = Magazin;
    type Create = CreateMagazin;
    type Update = UpdateMagazin;

    fn insert_values(input: &CreateMagazin) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", input.name.clone().into()),
            ("filial_id", input.filial_id.into()),
        ]
    }

    fn update_values(input: &UpdateMagazin) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", input.name.clone().into()),
            ("filial_id", input.filial_id.into()),
        ]
    }
}
