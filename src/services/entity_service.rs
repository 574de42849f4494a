// src/services/entity_service.rs

use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    db::{
        schema::{parse_patch_fields, Schema},
        PgRepository, Repository,
    },
    models::common::{GetListRequest, ListPage},
};

/// Adaptador RPC de uma entidade: loga o request, delega ao repositório e
/// traduz o resultado para a classe de status que o cliente recebe.
pub struct EntityService<S: Schema> {
    repo: Arc<dyn Repository<S>>,
}

impl<S: Schema> Clone for EntityService<S> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

// Loga a falha e devolve o status na classe padrão do erro
fn fail(entity: &str, op: &str, err: AppError) -> ApiError {
    tracing::error!(entity, op, error = %err, "falha na operação");
    err.to_api_error()
}

impl<S: Schema> EntityService<S> {
    pub fn new(repo: Arc<dyn Repository<S>>) -> Self {
        Self { repo }
    }

    pub fn postgres(repo: PgRepository<S>) -> Self {
        Self::new(Arc::new(repo))
    }

    /// Escreve e relê pelo id novo; a resposta é sempre a releitura.
    pub async fn create(&self, req: S::Create) -> Result<S::Record, ApiError> {
        tracing::info!(entity = S::ENTITY, req = ?req, "---Create--->");

        let id = self
            .repo
            .create(&req)
            .await
            .map_err(|e| fail(S::ENTITY, "Create", e))?;

        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| fail(S::ENTITY, "Create->GetByID", e))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<S::Record, ApiError> {
        tracing::info!(entity = S::ENTITY, %id, "---GetByID--->");

        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| fail(S::ENTITY, "GetByID", e))
    }

    pub async fn get_list(&self, req: GetListRequest) -> Result<ListPage<S::Record>, ApiError> {
        tracing::info!(entity = S::ENTITY, req = ?req, "---GetList--->");

        self.repo
            .get_list(&req)
            .await
            .map_err(|e| fail(S::ENTITY, "GetList", e))
    }

    pub async fn update(&self, id: Uuid, req: S::Update) -> Result<S::Record, ApiError> {
        tracing::info!(entity = S::ENTITY, %id, req = ?req, "---Update--->");

        let rows_affected = self
            .repo
            .update(id, &req)
            .await
            .map_err(|e| fail(S::ENTITY, "Update", e))?;

        self.read_back(id, rows_affected, "Update").await
    }

    pub async fn update_patch(
        &self,
        id: Uuid,
        fields: Map<String, Value>,
    ) -> Result<S::Record, ApiError> {
        // Só as chaves; os valores podem conter senha
        let keys: Vec<&String> = fields.keys().collect();
        tracing::info!(entity = S::ENTITY, %id, fields = ?keys, "---UpdatePatch--->");

        let parsed = parse_patch_fields::<S::Column>(&fields)
            .map_err(|e| fail(S::ENTITY, "UpdatePatch", e))?;

        let rows_affected = self
            .repo
            .update_patch(id, parsed)
            .await
            .map_err(|e| fail(S::ENTITY, "UpdatePatch", e))?;

        self.read_back(id, rows_affected, "UpdatePatch").await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        tracing::info!(entity = S::ENTITY, %id, "---Delete--->");

        self.repo
            .delete(id)
            .await
            .map_err(|e| fail(S::ENTITY, "Delete", e))
    }

    // Depois de uma escrita: zero linhas é erro do cliente; falha na releitura é NOT_FOUND
    async fn read_back(&self, id: Uuid, rows_affected: u64, op: &str) -> Result<S::Record, ApiError> {
        if rows_affected == 0 {
            return Err(ApiError::invalid_argument("no rows were affected"));
        }

        self.repo.get_by_id(id).await.map_err(|e| {
            tracing::error!(entity = S::ENTITY, op, %id, error = %e, "falha ao reler registro");
            match e {
                AppError::NotFound(message) => ApiError::not_found(message),
                // O detalhe de falhas internas fica só no log
                _ => ApiError::not_found(format!("{} {} not found", S::ENTITY, id)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::{
        common::{error::Code, helper::combine_first_letters, query::SqlValue},
        db::{
            filial_repo::FilialColumn,
            patch::build_patch,
            FilialSchema,
        },
        models::filial::{CreateFilial, Filial, UpdateFilial},
    };

    // Dublê em memória do repositório de filiais
    #[derive(Default)]
    struct StubFilials {
        rows: Mutex<HashMap<Uuid, Filial>>,
        // Simula um Delete concorrente entre a escrita e a releitura
        vanish_after_write: bool,
        // Simula o pool caindo logo depois da escrita
        break_reads_after_write: bool,
        reads_broken: AtomicBool,
    }

    impl StubFilials {
        fn after_write(&self, id: Uuid) {
            if self.vanish_after_write {
                self.rows.lock().unwrap().remove(&id);
            }
            if self.break_reads_after_write {
                self.reads_broken.store(true, Ordering::SeqCst);
            }
        }
    }

    #[async_trait]
    impl Repository<FilialSchema> for StubFilials {
        async fn create(&self, input: &CreateFilial) -> Result<Uuid, AppError> {
            let id = Uuid::new_v4();
            let now = Utc::now();
            self.rows.lock().unwrap().insert(
                id,
                Filial {
                    id,
                    filial_code: combine_first_letters(&input.name),
                    name: input.name.clone(),
                    address: input.address.clone(),
                    phone: input.phone.clone(),
                    created_at: now,
                    updated_at: now,
                },
            );
            self.after_write(id);
            Ok(id)
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Filial, AppError> {
            if self.reads_broken.load(Ordering::SeqCst) {
                return Err(AppError::Internal(
                    "pool timed out while waiting for an open connection to 10.0.0.7:5432".into(),
                ));
            }
            self.rows
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Filial {} not found", id)))
        }

        async fn get_list(&self, req: &GetListRequest) -> Result<ListPage<Filial>, AppError> {
            let rows = self.rows.lock().unwrap();
            let items: Vec<Filial> = rows
                .values()
                .filter(|f| {
                    req.search_term()
                        .map(|t| f.filial_code.to_lowercase().contains(&t.to_lowercase()))
                        .unwrap_or(true)
                })
                .cloned()
                .collect();
            Ok(ListPage { count: items.len() as i64, items })
        }

        async fn update(&self, id: Uuid, input: &UpdateFilial) -> Result<u64, AppError> {
            let affected = match self.rows.lock().unwrap().get_mut(&id) {
                Some(row) => {
                    row.name = input.name.clone();
                    row.address = input.address.clone();
                    row.phone = input.phone.clone();
                    row.updated_at = Utc::now();
                    1
                }
                None => 0,
            };
            self.after_write(id);
            Ok(affected)
        }

        async fn update_patch(
            &self,
            id: Uuid,
            fields: Vec<(FilialColumn, SqlValue)>,
        ) -> Result<u64, AppError> {
            // Mesma validação do builder real
            build_patch("filial", id, fields.clone())?;

            let affected = match self.rows.lock().unwrap().get_mut(&id) {
                Some(row) => {
                    for (column, value) in fields {
                        let SqlValue::Text(text) = value else { continue };
                        match column {
                            FilialColumn::FilialCode => row.filial_code = text.unwrap_or_default(),
                            FilialColumn::Name => row.name = text.unwrap_or_default(),
                            FilialColumn::Address => row.address = text,
                            FilialColumn::Phone => row.phone = text,
                        }
                    }
                    row.updated_at = Utc::now();
                    1
                }
                None => 0,
            };
            self.after_write(id);
            Ok(affected)
        }

        async fn delete(&self, id: Uuid) -> Result<(), AppError> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    fn service(stub: StubFilials) -> EntityService<FilialSchema> {
        EntityService::new(Arc::new(stub))
    }

    fn north_branch() -> CreateFilial {
        CreateFilial {
            name: "North Branch".into(),
            address: Some("1 Main St".into()),
            phone: Some("555-0100".into()),
        }
    }

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    #[tokio::test]
    async fn create_returns_the_read_back_record() {
        let svc = service(StubFilials::default());

        let created = svc.create(north_branch()).await.expect("create");

        assert_eq!(created.name, "North Branch");
        assert_eq!(created.filial_code, "NB");
        assert_eq!(created.address.as_deref(), Some("1 Main St"));
        assert_eq!(created.created_at, created.updated_at);

        let fetched = svc.get_by_id(created.id).await.expect("get");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn create_with_vanished_row_is_not_found() {
        let svc = service(StubFilials { vanish_after_write: true, ..Default::default() });

        let err = svc.create(north_branch()).await.unwrap_err();

        assert_eq!(err.code, Code::NotFound);
    }

    #[tokio::test]
    async fn get_by_id_on_missing_row_is_not_found() {
        let svc = service(StubFilials::default());

        let err = svc.get_by_id(Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err.code, Code::NotFound);
    }

    #[tokio::test]
    async fn update_of_missing_row_reports_no_rows_affected() {
        let svc = service(StubFilials::default());

        let err = svc
            .update(
                Uuid::new_v4(),
                UpdateFilial { name: "X".into(), address: None, phone: None },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, Code::InvalidArgument);
        assert_eq!(err.message, "no rows were affected");
    }

    #[tokio::test]
    async fn patch_of_missing_row_reports_no_rows_affected() {
        let svc = service(StubFilials::default());

        let err = svc
            .update_patch(Uuid::new_v4(), fields(json!({ "name": "X" })))
            .await
            .unwrap_err();

        assert_eq!(err.code, Code::InvalidArgument);
        assert_eq!(err.message, "no rows were affected");
    }

    #[tokio::test]
    async fn read_back_failure_after_update_is_not_found() {
        let stub = StubFilials { vanish_after_write: false, ..Default::default() };
        let svc = service(stub);
        let created = svc.create(north_branch()).await.expect("create");

        // Segundo serviço sobre um dublê que apaga depois de escrever
        let vanishing = StubFilials { vanish_after_write: true, ..Default::default() };
        vanishing.rows.lock().unwrap().insert(created.id, created.clone());
        let svc = service(vanishing);

        let err = svc
            .update(created.id, UpdateFilial { name: "South".into(), address: None, phone: None })
            .await
            .unwrap_err();

        assert_eq!(err.code, Code::NotFound);
    }

    #[tokio::test]
    async fn internal_read_back_failure_hides_backend_details() {
        let stub = StubFilials { break_reads_after_write: true, ..Default::default() };
        let id = Uuid::new_v4();
        let now = Utc::now();
        stub.rows.lock().unwrap().insert(
            id,
            Filial {
                id,
                filial_code: "NB".into(),
                name: "North Branch".into(),
                address: None,
                phone: None,
                created_at: now,
                updated_at: now,
            },
        );
        let svc = service(stub);

        let err = svc
            .update_patch(id, fields(json!({ "phone": "555-0101" })))
            .await
            .unwrap_err();

        assert_eq!(err.code, Code::NotFound);
        assert_eq!(err.message, format!("Filial {id} not found"));
        assert!(!err.message.contains("10.0.0.7"));
    }

    #[tokio::test]
    async fn empty_patch_is_invalid_argument() {
        let svc = service(StubFilials::default());
        let created = svc.create(north_branch()).await.expect("create");

        let err = svc.update_patch(created.id, Map::new()).await.unwrap_err();

        assert_eq!(err.code, Code::InvalidArgument);
        assert_eq!(err.message, "no updates provided");
    }

    #[tokio::test]
    async fn unknown_patch_field_is_rejected_before_the_store() {
        let svc = service(StubFilials::default());

        let err = svc
            .update_patch(Uuid::new_v4(), fields(json!({ "created_at": "2020-01-01" })))
            .await
            .unwrap_err();

        assert_eq!(err.code, Code::InvalidArgument);
        assert!(err.message.contains("unknown field"));
    }

    #[tokio::test]
    async fn patch_changes_only_the_named_fields() {
        let svc = service(StubFilials::default());
        let created = svc.create(north_branch()).await.expect("create");

        let patched = svc
            .update_patch(created.id, fields(json!({ "filial_code": "NBX" })))
            .await
            .expect("patch");

        assert_eq!(patched.filial_code, "NBX");
        assert_eq!(patched.name, created.name);
        assert_eq!(patched.phone, created.phone);
        assert!(patched.updated_at >= created.updated_at);
        assert_eq!(patched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = service(StubFilials::default());
        let created = svc.create(north_branch()).await.expect("create");

        svc.delete(created.id).await.expect("first delete");
        svc.delete(created.id).await.expect("second delete");
        svc.delete(Uuid::new_v4()).await.expect("never existed");

        let err = svc.get_by_id(created.id).await.unwrap_err();
        assert_eq!(err.code, Code::NotFound);
    }

    #[tokio::test]
    async fn get_list_passes_the_filter_through() {
        let svc = service(StubFilials::default());
        svc.create(north_branch()).await.expect("create");
        svc.create(CreateFilial { name: "South Side".into(), address: None, phone: None })
            .await
            .expect("create");

        let page = svc
            .get_list(GetListRequest { search: Some("nb".into()), ..Default::default() })
            .await
            .expect("list");

        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].filial_code, "NB");
    }
}
