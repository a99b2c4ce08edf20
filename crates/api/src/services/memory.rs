//! In-memory repositories for service and handler tests.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use wms_core::pagination::PageRequest;
use wms_core::types::{DbId, Timestamp};
use wms_db::models::category::{Category, CategoryInput};
use wms_db::models::customer::{Customer, CustomerInput};
use wms_db::models::location::{Location, LocationInput};
use wms_db::models::ota::{Ota, OtaInput};
use wms_db::models::product::{Product, ProductInput};
use wms_db::models::supplier::{Supplier, SupplierInput};
use wms_db::repositories::{CrudRepository, OtaRepository};
use wms_db::DbError;

use super::{MasterData, MasterDataService, OtaService};
use crate::config::ServerConfig;
use crate::state::AppState;

/// Builds a row from its input the way the INSERT statement would.
pub(crate) trait Materialize: MasterData + Clone {
    fn materialize(id: DbId, input: &Self::Input, now: Timestamp) -> Self;

    fn key(&self) -> Option<&str> {
        None
    }
}

impl Materialize for Product {
    fn materialize(id: DbId, input: &ProductInput, now: Timestamp) -> Self {
        Product {
            id,
            sku: input.sku.clone(),
            name: input.name.clone(),
            description: input.description.clone(),
            unit: input.unit.clone(),
            weight: input.weight,
            dimension: input.dimension.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn key(&self) -> Option<&str> {
        Some(&self.sku)
    }
}

impl Materialize for Location {
    fn materialize(id: DbId, input: &LocationInput, now: Timestamp) -> Self {
        Location {
            id,
            code: input.code.clone(),
            zone: input.zone.clone(),
            location_type: input.location_type.clone(),
            capacity: input.capacity,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn key(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl Materialize for Supplier {
    fn materialize(id: DbId, input: &SupplierInput, now: Timestamp) -> Self {
        Supplier {
            id,
            name: input.name.clone(),
            address: input.address.clone(),
            contact: input.contact.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Materialize for Customer {
    fn materialize(id: DbId, input: &CustomerInput, now: Timestamp) -> Self {
        Customer {
            id,
            name: input.name.clone(),
            address: input.address.clone(),
            contact: input.contact.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Materialize for Category {
    fn materialize(id: DbId, input: &CategoryInput, now: Timestamp) -> Self {
        Category {
            id,
            name: input.name.clone(),
            parent_id: input.parent_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

struct Row<E> {
    record: E,
    deleted: bool,
}

/// Soft-deleting store kept in insertion order.
pub(crate) struct MemoryRepo<E> {
    rows: Mutex<Vec<Row<E>>>,
    fail: AtomicBool,
}

impl<E> Default for MemoryRepo<E> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }
}

impl<E: Materialize> MemoryRepo<E> {
    /// Number of live rows.
    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().iter().filter(|r| !r.deleted).count()
    }

    /// Make every subsequent call fail as if the pool were exhausted.
    pub(crate) fn fail_next_calls(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn guard(&self, operation: &'static str) -> Result<(), DbError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DbError::new(operation, E::TABLE, sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Materialize> CrudRepository<E> for MemoryRepo<E> {
    async fn create(&self, input: &E::Input) -> Result<E, DbError> {
        self.guard("insert")?;
        let mut rows = self.rows.lock().unwrap();
        let record = E::materialize(rows.len() as DbId + 1, input, Utc::now());
        rows.push(Row {
            record: record.clone(),
            deleted: false,
        });
        Ok(record)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, DbError> {
        self.guard("find")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| !r.deleted && r.record.id() == id)
            .map(|r| r.record.clone()))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<E>, DbError> {
        self.guard("find")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| !r.deleted && r.record.key() == Some(key))
            .map(|r| r.record.clone()))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<E>, DbError> {
        self.guard("list")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .filter(|r| !r.deleted)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|r| r.record.clone())
            .collect())
    }

    async fn count(&self) -> Result<i64, DbError> {
        self.guard("count")?;
        Ok(self.len() as i64)
    }

    async fn update(&self, id: DbId, input: &E::Input) -> Result<Option<E>, DbError> {
        self.guard("update")?;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| !r.deleted && r.record.id() == id) else {
            return Ok(None);
        };
        row.record = E::materialize(id, input, Utc::now());
        Ok(Some(row.record.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        self.guard("delete")?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| !r.deleted && r.record.id() == id) {
            Some(row) => {
                row.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Hard-deleting OTA store.
#[derive(Default)]
pub(crate) struct MemoryOtaRepo {
    rows: Mutex<Vec<Ota>>,
    next_id: AtomicI64,
}

fn ota_from(id: DbId, input: &OtaInput, now: Timestamp) -> Ota {
    Ota {
        id,
        app_id: input.app_id.clone(),
        version_name: input.version_name.clone(),
        version_code: input.version_code,
        url: input.url.clone(),
        release_notes: input.release_notes.clone(),
        created_at: now,
        updated_at: now,
    }
}

fn latest<'a>(rows: &'a mut [Ota], app_id: &str) -> Option<&'a mut Ota> {
    rows.iter_mut()
        .filter(|o| o.app_id == app_id)
        .max_by_key(|o| (o.version_code, o.id))
}

#[async_trait]
impl OtaRepository for MemoryOtaRepo {
    async fn create(&self, input: &OtaInput) -> Result<Ota, DbError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let ota = ota_from(id, input, Utc::now());
        self.rows.lock().unwrap().push(ota.clone());
        Ok(ota)
    }

    async fn find_latest(&self, app_id: &str) -> Result<Option<Ota>, DbError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(latest(&mut rows, app_id).map(|o| o.clone()))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Ota>, DbError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, DbError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn update_latest(
        &self,
        app_id: &str,
        input: &OtaInput,
    ) -> Result<Option<Ota>, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = latest(&mut rows, app_id) else {
            return Ok(None);
        };
        let created_at = row.created_at;
        *row = ota_from(row.id, input, Utc::now());
        row.created_at = created_at;
        Ok(Some(row.clone()))
    }

    async fn delete_by_app_id(&self, app_id: &str) -> Result<u64, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|o| o.app_id != app_id);
        Ok((before - rows.len()) as u64)
    }
}

pub(crate) fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        service_name: "Warehouse Master Data Service".into(),
    }
}

/// State backed entirely by in-memory stores. The pool is lazy and never
/// connects unless a handler touches it directly.
pub(crate) fn memory_state() -> AppState {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://wms@localhost:5432/wms_test")
        .unwrap();

    AppState {
        pool,
        config: Arc::new(test_config()),
        products: MasterDataService::new(Arc::new(MemoryRepo::<Product>::default())),
        locations: MasterDataService::new(Arc::new(MemoryRepo::<Location>::default())),
        suppliers: MasterDataService::new(Arc::new(MemoryRepo::<Supplier>::default())),
        customers: MasterDataService::new(Arc::new(MemoryRepo::<Customer>::default())),
        categories: MasterDataService::new(Arc::new(MemoryRepo::<Category>::default())),
        otas: OtaService::new(Arc::new(MemoryOtaRepo::default())),
    }
}
