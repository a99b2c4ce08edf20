//! Service layer: validation and existence checks in front of the repositories.
//!
//! Every master-data entity goes through the same [`MasterDataService`]; the
//! per-entity modules only supply a [`MasterData`] impl describing labels,
//! the required-field checklist and the natural key. OTA releases are keyed
//! by app id rather than row id and get their own [`OtaService`].

use std::sync::Arc;

use serde::Serialize;
use wms_core::error::CoreError;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;
use wms_db::models::Record;
use wms_db::repositories::CrudRepository;
use wms_db::DbError;

pub mod category;
pub mod customer;
pub mod location;
pub mod ota;
pub mod product;
pub mod supplier;

#[cfg(test)]
pub(crate) mod memory;

pub use ota::OtaService;

/// Per-entity rules for the generic CRUD pipeline.
pub trait MasterData: Record + Serialize {
    /// Lowercase name used in error messages (`"product not found"`).
    const ENTITY: &'static str;
    /// Capitalized name used in success messages (`"Product created successfully"`).
    const LABEL: &'static str;
    /// Capitalized plural used by list responses.
    const PLURAL: &'static str;

    /// Ordered required-field checklist; stops at the first failure.
    fn validate(input: &Self::Input) -> Result<(), CoreError>;

    /// Natural key that must be unique among live rows, if the entity has one.
    fn natural_key(_input: &Self::Input) -> Option<&str> {
        None
    }

    /// Same-table parent the row hangs under, if any. It must be a live row
    /// other than the row itself.
    fn parent_id(_input: &Self::Input) -> Option<DbId> {
        None
    }

    fn conflict_message() -> String {
        format!("{} already exists", Self::ENTITY)
    }

    fn foreign_key_message() -> String {
        format!("referenced record for {} not found", Self::ENTITY)
    }
}

/// Generic create/read/update/delete service for one master-data entity.
pub struct MasterDataService<E: MasterData> {
    repo: Arc<dyn CrudRepository<E>>,
}

impl<E: MasterData> Clone for MasterDataService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: MasterData> MasterDataService<E> {
    pub fn new(repo: Arc<dyn CrudRepository<E>>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: &E::Input) -> Result<E, CoreError> {
        E::validate(input)?;
        self.check_parent(None, input).await?;

        if let Some(key) = E::natural_key(input) {
            if self.repo.find_by_key(key).await?.is_some() {
                return Err(CoreError::Conflict(E::conflict_message()));
            }
        }

        let record = self.repo.create(input).await.map_err(translate::<E>)?;
        tracing::info!(entity = E::ENTITY, id = record.id(), "Record created");
        Ok(record)
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<E, CoreError> {
        check_id::<E>(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(E::ENTITY, id))
    }

    /// One page of live rows, newest first.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<E>, CoreError> {
        Ok(self.repo.list(page).await?)
    }

    pub async fn count(&self) -> Result<i64, CoreError> {
        Ok(self.repo.count().await?)
    }

    /// Full update. The natural key may change as long as no other live row holds it.
    pub async fn update(&self, id: DbId, input: &E::Input) -> Result<E, CoreError> {
        check_id::<E>(id)?;
        E::validate(input)?;
        self.get_by_id(id).await?;
        self.check_parent(Some(id), input).await?;

        if let Some(key) = E::natural_key(input) {
            if let Some(holder) = self.repo.find_by_key(key).await? {
                if holder.id() != id {
                    return Err(CoreError::Conflict(E::conflict_message()));
                }
            }
        }

        let record = self
            .repo
            .update(id, input)
            .await
            .map_err(translate::<E>)?
            .ok_or_else(|| CoreError::not_found(E::ENTITY, id))?;
        tracing::info!(entity = E::ENTITY, id, "Record updated");
        Ok(record)
    }

    /// Soft delete. A row that is already deleted is reported as not found.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.get_by_id(id).await?;

        if !self.repo.delete(id).await? {
            return Err(CoreError::not_found(E::ENTITY, id));
        }
        tracing::info!(entity = E::ENTITY, id, "Record deleted");
        Ok(())
    }

    /// The foreign key alone accepts soft-deleted parents, so resolve the
    /// parent through the live view.
    async fn check_parent(&self, id: Option<DbId>, input: &E::Input) -> Result<(), CoreError> {
        let Some(parent_id) = E::parent_id(input) else {
            return Ok(());
        };
        if id == Some(parent_id) || self.repo.find_by_id(parent_id).await?.is_none() {
            return Err(CoreError::Validation(E::foreign_key_message()));
        }
        Ok(())
    }
}

fn check_id<E: MasterData>(id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::InvalidIdentifier(format!(
            "invalid {} id",
            E::ENTITY
        )));
    }
    Ok(())
}

/// Map constraint violations raised on write to domain errors.
fn translate<E: MasterData>(err: DbError) -> CoreError {
    if err.is_unique_violation() {
        tracing::warn!(entity = E::ENTITY, constraint = ?err.constraint(), "Unique constraint rejected write");
        CoreError::Conflict(E::conflict_message())
    } else if err.is_foreign_key_violation() {
        CoreError::Validation(E::foreign_key_message())
    } else {
        err.into()
    }
}
