//! OTA release service.
//!
//! An app has at most one current release: the row with the highest
//! `version_code`. Create refuses when the app already has one; update
//! overwrites it and delete removes every row for the app.

use std::sync::Arc;

use wms_core::error::CoreError;
use wms_core::pagination::PageRequest;
use wms_core::validation::{require_positive_int, require_text};
use wms_db::models::ota::{Ota, OtaInput};
use wms_db::repositories::OtaRepository;

const ENTITY: &str = "OTA";

#[derive(Clone)]
pub struct OtaService {
    repo: Arc<dyn OtaRepository>,
}

impl OtaService {
    pub fn new(repo: Arc<dyn OtaRepository>) -> Self {
        Self { repo }
    }

    /// Ordered required-field checklist for a release.
    pub fn validate(input: &OtaInput) -> Result<(), CoreError> {
        require_text(&input.app_id, "app ID")?;
        require_text(&input.version_name, "version name")?;
        require_positive_int(
            i64::from(input.version_code),
            "version code must be a positive number",
        )?;
        require_text(&input.url, "URL")?;
        Ok(())
    }

    pub async fn create(&self, input: &OtaInput) -> Result<Ota, CoreError> {
        Self::validate(input)?;

        if self.repo.find_latest(&input.app_id).await?.is_some() {
            return Err(CoreError::Conflict(
                "an OTA update already exists for this app".to_string(),
            ));
        }

        let ota = self.repo.create(input).await?;
        tracing::info!(app_id = %ota.app_id, version_code = ota.version_code, "OTA release created");
        Ok(ota)
    }

    /// Current release for `app_id`.
    pub async fn get_by_app_id(&self, app_id: &str) -> Result<Ota, CoreError> {
        check_app_id(app_id)?;
        self.repo
            .find_latest(app_id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, app_id))
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<Ota>, CoreError> {
        Ok(self.repo.list(page).await?)
    }

    pub async fn count(&self) -> Result<i64, CoreError> {
        Ok(self.repo.count().await?)
    }

    /// Overwrite the current release for `app_id`.
    pub async fn update(&self, app_id: &str, input: &OtaInput) -> Result<Ota, CoreError> {
        check_app_id(app_id)?;
        Self::validate(input)?;
        self.get_by_app_id(app_id).await?;

        let ota = self
            .repo
            .update_latest(app_id, input)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, app_id))?;
        tracing::info!(app_id, version_code = ota.version_code, "OTA release updated");
        Ok(ota)
    }

    /// Hard-delete every release for `app_id`.
    pub async fn delete(&self, app_id: &str) -> Result<(), CoreError> {
        check_app_id(app_id)?;

        let removed = self.repo.delete_by_app_id(app_id).await?;
        if removed == 0 {
            return Err(CoreError::not_found(ENTITY, app_id));
        }
        tracing::info!(app_id, removed, "OTA releases deleted");
        Ok(())
    }
}

fn check_app_id(app_id: &str) -> Result<(), CoreError> {
    if app_id.trim().is_empty() {
        return Err(CoreError::InvalidIdentifier("invalid app ID".to_string()));
    }
    Ok(())
}
