//! Category rules. `parent_id` is optional but must reference a live row
//! other than the category itself.

use wms_core::error::CoreError;
use wms_core::types::DbId;
use wms_core::validation::{require_positive_int, require_text};
use wms_db::models::category::{Category, CategoryInput};

use super::MasterData;

impl MasterData for Category {
    const ENTITY: &'static str = "category";
    const LABEL: &'static str = "Category";
    const PLURAL: &'static str = "Categories";

    fn validate(input: &CategoryInput) -> Result<(), CoreError> {
        require_text(&input.name, "name")?;
        if let Some(parent_id) = input.parent_id {
            require_positive_int(parent_id, "parent_id must be a positive number")?;
        }
        Ok(())
    }

    fn parent_id(input: &CategoryInput) -> Option<DbId> {
        input.parent_id
    }

    fn foreign_key_message() -> String {
        "parent category not found".to_string()
    }
}
