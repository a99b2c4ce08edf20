//! Product rules: SKU is the natural key.

use wms_core::error::CoreError;
use wms_core::validation::{require_positive, require_text};
use wms_db::models::product::{Product, ProductInput};

use super::MasterData;

impl MasterData for Product {
    const ENTITY: &'static str = "product";
    const LABEL: &'static str = "Product";
    const PLURAL: &'static str = "Products";

    fn validate(input: &ProductInput) -> Result<(), CoreError> {
        require_text(&input.sku, "sku")?;
        require_text(&input.name, "name")?;
        require_text(&input.unit, "unit")?;
        require_positive(input.weight, "weight")?;
        require_text(&input.dimension, "dimension")?;
        Ok(())
    }

    fn natural_key(input: &ProductInput) -> Option<&str> {
        Some(&input.sku)
    }

    fn conflict_message() -> String {
        "Product with this SKU already exists, please use another SKU".to_string()
    }
}
