use wms_core::error::CoreError;
use wms_core::validation::require_text;
use wms_db::models::supplier::{Supplier, SupplierInput};

use super::MasterData;

impl MasterData for Supplier {
    const ENTITY: &'static str = "supplier";
    const LABEL: &'static str = "Supplier";
    const PLURAL: &'static str = "Suppliers";

    fn validate(input: &SupplierInput) -> Result<(), CoreError> {
        require_text(&input.name, "name")?;
        require_text(&input.address, "address")?;
        require_text(&input.contact, "contact")?;
        Ok(())
    }
}
