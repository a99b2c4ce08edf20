use wms_core::error::CoreError;
use wms_core::validation::require_text;
use wms_db::models::customer::{Customer, CustomerInput};

use super::MasterData;

impl MasterData for Customer {
    const ENTITY: &'static str = "customer";
    const LABEL: &'static str = "Customer";
    const PLURAL: &'static str = "Customers";

    fn validate(input: &CustomerInput) -> Result<(), CoreError> {
        require_text(&input.name, "name")?;
        require_text(&input.address, "address")?;
        require_text(&input.contact, "contact")?;
        Ok(())
    }
}
