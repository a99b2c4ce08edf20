//! Location rules: `code` is the natural key.

use wms_core::error::CoreError;
use wms_core::validation::{require_positive, require_text};
use wms_db::models::location::{Location, LocationInput};

use super::MasterData;

impl MasterData for Location {
    const ENTITY: &'static str = "location";
    const LABEL: &'static str = "Location";
    const PLURAL: &'static str = "Locations";

    fn validate(input: &LocationInput) -> Result<(), CoreError> {
        require_text(&input.code, "code")?;
        require_text(&input.zone, "zone")?;
        require_text(&input.location_type, "type")?;
        require_positive(input.capacity, "capacity")?;
        Ok(())
    }

    fn natural_key(input: &LocationInput) -> Option<&str> {
        Some(&input.code)
    }

    fn conflict_message() -> String {
        "code already exists, please use another code".to_string()
    }
}
