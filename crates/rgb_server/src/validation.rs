use rgb_core::GridShape;
use uuid::Uuid;

use crate::config::FormLimits;
use crate::error::{ApiError, ApiResult};

/// Form ids are v4 UUIDs handed out on creation
pub fn validate_form_id(id: &str) -> ApiResult<()> {
    Uuid::parse_str(id).map_err(|_| ApiError::ValidationError {
        field: "id".to_string(),
        message: format!("'{id}' is not a valid form id"),
    })?;
    Ok(())
}

/// Validate that a grown form stays within the configured limits
pub fn validate_shape(shape: GridShape, limits: &FormLimits) -> ApiResult<()> {
    if shape.table_count > limits.max_tables {
        return Err(ApiError::ValidationError {
            field: "tables".to_string(),
            message: format!("Form cannot exceed {} tables", limits.max_tables),
        });
    }

    if shape.row_count > limits.max_rows {
        return Err(ApiError::ValidationError {
            field: "rows".to_string(),
            message: format!("Form cannot exceed {} years", limits.max_rows),
        });
    }

    Ok(())
}
