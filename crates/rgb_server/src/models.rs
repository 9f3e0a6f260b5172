use rgb_core::{FormTree, FormValues, SubmitOutcome, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Current cell values posted with a button press. Structural changes carry
/// them so nothing typed before the rebuild is lost; when `values` is absent
/// the stored grid is used as is.
#[derive(Debug, Default, Deserialize)]
pub struct PostedValues {
    #[serde(default)]
    pub values: Option<FormValues>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub id: String,
    pub form: FormTree,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub errors: Vec<ValidationError>,
    pub values: FormValues,
    pub form: FormTree,
}

impl SubmitResponse {
    pub fn new(id: String, outcome: SubmitOutcome, form: FormTree) -> Self {
        Self {
            id,
            valid: outcome.is_valid(),
            status: outcome.status,
            errors: outcome.errors,
            values: outcome.values,
            form,
        }
    }
}
