//! DTOs for guard evaluation endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Decision;

/// Query parameters for `GET /api/navigate`.
#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    /// Target path, e.g. `/`.
    pub to: String,
    /// Path of the route being left, if any.
    pub from: Option<String>,
}

/// Guard decision for one navigation attempt.
///
/// The decision is flattened into the body:
///
/// ```json
/// { "to": "/", "decision": "redirect", "target": "/login" }
/// ```
#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub to: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(flatten)]
    pub decision: Decision,
}
