use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Root Status Response
///
/// Static liveness payload served at `/`. Points clients at the
/// interactive documentation.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "message": "Hello API is running!",
///   "docs": "/docs"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct RootStatus {
    pub status: String,
    pub message: String,
    pub docs: String,
}

impl RootStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Hello API is running!".to_string(),
            docs: "/docs".to_string(),
        }
    }
}
