use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Version reported when none is configured.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// # Hello Response
///
/// Payload of the greeting endpoint. Built fresh for every request and
/// stamped with the time of construction.
///
/// ## Fields
/// - `message`: greeting text, never empty
/// - `timestamp`: generation time, RFC 3339 in UTC
/// - `version`: API version, `"1.0.0"` unless configured otherwise
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello from Actix Web!",
///   "timestamp": "2025-12-26T10:00:00Z",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[schema(example = json!({
    "message": "Hello from Actix Web!",
    "timestamp": "2025-12-26T10:00:00Z",
    "version": "1.0.0"
}))]
pub struct HelloResponse {
    /// The greeting message
    message: String,
    /// Response generation timestamp
    timestamp: DateTime<Utc>,
    /// API version
    #[serde(default = "default_version")]
    version: String,
}

impl HelloResponse {
    /// Builds a response stamped with the current time.
    ///
    /// Fails with [`ApiError::Validation`] when `message` is blank.
    pub fn new(message: impl Into<String>, version: impl Into<String>) -> Result<Self, ApiError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ApiError::Validation("message must not be empty".to_string()));
        }

        Ok(Self {
            message,
            timestamp: Utc::now(),
            version: version.into(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
