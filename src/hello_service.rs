use crate::error::ApiError;
use crate::models::{DEFAULT_API_VERSION, HelloResponse};

const GREETING: &str = "Hello from Actix Web! 🚀";

/// # Hello Service
///
/// Produces greeting payloads. One instance is created at startup and shared
/// read-only across all workers; it holds nothing but the API version.
#[derive(Debug, Clone)]
pub struct HelloService {
    api_version: String,
}

impl HelloService {
    pub fn new(api_version: impl Into<String>) -> Self {
        let api_version = api_version.into();
        tracing::info!("HelloService initialized with version {}", api_version);
        Self { api_version }
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Builds a greeting stamped with the current time.
    ///
    /// Only fails if the produced record does not pass model validation,
    /// which the fixed greeting text never triggers.
    pub fn generate_hello_response(&self) -> Result<HelloResponse, ApiError> {
        tracing::debug!("Generating hello response");

        let response = HelloResponse::new(GREETING, self.api_version.as_str())?;

        tracing::info!("Hello response generated at {}", response.timestamp());
        Ok(response)
    }
}

impl Default for HelloService {
    fn default() -> Self {
        Self::new(DEFAULT_API_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version() {
        let service = HelloService::default();
        assert_eq!(service.api_version(), "1.0.0");
    }

    #[test]
    fn test_generate_hello_response() {
        let service = HelloService::new("2.0.0");
        let response = service.generate_hello_response().unwrap();

        assert_eq!(response.message(), GREETING);
        assert_eq!(response.version(), "2.0.0");
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let service = HelloService::default();
        let first = service.generate_hello_response().unwrap();
        let second = service.generate_hello_response().unwrap();

        assert!(second.timestamp() >= first.timestamp());
    }
}
