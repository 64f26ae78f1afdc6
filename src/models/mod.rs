/// # Root Status Response
///
/// Static payload of the liveness route:
/// `status` ("healthy"), a short `message` and the `docs` location.
pub mod health;

/// # Hello Response
///
/// Greeting payload with a server-side timestamp and the API version.
pub mod hello;

pub use health::RootStatus;
pub use hello::{DEFAULT_API_VERSION, HelloResponse};
