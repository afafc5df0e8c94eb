//! Outbound ports - interfaces for external services.
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to talk to the backend and the
//! host platform without depending on concrete implementations.

pub mod api_port;
pub mod platform;

pub use api_port::{ApiError, RawApiPort};
pub use platform::{storage_keys, StorageProvider, TimeProvider};

#[cfg(any(test, feature = "testing"))]
pub use api_port::MockRawApiPort;
#[cfg(any(test, feature = "testing"))]
pub use platform::{MockStorageProvider, MockTimeProvider};
