pub mod http_client;
pub mod messaging;
pub mod platform;

pub use messaging::EventBus;
