//! Ports - interfaces the application depends on.

pub mod outbound;
