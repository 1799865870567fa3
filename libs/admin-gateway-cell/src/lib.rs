pub mod client;
pub mod handlers;
pub mod models;
pub mod router;

pub use client::{AdminGatewayClient, GatewayError};
