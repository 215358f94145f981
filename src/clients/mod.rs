//! Client handles wrapping the actor channels and remote services.

pub mod order_client;

pub use order_client::*;
