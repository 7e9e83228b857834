//! Generation gateway - forwards text and image generation requests to an
//! upstream AI provider and relays the normalized response.
//!
//! The core lives in [`gateway`]; the HTTP layer in [`server`] is a thin
//! translation around it.

pub mod ai;
pub mod error;
pub mod gateway;
pub mod models;
pub mod server;

pub use error::{Error, Result};
