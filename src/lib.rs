//! Async client for Overwatch player statistics served by ow-api.com.
//!
//! Start with [`OwClient`]: look up one player with [`OwClient::get_player`],
//! many at once with [`OwClient::get_players`], and let misspelled battletags
//! be resolved through the name search by passing `correct = true`.

pub use client::OwClient;
pub use config::ClientConfig;
pub use error::{OwError, Result};
pub use model::*;

mod client;
pub mod config;
mod error;
pub mod model;
pub(crate) mod ow_api;
#[cfg(test)]
pub(crate) mod test_support;
