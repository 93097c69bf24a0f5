//! Pokedex - an interactive PokeAPI client
//!
//! Paginates the location-area catalog and explores areas, with every
//! remote fetch served through a time-bounded response cache.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::spawn_reaper;
