//! Error types for the Pokédex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokédex client.
///
/// Cache lookups are not represented here: absence of a key is a normal
/// outcome signaled through `Option`, never an error.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero retention interval
    #[error("cache interval must be a positive duration")]
    InvalidInterval,

    /// The HTTP request could not be performed
    #[error("could not connect to PokeAPI: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("response failed with status code: {0}")]
    Status(u16),

    /// Area detail lookup returned 404
    #[error("area {0:?} not found (probably no area with that name)")]
    UnknownArea(String),

    /// The response body was not the JSON document we expected
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokédex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
