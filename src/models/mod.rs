//! Models Module
//!
//! Serde document types for the PokeAPI responses the client decodes.

mod location;

pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
