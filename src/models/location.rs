//! Location Area Documents
//!
//! The two PokeAPI documents the client decodes: the paginated
//! location-area listing and the per-area detail with its Pokémon
//! encounters. Only the fields the commands actually read are kept.

use serde::Deserialize;

// == Named Resource ==
/// A name/url pair, PokeAPI's standard reference to another resource.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// == Location Area Page ==
/// One page of the location-area listing.
///
/// `next` and `previous` are the pagination cursors; the API sends JSON
/// `null` at either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

// == Location Area Detail ==
/// Detail document for a single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One Pokémon that can be encountered in an area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
