//! PokeAPI Client Module
//!
//! Fetch glue between the REPL commands and the remote API. Every fetch
//! goes through a response cache first: on a hit the stored bytes are
//! decoded directly and no request is issued; on a miss the body is fetched
//! and, only on success, stored for future lookups. Cache keys are the full
//! request URLs.

use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage};

// == PokeAPI Client ==
/// HTTP client for the PokeAPI with per-content-type response caches.
///
/// The client owns one cache per retention policy: location-area listing
/// pages and area detail documents expire independently.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    location_cache: Cache,
    area_cache: Cache,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client from configuration.
    ///
    /// Fails if either retention interval is zero; the caller must not
    /// proceed with a mis-configured cache.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            location_cache: Cache::new(config.location_interval())?,
            area_cache: Cache::new(config.area_interval())?,
        })
    }

    /// URL of the first location-area listing page.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Handle to the location-page cache, for reaper wiring and stats.
    pub fn location_cache(&self) -> &Cache {
        &self.location_cache
    }

    /// Handle to the area-detail cache, for reaper wiring and stats.
    pub fn area_cache(&self) -> &Cache {
        &self.area_cache
    }

    // == Cached Fetch ==
    /// Returns the response body for `url`, consulting `cache` first.
    ///
    /// The body is stored only when the request succeeds, so errors are
    /// never cached and the next call retries.
    async fn fetch_bytes(&self, cache: &Cache, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = cache.get(url) {
            debug!(url, "cache hit");
            return Ok(body);
        }
        debug!(url, "cache miss, fetching");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            return Err(PokedexError::Status(status.as_u16()));
        }

        cache.put(url, body.clone());
        Ok(body)
    }

    // == Location Page ==
    /// Fetches one page of the location-area listing.
    ///
    /// `url` is a pagination cursor from a previous page; `None` fetches
    /// the first page.
    pub async fn location_page(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match url {
            Some(u) => u.to_string(),
            None => self.first_page_url(),
        };

        let body = self.fetch_bytes(&self.location_cache, &url).await?;
        let page = serde_json::from_slice(&body)?;
        Ok(page)
    }

    // == Area Exploration ==
    /// Fetches the detail document for a named area and returns the names
    /// of the Pokémon encountered there.
    pub async fn pokemon_in_area(&self, area: &str) -> Result<Vec<String>> {
        let url = format!("{}/location-area/{}", self.base_url, area);

        let body = match self.fetch_bytes(&self.area_cache, &url).await {
            Ok(body) => body,
            Err(PokedexError::Status(404)) => {
                return Err(PokedexError::UnknownArea(area.to_string()))
            }
            Err(err) => return Err(err),
        };

        let detail: LocationArea = serde_json::from_slice(&body)?;
        Ok(detail
            .pokemon_encounters
            .into_iter()
            .map(|encounter| encounter.pokemon.name)
            .collect())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> PokeApiClient {
        PokeApiClient::new(&Config {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_first_page_url_strips_trailing_slash() {
        let client = test_client();
        assert_eq!(
            client.first_page_url(),
            "https://pokeapi.co/api/v2/location-area/"
        );
    }

    #[test]
    fn test_client_rejects_zero_interval() {
        let config = Config {
            location_ttl: 0,
            ..Config::default()
        };
        assert!(matches!(
            PokeApiClient::new(&config),
            Err(PokedexError::InvalidInterval)
        ));
    }

    #[test]
    fn test_caches_are_independent_instances() {
        let client = test_client();

        client.location_cache().put("key", vec![1]);

        assert_eq!(client.location_cache().len(), 1);
        assert!(client.area_cache().is_empty());
    }

    #[tokio::test]
    async fn test_location_page_served_from_cache() {
        let client = test_client();
        let url = client.first_page_url();

        // Seed the cache so no network request is made.
        let body = br#"{
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"name": "pastoria-city-area", "url": "u"}]
        }"#;
        client.location_cache().put(url.clone(), body.to_vec());

        let page = client.location_page(Some(&url)).await.unwrap();

        assert_eq!(page.results[0].name, "pastoria-city-area");
        assert_eq!(client.location_cache().stats().hits, 1);
    }

    #[tokio::test]
    async fn test_pokemon_in_area_served_from_cache() {
        let client = test_client();

        let body = br#"{
            "name": "great-marsh-area-1",
            "pokemon_encounters": [
                {"pokemon": {"name": "wooper", "url": "u"}},
                {"pokemon": {"name": "quagsire", "url": "u"}}
            ]
        }"#;
        client.area_cache().put(
            "https://pokeapi.co/api/v2/location-area/great-marsh-area-1",
            body.to_vec(),
        );

        let names = client.pokemon_in_area("great-marsh-area-1").await.unwrap();

        assert_eq!(names, vec!["wooper".to_string(), "quagsire".to_string()]);
    }

    #[tokio::test]
    async fn test_cached_garbage_is_a_decode_error() {
        let client = test_client();
        let url = client.first_page_url();

        client.location_cache().put(url.clone(), b"not json".to_vec());

        let result = client.location_page(Some(&url)).await;
        assert!(matches!(result, Err(PokedexError::Decode(_))));
    }
}
