use super::{Artwork, ArtworkCatalog, FetchError, PageResult};
use serde::Deserialize;
use std::env;

/// Default base for the Art Institute of Chicago public API.
pub const DEFAULT_API_BASE: &str = "https://api.artic.edu/api/v1";

/// The exact field list requested from the listing endpoint. Anything more
/// is wasted transfer; the table renders only these.
pub const ARTWORK_FIELDS: &str =
  "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Pagination metadata embedded in every listing response.
#[derive(Debug, Deserialize)]
pub struct Pagination {
  pub total: u64,
  pub limit: u32,
  pub offset: u64,
  pub total_pages: u32,
  pub current_page: u32,
}

/// Wire shape of one listing response.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
  pub pagination: Pagination,
  pub data: Vec<Artwork>,
}

fn api_base() -> String {
  // Allow overriding the catalog API base for testing via env var
  env::var("PEGGY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// HTTP client for the artworks listing endpoint.
///
/// Each `fetch_page` call is a single best-effort GET. There is no retry
/// and no caching; a failed call surfaces as a `FetchError` and nothing
/// else changes.
pub struct ArticClient {
  client: reqwest::Client,
  base_url: String,
}

impl ArticClient {
  pub fn new() -> Self {
    Self::with_base_url(api_base())
  }

  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self { client: reqwest::Client::new(), base_url: base_url.into() }
  }

  /// Full URL of the artworks listing endpoint.
  pub fn artworks_url(&self) -> String {
    format!("{}/artworks", self.base_url.trim_end_matches('/'))
  }
}

impl Default for ArticClient {
  fn default() -> Self {
    Self::new()
  }
}

/// Decode a listing response body into a page result.
///
/// The total comes from the embedded pagination block, never from the page
/// length: one page of ten records may stand in for a hundred thousand.
pub fn decode_page(body: &str) -> Result<PageResult, FetchError> {
  let envelope: PageEnvelope =
    serde_json::from_str(body).map_err(|e| FetchError::decode(e.to_string()))?;

  Ok(PageResult { artworks: envelope.data, total_records: envelope.pagination.total })
}

#[async_trait::async_trait]
impl ArtworkCatalog for ArticClient {
  async fn fetch_page(&self, page: u32, limit: u32) -> Result<PageResult, FetchError> {
    let response = self
      .client
      .get(self.artworks_url())
      .query(&[
        ("page", page.to_string()),
        ("limit", limit.to_string()),
        ("fields", ARTWORK_FIELDS.to_string()),
      ])
      .send()
      .await
      .map_err(|e| FetchError::request(e.to_string()))?;

    if !response.status().is_success() {
      return Err(FetchError::status(response.status().as_u16()));
    }

    let body = response.text().await.map_err(|e| FetchError::request(e.to_string()))?;
    decode_page(&body)
  }
}
