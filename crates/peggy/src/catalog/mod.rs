use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod artic;

/// One catalog record as served by the artworks listing endpoint.
///
/// Records are immutable once fetched: the table owns the current page's
/// records and drops them wholesale on the next page fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
  pub id: u64,
  pub title: String,
  pub place_of_origin: Option<String>,
  pub artist_display: String,
  pub inscriptions: Option<String>,
  pub date_start: i32,
  pub date_end: i32,
}

/// One page of records plus the dataset-wide record count.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
  pub artworks: Vec<Artwork>,
  pub total_records: u64,
}

#[derive(Error, Debug)]
pub enum FetchError {
  #[error("artworks request failed: {message}")]
  Request { message: String },

  #[error("artworks request returned HTTP {status}")]
  Status { status: u16 },

  #[error("could not decode artworks response: {message}")]
  Decode { message: String },
}

impl FetchError {
  pub fn request(message: impl Into<String>) -> Self {
    Self::Request { message: message.into() }
  }

  pub fn status(status: u16) -> Self {
    Self::Status { status }
  }

  pub fn decode(message: impl Into<String>) -> Self {
    Self::Decode { message: message.into() }
  }
}

/// Paginated record source - the seam the table fetches through
#[async_trait::async_trait]
pub trait ArtworkCatalog {
  /// Fetch one 1-based page of records. Exactly one outbound request per
  /// call; no retry, no timeout, no caching.
  async fn fetch_page(&self, page: u32, limit: u32) -> Result<PageResult, FetchError>;
}
