use crate::catalog::{Artwork, ArtworkCatalog, FetchError, PageResult};
use crate::selection::Selection;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Handle for one in-flight page fetch.
///
/// `finish_load` uses the sequence stamp to recognize responses that a
/// newer request has superseded: only the most recently requested page may
/// change the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  seq: u64,
  page: u32,
}

impl PageRequest {
  pub fn page(&self) -> u32 {
    self.page
  }
}

/// The state behind the artwork table: the visible window of records, the
/// pagination counters, the loading flag, and the cross-page selection.
///
/// All mutation happens through the event handlers below, on the caller's
/// event loop. Fetch failures stop here: they are logged, the loading flag
/// clears, and the previous window stays on screen.
#[derive(Debug)]
pub struct ArtworkTable {
  artworks: Vec<Artwork>,
  loading: bool,
  first: u64,
  rows: u32,
  total_records: u64,
  selection: Selection,
  last_issued: u64,
}

impl Default for ArtworkTable {
  fn default() -> Self {
    Self::new(DEFAULT_PAGE_SIZE)
  }
}

impl ArtworkTable {
  pub fn new(rows: u32) -> Self {
    Self {
      artworks: Vec::new(),
      loading: false,
      first: 0,
      rows: rows.max(1),
      total_records: 0,
      selection: Selection::new(),
      last_issued: 0,
    }
  }

  /// Note a page fetch as started: raises the loading flag and stamps the
  /// request so late responses for older requests can be recognized.
  pub fn begin_load(&mut self, page: u32) -> PageRequest {
    self.loading = true;
    self.last_issued += 1;
    PageRequest { seq: self.last_issued, page: page.max(1) }
  }

  /// Apply a completed fetch.
  ///
  /// A stale request (one issued before the newest `begin_load`) is
  /// discarded without touching anything, loading flag included: the
  /// response for the newest request is still owed. For the newest request
  /// a success replaces the window and counters; a failure keeps the prior
  /// window in place and is only logged.
  pub fn finish_load(&mut self, request: &PageRequest, result: Result<PageResult, FetchError>) {
    if request.seq != self.last_issued {
      docent::debug(&format!("dropping stale response for page {}", request.page));
      return;
    }

    self.loading = false;

    match result {
      Ok(page) => {
        self.first = u64::from(request.page - 1) * u64::from(self.rows);
        self.total_records = page.total_records;
        self.artworks = page.artworks;
      }
      Err(err) => {
        docent::error(&format!("failed to fetch artworks: {err}"));
      }
    }
  }

  /// Fetch one page from the catalog and apply it.
  pub async fn load_page(&mut self, catalog: &dyn ArtworkCatalog, page: u32) {
    let request = self.begin_load(page);
    let result = catalog.fetch_page(request.page(), self.rows).await;
    self.finish_load(&request, result);
  }

  pub fn artworks(&self) -> &[Artwork] {
    &self.artworks
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn rows(&self) -> u32 {
    self.rows
  }

  /// Offset of the first visible row within the whole dataset.
  pub fn first(&self) -> u64 {
    self.first
  }

  pub fn total_records(&self) -> u64 {
    self.total_records
  }

  pub fn selection(&self) -> &Selection {
    &self.selection
  }

  /// 1-based number of the page currently on display.
  pub fn page(&self) -> u32 {
    (self.first / u64::from(self.rows)) as u32 + 1
  }

  /// Logical page count, from the dataset total rather than the length of
  /// any one page's data.
  pub fn total_pages(&self) -> u64 {
    self.total_records.div_ceil(u64::from(self.rows))
  }

  /// Ids of the records on the visible page, in page order.
  pub fn visible_ids(&self) -> Vec<u64> {
    self.artworks.iter().map(|artwork| artwork.id).collect()
  }

  /// The checked subset of the visible page, for rendering.
  pub fn visible_selection(&self) -> Vec<u64> {
    self.selection.visible_subset(&self.visible_ids())
  }

  /// Replace the visible page's checkbox state wholesale and reconcile the
  /// selection against it. Ids on other pages are unaffected.
  pub fn set_checked(&mut self, checked: &[u64]) {
    self.selection = self.selection.reconcile(&self.visible_ids(), checked);
  }

  /// Check the given ids on the visible page. Ids not on this page are
  /// ignored rather than selected blind.
  pub fn check(&mut self, ids: &[u64]) {
    let mut checked = self.visible_selection();
    for id in ids {
      if self.selection_candidate(*id) && !checked.contains(id) {
        checked.push(*id);
      }
    }
    self.set_checked(&checked);
  }

  /// Uncheck the given ids on the visible page.
  pub fn uncheck(&mut self, ids: &[u64]) {
    let checked: Vec<u64> =
      self.visible_selection().into_iter().filter(|id| !ids.contains(id)).collect();
    self.set_checked(&checked);
  }

  fn selection_candidate(&self, id: u64) -> bool {
    self.artworks.iter().any(|artwork| artwork.id == id)
  }

  /// Empty the selection and confirm it to the user.
  pub fn clear_selection(&mut self) {
    let cleared = self.selection.len();
    self.selection = Selection::new();
    docent::success(&format!("All selections have been cleared ({cleared} removed)"));
  }
}
