use crate::catalog::artic::ArticClient;
use crate::display;
use crate::table::ArtworkTable;
use anyhow::Result;

/// Fetch and print a single page, without the interactive session.
pub async fn handle(api_base: Option<String>, number: u32, limit: u32) -> Result<()> {
  let catalog = match api_base {
    Some(base) => ArticClient::with_base_url(base),
    None => ArticClient::new(),
  };

  let mut table = ArtworkTable::new(limit);
  table.load_page(&catalog, number).await;
  display::print_page(&table);

  Ok(())
}
