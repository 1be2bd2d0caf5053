use crate::catalog::Artwork;
use crate::table::ArtworkTable;
use console::{pad_str, style, Alignment};

const TITLE_WIDTH: usize = 32;
const ARTIST_WIDTH: usize = 28;
const ORIGIN_WIDTH: usize = 14;
const YEAR_WIDTH: usize = 6;
const INSCRIPTIONS_WIDTH: usize = 26;

/// Checkbox column plus the six descriptive columns, space separated.
const TABLE_WIDTH: usize =
  4 + TITLE_WIDTH + 1 + ARTIST_WIDTH + 1 + ORIGIN_WIDTH + 1 + YEAR_WIDTH + 1 + YEAR_WIDTH + 1
    + INSCRIPTIONS_WIDTH;

/// Pad or ellipsis-truncate a cell to its column width.
fn cell(text: &str, width: usize) -> String {
  pad_str(text, width, Alignment::Left, Some("…")).to_string()
}

fn year_cell(year: i32) -> String {
  pad_str(&year.to_string(), YEAR_WIDTH, Alignment::Right, None).to_string()
}

/// Column headings, aligned with `format_row`.
pub fn header_row() -> String {
  format!(
    "    {} {} {} {} {} {}",
    cell("Title", TITLE_WIDTH),
    cell("Artist", ARTIST_WIDTH),
    cell("Origin", ORIGIN_WIDTH),
    pad_str("Start", YEAR_WIDTH, Alignment::Right, None),
    pad_str("End", YEAR_WIDTH, Alignment::Right, None),
    cell("Inscriptions", INSCRIPTIONS_WIDTH),
  )
}

/// One table row. The leading checkbox reflects the visible selection.
pub fn format_row(artwork: &Artwork, checked: bool) -> String {
  let mark = if checked { "[x]" } else { "[ ]" };

  // The artist attribution can span lines on the wire; the table wants the
  // display name alone.
  let artist = artwork.artist_display.lines().next().unwrap_or("");

  format!(
    "{} {} {} {} {} {} {}",
    mark,
    cell(&artwork.title, TITLE_WIDTH),
    cell(artist, ARTIST_WIDTH),
    cell(artwork.place_of_origin.as_deref().unwrap_or("-"), ORIGIN_WIDTH),
    year_cell(artwork.date_start),
    year_cell(artwork.date_end),
    cell(artwork.inscriptions.as_deref().unwrap_or("-"), INSCRIPTIONS_WIDTH),
  )
}

/// Selection summary plus pagination counters for the footer line.
pub fn format_footer(table: &ArtworkTable) -> String {
  format!(
    "{} row(s) selected across all pages. Page {} of {} ({} artworks)",
    table.selection().len(),
    table.page(),
    table.total_pages(),
    table.total_records()
  )
}

/// Render the table's current window to stdout.
pub fn print_page(table: &ArtworkTable) {
  docent::as_banner(
    |msg| println!("{}", style(msg).bold()),
    "Artworks from the Art Institute of Chicago",
    Some(TABLE_WIDTH),
    Some('='),
  );

  println!("{}", style(header_row()).bold());
  println!("{}", docent::banner_line(TABLE_WIDTH, '-'));

  if table.artworks().is_empty() {
    let note = if table.is_loading() { "(loading)" } else { "(no records)" };
    println!("{note}");
  } else {
    let checked = table.visible_selection();
    for artwork in table.artworks() {
      println!("{}", format_row(artwork, checked.contains(&artwork.id)));
    }
  }

  println!("{}", docent::banner_line(TABLE_WIDTH, '-'));
  println!("{}", format_footer(table));
}

/// List every selected id, across all pages.
pub fn print_selection(table: &ArtworkTable) {
  if table.selection().is_empty() {
    docent::info("No rows selected.");
    return;
  }

  let ids: Vec<String> = table.selection().ids().map(|id| id.to_string()).collect();
  docent::info(&format!("{} row(s) selected: {}", ids.len(), ids.join(", ")));
}
