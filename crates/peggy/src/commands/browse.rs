use crate::catalog::artic::ArticClient;
use crate::display;
use crate::table::ArtworkTable;
use anyhow::Result;
use console::Term;

/// One parsed line of input from the browse prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
  Next,
  Prev,
  Goto(u32),
  Check(Vec<u64>),
  Uncheck(Vec<u64>),
  Selected,
  Clear,
  Reload,
  Help,
  Quit,
}

impl BrowseCommand {
  /// Parse a prompt line. Returns None for anything unrecognized.
  pub fn parse(line: &str) -> Option<Self> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let rest: Vec<&str> = words.collect();

    match head {
      "n" | "next" => Some(Self::Next),
      "p" | "prev" => Some(Self::Prev),
      "g" | "go" => rest.first()?.parse().ok().map(Self::Goto),
      "c" | "check" => parse_ids(&rest).map(Self::Check),
      "u" | "uncheck" => parse_ids(&rest).map(Self::Uncheck),
      "s" | "selected" => Some(Self::Selected),
      "x" | "clear" => Some(Self::Clear),
      "r" | "reload" => Some(Self::Reload),
      "h" | "help" | "?" => Some(Self::Help),
      "q" | "quit" => Some(Self::Quit),
      _ => None,
    }
  }
}

fn parse_ids(words: &[&str]) -> Option<Vec<u64>> {
  if words.is_empty() {
    return None;
  }
  words.iter().map(|word| word.parse().ok()).collect()
}

pub async fn handle(api_base: Option<String>, page: u32, limit: u32) -> Result<()> {
  let catalog = match api_base {
    Some(base) => ArticClient::with_base_url(base),
    None => ArticClient::new(),
  };

  docent::announce("Browsing the Art Institute of Chicago catalog");

  let mut table = ArtworkTable::new(limit);
  table.load_page(&catalog, page).await;
  display::print_page(&table);
  docent::info("Type 'help' for the command list.");

  let term = Term::stdout();

  loop {
    term.write_str("peggy> ")?;
    let line = term.read_line()?;

    let Some(command) = BrowseCommand::parse(&line) else {
      if !line.trim().is_empty() {
        docent::warn("Unrecognized command; type 'help' for the list.");
      }
      continue;
    };

    match command {
      BrowseCommand::Next => {
        if u64::from(table.page()) < table.total_pages() {
          let next = table.page() + 1;
          table.load_page(&catalog, next).await;
          display::print_page(&table);
        } else {
          docent::info("Already on the last page.");
        }
      }
      BrowseCommand::Prev => {
        if table.page() > 1 {
          let prev = table.page() - 1;
          table.load_page(&catalog, prev).await;
          display::print_page(&table);
        } else {
          docent::info("Already on the first page.");
        }
      }
      BrowseCommand::Goto(number) => {
        if table.total_pages() > 0 && u64::from(number.max(1)) > table.total_pages() {
          docent::warn(&format!("The catalog only has {} pages.", table.total_pages()));
          continue;
        }
        table.load_page(&catalog, number).await;
        display::print_page(&table);
      }
      BrowseCommand::Check(ids) => {
        warn_about_offpage_ids(&table, &ids);
        table.check(&ids);
        display::print_page(&table);
      }
      BrowseCommand::Uncheck(ids) => {
        warn_about_offpage_ids(&table, &ids);
        table.uncheck(&ids);
        display::print_page(&table);
      }
      BrowseCommand::Selected => display::print_selection(&table),
      BrowseCommand::Clear => table.clear_selection(),
      BrowseCommand::Reload => {
        let current = table.page();
        table.load_page(&catalog, current).await;
        display::print_page(&table);
      }
      BrowseCommand::Help => print_help(),
      BrowseCommand::Quit => {
        docent::event_info(&format!("{} row(s) selected this session", table.selection().len()));
        break;
      }
    }
  }

  Ok(())
}

fn warn_about_offpage_ids(table: &ArtworkTable, ids: &[u64]) {
  let visible = table.visible_ids();
  let offpage: Vec<String> =
    ids.iter().copied().filter(|id| !visible.contains(id)).map(|id| id.to_string()).collect();

  if !offpage.is_empty() {
    docent::warn(&format!("Not on this page, ignored: {}", offpage.join(", ")));
  }
}

fn print_help() {
  docent::info("Commands:");
  docent::info("  next (n) / prev (p)    move between pages");
  docent::info("  go N (g N)             jump to page N");
  docent::info("  check IDS (c)          check rows on this page, e.g. 'check 3 7'");
  docent::info("  uncheck IDS (u)        uncheck rows on this page");
  docent::info("  selected (s)           list every selected id");
  docent::info("  clear (x)              clear the selection on every page");
  docent::info("  reload (r)             fetch the current page again");
  docent::info("  quit (q)               leave the browser");
}
