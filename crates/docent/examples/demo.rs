//! Run with `cargo run --example demo -p docent` to see every level.

fn main() {
  docent::announce("docent demo");

  docent::info("an informational line");
  docent::warn("a warning line");
  docent::error("an error line");
  docent::debug("a debug line");
  docent::success("a success line");

  docent::event_info("a timestamped event");

  docent::as_banner(|msg| println!("{msg}"), "banners work on stdout too", Some(40), Some('~'));
}
