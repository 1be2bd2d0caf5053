use docent::*;
use std::cell::RefCell;

#[test]
fn test_basic_logging_functions() {
  // Test that basic logging functions can be called without panicking
  info("Test info message");
  warn("Test warning message");
  error("Test error message");
  debug("Test debug message");
  success("Test success message");
}

#[test]
fn test_multiline_messages() {
  // Test multiline message handling
  let multiline_msg = "First line\nSecond line\nThird line";
  info(multiline_msg);
  warn(multiline_msg);
  error(multiline_msg);
  debug(multiline_msg);
  success(multiline_msg);
}

#[test]
fn test_event_logging() {
  event_info("Session event message");
  event_info("Multi\nline\nevent");
}

#[test]
fn test_banner_line_length_and_fill() {
  assert_eq!(banner_line(5, '='), "=====");
  assert_eq!(banner_line(0, '*'), "");
  assert_eq!(banner_line(3, '-').len(), 3);
}

#[test]
fn test_as_banner_wraps_message() {
  let captured: RefCell<Vec<String>> = RefCell::new(Vec::new());
  as_banner(|msg| captured.borrow_mut().push(msg.to_string()), "hello", Some(10), Some('*'));

  let lines = captured.into_inner();
  assert_eq!(lines.len(), 3);
  assert_eq!(lines[0], "**********");
  assert_eq!(lines[1], "hello");
  assert_eq!(lines[2], "**********");
}

#[test]
fn test_as_banner_defaults() {
  let captured: RefCell<Vec<String>> = RefCell::new(Vec::new());
  as_banner(|msg| captured.borrow_mut().push(msg.to_string()), "defaults", None, None);

  let lines = captured.into_inner();
  assert_eq!(lines[0], "=".repeat(50));
  assert_eq!(lines[2], "=".repeat(50));
}

#[test]
fn test_announce_does_not_panic() {
  announce("Announcement message");
}

#[test]
fn test_empty_message() {
  info("");
  announce("");
}
