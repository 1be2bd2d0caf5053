use peggy::commands::browse::BrowseCommand;

#[test]
fn test_parse_navigation_commands() {
  assert_eq!(BrowseCommand::parse("next"), Some(BrowseCommand::Next));
  assert_eq!(BrowseCommand::parse("n"), Some(BrowseCommand::Next));
  assert_eq!(BrowseCommand::parse("prev"), Some(BrowseCommand::Prev));
  assert_eq!(BrowseCommand::parse("p"), Some(BrowseCommand::Prev));
  assert_eq!(BrowseCommand::parse("reload"), Some(BrowseCommand::Reload));
  assert_eq!(BrowseCommand::parse("r"), Some(BrowseCommand::Reload));
}

#[test]
fn test_parse_goto() {
  assert_eq!(BrowseCommand::parse("go 5"), Some(BrowseCommand::Goto(5)));
  assert_eq!(BrowseCommand::parse("g 12"), Some(BrowseCommand::Goto(12)));
  assert_eq!(BrowseCommand::parse("go"), None);
  assert_eq!(BrowseCommand::parse("go five"), None);
}

#[test]
fn test_parse_check_and_uncheck() {
  assert_eq!(BrowseCommand::parse("check 3 7"), Some(BrowseCommand::Check(vec![3, 7])));
  assert_eq!(BrowseCommand::parse("c 42"), Some(BrowseCommand::Check(vec![42])));
  assert_eq!(BrowseCommand::parse("uncheck 7"), Some(BrowseCommand::Uncheck(vec![7])));
  assert_eq!(BrowseCommand::parse("u 1 2 3"), Some(BrowseCommand::Uncheck(vec![1, 2, 3])));

  // Id lists must be present and numeric.
  assert_eq!(BrowseCommand::parse("check"), None);
  assert_eq!(BrowseCommand::parse("check seven"), None);
  assert_eq!(BrowseCommand::parse("uncheck 3 x"), None);
}

#[test]
fn test_parse_selection_commands() {
  assert_eq!(BrowseCommand::parse("selected"), Some(BrowseCommand::Selected));
  assert_eq!(BrowseCommand::parse("s"), Some(BrowseCommand::Selected));
  assert_eq!(BrowseCommand::parse("clear"), Some(BrowseCommand::Clear));
  assert_eq!(BrowseCommand::parse("x"), Some(BrowseCommand::Clear));
}

#[test]
fn test_parse_session_commands() {
  assert_eq!(BrowseCommand::parse("help"), Some(BrowseCommand::Help));
  assert_eq!(BrowseCommand::parse("h"), Some(BrowseCommand::Help));
  assert_eq!(BrowseCommand::parse("?"), Some(BrowseCommand::Help));
  assert_eq!(BrowseCommand::parse("quit"), Some(BrowseCommand::Quit));
  assert_eq!(BrowseCommand::parse("q"), Some(BrowseCommand::Quit));
}

#[test]
fn test_parse_tolerates_whitespace() {
  assert_eq!(BrowseCommand::parse("  next  "), Some(BrowseCommand::Next));
  assert_eq!(BrowseCommand::parse("check   3    7"), Some(BrowseCommand::Check(vec![3, 7])));
}

#[test]
fn test_parse_rejects_unknown_input() {
  assert_eq!(BrowseCommand::parse(""), None);
  assert_eq!(BrowseCommand::parse("   "), None);
  assert_eq!(BrowseCommand::parse("dance"), None);
  assert_eq!(BrowseCommand::parse("12"), None);
}
