//! Tests for the interactive session, driven line by line without a terminal.

use chrono::{TimeZone, Utc};
use numtap::{
    Language, Value,
    console::{
        Palette,
        repl::{Action, Entry, HISTORY_CAPACITY, Session},
    },
};
use pretty_assertions::assert_eq;

/// Feeds one line and returns the action with everything written to stdout
/// and stderr.
fn feed(session: &mut Session, line: &str) -> (Action, String, String) {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let action = session.handle_line(line, &mut out, &mut err)
                        .expect("writing to a buffer cannot fail");
    (action,
     String::from_utf8(out).expect("utf-8 output"),
     String::from_utf8(err).expect("utf-8 output"))
}

fn session() -> Session {
    Session::new(Language::En, Palette::plain())
}

#[test]
fn values_are_printed() {
    let mut session = session();
    let (action, out, err) = feed(&mut session, "2^3 + sqrt(16)");
    assert_eq!(action, Action::Continue);
    assert_eq!(out, "= 12\n");
    assert_eq!(err, "");
}

#[test]
fn variables_persist_between_lines() {
    let mut session = session();
    feed(&mut session, "x = 5");
    let (_, out, _) = feed(&mut session, "x + 3");
    assert_eq!(out, "= 8\n");
    assert_eq!(session.scope().get("x"), Some(&Value::Number(5.0)));
}

#[test]
fn errors_go_to_stderr_and_are_not_recorded() {
    let mut session = session();
    let (action, out, err) = feed(&mut session, "one + 1");
    assert_eq!(action, Action::Continue);
    assert_eq!(out, "");
    assert_eq!(err, "! Undefined symbol: one\n");
    assert!(session.history().is_empty());
    assert_eq!(session.last_result(), None);
}

#[test]
fn errors_use_the_session_language() {
    let mut session = Session::new(Language::Pt, Palette::plain());
    let (_, _, err) = feed(&mut session, "5 / 0");
    assert_eq!(err, "! O resultado é infinito\n");
}

#[test]
fn blank_lines_are_ignored() {
    let mut session = session();
    let (action, out, err) = feed(&mut session, "   ");
    assert_eq!(action, Action::Continue);
    assert_eq!(out, "");
    assert_eq!(err, "");
}

#[test]
fn last_result() {
    let mut session = session();
    let (_, out, _) = feed(&mut session, ".last");
    assert_eq!(out, "No results yet.\n");

    feed(&mut session, "6 * 7");
    let (_, out, _) = feed(&mut session, ".l");
    assert_eq!(out, "Last result: 42\n");
}

#[test]
fn history() {
    let mut session = session();
    let (_, out, _) = feed(&mut session, ".history");
    assert_eq!(out, "History is empty.\n");

    feed(&mut session, "x = 5");
    feed(&mut session, "oops +");
    feed(&mut session, "2 km to meter");

    let (_, out, _) = feed(&mut session, ".his");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Calculation History:");
    assert!(lines[1].starts_with("1. ["), "{}", lines[1]);
    assert!(lines[1].ends_with("] x = 5 = 5"), "{}", lines[1]);
    assert!(lines[2].starts_with("2. ["), "{}", lines[2]);
    assert!(lines[2].ends_with("] 2 km to meter = 2000 meter"), "{}", lines[2]);
}

#[test]
fn help_and_version() {
    let mut session = session();
    let (_, out, _) = feed(&mut session, ".help");
    assert!(out.contains("Commands:"));
    assert!(out.contains(".history, .his"));

    let (_, out, _) = feed(&mut session, ".v");
    assert_eq!(out, format!("Numtap v{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn commands_ignore_case_and_arguments() {
    let mut session = session();
    let (_, out, _) = feed(&mut session, ".HELP me");
    assert!(out.contains("Commands:"));
}

#[test]
fn unknown_command() {
    let mut session = session();
    let (action, out, _) = feed(&mut session, ".frobnicate now");
    assert_eq!(action, Action::Continue);
    assert_eq!(out, "Unknown command: .frobnicate now\n");
}

#[test]
fn clear_screen() {
    let mut session = session();
    let (action, out, _) = feed(&mut session, ".cls");
    assert_eq!(action, Action::ClearScreen);
    assert_eq!(out, "");
    assert_eq!(feed(&mut session, ".clear").0, Action::ClearScreen);
}

#[test]
fn exit_reports_the_number_of_calculations() {
    let mut session = session();
    feed(&mut session, "1 + 1");
    feed(&mut session, "2 + 2");

    let (action, out, _) = feed(&mut session, ".exit");
    assert_eq!(action, Action::Exit);
    assert_eq!(out, "\nGoodbye! Total calculations: 2\n");
    assert_eq!(feed(&mut session, ".Q").0, Action::Exit);
}

#[test]
fn welcome_banner() {
    let (mut out, session) = (Vec::new(), session());
    session.welcome(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Welcome to Numtap!"));
}

#[test]
fn entry_shows_utc_time_of_day() {
    let entry = Entry { time:       Utc.with_ymd_and_hms(2022, 1, 8, 23, 59, 59).unwrap(),
                        expression: "x = 5".to_string(),
                        result:     Value::Number(5.0), };
    assert_eq!(entry.to_string(), "[23:59:59] x = 5 = 5");

    let midnight = Entry { time: Utc.timestamp_opt(0, 0).unwrap(),
                           ..entry };
    assert_eq!(midnight.to_string(), "[00:00:00] x = 5 = 5");
}

#[test]
fn history_keeps_only_the_latest_entries() {
    let mut session = session();
    let total = HISTORY_CAPACITY + 5;
    for n in 1..=total {
        feed(&mut session, &format!("{n} + 0"));
    }

    assert_eq!(session.history().len(), HISTORY_CAPACITY);
    assert_eq!(session.calculations(), total);
    assert_eq!(session.history()[0].expression, "6 + 0");
    assert_eq!(session.last_result(), Some(&Value::Number(total as f64)));

    let (_, out, _) = feed(&mut session, ".history");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), HISTORY_CAPACITY + 1);
    assert!(lines[1].starts_with("6. ["), "{}", lines[1]);
    assert!(lines[HISTORY_CAPACITY].starts_with(&format!("{total}. [")));

    let (_, out, _) = feed(&mut session, ".exit");
    assert_eq!(out, format!("\nGoodbye! Total calculations: {total}\n"));
}
