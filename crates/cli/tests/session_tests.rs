//! End-to-end tests driving the shell the way a user would, over in-memory streams.

use envelope_cli::handlers::{dispatch, Outcome, Session};
use envelope_cli::repl::Repl;
use envelope_cli::terminal::{Terminal, Theme};
use envelope_core::command::tokenize;
use envelope_core::file_handling::WriteMode;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

type MemoryTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

fn terminal(input: &str) -> MemoryTerminal {
    Terminal::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Theme::plain(),
    )
}

/// Runs one command line with `input` as the answers to its questions.
fn run(session: &Session, line: &str, input: &str) -> String {
    let mut terminal = terminal(input);
    let outcome = dispatch(session, &mut terminal, &tokenize(line)).unwrap();
    let Outcome::Report(message) = outcome else {
        panic!("Expected a report for `{line}`");
    };
    terminal.show(&message).unwrap();
    String::from_utf8(terminal.into_output()).unwrap()
}

fn content(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_database_file_scenario() {
    let dir = tempdir().unwrap();
    let session = Session::new(dir.path(), WriteMode::Atomic);
    let path = dir.path().join("db.env");

    run(&session, "create db -s", "");
    assert_eq!(content(&path), "");

    run(&session, "add db -var HOST", "localhost\n");
    assert_eq!(content(&path), "HOST=localhost\n");

    let output = run(&session, "get db HOST", "");
    assert!(output.contains("Variable(s)/Value found!\n-HOST=localhost"));

    run(&session, "update db -var HOST", "127.0.0.1\n");
    assert_eq!(content(&path), "HOST=127.0.0.1\n");

    run(&session, "remove db -var HOST", "y\n");
    assert!(!content(&path).contains("HOST"));

    run(&session, "delete db -v", "");
    assert!(!path.exists());
}

#[test]
fn test_scenario_through_the_loop() {
    let dir = tempdir().unwrap();
    let input = "\
-create db -s
-add db -var HOST PORT
localhost
5432
-get db port
-update db -var HOST -p
127.0.0.1
y
-rename db database
-read database
-remove database -var PORT
y
q
";
    let mut repl = Repl::new(
        Session::new(dir.path(), WriteMode::InPlace),
        terminal(input),
        false,
    );

    repl.run().unwrap();

    let output = String::from_utf8(repl.into_terminal().into_output()).unwrap();
    assert!(output.contains("-PORT=5432"));
    assert!(output.contains("HOST successfully updated!"));
    assert!(output.contains("1 of 1 variable(s) updated."));
    assert!(output.contains("HOST=127.0.0.1\nPORT=5432\n"));
    assert!(output.contains("Variable(s) removed!"));

    assert!(!dir.path().join("db.env").exists());
    assert_eq!(content(&dir.path().join("database.env")), "HOST=127.0.0.1\n");
}

#[test]
fn test_mistakes_are_reported_and_the_loop_continues() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("db.env"), "HOST=localhost\n").unwrap();
    let input = "\
read
get db USER
add db HOST
remove db -var
update db -var PORT
delete db
maybe
rename db
db
help explode
q
";
    let mut repl = Repl::new(
        Session::new(dir.path(), WriteMode::Atomic),
        terminal(input),
        false,
    );

    repl.run().unwrap();

    let output = String::from_utf8(repl.into_terminal().into_output()).unwrap();
    assert!(output.contains("Expected one argument!"));
    assert!(output.contains("USER variable/value doesn't exist!"));
    assert!(output.contains("Incorrect use of command `add`"));
    assert!(output.contains("Incorrect use of command `remove`"));
    assert!(output.contains("PORT variable/value doesn't exist!"));
    assert!(output.contains("Unknown response!"));
    assert!(output.contains("File not deleted!"));
    assert!(output.contains("already exists!"));
    assert!(output.contains("Invalid command: `explode`"));

    assert_eq!(content(&dir.path().join("db.env")), "HOST=localhost\n");
}
