//! Interactive shell
//!
//! Reads one subcommand per line (same syntax as the command line, without
//! the program name) and runs it against the session's executor.

use std::io::Write;
use clap::Parser;
use comfy_table::{Cell, Table as ComfyTable, presets::UTF8_FULL};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use crate::config::Settings;
use crate::executor::WriterExecutor;
use crate::types::SqlError;
use super::{run_command, Command};

#[derive(Parser, Debug)]
#[command(name = "sqlkit", no_binary_name = true, disable_help_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// Split a line into words. Single and double quotes group words; a quote
/// of the other kind inside them is kept literally.
pub fn split_words(line: &str) -> Result<Vec<String>, SqlError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(SqlError::ParseError(format!("Unterminated {q} quote")));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Statements issued this session as a table.
pub fn render_history(statements: &[String]) -> String {
    if statements.is_empty() {
        return "(no statements)".to_string();
    }

    let mut table = ComfyTable::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![Cell::new("#"), Cell::new("Statement")]);
    for (i, sql) in statements.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(sql)]);
    }

    format!("{table}\n({} statements)", statements.len())
}

fn print_help() {
    println!("Meta-commands:");
    println!("  \\q, \\quit, exit    - Quit");
    println!("  \\history           - Statements issued this session");
    println!("  \\?, \\h, \\help      - Show this help");
    println!();
    println!("Commands: create-table, insert, update, add-column, alter-column,");
    println!("          drop-column, drop-table, truncate, primary-key, unique-key, upload");
    println!("Append --help to any command for its options.");
}

/// Handle one input line. Returns `false` when the session should end.
pub fn handle_line<W: Write>(line: &str, executor: &mut WriterExecutor<W>) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return true;
    }

    match line {
        "\\q" | "\\quit" | "quit" | "exit" => return false,
        "\\history" => {
            println!("{}", render_history(executor.issued()));
            return true;
        }
        "\\?" | "\\h" | "\\help" | "help" => {
            print_help();
            return true;
        }
        _ if line.starts_with('\\') => {
            println!("Unknown meta-command: {line}. Use \\? for help.");
            return true;
        }
        _ => {}
    }

    let words = match split_words(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("✗ {e}");
            return true;
        }
    };

    match ShellLine::try_parse_from(words) {
        Ok(ShellLine { command: Command::Shell }) => println!("Already in the shell."),
        Ok(ShellLine { command }) => {
            if let Err(e) = run_command(&command, executor) {
                eprintln!("✗ {e}");
            }
        }
        // clap renders usage and --help output as errors
        Err(e) => {
            if let Err(err) = e.print() {
                tracing::debug!(error = %err, "could not print usage");
            }
        }
    }
    true
}

// First run: no history file yet
fn is_missing_file(err: &ReadlineError) -> bool {
    matches!(err, ReadlineError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
}

/// Run the REPL until `\q`, Ctrl+C or Ctrl+D.
pub fn run_shell(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut executor = WriterExecutor::new(
        std::io::stdout(),
        settings.format,
        settings.terminator.as_str(),
    );
    let mut rl = DefaultEditor::new()?;

    let history_file = settings.history_path();
    if let Some(ref path) = history_file {
        match rl.load_history(path) {
            Ok(()) => {}
            Err(e) if is_missing_file(&e) => {
                tracing::debug!(path = %path.display(), "no shell history yet");
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not load shell history"),
        }
    }

    println!("sqlkit shell. Type \\? for help, \\q to quit.\n");

    loop {
        match rl.readline("sqlkit> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.trim()) {
                        tracing::debug!(error = %e, "could not record history entry");
                    }
                }
                if !handle_line(&line, &mut executor) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("quit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                return Err(err.into());
            }
        }
    }

    if let Some(ref path) = history_file {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(error = %e, "could not save shell history");
        }
    }

    Ok(())
}
