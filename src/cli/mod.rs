//! Command-line front end
//!
//! Each subcommand maps onto one builder or schema function, except
//! `upload`, which stores a file through `Uploader`. Statements
//! go to whatever `Executor` the caller hands in; the `sqlkit` binary uses
//! a `WriterExecutor` over stdout.

pub mod shell;

use crate::builder::{self, KeySet, RowInsert, RowUpdate, TableBuilder};
use crate::executor::{Executor, OutputFormat};
use crate::parser::{parse_column_definition, parse_position};
use crate::types::{ColumnSpec, Position, SqlError};
use crate::upload::{IncomingFile, Uploader, UPLOAD_OK};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// sqlkit - build MySQL DDL/DML statements from the command line
#[derive(Parser, Debug)]
#[command(name = "sqlkit")]
#[command(about = "Build MySQL DDL/DML statements", long_about = None)]
pub struct Args {
    /// Output format: sql or json
    #[arg(short = 'f', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Text appended to every printed statement
    #[arg(short = 't', long, global = true)]
    pub terminator: Option<String>,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// CREATE TABLE from column definitions
    CreateTable {
        table: String,
        /// Column definition, e.g. "email VARCHAR(255) NOT NULL" (repeatable)
        #[arg(short = 'c', long = "column")]
        columns: Vec<String>,
        /// Clause appended verbatim, e.g. "INDEX (`email`)" (repeatable)
        #[arg(long = "raw")]
        raw: Vec<String>,
        /// JSON file holding an array of column specs, added before --column
        #[arg(long)]
        spec: Option<PathBuf>,
    },
    /// INSERT one row
    Insert {
        table: String,
        /// column=value pair (repeatable)
        #[arg(short = 's', long = "set")]
        set: Vec<String>,
        /// Positional value in table column order (repeatable)
        #[arg(long = "value", conflicts_with = "set")]
        values: Vec<String>,
    },
    /// UPDATE rows
    Update {
        table: String,
        /// column=value pair (repeatable)
        #[arg(short = 's', long = "set", required = true)]
        set: Vec<String>,
        /// Raw condition including WHERE, e.g. "WHERE id=1"
        #[arg(short = 'w', long = "where")]
        condition: Option<String>,
    },
    /// ALTER TABLE ... ADD column
    AddColumn {
        table: String,
        definition: String,
        /// FIRST, LAST or AFTER <column>
        #[arg(short = 'p', long, default_value = "LAST")]
        position: String,
    },
    /// ALTER TABLE ... CHANGE column; the definition's name is the new name
    AlterColumn {
        table: String,
        column: String,
        definition: String,
        /// FIRST, LAST or AFTER <column>
        #[arg(short = 'p', long, default_value = "LAST")]
        position: String,
    },
    /// ALTER TABLE ... DROP column
    DropColumn { table: String, column: String },
    /// DROP TABLE
    DropTable { table: String },
    /// TRUNCATE table
    Truncate { table: String },
    /// Replace the primary key
    PrimaryKey {
        table: String,
        #[arg(required = true)]
        columns: Vec<String>,
    },
    /// Add a unique key
    UniqueKey {
        table: String,
        #[arg(required = true)]
        columns: Vec<String>,
    },
    /// Move FILE into an upload directory after size and format checks
    Upload {
        file: PathBuf,
        /// Target directory
        #[arg(short = 'd', long = "dir", default_value = ".")]
        dir: PathBuf,
        /// Stored name; defaults to FILE's name
        #[arg(short = 'n', long)]
        name: Option<String>,
        /// Size limit in MB, 0 for unlimited
        #[arg(long = "max-size", default_value_t = 0)]
        max_size: u64,
        /// Accepted extension (repeatable); none accepts all
        #[arg(long = "format")]
        formats: Vec<String>,
        /// Replace an existing file of the same name
        #[arg(long)]
        replace: bool,
    },
    /// Interactive shell accepting the commands above, one per line
    Shell,
}

/// Split `column=value` at the first `=`.
pub fn parse_assignment(pair: &str) -> Result<(String, String), SqlError> {
    match pair.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.to_string()))
        }
        _ => Err(SqlError::ParseError(format!("Expected column=value, got '{pair}'"))),
    }
}

fn parse_position_hint(hint: &str) -> Result<Position, SqlError> {
    let trimmed = hint.trim();
    if trimmed.get(..6).is_some_and(|p| p.eq_ignore_ascii_case("AFTER ")) {
        parse_position(trimmed)
    } else {
        Ok(Position::from_hint(trimmed))
    }
}

fn load_spec_file(path: &Path) -> Result<Vec<ColumnSpec>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Build and execute the statement described by `command`.
pub fn run_command<E>(command: &Command, executor: &mut E) -> Result<(), Box<dyn std::error::Error>>
where
    E: Executor + ?Sized,
{
    match command {
        Command::CreateTable { table, columns, raw, spec } => {
            let mut builder = TableBuilder::new(table.as_str());
            if let Some(path) = spec {
                for column in load_spec_file(path)? {
                    builder.add_column(&column);
                }
            }
            for definition in columns {
                builder.add_column(&parse_column_definition(definition)?);
            }
            for clause in raw {
                builder.add_raw_column(clause.as_str());
            }
            builder.execute(executor)?;
        }
        Command::Insert { table, set, values } => {
            let mut insert = RowInsert::new(table.as_str());
            if values.is_empty() {
                for pair in set {
                    let (column, value) = parse_assignment(pair)?;
                    insert.add(column, value);
                }
            } else {
                insert.set_values(values.iter().map(String::as_str));
            }
            insert.execute(executor)?;
        }
        Command::Update { table, set, condition } => {
            let mut update = RowUpdate::new(table.as_str());
            for pair in set {
                let (column, value) = parse_assignment(pair)?;
                update.add(column, value);
            }
            update.execute(executor, condition.as_deref())?;
        }
        Command::AddColumn { table, definition, position } => {
            let spec = parse_column_definition(definition)?;
            builder::add_column(executor, table, &spec, &parse_position_hint(position)?)?;
        }
        Command::AlterColumn { table, column, definition, position } => {
            let spec = parse_column_definition(definition)?;
            builder::alter_column(
                executor,
                table,
                column,
                Some(spec.name.as_str()),
                &spec,
                &parse_position_hint(position)?,
            )?;
        }
        Command::DropColumn { table, column } => builder::drop_column(executor, table, column)?,
        Command::DropTable { table } => builder::drop_table(executor, table)?,
        Command::Truncate { table } => builder::truncate_table(executor, table)?,
        Command::PrimaryKey { table, columns } | Command::UniqueKey { table, columns } => {
            let mut keys = if matches!(command, Command::PrimaryKey { .. }) {
                KeySet::primary(table.as_str())
            } else {
                KeySet::unique(table.as_str())
            };
            for column in columns {
                keys.add_key(column.as_str());
            }
            keys.execute(executor)?;
        }
        Command::Upload { file, dir, name, max_size, formats, replace } => {
            let mut uploader = Uploader::new();
            uploader
                .set_directory(dir)
                .set_file_name(name.as_deref().unwrap_or_default())
                .set_max_size(*max_size)
                .set_file_formats(formats)
                .set_replace_file(*replace);
            let stored = uploader.upload(&IncomingFile::from_path(file)?)?;
            println!("{UPLOAD_OK}: {}", stored.display());
        }
        Command::Shell => {
            return Err(Box::new(SqlError::ParseError(
                "shell cannot be run from inside a command".to_string(),
            )));
        }
    }

    Ok(())
}
