use clap::{Parser, Subcommand};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::info;
use std::error::Error;
use std::io::{stdout, Write};
use std::path::PathBuf;
use tokio::io::{self, AsyncReadExt};

use bipsql_core::storage::{Connection, ConnectionPatch, ConnectionStore, StoreError};
use bipsql_core::table::Row;
use bipsql_core::{QuerySession, ReportClient};

/// Enable raw mode via crossterm, throwing an error if it fails.
/// This disables line-buffering and echo on all supported platforms.
fn set_raw_mode() -> Result<(), Box<dyn Error>> {
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e).into())
}

/// Restore normal terminal mode.
/// crossterm internally remembers the previous mode and restores it.
fn restore_mode() {
    let _ = disable_raw_mode();
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bipsql-rs", version = "0.1.0", subcommand_required = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage stored connections
    #[command(subcommand)]
    Conn(ConnAction),
    /// Run a SQL statement and page through the result
    Query {
        /// Name of the stored connection to use
        #[arg(long)]
        conn: String,
        /// File holding the statement; stdin is read to EOF when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConnAction {
    /// Store a new connection
    Add {
        /// Unique name for the connection
        name: String,
        /// Endpoint URL the statement is POSTed to
        #[arg(long)]
        url: String,
        /// Username for Basic authentication
        #[arg(long)]
        username: String,
        /// Password for Basic authentication
        #[arg(long, default_value = "")]
        password: String,
    },
    /// List stored connections
    List,
    /// Change fields of a stored connection
    Edit {
        /// Name of the connection to change
        name: String,
        /// New name for the connection
        #[arg(long)]
        rename: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Remove a stored connection
    Delete {
        name: String,
    },
}

pub async fn run_cli(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::Conn(action) => run_conn_action(action),
        Command::Query { conn, file } => run_query(conn, file).await,
    }
}

fn run_conn_action(action: ConnAction) -> Result<(), Box<dyn Error>> {
    let mut store = ConnectionStore::open_default()?;
    match action {
        ConnAction::Add {
            name,
            url,
            username,
            password,
        } => {
            store.add(Connection {
                name: name.clone(),
                url,
                username,
                password,
            })?;
            println!("Stored connection '{name}'.");
        }
        ConnAction::List => {
            if store.list().is_empty() {
                println!("No connections stored.");
            }
            for conn in store.list() {
                println!("{}  {}  ({})", conn.name, conn.url, conn.username);
            }
        }
        ConnAction::Edit {
            name,
            rename,
            url,
            username,
            password,
        } => {
            store.update(
                &name,
                ConnectionPatch {
                    name: rename,
                    url,
                    username,
                    password,
                },
            )?;
            println!("Updated connection '{name}'.");
        }
        ConnAction::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted connection '{name}'.");
        }
    }
    Ok(())
}

async fn run_query(conn_name: String, file: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let store = ConnectionStore::open_default()?;
    let conn = store
        .get(&conn_name)
        .ok_or_else(|| StoreError::NotFound(conn_name.clone()))?
        .clone();

    // The statement source doubles as the save signal: whatever the file
    // (or stdin) holds at submit time is what runs.
    let sql = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    info!("Running statement against '{}'", conn.name);
    let mut session = QuerySession::new(ReportClient::new());
    session.run_query(&conn, &sql).await?;

    run_pager_loop(&mut session).await
}

/// Runs the pager loop over the live result.
///
/// The current page is rendered, then the terminal is switched to raw mode
/// and single keystrokes drive the cursor: 'n' advances, 'p' goes back,
/// 'q' (or Ctrl+C) leaves the pager.
async fn run_pager_loop(session: &mut QuerySession) -> Result<(), Box<dyn Error>> {
    render_current_page(session);
    set_raw_mode()?;

    let mut buf = [0u8; 1];
    let mut stdin = io::stdin();
    loop {
        if stdin.read_exact(&mut buf).await.is_err() {
            break;
        }
        match buf[0] {
            b'n' => {
                session.next_page();
                render_current_page(session);
            }
            b'p' => {
                session.prev_page();
                render_current_page(session);
            }
            b'q' | 0x03 => break,
            _ => {}
        }
    }

    restore_mode();
    info!("Terminal mode restored.");
    Ok(())
}

/// Prints the visible slice of the live table.
///
/// The first row of the slice is always set off as the header row; the
/// separator line below it moves with the page, not with the table.
fn render_current_page(session: &QuerySession) {
    let Some(rows) = session.current_page() else {
        return;
    };
    let pager = session.pager().expect("a pager accompanies every table");

    let mut out = stdout();
    // \r\n keeps the output aligned while the terminal is in raw mode.
    let _ = write!(out, "\r\n");
    if rows.is_empty() {
        let _ = write!(out, "(no rows on this page)\r\n");
    } else {
        let widths = column_widths(rows);
        let _ = write!(out, "{}\r\n", format_row(&rows[0], &widths));
        let rule: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
        let _ = write!(out, "{}\r\n", "-".repeat(rule));
        for row in &rows[1..] {
            let _ = write!(out, "{}\r\n", format_row(row, &widths));
        }
    }
    let _ = write!(
        out,
        "page {}/{}  (n)ext (p)rev (q)uit\r\n",
        pager.page_index() + 1,
        pager.max_page() + 1
    );
    let _ = out.flush();
}

/// Widest cell per column across the visible rows.
fn column_widths(rows: &[Row]) -> Vec<usize> {
    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }
    widths
}

fn format_row(row: &Row, widths: &[usize]) -> String {
    row.iter()
        .enumerate()
        .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ")
}
