//! The line-driven front end: reads commands, drives a `Session` and writes
//! the table back out. Input and output are generic so the loop runs the same
//! over stdin/stdout and over in-memory buffers.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, warn};

use crate::command::{parse_command, Command, HELP};
use crate::process::Session;
use crate::render::render_page;
use crate::{Error, Result};

enum Event {
    Line(Option<String>),
    BulkDone(Option<Result<usize>>),
}

/// Validation problems go to the user, everything else only to the log.
pub fn report<W: Write>(out: &mut W, err: &Error) -> Result<()> {
    if err.is_validation() {
        writeln!(out, "!! {err}")?;
    } else {
        error!("{err}");
    }
    Ok(())
}

/// Selects the first `requested` rows and writes their ids, one per line.
pub async fn run_once<W: Write>(session: &mut Session, requested: i64, out: &mut W) -> Result<()> {
    session.select_first_n(requested).await?;
    for id in session.selection().sorted_ids() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

fn report_bulk<W: Write>(session: &Session, done: Option<Result<usize>>, out: &mut W) -> Result<()> {
    match done {
        Some(Ok(count)) => {
            writeln!(out, "Selected the first {count} rows.")?;
            write!(out, "{}", render_page(session))?;
        }
        Some(Err(err)) => report(out, &err)?,
        None => {}
    }
    Ok(())
}

/// Runs commands from `input` until `q` or end of input. A bulk select still
/// running at end of input is waited for and reported before returning.
pub async fn run_interactive<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "{}", render_page(session))?;
    writeln!(out, "{HELP}")?;

    loop {
        let bulk_in_flight = session.bulk_in_flight();
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line?),
            done = session.wait_bulk_select(), if bulk_in_flight => Event::BulkDone(done),
        };

        let line = match event {
            Event::BulkDone(done) => {
                report_bulk(session, done, out)?;
                continue;
            }
            Event::Line(None) => {
                if session.bulk_in_flight() {
                    let done = session.wait_bulk_select().await;
                    report_bulk(session, done, out)?;
                }
                return Ok(());
            }
            Event::Line(Some(line)) => line,
        };

        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(err) => {
                report(out, &err)?;
                continue;
            }
        };

        let redraw = match cmd {
            Command::Empty => false,
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                false
            }
            Command::Next => session.next_page().await,
            Command::Previous => session.previous_page().await,
            Command::Goto(page) => {
                if page > session.page_count().max(1) {
                    report(out, &Error::InvalidCommand(format!("no page {page}")))?;
                    false
                } else {
                    session.navigate(page - 1).await
                }
            }
            Command::Toggle(rows) => {
                for row in rows {
                    match session.toggle_row(row - 1) {
                        Err(Error::InvalidRow { len, .. }) => {
                            report(out, &Error::InvalidRow { row, len })?
                        }
                        Err(err) => report(out, &err)?,
                        Ok(()) => {}
                    }
                }
                true
            }
            Command::SelectPage => {
                session.select_all_on_page();
                true
            }
            Command::ClearPage => {
                session.clear_page();
                true
            }
            Command::SelectFirst(requested) => {
                match session.start_select_first_n(requested) {
                    Ok(()) => writeln!(out, "Selecting the first {requested} rows...")?,
                    Err(err) => report(out, &err)?,
                }
                false
            }
            Command::Cancel => {
                if session.cancel_bulk_select() {
                    warn!("Bulk select cancelled");
                    writeln!(out, "Cancelled.")?;
                }
                false
            }
            Command::ListIds => {
                let ids = session.selection().sorted_ids();
                writeln!(out, "{} selected: {ids:?}", ids.len())?;
                false
            }
        };

        if redraw {
            write!(out, "{}", render_page(session))?;
        }
    }

    // Explicit quit drops whatever is still running.
    session.cancel_bulk_select();
    Ok(())
}

#[cfg(test)]
#[path = "tests/repl_tests.rs"]
mod tests;
