use crate::{Error, Result};

pub const HELP: &str = "\
commands:
  n, next          next page
  p, prev          previous page
  g <page>         go to page (1-based)
  t <row>...       toggle rows on this page (1-based)
  a                select every row on this page
  c                clear this page's selection
  s <count>        select the first <count> rows of the catalog
  x                cancel a running select
  ids              list selected ids
  h                this help
  q                quit";

/// One line of user input. Row and page numbers are kept as typed (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Goto(usize),
    Toggle(Vec<usize>),
    SelectPage,
    ClearPage,
    SelectFirst(i64),
    Cancel,
    ListIds,
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Empty);
    };
    let rest: Vec<&str> = words.collect();
    let invalid = || Error::InvalidCommand(line.trim().to_string());

    let cmd = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("n" | "next", []) => Command::Next,
        ("p" | "prev", []) => Command::Previous,
        ("g" | "go", [page]) => match page.parse::<usize>() {
            Ok(page) if page >= 1 => Command::Goto(page),
            _ => return Err(invalid()),
        },
        ("t" | "toggle", rows) if !rows.is_empty() => {
            let rows = rows
                .iter()
                .map(|r| r.parse::<usize>().ok().filter(|r| *r >= 1))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?;
            Command::Toggle(rows)
        }
        ("a" | "all", []) => Command::SelectPage,
        ("c" | "clear", []) => Command::ClearPage,
        // Anything that isn't a number is reported like a non-positive count.
        ("s" | "select", [count]) => {
            Command::SelectFirst(count.parse::<i64>().map_err(|_| Error::InvalidCount)?)
        }
        ("s" | "select", []) => return Err(Error::InvalidCount),
        ("x" | "cancel", []) => Command::Cancel,
        ("ids", []) => Command::ListIds,
        ("h" | "help" | "?", []) => Command::Help,
        ("q" | "quit" | "exit", []) => Command::Quit,
        _ => return Err(invalid()),
    };
    Ok(cmd)
}
