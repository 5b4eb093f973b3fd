//! Task file format.
//!
//! A task file holds one or more task blocks. Each block is two lines:
//! ```text
//! <pages> <frames>
//! <page> <page> <page> ...
//! ```
//! Blank lines between blocks are ignored. A malformed block rejects the
//! whole file; nothing reaches the simulation core.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{Error, PageId, Result};
use crate::task::Task;

/// Parse every task block in `input`.
///
/// # Errors
/// - `Error::Parse` if a header is not exactly two integers, an access is
///   not an integer, or a header has no access line after it
/// - `Error::InvalidTask` if a block parses but describes an invalid task
pub fn parse_tasks(input: &str) -> Result<Vec<Task>> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut tasks = Vec::new();
    while let Some((header_line, header)) = lines.next() {
        let (pages, frames) = parse_header(header_line, header)?;

        let (access_line, accesses) = lines
            .next()
            .ok_or_else(|| Error::parse(header_line, "task header without an access line"))?;
        let accesses = parse_accesses(access_line, accesses)?;

        tasks.push(Task::new(pages, frames, accesses)?);
    }

    debug!("parsed {} task block(s)", tasks.len());
    Ok(tasks)
}

/// Read and parse a task file.
pub fn read_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_tasks(&text)
}

/// Render a task as a block in the task file format (no trailing newline).
pub fn render_task(task: &Task) -> String {
    let accesses: Vec<String> = task.accesses().iter().map(PageId::to_string).collect();
    format!("{} {}\n{}", task.pages(), task.frames(), accesses.join(" "))
}

/// Write a single task block to `path`, replacing the file.
pub fn write_task(path: impl AsRef<Path>, task: &Task) -> Result<()> {
    fs::write(path, render_task(task))?;
    Ok(())
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize)> {
    let numbers = text
        .split_whitespace()
        .map(|token| parse_number(line, token))
        .collect::<Result<Vec<_>>>()?;

    match numbers.as_slice() {
        [pages, frames] => Ok((*pages, *frames)),
        _ => Err(Error::parse(
            line,
            format!("expected `<pages> <frames>`, found {} value(s)", numbers.len()),
        )),
    }
}

fn parse_accesses(line: usize, text: &str) -> Result<Vec<PageId>> {
    text.split_whitespace()
        .map(|token| parse_number(line, token).map(PageId::new))
        .collect()
}

fn parse_number(line: usize, token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| Error::parse(line, format!("`{}` is not a non-negative integer", token)))
}
