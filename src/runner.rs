//! Batch runner over task files.
//!
//! For every input file `<path>`, the report of each task block is written
//! to `<path>.out`, reports separated by a blank line. Every rendered trace
//! is the one the validator replayed, and nothing is written unless all of
//! them pass, so a policy bug fails the run instead of producing a wrong
//! report.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use log::info;

use crate::common::config::OUTPUT_EXTENSION;
use crate::common::Result;
use crate::report::report_batch;
use crate::task::read_tasks;

/// Path the report for `input` is written to: `<input>.out`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Run every task in `input` and write the reports next to it.
///
/// Returns the path of the written report.
pub fn run_file(input: &Path) -> Result<PathBuf> {
    let tasks = read_tasks(input)?;

    let workers = thread::available_parallelism().map_or(1, |n| n.get());
    let mut rendered = report_batch(&tasks, workers)?.join("\n\n");
    rendered.push('\n');

    let output = output_path(input);
    fs::write(&output, rendered)?;
    info!(
        "{}: {} task(s) -> {}",
        input.display(),
        tasks.len(),
        output.display()
    );
    Ok(output)
}

/// Run [`run_file`] on every path in order, stopping at the first error.
pub fn run_from_files<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    inputs.iter().map(|input| run_file(input.as_ref())).collect()
}
