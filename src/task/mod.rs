//! Simulation inputs.
//!
//! A [`Task`] is the immutable value the simulation core consumes. It can
//! only be built through [`Task::new`], which rejects malformed input, so
//! the core is free to assume every task it sees is well-formed.
//!
//! # Components
//! - [`Task`] - Page count, frame count and access sequence
//! - [`parser`] - Reading task blocks from text files
//! - [`generator`] - Random access sequences

pub mod generator;
pub mod parser;

use crate::common::config::{FIRST_PAGE, MAX_FRAMES, MAX_PAGES};
use crate::common::{Error, PageId, Result};

pub use generator::generate_access_sequence;
pub use parser::{parse_tasks, read_tasks, render_task, write_task};

/// A page-replacement problem: `pages` logical pages, `frames` physical
/// frames and the ordered pages accessed.
///
/// # Example
/// ```
/// use pagesim::Task;
///
/// let task = Task::from_numbers(5, 3, &[1, 3, 2, 4]).unwrap();
/// assert_eq!(task.len(), 4);
/// assert!(Task::from_numbers(5, 3, &[6]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pages: usize,
    frames: usize,
    accesses: Vec<PageId>,
}

impl Task {
    /// Build a task, validating every field.
    ///
    /// # Errors
    /// `Error::InvalidTask` if `pages` or `frames` is zero or above
    /// [`MAX_PAGES`] / [`MAX_FRAMES`], or if an access lies outside
    /// `1..=pages`.
    pub fn new(pages: usize, frames: usize, accesses: Vec<PageId>) -> Result<Self> {
        if pages == 0 {
            return Err(Error::InvalidTask("page count must be positive".into()));
        }
        if frames == 0 {
            return Err(Error::InvalidTask("frame count must be positive".into()));
        }
        if pages > MAX_PAGES {
            return Err(Error::InvalidTask(format!(
                "page count {} exceeds the limit of {}",
                pages, MAX_PAGES
            )));
        }
        if frames > MAX_FRAMES {
            return Err(Error::InvalidTask(format!(
                "frame count {} exceeds the limit of {}",
                frames, MAX_FRAMES
            )));
        }
        if let Some((index, page)) = accesses
            .iter()
            .enumerate()
            .find(|(_, page)| page.0 < FIRST_PAGE || page.0 > pages)
        {
            return Err(Error::InvalidTask(format!(
                "access {} is page {}, outside 1..={}",
                index, page, pages
            )));
        }

        Ok(Self {
            pages,
            frames,
            accesses,
        })
    }

    /// Build a task from plain page numbers.
    pub fn from_numbers(pages: usize, frames: usize, accesses: &[usize]) -> Result<Self> {
        Self::new(pages, frames, accesses.iter().copied().map(PageId::new).collect())
    }

    /// Number of logical pages.
    #[inline]
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Number of physical frames.
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The access sequence.
    #[inline]
    pub fn accesses(&self) -> &[PageId] {
        &self.accesses
    }

    /// Number of accesses.
    #[inline]
    pub fn len(&self) -> usize {
        self.accesses.len()
    }

    /// True when there are no accesses at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accesses.is_empty()
    }

    /// The same task restricted to its first `len` accesses.
    ///
    /// Used by the score curve, where the offline policy must not see
    /// accesses beyond the prefix being scored.
    pub fn prefix(&self, len: usize) -> Task {
        Task {
            pages: self.pages,
            frames: self.frames,
            accesses: self.accesses[..len.min(self.accesses.len())].to_vec(),
        }
    }

    /// A task with a uniformly random access sequence of length `len`.
    ///
    /// # Errors
    /// `Error::InvalidTask` under the same rules as [`Task::new`].
    pub fn random<R: rand::Rng + ?Sized>(
        pages: usize,
        frames: usize,
        len: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if pages == 0 {
            return Err(Error::InvalidTask("page count must be positive".into()));
        }
        Self::new(pages, frames, generate_access_sequence(pages, len, rng))
    }
}
