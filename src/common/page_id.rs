//! Page identifier type.

use std::fmt;

/// Identifies a logical page of a task, numbered `1..=pages`.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: usize) -> Self {
        PageId(id)
    }
}

impl From<usize> for PageId {
    fn from(id: usize) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
