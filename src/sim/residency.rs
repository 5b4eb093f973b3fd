//! Frame/page residency bookkeeping.

use crate::common::config::FIRST_FRAME;
use crate::common::{FrameId, PageId};

/// Bidirectional frame <-> page mapping.
///
/// At most one page per frame and one frame per page; both directions are
/// updated together by [`place`](Self::place) so they never disagree.
#[derive(Debug, Clone)]
pub struct Residency {
    /// Page held by each frame, indexed by frame number.
    frame_to_page: Vec<Option<PageId>>,

    /// Frame holding each page, indexed by page number.
    page_to_frame: Vec<Option<FrameId>>,
}

impl Residency {
    /// Empty residency for `pages` pages and `frames` frames.
    pub fn new(pages: usize, frames: usize) -> Self {
        Self {
            frame_to_page: vec![None; frames + FIRST_FRAME],
            page_to_frame: vec![None; pages + 1],
        }
    }

    /// Frame currently holding `page`, if resident.
    #[inline]
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.page_to_frame[page.0]
    }

    #[cfg(test)]
    fn page_in(&self, frame: FrameId) -> Option<PageId> {
        self.frame_to_page[frame.0]
    }

    #[cfg(test)]
    fn is_resident(&self, page: PageId) -> bool {
        self.frame_of(page).is_some()
    }

    /// Put `page` into `frame`, returning the page it evicted.
    ///
    /// If `page` was resident elsewhere its old frame is emptied first.
    pub fn place(&mut self, page: PageId, frame: FrameId) -> Option<PageId> {
        if let Some(old_frame) = self.page_to_frame[page.0].take() {
            self.frame_to_page[old_frame.0] = None;
        }

        let evicted = self.frame_to_page[frame.0].replace(page);
        if let Some(old_page) = evicted {
            self.page_to_frame[old_page.0] = None;
        }
        self.page_to_frame[page.0] = Some(frame);

        evicted.filter(|&old| old != page)
    }

    #[cfg(test)]
    fn occupied(&self) -> usize {
        self.frame_to_page.iter().filter(|p| p.is_some()).count()
    }
}
