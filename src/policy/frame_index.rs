//! Ordered `(key, frame)` index shared by the keyed policies.

use std::collections::BTreeSet;

use crate::common::config::FIRST_FRAME;
use crate::common::FrameId;

/// One entry per frame, ordered by `(key, frame)`.
///
/// The current key of every frame is mirrored in `keys` so an entry can be
/// found and removed in O(log F) without knowing which page owns the frame.
/// Keys are never changed in place: [`rekey`](Self::rekey) removes the old
/// entry and inserts a new one.
///
/// Among entries with equal keys the smallest frame id is always picked,
/// whether the policy wants the minimum or the maximum key.
#[derive(Debug)]
pub struct FrameIndex<K: Ord + Copy> {
    /// `(key, frame)` pairs in ascending order.
    order: BTreeSet<(K, FrameId)>,

    /// Current key of each frame, indexed by frame number.
    keys: Vec<K>,
}

impl<K: Ord + Copy> FrameIndex<K> {
    /// Create an index holding frames `1..=frames`, all keyed `initial`.
    pub fn new(frames: usize, initial: K) -> Self {
        let order = (FIRST_FRAME..FIRST_FRAME + frames)
            .map(|f| (initial, FrameId::new(f)))
            .collect();

        Self {
            order,
            keys: vec![initial; frames + FIRST_FRAME],
        }
    }

    /// Replace the key of `frame`.
    pub fn rekey(&mut self, frame: FrameId, key: K) {
        let old = self.keys[frame.0];
        let removed = self.order.remove(&(old, frame));
        debug_assert!(removed, "{} missing from the frame index", frame);

        self.keys[frame.0] = key;
        self.order.insert((key, frame));
    }

    /// Current key of `frame`.
    #[inline]
    pub fn key(&self, frame: FrameId) -> K {
        self.keys[frame.0]
    }

    /// Frame with the smallest key.
    pub fn min_frame(&self) -> Option<FrameId> {
        self.order.first().map(|&(_, frame)| frame)
    }

    /// Frame with the largest key, smallest frame id among equals.
    pub fn max_frame(&self) -> Option<FrameId> {
        let &(max_key, _) = self.order.last()?;
        self.order
            .range((max_key, FrameId::new(0))..)
            .next()
            .map(|&(_, frame)| frame)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_ties_pick_lowest_frame() {
        let index = FrameIndex::new(3, 0usize);
        assert_eq!(index.len(), 3);
        assert_eq!(index.min_frame(), Some(FrameId::new(1)));
        assert_eq!(index.max_frame(), Some(FrameId::new(1)));
    }

    #[test]
    fn test_rekey_moves_entry() {
        let mut index = FrameIndex::new(3, 0usize);

        index.rekey(FrameId::new(1), 5);
        index.rekey(FrameId::new(2), 9);

        assert_eq!(index.len(), 3);
        assert_eq!(index.key(FrameId::new(2)), 9);
        assert_eq!(index.min_frame(), Some(FrameId::new(3)));
        assert_eq!(index.max_frame(), Some(FrameId::new(2)));
    }

    #[test]
    fn test_max_ties_pick_lowest_frame() {
        let mut index = FrameIndex::new(4, 0usize);
        index.rekey(FrameId::new(4), 7);
        index.rekey(FrameId::new(2), 7);
        index.rekey(FrameId::new(3), 7);

        assert_eq!(index.max_frame(), Some(FrameId::new(2)));
    }

    #[test]
    fn test_option_keys_order_none_first() {
        let mut index: FrameIndex<Option<usize>> = FrameIndex::new(2, None);
        index.rekey(FrameId::new(1), Some(0));

        assert_eq!(index.min_frame(), Some(FrameId::new(2)));
    }

    #[test]
    fn test_empty_index() {
        let index = FrameIndex::new(0, 0usize);
        assert!(index.is_empty());
        assert_eq!(index.min_frame(), None);
        assert_eq!(index.max_frame(), None);
    }
}
