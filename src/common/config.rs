//! Configuration constants for pagesim.

/// Number of the first page of a task. Pages are numbered `1..=pages`.
pub const FIRST_PAGE: usize = 1;

/// Number of the first physical frame. Frames are numbered `1..=frames`.
///
/// Residency tables are indexed directly by frame number, so they are
/// allocated with `frames + FIRST_FRAME` slots and slot 0 stays unused.
pub const FIRST_FRAME: usize = 1;

/// Largest page count a task may declare.
///
/// Residency and lookahead tables are sized by page count, so it is bounded
/// to keep every table allocatable and every `pages + 1` from overflowing.
pub const MAX_PAGES: usize = 1 << 24;

/// Largest frame count a task may declare.
pub const MAX_FRAMES: usize = 1 << 24;

/// How a hit (no placement) is rendered in a report line.
pub const HIT_MARKER: &str = "-";

/// Extension appended to a task file's path when writing its report.
pub const OUTPUT_EXTENSION: &str = "out";

/// Default page count for score curves.
pub const DEFAULT_CURVE_PAGES: usize = 3;

/// Default frame count for score curves.
pub const DEFAULT_CURVE_FRAMES: usize = 5;

/// Default number of accesses for score curves.
pub const DEFAULT_CURVE_ACCESSES: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_starts_at_one() {
        assert_eq!(FIRST_PAGE, 1);
        assert_eq!(FIRST_FRAME, 1);
    }

    #[test]
    fn test_limits_leave_room_for_table_slots() {
        assert!(MAX_PAGES.checked_add(FIRST_PAGE).is_some());
        assert!(MAX_FRAMES.checked_add(FIRST_FRAME).is_some());
    }

    #[test]
    fn test_hit_marker_is_not_a_number() {
        assert!(HIT_MARKER.parse::<usize>().is_err());
    }
}
