//! Random access sequences.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::common::config::FIRST_PAGE;
use crate::common::PageId;

/// Draw `len` pages uniformly from `1..=pages`.
///
/// # Panics
/// Panics if `pages` is 0.
pub fn generate_access_sequence<R: Rng + ?Sized>(
    pages: usize,
    len: usize,
    rng: &mut R,
) -> Vec<PageId> {
    assert!(pages > 0, "pages must be > 0");

    let between = Uniform::new_inclusive(FIRST_PAGE, pages);
    (0..len).map(|_| PageId::new(between.sample(rng))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_pages_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let seq = generate_access_sequence(4, 500, &mut rng);

        assert_eq!(seq.len(), 500);
        assert!(seq.iter().all(|p| (1..=4).contains(&p.0)));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = generate_access_sequence(10, 50, &mut StdRng::seed_from_u64(42));
        let b = generate_access_sequence(10, 50, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_page() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = generate_access_sequence(1, 20, &mut rng);
        assert!(seq.iter().all(|p| p.0 == 1));
    }

    #[test]
    #[should_panic(expected = "pages must be > 0")]
    fn test_zero_pages_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        generate_access_sequence(0, 1, &mut rng);
    }
}
