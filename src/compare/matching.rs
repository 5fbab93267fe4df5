//! Greedy multiset matching.
//!
//! Each expected item, in order, takes the first unused actual item that
//! satisfies the predicate. There is no backtracking: a permissive
//! expectation listed early can claim the only actual item a later, more
//! specific expectation could match, and the assignment then fails even
//! though a one-to-one matching exists. Fixtures rely on this policy, so it
//! is kept as is.

use tracing::trace;

/// Outcome of [`assign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assignment {
    /// Every expected item found a distinct actual item; `used` actual items
    /// were claimed.
    Complete { used: usize },
    /// The expected item at this index found no unused match.
    Unmatched { expected: usize },
}

impl Assignment {
    /// Whether the assignment is acceptable: all expected items matched and,
    /// unless `included`, every actual item was claimed.
    pub(crate) fn covers(&self, actual_len: usize, included: bool) -> bool {
        match *self {
            Assignment::Complete { used } => included || used == actual_len,
            Assignment::Unmatched { .. } => false,
        }
    }
}

pub(crate) fn assign<A, E>(
    actual: &[A],
    expected: &[E],
    mut matches: impl FnMut(&A, &E) -> bool,
) -> Assignment {
    // Call-scoped claim markers, indexed by actual position.
    let mut claimed = vec![false; actual.len()];
    let mut used = 0;

    for (ei, e) in expected.iter().enumerate() {
        match (0..actual.len()).find(|&ai| !claimed[ai] && matches(&actual[ai], e)) {
            Some(ai) => {
                trace!(expected = ei, actual = ai, "matched");
                claimed[ai] = true;
                used += 1;
            }
            None => {
                trace!(expected = ei, "no unused match");
                return Assignment::Unmatched { expected: ei };
            }
        }
    }

    Assignment::Complete { used }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation() {
        let a = assign(&[3, 1, 2], &[1, 2, 3], |a, e| a == e);
        assert_eq!(a, Assignment::Complete { used: 3 });
        assert!(a.covers(3, false));
    }

    #[test]
    fn test_duplicates_claim_distinct_items() {
        assert_eq!(assign(&[1, 2], &[1, 1], |a, e| a == e), Assignment::Unmatched { expected: 1 });
        assert_eq!(assign(&[1, 1], &[1, 1], |a, e| a == e), Assignment::Complete { used: 2 });
    }

    #[test]
    fn test_included_allows_leftovers() {
        let a = assign(&[1, 2, 3], &[1, 2], |a, e| a == e);
        assert!(a.covers(3, true));
        assert!(!a.covers(3, false));
    }

    #[test]
    fn test_greedy_does_not_backtrack() {
        // Expected "any" is listed first and claims 10, the only item
        // expected "10" could match.
        let actual = [10, 20];
        let expected = [None, Some(10)];
        let a = assign(&actual, &expected, |a, e| e.is_none_or(|e| *a == e));
        assert_eq!(a, Assignment::Unmatched { expected: 1 });

        // The same items in the other order succeed.
        let expected = [Some(10), None];
        let a = assign(&actual, &expected, |a, e| e.is_none_or(|e| *a == e));
        assert_eq!(a, Assignment::Complete { used: 2 });
    }
}
