//! Ranking stage.

use configurator_core::ScoredCandidate;

/// Order candidates best first, leaving the input untouched.
///
/// Higher scores come first. Equal scores put the cheaper product first, and
/// candidates equal on both keep their input order.
///
/// # Examples
/// ```
/// use configurator_core::test_support::candidate;
/// use configurator_pipeline::rank;
///
/// let ranked = rank(&[candidate("a", 500, 70), candidate("b", 400, 70), candidate("c", 900, 90)]);
/// let ids: Vec<_> = ranked.iter().map(|c| c.product.id.as_str()).collect();
/// assert_eq!(ids, ["c", "b", "a"]);
/// ```
#[must_use]
pub fn rank(candidates: &[ScoredCandidate]) -> Vec<ScoredCandidate> {
    rank_owned(candidates.to_vec())
}

/// Order an owned list of candidates best first.
///
/// Same ordering as [`rank`], without copying the input.
#[must_use]
pub fn rank_owned(mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    candidates.sort_by(|lhs, rhs| {
        rhs.score
            .cmp(&lhs.score)
            .then_with(|| lhs.price().cmp(&rhs.price()))
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use configurator_core::test_support::candidate;
    use rstest::rstest;

    fn ids(candidates: &[ScoredCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.product.id.as_str()).collect()
    }

    #[rstest]
    fn higher_scores_rank_first() {
        let ranked = rank(&[candidate("low", 100, 10), candidate("high", 900, 90)]);
        assert_eq!(ids(&ranked), ["high", "low"]);
    }

    #[rstest]
    fn ties_prefer_cheaper_products() {
        let ranked = rank(&[
            candidate("dear", 600_000, 48),
            candidate("cheap", 400_000, 48),
        ]);
        assert_eq!(ids(&ranked), ["cheap", "dear"]);
    }

    #[rstest]
    fn full_ties_keep_input_order() {
        let input = [
            candidate("first", 500, 60),
            candidate("second", 500, 60),
            candidate("third", 500, 60),
        ];
        assert_eq!(ids(&rank(&input)), ["first", "second", "third"]);
    }

    #[rstest]
    fn input_is_untouched() {
        let input = vec![candidate("a", 100, 10), candidate("b", 100, 90)];
        let before = input.clone();
        let ranked = rank(&input);
        assert_eq!(input, before);
        assert_eq!(ids(&ranked), ["b", "a"]);
    }

    #[rstest]
    fn empty_input_ranks_to_empty() {
        assert!(rank(&[]).is_empty());
    }
}
