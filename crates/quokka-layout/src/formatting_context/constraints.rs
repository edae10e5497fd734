//! The min/max override loop.
//!
//! [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
//! and [§ 10.7 Minimum and maximum heights](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
//! describe the same algorithm for both axes, so it is written once over any
//! candidate geometry.

use quokka_style::Au;

/// Pick the final geometry for one axis.
///
/// `compute` solves the box-model equation, with the size fixed to its
/// argument when present. `size_of` extracts the size from a candidate.
///
/// STEP 1: Solve without a fixed size.
/// STEP 2: If `max` applies and the tentative size exceeds the solution at
///   `max`, that solution becomes the candidate.
/// STEP 3: If `min` applies and the candidate size is below the solution at
///   `min`, that solution replaces the candidate.
///
/// STEP 3 runs after STEP 2 unconditionally, so `min` wins when the two
/// conflict: "If the resulting width is smaller than 'min-width', the rules
/// above are applied again, but this time using the value of 'min-width' as
/// the computed value for 'width'."
pub fn resolve_with_size_constraints<G>(
    mut compute: impl FnMut(Option<Au>) -> G,
    size_of: impl Fn(&G) -> Au,
    max: Option<Au>,
    min: Option<Au>,
) -> G {
    let mut candidate = compute(None);

    if let Some(max) = max {
        let max_candidate = compute(Some(max));
        if size_of(&candidate) > size_of(&max_candidate) {
            candidate = max_candidate;
        }
    }

    if let Some(min) = min {
        let min_candidate = compute(Some(min));
        if size_of(&candidate) < size_of(&min_candidate) {
            candidate = min_candidate;
        }
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: i32) -> Au {
        Au::from_px(value)
    }

    /// A solver whose unconstrained answer is `natural`.
    fn resolve(natural: i32, max: Option<i32>, min: Option<i32>) -> Au {
        resolve_with_size_constraints(
            |used: Option<Au>| used.unwrap_or(px(natural)),
            |size: &Au| *size,
            max.map(px),
            min.map(px),
        )
    }

    #[test]
    fn test_no_constraints_keeps_tentative_size() {
        assert_eq!(resolve(300, None, None), px(300));
    }

    #[test]
    fn test_max_applies_only_when_exceeded() {
        assert_eq!(resolve(300, Some(200), None), px(200));
        assert_eq!(resolve(150, Some(200), None), px(150));
    }

    #[test]
    fn test_min_wins_over_smaller_max() {
        assert_eq!(resolve(300, Some(200), Some(250)), px(250));
    }

    #[test]
    fn test_min_raises_small_tentative_size() {
        assert_eq!(resolve(100, None, Some(120)), px(120));
    }

    #[test]
    fn test_solver_call_count() {
        let mut calls = Vec::new();
        let _ = resolve_with_size_constraints(
            |used: Option<Au>| {
                calls.push(used);
                used.unwrap_or(px(10))
            },
            |size: &Au| *size,
            Some(px(5)),
            Some(px(8)),
        );
        assert_eq!(calls, vec![None, Some(px(5)), Some(px(8))]);
    }
}
