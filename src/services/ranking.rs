use crate::models::{Book, Tone};
use std::cmp::Ordering;

/// Apply the category filter, the result bound, and the tone re-rank, in
/// that order.
///
/// The ordering is deliberate and asymmetric:
/// - `"ALL"` takes the top `final_top_k` by raw semantic relevance;
/// - a specific category takes the top `final_top_k` *within* that category,
///   reaching deeper into the candidate pool if needed.
///
/// Truncation always happens before tone ranking. Tone sorting therefore
/// only reorders an already-bounded set and can never pull in a candidate
/// ranked outside the first `final_top_k` matches. That bound-first behavior
/// is a design constant of this engine, not an accident; tests pin it.
///
/// A category with no matching candidates yields an empty result, and an
/// unrecognized tone has already been parsed to [`Tone::All`] upstream.
pub fn select_and_rank(
    candidates: Vec<Book>,
    category: &str,
    tone: Tone,
    final_top_k: usize,
) -> Vec<Book> {
    let mut selected: Vec<Book> = if category == "ALL" {
        candidates
    } else {
        candidates
            .into_iter()
            .filter(|b| b.category.as_deref() == Some(category))
            .collect()
    };

    selected.truncate(final_top_k);

    // Stable sort: ties keep their semantic-relevance order.
    if tone != Tone::All {
        selected.sort_by(|a, b| {
            let a_score = tone.emotion_score(a).unwrap_or(f64::NEG_INFINITY);
            let b_score = tone.emotion_score(b).unwrap_or(f64::NEG_INFINITY);
            b_score.partial_cmp(&a_score).unwrap_or(Ordering::Equal)
        });
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::resolver::tests::book;

    fn isbns(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.isbn.as_str()).collect()
    }

    #[test]
    fn all_category_keeps_semantic_order() {
        let candidates = vec![
            book("111", "Fiction", 0.9),
            book("222", "Fiction", 0.1),
            book("333", "Nonfiction", 0.5),
        ];

        let result = select_and_rank(candidates, "ALL", Tone::All, 16);
        assert_eq!(isbns(&result), vec!["111", "222", "333"]);
    }

    #[test]
    fn category_filter_keeps_only_matching_books() {
        let candidates = vec![
            book("111", "Fiction", 0.9),
            book("333", "Nonfiction", 0.5),
            book("222", "Fiction", 0.1),
        ];

        let result = select_and_rank(candidates, "Fiction", Tone::All, 16);
        assert_eq!(isbns(&result), vec!["111", "222"]);
        assert!(result.iter().all(|b| b.category.as_deref() == Some("Fiction")));
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let candidates = vec![book("111", "Fiction", 0.9)];
        let result = select_and_rank(candidates, "Poetry", Tone::All, 16);
        assert!(result.is_empty());
    }

    #[test]
    fn result_is_bounded_by_final_top_k() {
        let candidates: Vec<Book> = (0..40)
            .map(|i| book(&format!("{:03}", i), "Fiction", 0.5))
            .collect();

        let result = select_and_rank(candidates, "ALL", Tone::All, 16);
        assert_eq!(result.len(), 16);
    }

    #[test]
    fn specific_category_reaches_deeper_than_the_bound() {
        // 3 Fiction books sit behind 4 Nonfiction ones; with final_top_k=4
        // the Fiction request must still find all 3.
        let mut candidates: Vec<Book> = (0..4)
            .map(|i| book(&format!("n{}", i), "Nonfiction", 0.5))
            .collect();
        candidates.extend((0..3).map(|i| book(&format!("f{}", i), "Fiction", 0.5)));

        let result = select_and_rank(candidates, "Fiction", Tone::All, 4);
        assert_eq!(isbns(&result), vec!["f0", "f1", "f2"]);
    }

    #[test]
    fn tone_sort_is_descending_on_the_matching_score() {
        let candidates = vec![
            book("222", "Fiction", 0.1),
            book("111", "Fiction", 0.9),
            book("333", "Fiction", 0.5),
        ];

        let result = select_and_rank(candidates, "ALL", Tone::Happy, 16);
        assert_eq!(isbns(&result), vec!["111", "333", "222"]);
        assert!(result.windows(2).all(|w| w[0].joy >= w[1].joy));
    }

    #[test]
    fn tone_ties_keep_semantic_order() {
        let candidates = vec![
            book("aaa", "Fiction", 0.5),
            book("bbb", "Fiction", 0.5),
            book("ccc", "Fiction", 0.5),
        ];

        let result = select_and_rank(candidates, "ALL", Tone::Happy, 16);
        assert_eq!(isbns(&result), vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn truncation_happens_before_tone_ranking() {
        // The joyful book sits just outside the bound; tone ranking must not
        // rescue it.
        let candidates = vec![
            book("111", "Fiction", 0.2),
            book("222", "Fiction", 0.3),
            book("999", "Fiction", 0.9),
        ];

        let result = select_and_rank(candidates, "ALL", Tone::Happy, 2);
        assert_eq!(isbns(&result), vec!["222", "111"]);
    }

    #[test]
    fn reranking_is_deterministic() {
        let candidates = vec![
            book("111", "Fiction", 0.9),
            book("222", "Fiction", 0.1),
            book("333", "Fiction", 0.5),
        ];

        let first = select_and_rank(candidates.clone(), "Fiction", Tone::Happy, 16);
        let second = select_and_rank(candidates, "Fiction", Tone::Happy, 16);
        assert_eq!(isbns(&first), isbns(&second));
    }
}
