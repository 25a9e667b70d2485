//! Property-based tests for the splitter.

use proptest::prelude::*;
use townsplit_rs::{CandidateWord, Classification, Splitter, Vocabulary};

fn candidate(raw: &str) -> CandidateWord {
    CandidateWord::new(raw).expect("generated candidates are never blank")
}

proptest! {
    /// Property: a prefix-only match adds exactly the remainder to the right vocabulary
    #[test]
    fn prop_prefix_match_learns_remainder(
        prefix in "[a-m]{1,6}",
        rest in "[n-z]{1,6}",
        right_entries in proptest::collection::vec("[0-9]{1,3}", 0..5),
    ) {
        let left = Vocabulary::from_entries([prefix.as_str()]);
        let right = Vocabulary::from_entries(&right_entries);
        let right_before = right.len();
        let mut splitter = Splitter::new(left.clone(), right);

        let word = format!("{prefix}{rest}");
        let outcome = splitter.classify(&candidate(&word));

        prop_assert_eq!(outcome.learned(), Some(rest.as_str()));
        prop_assert_eq!(splitter.right().len(), right_before + 1);
        prop_assert!(splitter.right().contains(&rest));
        prop_assert_eq!(splitter.left(), &left);
        prop_assert_eq!(splitter.summary().new_right_count, 1);
    }

    /// Property: a suffix-only match adds exactly the remainder to the left vocabulary
    #[test]
    fn prop_suffix_match_learns_remainder(
        start in "[a-m]{1,6}",
        suffix in "[n-z]{1,6}",
    ) {
        let right = Vocabulary::from_entries([suffix.as_str()]);
        let mut splitter = Splitter::new(Vocabulary::new(), right.clone());

        let word = format!("{start}{suffix}");
        let outcome = splitter.classify(&candidate(&word));

        let is_new_left = matches!(outcome, Classification::NewLeft { .. });
        prop_assert!(is_new_left);
        prop_assert_eq!(splitter.left().iter().collect::<Vec<_>>(), vec![start.as_str()]);
        prop_assert_eq!(splitter.right(), &right);
    }

    /// Property: names explained by both vocabularies never change either one
    #[test]
    fn prop_both_match_is_idempotent(
        prefix in "[a-z]{1,5}",
        middle in "[a-z]{0,5}",
        suffix in "[a-z]{1,5}",
        repeats in 1usize..5,
    ) {
        let left = Vocabulary::from_entries([prefix.as_str()]);
        let right = Vocabulary::from_entries([suffix.as_str()]);
        let mut splitter = Splitter::new(left.clone(), right.clone());
        let word = candidate(&format!("{prefix}{middle}{suffix}"));

        for _ in 0..repeats {
            let outcome = splitter.classify(&word);
            let is_both = matches!(outcome, Classification::BothMatch { .. });
            prop_assert!(is_both);
        }

        prop_assert_eq!(splitter.left(), &left);
        prop_assert_eq!(splitter.right(), &right);
        prop_assert_eq!(splitter.summary().new_left_count, 0);
        prop_assert_eq!(splitter.summary().new_right_count, 0);
        prop_assert_eq!(splitter.summary().both_matched, repeats);
    }

    /// Property: among several valid prefixes the most recently inserted one is used
    #[test]
    fn prop_latest_prefix_wins(
        (word, lengths) in "[a-z]{3,12}".prop_flat_map(|word| {
            let cuts: Vec<usize> = (1..word.len()).collect();
            let count = cuts.len();
            (
                Just(word),
                proptest::sample::subsequence(cuts, 1..=count).prop_shuffle(),
            )
        })
    ) {
        let prefixes: Vec<&str> = lengths.iter().map(|&len| &word[..len]).collect();
        let mut splitter = Splitter::new(Vocabulary::from_entries(&prefixes), Vocabulary::new());

        let outcome = splitter.classify(&candidate(&word));

        let chosen = *lengths.last().unwrap();
        match outcome {
            Classification::NewRight { matched_left, derived, .. } => {
                prop_assert_eq!(matched_left.as_str(), &word[..chosen]);
                prop_assert_eq!(derived.as_str(), &word[chosen..]);
            }
            other => prop_assert!(false, "expected NewRight, got {:?}", other),
        }
    }

    /// Property: blank input never reaches classification
    #[test]
    fn prop_blank_lines_are_skipped(
        words in proptest::collection::vec("[ \t]{0,3}|[a-z]{1,6}", 0..20),
    ) {
        let mut splitter = Splitter::new(Vocabulary::new(), Vocabulary::new());
        let summary = splitter.run(&words);

        let non_blank = words.iter().filter(|w| !w.trim().is_empty()).count();
        prop_assert_eq!(summary.processed, non_blank);
        prop_assert_eq!(summary.unmatched.len(), non_blank);
    }
}
