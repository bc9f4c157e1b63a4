//! String-distance primitives for typo-tolerant matching.
//!
//! Pure functions over Unicode scalar values. Case folding is the caller's
//! responsibility: inputs must be lower-cased before comparison.

/// Minimum number of single-character insertions, deletions, or
/// substitutions required to change one string into the other.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two rows instead of the full matrix for space efficiency.
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// Normalized similarity in `[0, 1]`: `1.0` when both strings are empty,
/// otherwise `(max_len - edit_distance) / max_len`. Symmetric under swap.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    (max_len - edit_distance(a, b)) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::{edit_distance, similarity};

    #[test]
    fn edit_distance_handles_identical_strings() {
        assert_eq!(edit_distance("bergamota", "bergamota"), 0);
    }

    #[test]
    fn edit_distance_counts_single_edits() {
        assert_eq!(edit_distance("jasmim", "jasmin"), 1); // substitution
        assert_eq!(edit_distance("rosa", "rosas"), 1); // insertion
        assert_eq!(edit_distance("lavanda", "avanda"), 1); // deletion
    }

    #[test]
    fn edit_distance_matches_classic_example() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn edit_distance_handles_empty_strings() {
        assert_eq!(edit_distance("", "chanel"), 6);
        assert_eq!(edit_distance("chanel", ""), 6);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn edit_distance_counts_accented_chars_as_single_edits() {
        assert_eq!(edit_distance("âmbar", "ambar"), 1);
        assert_eq!(edit_distance("verão", "verao"), 1);
    }

    #[test]
    fn similarity_is_one_for_empty_pair_and_identical_inputs() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("baunilha", "baunilha"), 1.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let pairs = [("chanel", "chanell"), ("dior", "sauvage"), ("", "musk")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn similarity_stays_within_unit_interval() {
        let pairs = [("a", "zzzzzzzz"), ("abc", ""), ("patchouli", "pachouli")];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "similarity({a}, {b}) = {score}");
        }
    }

    #[test]
    fn similarity_of_close_typo_is_high() {
        assert!(similarity("chanel", "chanell") > 0.8);
        assert!(similarity("bergamota", "bergamot") > 0.8);
    }

    #[test]
    fn similarity_of_unrelated_strings_is_low() {
        assert!(similarity("bergamota", "sândalo") < 0.4);
    }
}
