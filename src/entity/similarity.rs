use strsim::jaro_winkler;

/// Strategy for scoring how alike two normalized entity mentions are.
///
/// Implementations must be symmetric and return a value in [0, 1]. The
/// clusterer compares the score against its configured threshold; swapping
/// the scorer never touches the partition-construction logic.
pub trait SimilarityScorer {
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Matching-block similarity.
///
/// Finds the longest block of characters common to both strings, recurses on
/// the pieces to its left and right, and scores
/// `2 * matched / (len(a) + len(b))`. Identical strings score 1.0, as do two
/// empty strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceScorer;

impl SimilarityScorer for SequenceScorer {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * matched_len(&a, &b) as f64 / total as f64
    }
}

/// Jaro-Winkler similarity, weighted toward common prefixes.
///
/// An alternative scorer that suits person and organization names.
#[derive(Clone, Copy, Debug, Default)]
pub struct JaroWinklerScorer;

impl SimilarityScorer for JaroWinklerScorer {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        jaro_winkler(a, b)
    }
}

fn matched_len(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matched_len(&a[..a_start], &b[..b_start])
        + matched_len(&a[a_start + len..], &b[b_start + len..])
}

/// Longest run of characters contiguous in both slices; the earliest
/// occurrence wins ties.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // suffixes[j + 1]: length of the common suffix ending at a[i] and b[j].
    let mut suffixes = vec![0usize; b.len() + 1];
    for i in 0..a.len() {
        let mut diagonal = 0;
        for j in 0..b.len() {
            let above = suffixes[j + 1];
            if a[i] == b[j] {
                suffixes[j + 1] = diagonal + 1;
                if suffixes[j + 1] > best.2 {
                    best = (
                        i + 1 - suffixes[j + 1],
                        j + 1 - suffixes[j + 1],
                        suffixes[j + 1],
                    );
                }
            } else {
                suffixes[j + 1] = 0;
            }
            diagonal = above;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_strings_score_one() {
        let scorer = SequenceScorer;
        assert_eq!(scorer.ratio("cane", "cane"), 1.0);
        assert_eq!(scorer.ratio("", ""), 1.0);
    }

    #[test]
    fn test_known_ratios() {
        let scorer = SequenceScorer;
        // "bcd" is the longest block; 2 * 3 / 8.
        assert!((scorer.ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
        // Only "a" matches; 2 * 1 / 9.
        assert!((scorer.ratio("gatto", "cane") - 2.0 / 9.0).abs() < 1e-9);
        // No characters in common.
        assert_eq!(scorer.ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_recursion_picks_up_side_blocks() {
        let scorer = SequenceScorer;
        // "ab" matches around the differing middle, plus "d" at the end.
        assert!((scorer.ratio("abxd", "abyd") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry_and_bounds() {
        let scorer = SequenceScorer;
        let pairs = [
            ("gatto", "cane"),
            ("abcd", "bcde"),
            ("microsoft", "microsystems"),
            ("", "cane"),
        ];
        for (a, b) in pairs {
            let forward = scorer.ratio(a, b);
            let backward = scorer.ratio(b, a);
            assert!((forward - backward).abs() < 1e-9);
            assert!((0.0..=1.0).contains(&forward));
        }
    }

    #[test]
    fn test_jaro_winkler_scorer() {
        let scorer = JaroWinklerScorer;
        assert_eq!(scorer.ratio("cane", "cane"), 1.0);
        assert!(scorer.ratio("cane", "gatto") < 1.0);
        assert!(scorer.ratio("martha", "marhta") > 0.9);
    }
}
