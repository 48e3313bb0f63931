use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading determiners, consumed in one pass so "il la cane" cannot
    // leave a fresh article at the front of the result.
    static ref LEADING_ARTICLES: Regex =
        Regex::new(r"^\s*(?:(?:il|la|lo|i|gli|le|un|uno|una|the|a|an)\s+)+").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Canonicalize a raw entity mention for comparison.
///
/// Lower-cases, removes everything that is neither a word character nor
/// whitespace, strips leading determiners and trims. Punctuation is removed
/// before the determiner check so a stray comma cannot shield an article;
/// this keeps the function idempotent for every input.
///
/// The result is used only for matching and is never persisted.
pub fn normalize(entity: &str) -> String {
    let lowered = entity.to_lowercase();
    let depunctuated = NON_WORD.replace_all(&lowered, "");
    LEADING_ARTICLES
        .replace(&depunctuated, "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_stripping() {
        assert_eq!(normalize("Il Cane"), "cane");
        assert_eq!(normalize("la casa"), "casa");
        assert_eq!(normalize("gli amici"), "amici");
        assert_eq!(normalize("The Dog"), "dog");
        assert_eq!(normalize("an apple"), "apple");
    }

    #[test]
    fn test_only_leading_articles_are_stripped() {
        assert_eq!(normalize("cane il gatto"), "cane il gatto");
        assert_eq!(normalize("Milano"), "milano");
        // "island" starts with "i" but is a single token, not an article.
        assert_eq!(normalize("island"), "island");
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(normalize("Cane!"), "cane");
        assert_eq!(normalize("San-Marino"), "sanmarino");
        assert_eq!(normalize("  Gatto  "), "gatto");
        assert_eq!(normalize("l'uomo"), "luomo");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(normalize("GATTO"), "gatto");
        assert_eq!(normalize("GaTtO"), "gatto");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "Il Cane",
            "the, dog",
            "Il  la Cane",
            "l'uomo",
            "  Gatto  ",
            "the ",
            "",
            "   ",
            "un uno una cosa",
            "A.N. Other",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }
}
