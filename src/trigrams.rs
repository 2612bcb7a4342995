use ::std::sync::LazyLock;
use ahash::AHashMap;
use compact_str::CompactString;
use itertools::Itertools;
use regex::Regex;

/// Sample trigrams with their ranks, the most frequent first (rank 0)
pub type TrigramProfile = Vec<(CompactString, usize)>;

static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}]+").expect("valid noise regex"));

/// Lowercases and collapses everything but letters and marks into single spaces
pub fn clean(text: &str) -> String {
    let lowercase = text.to_lowercase();
    NOISE.replace_all(&lowercase, " ").trim().to_owned()
}

/// Overlapping trigrams of the cleaned text, padded with a space on both sides
pub fn trigrams(text: &str) -> Vec<CompactString> {
    let cleaned = clean(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = ::core::iter::once(' ')
        .chain(cleaned.chars())
        .chain(::core::iter::once(' '))
        .collect();

    chars
        .windows(3)
        .map(|w| w.iter().collect::<CompactString>())
        .collect()
}

/// Trigrams ordered by descending count, equal counts ordered lexically.
/// Rank is the position in that order.
pub fn trigram_profile(text: &str) -> TrigramProfile {
    let mut counts: AHashMap<CompactString, usize> = AHashMap::new();
    for trigram in trigrams(text) {
        *counts.entry(trigram).or_default() += 1;
    }

    counts
        .into_iter()
        .sorted_unstable_by(|(t1, c1), (t2, c2)| c2.cmp(c1).then_with(|| t1.cmp(t2)))
        .enumerate()
        .map(|(rank, (trigram, _))| (trigram, rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest(
        text,
        expected,
        case("Hello, World!", "hello world"),
        case("  a1b2c  ", "a b c"),
        case("ÉCOLE", "école"),
        case("!!! 123", ""),
        case("मानव अधिकार।", "मानव अधिकार")
    )]
    fn test_clean(text: &str, expected: &str) {
        assert_eq!(clean(text), expected);
    }

    #[test]
    fn test_trigrams() {
        let trigrams = trigrams("Ab c");
        assert_eq!(trigrams, [" ab", "ab ", "b c", " c "]);
    }

    #[test]
    fn test_trigrams_empty() {
        assert!(trigrams("").is_empty());
        assert!(trigrams("?!").is_empty());
        assert!(trigram_profile("").is_empty());
    }

    #[test]
    fn test_profile_order() {
        // " aa aa ": " aa" and "aa " twice, "a a" once
        let profile = trigram_profile("aa aa");
        assert_eq!(
            profile,
            [
                (" aa".into(), 0),
                ("aa ".into(), 1),
                ("a a".into(), 2),
            ]
        );
    }

    #[test]
    fn test_profile_ranks_are_positions() {
        let profile = trigram_profile("the quick brown fox jumps over the lazy dog");
        assert_eq!(profile[0].0, " th");
        for (i, (_, rank)) in profile.iter().enumerate() {
            assert_eq!(*rank, i);
        }
    }

    #[test]
    fn test_no_separator_in_trigrams() {
        assert!(trigrams("a|b|c").iter().all(|t| !t.contains('|')));
    }
}
