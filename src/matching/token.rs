use crate::matching::distance::DistanceCache;

/// Score for a token found at the start of a word in the material text
pub const SCORE_WORD_PREFIX: i32 = -10;

/// Score for a token found anywhere else inside the material text
pub const SCORE_SUBSTRING: i32 = 0;

/// Score for a token found inside the certificate number
pub const SCORE_NUMBER_CONTEXT: i32 = 5;

/// Base score for a fuzzy match; the edit distance is added on top
pub const SCORE_FUZZY_BASE: i32 = 10;

/// A catalog word only enters the fuzzy tier when its length is within
/// this many chars of the token length
pub const MAX_WORD_LENGTH_DELTA: usize = 3;

/// Lowercase and trim a raw string
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split a raw query into non-empty lowercase tokens
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Characters that delimit words inside material text
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | '(' | ')')
}

/// Score one query token against one material string.
///
/// Both `token` and `material` must already be lowercase; `number` is the
/// lowercase owning-certificate number, used as secondary context when the
/// user is partly searching by certificate. Returns `None` when the token
/// does not match at all (which rejects the whole material under AND
/// semantics), otherwise the best (lowest) score across applicable tiers.
///
/// The substring tiers short-circuit: their scores are strictly lower than
/// anything the fuzzy tier can produce.
pub fn token_score(
    token: &str,
    material: &str,
    number: &str,
    cache: &mut DistanceCache,
) -> Option<i32> {
    if occurs_at_word_start(material, token) {
        return Some(SCORE_WORD_PREFIX);
    }
    if material.contains(token) {
        return Some(SCORE_SUBSTRING);
    }
    if number.contains(token) {
        return Some(SCORE_NUMBER_CONTEXT);
    }
    fuzzy_score(token, material, cache)
}

/// Does the token occur at index 0 of the material, or immediately after a
/// separator character? The separator-aware form is deliberate: materials
/// like "Бетон (М350)" must give prefix credit to "м350".
fn occurs_at_word_start(material: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    material.match_indices(token).any(|(idx, _)| {
        idx == 0
            || material[..idx]
                .chars()
                .next_back()
                .is_some_and(is_separator)
    })
}

/// Fuzzy tier: compare the token against every word of the material whose
/// length is close enough, and keep the best qualifying edit distance.
/// Unlike the substring tiers this must scan all words before concluding
/// there is no match.
fn fuzzy_score(token: &str, material: &str, cache: &mut DistanceCache) -> Option<i32> {
    let token_len = token.chars().count();
    let threshold = fuzzy_threshold(token_len);

    let mut best: Option<i32> = None;
    for word in material
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let word_len = word.chars().count();
        if word_len.abs_diff(token_len) > MAX_WORD_LENGTH_DELTA {
            continue;
        }

        let dist = cache.distance(word, token);
        if dist <= threshold {
            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            let candidate = SCORE_FUZZY_BASE + dist as i32;
            best = Some(best.map_or(candidate, |b| b.min(candidate)));
        }
    }
    best
}

/// Adaptive edit-distance threshold: short tokens must match exactly,
/// longer ones tolerate roughly one edit per three chars.
fn fuzzy_threshold(token_len: usize) -> usize {
    if token_len < 3 {
        0
    } else {
        token_len / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(token: &str, material: &str, number: &str) -> Option<i32> {
        let mut cache = DistanceCache::new();
        token_score(token, material, number, &mut cache)
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Цемент М500  "), "цемент м500");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Цемент  М500"), vec!["цемент", "м500"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_prefix_at_index_zero() {
        assert_eq!(score("цемент", "цемент м500", "123"), Some(SCORE_WORD_PREFIX));
    }

    #[test]
    fn test_prefix_after_whitespace() {
        assert_eq!(score("м500", "цемент м500", "123"), Some(SCORE_WORD_PREFIX));
    }

    #[test]
    fn test_prefix_after_punctuation() {
        // After '(' and after '.'
        assert_eq!(score("м350", "бетон тяжёлый b25 (м350)", "123"), Some(SCORE_WORD_PREFIX));
        assert_eq!(score("5", "гкл 12.5 мм", "123"), Some(SCORE_WORD_PREFIX));
    }

    #[test]
    fn test_inner_substring() {
        // "мент" occurs inside "цемент" but not at a word start
        assert_eq!(score("мент", "цемент м500", "123"), Some(SCORE_SUBSTRING));
    }

    #[test]
    fn test_number_context() {
        assert_eq!(score("123", "кирпич", "росс ru.аг99.н00123"), Some(SCORE_NUMBER_CONTEXT));
    }

    #[test]
    fn test_prefix_beats_number_context() {
        // Token present in both the material and the number: the material
        // tiers are checked first and their scores are lower anyway.
        assert_eq!(score("м500", "цемент м500", "м500-77"), Some(SCORE_WORD_PREFIX));
    }

    #[test]
    fn test_fuzzy_one_deletion() {
        // "цемет" vs word "цемент": distance 1, threshold floor(5/3) = 1
        assert_eq!(score("цемет", "цемент м500", "123"), Some(SCORE_FUZZY_BASE + 1));
    }

    #[test]
    fn test_fuzzy_picks_best_word() {
        // Both words qualify on length; the closer one wins
        assert_eq!(score("бетон", "батон бетом", "123"), Some(SCORE_FUZZY_BASE + 1));
    }

    #[test]
    fn test_short_token_requires_exact() {
        // Tokens shorter than 3 chars get threshold 0, and "ab" is not a
        // substring of the material
        assert_eq!(score("аб", "ав спец", "123"), None);
    }

    #[test]
    fn test_length_window_excludes_words() {
        // |"гвоздь"| = 6 vs |"гб"| = 2: delta 4 > 3, never reaches the DP
        assert_eq!(score("гб", "гвоздь", "123"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(score("стекло", "кирпич керамический", "123"), None);
    }

    #[test]
    fn test_fuzzy_threshold_values() {
        assert_eq!(fuzzy_threshold(1), 0);
        assert_eq!(fuzzy_threshold(2), 0);
        assert_eq!(fuzzy_threshold(3), 1);
        assert_eq!(fuzzy_threshold(6), 2);
        assert_eq!(fuzzy_threshold(8), 2);
        assert_eq!(fuzzy_threshold(9), 3);
    }
}
