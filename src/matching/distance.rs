use std::collections::HashMap;

/// Levenshtein edit distance between two strings.
///
/// Full `(|a|+1) x (|b|+1)` dynamic-programming table with unit cost for
/// insertion, deletion, and substitution. Operates on chars, not bytes:
/// catalog text is largely Cyrillic and byte-wise distances would be wrong.
/// Inputs here are single words and tokens, so no early termination.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

/// Per-search memo for edit distances.
///
/// The same catalog words recur across many materials, so within one search
/// call the `(word, token)` pairs repeat often. The cache lives for a single
/// call and is dropped with the results. Keys are nested so the hit path
/// looks up by `&str` and never allocates; only a miss owns its strings.
#[derive(Debug, Default)]
pub struct DistanceCache {
    memo: HashMap<String, HashMap<String, usize>>,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        if let Some(&d) = self.memo.get(a).and_then(|inner| inner.get(b)) {
            return d;
        }
        let d = distance(a, b);
        self.memo
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), d);
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for s in ["", "a", "цемент", "кирпич керамический"] {
            assert_eq!(distance(s, s), 0, "distance({s}, {s}) must be 0");
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("цемент", "цемет"), ("kitten", "sitting"), ("", "abc")];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("цемент", "цемет"), 1); // one deletion
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("бетон", "батон"), 1);
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["цемент", "цемет", "бетон", "", "кирпич"];
        for a in words {
            for b in words {
                for c in words {
                    assert!(
                        distance(a, c) <= distance(a, b) + distance(b, c),
                        "triangle inequality violated for ({a}, {b}, {c})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_cache_agrees_with_direct() {
        let mut cache = DistanceCache::new();
        let pairs = [
            ("цемент", "цемет"),
            ("цемет", "цемент"),
            ("цемент", "бетон"),
            ("кирпич", "кирпч"),
            ("м500", "м400"),
        ];
        for (a, b) in pairs {
            let expected = distance(a, b);
            assert_eq!(cache.distance(a, b), expected);
            // Second lookup hits the memo
            assert_eq!(cache.distance(a, b), expected);
        }
    }
}
