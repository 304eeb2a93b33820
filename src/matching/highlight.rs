use serde::Serialize;

use crate::matching::token::tokenize;

/// A run of consecutive display characters sharing one emphasis state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightRun {
    pub text: String,
    pub highlighted: bool,
}

/// Compute highlight runs for a display string against a raw query.
///
/// Render-time only; has no role in ranking or match acceptance. Each query
/// token is aligned against the display string with a longest-common-
/// subsequence table, the aligned character indices are unioned across
/// tokens, and the string is partitioned into alternating runs.
///
/// Empty queries and empty display text yield the text as a single
/// non-highlighted run.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightRun> {
    let tokens = tokenize(query);
    if tokens.is_empty() || text.is_empty() {
        return vec![HighlightRun {
            text: text.to_string(),
            highlighted: false,
        }];
    }

    let chars: Vec<char> = text.chars().collect();
    // Per-char lowercase mapping keeps indices aligned with the original
    // chars even where full lowercasing would expand a char
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut marked = vec![false; chars.len()];
    for token in &tokens {
        let token_chars: Vec<char> = token.chars().collect();
        for idx in lcs_indices(&lower, &token_chars) {
            marked[idx] = true;
        }
    }

    into_runs(&chars, &marked)
}

/// Indices of display chars participating in an LCS alignment with the token.
///
/// Backtrace tie-break: when skipping a display char and skipping a token
/// char give equal table values, skip the display char. Equal-cost
/// alignments differ in which chars get marked, so the choice is fixed.
fn lcs_indices(text: &[char], token: &[char]) -> Vec<usize> {
    let n = text.len();
    let m = token.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if text[i - 1] == token[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut indices = Vec::new();
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if text[i - 1] == token[j - 1] {
            indices.push(i - 1);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    indices.reverse();
    indices
}

/// Partition chars into alternating highlighted/plain runs
fn into_runs(chars: &[char], marked: &[bool]) -> Vec<HighlightRun> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=chars.len() {
        if i == chars.len() || marked[i] != marked[start] {
            runs.push(HighlightRun {
                text: chars[start..i].iter().collect(),
                highlighted: marked[start],
            });
            start = i;
        }
    }
    runs
}
