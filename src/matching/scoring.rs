use serde::Serialize;

use crate::core::types::CertificateId;
use crate::matching::distance::DistanceCache;
use crate::matching::token::{self, token_score};

/// Above this total score a match is flagged as approximate even without a
/// fuzzy-tier token. A presentation hint only, never a filter.
pub const APPROXIMATE_THRESHOLD: i32 = 20;

/// One material entry that satisfied every token of the query
#[derive(Debug, Clone, Serialize)]
pub struct MaterialMatch {
    /// Owning certificate
    pub certificate_id: CertificateId,

    /// Original material text, as stored in the catalog
    pub text: String,

    /// Aggregate score across all query tokens, lower is better
    pub score: i32,

    /// True when the match leaned on fuzzy tiers; display hint only
    pub approximate: bool,
}

/// Score one material against the full token sequence of a query.
///
/// Every token must match (logical AND) or the material is excluded
/// entirely; there is no partial-token credit. On success the per-token
/// scores are summed into the aggregate.
///
/// A match is approximate when any token fell through to the fuzzy tier,
/// or when the total crosses [`APPROXIMATE_THRESHOLD`]. Fuzzy-tier scores
/// start at [`token::SCORE_FUZZY_BASE`], strictly above every exact tier,
/// so the per-token score alone identifies the tier.
pub fn score_material(
    tokens: &[String],
    material: &str,
    number_lower: &str,
    certificate_id: &CertificateId,
    cache: &mut DistanceCache,
) -> Option<MaterialMatch> {
    let material_lower = token::normalize(material);

    let mut total = 0;
    let mut used_fuzzy = false;
    for tok in tokens {
        let score = token_score(tok, &material_lower, number_lower, cache)?;
        used_fuzzy = used_fuzzy || score >= token::SCORE_FUZZY_BASE;
        total += score;
    }

    Some(MaterialMatch {
        certificate_id: certificate_id.clone(),
        text: material.to_string(),
        score: total,
        approximate: used_fuzzy || total > APPROXIMATE_THRESHOLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::token::tokenize;

    fn score(query: &str, material: &str, number: &str) -> Option<MaterialMatch> {
        let tokens = tokenize(query);
        let mut cache = DistanceCache::new();
        score_material(
            &tokens,
            material,
            &token::normalize(number),
            &CertificateId::new("c1"),
            &mut cache,
        )
    }

    #[test]
    fn test_all_tokens_must_match() {
        // Second token has no tier against this material
        assert!(score("цемент стекло", "Цемент М500", "123").is_none());
    }

    #[test]
    fn test_scores_sum_across_tokens() {
        // Both tokens are word-start prefixes
        let m = score("цемент м500", "Цемент М500", "123").unwrap();
        assert_eq!(m.score, 2 * token::SCORE_WORD_PREFIX);
        assert!(!m.approximate);
    }

    #[test]
    fn test_word_order_independent() {
        let a = score("цемент м500", "Цемент М500", "123").unwrap();
        let b = score("м500 цемент", "Цемент М500", "123").unwrap();
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_approximate_flag() {
        // Two fuzzy tokens push the total past the threshold
        let m = score("кирпч керамсчский", "Кирпич керамический", "123").unwrap();
        assert!(m.score > APPROXIMATE_THRESHOLD);
        assert!(m.approximate);

        // A lone fuzzy token is approximate even below the threshold
        let m = score("цемет", "Цемент М500", "123").unwrap();
        assert_eq!(m.score, 11);
        assert!(m.approximate);
    }

    #[test]
    fn test_exact_tiers_are_not_approximate() {
        let m = score("цемент", "Цемент М500", "123").unwrap();
        assert!(!m.approximate);

        // Number-context tier is exact too, despite its positive score
        let m = score("123", "Кирпич", "росс ru.аг99.н00123").unwrap();
        assert_eq!(m.score, 5);
        assert!(!m.approximate);
    }

    #[test]
    fn test_keeps_original_material_text() {
        let m = score("цемент", "Цемент М500", "123").unwrap();
        assert_eq!(m.text, "Цемент М500");
    }
}
