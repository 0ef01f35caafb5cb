//! Keyword-match scorer — maps a listing's title and description onto the
//! category catalog.
//!
//! Scoring model: each category keyword found in the lowercased title is
//! worth 2.0; a keyword found only in title+description is worth 1.0 (the
//! title hit takes precedence, the two never stack for one keyword). The
//! detected or hinted audience then multiplies the total: ×1.5 on a match,
//! ×0.3 on a mismatch, except `mixte` categories which are never penalized.

use crate::classifier::gender::{self, detect_gender};
use crate::classifier::taxonomy::{Category, Gender, Taxonomy};

const TITLE_WEIGHT: f32 = 2.0;
const TEXT_WEIGHT: f32 = 1.0;
const GENDER_MATCH_BOOST: f32 = 1.5;
const GENDER_MISMATCH_PENALTY: f32 = 0.3;

/// Normalization ceiling for confidence. Fixed — not derived from the
/// catalog size or keyword counts, so confidence saturates at 1.0 well
/// before a "perfect" match and is not a probability.
const MAX_RAW_SCORE: f32 = 10.0;

/// Raw score of one category against pre-lowercased listing text.
///
/// `title` and `text` (title + description) must already be lowercase;
/// `find_category` and the suggestion layer normalize once and share the
/// buffers across the whole catalog scan.
pub fn score_category(
    category: &Category,
    title: &str,
    text: &str,
    target_gender: Option<Gender>,
) -> f32 {
    let mut score = 0.0;

    for keyword in category.keywords {
        if title.contains(keyword) {
            score += TITLE_WEIGHT;
        } else if text.contains(keyword) {
            score += TEXT_WEIGHT;
        }
    }

    apply_gender_modifier(score, category.gender, target_gender)
}

fn apply_gender_modifier(
    score: f32,
    category_gender: Option<Gender>,
    target_gender: Option<Gender>,
) -> f32 {
    match (target_gender, category_gender) {
        (Some(target), Some(own)) if own == target => score * GENDER_MATCH_BOOST,
        (Some(target), Some(own)) if own != Gender::Mixte && own != target => {
            score * GENDER_MISMATCH_PENALTY
        }
        _ => score,
    }
}

/// Clamped confidence in [0, 1] for a raw score.
pub fn confidence(score: f32) -> f32 {
    (score / MAX_RAW_SCORE).min(1.0)
}

/// Resolves the audience used for scoring: text detection, overridden
/// unconditionally by a recognized hint alias.
pub fn resolve_gender(text: &str, user_hint: Option<&str>) -> Option<Gender> {
    let detected = detect_gender(text);
    match user_hint.and_then(gender::parse_hint) {
        Some(hinted) => Some(hinted),
        None => detected,
    }
}

/// Finds the best-matching category for a listing.
///
/// Returns the winner and its confidence, or `(None, 0.0)` when no category
/// scores above zero — degenerate input is a normal return value here, never
/// an error. Ties go to the category declared first in the catalog.
pub fn find_category<'a>(
    taxonomy: &'a Taxonomy,
    title: &str,
    description: &str,
    user_hint: Option<&str>,
) -> (Option<&'a Category>, f32) {
    let title_lower = title.to_lowercase();
    let text = format!("{title} {description}").to_lowercase();

    let target_gender = resolve_gender(&text, user_hint);

    let mut best: Option<(&Category, f32)> = None;
    for category in taxonomy.categories() {
        let score = score_category(category, &title_lower, &text, target_gender);
        if score <= 0.0 {
            continue;
        }
        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((category, score));
        }
    }

    match best {
        Some((category, score)) => (Some(category), confidence(score)),
        None => (None, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::taxonomy::Taxonomy;

    #[test]
    fn test_title_keyword_outweighs_description_keyword() {
        let taxonomy = Taxonomy::builtin();

        let (in_title, conf_title) = find_category(&taxonomy, "Escarpins noirs", "", None);
        let (in_desc, conf_desc) =
            find_category(&taxonomy, "Chaussures noires", "escarpins taille 38", None);

        assert_eq!(in_title.unwrap().id, 31);
        assert_eq!(in_desc.unwrap().id, 31);
        assert!(
            conf_title >= conf_desc,
            "title hit ({conf_title}) must weigh at least as much as a description hit ({conf_desc})"
        );
    }

    #[test]
    fn test_keyword_in_title_always_scores_its_category() {
        // Every category must be reachable through a verbatim title keyword.
        let taxonomy = Taxonomy::builtin();
        for category in taxonomy.categories() {
            let title = category.keywords[0];
            let score = score_category(category, title, title, None);
            assert!(score > 0.0, "category {} scored zero on its own keyword", category.id);
        }
    }

    #[test]
    fn test_gender_boost_outweighs_declaration_order() {
        // "t-shirt" is a keyword of both the Femmes (id 1) and Hommes (id 100)
        // T-shirt categories; Femmes comes first in the catalog. The detected
        // homme audience must flip the winner to the Hommes branch.
        let taxonomy = Taxonomy::builtin();
        let (best, confidence) = find_category(&taxonomy, "T-shirt Nike homme taille M", "", None);

        let best = best.unwrap();
        assert_eq!(best.id, 100);
        assert_eq!(best.path.last(), Some(&"T-shirts"));
        assert_eq!(best.path.first(), Some(&"Hommes"));
        assert!(confidence > 0.0);
    }

    #[test]
    fn test_without_gender_signal_first_declared_wins_ties() {
        // No audience keyword anywhere: Femmes and Hommes T-shirts tie on raw
        // score and the catalog order decides.
        let taxonomy = Taxonomy::builtin();
        let (best, _) = find_category(&taxonomy, "t-shirt", "", None);
        assert_eq!(best.unwrap().id, 1);
    }

    #[test]
    fn test_user_hint_overrides_detected_gender() {
        // Text says nothing about audience; the "h" alias forces homme.
        let taxonomy = Taxonomy::builtin();
        let (best, _) = find_category(&taxonomy, "t-shirt", "", Some("h"));
        assert_eq!(best.unwrap().id, 100);
    }

    #[test]
    fn test_unrecognized_hint_leaves_detection_in_place() {
        let taxonomy = Taxonomy::builtin();
        let (with_noise_hint, _) = find_category(&taxonomy, "cravate en soie homme", "", Some("soie"));
        let (without_hint, _) = find_category(&taxonomy, "cravate en soie homme", "", None);
        assert_eq!(with_noise_hint.unwrap().id, without_hint.unwrap().id);
    }

    #[test]
    fn test_mixte_category_is_never_penalized() {
        let taxonomy = Taxonomy::builtin();
        let parfums = taxonomy.get(501).unwrap();

        let neutral = score_category(parfums, "parfum", "parfum", None);
        let femme = score_category(parfums, "parfum", "parfum", Some(Gender::Femme));
        let homme = score_category(parfums, "parfum", "parfum", Some(Gender::Homme));

        assert_eq!(neutral, femme);
        assert_eq!(neutral, homme);
    }

    #[test]
    fn test_mismatched_gender_is_penalized() {
        let taxonomy = Taxonomy::builtin();
        let escarpins = taxonomy.get(31).unwrap();

        let neutral = score_category(escarpins, "escarpins", "escarpins", None);
        let penalized = score_category(escarpins, "escarpins", "escarpins", Some(Gender::Homme));

        assert!(penalized < neutral);
        assert!((penalized - neutral * 0.3).abs() < f32::EPSILON * 8.0);
    }

    #[test]
    fn test_substring_matching_hits_inside_longer_words() {
        // "short" is a Shorts keyword and matches inside "shorts" — an
        // accepted property of substring matching, not a defect.
        let taxonomy = Taxonomy::builtin();
        let (best, _) = find_category(&taxonomy, "shorts de plage", "", None);
        assert_eq!(best.unwrap().name, "Shorts");
    }

    #[test]
    fn test_no_match_returns_none_with_zero_confidence() {
        let taxonomy = Taxonomy::builtin();
        let (best, confidence) = find_category(&taxonomy, "xyzabc nonsense text", "", None);
        assert!(best.is_none());
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let taxonomy = Taxonomy::builtin();
        let (best, confidence) = find_category(&taxonomy, "", "", None);
        assert!(best.is_none());
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_confidence_is_clamped_to_one() {
        // Stack enough keywords in the title to blow past the normalization
        // ceiling: 5 title hits × 2.0 × 1.5 = 15.0 raw.
        let taxonomy = Taxonomy::builtin();
        let (best, confidence) = find_category(
            &taxonomy,
            "pull sweat sweatshirt hoodie gilet cardigan tricot femme",
            "",
            None,
        );
        assert_eq!(best.unwrap().id, 4);
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_title_and_text_weights_do_not_stack_per_keyword() {
        let taxonomy = Taxonomy::builtin();
        let polos = taxonomy.get(103).unwrap();

        // "polo" in both title and combined text: one title hit only.
        let score = score_category(polos, "polo lacoste", "polo lacoste beau polo", None);
        assert_eq!(score, 2.0);
    }
}
