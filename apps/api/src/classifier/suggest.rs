//! Suggestion layer on top of the scorer: primary match, confidence,
//! alternatives, and the "nothing matched" message shown to users before a
//! posting run.

use serde::Serialize;

use crate::classifier::scoring::{self, find_category};
use crate::classifier::taxonomy::{FlatCategory, Taxonomy};

/// Fixed confidence granted when a user-supplied category hint resolves
/// directly against the catalog, bypassing the text scorer.
const HINT_CONFIDENCE: f32 = 0.9;

/// Alternatives must clear this confidence on their own (hint-free) score.
const ALTERNATIVE_MIN_CONFIDENCE: f32 = 0.3;

const MAX_ALTERNATIVES: usize = 3;

pub const NO_CATEGORY_MESSAGE: &str = "Impossible de déterminer la catégorie automatiquement";

/// Result of one suggestion call. Computed fresh per query, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub category: Option<FlatCategory>,
    pub confidence: f32,
    pub path: Vec<String>,
    pub alternatives: Vec<FlatCategory>,
    pub message: Option<String>,
}

impl Suggestion {
    fn empty() -> Self {
        Self {
            category: None,
            confidence: 0.0,
            path: Vec::new(),
            alternatives: Vec::new(),
            message: Some(NO_CATEGORY_MESSAGE.to_string()),
        }
    }
}

/// Suggests the best category for a listing.
///
/// A `user_hint` that matches the catalog (by name, keyword or path segment)
/// short-circuits the scorer entirely: the top search hit comes back with a
/// fixed 0.9 confidence and the remaining hits as alternatives. Otherwise the
/// text scorer runs; when it finds nothing the result is empty with an
/// explanatory message — degenerate input is not an error.
///
/// Alternatives are rescored per category WITHOUT the user hint, so a gender
/// override applied to the primary match does not carry over to them. That
/// asymmetry is inherited behavior; see DESIGN.md before changing it.
pub fn suggest_category(
    taxonomy: &Taxonomy,
    title: &str,
    description: &str,
    user_hint: Option<&str>,
) -> Suggestion {
    if let Some(hint) = user_hint {
        let matches = taxonomy.search(hint, MAX_ALTERNATIVES);
        if let Some((first, rest)) = matches.split_first() {
            return Suggestion {
                category: Some(first.flatten()),
                confidence: HINT_CONFIDENCE,
                path: first.path.iter().map(|s| s.to_string()).collect(),
                alternatives: rest.iter().map(|c| c.flatten()).collect(),
                message: None,
            };
        }
    }

    let (best, confidence) = find_category(taxonomy, title, description, user_hint);
    let Some(best) = best else {
        return Suggestion::empty();
    };

    let title_lower = title.to_lowercase();
    let text = format!("{title} {description}").to_lowercase();
    let detected = scoring::resolve_gender(&text, None);

    let mut alternatives = Vec::new();
    for category in taxonomy.categories() {
        if category.id == best.id {
            continue;
        }
        let score = scoring::score_category(category, &title_lower, &text, detected);
        if scoring::confidence(score) > ALTERNATIVE_MIN_CONFIDENCE {
            alternatives.push(category.flatten());
            if alternatives.len() >= MAX_ALTERNATIVES {
                break;
            }
        }
    }

    Suggestion {
        path: best.path.iter().map(|s| s.to_string()).collect(),
        category: Some(best.flatten()),
        confidence,
        alternatives,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escarpins_suggests_the_expected_path() {
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "Escarpins noirs taille 38", "", None);

        let category = suggestion.category.unwrap();
        assert_eq!(category.path, vec!["Femmes", "Chaussures", "Escarpins"]);
        assert_eq!(suggestion.path, category.path);
        assert!(suggestion.confidence > 0.0 && suggestion.confidence <= 1.0);
        assert!(suggestion.message.is_none());
    }

    #[test]
    fn test_homme_tshirt_lands_in_the_hommes_branch() {
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "T-shirt Nike homme taille M", "", None);

        let category = suggestion.category.unwrap();
        assert_eq!(category.path.first().map(String::as_str), Some("Hommes"));
        assert_eq!(category.path.last().map(String::as_str), Some("T-shirts"));
    }

    #[test]
    fn test_nonsense_text_yields_empty_result_with_message() {
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "xyzabc nonsense text", "", None);

        assert!(suggestion.category.is_none());
        assert_eq!(suggestion.confidence, 0.0);
        assert!(suggestion.path.is_empty());
        assert!(suggestion.alternatives.is_empty());
        assert_eq!(suggestion.message.as_deref(), Some(NO_CATEGORY_MESSAGE));
    }

    #[test]
    fn test_catalog_hint_bypasses_scorer_with_fixed_confidence() {
        let taxonomy = Taxonomy::builtin();
        // The listing text matches nothing; the hint alone resolves.
        let suggestion =
            suggest_category(&taxonomy, "xyzabc nonsense text", "", Some("escarpins"));

        let category = suggestion.category.unwrap();
        assert_eq!(category.id, 31);
        assert_eq!(suggestion.confidence, HINT_CONFIDENCE);
        assert!(suggestion.message.is_none());
    }

    #[test]
    fn test_catalog_hint_carries_remaining_matches_as_alternatives() {
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "divers", "", Some("sac"));

        let category = suggestion.category.unwrap();
        assert!(suggestion.alternatives.len() <= 2);
        assert!(!suggestion.alternatives.is_empty());
        assert!(suggestion
            .alternatives
            .iter()
            .all(|alt| alt.id != category.id));
    }

    #[test]
    fn test_single_letter_hint_resolves_via_catalog_search() {
        // "h" is a gender alias, but the catalog search runs first and "h"
        // is a substring of the very first category name ("T-shirts"), so
        // the hint path wins with its fixed confidence. Inherited behavior.
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "t-shirt", "", Some("h"));

        assert_eq!(suggestion.confidence, HINT_CONFIDENCE);
        assert_eq!(suggestion.category.unwrap().id, 1);
    }

    #[test]
    fn test_non_catalog_hint_falls_through_to_scorer() {
        // "kids" matches no category name, keyword or path segment, so the
        // scorer runs with the hint acting as an enfant gender override.
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "t-shirt", "", Some("kids"));
        assert_eq!(suggestion.category.unwrap().id, 200);
    }

    #[test]
    fn test_alternatives_ignore_the_gender_hint() {
        // With the "kids" override the primary reaches confidence 0.3
        // (2.0 × 1.5 / 10); rescored WITHOUT the hint every other t-shirt
        // category sits at 0.2 and misses the 0.3 bar — the override does
        // not propagate to alternative selection.
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "t-shirt", "", Some("kids"));

        assert_eq!(suggestion.category.unwrap().id, 200);
        assert!(suggestion.alternatives.is_empty());
    }

    #[test]
    fn test_alternatives_collected_in_catalog_order_capped_at_three() {
        // Five title keyword hits put the femme pulls category at raw 10.0;
        // homme pulls and both kids tops clear 0.3 unhinted. Cap is 3.
        let taxonomy = Taxonomy::builtin();
        let suggestion =
            suggest_category(&taxonomy, "pull sweat hoodie gilet cardigan", "", None);

        assert_eq!(suggestion.category.unwrap().id, 4);
        let alt_ids: Vec<u32> = suggestion.alternatives.iter().map(|a| a.id).collect();
        assert_eq!(alt_ids, vec![102, 200, 210]);
    }

    #[test]
    fn test_suggestion_is_idempotent() {
        let taxonomy = Taxonomy::builtin();
        let a = suggest_category(&taxonomy, "Robe d'été fleurie", "taille 38, très bon état", None);
        let b = suggest_category(&taxonomy, "Robe d'été fleurie", "taille 38, très bon état", None);

        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_empty_title_and_description_yield_empty_result() {
        let taxonomy = Taxonomy::builtin();
        let suggestion = suggest_category(&taxonomy, "", "", None);
        assert!(suggestion.category.is_none());
        assert!(suggestion.message.is_some());
    }
}
