//! Target-audience detection from free-form listing text.
//!
//! Pure substring containment, no tokenization: each keyword that appears
//! anywhere in the lowercased text counts once, regardless of frequency or
//! word boundaries. The audience with the strictly highest count wins; zero
//! hits means no detection.

use crate::classifier::taxonomy::Gender;

const FEMME_KEYWORDS: &[&str] = &[
    "femme",
    "femmes",
    "fille",
    "madame",
    "lady",
    "women",
    "woman",
    "féminin",
    "feminin",
    "pour elle",
    "taille 34",
    "taille 36",
    "taille 38",
    "taille 40",
    "taille 42",
    "taille 44",
    "taille xs",
    "taille s femme",
    "robe",
    "jupe",
    "escarpin",
    "ballerine",
    "soutien-gorge",
    "culotte",
];

const HOMME_KEYWORDS: &[&str] = &[
    "homme",
    "hommes",
    "garçon",
    "garcon",
    "monsieur",
    "men",
    "man",
    "masculin",
    "pour lui",
    "taille m homme",
    "taille l homme",
    "taille xl",
    "cravate",
    "costume homme",
];

const ENFANT_KEYWORDS: &[&str] = &[
    "enfant",
    "enfants",
    "bébé",
    "bebe",
    "baby",
    "kids",
    "junior",
    "fille",
    "garçon",
    "garcon",
    "ado",
    "adolescent",
    "taille 2 ans",
    "taille 3 ans",
    "taille 4 ans",
    "taille 5 ans",
    "taille 6 ans",
    "taille 8 ans",
    "taille 10 ans",
    "taille 12 ans",
    "taille 14 ans",
];

/// Detection order doubles as the tie-break: when several audiences reach the
/// same non-zero count, the first one in this list wins.
const DETECTION_ORDER: &[(Gender, &[&str])] = &[
    (Gender::Femme, FEMME_KEYWORDS),
    (Gender::Homme, HOMME_KEYWORDS),
    (Gender::Enfant, ENFANT_KEYWORDS),
];

/// Detects the target audience of a piece of listing text.
///
/// Returns `None` when no keyword of any set appears in the text.
pub fn detect_gender(text: &str) -> Option<Gender> {
    let text = text.to_lowercase();

    let counts: Vec<(Gender, usize)> = DETECTION_ORDER
        .iter()
        .map(|(gender, keywords)| {
            let hits = keywords.iter().filter(|kw| text.contains(**kw)).count();
            (*gender, hits)
        })
        .collect();

    let max = counts.iter().map(|(_, hits)| *hits).max().unwrap_or(0);
    if max == 0 {
        return None;
    }

    counts
        .iter()
        .find(|(_, hits)| *hits == max)
        .map(|(gender, _)| *gender)
}

/// Maps a free-form user hint to an audience, if the hint is one of the
/// recognized aliases. Anything else leaves detection untouched.
pub fn parse_hint(hint: &str) -> Option<Gender> {
    match hint.to_lowercase().as_str() {
        "femme" | "femmes" | "f" => Some(Gender::Femme),
        "homme" | "hommes" | "h" | "m" => Some(Gender::Homme),
        "enfant" | "enfants" | "kid" | "kids" => Some(Gender::Enfant),
        _ => None,
    }
}
