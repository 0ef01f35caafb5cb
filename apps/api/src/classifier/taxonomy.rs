//! Marketplace category taxonomy — the static catalog the classifier scores
//! against. A category's `path` is its position in the marketplace's picker
//! tree; no separate tree structure exists, the path IS the hierarchy.

use serde::{Deserialize, Serialize};

use crate::classifier::catalog::CATALOG;

/// Coarse audience tag attached to categories and detected from listing text.
/// Used as a scoring modifier, never as a hard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Femme,
    Homme,
    Enfant,
    Mixte,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Femme => "femme",
            Gender::Homme => "homme",
            Gender::Enfant => "enfant",
            Gender::Mixte => "mixte",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One marketplace category. Immutable — the whole catalog is built once at
/// startup and shared read-only for the process lifetime.
///
/// Invariants: `path` is never empty; ids are unique across the catalog;
/// `keywords` are stored lowercase. Duplicate keywords ACROSS categories are
/// expected ("t-shirt" exists under both Femmes and Hommes) and are
/// disambiguated by the gender modifier at scoring time.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub path: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub gender: Option<Gender>,
}

impl Category {
    /// Human-readable full path, e.g. "Femmes > Chaussures > Escarpins".
    pub fn full_path(&self) -> String {
        self.path.join(" > ")
    }

    /// Wire representation used by every API response that carries a category.
    pub fn flatten(&self) -> FlatCategory {
        FlatCategory {
            id: self.id,
            name: self.name.to_string(),
            path: self.path.iter().map(|s| s.to_string()).collect(),
            full_path: self.full_path(),
            gender: self.gender,
        }
    }
}

/// Flattened category record: `{ id, name, path, full_path, gender }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatCategory {
    pub id: u32,
    pub name: String,
    pub path: Vec<String>,
    pub full_path: String,
    pub gender: Option<Gender>,
}

/// The fixed catalog of marketplace categories. Constructed once in `main`
/// and handed to callers behind an `Arc` — every classifier call reads it,
/// nothing ever mutates it.
#[derive(Debug)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The built-in marketplace catalog.
    pub fn builtin() -> Self {
        Self::new(CATALOG.to_vec())
    }

    /// Categories in declaration order. Iteration order is observable: it is
    /// the tie-break for scoring and the result order for search.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Case-insensitive substring search against name, then keywords, then
    /// path components. The first matching criterion short-circuits further
    /// checks for that category; results come back in catalog order, at most
    /// `limit` of them.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Category> {
        let query = query.to_lowercase();
        let mut results = Vec::new();

        for category in &self.categories {
            let hit = category.name.to_lowercase().contains(&query)
                || category.keywords.iter().any(|kw| kw.contains(&query))
                || category
                    .path
                    .iter()
                    .any(|part| part.to_lowercase().contains(&query));

            if hit {
                results.push(category);
                if results.len() >= limit {
                    break;
                }
            }
        }

        results
    }

    /// All categories as flattened records, in catalog order. No ranking —
    /// callers filter by gender or free text themselves.
    pub fn flattened(&self) -> Vec<FlatCategory> {
        self.categories.iter().map(Category::flatten).collect()
    }
}
