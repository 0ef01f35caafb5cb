use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::classifier::gender::detect_gender;
use crate::classifier::suggest::suggest_category;
use crate::classifier::taxonomy::{FlatCategory, Gender};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category_hint: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub title: String,
    pub description: String,
    pub detected_gender: Option<Gender>,
    pub suggested_category: Option<FlatCategory>,
    pub confidence: f32,
    pub alternatives: Vec<FlatCategory>,
    pub message: Option<String>,
}

/// POST /api/v1/categories/analyze
///
/// Previews the category the posting automation would pick for a listing,
/// before anything is submitted.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let suggestion = suggest_category(
        &state.taxonomy,
        &req.title,
        &req.description,
        req.category_hint.as_deref(),
    );

    // Reported gender is always the text detection, hint or not — it tells
    // the user what the text alone says.
    let detected_gender = detect_gender(&format!("{} {}", req.title, req.description));

    Json(AnalyzeResponse {
        title: req.title,
        description: req.description,
        detected_gender,
        suggested_category: suggestion.category,
        confidence: suggestion.confidence,
        alternatives: suggestion.alternatives,
        message: suggestion.message,
    })
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub gender: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: usize,
    pub categories: Vec<FlatCategory>,
}

/// GET /api/v1/categories/list
///
/// All categories, optionally narrowed by gender (exact match, with `mixte`
/// always included) and by free-text substring against full path or name.
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Json<ListResponse> {
    let mut categories = state.taxonomy.flattened();

    if let Some(gender) = &params.gender {
        let gender = gender.to_lowercase();
        categories.retain(|c| gender_matches(c.gender, &gender));
    }

    if let Some(search) = &params.search {
        let search = search.to_lowercase();
        categories.retain(|c| {
            c.full_path.to_lowercase().contains(&search) || c.name.to_lowercase().contains(&search)
        });
    }

    Json(ListResponse {
        total: categories.len(),
        categories,
    })
}

fn gender_matches(category_gender: Option<Gender>, wanted: &str) -> bool {
    match category_gender {
        Some(g) => g.as_str() == wanted || g == Gender::Mixte,
        None => false,
    }
}

fn default_search_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub categories: Vec<FlatCategory>,
}

/// GET /api/v1/categories/search
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let limit = params.limit.clamp(1, 50);
    let categories: Vec<FlatCategory> = state
        .taxonomy
        .search(&params.q, limit)
        .into_iter()
        .map(|c| c.flatten())
        .collect();

    Json(SearchResponse {
        query: params.q,
        total: categories.len(),
        categories,
    })
}

#[derive(Debug, Serialize)]
pub struct ByGenderResponse {
    pub gender: String,
    pub categories: BTreeMap<String, Vec<FlatCategory>>,
}

/// GET /api/v1/categories/by-gender/:gender
///
/// Categories for one audience (plus `mixte`), grouped by their root path
/// segment — the shape a frontend category browser consumes.
pub async fn handle_by_gender(
    State(state): State<AppState>,
    Path(gender): Path<String>,
) -> Json<ByGenderResponse> {
    let wanted = gender.to_lowercase();

    let mut grouped: BTreeMap<String, Vec<FlatCategory>> = BTreeMap::new();
    for category in state.taxonomy.flattened() {
        if !gender_matches(category.gender, &wanted) {
            continue;
        }
        let root = category
            .path
            .first()
            .cloned()
            .unwrap_or_else(|| "Autre".to_string());
        grouped.entry(root).or_default().push(category);
    }

    Json(ByGenderResponse {
        gender,
        categories: grouped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_matches_exact_or_mixte() {
        assert!(gender_matches(Some(Gender::Femme), "femme"));
        assert!(gender_matches(Some(Gender::Mixte), "femme"));
        assert!(gender_matches(Some(Gender::Mixte), "mixte"));
        assert!(!gender_matches(Some(Gender::Homme), "femme"));
        assert!(!gender_matches(None, "femme"));
    }
}
