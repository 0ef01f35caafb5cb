//! Posting plans — the named step sequence a platform session walks through
//! to publish one listing. Each step carries its own timeout and retry
//! budget; the category-tree navigation step consumes the path the
//! classifier suggested.

use std::time::Duration;

use crate::classifier::taxonomy::FlatCategory;
use crate::models::listing::{ListingDraft, Platform};

/// What a step does. The variants are deliberately coarse: the driver owns
/// the page-level details, the plan only sequences and parameterizes them.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    OpenForm,
    UploadPhotos { count: usize },
    FillDetails,
    /// Walk the category picker, one click per path segment, root to leaf.
    SelectCategory { path: Vec<String> },
    SelectCondition { condition: String },
    SetPrice { price: f64 },
    Submit,
    Verify,
}

/// One named step with its execution policy.
#[derive(Debug, Clone)]
pub struct PlanStep {
    pub name: &'static str,
    pub action: StepAction,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl PlanStep {
    fn new(name: &'static str, action: StepAction, timeout_secs: u64, max_retries: u32) -> Self {
        Self {
            name,
            action,
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
        }
    }
}

/// A full posting sequence for one listing on one platform.
#[derive(Debug, Clone)]
pub struct PostingPlan {
    pub platform: Platform,
    pub steps: Vec<PlanStep>,
}

/// Builds the step sequence for a listing.
///
/// `category` must be present for platforms where
/// [`Platform::requires_category`] holds; the caller (the posting worker)
/// resolves it through the classifier before building the plan.
pub fn build_plan(
    platform: Platform,
    listing: &ListingDraft,
    category: Option<&FlatCategory>,
) -> PostingPlan {
    let mut steps = vec![
        PlanStep::new("open_form", StepAction::OpenForm, 30, 2),
        PlanStep::new(
            "upload_photos",
            StepAction::UploadPhotos {
                count: listing.images.len(),
            },
            60,
            2,
        ),
        PlanStep::new("fill_details", StepAction::FillDetails, 30, 1),
    ];

    if let Some(category) = category {
        steps.push(PlanStep::new(
            "select_category",
            StepAction::SelectCategory {
                path: category.path.clone(),
            },
            45,
            2,
        ));
    }

    if let Some(condition) = &listing.condition {
        steps.push(PlanStep::new(
            "select_condition",
            StepAction::SelectCondition {
                condition: condition.clone(),
            },
            15,
            1,
        ));
    }

    steps.push(PlanStep::new(
        "set_price",
        StepAction::SetPrice {
            price: listing.price,
        },
        15,
        1,
    ));
    steps.push(PlanStep::new("submit", StepAction::Submit, 60, 0));
    steps.push(PlanStep::new("verify", StepAction::Verify, 30, 2));

    PostingPlan { platform, steps }
}
