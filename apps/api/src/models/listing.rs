use serde::{Deserialize, Serialize};

/// Target marketplace for a posting job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Vinted,
    Leboncoin,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Vinted => "vinted",
            Platform::Leboncoin => "leboncoin",
        }
    }

    /// Whether posting on this platform requires navigating a category tree
    /// (and therefore a classifier run before the browser session starts).
    pub fn requires_category(&self) -> bool {
        matches!(self, Platform::Vinted)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing as submitted for posting. This is the input contract of the
/// posting pipeline — no persistence, the draft lives and dies with its job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub condition: Option<String>,
    /// Free-form category hint forwarded to the classifier.
    pub category_hint: Option<String>,
}
