use serde::Deserialize;

// pub struct for each category score
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Category {
    #[serde(default)]
    pub score: Option<f64>,
}

/// The report categories shown in the summary, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::Performance,
        CategoryKind::Accessibility,
        CategoryKind::BestPractices,
        CategoryKind::Seo,
    ];

    /// Key under `categories` in the report.
    pub fn key(self) -> &'static str {
        match self {
            CategoryKind::Performance => "performance",
            CategoryKind::Accessibility => "accessibility",
            CategoryKind::BestPractices => "best-practices",
            CategoryKind::Seo => "seo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryKind::Performance => "Performance",
            CategoryKind::Accessibility => "Accessibility",
            CategoryKind::BestPractices => "Best Practices",
            CategoryKind::Seo => "SEO",
        }
    }
}
