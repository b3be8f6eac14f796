use crate::models::error::ReportError;
use crate::models::lighthouse::audit::{Audit, MetricKind};
use crate::models::lighthouse::category::{Category, CategoryKind};
use serde::Deserialize;
use std::collections::HashMap;

// Root of a Lighthouse JSON report. Only the two maps the summary reads are
// modelled; everything else in the document is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub categories: Option<HashMap<String, Category>>,
    #[serde(default)]
    pub audits: Option<HashMap<String, Audit>>,
}

impl Report {
    pub fn category(&self, kind: CategoryKind) -> Result<&Category, ReportError> {
        let categories = self
            .categories
            .as_ref()
            .ok_or_else(|| ReportError::MissingKey("categories".to_string()))?;
        categories
            .get(kind.key())
            .ok_or_else(|| ReportError::MissingKey(format!("categories.{}", kind.key())))
    }

    /// Score of a category; a missing or `null` score is an error.
    pub fn category_score(&self, kind: CategoryKind) -> Result<f64, ReportError> {
        let category = self.category(kind)?;
        category
            .score
            .ok_or_else(|| ReportError::NullScore(format!("categories.{}.score", kind.key())))
    }

    pub fn audit(&self, kind: MetricKind) -> Result<&Audit, ReportError> {
        let audits = self
            .audits
            .as_ref()
            .ok_or_else(|| ReportError::MissingKey("audits".to_string()))?;
        audits
            .get(kind.key())
            .ok_or_else(|| ReportError::MissingKey(format!("audits.{}", kind.key())))
    }
}
