use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::config::NULL_TEXT;

// pub struct for individual audit results.
// Each field is None when its key is absent and Some(None) when it is `null`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Audit {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub score: Option<Option<Number>>,
    // Older Lighthouse versions emit non-string values here
    #[serde(default, rename = "displayValue", deserialize_with = "present")]
    pub display_value: Option<Option<Value>>,
}

impl Audit {
    /// Text shown for the metric value; returns `None` only when the key is absent.
    pub fn display_text(&self) -> Option<String> {
        match self.display_value.as_ref()? {
            None => Some(NULL_TEXT.to_string()),
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The audits shown under KEY METRICS, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    FirstContentfulPaint,
    LargestContentfulPaint,
    TotalBlockingTime,
    CumulativeLayoutShift,
    SpeedIndex,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::FirstContentfulPaint,
        MetricKind::LargestContentfulPaint,
        MetricKind::TotalBlockingTime,
        MetricKind::CumulativeLayoutShift,
        MetricKind::SpeedIndex,
    ];

    /// Key under `audits` in the report.
    pub fn key(self) -> &'static str {
        match self {
            MetricKind::FirstContentfulPaint => "first-contentful-paint",
            MetricKind::LargestContentfulPaint => "largest-contentful-paint",
            MetricKind::TotalBlockingTime => "total-blocking-time",
            MetricKind::CumulativeLayoutShift => "cumulative-layout-shift",
            MetricKind::SpeedIndex => "speed-index",
        }
    }
}
