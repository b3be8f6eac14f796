use crate::config::{METRICS_HEADER, NOT_AVAILABLE, NULL_TEXT, SCORES_HEADER, SEPARATOR_WIDTH};
use crate::models::{Audit, CategoryKind, MetricKind, Report, ReportError};
use std::io::{self, Write};

/// Prints the summary to stdout.
pub fn print_summary(report: &Report) -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(report, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes both summary sections line by line.
///
/// Lines are written as they are produced, so output written before a missing
/// key is hit is left in place.
pub fn write_summary<W: Write>(report: &Report, out: &mut W) -> Result<(), ReportError> {
    if report.categories.is_none() {
        return Err(ReportError::MissingKey("categories".to_string()));
    }
    let separator = "=".repeat(SEPARATOR_WIDTH);

    writeln!(out, "{}", SCORES_HEADER)?;
    writeln!(out, "{}", separator)?;
    for kind in CategoryKind::ALL {
        let score = report.category_score(kind)?;
        writeln!(out, "{}", format_category_line(kind, score))?;
    }
    writeln!(out)?;

    writeln!(out, "{}", METRICS_HEADER)?;
    writeln!(out, "{}", separator)?;
    for kind in MetricKind::ALL {
        let audit = report.audit(kind)?;
        writeln!(out, "{}", format_metric_line(kind, audit)?)?;
    }
    Ok(())
}

// {:.0} rounds half to even on the exact binary value
pub fn format_category_line(kind: CategoryKind, score: f64) -> String {
    format!("{}: {:.0}", kind.label(), score * 100.0)
}

pub fn format_metric_line(kind: MetricKind, audit: &Audit) -> Result<String, ReportError> {
    let title = match &audit.title {
        Some(Some(title)) => title.as_str(),
        Some(None) => NULL_TEXT,
        None => {
            return Err(ReportError::MissingKey(format!(
                "audits.{}.title",
                kind.key()
            )))
        }
    };
    let display = audit
        .display_text()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let score = match &audit.score {
        Some(Some(number)) => number.to_string(),
        Some(None) => NULL_TEXT.to_string(),
        None => {
            return Err(ReportError::MissingKey(format!(
                "audits.{}.score",
                kind.key()
            )))
        }
    };

    Ok(format!("{}: {} (score: {})", title, display, score))
}
