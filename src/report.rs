use std::fmt::{self, Write as _};

use serde::Serialize;
use tracing::{info, warn};

use crate::{analyze_metadata, extract_metadata, AnalyzerConfig, Analysis, DocumentMetadata};

// ── MetadataReport ────────────────────────────────────────────────────────────

/// Everything the populated page shows for one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataReport {
    pub metadata: DocumentMetadata,
    pub analysis: Analysis,
    /// Completeness percentage; `None` only for an empty field table.
    pub score: Option<f64>,
    pub recommendations: Vec<String>,
}

impl MetadataReport {
    pub fn new(metadata: DocumentMetadata, config: &AnalyzerConfig) -> Self {
        let analysis = analyze_metadata(&metadata, &config.rules, &config.date_format);
        let score = analysis.completeness_score();
        let recommendations = analysis.recommendations();
        Self {
            metadata,
            analysis,
            score,
            recommendations,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.analysis.is_complete()
    }

    /// The score as shown on the page, e.g. `"66.7%"`.
    pub fn formatted_score(&self) -> String {
        match self.score {
            Some(score) => format!("{score:.1}%"),
            None => "n/a".to_string(),
        }
    }
}

// ── PageState ─────────────────────────────────────────────────────────────────

/// The three states of the upload page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PageState {
    /// Nothing uploaded yet.
    Empty,
    /// Extraction failed; `message` is the error text shown in the banner.
    Failed { message: String },
    /// Extraction succeeded.
    Populated(MetadataReport),
}

/// Map one upload to a page state.
///
/// `None` means no file was submitted. The function is pure apart from
/// logging: nothing is kept between calls, so a new upload always starts
/// from scratch.
pub fn process_upload(upload: Option<&[u8]>, config: &AnalyzerConfig) -> PageState {
    let Some(data) = upload else {
        return PageState::Empty;
    };

    match extract_metadata(data) {
        Ok(metadata) => {
            let report = MetadataReport::new(metadata, config);
            info!(
                bytes = data.len(),
                fields = report.metadata.len(),
                checks = report.analysis.len(),
                score = %report.formatted_score(),
                "analyzed upload"
            );
            PageState::Populated(report)
        }
        Err(e) => {
            warn!(bytes = data.len(), error = %e, "extraction failed");
            PageState::Failed {
                message: e.to_string(),
            }
        }
    }
}

// ── Text rendering ────────────────────────────────────────────────────────────

/// Plain-text rendering of a page state, used by the command-line front end.
pub fn render_text(state: &PageState) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_text(&mut out, state);
    out
}

fn write_text(out: &mut String, state: &PageState) -> fmt::Result {
    match state {
        PageState::Empty => writeln!(out, "Upload a PDF file to get started!"),
        PageState::Failed { message } => writeln!(out, "Error processing PDF: {message}"),
        PageState::Populated(report) => write_report(out, report),
    }
}

fn write_report(out: &mut String, report: &MetadataReport) -> fmt::Result {
    writeln!(out, "Extracted Metadata")?;
    writeln!(out, "{}", "─".repeat(60))?;
    let width = report
        .metadata
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0)
        .max("Property".len());
    writeln!(out, "{:width$}  Value", "Property")?;
    for (property, value) in report.metadata.iter() {
        writeln!(out, "{property:width$}  {value}")?;
    }

    writeln!(out, "\nMetadata Analysis")?;
    writeln!(out, "{}", "─".repeat(60))?;
    for check in report.analysis.checks() {
        if check.passed {
            writeln!(out, "✓ {}", check.key())?;
        } else {
            writeln!(out, "⚠ {} - Missing or Invalid", check.key())?;
        }
    }
    writeln!(out, "\nMetadata Completeness Score: {}", report.formatted_score())?;

    writeln!(out, "\nRecommendations")?;
    if report.is_complete() {
        writeln!(out, "✓ All metadata fields are complete and valid!")?;
    } else {
        writeln!(out, "Consider adding or fixing the following metadata:")?;
        for field in &report.recommendations {
            writeln!(out, "- {field}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(pairs: &[(&str, &str)]) -> MetadataReport {
        let metadata: DocumentMetadata = pairs.iter().copied().collect();
        MetadataReport::new(metadata, &AnalyzerConfig::default())
    }

    #[test]
    fn no_upload_is_empty() {
        assert_eq!(process_upload(None, &AnalyzerConfig::default()), PageState::Empty);
    }

    #[test]
    fn garbage_upload_fails_with_message() {
        match process_upload(Some(&b"%PDF-garbage"[..]), &AnalyzerConfig::default()) {
            PageState::Failed { message } => assert!(!message.is_empty()),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn score_is_formatted_with_one_decimal() {
        let r = report(&[("Title", "t"), ("Author", "a")]);
        assert_eq!(r.formatted_score(), "50.0%");

        let r = report(&[("Title", "t"), ("Author", "a"), ("ModDate", "bad")]);
        assert_eq!(r.formatted_score(), "40.0%");

        let r = report(&[("Title", "t")]);
        assert_eq!(r.formatted_score(), "25.0%");
    }

    #[test]
    fn text_lists_recommendations() {
        let text = render_text(&PageState::Populated(report(&[("Title", "t")])));
        assert!(text.contains("✓ Title present"));
        assert!(text.contains("⚠ Author present - Missing or Invalid"));
        assert!(text.contains("Metadata Completeness Score: 25.0%"));
        assert!(text.contains("- Author\n- Producer\n- Creator\n"));
    }

    #[test]
    fn text_for_complete_report() {
        let r = report(&[
            ("Title", "t"),
            ("Author", "a"),
            ("Producer", "p"),
            ("Creator", "c"),
        ]);
        let text = render_text(&PageState::Populated(r));
        assert!(text.contains("✓ All metadata fields are complete and valid!"));
        assert!(!text.contains("Consider adding"));
    }

    #[test]
    fn page_state_serializes_with_tag() {
        let json = serde_json::to_value(PageState::Failed {
            message: "boom".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"state": "failed", "message": "boom"}));

        let json = serde_json::to_value(PageState::Populated(report(&[("Title", "t")]))).unwrap();
        assert_eq!(json["state"], "populated");
        assert_eq!(json["score"], 25.0);
        assert_eq!(json["analysis"][0]["field"], "Title");
        assert_eq!(json["analysis"][0]["kind"], "presence");
        assert_eq!(json["metadata"][0]["property"], "Title");
    }
}
