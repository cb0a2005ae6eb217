//! # pdfmetadataanalyzer
//!
//! A Rust library for checking how complete a PDF's document-information
//! dictionary is.
//!
//! ## What this crate does
//!
//! 1. **Extract metadata** — parses the PDF once and collects the page count,
//!    every `/Info` entry, and the derived `Format`, `PDF Version` and
//!    `Encryption` flags into one ordered mapping.
//! 2. **Analyze metadata** — runs a configurable table of field checks:
//!    presence checks (`"Title present"`) and date-format checks
//!    (`"CreationDate valid"`).
//! 3. **Report** — turns the checks into a completeness score and a list of
//!    fields worth adding or fixing.
//! 4. **Serve** — renders the result as a single-page upload form over HTTP.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfmetadataanalyzer::PdfAnalyzer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = PdfAnalyzer::from_path("report.pdf")?;
//! let report = analyzer.analyze();
//!
//! for check in report.analysis.checks() {
//!     println!("{} — {}", check.key(), check.passed);
//! }
//! if let Some(score) = report.score {
//!     println!("Completeness: {score:.1}%");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use thiserror::Error;

mod analysis;
mod analyzer;
mod extractor;
mod metadata;
pub mod page;
mod pdf_utils;
mod report;
mod rules;
pub mod server;

pub use analysis::{analyze_metadata, Analysis, CheckResult};
pub use analyzer::PdfAnalyzer;
pub use extractor::extract_metadata;
pub use metadata::{DocumentMetadata, MetadataValue};
pub use report::{process_upload, render_text, MetadataReport, PageState};
pub use rules::{default_rules, CheckKind, FieldRule, DEFAULT_DATE_FORMAT};

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`PdfAnalyzer`] and [`process_upload`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalyzerConfig {
    /// Field checks to run, in display order.
    #[serde(default = "default_rules")]
    pub rules: Vec<FieldRule>,

    /// `chrono` format string a text date value must match exactly.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            date_format: default_date_format(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a JSON rule file.
    ///
    /// Missing keys fall back to the built-in table and date format, so
    /// `{"rules": [{"field": "Subject", "check": "presence"}]}` is a complete
    /// file.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AnalyzeError::InvalidRules(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON rule file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        if let Some(rule) = self.rules.iter().find(|r| r.field.trim().is_empty()) {
            return Err(AnalyzeError::InvalidRules(format!(
                "rule with empty field name ({:?} check)",
                rule.check
            )));
        }
        if self.date_format.is_empty() {
            return Err(AnalyzeError::InvalidRules("date format is empty".into()));
        }
        Ok(())
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// A filesystem I/O error occurred (e.g. when loading a PDF or rule file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upload contained no bytes at all.
    #[error("uploaded file is empty")]
    EmptyInput,

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    Parse(#[from] lopdf::Error),

    /// The file needs a user password to be opened.
    #[error("PDF is encrypted and requires a password")]
    Encrypted,

    /// A rule file could not be parsed or describes an unusable table.
    #[error("Invalid rule configuration: {0}")]
    InvalidRules(String),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
