use std::path::Path;

use lopdf::Document;

use crate::extractor::{load_document, MetadataExtractor};
use crate::{analyze_metadata, AnalyzerConfig, Analysis, DocumentMetadata, MetadataReport, Result};

// ── PdfAnalyzer ───────────────────────────────────────────────────────────────

/// Entry point for metadata extraction and analysis of one PDF.
///
/// # Creating an analyzer
///
/// ```no_run
/// use pdfmetadataanalyzer::{AnalyzerConfig, FieldRule, PdfAnalyzer};
///
/// // From a file path
/// let a = PdfAnalyzer::from_path("report.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("report.pdf").unwrap();
/// let a = PdfAnalyzer::from_bytes(&bytes).unwrap();
///
/// // With a custom field table
/// let cfg = AnalyzerConfig {
///     rules: vec![FieldRule::presence("Subject"), FieldRule::date("ModDate")],
///     ..Default::default()
/// };
/// let a = PdfAnalyzer::with_config("report.pdf", cfg).unwrap();
/// ```
pub struct PdfAnalyzer {
    document: Document,
    config: AnalyzerConfig,
}

impl PdfAnalyzer {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, AnalyzerConfig::default())
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_config(data, AnalyzerConfig::default())
    }

    /// Load a PDF from the file system with a custom [`AnalyzerConfig`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: AnalyzerConfig) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes_with_config(&data, config)
    }

    /// Load a PDF from memory with a custom [`AnalyzerConfig`].
    pub fn from_bytes_with_config(data: &[u8], config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            document: load_document(data)?,
            config,
        })
    }

    // ── Extraction and analysis ───────────────────────────────────────────────

    /// The ordered metadata mapping: `Pages`, the `/Info` entries, then
    /// `Format`, `PDF Version` and `Encryption`.
    pub fn metadata(&self) -> DocumentMetadata {
        MetadataExtractor::new(&self.document).extract()
    }

    /// Run the configured field table against [`metadata`](Self::metadata).
    pub fn analysis(&self) -> Analysis {
        analyze_metadata(
            &self.metadata(),
            &self.config.rules,
            &self.config.date_format,
        )
    }

    /// Extract, analyze and score in one step.
    pub fn analyze(&self) -> MetadataReport {
        MetadataReport::new(self.metadata(), &self.config)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a reference to the active [`AnalyzerConfig`].
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
