use lopdf::{Dictionary, Document, Object};
use tracing::{debug, warn};

use crate::{pdf_utils, AnalyzeError, DocumentMetadata, MetadataValue, Result};

/// Builds the metadata mapping from one parsed [`Document`].
///
/// The order of the mapping is fixed:
/// 1. `Pages`
/// 2. every `/Info` entry, in dictionary order
/// 3. `Format`, `PDF Version`, `Encryption`
pub(crate) struct MetadataExtractor<'a> {
    document: &'a Document,
}

impl<'a> MetadataExtractor<'a> {
    pub(crate) fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub(crate) fn extract(&self) -> DocumentMetadata {
        let mut metadata = DocumentMetadata::new();

        let pages = self.document.get_pages().len();
        metadata.insert("Pages", MetadataValue::Integer(pages as i64));

        if let Some(info) = self.info_dictionary() {
            for (key, value) in info.iter() {
                let name = String::from_utf8_lossy(key);
                let name = name.trim_start_matches('/');
                metadata.insert(name, pdf_utils::object_to_value(self.document, value));
            }
        }

        self.insert_derived_flags(&mut metadata);
        metadata
    }

    /// The trailer `/Info` dictionary, inline or referenced.
    fn info_dictionary(&self) -> Option<&'a Dictionary> {
        let info = self.document.trailer.get(b"Info").ok()?;
        match pdf_utils::resolve(self.document, info) {
            Some(Object::Dictionary(dict)) => Some(dict),
            Some(_) => {
                warn!("/Info is not a dictionary, ignoring it");
                None
            }
            None => {
                warn!("/Info reference cannot be resolved, ignoring it");
                None
            }
        }
    }

    fn insert_derived_flags(&self, metadata: &mut DocumentMetadata) {
        let version = self.document.version.as_str();
        metadata.insert("Format", format!("PDF {version}"));
        metadata.insert("PDF Version", version);
        let encrypted = if self.document.was_encrypted() { "Yes" } else { "No" };
        metadata.insert("Encryption", encrypted);
    }
}

/// Parse `data` once and return its metadata mapping.
///
/// Every failure, whatever its cause, is reported through the returned
/// [`AnalyzeError`]; its display string is what the page shows.
///
/// ```
/// let err = pdfmetadataanalyzer::extract_metadata(b"not a pdf").unwrap_err();
/// assert!(!err.to_string().is_empty());
/// ```
pub fn extract_metadata(data: &[u8]) -> Result<DocumentMetadata> {
    let document = load_document(data)?;
    Ok(MetadataExtractor::new(&document).extract())
}

pub(crate) fn load_document(data: &[u8]) -> Result<Document> {
    if data.is_empty() {
        return Err(AnalyzeError::EmptyInput);
    }
    let document = Document::load_mem(data)?;
    // lopdf drops `/Encrypt` from the trailer only after decrypting with the
    // empty user password; otherwise it returns a document with no objects.
    if document.trailer.has(b"Encrypt") {
        return Err(AnalyzeError::Encrypted);
    }
    debug!(
        version = %document.version,
        objects = document.objects.len(),
        "parsed PDF"
    );
    Ok(document)
}
