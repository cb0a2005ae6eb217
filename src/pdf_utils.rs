//! Shared PDF object helpers used by the extractor.

use lopdf::{Document, Object};

use crate::MetadataValue;

/// Decode a PDF text string.
///
/// Strings starting with the UTF-16BE byte-order mark are decoded as UTF-16;
/// everything else is tried as UTF-8 and falls back to Latin-1.
pub(crate) fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Resolve a single level of indirection. Dangling references yield `None`.
pub(crate) fn resolve<'a>(document: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => document.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Convert an `/Info` entry into a [`MetadataValue`].
pub(crate) fn object_to_value(document: &Document, object: &Object) -> MetadataValue {
    let Some(object) = resolve(document, object) else {
        return MetadataValue::Null;
    };

    match object {
        Object::String(bytes, _) => MetadataValue::Text(decode_text_string(bytes)),
        Object::Name(name) => MetadataValue::Text(String::from_utf8_lossy(name).into_owned()),
        Object::Integer(n) => MetadataValue::Integer(*n),
        Object::Real(n) => MetadataValue::Real(*n),
        Object::Boolean(b) => MetadataValue::Boolean(*b),
        _ => MetadataValue::Null,
    }
}
