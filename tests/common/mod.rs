// Builds small PDFs in memory so the tests need no binary fixtures.

#![allow(dead_code)]

use lopdf::{
    dictionary, Document, EncryptionState, EncryptionVersion, Object, ObjectId, Permissions,
    StringFormat,
};

/// A one-page PDF with no `/Info` dictionary.
pub fn pdf_without_info() -> Vec<u8> {
    save(base_document(1))
}

/// A PDF whose `/Info` dictionary holds the given text entries, in order.
pub fn pdf_with_info(pages: usize, entries: &[(&str, &str)]) -> Vec<u8> {
    let objects: Vec<(&str, Object)> = entries
        .iter()
        .map(|(k, v)| (*k, Object::string_literal(*v)))
        .collect();
    pdf_with_info_objects(pages, objects)
}

/// A PDF whose `/Info` dictionary holds arbitrary objects.
pub fn pdf_with_info_objects(pages: usize, entries: Vec<(&str, Object)>) -> Vec<u8> {
    save(document_with_info(pages, entries))
}

/// A one-page RC4-128 encrypted PDF with the given text `/Info` entries.
///
/// An empty `user_password` gives a file any reader can open; anything else
/// requires the password.
pub fn encrypted_pdf(user_password: &str, entries: &[(&str, &str)]) -> Vec<u8> {
    let objects = entries
        .iter()
        .map(|(k, v)| (*k, Object::string_literal(*v)))
        .collect();
    let mut doc = document_with_info(1, objects);
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(vec![0x11; 16], StringFormat::Literal),
            Object::String(vec![0x22; 16], StringFormat::Literal),
        ]),
    );

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).expect("failed to set up encryption");
    doc.encrypt(&state).expect("failed to encrypt test PDF");
    save(doc)
}

fn document_with_info(pages: usize, entries: Vec<(&str, Object)>) -> Document {
    let mut doc = base_document(pages);
    let mut info = lopdf::Dictionary::new();
    for (key, value) in entries {
        info.set(key, value);
    }
    let info_id = doc.add_object(Object::Dictionary(info));
    doc.trailer.set("Info", Object::Reference(info_id));
    doc
}

/// Title, Author, Producer and Creator plus both dates in the exact format.
pub fn complete_pdf() -> Vec<u8> {
    pdf_with_info(
        1,
        &[
            ("Title", "Quarterly report"),
            ("Author", "Ada Lovelace"),
            ("Producer", "lopdf"),
            ("Creator", "Writer"),
            ("CreationDate", "20230615120000"),
            ("ModDate", "20230616093000"),
        ],
    )
}

fn base_document(page_count: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for _ in 0..page_count {
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}
