//! Upload payload fixtures.

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;

/// A few bytes that look like the start of an MP4 container.
pub fn sample_video() -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftypmp42");
    data.extend((0..4096u32).map(|i| (i % 251) as u8));
    data
}

/// A minimal PDF document.
pub fn sample_pdf() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n"
        .to_vec()
}

/// Form with a single `file` part.
pub fn file_form(filename: &str, mime_type: &str, data: Vec<u8>) -> MultipartForm {
    let part = Part::bytes(Bytes::from(data))
        .file_name(filename.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part("file", part)
}
