//! Multipart form construction from domain form fields.

use reqwest::multipart::{Form, Part};

use costealo_application::ports::TransportError;
use costealo_domain::FormField;

/// Builds a reqwest multipart form. The Content-Type header, boundary
/// included, is derived by reqwest when the form is attached.
pub(crate) fn build_form(fields: &[FormField]) -> Result<Form, TransportError> {
    let mut form = Form::new();

    for field in fields {
        match field {
            FormField::Text { name, value } => {
                form = form.text(name.clone(), value.clone());
            }
            FormField::File {
                name,
                file_name,
                content,
                ..
            } => {
                let mime_type = field
                    .effective_content_type()
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let part = Part::bytes(content.clone())
                    .file_name(file_name.clone())
                    .mime_str(&mime_type)
                    .map_err(|e| TransportError::Other(format!("invalid MIME type: {e}")))?;
                form = form.part(name.clone(), part);
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_mixed_form() {
        let fields = vec![
            FormField::file("file", "precios.csv", b"a;b;c".to_vec()),
            FormField::text("databaseName", "Precios 2026"),
        ];
        let form = build_form(&fields).unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        let fields = vec![FormField::file("file", "precios", vec![0u8; 4])];
        assert!(build_form(&fields).is_ok());
    }
}
