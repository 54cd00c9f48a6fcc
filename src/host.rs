//! Host-boundary helpers.
//!
//! The pad's host is a form controller that stores each exported value in a
//! string-typed field and occasionally produces two outward artifacts: a
//! static printable document and an email summary. Both are built here from
//! data the host already holds. In particular [`ExportView`] receives the
//! already-encoded image strings as inputs; it never inspects or rewrites
//! live markup.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::PadUpdate;

/// The host-side stored value for one signature pad.
///
/// Register [`SignatureField::store`] through `Pad::on_change` (behind an
/// `Arc<Mutex<_>>` if the host shares it) and the field tracks the pad in
/// lockstep: stroke ends overwrite it, a clear empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureField {
    value: String,
}

impl SignatureField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored value from a pad notification.
    pub fn store(&mut self, update: &PadUpdate) {
        self.value = update.encoded.clone();
    }

    /// The stored encoded value, `""` when unsigned.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_signed(&self) -> bool {
        !self.value.is_empty()
    }
}

enum Block {
    Line { label: String, text: String },
    Signature { label: String, encoded: String },
}

/// Builder for a static export document (the print/PDF view).
///
/// Receives field text and encoded signature images as plain data and
/// renders a self-contained HTML document with `<img src="data:...">` tags.
pub struct ExportView {
    title: String,
    blocks: Vec<Block>,
}

impl ExportView {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    /// Add a labeled text line.
    pub fn add_line(&mut self, label: &str, text: &str) -> &mut Self {
        self.blocks.push(Block::Line {
            label: label.to_string(),
            text: text.to_string(),
        });
        self
    }

    /// Add a labeled signature image. `encoded` must be a data URL as
    /// produced by the pad; anything else is rejected so a broken stored
    /// value cannot end up as a dangling image reference.
    pub fn add_signature(&mut self, label: &str, encoded: &str) -> Result<&mut Self> {
        if !encoded.starts_with("data:image/") || !encoded.contains(";base64,") {
            return Err(Error::InvalidStoredValue(format!(
                "signature for {:?} is not an embedded image",
                label
            )));
        }
        self.blocks.push(Block::Signature {
            label: label.to_string(),
            encoded: encoded.to_string(),
        });
        Ok(self)
    }

    /// Render the document. The output embeds everything it references;
    /// handing it to a print dialog needs no live form state.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html><head><meta charset=\"utf-8\">");
        let _ = writeln!(html, "<title>{}</title></head><body>", escape_html(&self.title));
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(&self.title));
        for block in &self.blocks {
            match block {
                Block::Line { label, text } => {
                    let _ = writeln!(
                        html,
                        "<p><strong>{}:</strong> {}</p>",
                        escape_html(label),
                        escape_html(text)
                    );
                }
                Block::Signature { label, encoded } => {
                    // The data URL is machine-produced base64; only the
                    // label needs escaping.
                    let _ = writeln!(
                        html,
                        "<figure><img src=\"{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>",
                        encoded,
                        escape_html(label),
                        escape_html(label)
                    );
                }
            }
        }
        let _ = writeln!(html, "</body></html>");
        html
    }
}

/// Build a `mailto:` URL carrying a text summary of the form, the way the
/// original "send by email" action did. Signatures are referenced by name in
/// the body (they travel as printed/attached images), never inlined.
pub fn email_summary(recipient: &str, subject: &str, lines: &[(String, String)]) -> String {
    let mut body = String::new();
    for (label, text) in lines {
        let _ = writeln!(body, "{}: {}", label, text);
    }
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        percent_encode(subject),
        percent_encode(&body)
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// RFC 3986 unreserved characters pass through; everything else is
// percent-encoded per byte (same set encodeURIComponent keeps literal,
// minus the sub-delims, which mail clients tolerate encoded).
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                let _ = write!(out, "%{:02X}", b);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::PNG_DATA_URL_PREFIX;

    #[test]
    fn field_tracks_pad_updates() {
        let mut field = SignatureField::new();
        assert!(!field.is_signed());

        field.store(&PadUpdate {
            encoded: format!("{}abc", PNG_DATA_URL_PREFIX),
            is_empty: false,
        });
        assert!(field.is_signed());

        field.store(&PadUpdate {
            encoded: String::new(),
            is_empty: true,
        });
        assert!(!field.is_signed());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn export_view_embeds_signatures_as_data() {
        let encoded = format!("{}iVBORw0KGgo=", PNG_DATA_URL_PREFIX);
        let mut view = ExportView::new("Authorization");
        view.add_line("Name", "A. Client");
        view.add_signature("Client signature", &encoded).unwrap();
        let html = view.to_html();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(&format!("src=\"{}\"", encoded)));
        assert!(html.contains("A. Client"));
    }

    #[test]
    fn export_view_rejects_non_data_urls() {
        let mut view = ExportView::new("t");
        assert!(matches!(
            view.add_signature("sig", "https://example.com/sig.png"),
            Err(Error::InvalidStoredValue(_))
        ));
        assert!(matches!(
            view.add_signature("sig", ""),
            Err(Error::InvalidStoredValue(_))
        ));
    }

    #[test]
    fn export_view_escapes_text_content() {
        let mut view = ExportView::new("<title>");
        view.add_line("label", "a < b & \"c\"");
        let html = view.to_html();
        assert!(html.contains("&lt;title&gt;"));
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(!html.contains("<title>\n"));
    }

    #[test]
    fn email_summary_percent_encodes_subject_and_body() {
        let url = email_summary(
            "agent@example.com",
            "Form 17 / approval",
            &[("Name".to_string(), "A Client".to_string())],
        );
        assert!(url.starts_with("mailto:agent@example.com?subject="));
        assert!(url.contains("Form%2017%20%2F%20approval"));
        assert!(url.contains("body=Name%3A%20A%20Client%0A"));
    }
}
