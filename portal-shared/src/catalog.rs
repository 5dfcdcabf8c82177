//! Static asset conventions for the service catalog and help guides.

use std::sync::LazyLock;

use regex::Regex;

/// Folder holding the downloadable PDF forms and guides.
pub const PDF_ROOT: &str = "/media/pdfs";

/// Keywords mapped to the form that covers them, checked in order.
const FORM_KEYWORDS: [&str; 5] = ["sesame", "visa", "muhira", "transfert", "boaweb"];

/// Form used when no keyword matches.
const GENERAL_FORM: &str = "general";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Slug of the PDF form for a service, derived from keywords in its name.
pub fn form_slug(service_name: &str) -> &'static str {
    let name = service_name.to_lowercase();
    FORM_KEYWORDS
        .iter()
        .find(|keyword| name.contains(*keyword))
        .copied()
        .unwrap_or(GENERAL_FORM)
}

/// Path of the PDF form for a service, e.g. `/media/pdfs/sesame.pdf`.
pub fn form_url(service_name: &str) -> String {
    format!("{PDF_ROOT}/{}.pdf", form_slug(service_name))
}

/// Name suggested to the browser when saving the form.
pub fn form_download_name(service_name: &str) -> String {
    format!("Formulaire_{}.pdf", underscore_whitespace(service_name))
}

/// Name suggested to the browser when saving a help guide.
pub fn guide_download_name(title: &str) -> String {
    format!("{}.pdf", underscore_whitespace(title))
}

/// Replace every run of whitespace with a single underscore.
pub fn underscore_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, "_").into_owned()
}
