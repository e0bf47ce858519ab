use std::path::Path;

pub const DEFAULT_MIME: &str = "application/octet-stream";

// Archive extensions where GitHub expects a different type than the registry guess.
const OVERRIDES: &[(&str, &str)] = &[("gz", "application/gzip"), ("tgz", "application/gzip")];

/// Looks up the mime type of a path by its last extension.
pub fn mime_or_default(path: impl AsRef<Path>) -> &'static str {
    let path = path.as_ref();

    path.extension()
        .and_then(|extension| extension.to_str())
        .and_then(|extension| {
            OVERRIDES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(extension))
                .map(|(_, mime)| *mime)
        })
        .or_else(|| mime_guess::from_path(path).first_raw())
        .unwrap_or(DEFAULT_MIME)
}
