// Image reference resolution
use serde::Serialize;

use crate::config::Settings;

/// Prefixes that mark a reference as already fully addressable.
const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "wxfile://"];

/// Prefixes for assets bundled with the client, never rewritten.
const STATIC_PREFIXES: &[&str] = &["/static/", "@/static/"];

/// How an image reference is classified, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    /// Absent or empty input.
    Empty,
    /// Full URL (http, https) or local file scheme (wxfile).
    Absolute,
    /// Inline `data:` URI.
    DataUri,
    /// Asset bundled with the client, served locally.
    StaticAsset,
    /// Backend-returned path, resolved against the base URL.
    Relative,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Empty => "empty",
            ReferenceKind::Absolute => "absolute",
            ReferenceKind::DataUri => "data-uri",
            ReferenceKind::StaticAsset => "static-asset",
            ReferenceKind::Relative => "relative",
        }
    }
}

/// Classify a reference by its prefix.
pub fn classify(reference: &str) -> ReferenceKind {
    if reference.is_empty() {
        return ReferenceKind::Empty;
    }

    if ABSOLUTE_PREFIXES.iter().any(|p| reference.starts_with(p)) {
        return ReferenceKind::Absolute;
    }

    if reference.starts_with("data:") {
        return ReferenceKind::DataUri;
    }

    if STATIC_PREFIXES.iter().any(|p| reference.starts_with(p)) {
        return ReferenceKind::StaticAsset;
    }

    ReferenceKind::Relative
}

/// Resolve an image reference against a base URL.
///
/// Already-addressable references (full URLs, data URIs, bundled static
/// assets) pass through unchanged. Anything else is treated as a
/// backend-relative path and prefixed with the base URL. Never fails:
/// absent or empty input maps to an empty string.
pub fn resolve_image_url(reference: Option<&str>, base_url: &str) -> String {
    let reference = match reference {
        Some(r) if !r.is_empty() => r,
        _ => return String::new(),
    };

    match classify(reference) {
        ReferenceKind::Empty => String::new(),
        ReferenceKind::Absolute | ReferenceKind::DataUri | ReferenceKind::StaticAsset => {
            reference.to_string()
        }
        ReferenceKind::Relative => {
            // Exactly one slash between base and path.
            let prefix = base_url.strip_suffix('/').unwrap_or(base_url);
            if reference.starts_with('/') {
                format!("{prefix}{reference}")
            } else {
                format!("{prefix}/{reference}")
            }
        }
    }
}

/// Build the public URL for an uploaded object key.
///
/// The key is appended verbatim after a single `/`.
pub fn public_object_url(base_url: &str, object_key: &str) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}{object_key}")
    } else {
        format!("{base_url}/{object_key}")
    }
}

/// Resolver bound to a configured base URL.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.resolver.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolve(&self, reference: Option<&str>) -> String {
        resolve_image_url(reference, &self.base_url)
    }
}
