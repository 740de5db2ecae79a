// web-client/src/locale.rs
use common::models::locale::Locale;

/// Outcome of the locale middleware for one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRouting {
    PassThrough,
    Rewrite(String),
}

// Namespaces the middleware never touches
const EXCLUDED_PREFIXES: [&str; 3] = ["/api", "/assets", "/static"];

/// Ensure every rendered path carries exactly one valid locale prefix.
/// Stateless; runs once per navigation before any page code executes.
pub fn localize_path(path: &str) -> LocaleRouting {
    if is_excluded(path) {
        return LocaleRouting::PassThrough;
    }

    let trimmed = path.trim_start_matches('/');
    let first_segment = trimmed.split('/').next().unwrap_or("");
    if Locale::from_prefix(first_segment).is_some() {
        return LocaleRouting::PassThrough;
    }

    if trimmed.is_empty() {
        return LocaleRouting::Rewrite(format!("/{}", Locale::default()));
    }
    LocaleRouting::Rewrite(format!("/{}/{}", Locale::default(), trimmed))
}

fn is_excluded(path: &str) -> bool {
    if EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
    {
        return true;
    }
    // Framework-internal namespaces
    if path.starts_with("/_") {
        return true;
    }
    // Asset requests carry a file extension in the final segment
    path.rsplit('/').next().map(|segment| segment.contains('.')).unwrap_or(false)
}
