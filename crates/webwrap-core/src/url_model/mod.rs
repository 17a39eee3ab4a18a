//! URL validation, normalization and domain extraction.
//!
//! Pure string transformations over user-entered URLs. Every function accepts
//! `Option<&str>` so host bindings can pass a missing value straight through;
//! nothing here returns an error. A missing input yields `false` or `None`.

mod domain;
mod normalize;
mod validate;

pub use domain::extract_domain;
pub use normalize::normalize;
pub use validate::is_valid;

/// Normalizes `url` and returns it only if the normalized form validates.
///
/// This is what the host app runs on text typed into the address field.
///
/// # Examples
///
/// - `validate_and_normalize(Some(" Example.COM/Path "))` → `Some("https://example.com/Path")`
/// - `validate_and_normalize(Some("ws://example.com"))` → `None`
pub fn validate_and_normalize(url: Option<&str>) -> Option<String> {
    let normalized = normalize(url)?;
    if is_valid(Some(&normalized)) {
        Some(normalized)
    } else {
        tracing::debug!("rejected URL after normalization: {}", normalized);
        None
    }
}
