//! Syntactic URL validation.
//!
//! Accepts either an `http(s)://` URL with a plausible first authority
//! character, a bare `label.tld[/path]` domain, or any string carrying one of
//! the known scheme prefixes. No network access or DNS resolution.

/// Characters that may not open the authority of an `http(s)://` URL.
const FORBIDDEN_AUTHORITY_START: &[char] = &['/', '$', '.', '?', '#'];

/// Scheme prefixes accepted verbatim when the grammar does not match.
const KNOWN_PREFIXES: [&str; 4] = ["http://", "https://", "file://", "ftp://"];

/// Maximum length of the bare-domain label.
const MAX_LABEL_LEN: usize = 63;

/// Minimum length of the top-level label.
const MIN_TLD_LEN: usize = 2;

/// Returns true if `url` looks like something the WebView can open.
///
/// `None` and the empty string are invalid. The input is not trimmed.
pub fn is_valid(url: Option<&str>) -> bool {
    let Some(url) = url else {
        return false;
    };
    if url.is_empty() {
        return false;
    }

    let valid = matches_http_url(url)
        || matches_bare_domain(url)
        || KNOWN_PREFIXES.iter().any(|p| url.starts_with(p));

    tracing::info!(
        "URL validation: {} -> {}",
        url,
        if valid { "valid" } else { "invalid" }
    );
    valid
}

/// `http` or `https` (any ASCII case), `://`, then a non-whitespace authority
/// start outside [`FORBIDDEN_AUTHORITY_START`] and non-whitespace to the end.
fn matches_http_url(s: &str) -> bool {
    let Some(rest) = strip_prefix_ignore_ascii_case(s, "http") else {
        return false;
    };
    let rest = strip_prefix_ignore_ascii_case(rest, "s").unwrap_or(rest);
    let Some(rest) = rest.strip_prefix("://") else {
        return false;
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if !c.is_whitespace() && !FORBIDDEN_AUTHORITY_START.contains(&c) => {}
        _ => return false,
    }
    chars.all(|c| !c.is_whitespace())
}

/// `label.tld` with an optional `/...` tail. Exactly one dot in the host part.
fn matches_bare_domain(s: &str) -> bool {
    let host = match s.find('/') {
        Some(i) => &s[..i],
        None => s,
    };
    let Some((label, tld)) = host.split_once('.') else {
        return false;
    };
    is_domain_label(label) && is_tld(tld)
}

fn is_domain_label(label: &str) -> bool {
    (1..=MAX_LABEL_LEN).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_tld(tld: &str) -> bool {
    tld.len() >= MIN_TLD_LEN && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
