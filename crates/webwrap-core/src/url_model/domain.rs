//! Domain (host) extraction without a full URL parse.

/// Extracts the host part of `url`: scheme, path and port are stripped, case is kept.
///
/// Returns `None` only for a `None` input. Strings without `://`, `/` or `:`
/// come back unchanged.
pub fn extract_domain(url: Option<&str>) -> Option<String> {
    let url = url?;

    let rest = match url.find("://") {
        Some(i) => &url[i + 3..],
        None => url,
    };
    let authority = match rest.find('/') {
        Some(i) => &rest[..i],
        None => rest,
    };
    let host = match authority.find(':') {
        Some(i) => &authority[..i],
        None => authority,
    };

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(s: &str) -> String {
        extract_domain(Some(s)).unwrap()
    }

    #[test]
    fn none_is_sentinel() {
        assert_eq!(extract_domain(None), None);
    }

    #[test]
    fn strips_scheme_port_and_path_keeping_case() {
        assert_eq!(domain("https://Example.COM:8080/a/b"), "Example.COM");
        assert_eq!(domain("http://example.com/index.html"), "example.com");
        assert_eq!(domain("ftp://mirror.example.org"), "mirror.example.org");
    }

    #[test]
    fn without_scheme() {
        assert_eq!(domain("example.com/path"), "example.com");
        assert_eq!(domain("localhost:3000"), "localhost");
    }

    #[test]
    fn degenerate_input_returned_unchanged() {
        assert_eq!(domain("example"), "example");
        assert_eq!(domain(""), "");
        assert_eq!(domain("  spaced words  "), "  spaced words  ");
    }

    #[test]
    fn only_first_separator_counts() {
        assert_eq!(domain("https://a.com/x://b.com"), "a.com");
        assert_eq!(domain("file:///sdcard/page.html"), "");
        assert_eq!(domain("https://user:pw@host.com/"), "user");
    }
}
