//! URL normalization: trim, default the scheme, lowercase the authority.

/// Whitespace stripped from both ends before normalizing (ASCII only).
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Scheme assumed when the input carries none.
const DEFAULT_SCHEME: &str = "https";

/// Normalizes a user-entered URL.
///
/// - trims ASCII whitespace,
/// - prepends `https://` when there is no `://`,
/// - lowercases the authority (between `://` and the next `/`),
///   leaving scheme and path untouched.
///
/// `None` maps to `None`; the empty string maps to the empty string. The
/// result is a fixed point: normalizing it again yields the same string.
pub fn normalize(url: Option<&str>) -> Option<String> {
    let url = url?;
    if url.is_empty() {
        return Some(String::new());
    }

    let trimmed = url.trim_matches(TRIM_CHARS);
    let (scheme, rest) = trimmed
        .split_once("://")
        .unwrap_or((DEFAULT_SCHEME, trimmed));

    let path_start = rest.find('/').unwrap_or(rest.len());
    let (authority, path) = rest.split_at(path_start);

    let mut out = String::with_capacity(scheme.len() + 3 + rest.len());
    out.push_str(scheme);
    out.push_str("://");
    out.extend(authority.chars().map(simple_lowercase));
    out.push_str(path);

    tracing::info!("normalized URL: {}", out);
    Some(out)
}

/// Unicode simple lowercase mapping: always exactly one char, no locale.
///
/// `char::to_lowercase` applies the full mapping, which only differs for
/// U+0130 (`İ` -> `i` + U+0307).
fn simple_lowercase(c: char) -> char {
    if c == '\u{130}' {
        return 'i';
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize(Some(s)).unwrap()
    }

    #[test]
    fn none_and_empty() {
        assert_eq!(normalize(None), None);
        assert_eq!(norm(""), "");
    }

    #[test]
    fn trims_adds_scheme_and_lowercases_authority() {
        assert_eq!(norm(" Example.COM/Path "), "https://example.com/Path");
        assert_eq!(norm("\t\r\nfoo.com\n"), "https://foo.com");
    }

    #[test]
    fn existing_scheme_is_kept_verbatim() {
        assert_eq!(norm("HTTP://FOO.COM"), "HTTP://foo.com");
        assert_eq!(norm("http://Example.com:8080/A/B"), "http://example.com:8080/A/B");
        assert_eq!(norm("file:///sdcard/Index.html"), "file:///sdcard/Index.html");
    }

    #[test]
    fn whitespace_only_degrades_to_bare_scheme() {
        assert_eq!(norm("   "), "https://");
        assert_eq!(norm("\t"), "https://");
    }

    #[test]
    fn unicode_whitespace_is_not_trimmed() {
        assert_eq!(norm("\u{a0}Foo.com"), "https://\u{a0}foo.com");
    }

    #[test]
    fn only_authority_is_lowercased() {
        assert_eq!(norm("Foo.com/Bar?Q=Baz#Frag"), "https://foo.com/Bar?Q=Baz#Frag");
        assert_eq!(norm("Foo.com?Q=Baz"), "https://foo.com?q=baz");
        assert_eq!(norm("ÜBER.de/Ä"), "https://über.de/Ä");
    }

    #[test]
    fn dotted_capital_i_maps_to_single_char() {
        assert_eq!(norm("İ.com"), "https://i.com");
        assert_eq!(norm("https://İSTANBUL.tr/İ"), "https://istanbul.tr/İ");
    }

    #[test]
    fn simple_lowercase_is_one_to_one() {
        assert_eq!(simple_lowercase('A'), 'a');
        assert_eq!(simple_lowercase('Ü'), 'ü');
        assert_eq!(simple_lowercase('\u{130}'), 'i');
        assert_eq!(simple_lowercase('Σ'), 'σ');
        assert_eq!(simple_lowercase('1'), '1');
    }

    #[test]
    fn empty_scheme_is_preserved() {
        assert_eq!(norm("://Host/x"), "://host/x");
    }

    #[test]
    fn idempotent() {
        for input in [
            "HTTP://FOO.COM",
            "foo.com",
            "",
            "   ",
            " Example.COM/Path ",
            "://Host/x",
            "ÜBER.de/Ä",
            "Foo.com?Q=Baz",
            "İ.com",
        ] {
            let once = norm(input);
            assert_eq!(norm(&once), once, "input {input:?}");
        }
    }
}
