//! `webwrap validate <url>`.

use webwrap_core::url_model;

/// Print "valid" or "invalid". An invalid URL is an answer, not an error.
pub fn run_validate(url: &str) {
    let verdict = if url_model::is_valid(Some(url)) {
        "valid"
    } else {
        "invalid"
    };
    println!("{verdict}");
}
