//! `webwrap check <url>` – what the address bar does with typed input.

use anyhow::Result;
use webwrap_core::url_model;

/// Print the normalized URL, or fail if it does not validate.
pub fn run_check(url: &str) -> Result<()> {
    match url_model::validate_and_normalize(Some(url)) {
        Some(normalized) => {
            println!("{normalized}");
            Ok(())
        }
        None => anyhow::bail!("invalid URL: {url:?}"),
    }
}
