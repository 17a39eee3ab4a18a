//! `webwrap domain <url>`.

use anyhow::{Context, Result};
use webwrap_core::url_model;

pub fn run_domain(url: &str) -> Result<()> {
    let domain = url_model::extract_domain(Some(url)).context("no domain extracted")?;
    println!("{domain}");
    Ok(())
}
