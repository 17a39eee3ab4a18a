//! `webwrap normalize <url>`.

use anyhow::{Context, Result};
use webwrap_core::url_model;

pub fn run_normalize(url: &str) -> Result<()> {
    let normalized = url_model::normalize(Some(url)).context("normalize returned no value")?;
    println!("{normalized}");
    Ok(())
}
