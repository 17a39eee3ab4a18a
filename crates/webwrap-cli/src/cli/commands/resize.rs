//! `webwrap resize` – nearest-neighbour resize of a raw RGBA_8888 file.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use webwrap_core::config::WebwrapConfig;
use webwrap_core::image;

/// Arguments of one resize invocation.
#[derive(Debug, Clone)]
pub struct ResizeRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Explicit `(width, height)`; `None` fits within `image.max_size`.
    pub target: Option<(u32, u32)>,
}

/// Resize `req.input` into `req.output`. Returns the output dimensions.
pub fn run_resize(req: &ResizeRequest, cfg: &WebwrapConfig) -> Result<(u32, u32)> {
    let (dst_width, dst_height) = req
        .target
        .unwrap_or_else(|| image::fit_within(req.width, req.height, cfg.image.max_size));

    let pixels =
        fs::read(&req.input).with_context(|| format!("read {}", req.input.display()))?;
    let resized = image::resize_rgba(&pixels, req.width, req.height, dst_width, dst_height)
        .with_context(|| format!("resize {}", req.input.display()))?;
    fs::write(&req.output, resized)
        .with_context(|| format!("write {}", req.output.display()))?;

    println!(
        "{}x{} -> {}x{}: {}",
        req.width,
        req.height,
        dst_width,
        dst_height,
        req.output.display()
    );
    Ok((dst_width, dst_height))
}
