//! CLI for the WebWrap native helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use webwrap_core::config::{self, WebwrapConfig};

use commands::{
    run_check, run_completions, run_domain, run_manpage, run_normalize, run_resize,
    run_validate, run_version, ResizeRequest,
};

/// Top-level CLI for the WebWrap native helpers.
#[derive(Debug, Parser)]
#[command(name = "webwrap")]
#[command(about = "WebWrap: URL and bitmap helpers for the WebView wrapper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a URL is acceptable (prints "valid" or "invalid").
    Validate {
        /// URL exactly as entered; not trimmed.
        url: String,
    },

    /// Normalize a URL: trim, default to https://, lowercase the host.
    Normalize {
        /// URL as entered.
        url: String,
    },

    /// Print the domain of a URL (scheme, port and path stripped).
    Domain {
        /// URL as entered.
        url: String,
    },

    /// Normalize then validate; fails if the result is not an acceptable URL.
    Check {
        /// URL as entered.
        url: String,
    },

    /// Resize a raw RGBA_8888 pixel file with nearest-neighbour sampling.
    Resize {
        /// Raw input file (width * height * 4 bytes).
        input: PathBuf,

        /// Where to write the resized raw pixels.
        output: PathBuf,

        /// Width of the input in pixels.
        #[arg(long)]
        width: u32,

        /// Height of the input in pixels.
        #[arg(long)]
        height: u32,

        /// Target width; without a target the image is fitted within image.max_size.
        #[arg(long, requires = "to_height")]
        to_width: Option<u32>,

        /// Target height.
        #[arg(long, requires = "to_width")]
        to_height: Option<u32>,
    },

    /// Print the native library version.
    Version,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page.
    Manpage,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run_with(config::load_or_init)
    }

    /// Run the command. `load_config` is only called by commands that read the config.
    pub fn run_with(self, load_config: impl FnOnce() -> Result<WebwrapConfig>) -> Result<()> {
        match self {
            CliCommand::Validate { url } => run_validate(&url),
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Domain { url } => run_domain(&url)?,
            CliCommand::Check { url } => run_check(&url)?,
            CliCommand::Resize {
                input,
                output,
                width,
                height,
                to_width,
                to_height,
            } => {
                let req = ResizeRequest {
                    input,
                    output,
                    width,
                    height,
                    target: to_width.zip(to_height),
                };
                let cfg = load_config()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_resize(&req, &cfg)?;
            }
            CliCommand::Version => run_version(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
