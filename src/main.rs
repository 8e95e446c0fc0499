//! stuff-feed - regenerate the feed and index for a directory of HTML posts.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use stuff_feed::{cli::Cli, config::SiteConfig, generator::build_all, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    build_all(&config)
}
