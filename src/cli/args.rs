//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate an RSS feed and an index page from a directory of HTML posts
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Directory containing the posts (default: current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Config file name, searched upward from the posts directory
    #[arg(short = 'C', long, default_value = "stuff.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Report each step of the run
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stuff-feed"]);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.dir, None);
        assert_eq!(cli.config, PathBuf::from("stuff.toml"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "stuff-feed",
            "--color",
            "never",
            "-d",
            "posts",
            "-C",
            "site.toml",
            "-v",
        ]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.dir, Some(PathBuf::from("posts")));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["stuff-feed", "build"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
