use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use landfall_world::DEFAULT_SEED;
use serde::Deserialize;

/// Title used when neither the command line nor the config file names one.
pub(crate) const DEFAULT_WINDOW_TITLE: &str = "Landfall";
/// Glyph cell edge in pixels used when no size is configured.
pub(crate) const DEFAULT_CELL_SIZE: f32 = 12.0;

/// Landfall - explore the planet you just landed on
#[derive(Debug, Parser)]
#[command(name = "landfall", version, long_about = None)]
pub(crate) struct Args {
    /// Seed used to generate the world
    #[arg(long, conflicts_with = "random_seed")]
    pub(crate) seed: Option<u64>,

    /// Draw the world seed from the operating system
    #[arg(long)]
    pub(crate) random_seed: bool,

    /// TOML file with launch settings
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Render frames as text on stdout instead of opening a window
    #[arg(long)]
    pub(crate) headless: bool,

    /// Keys replayed in headless mode (w/a/s/d move, f fullscreen, q quit)
    #[arg(long, value_name = "KEYS", requires = "headless")]
    pub(crate) script: Option<String>,

    /// Edge length of a glyph cell in pixels
    #[arg(long, value_name = "PX")]
    pub(crate) cell_size: Option<f32>,

    /// Start in fullscreen mode
    #[arg(long)]
    pub(crate) fullscreen: bool,
}

/// Launch settings read from a TOML file. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LaunchConfig {
    seed: Option<u64>,
    window_title: Option<String>,
    cell_size: Option<f32>,
    fullscreen: Option<bool>,
}

impl LaunchConfig {
    /// Reads and parses the config file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse launch config TOML")
    }
}

/// Effective settings after merging the command line over the config file.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    pub(crate) seed: u64,
    pub(crate) window_title: String,
    pub(crate) cell_size: f32,
    pub(crate) fullscreen: bool,
    pub(crate) headless: bool,
    pub(crate) script: Option<String>,
}

impl Settings {
    /// Command-line values win over file values, which win over defaults.
    ///
    /// `entropy` is only consulted when `--random-seed` was passed.
    pub(crate) fn resolve(args: Args, file: LaunchConfig, entropy: impl FnOnce() -> u64) -> Self {
        let seed = if args.random_seed {
            entropy()
        } else {
            args.seed.or(file.seed).unwrap_or(DEFAULT_SEED)
        };

        Self {
            seed,
            window_title: file
                .window_title
                .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_owned()),
            cell_size: args
                .cell_size
                .or(file.cell_size)
                .unwrap_or(DEFAULT_CELL_SIZE),
            fullscreen: args.fullscreen || file.fullscreen.unwrap_or(false),
            headless: args.headless,
            script: args.script,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("landfall").chain(extra.iter().copied()))
            .expect("arguments parse")
    }

    fn no_entropy() -> u64 {
        panic!("entropy must not be drawn without --random-seed")
    }

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let settings = Settings::resolve(args(&[]), LaunchConfig::default(), no_entropy);

        assert_eq!(
            settings,
            Settings {
                seed: DEFAULT_SEED,
                window_title: DEFAULT_WINDOW_TITLE.to_owned(),
                cell_size: DEFAULT_CELL_SIZE,
                fullscreen: false,
                headless: false,
                script: None,
            }
        );
    }

    #[test]
    fn file_values_fill_in_missing_flags() {
        let file = LaunchConfig::parse(
            "seed = 42\nwindow_title = \"Crash Site\"\ncell_size = 16.0\nfullscreen = true\n",
        )
        .expect("valid config");

        let settings = Settings::resolve(args(&[]), file, no_entropy);

        assert_eq!(settings.seed, 42);
        assert_eq!(settings.window_title, "Crash Site");
        assert_eq!(settings.cell_size, 16.0);
        assert!(settings.fullscreen);
    }

    #[test]
    fn flags_override_file_values() {
        let file = LaunchConfig::parse("seed = 42\ncell_size = 16.0\n").expect("valid config");

        let settings = Settings::resolve(
            args(&["--seed", "7", "--cell-size", "8"]),
            file,
            no_entropy,
        );

        assert_eq!(settings.seed, 7);
        assert_eq!(settings.cell_size, 8.0);
    }

    #[test]
    fn random_seed_draws_from_entropy() {
        let file = LaunchConfig::parse("seed = 42\n").expect("valid config");

        let settings = Settings::resolve(args(&["--random-seed"]), file, || 99);

        assert_eq!(settings.seed, 99);
    }

    #[test]
    fn seed_flags_are_mutually_exclusive() {
        let result = Args::try_parse_from(["landfall", "--seed", "1", "--random-seed"]);
        assert!(result.is_err());
    }

    #[test]
    fn script_requires_headless() {
        assert!(Args::try_parse_from(["landfall", "--script", "wasd"]).is_err());

        let settings = Settings::resolve(
            args(&["--headless", "--script", "wasd"]),
            LaunchConfig::default(),
            no_entropy,
        );
        assert!(settings.headless);
        assert_eq!(settings.script.as_deref(), Some("wasd"));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        assert!(LaunchConfig::parse("speed = 3\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let error = LaunchConfig::load(Path::new("/definitely/not/here/landfall.toml"))
            .expect_err("missing file");
        assert!(error.to_string().contains("failed to read config file"));
    }
}
