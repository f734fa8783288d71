//! File configuration for the `court` binary.
//!
//! Loaded from TOML; every key is optional and falls back to the library
//! defaults.  Command-line flags are layered on top with [`CourtConfig::apply`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use hs_core::SimConfig;
use serde::Deserialize;

/// History log written when neither the file nor the flags name one.
pub const DEFAULT_LOG_PATH: &str = "history.log";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourtConfig {
    pub sim:    SimConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub log:        PathBuf,
    pub csv_dir:    Option<PathBuf>,
    pub sqlite_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { log: PathBuf::from(DEFAULT_LOG_PATH), csv_dir: None, sqlite_dir: None }
    }
}

/// Values given on the command line.  `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub turns:      Option<u64>,
    pub seed:       Option<u64>,
    pub delay_ms:   Option<u64>,
    pub log:        Option<PathBuf>,
    pub csv_dir:    Option<PathBuf>,
    pub sqlite_dir: Option<PathBuf>,
}

impl CourtConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(&mut self, o: Overrides) {
        if let Some(n) = o.turns {
            self.sim.max_turns = n;
        }
        if o.seed.is_some() {
            self.sim.seed = o.seed;
        }
        if let Some(ms) = o.delay_ms {
            self.sim.turn_delay_ms = ms;
        }
        if let Some(log) = o.log {
            self.output.log = log;
        }
        if o.csv_dir.is_some() {
            self.output.csv_dir = o.csv_dir;
        }
        if o.sqlite_dir.is_some() {
            self.output.sqlite_dir = o.sqlite_dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = CourtConfig::parse("").unwrap();
        assert_eq!(cfg.sim, SimConfig::default());
        assert_eq!(cfg.output.log, PathBuf::from(DEFAULT_LOG_PATH));
        assert!(cfg.output.csv_dir.is_none());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = CourtConfig::parse(
            "[sim]\nmax_turns = 7\nseed = 3\n\n[sim.odds]\ninjury = 1.0\n\n[output]\ncsv_dir = \"out\"\n",
        )
        .unwrap();
        assert_eq!(cfg.sim.max_turns, 7);
        assert_eq!(cfg.sim.seed, Some(3));
        assert_eq!(cfg.sim.turn_delay_ms, 1_000);
        assert_eq!(cfg.sim.odds.injury, 1.0);
        assert_eq!(cfg.sim.odds.spy_discovery, 0.3);
        assert_eq!(cfg.output.csv_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn flags_override_file_values() {
        let mut cfg = CourtConfig::parse("[sim]\nmax_turns = 7\nseed = 3\n").unwrap();
        cfg.apply(Overrides {
            turns: Some(12),
            delay_ms: Some(0),
            log: Some(PathBuf::from("run.log")),
            ..Overrides::default()
        });
        assert_eq!(cfg.sim.max_turns, 12);
        assert_eq!(cfg.sim.seed, Some(3));
        assert_eq!(cfg.sim.turn_delay_ms, 0);
        assert_eq!(cfg.output.log, PathBuf::from("run.log"));
    }

    #[test]
    fn bad_types_are_rejected() {
        assert!(CourtConfig::parse("[sim]\nmax_turns = \"many\"\n").is_err());
    }

    #[test]
    fn sample_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("court.toml");
        let cfg = CourtConfig::load(&path).unwrap();
        assert_eq!(cfg.sim, SimConfig::default());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = CourtConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"));
    }
}
